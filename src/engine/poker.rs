use crate::domain::card::Card;
use crate::domain::hand::{Hand, Owner, RankedHand};
use crate::engine::deck::{DeckManager, DrawOptions};
use crate::engine::errors::EngineError;
use crate::engine::RandomSource;
use crate::eval::rank_hand;

/// Размер руки в draw-покере.
pub const HAND_SIZE: usize = 5;

/// Фасад движка. Один экземпляр — один раунд: свежая колода при
/// создании, никакого состояния между раундами. Новый раунд = новый
/// `Poker`, чтобы карты прошлого раунда не "протекали" в следующий.
#[derive(Clone, Debug)]
pub struct Poker {
    deck: DeckManager,
}

impl Poker {
    /// Свежая колода, перемешанная системным RNG.
    pub fn new() -> Self {
        let mut rng = crate::infra::SystemRng::default();
        Self::with_rng(&mut rng)
    }

    /// Колода, перемешанная внешним RNG — для тестов и реплея раздач.
    pub fn with_rng<R: RandomSource>(rng: &mut R) -> Self {
        Self {
            deck: DeckManager::shuffled(rng),
        }
    }

    /// Сколько карт осталось в колоде.
    pub fn remaining_cards(&self) -> usize {
        self.deck.remaining()
    }

    /// Раздать руку из пяти карт.
    ///
    /// Два вызова на одном экземпляре дают 10 попарно различных карт.
    pub fn deal_hand(&mut self, owner: Owner, options: DrawOptions) -> Result<Hand, EngineError> {
        let cards = self.deck.draw(HAND_SIZE, options)?;
        Ok(Hand::new(owner, cards))
    }

    /// Заменить одну карту в руке.
    ///
    /// Карта ищется по id; если её в руке нет — `CardNotFound`, рука
    /// не меняется. Добор идёт с флагом `disabled`, новая карта встаёт
    /// на место сброшенной (позиция важна для отрисовки). Сброшенная
    /// карта остаётся снятой с колоды до конца раунда.
    pub fn replace(&mut self, card: &Card, hand: &Hand) -> Result<(Hand, Card), EngineError> {
        let index = hand
            .position_of(card.id)
            .ok_or(EngineError::CardNotFound(card.id))?;

        let new_card = self.deck.draw(1, DrawOptions::replacement())?[0];

        let mut cards = hand.cards.clone();
        cards[index] = new_card;
        Ok((Hand::new(hand.owner, cards), new_card))
    }

    /// Ранжировать руки и вернуть их от сильнейшей к слабейшей.
    ///
    /// Результат не зависит от порядка входа: при равном ранге порядок
    /// задаёт владелец, а сама ничья видна вызывающему по равным
    /// `hand_rank` (оба — со-победители, движок никого не выбирает).
    pub fn winner(&self, hands: &[Hand]) -> Result<Vec<RankedHand>, EngineError> {
        let mut ranked = Vec::with_capacity(hands.len());
        for hand in hands {
            ranked.push(rank_hand(hand)?);
        }
        ranked.sort_by(|a, b| {
            b.hand_rank
                .cmp(&a.hand_rank)
                .then_with(|| a.owner.cmp(&b.owner))
        });
        Ok(ranked)
    }
}

impl Default for Poker {
    fn default() -> Self {
        Self::new()
    }
}
