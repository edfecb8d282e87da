use std::collections::HashSet;

use crate::domain::card::Card;
use crate::domain::hand::{Hand, Owner, RankedHand};
use crate::domain::CardId;
use crate::engine::{DrawOptions, Poker, RandomSource};
use crate::game::dialog::{round_result_dialog, DialogPayload};
use crate::game::errors::GameError;
use crate::game::phase::GamePhase;

/// Контроллер раунда: владеет движком и тем состоянием, которое во
/// фронте было размазано по сторам — фаза, обе руки, список
/// "эту карту уже меняли", видимость карт дилера, победители.
///
/// Новый раунд всегда создаёт новый `Poker`: полная колода,
/// ни одна карта прошлого раунда не протекает в следующий.
pub struct RoundController {
    phase: GamePhase,
    poker: Option<Poker>,
    dealer: Option<Hand>,
    player: Option<Hand>,
    /// Id карт, которые больше нельзя менять (бывший clickOnceList).
    locked: HashSet<CardId>,
    winners: Vec<RankedHand>,
    dealer_hidden: bool,
}

impl RoundController {
    pub fn new() -> Self {
        Self {
            phase: GamePhase::Init,
            poker: None,
            dealer: None,
            player: None,
            locked: HashSet::new(),
            winners: Vec::new(),
            dealer_hidden: true,
        }
    }

    pub fn phase(&self) -> GamePhase {
        self.phase
    }

    pub fn dealer_hand(&self) -> Option<&Hand> {
        self.dealer.as_ref()
    }

    pub fn player_hand(&self) -> Option<&Hand> {
        self.player.as_ref()
    }

    /// Итоги раунда (пусто до `finish_round`), сильнейшая рука первой.
    pub fn winners(&self) -> &[RankedHand] {
        &self.winners
    }

    /// Прячет ли фронт карты дилера (до конца раунда — да).
    pub fn dealer_hidden(&self) -> bool {
        self.dealer_hidden
    }

    /// Начать новый раунд: свежий движок, две руки по пять карт,
    /// чистый список замен. Разрешено из Init и End.
    pub fn start_round<R: RandomSource>(&mut self, rng: &mut R) -> Result<(), GameError> {
        if !matches!(self.phase, GamePhase::Init | GamePhase::End) {
            return Err(GameError::PhaseViolation(self.phase));
        }

        let mut poker = Poker::with_rng(rng);
        let dealer = poker.deal_hand(Owner::Dealer, DrawOptions::default())?;
        let player = poker.deal_hand(Owner::Player, DrawOptions::default())?;

        self.poker = Some(poker);
        self.dealer = Some(dealer);
        self.player = Some(player);
        self.locked.clear();
        self.winners.clear();
        self.dealer_hidden = true;
        self.phase = GamePhase::Start;
        Ok(())
    }

    /// Кнопка "Continue": Start → Continue.
    pub fn continue_round(&mut self) -> Result<(), GameError> {
        if self.phase != GamePhase::Start {
            return Err(GameError::PhaseViolation(self.phase));
        }
        self.phase = GamePhase::Continue;
        Ok(())
    }

    /// Заменить карту в руке игрока.
    ///
    /// Каждую физическую карту можно заменить один раз; добранная
    /// взамен карта тоже одноразовая (она приходит с флагом `disabled`
    /// и попадает в список замен). Возвращает новую карту.
    pub fn replace_card(&mut self, id: CardId) -> Result<Card, GameError> {
        if !self.phase.replacement_open() {
            return Err(GameError::PhaseViolation(self.phase));
        }
        let poker = self.poker.as_mut().ok_or(GameError::NoActiveRound)?;
        let player = self.player.as_ref().ok_or(GameError::NoActiveRound)?;

        let card = *player.card(id).ok_or(GameError::CardNotInHand(id))?;
        if card.disabled || self.locked.contains(&id) {
            return Err(GameError::AlreadyReplaced(id));
        }

        let (hand, new_card) = poker.replace(&card, player)?;
        self.player = Some(hand);
        self.locked.insert(new_card.id);
        Ok(new_card)
    }

    /// Завершить раунд: открыть карты дилера, ранжировать руки,
    /// собрать итоговый диалог.
    pub fn finish_round(&mut self) -> Result<DialogPayload, GameError> {
        if !self.phase.replacement_open() {
            return Err(GameError::PhaseViolation(self.phase));
        }
        let poker = self.poker.as_ref().ok_or(GameError::NoActiveRound)?;
        let dealer = self.dealer.clone().ok_or(GameError::NoActiveRound)?;
        let player = self.player.clone().ok_or(GameError::NoActiveRound)?;

        self.winners = poker.winner(&[player, dealer])?;
        self.dealer_hidden = false;
        self.phase = GamePhase::End;
        Ok(round_result_dialog(&self.winners[0], &self.winners[1]))
    }
}

impl Default for RoundController {
    fn default() -> Self {
        Self::new()
    }
}
