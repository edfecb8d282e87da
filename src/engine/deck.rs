use crate::domain::card::{Card, RANKS, SUITS};
use crate::engine::errors::EngineError;
use crate::engine::RandomSource;

/// Опции одного вызова `draw`.
#[derive(Clone, Copy, Debug, Default)]
pub struct DrawOptions {
    /// Пометить добранные карты флагом `disabled`
    /// (так помечается добор при замене: новую карту менять уже нельзя).
    pub disabled: bool,
}

impl DrawOptions {
    /// Опции добора при замене.
    pub const fn replacement() -> Self {
        Self { disabled: true }
    }
}

/// Менеджер колоды: владеет пулом ещё не розданных карт.
///
/// Колода материализуется один раз — 52 карты, перемешанные при
/// создании — и потребляется с конца. Снятая карта в пул не
/// возвращается никогда, поэтому инвариант "среди карт в игре нет
/// двух с одной личностью" держится сам собой, включая замены:
/// сброшенная карта уже снята и добор её не вернёт.
#[derive(Clone, Debug)]
pub struct DeckManager {
    remaining: Vec<Card>,
    dealt: usize,
}

impl DeckManager {
    /// Полная колода, перемешанная данным RNG.
    pub fn shuffled<R: RandomSource>(rng: &mut R) -> Self {
        let mut remaining = Vec::with_capacity(52);
        for suit in SUITS {
            for rank in RANKS {
                remaining.push(Card::new(rank, suit));
            }
        }
        rng.shuffle(&mut remaining);
        Self { remaining, dealt: 0 }
    }

    /// Сколько карт ещё не роздано.
    pub fn remaining(&self) -> usize {
        self.remaining.len()
    }

    /// Сколько карт уже снято.
    pub fn dealt(&self) -> usize {
        self.dealt
    }

    /// Снять `count` карт.
    ///
    /// Проверка на исчерпание идёт до снятия первой карты:
    /// при `ExhaustedDeck` колода остаётся нетронутой.
    pub fn draw(&mut self, count: usize, options: DrawOptions) -> Result<Vec<Card>, EngineError> {
        if count > self.remaining.len() {
            return Err(EngineError::ExhaustedDeck {
                requested: count,
                remaining: self.remaining.len(),
            });
        }

        let mut taken = Vec::with_capacity(count);
        for _ in 0..count {
            let card = self.remaining.pop().expect("размер проверен выше");
            taken.push(if options.disabled {
                card.mark_disabled()
            } else {
                card
            });
        }
        self.dealt += count;
        Ok(taken)
    }
}
