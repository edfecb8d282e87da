use core::fmt;

use serde::{Deserialize, Serialize};

use crate::domain::card::Card;
use crate::domain::CardId;

/// Кому принадлежит рука. Во фронте это строки `"dealer"` / `"player"`.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[serde(rename_all = "lowercase")]
pub enum Owner {
    Dealer,
    Player,
}

impl fmt::Display for Owner {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Owner::Dealer => write!(f, "dealer"),
            Owner::Player => write!(f, "player"),
        }
    }
}

/// Рука: владелец и упорядоченная пятёрка карт.
///
/// Порядок карт важен только для отрисовки (замена встаёт на место
/// сброшенной карты), ранжирование от порядка не зависит.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct Hand {
    pub owner: Owner,
    pub cards: Vec<Card>,
}

impl Hand {
    pub fn new(owner: Owner, cards: Vec<Card>) -> Self {
        Self { owner, cards }
    }

    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Позиция карты с данным id, если она в руке.
    pub fn position_of(&self, id: CardId) -> Option<usize> {
        self.cards.iter().position(|c| c.id == id)
    }

    /// Найти карту по id.
    pub fn card(&self, id: CardId) -> Option<&Card> {
        self.cards.iter().find(|c| c.id == id)
    }
}

/// Ранг руки, упакованный в одно число.
///
/// Сравнение `u32` — это полное покерное сравнение: старше категория →
/// старше число; внутри категории решают tie-break ранги. Равенство
/// значений означает настоящую ничью (совпали категория и все
/// решающие карты). Кодировку заполняет `eval`.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct HandRank(pub u32);

/// Результат классификации одной руки — то, что `winner()` отдаёт
/// фронту: владелец, человекочитаемое имя комбинации и ранг.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct RankedHand {
    pub owner: Owner,
    /// "Two Pair", "Full House" и т.п. — идёт прямо в текст диалога.
    pub name: String,
    pub hand_rank: HandRank,
}
