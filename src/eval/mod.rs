//! Оценка силы 5-карточной руки.
//!
//! Основные функции:
//!   `evaluate(cards) -> HandRank` — классификация и tie-break;
//!   `rank_hand(hand) -> RankedHand` — то же, но с владельцем и именем.

pub mod evaluator;
pub mod hand_rank;

pub use evaluator::{evaluate, rank_hand};
pub use hand_rank::HandCategory;
