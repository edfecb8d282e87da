//! Доменная модель игры: карты, колода, руки.

pub mod card;
pub mod hand;

/// Стабильный идентификатор карты: 0..=51, выводится из (масть, ранг).
/// Фронт использует его для "эту карту уже меняли".
pub type CardId = u8;

// Удобные реэкспорты, чтобы в других модулях писать crate::domain::Card и т.п.
pub use card::*;
pub use hand::*;
