//! Движок однопользовательского draw-покера: дилер против игрока,
//! по пять карт, каждую карту игрок может один раз заменить,
//! победитель определяется по стандартному покерному рангу.
//!
//! Слои:
//! - `domain` — карты, колода, руки (чистые значения);
//! - `engine` — фасад `Poker`: раздача, замена, сравнение рук;
//! - `eval` — классификация 5-карточной руки и tie-break;
//! - `game` — фазовая машина раунда, контроллер и диалоги
//!   (то, что во фронте было сторами `game` / `dialog`);
//! - `infra` — реализации RNG (native / wasm).
//!
//! Рендеринг, ставки и кредиты остаются на стороне фронта:
//! движок возвращает значения, ничего не рисует и не хранит
//! состояние между раундами. Один раунд = один экземпляр `Poker`.

pub mod domain;
pub mod engine;
pub mod eval;
pub mod game;
pub mod infra;

pub use engine::{EngineError, Poker, RandomSource};
pub use game::{DialogPayload, GameError, GamePhase, RoundController};
