//! Игровой слой поверх движка — то, что во фронте было redux-сторами
//! `game` и `dialog`:
//! - `phase` — фазовая машина раунда (INIT → START → CONTINUE → END);
//! - `round` — контроллер раунда: движок, руки, одноразовые замены;
//! - `dialog` — типизированные payload'ы диалогов вместо duck-typed;
//! - `errors` — ошибки слоя (то, что фронт показывает игроку).

pub mod dialog;
pub mod errors;
pub mod phase;
pub mod round;

pub use dialog::{round_result_dialog, DialogKind, DialogPayload};
pub use errors::GameError;
pub use phase::GamePhase;
pub use round::RoundController;
