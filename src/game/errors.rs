use thiserror::Error;

use crate::domain::CardId;
use crate::engine::EngineError;
use crate::game::phase::GamePhase;

/// Ошибки игрового слоя — то, что фронт показывает в диалоге.
///
/// Ошибки движка заворачиваются как есть: движок их не ловит,
/// слой выше решает, как показать.
#[derive(Debug, Error)]
pub enum GameError {
    #[error("Раунд не начат")]
    NoActiveRound,

    #[error("Действие недоступно в фазе {0}")]
    PhaseViolation(GamePhase),

    #[error("Карта id={0} уже была заменена")]
    AlreadyReplaced(CardId),

    #[error("Карты id={0} нет в руке игрока")]
    CardNotInHand(CardId),

    #[error(transparent)]
    Engine(#[from] EngineError),
}
