use thiserror::Error;

use crate::domain::CardId;

/// Ошибки движка раунда.
///
/// Движок свои ошибки не ловит: любой отказ доезжает до игрового
/// слоя и показывается как диалог. Ретраев нет — добор либо
/// детерминированно удаётся, либо колода исчерпана навсегда
/// (для этого экземпляра).
#[derive(Debug, Error)]
pub enum EngineError {
    #[error("В колоде осталось {remaining} карт, запрошено {requested}")]
    ExhaustedDeck { requested: usize, remaining: usize },

    #[error("Карты с id={0} нет в руке")]
    CardNotFound(CardId),

    #[error("Для ранжирования нужно ровно 5 карт, получено {0}")]
    InvalidHandSize(usize),
}
