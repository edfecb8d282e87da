use core::fmt;

use serde::{Deserialize, Serialize};

/// Фаза раунда. Машина повторяет главную кнопку фронта:
/// Init → Start → Continue → End, из End снова в Start.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum GamePhase {
    Init,
    Start,
    Continue,
    End,
}

impl GamePhase {
    /// Куда ведёт нажатие главной кнопки из этой фазы.
    pub fn advance(self) -> GamePhase {
        match self {
            GamePhase::Init | GamePhase::End => GamePhase::Start,
            GamePhase::Start => GamePhase::Continue,
            GamePhase::Continue => GamePhase::End,
        }
    }

    /// Открыто ли окно замены карт.
    pub fn replacement_open(self) -> bool {
        matches!(self, GamePhase::Start | GamePhase::Continue)
    }
}

impl fmt::Display for GamePhase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            GamePhase::Init => "INIT",
            GamePhase::Start => "START",
            GamePhase::Continue => "CONTINUE",
            GamePhase::End => "END",
        };
        f.write_str(s)
    }
}
