use serde::{Deserialize, Serialize};

use crate::domain::hand::{Owner, RankedHand};
use crate::game::errors::GameError;

/// Тип диалога. Вместо произвольного renderable-содержимого фронта —
/// тегированный вариант, по которому фронт выбирает оформление.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub enum DialogKind {
    Info,
    Winner,
    Loser,
    Error,
}

/// Содержимое диалога: тип, заголовок, текст.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct DialogPayload {
    pub kind: DialogKind,
    pub title: String,
    pub body: String,
}

impl DialogPayload {
    pub fn winner(body: impl Into<String>) -> Self {
        Self {
            kind: DialogKind::Winner,
            title: "🎉 Congratulations you won!".to_string(),
            body: body.into(),
        }
    }

    pub fn loser(body: impl Into<String>) -> Self {
        Self {
            kind: DialogKind::Loser,
            title: "😕 Sorry you lost!".to_string(),
            body: body.into(),
        }
    }

    pub fn info(title: impl Into<String>, body: impl Into<String>) -> Self {
        Self {
            kind: DialogKind::Info,
            title: title.into(),
            body: body.into(),
        }
    }

    pub fn error(err: &GameError) -> Self {
        Self {
            kind: DialogKind::Error,
            title: "Error".to_string(),
            body: err.to_string(),
        }
    }
}

/// Собрать диалог по итогам раунда.
///
/// Руки уже упорядочены движком: `best` сильнее либо равна `other`.
/// Равный `hand_rank` — настоящая ничья, победителя нет, фронт
/// показывает нейтральный диалог. Совпадение имён при разном ранге —
/// одна категория, решили кикеры ("higher ranked" в тексте).
pub fn round_result_dialog(best: &RankedHand, other: &RankedHand) -> DialogPayload {
    if best.hand_rank == other.hand_rank {
        return DialogPayload::info(
            "Push!",
            format!(
                "Both hands rank equal: {} against {}.",
                best.name, other.name
            ),
        );
    }

    match best.owner {
        Owner::Player => {
            let body = if best.name == other.name {
                format!(
                    "You Won with the {} higher ranked hand, dealer also had {} but lower ranked",
                    best.name, other.name
                )
            } else {
                format!("You Won with the {} hand! Dealer had {}", best.name, other.name)
            };
            DialogPayload::winner(body)
        }
        Owner::Dealer => {
            let body = if best.name == other.name {
                format!(
                    "You Lost with the {} lower ranked hand, dealer also had {} but higher ranked",
                    other.name, best.name
                )
            } else {
                format!("You Lost with the {} hand! Dealer had {}", other.name, best.name)
            };
            DialogPayload::loser(body)
        }
    }
}
