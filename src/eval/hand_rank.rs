use core::fmt;

use serde::{Deserialize, Serialize};

use crate::domain::hand::HandRank;

/// Категория покерной руки по силе.
/// Старшая категория бьёт младшую независимо от карт.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord)]
pub enum HandCategory {
    HighCard = 0,
    OnePair = 1,
    TwoPair = 2,
    ThreeOfAKind = 3,
    Straight = 4,
    Flush = 5,
    FullHouse = 6,
    FourOfAKind = 7,
    StraightFlush = 8,
}

impl HandCategory {
    /// Имя комбинации — ровно так, как его показывает фронт.
    pub fn name(self) -> &'static str {
        match self {
            HandCategory::HighCard => "High Card",
            HandCategory::OnePair => "One Pair",
            HandCategory::TwoPair => "Two Pair",
            HandCategory::ThreeOfAKind => "Three of a Kind",
            HandCategory::Straight => "Straight",
            HandCategory::Flush => "Flush",
            HandCategory::FullHouse => "Full House",
            HandCategory::FourOfAKind => "Four of a Kind",
            HandCategory::StraightFlush => "Straight Flush",
        }
    }
}

impl fmt::Display for HandCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl HandRank {
    /// Собрать HandRank из категории и решающих рангов.
    ///
    /// Схема кодирования (u32):
    ///   [категория:4 бита][t0:4][t1:4][t2:4][t3:4][t4:4]
    ///
    /// t0..t4 — ранги (2..=14) в порядке значимости: сначала
    /// определяющие группы категории, затем кикеры по убыванию,
    /// незначащие нибблы нулевые. Благодаря этому сравнение `u32` —
    /// это полное покерное сравнение, а равенство — настоящая ничья.
    pub fn encode(category: HandCategory, tiebreak: [u8; 5]) -> Self {
        let mut value = (category as u32) << 20;
        for (i, t) in tiebreak.iter().enumerate() {
            value |= ((*t as u32) & 0x0F) << (16 - 4 * i);
        }
        HandRank(value)
    }

    /// Вытащить категорию обратно из кодировки.
    pub fn category(self) -> HandCategory {
        match (self.0 >> 20) & 0x0F {
            1 => HandCategory::OnePair,
            2 => HandCategory::TwoPair,
            3 => HandCategory::ThreeOfAKind,
            4 => HandCategory::Straight,
            5 => HandCategory::Flush,
            6 => HandCategory::FullHouse,
            7 => HandCategory::FourOfAKind,
            8 => HandCategory::StraightFlush,
            _ => HandCategory::HighCard,
        }
    }

    /// Имя комбинации этого ранга.
    pub fn name(self) -> &'static str {
        self.category().name()
    }
}
