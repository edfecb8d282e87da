use crate::domain::card::Card;
use crate::domain::hand::{Hand, HandRank, RankedHand};
use crate::engine::errors::EngineError;

use super::hand_rank::HandCategory;

/// Битовая маска рангов: бит 0 — двойка, бит 12 — туз.
type RankMask = u16;

/// A-2-3-4-5, "колесо": туз играет как младшая карта.
const WHEEL: RankMask = (1 << 12) | 0b1111;

/// Классифицировать ровно пять карт.
///
/// Флеш и стрит проверяются независимо, затем категории применяются
/// по старшинству. Любой другой размер руки — `InvalidHandSize`.
pub fn evaluate(cards: &[Card]) -> Result<HandRank, EngineError> {
    if cards.len() != 5 {
        return Err(EngineError::InvalidHandSize(cards.len()));
    }

    let mut rank_counts = [0u8; 15]; // индексы 2..=14
    let mut mask: RankMask = 0;
    for card in cards {
        rank_counts[card.rank as usize] += 1;
        mask |= 1 << (card.rank as u8 - 2);
    }

    let is_flush = cards.iter().all(|c| c.suit == cards[0].suit);
    let straight_high = straight_high(mask);

    // Straight flush.
    if let Some(high) = straight_high {
        if is_flush {
            return Ok(HandRank::encode(
                HandCategory::StraightFlush,
                [high, 0, 0, 0, 0],
            ));
        }
    }

    // Группы (ранг, количество): большие группы вперёд,
    // при равном размере — старший ранг вперёд.
    let mut groups: Vec<(u8, u8)> = (2u8..=14)
        .filter(|&r| rank_counts[r as usize] > 0)
        .map(|r| (r, rank_counts[r as usize]))
        .collect();
    groups.sort_by(|a, b| b.1.cmp(&a.1).then(b.0.cmp(&a.0)));

    // Four of a kind: каре + кикер.
    if groups[0].1 == 4 {
        return Ok(HandRank::encode(
            HandCategory::FourOfAKind,
            [groups[0].0, groups[1].0, 0, 0, 0],
        ));
    }

    // Full house: тройка + пара.
    if groups[0].1 == 3 && groups.len() == 2 {
        return Ok(HandRank::encode(
            HandCategory::FullHouse,
            [groups[0].0, groups[1].0, 0, 0, 0],
        ));
    }

    // Flush: все пять рангов по убыванию.
    if is_flush {
        return Ok(HandRank::encode(
            HandCategory::Flush,
            ranks_descending(cards),
        ));
    }

    // Straight: решает только старшая карта
    // (у колеса это пятёрка, не туз).
    if let Some(high) = straight_high {
        return Ok(HandRank::encode(HandCategory::Straight, [high, 0, 0, 0, 0]));
    }

    // Three of a kind: тройка + два кикера.
    if groups[0].1 == 3 {
        return Ok(HandRank::encode(
            HandCategory::ThreeOfAKind,
            [groups[0].0, groups[1].0, groups[2].0, 0, 0],
        ));
    }

    // Two pair: старшая пара, младшая пара, кикер.
    if groups[0].1 == 2 && groups[1].1 == 2 {
        return Ok(HandRank::encode(
            HandCategory::TwoPair,
            [groups[0].0, groups[1].0, groups[2].0, 0, 0],
        ));
    }

    // One pair: пара + три кикера.
    if groups[0].1 == 2 {
        return Ok(HandRank::encode(
            HandCategory::OnePair,
            [groups[0].0, groups[1].0, groups[2].0, groups[3].0, 0],
        ));
    }

    // High card: пять рангов по убыванию.
    Ok(HandRank::encode(
        HandCategory::HighCard,
        ranks_descending(cards),
    ))
}

/// Классифицировать руку целиком: владелец + имя + ранг.
pub fn rank_hand(hand: &Hand) -> Result<RankedHand, EngineError> {
    let rank = evaluate(&hand.cards)?;
    Ok(RankedHand {
        owner: hand.owner,
        name: rank.name().to_string(),
        hand_rank: rank,
    })
}

/// Старшая карта стрита, если пять рангов образуют стрит.
///
/// Окно из пяти подряд идущих бит проверяется от бродвея (туз сверху)
/// вниз, колесо A-2-3-4-5 — отдельным случаем со старшей пятёркой.
fn straight_high(mask: RankMask) -> Option<u8> {
    for high in (6u8..=14).rev() {
        let window: RankMask = 0b1_1111 << (high - 6);
        if mask & window == window {
            return Some(high);
        }
    }
    if mask & WHEEL == WHEEL {
        return Some(5);
    }
    None
}

/// Пять рангов руки по убыванию (для флеша и старшей карты).
fn ranks_descending(cards: &[Card]) -> [u8; 5] {
    let mut ranks = [0u8; 5];
    for (slot, card) in ranks.iter_mut().zip(cards) {
        *slot = card.rank as u8;
    }
    ranks.sort_unstable_by(|a, b| b.cmp(a));
    ranks
}
