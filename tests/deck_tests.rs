//! Тесты менеджера колоды:
//! - 52 уникальные карты;
//! - отсутствие повторов между вызовами draw;
//! - исчерпание колоды (ExhaustedDeck) без частичного снятия;
//! - флаг disabled из DrawOptions;
//! - счётчики dealt/remaining.

use std::collections::HashSet;

use draw_poker_engine::domain::CardId;
use draw_poker_engine::engine::{DeckManager, DrawOptions, EngineError, RandomSource};
use draw_poker_engine::infra::DeterministicRng;

/// RNG-заглушка: ничего не перемешивает, колода в стандартном порядке.
#[derive(Default)]
struct DummyRng;

impl RandomSource for DummyRng {
    fn shuffle<T>(&mut self, _slice: &mut [T]) {
        // no-op
    }
}

//
// TEST 1 — fresh deck has 52 unique identities
//
#[test]
fn fresh_deck_counts() {
    let deck = DeckManager::shuffled(&mut DummyRng);
    assert_eq!(deck.remaining(), 52);
    assert_eq!(deck.dealt(), 0);
}

#[test]
fn drawing_everything_yields_52_unique_ids() {
    let mut deck = DeckManager::shuffled(&mut DeterministicRng::from_seed(7));
    let cards = deck.draw(52, DrawOptions::default()).unwrap();

    let ids: HashSet<CardId> = cards.iter().map(|c| c.id).collect();
    assert_eq!(ids.len(), 52, "all 52 identities must be distinct");
    assert_eq!(deck.remaining(), 0);
    assert_eq!(deck.dealt(), 52);
}

//
// TEST 2 — no repeats across separate draw calls
//
#[test]
fn no_repeats_across_draw_calls() {
    let mut deck = DeckManager::shuffled(&mut DeterministicRng::from_seed(42));
    let mut seen: HashSet<CardId> = HashSet::new();

    for _ in 0..10 {
        let cards = deck.draw(5, DrawOptions::default()).unwrap();
        for card in cards {
            assert!(
                seen.insert(card.id),
                "card {card} was dealt twice by the same deck"
            );
        }
    }
    assert_eq!(seen.len(), 50);
}

//
// TEST 3 — exhaustion
//
#[test]
fn draw_more_than_remaining_fails() {
    let mut deck = DeckManager::shuffled(&mut DeterministicRng::from_seed(1));
    deck.draw(50, DrawOptions::default()).unwrap();

    let err = deck.draw(3, DrawOptions::default()).unwrap_err();
    assert!(
        matches!(
            err,
            EngineError::ExhaustedDeck {
                requested: 3,
                remaining: 2
            }
        ),
        "expected ExhaustedDeck, got {err:?}"
    );
}

#[test]
fn failed_draw_leaves_deck_untouched() {
    let mut deck = DeckManager::shuffled(&mut DeterministicRng::from_seed(1));
    deck.draw(50, DrawOptions::default()).unwrap();

    assert!(deck.draw(3, DrawOptions::default()).is_err());
    // Неудачный draw не снимает ни одной карты.
    assert_eq!(deck.remaining(), 2);
    assert_eq!(deck.dealt(), 50);
    assert_eq!(deck.draw(2, DrawOptions::default()).unwrap().len(), 2);
}

//
// TEST 4 — disabled flag
//
#[test]
fn draw_options_stamp_disabled_flag() {
    let mut deck = DeckManager::shuffled(&mut DummyRng);

    let plain = deck.draw(5, DrawOptions::default()).unwrap();
    assert!(plain.iter().all(|c| !c.disabled));

    let replacements = deck.draw(2, DrawOptions::replacement()).unwrap();
    assert!(replacements.iter().all(|c| c.disabled));

    // Флаг не влияет на личность: id остаётся в пределах 0..=51.
    for c in replacements {
        assert!(c.id < 52);
    }
}
