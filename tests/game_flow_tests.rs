//! Тесты игрового слоя:
//! - фазовая машина INIT → START → CONTINUE → END → START;
//! - контроллер раунда: раздача, одноразовые замены, завершение;
//! - выбор диалога (победа / поражение / ничья, совпадение категорий);
//! - JSON-контракт с фронтом (serde).

use draw_poker_engine::domain::card::Card;
use draw_poker_engine::domain::hand::{HandRank, Owner, RankedHand};
use draw_poker_engine::game::dialog::{round_result_dialog, DialogKind, DialogPayload};
use draw_poker_engine::game::{GameError, GamePhase, RoundController};
use draw_poker_engine::infra::DeterministicRng;

fn ranked(owner: Owner, name: &str, rank: u32) -> RankedHand {
    RankedHand {
        owner,
        name: name.to_string(),
        hand_rank: HandRank(rank),
    }
}

//
// TEST 1 — фазовая машина
//
#[test]
fn phase_machine_follows_the_main_button() {
    assert_eq!(GamePhase::Init.advance(), GamePhase::Start);
    assert_eq!(GamePhase::Start.advance(), GamePhase::Continue);
    assert_eq!(GamePhase::Continue.advance(), GamePhase::End);
    assert_eq!(GamePhase::End.advance(), GamePhase::Start);
}

#[test]
fn replacement_window_is_start_and_continue() {
    assert!(!GamePhase::Init.replacement_open());
    assert!(GamePhase::Start.replacement_open());
    assert!(GamePhase::Continue.replacement_open());
    assert!(!GamePhase::End.replacement_open());
}

//
// TEST 2 — контроллер раунда
//
#[test]
fn start_round_deals_both_hands_and_hides_dealer() {
    let mut round = RoundController::new();
    assert_eq!(round.phase(), GamePhase::Init);

    round.start_round(&mut DeterministicRng::from_seed(1)).unwrap();

    assert_eq!(round.phase(), GamePhase::Start);
    assert_eq!(round.dealer_hand().unwrap().len(), 5);
    assert_eq!(round.player_hand().unwrap().len(), 5);
    assert!(round.dealer_hidden());
    assert!(round.winners().is_empty());
}

#[test]
fn start_round_mid_round_is_rejected() {
    let mut round = RoundController::new();
    round.start_round(&mut DeterministicRng::from_seed(1)).unwrap();

    let err = round
        .start_round(&mut DeterministicRng::from_seed(2))
        .unwrap_err();
    assert!(matches!(err, GameError::PhaseViolation(GamePhase::Start)));
}

#[test]
fn each_card_is_replaceable_exactly_once() {
    let mut round = RoundController::new();
    round.start_round(&mut DeterministicRng::from_seed(8)).unwrap();

    let first = round.player_hand().unwrap().cards[0];
    let new_card = round.replace_card(first.id).unwrap();

    // Сброшенной карты в руке больше нет.
    let err = round.replace_card(first.id).unwrap_err();
    assert!(matches!(err, GameError::CardNotInHand(id) if id == first.id));

    // Добранную карту менять нельзя.
    let err = round.replace_card(new_card.id).unwrap_err();
    assert!(matches!(err, GameError::AlreadyReplaced(id) if id == new_card.id));

    // Остальные исходные карты менять можно.
    let third = round.player_hand().unwrap().cards[2];
    round.replace_card(third.id).unwrap();
}

#[test]
fn replacement_is_closed_after_the_round_ends() {
    let mut round = RoundController::new();
    round.start_round(&mut DeterministicRng::from_seed(4)).unwrap();
    round.finish_round().unwrap();

    let card = round.player_hand().unwrap().cards[0];
    let err = round.replace_card(card.id).unwrap_err();
    assert!(matches!(err, GameError::PhaseViolation(GamePhase::End)));
}

#[test]
fn replace_before_start_is_rejected() {
    let mut round = RoundController::new();
    let err = round.replace_card(0).unwrap_err();
    assert!(matches!(err, GameError::PhaseViolation(GamePhase::Init)));
}

#[test]
fn finish_round_ranks_hands_and_reveals_dealer() {
    let mut round = RoundController::new();
    round.start_round(&mut DeterministicRng::from_seed(2)).unwrap();
    round.continue_round().unwrap();

    let dialog = round.finish_round().unwrap();

    assert_eq!(round.phase(), GamePhase::End);
    assert!(!round.dealer_hidden());
    assert_eq!(round.winners().len(), 2);
    assert!(round.winners()[0].hand_rank >= round.winners()[1].hand_rank);
    assert!(matches!(
        dialog.kind,
        DialogKind::Winner | DialogKind::Loser | DialogKind::Info
    ));
}

#[test]
fn new_round_starts_with_a_fresh_deck() {
    let mut round = RoundController::new();
    round.start_round(&mut DeterministicRng::from_seed(3)).unwrap();
    let card = round.player_hand().unwrap().cards[0];
    round.replace_card(card.id).unwrap();
    round.finish_round().unwrap();

    // Новый раунд: полная колода, список замен чист.
    round.start_round(&mut DeterministicRng::from_seed(3)).unwrap();
    assert_eq!(round.phase(), GamePhase::Start);
    assert!(round.winners().is_empty());
    let card = round.player_hand().unwrap().cards[0];
    round.replace_card(card.id).unwrap();
}

//
// TEST 3 — выбор диалога
//
#[test]
fn player_win_dialog_uses_the_winner_copy() {
    let best = ranked(Owner::Player, "Three of a Kind", 300);
    let other = ranked(Owner::Dealer, "One Pair", 100);

    let dialog = round_result_dialog(&best, &other);

    assert_eq!(dialog.kind, DialogKind::Winner);
    assert_eq!(dialog.title, "🎉 Congratulations you won!");
    assert_eq!(
        dialog.body,
        "You Won with the Three of a Kind hand! Dealer had One Pair"
    );
}

#[test]
fn dealer_win_dialog_uses_the_loser_copy() {
    let best = ranked(Owner::Dealer, "Flush", 500);
    let other = ranked(Owner::Player, "Straight", 400);

    let dialog = round_result_dialog(&best, &other);

    assert_eq!(dialog.kind, DialogKind::Loser);
    assert_eq!(dialog.title, "😕 Sorry you lost!");
    assert_eq!(dialog.body, "You Lost with the Straight hand! Dealer had Flush");
}

#[test]
fn same_category_win_mentions_the_higher_ranked_hand() {
    let best = ranked(Owner::Player, "Two Pair", 210);
    let other = ranked(Owner::Dealer, "Two Pair", 205);

    let dialog = round_result_dialog(&best, &other);

    assert_eq!(dialog.kind, DialogKind::Winner);
    assert_eq!(
        dialog.body,
        "You Won with the Two Pair higher ranked hand, dealer also had Two Pair but lower ranked"
    );
}

#[test]
fn exact_tie_produces_a_push_dialog() {
    let best = ranked(Owner::Dealer, "Two Pair", 210);
    let other = ranked(Owner::Player, "Two Pair", 210);

    let dialog = round_result_dialog(&best, &other);

    assert_eq!(dialog.kind, DialogKind::Info);
    assert_eq!(dialog.title, "Push!");
}

#[test]
fn game_error_maps_to_error_dialog() {
    let dialog = DialogPayload::error(&GameError::NoActiveRound);
    assert_eq!(dialog.kind, DialogKind::Error);
    assert_eq!(dialog.title, "Error");
    assert!(!dialog.body.is_empty());
}

//
// TEST 4 — JSON-контракт с фронтом
//
#[test]
fn card_serializes_with_id_and_disabled_flag() {
    let card: Card = "As".parse().unwrap();
    let json = serde_json::to_value(&card).unwrap();

    assert_eq!(json["id"], 51);
    assert_eq!(json["rank"], "Ace");
    assert_eq!(json["suit"], "Spades");
    assert_eq!(json["disabled"], false);
}

#[test]
fn owner_serializes_lowercase() {
    assert_eq!(serde_json::to_string(&Owner::Dealer).unwrap(), "\"dealer\"");
    assert_eq!(serde_json::to_string(&Owner::Player).unwrap(), "\"player\"");
}

#[test]
fn dialog_payload_round_trips_through_json() {
    let dialog = DialogPayload::winner("You Won with the Flush hand! Dealer had Straight");
    let json = serde_json::to_string(&dialog).unwrap();
    let back: DialogPayload = serde_json::from_str(&json).unwrap();
    assert_eq!(back, dialog);
}
