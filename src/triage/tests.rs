// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-LeanIt-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of LeanIt and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use super::{Decision, TriageDeck, TriageError};
use crate::model::{Deck, Insight, InsightId};

fn iid(value: &str) -> InsightId {
    InsightId::new(value).expect("insight id")
}

fn insight(id: &str, rank: u32) -> Insight {
    Insight::new(iid(id), rank, format!("Title {rank}"), format!("Point {rank}."))
}

/// Primary [a(1), b(2)], secondary [c(3)].
fn small_triage() -> TriageDeck {
    let deck = Deck::new(
        vec![insight("a", 1), insight("b", 2)],
        vec![insight("c", 3)],
    )
    .expect("deck");
    TriageDeck::new(deck)
}

fn wide_triage() -> TriageDeck {
    let deck = Deck::new(
        vec![
            insight("a", 1),
            insight("b", 2),
            insight("c", 3),
            insight("d", 4),
            insight("e", 5),
        ],
        Vec::new(),
    )
    .expect("deck");
    TriageDeck::new(deck)
}

#[test]
fn cursor_equals_decision_count() {
    let mut triage = wide_triage();
    for (n, decision) in [Decision::Save, Decision::Skip, Decision::Save]
        .into_iter()
        .enumerate()
    {
        triage.decide(decision).expect("decide");
        assert_eq!(triage.cursor(), n + 1);
    }
    triage.undo().expect("undo");
    assert_eq!(triage.cursor(), 2);
}

#[test]
fn undo_is_a_strict_inverse_of_decide() {
    let mut triage = wide_triage();
    triage.decide(Decision::Save).expect("decide a");
    triage.decide(Decision::Skip).expect("decide b");

    let token = triage.undo().expect("undo");
    assert_eq!(token.kind(), Decision::Skip);
    assert_eq!(token.insight_id().as_str(), "b");

    assert!(!triage.saved().iter().any(|id| id.as_str() == "b"));
    assert!(!triage.stack_skipped().iter().any(|id| id.as_str() == "b"));
    assert_eq!(triage.current().map(|i| i.id().as_str()), Some("b"));
}

#[test]
fn second_undo_is_a_noop() {
    let mut triage = wide_triage();
    triage.decide(Decision::Save).expect("decide a");
    triage.decide(Decision::Save).expect("decide b");

    assert!(triage.undo().is_some());
    assert!(triage.undo().is_none());
    assert_eq!(triage.cursor(), 1);
    assert_eq!(triage.saved_count(), 1);
}

#[test]
fn undo_with_nothing_decided_is_a_noop() {
    let mut triage = small_triage();
    assert!(!triage.can_undo());
    assert!(triage.undo().is_none());
    assert_eq!(triage.cursor(), 0);
}

#[test]
fn decide_at_terminal_is_rejected_without_state_change() {
    let mut triage = small_triage();
    triage.decide(Decision::Skip).expect("decide a");
    triage.decide(Decision::Skip).expect("decide b");
    assert!(triage.is_finished());

    let before_cursor = triage.cursor();
    assert_eq!(
        triage.decide(Decision::Save),
        Err(TriageError::NoCurrentInsight)
    );
    assert_eq!(triage.cursor(), before_cursor);
    assert_eq!(triage.saved_count(), 0);
}

#[test]
fn reveal_secondary_is_idempotent_and_preserves_decisions() {
    let mut triage = small_triage();
    triage.decide(Decision::Save).expect("decide a");

    assert!(triage.reveal_secondary());
    let once: Vec<String> = triage
        .deck()
        .working()
        .map(|i| i.id().to_string())
        .collect();

    assert!(!triage.reveal_secondary());
    let twice: Vec<String> = triage
        .deck()
        .working()
        .map(|i| i.id().to_string())
        .collect();

    assert_eq!(once, twice);
    assert_eq!(once, ["a", "b", "c"]);
    assert_eq!(triage.cursor(), 1);
    assert_eq!(triage.saved_count(), 1);
}

#[test]
fn save_skip_then_reveal_walkthrough() {
    let mut triage = small_triage();

    triage.decide(Decision::Save).expect("decide a");
    assert_eq!(triage.focused_id().map(|id| id.as_str()), Some("a"));
    assert_eq!(triage.cursor(), 1);

    triage.decide(Decision::Skip).expect("decide b");
    assert_eq!(triage.cursor(), 2);
    assert!(triage.is_finished());

    assert!(triage.reveal_secondary());
    assert!(!triage.is_finished());
    assert_eq!(triage.deck().working_len(), 3);
    assert_eq!(triage.cursor(), 2);
    assert_eq!(triage.current().map(|i| i.id().as_str()), Some("c"));
}

#[test]
fn save_opens_detail_and_skip_does_not() {
    let mut triage = wide_triage();
    triage.decide(Decision::Skip).expect("decide a");
    assert!(triage.focused_id().is_none());

    triage.decide(Decision::Save).expect("decide b");
    assert_eq!(triage.focused_id().map(|id| id.as_str()), Some("b"));
}

#[test]
fn undoing_a_save_closes_its_detail_view() {
    let mut triage = wide_triage();
    triage.decide(Decision::Save).expect("decide a");
    assert!(triage.focused_id().is_some());

    triage.undo().expect("undo");
    assert!(triage.focused_id().is_none());
}

#[test]
fn undoing_a_save_leaves_an_unrelated_focus_alone() {
    let mut triage = wide_triage();
    triage.decide(Decision::Save).expect("decide a");
    triage.open_detail("c").expect("open c");

    triage.undo().expect("undo");
    assert_eq!(triage.focused_id().map(|id| id.as_str()), Some("c"));
}

#[test]
fn list_skip_then_undo_restores_original_position() {
    let mut triage = wide_triage();
    triage.skip("c").expect("skip c");

    let visible: Vec<&str> = triage.visible().iter().map(|i| i.id().as_str()).collect();
    assert_eq!(visible, ["a", "b", "d", "e"]);

    let restored = triage.undo_skip().expect("undo skip");
    assert_eq!(restored.as_str(), "c");
    let visible: Vec<&str> = triage.visible().iter().map(|i| i.id().as_str()).collect();
    assert_eq!(visible, ["a", "b", "c", "d", "e"]);
}

#[test]
fn list_undo_retains_only_the_most_recent_skip() {
    let mut triage = wide_triage();
    triage.skip("a").expect("skip a");
    triage.skip("b").expect("skip b");

    assert_eq!(triage.undo_skip().map(|id| id.to_string()), Some("b".to_owned()));
    assert!(triage.undo_skip().is_none());
    assert!(triage.is_skipped("a"));
}

#[test]
fn list_skip_rejects_unknown_and_duplicate_ids() {
    let mut triage = small_triage();
    assert_eq!(
        triage.skip("zzz"),
        Err(TriageError::UnknownInsight {
            id: "zzz".to_owned()
        })
    );
    // Secondary tier is unaddressable until revealed.
    assert_eq!(
        triage.skip("c"),
        Err(TriageError::UnknownInsight { id: "c".to_owned() })
    );

    triage.skip("a").expect("skip a");
    assert_eq!(
        triage.skip("a"),
        Err(TriageError::AlreadySkipped { id: iid("a") })
    );
    assert_eq!(triage.list_skipped_count(), 1);
}

#[test]
fn filter_mode_focus_rules() {
    let mut triage = small_triage();

    triage.skip("b").expect("skip b");
    assert_eq!(
        triage.expand("b"),
        Err(TriageError::NotVisible { id: iid("b") })
    );

    triage.expand("a").expect("expand a");
    assert_eq!(triage.focused_id().map(|id| id.as_str()), Some("a"));

    triage.skip("a").expect("skip a");
    assert!(triage.focused_id().is_none());
}

#[test]
fn expand_is_idempotent_and_replaces_without_collapse() {
    let mut triage = wide_triage();
    triage.expand("a").expect("expand a");
    triage.expand("a").expect("expand a again");
    assert_eq!(triage.focused_id().map(|id| id.as_str()), Some("a"));

    triage.expand("b").expect("expand b");
    assert_eq!(triage.focused_id().map(|id| id.as_str()), Some("b"));

    triage.close_detail();
    triage.close_detail();
    assert!(triage.focused_id().is_none());
}

#[test]
fn modes_keep_independent_histories() {
    let mut triage = wide_triage();

    triage.skip("a").expect("list skip a");
    assert_eq!(triage.cursor(), 0);
    assert_eq!(triage.current().map(|i| i.id().as_str()), Some("a"));

    triage.decide(Decision::Skip).expect("stack skip a");
    let visible: Vec<&str> = triage.visible().iter().map(|i| i.id().as_str()).collect();
    assert_eq!(visible, ["b", "c", "d", "e"]);
    assert_eq!(triage.list_skipped_count(), 1);
    assert_eq!(triage.stack_skipped_count(), 1);
}

#[test]
fn lookahead_is_bounded_and_shrinks_near_the_end() {
    let mut triage = wide_triage();
    let window: Vec<&str> = triage.lookahead().iter().map(|i| i.id().as_str()).collect();
    assert_eq!(window, ["a", "b", "c"]);

    triage.decide(Decision::Save).expect("decide a");
    triage.decide(Decision::Save).expect("decide b");
    triage.decide(Decision::Save).expect("decide c");
    triage.decide(Decision::Save).expect("decide d");
    let window: Vec<&str> = triage.lookahead().iter().map(|i| i.id().as_str()).collect();
    assert_eq!(window, ["e"]);

    triage.decide(Decision::Save).expect("decide e");
    assert!(triage.lookahead().is_empty());
}

#[test]
fn reveal_with_empty_secondary_reports_no_more() {
    let mut triage = wide_triage();
    assert!(!triage.has_more());
    assert!(!triage.reveal_secondary());

    let mut triage = small_triage();
    assert!(triage.has_more());
    triage.reveal_secondary();
    assert!(!triage.has_more());
}

#[test]
fn finished_reports_both_counts() {
    let mut triage = small_triage();
    triage.decide(Decision::Save).expect("decide a");
    triage.decide(Decision::Skip).expect("decide b");
    assert!(triage.is_finished());
    assert_eq!(triage.saved_count(), 1);
    assert_eq!(triage.stack_skipped_count(), 1);
}
