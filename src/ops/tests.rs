// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Inflect-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Inflect and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use super::{ApplyOutcome, ToneController};
use crate::model::fixtures::tone;
use crate::model::{AppState, KnobCell};
use crate::provider::{Rewrite, RewriteError};

fn controller_with_draft(draft: &str) -> ToneController {
    let mut controller = ToneController::new(AppState::new());
    controller.update_text(draft);
    controller
}

fn ok(text: &str) -> Result<Rewrite, RewriteError> {
    Ok(Rewrite {
        rewritten_text: text.to_owned(),
        tone_applied: "test".to_owned(),
    })
}

/// Drives one full successful application; returns the controller.
fn applied(draft: &str, tone_label: &str, rewritten: &str) -> ToneController {
    let mut controller = controller_with_draft(draft);
    let ticket = controller.begin_apply(&tone(tone_label)).expect("ticket");
    assert_eq!(controller.finish_apply(ticket, ok(rewritten)), ApplyOutcome::Applied);
    controller
}

#[test]
fn first_application_synthesizes_baseline_pair() {
    let controller = applied("Hello world", "Casual", "Hey there, world!");
    let state = controller.state();

    let log = state.log();
    assert_eq!(log.len(), 2);
    assert_eq!(log.cursor(), Some(1));
    assert!(log.revisions()[0].is_baseline());
    assert_eq!(log.revisions()[0].content(), "Hello world");
    assert_eq!(log.revisions()[1].content(), "Hey there, world!");
    assert_eq!(log.revisions()[1].tone().unwrap().label(), "Casual");

    assert_eq!(state.current_text(), "Hey there, world!");
    assert!(!state.is_loading());
    assert!(state.error().is_none());
    assert_eq!(state.selected_tone().unwrap().label(), "Casual");
}

#[test]
fn undo_then_redo_walks_the_scenario() {
    let mut controller = applied("Hello world", "Casual", "Hey there, world!");

    controller.undo();
    assert_eq!(controller.state().log().cursor(), Some(0));
    assert_eq!(controller.state().current_text(), "Hello world");
    assert!(controller.state().selected_tone().is_none());

    controller.redo();
    assert_eq!(controller.state().log().cursor(), Some(1));
    assert_eq!(controller.state().current_text(), "Hey there, world!");
    assert_eq!(controller.state().selected_tone().unwrap().label(), "Casual");
}

#[test]
fn undo_redo_restores_the_content_tone_knob_triple() {
    let mut controller = applied("source", "Casual", "casual text");
    controller.set_knob(KnobCell::new(1).unwrap());
    let ticket = controller.begin_apply(&tone("Professional")).unwrap();
    controller.finish_apply(ticket, ok("professional text"));

    let before = (
        controller.state().current_text().to_owned(),
        controller.state().selected_tone().cloned(),
        controller.state().knob(),
    );

    controller.undo();
    controller.redo();

    let after = (
        controller.state().current_text().to_owned(),
        controller.state().selected_tone().cloned(),
        controller.state().knob(),
    );
    assert_eq!(before, after);
    assert_eq!(after.2, KnobCell::new(1).unwrap());
}

#[test]
fn blank_draft_never_starts_a_request() {
    let mut controller = controller_with_draft("   \n\t ");
    let before = controller.state().clone();

    assert!(controller.begin_apply(&tone("Casual")).is_none());
    assert_eq!(controller.state(), &before);
    assert!(!controller.has_active_request());
}

#[test]
fn begin_enters_loading_and_clears_previous_error() {
    let mut controller = controller_with_draft("text");
    let ticket = controller.begin_apply(&tone("Casual")).unwrap();
    controller.finish_apply(ticket, Err(RewriteError::RateLimited));
    assert!(controller.state().error().is_some());

    controller.hide_bottom_bar();
    let _ticket = controller.begin_apply(&tone("Formal")).unwrap();

    let state = controller.state();
    assert!(state.is_loading());
    assert!(state.error().is_none());
    assert!(state.bottom_bar_visible());
    assert_eq!(state.selected_tone().unwrap().label(), "Formal");
}

#[test]
fn every_application_sends_the_baseline_not_the_display_text() {
    let mut controller = applied("the original", "Casual", "casual rendering");
    assert_eq!(controller.state().current_text(), "casual rendering");

    let ticket = controller.begin_apply(&tone("Formal")).unwrap();
    assert_eq!(ticket.request().text, "the original");
    controller.finish_apply(ticket, ok("formal rendering"));

    // Still the baseline even several revisions deep.
    let ticket = controller.begin_apply(&tone("Persuasive")).unwrap();
    assert_eq!(ticket.request().text, "the original");
}

#[test]
fn apply_after_undo_truncates_forward_history() {
    let mut controller = applied("orig", "Casual", "casual");
    let ticket = controller.begin_apply(&tone("Formal")).unwrap();
    controller.finish_apply(ticket, ok("formal"));
    assert_eq!(controller.state().log().len(), 3);

    controller.undo();
    controller.undo();
    assert_eq!(controller.state().log().cursor(), Some(0));

    let ticket = controller.begin_apply(&tone("Empathetic")).unwrap();
    controller.finish_apply(ticket, ok("empathetic"));

    let log = controller.state().log();
    assert_eq!(log.len(), 2);
    assert_eq!(log.revisions()[0].content(), "orig");
    assert_eq!(log.current().unwrap().content(), "empathetic");
}

#[test]
fn stop_discards_a_late_success_silently() {
    let mut controller = applied("orig", "Casual", "casual");
    let log_before = controller.state().log().clone();

    let ticket = controller.begin_apply(&tone("Formal")).unwrap();
    controller.stop();
    assert!(!controller.state().is_loading());

    let outcome = controller.finish_apply(ticket, ok("formal"));
    assert_eq!(outcome, ApplyOutcome::Stale);
    assert_eq!(controller.state().log(), &log_before);
    assert!(controller.state().error().is_none());
    assert!(!controller.state().is_loading());
}

#[test]
fn stop_discards_a_late_failure_without_an_error() {
    let mut controller = controller_with_draft("orig");
    let ticket = controller.begin_apply(&tone("Casual")).unwrap();
    controller.stop();

    let outcome = controller.finish_apply(ticket, Err(RewriteError::RateLimited));
    assert_eq!(outcome, ApplyOutcome::Stale);
    assert!(controller.state().error().is_none());
    assert!(controller.state().log().is_empty());
}

#[test]
fn freshest_request_wins_under_overlap() {
    let mut controller = controller_with_draft("orig");

    let ticket_a = controller.begin_apply(&tone("Casual")).unwrap();
    let ticket_b = controller.begin_apply(&tone("Formal")).unwrap();
    assert_ne!(ticket_a.token(), ticket_b.token());

    // A resolves first but was superseded the moment B started.
    assert_eq!(controller.finish_apply(ticket_a, ok("A text")), ApplyOutcome::Stale);
    assert_eq!(controller.finish_apply(ticket_b, ok("B text")), ApplyOutcome::Applied);

    let log = controller.state().log();
    assert_eq!(log.len(), 2);
    assert_eq!(log.current().unwrap().content(), "B text");
    assert_eq!(log.current().unwrap().tone().unwrap().label(), "Formal");
}

#[test]
fn request_after_stop_lands_while_the_old_one_stays_dead() {
    let mut controller = controller_with_draft("orig");

    let ticket_a = controller.begin_apply(&tone("Casual")).unwrap();
    controller.stop();
    let ticket_b = controller.begin_apply(&tone("Formal")).unwrap();

    // A resolving after B started must not be revived by B's fresh token.
    assert_eq!(controller.finish_apply(ticket_a, ok("A text")), ApplyOutcome::Stale);
    assert_eq!(controller.finish_apply(ticket_b, ok("B text")), ApplyOutcome::Applied);
    assert_eq!(controller.state().current_text(), "B text");
}

#[test]
fn rate_limited_failure_maps_to_the_fixed_message() {
    let mut controller = applied("orig", "Casual", "casual");
    let log_before = controller.state().log().clone();

    let ticket = controller.begin_apply(&tone("Formal")).unwrap();
    let outcome = controller.finish_apply(ticket, Err(RewriteError::RateLimited));

    assert_eq!(outcome, ApplyOutcome::Failed);
    assert_eq!(
        controller.state().error(),
        Some("Too many requests. Please wait a moment and try again.")
    );
    assert!(!controller.state().is_loading());
    assert_eq!(controller.state().log(), &log_before);
}

#[test]
fn reset_is_idempotent_and_keeps_forward_history() {
    let mut controller = applied("orig", "Casual", "casual");
    let ticket = controller.begin_apply(&tone("Formal")).unwrap();
    controller.finish_apply(ticket, ok("formal"));

    controller.reset();
    let once = controller.state().clone();
    controller.reset();
    assert_eq!(controller.state(), &once);

    assert_eq!(controller.state().log().cursor(), Some(0));
    assert_eq!(controller.state().current_text(), "orig");
    assert!(controller.state().selected_tone().is_none());
    assert_eq!(controller.state().knob(), KnobCell::CENTER);
    assert_eq!(controller.state().log().len(), 3);
}

#[test]
fn reset_on_empty_log_is_a_noop() {
    let mut controller = controller_with_draft("draft");
    let before = controller.state().clone();
    controller.reset();
    assert_eq!(controller.state(), &before);
}

#[test]
fn reset_all_restores_initial_defaults() {
    let mut controller = applied("orig", "Casual", "casual");
    controller.hide_bottom_bar();
    controller.set_knob(KnobCell::new(7).unwrap());

    controller.reset_all();

    let state = controller.state();
    assert_eq!(state, &AppState::new());
    assert_eq!(state.current_text(), "");
    assert!(state.log().is_empty());
    assert!(state.bottom_bar_visible());
    assert!(!controller.has_active_request());
}

#[test]
fn update_text_edits_the_draft_only_before_history_exists() {
    let mut controller = controller_with_draft("first");
    assert_eq!(controller.state().current_text(), "first");

    controller.update_text("second");
    assert_eq!(controller.state().current_text(), "second");

    let ticket = controller.begin_apply(&tone("Casual")).unwrap();
    controller.finish_apply(ticket, ok("casual second"));

    controller.update_text("ignored");
    assert_eq!(controller.state().current_text(), "casual second");
    assert_eq!(controller.state().draft_text(), "second");
}

#[test]
fn draft_edits_during_first_flight_do_not_shift_the_baseline() {
    let mut controller = controller_with_draft("sent text");
    let ticket = controller.begin_apply(&tone("Casual")).unwrap();

    // The user keeps typing while the first request is outstanding; the
    // baseline must be the text that was actually rewritten.
    controller.update_text("sent text plus trailing edits");
    controller.finish_apply(ticket, ok("casual"));

    assert_eq!(controller.state().log().revisions()[0].content(), "sent text");
}

#[test]
fn tone_after_reset_branches_from_the_baseline() {
    let mut controller = applied("orig", "Casual", "casual");
    let ticket = controller.begin_apply(&tone("Formal")).unwrap();
    controller.finish_apply(ticket, ok("formal"));

    controller.reset();
    let ticket = controller.begin_apply(&tone("Empathetic")).unwrap();
    assert_eq!(ticket.request().text, "orig");
    controller.finish_apply(ticket, ok("empathetic"));

    let log = controller.state().log();
    assert_eq!(log.len(), 2);
    assert_eq!(log.current().unwrap().content(), "empathetic");
}

#[test]
fn stop_without_an_active_request_is_harmless() {
    let mut controller = controller_with_draft("text");
    controller.stop();
    assert!(!controller.state().is_loading());
    assert!(controller.state().error().is_none());
}
