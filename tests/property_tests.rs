//! Property-based tests for the history engine.
//!
//! These tests use proptest to verify the history laws hold across
//! many randomly generated command sequences.

use proptest::prelude::*;
use std::collections::VecDeque;
use std::convert::Infallible;
use undoable::core::replay;
use undoable::{Command, CommandGroup, Comparator, HistoryEngine, HistoryEntry, HistoryState};

type Counter = fn(&i64, &Command) -> Result<i64, Infallible>;

fn counter(state: &i64, command: &Command) -> Result<i64, Infallible> {
    Ok(match command.kind() {
        "INC" => state + 1,
        "DEC" => state - 1,
        "ADD" => state + command.data().and_then(|d| d.as_i64()).unwrap_or(0),
        _ => *state,
    })
}

fn engine() -> HistoryEngine<i64, Counter> {
    HistoryEngine::builder(counter as Counter)
        .init_command(Command::new("INIT"))
        .build()
        .unwrap()
}

fn history_from(engine: &HistoryEngine<i64, Counter>, commands: &[Command]) -> HistoryState<i64> {
    commands
        .iter()
        .fold(engine.initial_state().unwrap(), |history, command| {
            engine.apply(&history, command).unwrap()
        })
}

prop_compose! {
    fn domain_command()(variant in 0..4u8, amount in -5i64..5) -> Command {
        match variant {
            0 => Command::new("INC"),
            1 => Command::new("DEC"),
            2 => Command::with_data("ADD", amount),
            _ => Command::new("NOOP"),
        }
    }
}

fn any_command() -> impl Strategy<Value = Command> {
    prop_oneof![
        4 => domain_command(),
        1 => (0usize..6).prop_map(Command::undo),
        1 => (0usize..6).prop_map(Command::redo),
        1 => prop::collection::vec(domain_command(), 1..4).prop_map(Command::group),
    ]
}

proptest! {
    #[test]
    fn present_always_equals_replayed_past(
        commands in prop::collection::vec(any_command(), 0..30)
    ) {
        let engine = engine();
        let history = history_from(&engine, &commands);

        let replayed = replay(engine.transition(), history.past(), None).unwrap();
        prop_assert_eq!(replayed, *history.present());
    }

    #[test]
    fn init_command_is_never_removed(
        commands in prop::collection::vec(any_command(), 0..30)
    ) {
        let engine = engine();
        let history = history_from(&engine, &commands);

        prop_assert!(!history.past().is_empty());
        prop_assert_eq!(&history.past()[0], &HistoryEntry::from(Command::new("INIT")));
    }

    #[test]
    fn undo_beyond_init_is_noop(
        commands in prop::collection::vec(any_command(), 0..30),
        extra in 1usize..10
    ) {
        let engine = engine();
        let history = history_from(&engine, &commands);
        let available = history.past().len() - 1;

        let bottom = engine.undo(&history, available).unwrap();
        let beyond = engine.undo(&history, available + extra).unwrap();

        prop_assert_eq!(&beyond, &bottom);
        prop_assert_eq!(engine.undo_once(&bottom).unwrap(), bottom);
    }

    #[test]
    fn redo_inverts_undo(
        commands in prop::collection::vec(any_command(), 0..30)
    ) {
        let engine = engine();
        let history = history_from(&engine, &commands);
        prop_assume!(history.can_undo());

        let round_trip = engine.redo_once(&engine.undo_once(&history).unwrap()).unwrap();
        prop_assert_eq!(round_trip, history);
    }

    #[test]
    fn frozen_comparator_ignores_every_command(
        commands in prop::collection::vec(any_command(), 0..20),
        command in domain_command()
    ) {
        let history = history_from(&engine(), &commands);
        let frozen: HistoryEngine<i64, Counter> = HistoryEngine::builder(counter as Counter)
            .init_command(Command::new("INIT"))
            .comparator(Comparator::freeze())
            .build()
            .unwrap();

        prop_assert_eq!(frozen.apply(&history, &command).unwrap(), history);
    }

    #[test]
    fn group_is_undone_as_one_entry(
        commands in prop::collection::vec(domain_command(), 0..20),
        first in domain_command(),
        second in domain_command()
    ) {
        let engine: HistoryEngine<i64, Counter> = HistoryEngine::builder(counter as Counter)
            .init_command(Command::new("INIT"))
            .comparator(Comparator::record_all())
            .build()
            .unwrap();
        let history = history_from(&engine, &commands);
        let group = CommandGroup::new(vec![first, second]).unwrap();

        let grouped = engine.record_group(&history, group.clone()).unwrap();
        let undone = engine.undo_once(&grouped).unwrap();

        let mut expected_future: VecDeque<HistoryEntry> = history.future().clone();
        expected_future.push_front(HistoryEntry::Group(group));

        prop_assert_eq!(undone.past(), history.past());
        prop_assert_eq!(undone.present(), history.present());
        prop_assert_eq!(undone.future(), &expected_future);
    }

    #[test]
    fn recording_wipes_the_future(
        commands in prop::collection::vec(domain_command(), 1..20),
        steps in 1usize..5
    ) {
        let engine = engine();
        let history = engine.undo(&history_from(&engine, &commands), steps).unwrap();
        prop_assume!(history.can_redo());

        let forward = engine.apply(&history, &Command::new("INC")).unwrap();
        prop_assert!(forward.future().is_empty());
        prop_assert_eq!(*forward.present(), history.present() + 1);
    }

    #[test]
    fn selectors_agree_with_travel(
        commands in prop::collection::vec(any_command(), 0..30)
    ) {
        let engine = engine();
        let history = history_from(&engine, &commands);
        let selectors = engine.selectors();

        let past_states = selectors.past_states(&history).unwrap();
        prop_assert_eq!(past_states.len(), history.past().len() - 1);
        if let Some(previous) = past_states.last() {
            let undone = engine.undo_once(&history).unwrap();
            prop_assert_eq!(undone.present(), previous);
        }

        let future_states = selectors.future_states(&history).unwrap();
        prop_assert_eq!(future_states.len(), history.future().len());
        if let Some(furthest) = future_states.last() {
            let redone = engine.redo(&history, history.future().len()).unwrap();
            prop_assert_eq!(redone.present(), furthest);
        }
    }
}
