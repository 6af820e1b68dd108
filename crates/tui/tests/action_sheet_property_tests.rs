//! Properties that must hold for any action descriptor.

mod helpers;

use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use helpers::SheetHarness;
use proptest::prelude::*;
use sheet_tui::ui::action_sheet::{
    ActionSheetAction, ActionSheetProps, Outcome, SheetEvent, Target, Trigger, dispatch,
};

/// Labels that cannot collide with sheet chrome or spinner glyphs.
fn label() -> impl Strategy<Value = String> {
    "[a-z]{4,10}".prop_map(|s| format!("@{s}"))
}

fn descriptor() -> impl Strategy<Value = (String, Option<String>, bool, bool)> {
    (label(), proptest::option::of(label()), any::<bool>(), any::<bool>())
}

fn build(
    rows: &[(String, Option<String>, bool, bool)],
    calls: &Arc<AtomicUsize>,
) -> Vec<ActionSheetAction> {
    rows.iter()
        .map(|(name, subname, loading, disabled)| {
            let counter = calls.clone();
            let mut action = ActionSheetAction::new(name.clone())
                .loading(*loading)
                .disabled(*disabled)
                .on_select(move |_| {
                    counter.fetch_add(1, Ordering::SeqCst);
                });
            if let Some(subname) = subname {
                action = action.subname(subname.clone());
            }
            action
        })
        .collect()
}

proptest! {
    #[test]
    fn prop_loading_rows_never_show_labels(rows in proptest::collection::vec(descriptor(), 1..5)) {
        let calls = Arc::new(AtomicUsize::new(0));
        let props = ActionSheetProps::default().show(true).actions(build(&rows, &calls));
        let mut harness = SheetHarness::new(40, 30);
        let screen = harness.render(&props);

        for (name, subname, loading, _) in &rows {
            if *loading {
                prop_assert!(!screen.contains(name.as_str()));
                if let Some(subname) = subname {
                    prop_assert!(!screen.contains(subname.as_str()));
                }
            } else {
                prop_assert!(screen.contains(name.as_str()));
            }
        }
    }

    #[test]
    fn prop_click_outcome_matches_flags(
        rows in proptest::collection::vec(descriptor(), 1..6),
        close in any::<bool>(),
        pick in any::<prop::sample::Index>(),
    ) {
        let calls = Arc::new(AtomicUsize::new(0));
        let props = ActionSheetProps::default()
            .show(true)
            .close_on_click_action(close)
            .actions(build(&rows, &calls));
        let index = pick.index(rows.len());
        let (_, _, loading, disabled) = &rows[index];

        let mut events: Vec<SheetEvent> = Vec::new();
        let outcome = dispatch(&props, Trigger::Activate(Target::Item(index)), &mut events).unwrap();

        if *loading || *disabled {
            prop_assert_eq!(outcome, Outcome::Suppressed);
            prop_assert!(events.is_empty());
            prop_assert_eq!(calls.load(Ordering::SeqCst), 0);
        } else {
            prop_assert_eq!(outcome, Outcome::Dispatched);
            prop_assert_eq!(calls.load(Ordering::SeqCst), 1);
            prop_assert_eq!(events.len(), if close { 2 } else { 1 });
            match &events[0] {
                SheetEvent::Select { action, index: got } => {
                    prop_assert_eq!(*got, index);
                    prop_assert_eq!(action, &props.actions[index]);
                }
                other => prop_assert!(false, "expected select, got {:?}", other),
            }
            if close {
                prop_assert_eq!(&events[1], &SheetEvent::UpdateShow(false));
            }
        }
    }

    #[test]
    fn prop_every_trigger_emits_at_most_two(
        rows in proptest::collection::vec(descriptor(), 0..4),
        title in proptest::option::of(label()),
        cancel in proptest::option::of(label()),
        popstate in any::<bool>(),
        target in 0usize..6,
    ) {
        let calls = Arc::new(AtomicUsize::new(0));
        let mut props = ActionSheetProps::default()
            .show(true)
            .close_on_popstate(popstate)
            .close_on_click_action(true)
            .actions(build(&rows, &calls));
        props.title = title;
        props.cancel_text = cancel;

        for trigger in [
            Trigger::Activate(Target::CloseIcon),
            Trigger::Activate(Target::Item(target)),
            Trigger::Activate(Target::Cancel),
            Trigger::OverlayClick,
            Trigger::Popstate,
        ] {
            let mut events: Vec<SheetEvent> = Vec::new();
            dispatch(&props, trigger, &mut events).unwrap();
            prop_assert!(events.len() <= 2);
        }
    }
}

#[test]
fn test_empty_actions_render_without_rows() {
    let props = ActionSheetProps::default().show(true).title("Empty");
    let mut harness = SheetHarness::new(20, 10);
    let screen = harness.render(&props);
    assert!(screen.contains("Empty"));
    assert!(
        harness
            .state
            .regions()
            .iter()
            .all(|r| !matches!(r.target, Target::Item(_)))
    );
}
