//! Panel behaviour tests
//!
//! Drive the panel through `reduce_panel_state` the way clicks and keys do,
//! and check both the computed view model and the actions emitted to the
//! backend.

mod common;

use common::{SnapshotBuilder, sample_snapshot};
use ert_manager::backend::{Action, SlotRole};
use ert_manager::snapshot::{ErtType, RemoteSnapshot};
use ert_manager::tui::panel::model::*;

use iocraft::prelude::{KeyCode, KeyModifiers};

const VISIBLE: usize = 5;

/// Apply a sequence of interactions, collecting every emitted action
fn run(
    snapshot: &RemoteSnapshot,
    mut state: PanelState,
    actions: Vec<PanelAction>,
) -> (PanelState, Vec<Action>) {
    let mut emitted = Vec::new();
    for action in actions {
        let (next, out) = reduce_panel_state(state, action, snapshot, VISIBLE);
        state = next;
        emitted.extend(out);
    }
    (state, emitted)
}

fn click(control: Control) -> PanelAction {
    PanelAction::Press(control)
}

fn send_view(snapshot: &RemoteSnapshot) -> SendErtViewModel {
    match compute_panel_view_model(snapshot, &PanelState::default(), VISIBLE).body {
        BodyViewModel::Send(send) => send,
        other => panic!("expected send body, got {:?}", other.tab()),
    }
}

fn read_view(snapshot: &RemoteSnapshot) -> ReadRequestsViewModel {
    let state = PanelState {
        tab: Tab::Read,
        ..PanelState::default()
    };
    match compute_panel_view_model(snapshot, &state, VISIBLE).body {
        BodyViewModel::Read(read) => read,
        other => panic!("expected read body, got {:?}", other.tab()),
    }
}

fn row_buttons<'a>(view: &'a SendErtViewModel, label: &str) -> &'a [ButtonViewModel] {
    match &view.row(label).expect("row exists").content {
        RowContent::Buttons(buttons) => buttons,
        RowContent::Text { .. } => panic!("row {label} has no buttons"),
    }
}

// ============================================================================
// Tabs
// ============================================================================

#[test]
fn test_exactly_one_tab_selected_and_body_matches() {
    let snapshot = sample_snapshot();
    for tab in Tab::ALL {
        let state = PanelState {
            tab,
            ..PanelState::default()
        };
        let vm = compute_panel_view_model(&snapshot, &state, VISIBLE);

        let selected: Vec<Tab> = vm.tabs.iter().filter(|t| t.selected).map(|t| t.tab).collect();
        assert_eq!(selected, vec![tab]);
        assert_eq!(vm.body.tab(), tab);
    }
}

#[test]
fn test_tab_titles_in_order() {
    let vm = compute_panel_view_model(&sample_snapshot(), &PanelState::default(), VISIBLE);
    let titles: Vec<&str> = vm.tabs.iter().map(|t| t.title).collect();
    assert_eq!(titles, vec!["Send ERT", "Read ERT Requests", "Deny ERT"]);
}

#[test]
fn test_select_tab_is_idempotent() {
    let snapshot = sample_snapshot();
    for tab in Tab::ALL {
        let (once, emitted) = run(&snapshot, PanelState::default(), vec![PanelAction::SelectTab(tab)]);
        let (twice, _) = run(&snapshot, once.clone(), vec![PanelAction::SelectTab(tab)]);
        assert_eq!(once.tab, tab);
        assert_eq!(once, twice);
        assert!(emitted.is_empty());
    }
}

#[test]
fn test_number_keys_select_tabs() {
    let snapshot = sample_snapshot();
    let mut state = PanelState::default();
    for (key, tab) in [('2', Tab::Read), ('3', Tab::Deny), ('1', Tab::Send)] {
        let action = key_to_action(KeyCode::Char(key), KeyModifiers::NONE, &state).unwrap();
        state = reduce_panel_state(state, action, &snapshot, VISIBLE).0;
        assert_eq!(state.tab, tab);
    }
}

// ============================================================================
// Overview
// ============================================================================

#[test]
fn test_overview_unanswered() {
    let snapshot = SnapshotBuilder::new().answered(false).build();
    let vm = compute_panel_view_model(&snapshot, &PanelState::default(), VISIBLE);

    assert_eq!(vm.overview.answered.label, "Unanswered");
    assert_eq!(vm.overview.answered.text_tone, Tone::Bad);
    assert_eq!(vm.overview.answered.tooltip, Some(ANSWERED_TOOLTIP));
}

#[test]
fn test_overview_answered() {
    let snapshot = SnapshotBuilder::new().answered(true).build();
    let vm = compute_panel_view_model(&snapshot, &PanelState::default(), VISIBLE);

    assert_eq!(vm.overview.answered.label, "Answered");
    assert_eq!(vm.overview.answered.text_tone, Tone::Default);
}

#[test]
fn test_overview_security_level() {
    let snapshot = SnapshotBuilder::new().security_level("Delta", "#abc").build();
    let vm = compute_panel_view_model(&snapshot, &PanelState::default(), VISIBLE);

    assert_eq!(vm.overview.security_level, "Delta");
    assert_eq!(vm.overview.security_level_color, "#abc");
}

#[test]
fn test_overview_toggle_emits_once_without_payload() {
    let snapshot = SnapshotBuilder::new().answered(false).build();
    let (_, emitted) = run(&snapshot, PanelState::default(), vec![click(Control::AnsweredToggle)]);

    assert_eq!(emitted, vec![Action::ToggleErtRequestAnswered]);
    assert_eq!(emitted[0].name(), "toggleErtRequestAnswered");
    assert!(emitted[0].payload().is_none());
}

#[test]
fn test_overview_toggle_has_no_optimistic_update() {
    let snapshot = SnapshotBuilder::new().answered(false).build();
    let (state, _) = run(&snapshot, PanelState::default(), vec![click(Control::AnsweredToggle)]);
    let vm = compute_panel_view_model(&snapshot, &state, VISIBLE);

    assert_eq!(vm.overview.answered.label, "Unanswered");
}

#[test]
fn test_answered_shortcut_key() {
    let snapshot = SnapshotBuilder::new().build();
    let state = PanelState {
        tab: Tab::Deny,
        ..PanelState::default()
    };
    let action = key_to_action(KeyCode::Char('a'), KeyModifiers::NONE, &state).unwrap();
    let (_, emitted) = run(&snapshot, state, vec![action]);

    assert_eq!(emitted, vec![Action::ToggleErtRequestAnswered]);
}

// ============================================================================
// Send ERT
// ============================================================================

#[test]
fn test_ert_type_header_highlight() {
    let cases = [
        (ErtType::Amber, [Tone::Orange, Tone::Default, Tone::Default]),
        (ErtType::Red, [Tone::Default, Tone::Red, Tone::Default]),
        (ErtType::Gamma, [Tone::Default, Tone::Default, Tone::Orange]),
    ];
    for (current, expected) in cases {
        let view = send_view(&SnapshotBuilder::new().ert_type(current).build());
        let tones: Vec<Tone> = view.header.iter().map(|b| b.tone).collect();
        assert_eq!(tones, expected.to_vec(), "current {current}");
    }
}

#[test]
fn test_ert_type_click_emits_value() {
    let snapshot = SnapshotBuilder::new().build();
    let (_, emitted) = run(
        &snapshot,
        PanelState::default(),
        vec![click(Control::ErtType(ErtType::Gamma))],
    );

    assert_eq!(emitted, vec![Action::SetErtType(ErtType::Gamma)]);
    assert_eq!(
        emitted[0].payload(),
        Some(serde_json::json!({"ertType": "Gamma"}))
    );
}

#[test]
fn test_admin_toggle() {
    let on = send_view(&SnapshotBuilder::new().admin(true).build());
    let off = send_view(&SnapshotBuilder::new().admin(false).build());
    assert_eq!(row_buttons(&on, "Spawn on briefing?")[0].label, "Yes");
    assert_eq!(row_buttons(&off, "Spawn on briefing?")[0].label, "No");

    let (_, emitted) = run(
        &SnapshotBuilder::new().build(),
        PanelState::default(),
        vec![click(Control::AdminToggle)],
    );
    assert_eq!(emitted, vec![Action::ToggleAdmin]);
}

#[test]
fn test_commander_click_emits_nothing() {
    let snapshot = SnapshotBuilder::new().commander(true).build();
    let view = send_view(&snapshot);
    let commander = &row_buttons(&view, "Commander")[0];
    assert_eq!(commander.label, "Yes");
    assert_eq!(commander.tooltip, Some(COMMANDER_TOOLTIP));

    let (_, emitted) = run(
        &snapshot,
        PanelState::default(),
        vec![click(Control::CommanderToggle), PanelAction::Activate],
    );
    assert!(emitted.is_empty());
}

#[test]
fn test_slot_count_selects_exactly_one_button() {
    for count in 0..=5 {
        let view = send_view(&SnapshotBuilder::new().all_slots(count).build());
        for role in SlotRole::ALL {
            let buttons = row_buttons(&view, role.label());
            assert_eq!(buttons.len(), 6);
            let selected: Vec<&str> = buttons
                .iter()
                .filter(|b| b.selected)
                .map(|b| b.label.as_str())
                .collect();
            assert_eq!(selected, vec![count.to_string().as_str()], "{role:?}");
        }
    }
}

#[test]
fn test_absent_slot_count_selects_nothing() {
    let view = send_view(&SnapshotBuilder::new().build());
    for role in SlotRole::ALL {
        assert!(row_buttons(&view, role.label()).iter().all(|b| !b.selected));
    }
}

#[test]
fn test_slot_click_emits_role_specific_action() {
    let expected = [
        (SlotRole::Security, "setSec", "setSec"),
        (SlotRole::Medical, "setMed", "setMed"),
        (SlotRole::Engineering, "setEng", "setEng"),
        (SlotRole::Inquisitor, "setPar", "set_par"),
        (SlotRole::Janitor, "setJan", "setJan"),
    ];
    let snapshot = SnapshotBuilder::new().all_slots(0).build();

    for (role, name, key) in expected {
        for count in 0..=5u8 {
            let (_, emitted) = run(
                &snapshot,
                PanelState::default(),
                vec![click(Control::Slot { role, count })],
            );
            let mut payload = serde_json::Map::new();
            payload.insert(key.to_string(), count.into());

            assert_eq!(emitted.len(), 1);
            assert_eq!(emitted[0].name(), name);
            assert_eq!(emitted[0].payload(), Some(payload.into()));
        }
    }
}

#[test]
fn test_slot_rows_in_order() {
    let view = send_view(&sample_snapshot());
    let labels: Vec<&str> = view.rows.iter().map(|r| r.label).collect();
    assert_eq!(
        labels,
        vec![
            "Spawn on briefing?",
            "Commander",
            "Security",
            "Medical",
            "Engineering",
            "inquisitor",
            "Janitor",
            "Total Slots",
            "Dispatch",
        ]
    );
}

#[test]
fn test_total_slots_over_capacity_is_red() {
    let view = send_view(&SnapshotBuilder::new().totals(7, 5).build());
    assert_eq!(
        view.row("Total Slots").unwrap().content,
        RowContent::Text {
            text: "7 total, versus 5 spawnpoints".to_string(),
            tone: Tone::Red,
        }
    );
}

#[test]
fn test_total_slots_within_capacity_is_green() {
    let view = send_view(&SnapshotBuilder::new().totals(3, 5).build());
    assert_eq!(
        view.row("Total Slots").unwrap().content,
        RowContent::Text {
            text: "3 total, versus 5 spawnpoints".to_string(),
            tone: Tone::Green,
        }
    );
}

#[test]
fn test_total_slots_uses_reported_total() {
    // Counts add up to 10 but the backend says 2
    let view = send_view(&SnapshotBuilder::new().all_slots(2).totals(2, 5).build());
    assert_eq!(
        view.row("Total Slots").unwrap().content,
        RowContent::Text {
            text: "2 total, versus 5 spawnpoints".to_string(),
            tone: Tone::Green,
        }
    );
}

#[test]
fn test_dispatch_by_keyboard() {
    let snapshot = sample_snapshot();
    // header, admin, commander, five slot rows, dispatch
    let mut actions = vec![PanelAction::MoveDown; 8];
    actions.push(PanelAction::Activate);

    let (state, emitted) = run(&snapshot, PanelState::default(), actions);
    assert_eq!(focused_control(&state, &snapshot), Some(Control::Dispatch));
    assert_eq!(emitted, vec![Action::DispatchErt]);
}

#[test]
fn test_rapid_clicks_emit_every_time() {
    let snapshot = sample_snapshot();
    let (_, emitted) = run(
        &snapshot,
        PanelState::default(),
        vec![click(Control::Dispatch); 3],
    );
    assert_eq!(emitted, vec![Action::DispatchErt; 3]);
}

// ============================================================================
// Read ERT Requests
// ============================================================================

#[test]
fn test_read_requests_empty() {
    let view = read_view(&SnapshotBuilder::new().build());
    assert!(view.show_empty_state);
    assert!(view.sections.is_empty());
    assert_eq!(view.total, 0);
}

#[test]
fn test_read_requests_two_messages_in_order() {
    let snapshot = SnapshotBuilder::new()
        .request("10:00 &lt;shift&gt;", "Alice", "uid-a", "first <b>raw</b>")
        .request("10:05&#33;", "Bob", "uid-b", "second")
        .build();
    let view = read_view(&snapshot);

    assert!(!view.show_empty_state);
    assert_eq!(view.sections.len(), 2);
    assert_eq!(view.sections[0].title, "10:00 <shift>");
    assert_eq!(view.sections[1].title, "10:05!");
    assert_eq!(view.sections[0].sender.label, "Alice");
    assert_eq!(view.sections[0].sender.tooltip, Some(SENDER_TOOLTIP));
    // The body is shown as sent
    assert_eq!(view.sections[0].message, "first <b>raw</b>");

    let (_, emitted) = run(
        &snapshot,
        PanelState {
            tab: Tab::Read,
            ..PanelState::default()
        },
        vec![
            click(view.sections[1].sender.control),
            click(view.sections[0].sender.control),
        ],
    );
    assert_eq!(
        emitted,
        vec![
            Action::ViewPlayerPanel {
                uid: "uid-b".to_string()
            },
            Action::ViewPlayerPanel {
                uid: "uid-a".to_string()
            },
        ]
    );
    assert_eq!(emitted[0].name(), "view_player_panel");
}

// ============================================================================
// Deny ERT
// ============================================================================

fn deny_state() -> PanelState {
    PanelState {
        tab: Tab::Deny,
        ..PanelState::default()
    }
}

fn deny_view(snapshot: &RemoteSnapshot, state: &PanelState) -> DenyErtViewModel {
    match compute_panel_view_model(snapshot, state, VISIBLE).body {
        BodyViewModel::Deny(deny) => deny,
        other => panic!("expected deny body, got {:?}", other.tab()),
    }
}

#[test]
fn test_deny_single_click_emits_nothing() {
    let snapshot = SnapshotBuilder::new().build();
    let (state, emitted) = run(
        &snapshot,
        deny_state(),
        vec![
            PanelAction::EditDenial("Not now".to_string()),
            click(Control::DenyButton),
        ],
    );

    assert!(emitted.is_empty());
    let view = deny_view(&snapshot, &state);
    assert_eq!(view.button.label, "Confirm?");
    assert_eq!(view.button.tone, Tone::Bad);
}

#[test]
fn test_deny_confirm_emits_once_with_reason() {
    let snapshot = SnapshotBuilder::new().build();
    let (state, emitted) = run(
        &snapshot,
        deny_state(),
        vec![
            PanelAction::EditDenial("Not now\nTry later".to_string()),
            click(Control::DenyButton),
            click(Control::DenyButton),
        ],
    );

    assert_eq!(
        emitted,
        vec![Action::DenyErt {
            reason: "Not now\nTry later".to_string()
        }]
    );
    // Text stays after submission and the button disarms
    assert_eq!(state.denial_text, "Not now\nTry later");
    assert!(!state.deny_armed);
    assert_eq!(deny_view(&snapshot, &state).button.label, "Deny ERT");
}

#[test]
fn test_deny_empty_reason_is_allowed() {
    let snapshot = SnapshotBuilder::new().build();
    let (_, emitted) = run(
        &snapshot,
        deny_state(),
        vec![click(Control::DenyButton), click(Control::DenyButton)],
    );
    assert_eq!(
        emitted,
        vec![Action::DenyErt {
            reason: String::new()
        }]
    );
}

#[test]
fn test_deny_disarmed_by_escape_and_tab_switch() {
    let snapshot = SnapshotBuilder::new().build();
    for interruption in [
        PanelAction::Cancel,
        PanelAction::SelectTab(Tab::Send),
        PanelAction::EditDenial("changed".to_string()),
    ] {
        let (_, emitted) = run(
            &snapshot,
            deny_state(),
            vec![
                click(Control::DenyButton),
                interruption,
                PanelAction::SelectTab(Tab::Deny),
                click(Control::DenyButton),
            ],
        );
        assert!(emitted.is_empty());
    }
}

#[test]
fn test_deny_placeholder() {
    let view = deny_view(&SnapshotBuilder::new().build(), &deny_state());
    assert_eq!(view.placeholder, DENIAL_PLACEHOLDER);
    assert_eq!(view.text, "");
}

#[test]
fn test_deny_by_keyboard() {
    let snapshot = SnapshotBuilder::new().build();
    let (state, emitted) = run(
        &snapshot,
        deny_state(),
        vec![
            PanelAction::Activate,
            PanelAction::EditDenial("no".to_string()),
            PanelAction::Cancel,
            PanelAction::MoveDown,
            PanelAction::Activate,
            PanelAction::Activate,
        ],
    );
    assert!(!state.editing_denial);
    assert_eq!(
        emitted,
        vec![Action::DenyErt {
            reason: "no".to_string()
        }]
    );
}

// ============================================================================
// Snapshot replacement
// ============================================================================

#[test]
fn test_new_snapshot_keeps_local_state() {
    let first = SnapshotBuilder::new().request("t", "A", "1", "m").build();
    let (state, _) = run(
        &first,
        deny_state(),
        vec![PanelAction::EditDenial("draft".to_string())],
    );

    let second = SnapshotBuilder::new().answered(true).build();
    let vm = compute_panel_view_model(&second, &state, VISIBLE);
    assert_eq!(vm.body.tab(), Tab::Deny);
    assert_eq!(vm.overview.answered.label, "Answered");
    match vm.body {
        BodyViewModel::Deny(deny) => assert_eq!(deny.text, "draft"),
        _ => unreachable!(),
    }
}
