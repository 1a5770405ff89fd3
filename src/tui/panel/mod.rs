//! ERT manager panel (`ert-manager panel`)
//!
//! The root component owns the local UI state and the latest snapshot.
//! Everything it draws comes from `model::compute_panel_view_model`, and
//! every interaction goes through `model::reduce_panel_state`, which
//! decides what (if anything) is sent to the backend.

pub mod deny_ert;
pub mod model;
pub mod overview;
pub mod read_requests;
pub mod send_ert;

use std::sync::Arc;

use iocraft::prelude::*;

use crate::backend::{ActionSink, SnapshotReceiver};
use crate::snapshot::RemoteSnapshot;
use crate::tui::components::{Footer, Tabs};
use crate::tui::theme::theme;

pub use deny_ert::{DenyErt, DenyErtProps};
pub use model::{
    BodyViewModel, Control, PanelAction, PanelState, PanelViewModel, Tab,
    compute_panel_view_model, key_to_action, reduce_panel_state, visible_request_sections,
};
pub use overview::{Overview, OverviewProps};
pub use read_requests::{ReadRequests, ReadRequestsProps};
pub use send_ert::{SendErt, SendErtProps};

/// Default panel width in cells (360 logical units)
pub const DEFAULT_WIDTH: u16 = 60;
/// Default panel height in cells (505 logical units)
pub const DEFAULT_HEIGHT: u16 = 42;

/// Apply a panel action and forward the emitted backend action to the sink
///
/// Returns the new state.
pub fn dispatch(
    state: PanelState,
    action: PanelAction,
    snapshot: &RemoteSnapshot,
    visible_sections: usize,
    sink: Option<&Arc<dyn ActionSink>>,
) -> PanelState {
    let (next, emitted) = reduce_panel_state(state, action, snapshot, visible_sections);
    if let Some(action) = emitted {
        tracing::debug!(action = action.name(), "emitting action");
        match sink {
            Some(sink) => sink.act(action),
            None => tracing::warn!(action = action.name(), "no action sink, dropping action"),
        }
    }
    next
}

/// Props for the PanelView component
#[derive(Default, Props)]
pub struct PanelViewProps {
    pub model: Option<PanelViewModel>,
    pub width: Option<u16>,
    pub height: Option<u16>,
    pub on_press: Option<Handler<Control>>,
    pub on_select_tab: Option<Handler<Tab>>,
    pub on_edit_denial: Option<Handler<String>>,
    pub on_focus_denial: Option<Handler<()>>,
}

/// Stateless panel layout
///
/// Layout:
/// ```text
/// +------------------------------------------+
/// | Overview                                 |
/// +------------------------------------------+
/// | Send ERT | Read ERT Requests | Deny ERT  |
/// +------------------------------------------+
/// | Tab body                                 |
/// |                                          |
/// +------------------------------------------+
/// | Tooltip / Footer                         |
/// +------------------------------------------+
/// ```
#[component]
pub fn PanelView(props: &PanelViewProps) -> impl Into<AnyElement<'static>> {
    let theme = theme();
    let Some(model) = props.model.as_ref() else {
        return element!(View).into_any();
    };
    let on_press = props.on_press.clone();

    let body = match &model.body {
        BodyViewModel::Send(send) => element! {
            SendErt(model: Some(send.clone()), on_press: on_press.clone())
        }
        .into_any(),
        BodyViewModel::Read(read) => element! {
            ReadRequests(model: Some(read.clone()), on_press: on_press.clone())
        }
        .into_any(),
        BodyViewModel::Deny(deny) => element! {
            DenyErt(
                model: Some(deny.clone()),
                on_press: on_press.clone(),
                on_edit: props.on_edit_denial.clone(),
                on_focus_input: props.on_focus_denial.clone(),
            )
        }
        .into_any(),
    };

    element! {
        View(
            width: Size::Length(u32::from(props.width.unwrap_or(DEFAULT_WIDTH))),
            height: Size::Length(u32::from(props.height.unwrap_or(DEFAULT_HEIGHT))),
            flex_direction: FlexDirection::Column,
            background_color: theme.background,
            overflow: Overflow::Hidden,
        ) {
            Overview(model: Some(model.overview.clone()), on_press: on_press.clone())
            Tabs(tabs: model.tabs.clone(), on_select: props.on_select_tab.clone())
            View(
                width: 100pct,
                flex_grow: 1.0,
                flex_direction: FlexDirection::Column,
                overflow: Overflow::Hidden,
            ) {
                #(Some(body))
            }
            Footer(
                shortcuts: model.shortcuts.clone(),
                tooltip: model.tooltip.map(str::to_string),
            )
        }
    }
    .into_any()
}

/// Props for the ErtManager component
#[derive(Default, Props)]
pub struct ErtManagerProps {
    /// Source of server snapshots; without one the panel shows defaults
    pub snapshots: Option<SnapshotReceiver>,
    /// Destination of emitted actions
    pub sink: Option<Arc<dyn ActionSink>>,
    /// Tab selected on start
    pub initial_tab: Tab,
    /// Window size in cells
    pub width: Option<u16>,
    pub height: Option<u16>,
}

/// Interactive ERT manager panel
#[component]
pub fn ErtManager(props: &ErtManagerProps, mut hooks: Hooks) -> impl Into<AnyElement<'static>> {
    let mut system = hooks.use_context_mut::<SystemContext>();

    let initial_snapshot = props
        .snapshots
        .as_ref()
        .map(|rx| rx.borrow().clone())
        .unwrap_or_default();
    let snapshot: State<RemoteSnapshot> = hooks.use_state(move || initial_snapshot);
    let initial_tab = props.initial_tab;
    let mut panel_state: State<PanelState> = hooks.use_state(move || PanelState {
        tab: initial_tab,
        ..PanelState::default()
    });
    let mut should_exit = hooks.use_state(|| false);

    let height = props.height.unwrap_or(DEFAULT_HEIGHT);
    let visible_sections = visible_request_sections(usize::from(height));

    // Replace the snapshot whenever the backend publishes a new one
    hooks.use_future({
        let receiver = props.snapshots.clone();
        let mut snapshot = snapshot;
        async move {
            let Some(mut receiver) = receiver else {
                return;
            };
            while receiver.changed().await.is_ok() {
                let next = receiver.borrow_and_update().clone();
                tracing::debug!("snapshot updated");
                snapshot.set(next);
            }
        }
    });

    let press_handler: Handler<Control> = hooks.use_async_handler({
        let sink = props.sink.clone();
        move |control: Control| {
            let mut panel_state = panel_state;
            let current = panel_state.read().clone();
            let next = dispatch(
                current,
                PanelAction::Press(control),
                &snapshot.read(),
                visible_sections,
                sink.as_ref(),
            );
            panel_state.set(next);
            async {}
        }
    });

    let select_tab_handler: Handler<Tab> = hooks.use_async_handler({
        let sink = props.sink.clone();
        move |tab: Tab| {
            let mut panel_state = panel_state;
            let current = panel_state.read().clone();
            let next = dispatch(
                current,
                PanelAction::SelectTab(tab),
                &snapshot.read(),
                visible_sections,
                sink.as_ref(),
            );
            panel_state.set(next);
            async {}
        }
    });

    let edit_handler: Handler<String> = hooks.use_async_handler({
        let sink = props.sink.clone();
        move |text: String| {
            let mut panel_state = panel_state;
            let current = panel_state.read().clone();
            let next = dispatch(
                current,
                PanelAction::EditDenial(text),
                &snapshot.read(),
                visible_sections,
                sink.as_ref(),
            );
            panel_state.set(next);
            async {}
        }
    });

    let focus_denial_handler: Handler<()> = hooks.use_async_handler({
        let press = press_handler.clone();
        move |()| {
            press(Control::DenialInput);
            async {}
        }
    });

    hooks.use_terminal_events({
        let sink = props.sink.clone();
        move |event| match event {
            TerminalEvent::Key(KeyEvent {
                code,
                kind,
                modifiers,
                ..
            }) if kind != KeyEventKind::Release => {
                let current = panel_state.read().clone();
                let Some(action) = key_to_action(code, modifiers, &current) else {
                    return;
                };
                if action == PanelAction::Quit {
                    should_exit.set(true);
                    return;
                }
                let next = dispatch(
                    current,
                    action,
                    &snapshot.read(),
                    visible_sections,
                    sink.as_ref(),
                );
                panel_state.set(next);
            }
            _ => {}
        }
    });

    if should_exit.get() {
        system.exit();
    }

    let model = compute_panel_view_model(&snapshot.read(), &panel_state.read(), visible_sections);

    element! {
        PanelView(
            model: Some(model),
            width: props.width,
            height: Some(height),
            on_press: Some(press_handler),
            on_select_tab: Some(select_tab_handler),
            on_edit_denial: Some(edit_handler),
            on_focus_denial: Some(focus_denial_handler),
        )
    }
}

/// Render the panel once, without interaction, as plain text
pub fn render_panel(
    snapshot: &RemoteSnapshot,
    tab: Tab,
    width: u16,
    height: u16,
) -> String {
    let state = PanelState {
        tab,
        ..PanelState::default()
    };
    let visible_sections = visible_request_sections(usize::from(height));
    let model = compute_panel_view_model(snapshot, &state, visible_sections);

    let mut element = element! {
        PanelView(model: Some(model), width: Some(width), height: Some(height))
    };
    element.render(Some(usize::from(width))).to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::backend::{Action, RecordingSink};

    #[test]
    fn test_dispatch_forwards_emitted_action() {
        let recording = Arc::new(RecordingSink::new());
        let sink: Arc<dyn ActionSink> = recording.clone();
        let snapshot = RemoteSnapshot::default();

        let state = dispatch(
            PanelState::default(),
            PanelAction::Press(Control::Dispatch),
            &snapshot,
            3,
            Some(&sink),
        );

        assert_eq!(state.tab, Tab::Send);
        assert_eq!(recording.actions(), vec![Action::DispatchErt]);
    }

    #[test]
    fn test_dispatch_without_emission_leaves_sink_untouched() {
        let recording = Arc::new(RecordingSink::new());
        let sink: Arc<dyn ActionSink> = recording.clone();

        dispatch(
            PanelState::default(),
            PanelAction::Press(Control::CommanderToggle),
            &RemoteSnapshot::default(),
            3,
            Some(&sink),
        );

        assert!(recording.actions().is_empty());
    }

    #[test]
    fn test_render_panel_send_tab() {
        let snapshot = RemoteSnapshot {
            security_level: "Green".to_string(),
            total_slots: 7,
            ert_spawnpoints: 5,
            ..RemoteSnapshot::default()
        };
        let output = render_panel(&snapshot, Tab::Send, DEFAULT_WIDTH, DEFAULT_HEIGHT);

        assert!(output.contains("Overview"));
        assert!(output.contains("Green"));
        assert!(output.contains("Unanswered"));
        assert!(output.contains("7 total, versus 5 spawnpoints"));
    }

    #[test]
    fn test_render_panel_with_non_ascii_level_color() {
        let snapshot = RemoteSnapshot {
            security_level: "Delta".to_string(),
            security_level_color: "#a€bc".to_string(),
            ..RemoteSnapshot::default()
        };
        let output = render_panel(&snapshot, Tab::Send, DEFAULT_WIDTH, DEFAULT_HEIGHT);
        assert!(output.contains("Delta"));
    }

    #[test]
    fn test_render_panel_read_tab_empty() {
        let output = render_panel(
            &RemoteSnapshot::default(),
            Tab::Read,
            DEFAULT_WIDTH,
            DEFAULT_HEIGHT,
        );
        assert!(output.contains("No ERT requests."));
    }
}
