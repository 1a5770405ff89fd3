//! ERT manager model types for testable state management
//!
//! This module separates local UI state (`PanelState`) from the rendered
//! view (`PanelViewModel`). Every decision the panel makes lives here as a
//! pure function: which tab is selected, which button is highlighted and
//! which backend action a press emits. The iocraft components only draw the
//! view model and forward input.

use std::fmt;
use std::str::FromStr;

use iocraft::prelude::{KeyCode, KeyModifiers};

use crate::backend::{Action, SlotRole};
use crate::error::ErtError;
use crate::html::decode_html_entities;
use crate::snapshot::{ErtType, RemoteSnapshot};
use crate::tui::components::icon::Icon;
use crate::tui::components::{Shortcut, confirm_shortcuts, editing_shortcuts, panel_shortcuts};

/// Counts offered for every editable role
pub const SLOT_OPTIONS: [u8; 6] = [0, 1, 2, 3, 4, 5];

/// Shown under the overview toggle
pub const ANSWERED_TOOLTIP: &str =
    "Checking this box will disable the next ERT reminder notification";

/// Shown under the commander toggle
pub const COMMANDER_TOOLTIP: &str = "The team must have a leader";

/// Shown under each request sender button
pub const SENDER_TOOLTIP: &str = "View player panel";

pub const DENIAL_PLACEHOLDER: &str =
    "Enter ERT denial reason here,\nMultiline input is accepted.";

pub const EMPTY_REQUESTS_TEXT: &str = "No ERT requests.";

/// Terminal rows taken by one request section (border, title, message)
pub const REQUEST_SECTION_HEIGHT: usize = 4;

/// Terminal rows above and below the tab body (overview, tabs, footer)
pub const BODY_CHROME_ROWS: usize = 12;

/// The three tab bodies
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Tab {
    #[default]
    Send,
    Read,
    Deny,
}

impl Tab {
    /// Tabs in selector order
    pub const ALL: [Tab; 3] = [Tab::Send, Tab::Read, Tab::Deny];

    pub fn title(&self) -> &'static str {
        match self {
            Tab::Send => "Send ERT",
            Tab::Read => "Read ERT Requests",
            Tab::Deny => "Deny ERT",
        }
    }

    pub fn icon(&self) -> Icon {
        match self {
            Tab::Send => Icon::Ambulance,
            Tab::Read => Icon::Book,
            Tab::Deny => Icon::Times,
        }
    }

    pub fn index(&self) -> usize {
        match self {
            Tab::Send => 0,
            Tab::Read => 1,
            Tab::Deny => 2,
        }
    }

    pub fn from_index(index: usize) -> Option<Tab> {
        Tab::ALL.get(index).copied()
    }

    pub fn next(&self) -> Tab {
        match self {
            Tab::Send => Tab::Read,
            Tab::Read => Tab::Deny,
            Tab::Deny => Tab::Send,
        }
    }

    pub fn prev(&self) -> Tab {
        match self {
            Tab::Send => Tab::Deny,
            Tab::Read => Tab::Send,
            Tab::Deny => Tab::Read,
        }
    }
}

impl fmt::Display for Tab {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Tab::Send => write!(f, "send"),
            Tab::Read => write!(f, "read"),
            Tab::Deny => write!(f, "deny"),
        }
    }
}

impl FromStr for Tab {
    type Err = ErtError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "send" => Ok(Tab::Send),
            "read" => Ok(Tab::Read),
            "deny" => Ok(Tab::Deny),
            _ => Err(ErtError::InvalidTab(s.to_string())),
        }
    }
}

/// Every pressable control on the panel
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Control {
    /// Overview "Answered"/"Unanswered" checkbox
    AnsweredToggle,
    /// Header button of the send view
    ErtType(ErtType),
    /// "Spawn on briefing?" toggle
    AdminToggle,
    /// Commander toggle, drawn as a button but intentionally inert
    CommanderToggle,
    /// One of the six count buttons of an editable role
    Slot { role: SlotRole, count: u8 },
    /// "Send ERT" dispatch button
    Dispatch,
    /// Sender button of the request at this index
    SenderPanel(usize),
    /// Denial reason text input
    DenialInput,
    /// Two-step "Deny ERT" button
    DenyButton,
}

impl Control {
    /// Static tooltip of the control, if it has one
    pub fn tooltip(&self) -> Option<&'static str> {
        match self {
            Control::AnsweredToggle => Some(ANSWERED_TOOLTIP),
            Control::CommanderToggle => Some(COMMANDER_TOOLTIP),
            Control::SenderPanel(_) => Some(SENDER_TOOLTIP),
            _ => None,
        }
    }
}

/// Keyboard cursor inside the current tab body
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Focus {
    pub row: usize,
    pub col: usize,
}

/// Local UI state owned by the panel
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PanelState {
    /// Selected tab
    pub tab: Tab,
    /// Denial reason being typed; kept after submission
    pub denial_text: String,
    /// Whether the deny button is waiting for its confirming press
    pub deny_armed: bool,
    /// Whether keystrokes go to the denial text input
    pub editing_denial: bool,
    /// Keyboard cursor
    pub focus: Focus,
    /// First request section shown in the read view
    pub scroll_offset: usize,
}

/// All local interactions with the panel
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PanelAction {
    /// Select a tab by clicking it or pressing its number
    SelectTab(Tab),
    /// Cycle to the next tab
    NextTab,
    /// Cycle to the previous tab
    PrevTab,
    /// Move the cursor one row up
    MoveUp,
    /// Move the cursor one row down
    MoveDown,
    /// Move the cursor one control left
    MoveLeft,
    /// Move the cursor one control right
    MoveRight,
    /// Press the control under the cursor
    Activate,
    /// Press a specific control (mouse click or shortcut)
    Press(Control),
    /// Replace the denial text
    EditDenial(String),
    /// Leave the text input and disarm the deny button
    Cancel,
    /// Quit the application
    Quit,
}

// ============================================================================
// View models
// ============================================================================

/// Semantic colour of a control, resolved by the theme
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Tone {
    #[default]
    Default,
    /// Attention colour
    Bad,
    Orange,
    Red,
    Green,
}

/// A rendered button
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ButtonViewModel {
    pub control: Control,
    pub label: String,
    pub icon: Option<Icon>,
    pub selected: bool,
    /// Background accent
    pub tone: Tone,
    /// Label colour
    pub text_tone: Tone,
    pub tooltip: Option<&'static str>,
    pub focused: bool,
}

impl ButtonViewModel {
    fn new(control: Control, label: impl Into<String>) -> Self {
        Self {
            control,
            label: label.into(),
            icon: None,
            selected: false,
            tone: Tone::Default,
            text_tone: Tone::Default,
            tooltip: control.tooltip(),
            focused: false,
        }
    }

    fn icon(mut self, icon: Icon) -> Self {
        self.icon = Some(icon);
        self
    }

    fn selected(mut self, selected: bool) -> Self {
        self.selected = selected;
        self
    }

    fn tone(mut self, tone: Tone) -> Self {
        self.tone = tone;
        self
    }

    fn text_tone(mut self, tone: Tone) -> Self {
        self.text_tone = tone;
        self
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OverviewViewModel {
    pub security_level: String,
    /// Raw colour string from the backend
    pub security_level_color: String,
    pub answered: ButtonViewModel,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TabViewModel {
    pub tab: Tab,
    pub title: &'static str,
    pub icon: Icon,
    pub selected: bool,
}

/// Right-hand side of a labeled row
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RowContent {
    Buttons(Vec<ButtonViewModel>),
    Text { text: String, tone: Tone },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LabeledRow {
    pub label: &'static str,
    pub content: RowContent,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SendErtViewModel {
    pub header: Vec<ButtonViewModel>,
    pub rows: Vec<LabeledRow>,
}

impl SendErtViewModel {
    /// Find a row by its label
    pub fn row(&self, label: &str) -> Option<&LabeledRow> {
        self.rows.iter().find(|row| row.label == label)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RequestSectionViewModel {
    pub title: String,
    pub sender: ButtonViewModel,
    pub message: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReadRequestsViewModel {
    /// Sections currently scrolled into view, in server order
    pub sections: Vec<RequestSectionViewModel>,
    /// Total number of requests
    pub total: usize,
    /// Index of the first visible section
    pub scroll_offset: usize,
    pub show_empty_state: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DenyErtViewModel {
    pub text: String,
    pub placeholder: &'static str,
    pub input_focused: bool,
    pub editing: bool,
    pub button: ButtonViewModel,
}

/// Body of the selected tab
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BodyViewModel {
    Send(SendErtViewModel),
    Read(ReadRequestsViewModel),
    Deny(DenyErtViewModel),
}

impl BodyViewModel {
    pub fn tab(&self) -> Tab {
        match self {
            BodyViewModel::Send(_) => Tab::Send,
            BodyViewModel::Read(_) => Tab::Read,
            BodyViewModel::Deny(_) => Tab::Deny,
        }
    }
}

/// Computed view model for the entire panel
#[derive(Debug, Clone)]
pub struct PanelViewModel {
    pub overview: OverviewViewModel,
    pub tabs: Vec<TabViewModel>,
    pub body: BodyViewModel,
    /// Tooltip of the control under the cursor
    pub tooltip: Option<&'static str>,
    pub shortcuts: Vec<Shortcut>,
}

// ============================================================================
// Pure Functions
// ============================================================================

/// Remote count of an editable role
pub fn slot_count(snapshot: &RemoteSnapshot, role: SlotRole) -> Option<i64> {
    match role {
        SlotRole::Security => snapshot.security_slots,
        SlotRole::Medical => snapshot.medical_slots,
        SlotRole::Engineering => snapshot.engineering_slots,
        SlotRole::Inquisitor => snapshot.inquisitor_slots,
        SlotRole::Janitor => snapshot.janitor_slots,
    }
}

/// Highlight of an ERT type header button.
///
/// Only the current type is highlighted; Red gets its own accent.
pub fn ert_type_tone(button: ErtType, current: Option<ErtType>) -> Tone {
    if current != Some(button) {
        return Tone::Default;
    }
    match button {
        ErtType::Amber | ErtType::Gamma => Tone::Orange,
        ErtType::Red => Tone::Red,
    }
}

/// Text of the "Total Slots" readout
pub fn total_slots_text(snapshot: &RemoteSnapshot) -> String {
    format!(
        "{} total, versus {} spawnpoints",
        snapshot.total_slots, snapshot.ert_spawnpoints
    )
}

/// Red when the reported total exceeds the spawnpoints, green otherwise
pub fn total_slots_tone(snapshot: &RemoteSnapshot) -> Tone {
    if snapshot.total_slots > snapshot.ert_spawnpoints {
        Tone::Red
    } else {
        Tone::Green
    }
}

/// Focusable controls of a tab, one inner vector per row
pub fn focus_grid(tab: Tab, snapshot: &RemoteSnapshot) -> Vec<Vec<Control>> {
    match tab {
        Tab::Send => {
            let mut grid = vec![
                ErtType::ALL.iter().map(|t| Control::ErtType(*t)).collect(),
                vec![Control::AdminToggle],
                vec![Control::CommanderToggle],
            ];
            for role in SlotRole::ALL {
                grid.push(
                    SLOT_OPTIONS
                        .iter()
                        .map(|count| Control::Slot {
                            role,
                            count: *count,
                        })
                        .collect(),
                );
            }
            grid.push(vec![Control::Dispatch]);
            grid
        }
        Tab::Read => (0..snapshot.ert_request_messages.len())
            .map(|i| vec![Control::SenderPanel(i)])
            .collect(),
        Tab::Deny => vec![vec![Control::DenialInput], vec![Control::DenyButton]],
    }
}

/// Control under the cursor, clamped to the current grid
pub fn focused_control(state: &PanelState, snapshot: &RemoteSnapshot) -> Option<Control> {
    let grid = focus_grid(state.tab, snapshot);
    let row = grid.get(state.focus.row.min(grid.len().saturating_sub(1)))?;
    row.get(state.focus.col.min(row.len().saturating_sub(1)))
        .copied()
}

/// Position of a control in the grid of its tab
fn locate(control: Control, tab: Tab, snapshot: &RemoteSnapshot) -> Option<Focus> {
    focus_grid(tab, snapshot)
        .iter()
        .enumerate()
        .find_map(|(row, controls)| {
            controls
                .iter()
                .position(|c| *c == control)
                .map(|col| Focus { row, col })
        })
}

/// Number of request sections that fit in a window of `window_rows`
pub fn visible_request_sections(window_rows: usize) -> usize {
    (window_rows.saturating_sub(BODY_CHROME_ROWS) / REQUEST_SECTION_HEIGHT).max(1)
}

/// Adjust scroll offset to keep selected item visible
///
/// Returns the new scroll offset that ensures the selected index is visible
/// within the list height.
pub fn adjust_scroll(scroll_offset: usize, selected_index: usize, list_height: usize) -> usize {
    if list_height == 0 {
        return 0;
    }

    if selected_index < scroll_offset {
        return selected_index;
    }

    if selected_index >= scroll_offset + list_height {
        return selected_index.saturating_sub(list_height - 1);
    }

    scroll_offset
}

/// Press a control: update local state and return the action to emit, if any
fn press(
    mut state: PanelState,
    control: Control,
    snapshot: &RemoteSnapshot,
) -> (PanelState, Option<Action>) {
    // Pressing anything else blurs the deny button
    if control != Control::DenyButton {
        state.deny_armed = false;
    }

    let emitted = match control {
        Control::AnsweredToggle => Some(Action::ToggleErtRequestAnswered),
        Control::ErtType(ert_type) => Some(Action::SetErtType(ert_type)),
        Control::AdminToggle => Some(Action::ToggleAdmin),
        // Display-only until the backend supports toggling the commander
        Control::CommanderToggle => None,
        Control::Slot { role, count } => Some(Action::SetSlots { role, count }),
        Control::Dispatch => Some(Action::DispatchErt),
        Control::SenderPanel(index) => {
            snapshot
                .ert_request_messages
                .get(index)
                .map(|request| Action::ViewPlayerPanel {
                    uid: request.sender_uid.clone(),
                })
        }
        Control::DenialInput => {
            state.editing_denial = true;
            None
        }
        Control::DenyButton => {
            state.editing_denial = false;
            if state.deny_armed {
                state.deny_armed = false;
                Some(Action::DenyErt {
                    reason: state.denial_text.clone(),
                })
            } else {
                state.deny_armed = true;
                None
            }
        }
    };

    (state, emitted)
}

/// Move the cursor to `row`, keeping the column within the row
fn move_to_row(mut state: PanelState, row: usize, grid: &[Vec<Control>]) -> PanelState {
    if grid.is_empty() {
        state.focus = Focus::default();
        return state;
    }
    let row = row.min(grid.len() - 1);
    let col = state.focus.col.min(grid[row].len().saturating_sub(1));
    state.focus = Focus { row, col };
    state
}

/// Pure function: apply action to state (reducer pattern)
///
/// Returns the new state and the backend action the interaction emits, if
/// any. At most one backend action is emitted per interaction. `Quit` is
/// handled by the component and leaves the state unchanged.
pub fn reduce_panel_state(
    mut state: PanelState,
    action: PanelAction,
    snapshot: &RemoteSnapshot,
    visible_sections: usize,
) -> (PanelState, Option<Action>) {
    let grid = focus_grid(state.tab, snapshot);

    match action {
        PanelAction::SelectTab(tab) => {
            if tab != state.tab {
                tracing::trace!(from = %state.tab, to = %tab, "switching tab");
                state.tab = tab;
                state.focus = Focus::default();
                state.scroll_offset = 0;
                state.deny_armed = false;
                state.editing_denial = false;
            }
            (state, None)
        }
        PanelAction::NextTab => {
            let next = state.tab.next();
            reduce_panel_state(state, PanelAction::SelectTab(next), snapshot, visible_sections)
        }
        PanelAction::PrevTab => {
            let prev = state.tab.prev();
            reduce_panel_state(state, PanelAction::SelectTab(prev), snapshot, visible_sections)
        }
        PanelAction::MoveUp | PanelAction::MoveDown => {
            let current_row = state.focus.row.min(grid.len().saturating_sub(1));
            let row = if action == PanelAction::MoveUp {
                current_row.saturating_sub(1)
            } else {
                current_row + 1
            };
            state = move_to_row(state, row, &grid);
            if focused_control(&state, snapshot) != Some(Control::DenyButton) {
                state.deny_armed = false;
            }
            if state.tab == Tab::Read {
                state.scroll_offset =
                    adjust_scroll(state.scroll_offset, state.focus.row, visible_sections);
            }
            (state, None)
        }
        PanelAction::MoveLeft => {
            state.focus.col = state.focus.col.saturating_sub(1);
            state = move_to_row(state, state.focus.row, &grid);
            (state, None)
        }
        PanelAction::MoveRight => {
            state.focus.col += 1;
            state = move_to_row(state, state.focus.row, &grid);
            (state, None)
        }
        PanelAction::Activate => match focused_control(&state, snapshot) {
            Some(control) => press(state, control, snapshot),
            None => (state, None),
        },
        PanelAction::Press(control) => {
            // A click also moves the cursor onto the clicked control
            if let Some(focus) = locate(control, state.tab, snapshot) {
                state.focus = focus;
            }
            press(state, control, snapshot)
        }
        PanelAction::EditDenial(text) => {
            state.denial_text = text;
            state.deny_armed = false;
            (state, None)
        }
        PanelAction::Cancel => {
            state.editing_denial = false;
            state.deny_armed = false;
            (state, None)
        }
        PanelAction::Quit => (state, None),
    }
}

/// Convert a key event to a PanelAction (pure function)
///
/// While the denial input is being edited only `Esc` and `Ctrl+Q` are
/// mapped; every other key belongs to the text input.
pub fn key_to_action(
    code: KeyCode,
    modifiers: KeyModifiers,
    state: &PanelState,
) -> Option<PanelAction> {
    if let KeyCode::Char('q') = code
        && modifiers.contains(KeyModifiers::CONTROL)
    {
        return Some(PanelAction::Quit);
    }

    if state.editing_denial {
        return match code {
            KeyCode::Esc => Some(PanelAction::Cancel),
            _ => None,
        };
    }

    match code {
        KeyCode::Char(c @ '1'..='3') => {
            let index = c as usize - '1' as usize;
            Tab::from_index(index).map(PanelAction::SelectTab)
        }
        KeyCode::Tab => Some(PanelAction::NextTab),
        KeyCode::BackTab => Some(PanelAction::PrevTab),

        KeyCode::Char('k') | KeyCode::Up => Some(PanelAction::MoveUp),
        KeyCode::Char('j') | KeyCode::Down => Some(PanelAction::MoveDown),
        KeyCode::Char('h') | KeyCode::Left => Some(PanelAction::MoveLeft),
        KeyCode::Char('l') | KeyCode::Right => Some(PanelAction::MoveRight),

        KeyCode::Enter | KeyCode::Char(' ') => Some(PanelAction::Activate),
        KeyCode::Char('a') => Some(PanelAction::Press(Control::AnsweredToggle)),

        KeyCode::Esc => Some(PanelAction::Cancel),
        KeyCode::Char('q') => Some(PanelAction::Quit),

        _ => None,
    }
}

/// Footer shortcuts for the current state
pub fn shortcuts_for(state: &PanelState) -> Vec<Shortcut> {
    if state.editing_denial {
        editing_shortcuts()
    } else if state.deny_armed {
        confirm_shortcuts()
    } else {
        panel_shortcuts()
    }
}

fn compute_overview(snapshot: &RemoteSnapshot) -> OverviewViewModel {
    let answered = snapshot.ert_request_answered;
    let toggle = ButtonViewModel::new(
        Control::AnsweredToggle,
        if answered { "Answered" } else { "Unanswered" },
    )
    .icon(if answered {
        Icon::CheckSquare
    } else {
        Icon::Square
    })
    .text_tone(if answered { Tone::Default } else { Tone::Bad });

    OverviewViewModel {
        security_level: snapshot.security_level.clone(),
        security_level_color: snapshot.security_level_color.clone(),
        answered: toggle,
    }
}

fn toggle_button(control: Control, on: bool) -> ButtonViewModel {
    ButtonViewModel::new(control, if on { "Yes" } else { "No" })
        .icon(if on { Icon::ToggleOn } else { Icon::ToggleOff })
        .selected(on)
}

fn compute_send(snapshot: &RemoteSnapshot, focused: Option<Control>) -> SendErtViewModel {
    let focus = |mut button: ButtonViewModel| {
        button.focused = focused == Some(button.control);
        button
    };

    let header = ErtType::ALL
        .iter()
        .map(|ert_type| {
            focus(
                ButtonViewModel::new(Control::ErtType(*ert_type), ert_type.as_str())
                    .tone(ert_type_tone(*ert_type, snapshot.ert_type)),
            )
        })
        .collect();

    let mut rows = vec![
        LabeledRow {
            label: "Spawn on briefing?",
            content: RowContent::Buttons(vec![focus(toggle_button(
                Control::AdminToggle,
                snapshot.admin_slots,
            ))]),
        },
        LabeledRow {
            label: "Commander",
            content: RowContent::Buttons(vec![focus(toggle_button(
                Control::CommanderToggle,
                snapshot.commander_slots,
            ))]),
        },
    ];

    for role in SlotRole::ALL {
        let current = slot_count(snapshot, role);
        let buttons = SLOT_OPTIONS
            .iter()
            .map(|count| {
                focus(
                    ButtonViewModel::new(
                        Control::Slot {
                            role,
                            count: *count,
                        },
                        count.to_string(),
                    )
                    .selected(current == Some(i64::from(*count))),
                )
            })
            .collect();
        rows.push(LabeledRow {
            label: role.label(),
            content: RowContent::Buttons(buttons),
        });
    }

    rows.push(LabeledRow {
        label: "Total Slots",
        content: RowContent::Text {
            text: total_slots_text(snapshot),
            tone: total_slots_tone(snapshot),
        },
    });
    rows.push(LabeledRow {
        label: "Dispatch",
        content: RowContent::Buttons(vec![focus(
            ButtonViewModel::new(Control::Dispatch, "Send ERT").icon(Icon::Ambulance),
        )]),
    });

    SendErtViewModel { header, rows }
}

fn compute_read(
    snapshot: &RemoteSnapshot,
    state: &PanelState,
    focused: Option<Control>,
    visible_sections: usize,
) -> ReadRequestsViewModel {
    let total = snapshot.ert_request_messages.len();
    let scroll_offset = state.scroll_offset.min(total.saturating_sub(1));

    let sections = snapshot
        .ert_request_messages
        .iter()
        .enumerate()
        .skip(scroll_offset)
        .take(visible_sections.max(1))
        .map(|(index, request)| {
            let mut sender = ButtonViewModel::new(
                Control::SenderPanel(index),
                request.sender_real_name.clone(),
            );
            sender.focused = focused == Some(sender.control);
            RequestSectionViewModel {
                title: decode_html_entities(&request.time),
                sender,
                message: request.message.clone(),
            }
        })
        .collect();

    ReadRequestsViewModel {
        sections,
        total,
        scroll_offset,
        show_empty_state: total == 0,
    }
}

fn compute_deny(state: &PanelState, focused: Option<Control>) -> DenyErtViewModel {
    let mut button = if state.deny_armed {
        ButtonViewModel::new(Control::DenyButton, "Confirm?")
            .icon(Icon::Times)
            .tone(Tone::Bad)
    } else {
        ButtonViewModel::new(Control::DenyButton, "Deny ERT").icon(Icon::Times)
    };
    button.focused = focused == Some(Control::DenyButton);

    DenyErtViewModel {
        text: state.denial_text.clone(),
        placeholder: DENIAL_PLACEHOLDER,
        input_focused: focused == Some(Control::DenialInput),
        editing: state.editing_denial,
        button,
    }
}

/// Pure function: compute view model from the snapshot and local state
pub fn compute_panel_view_model(
    snapshot: &RemoteSnapshot,
    state: &PanelState,
    visible_sections: usize,
) -> PanelViewModel {
    let focused = focused_control(state, snapshot);

    let tabs = Tab::ALL
        .iter()
        .map(|tab| TabViewModel {
            tab: *tab,
            title: tab.title(),
            icon: tab.icon(),
            selected: *tab == state.tab,
        })
        .collect();

    let body = match state.tab {
        Tab::Send => BodyViewModel::Send(compute_send(snapshot, focused)),
        Tab::Read => BodyViewModel::Read(compute_read(snapshot, state, focused, visible_sections)),
        Tab::Deny => BodyViewModel::Deny(compute_deny(state, focused)),
    };

    PanelViewModel {
        overview: compute_overview(snapshot),
        tabs,
        body,
        tooltip: focused.and_then(|c| c.tooltip()),
        shortcuts: shortcuts_for(state),
    }
}

// ============================================================================
// Tests
// ============================================================================
