//! Outbound commands sent from the panel to the backend.

use serde::Serialize;
use serde_json::{Map, Value, json};

use crate::snapshot::ErtType;

/// Role whose slot count can be picked from the send view
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SlotRole {
    Security,
    Medical,
    Engineering,
    Inquisitor,
    Janitor,
}

impl SlotRole {
    /// Editable roles in display order
    pub const ALL: [SlotRole; 5] = [
        SlotRole::Security,
        SlotRole::Medical,
        SlotRole::Engineering,
        SlotRole::Inquisitor,
        SlotRole::Janitor,
    ];

    /// Row label shown in the send view
    pub fn label(&self) -> &'static str {
        match self {
            SlotRole::Security => "Security",
            SlotRole::Medical => "Medical",
            SlotRole::Engineering => "Engineering",
            SlotRole::Inquisitor => "inquisitor",
            SlotRole::Janitor => "Janitor",
        }
    }

    /// Name of the action that sets this role's count
    pub fn action_name(&self) -> &'static str {
        match self {
            SlotRole::Security => "setSec",
            SlotRole::Medical => "setMed",
            SlotRole::Engineering => "setEng",
            SlotRole::Inquisitor => "setPar",
            SlotRole::Janitor => "setJan",
        }
    }

    /// Payload key carrying the new count.
    ///
    /// The inquisitor key does not follow the action name; the backend reads
    /// `set_par`.
    pub fn payload_key(&self) -> &'static str {
        match self {
            SlotRole::Security => "setSec",
            SlotRole::Medical => "setMed",
            SlotRole::Engineering => "setEng",
            SlotRole::Inquisitor => "set_par",
            SlotRole::Janitor => "setJan",
        }
    }
}

/// A named, optionally payloaded command for the backend
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    ToggleErtRequestAnswered,
    SetErtType(ErtType),
    ToggleAdmin,
    SetSlots { role: SlotRole, count: u8 },
    DispatchErt,
    ViewPlayerPanel { uid: String },
    DenyErt { reason: String },
}

impl Action {
    /// Wire name of the action
    pub fn name(&self) -> &'static str {
        match self {
            Action::ToggleErtRequestAnswered => "toggleErtRequestAnswered",
            Action::SetErtType(_) => "ertType",
            Action::ToggleAdmin => "toggleAdmin",
            Action::SetSlots { role, .. } => role.action_name(),
            Action::DispatchErt => "dispatchErt",
            Action::ViewPlayerPanel { .. } => "view_player_panel",
            Action::DenyErt { .. } => "denyErt",
        }
    }

    /// Payload object, or `None` for actions sent without one
    pub fn payload(&self) -> Option<Value> {
        match self {
            Action::ToggleErtRequestAnswered | Action::ToggleAdmin | Action::DispatchErt => None,
            Action::SetErtType(ert_type) => Some(json!({ "ertType": ert_type.as_str() })),
            Action::SetSlots { role, count } => {
                let mut payload = Map::new();
                payload.insert(role.payload_key().to_string(), json!(count));
                Some(Value::Object(payload))
            }
            Action::ViewPlayerPanel { uid } => Some(json!({ "uid": uid })),
            Action::DenyErt { reason } => Some(json!({ "reason": reason })),
        }
    }

    /// Wire envelope: `{"action": name}` plus `"payload"` when present
    pub fn to_envelope(&self) -> ActionEnvelope {
        ActionEnvelope {
            action: self.name(),
            payload: self.payload(),
        }
    }
}

/// Serialized form of an action
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ActionEnvelope {
    pub action: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub payload: Option<Value>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_names_and_payloads() {
        let cases = [
            (Action::ToggleErtRequestAnswered, "toggleErtRequestAnswered", None),
            (
                Action::SetErtType(ErtType::Red),
                "ertType",
                Some(json!({"ertType": "Red"})),
            ),
            (Action::ToggleAdmin, "toggleAdmin", None),
            (Action::DispatchErt, "dispatchErt", None),
            (
                Action::ViewPlayerPanel {
                    uid: "abc".to_string(),
                },
                "view_player_panel",
                Some(json!({"uid": "abc"})),
            ),
            (
                Action::DenyErt {
                    reason: "not now".to_string(),
                },
                "denyErt",
                Some(json!({"reason": "not now"})),
            ),
        ];

        for (action, name, payload) in cases {
            assert_eq!(action.name(), name);
            assert_eq!(action.payload(), payload);
        }
    }

    #[test]
    fn test_slot_payload_keys() {
        let expected = [
            (SlotRole::Security, "setSec", "setSec"),
            (SlotRole::Medical, "setMed", "setMed"),
            (SlotRole::Engineering, "setEng", "setEng"),
            (SlotRole::Inquisitor, "setPar", "set_par"),
            (SlotRole::Janitor, "setJan", "setJan"),
        ];
        for (role, name, key) in expected {
            let action = Action::SetSlots { role, count: 4 };
            assert_eq!(action.name(), name);
            let mut payload = Map::new();
            payload.insert(key.to_string(), json!(4));
            assert_eq!(action.payload(), Some(Value::Object(payload)));
        }
    }

    #[test]
    fn test_envelope_omits_missing_payload() {
        let line = serde_json::to_string(&Action::DispatchErt.to_envelope()).unwrap();
        insta::assert_snapshot!(line, @r#"{"action":"dispatchErt"}"#);

        let line = serde_json::to_string(
            &Action::SetSlots {
                role: SlotRole::Inquisitor,
                count: 2,
            }
            .to_envelope(),
        )
        .unwrap();
        insta::assert_snapshot!(line, @r#"{"action":"setPar","payload":{"set_par":2}}"#);
    }
}
