//! Trigger sheets: declarative rules a block state runs when its
//! neighborhood changes. The game engine evaluates these; here they are
//! pure data, built by generators and serialized into the package.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// A named sheet of actions, optionally inheriting from a parent sheet.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TriggerSheet {
    pub id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub parent: Option<String>,
    #[serde(default)]
    pub on_update: Vec<TriggerAction>,
}

impl TriggerSheet {
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            parent: None,
            on_update: Vec::new(),
        }
    }

    pub fn set_parent(&mut self, parent: impl Into<String>) {
        self.parent = Some(parent.into());
    }

    /// Append an action to run on neighborhood updates.
    pub fn on_update(&mut self, action: TriggerAction) {
        self.on_update.push(action);
    }
}

/// An action a trigger sheet can run.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "action", rename_all = "snake_case")]
pub enum TriggerAction {
    /// Overwrite some of the state's string params.
    SetBlockStateParams {
        params: BTreeMap<String, String>,
        #[serde(skip_serializing_if = "Option::is_none")]
        condition: Option<Predicate>,
    },
}

impl TriggerAction {
    pub fn set_params(params: BTreeMap<String, String>) -> Self {
        TriggerAction::SetBlockStateParams {
            params,
            condition: None,
        }
    }

    /// Attach a condition; the action only runs when it holds.
    pub fn when(self, predicate: Predicate) -> Self {
        match self {
            TriggerAction::SetBlockStateParams { params, .. } => {
                TriggerAction::SetBlockStateParams {
                    params,
                    condition: Some(predicate),
                }
            }
        }
    }
}

/// Condition over the block's neighborhood.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Predicate {
    /// Any of the sub-conditions must hold.
    Or { or: Vec<Predicate> },
    /// All of the sub-conditions must hold.
    And { and: Vec<Predicate> },
    /// The neighbor at the offset carries the tag.
    BlockAt { block_at: NeighborQuery },
}

impl Predicate {
    pub fn block_at(offset: (i32, i32, i32), has_tag: impl Into<String>) -> Self {
        Predicate::BlockAt {
            block_at: NeighborQuery {
                offset: [offset.0, offset.1, offset.2],
                has_tag: has_tag.into(),
            },
        }
    }

    pub fn any(predicates: Vec<Predicate>) -> Self {
        Predicate::Or { or: predicates }
    }

    pub fn all(predicates: Vec<Predicate>) -> Self {
        Predicate::And { and: predicates }
    }
}

/// A tag query against one neighbor position.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NeighborQuery {
    pub offset: [i32; 3],
    pub has_tag: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_action_serialization_shape() {
        let mut params = BTreeMap::new();
        params.insert("north".to_string(), "true".to_string());

        let action = TriggerAction::set_params(params)
            .when(Predicate::block_at((0, 0, -1), "mods:connectable"));

        let json = serde_json::to_value(&action).unwrap();
        assert_eq!(json["action"], "set_block_state_params");
        assert_eq!(json["params"]["north"], "true");
        assert_eq!(json["condition"]["block_at"]["offset"][2], -1);
        assert_eq!(json["condition"]["block_at"]["has_tag"], "mods:connectable");
    }

    #[test]
    fn test_unconditional_action_omits_condition() {
        let action = TriggerAction::set_params(BTreeMap::new());
        let json = serde_json::to_value(&action).unwrap();
        assert!(json.get("condition").is_none());
    }

    #[test]
    fn test_predicate_round_trip() {
        let predicate = Predicate::any(vec![
            Predicate::block_at((1, 0, 0), "a"),
            Predicate::all(vec![Predicate::block_at((0, 1, 0), "b")]),
        ]);

        let json = serde_json::to_string(&predicate).unwrap();
        let back: Predicate = serde_json::from_str(&json).unwrap();
        match back {
            Predicate::Or { or } => {
                assert_eq!(or.len(), 2);
                assert!(matches!(or[0], Predicate::BlockAt { .. }));
                assert!(matches!(or[1], Predicate::And { .. }));
            }
            _ => panic!("expected Or"),
        }
    }

    #[test]
    fn test_sheet_collects_actions() {
        let mut sheet = TriggerSheet::new("pipe");
        sheet.set_parent("base:block_events_default");
        sheet.on_update(TriggerAction::set_params(BTreeMap::new()));
        sheet.on_update(
            TriggerAction::set_params(BTreeMap::new())
                .when(Predicate::block_at((0, 1, 0), "t")),
        );

        assert_eq!(sheet.on_update.len(), 2);
        assert_eq!(sheet.parent.as_deref(), Some("base:block_events_default"));
    }
}
