//! Todo Reducer
//!
//! Pure state transitions for the item list. Every action maps the current
//! list to a new one; the input is never mutated.

use serde::{Deserialize, Serialize};

use crate::models::{duplicate_id, next_id, Item, ItemId};

/// A request to transform the item list.
///
/// Serialized as `{"type": ..., "payload": ...}`; unknown types decode to
/// [`Action::Unknown`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", content = "payload", rename_all = "camelCase")]
pub enum Action {
    /// Append a blank item
    Add,
    /// Remove the item with this id
    Delete(ItemId),
    /// Flip the completed flag of the item with this id
    Completed(ItemId),
    /// Replace the text of an item
    UpdateText { id: ItemId, value: String },
    /// Replace the whole list
    Reset(Option<Vec<Item>>),
    #[serde(other)]
    Unknown,
}

/// Apply `action` to `state`, returning the next list.
///
/// `now_ms` is only consulted by [`Action::Add`] to pick the new id.
pub fn apply(state: &[Item], action: Action, now_ms: u64) -> Vec<Item> {
    match action {
        Action::Add => {
            let mut next = state.to_vec();
            match next_id(state, now_ms) {
                Some(id) => next.push(Item::new(id)),
                None => log::warn!("add ignored: item ids exhausted"),
            }
            next
        }
        Action::Delete(id) => state.iter().filter(|item| item.id != id).cloned().collect(),
        Action::Completed(id) => map_item(state, id, |item| item.completed = !item.completed),
        Action::UpdateText { id, value } => map_item(state, id, |item| item.text = value.clone()),
        Action::Reset(Some(items)) => match duplicate_id(&items) {
            Some(dup) => {
                log::warn!("reset rejected: duplicate item id {}", dup);
                state.to_vec()
            }
            None => items,
        },
        Action::Reset(None) => state.to_vec(),
        Action::Unknown => state.to_vec(),
    }
}

fn map_item(state: &[Item], id: ItemId, f: impl Fn(&mut Item)) -> Vec<Item> {
    state
        .iter()
        .map(|item| {
            let mut item = item.clone();
            if item.id == id {
                f(&mut item);
            }
            item
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn item(id: ItemId, text: &str, completed: bool) -> Item {
        Item { id, text: text.to_string(), completed }
    }

    fn sample() -> Vec<Item> {
        vec![item(1, "bread", false), item(2, "eggs", true), item(3, "", false)]
    }

    #[test]
    fn test_add_appends_blank_item() {
        let state = sample();
        let next = apply(&state, Action::Add, 1000);
        assert_eq!(next.len(), 4);
        assert_eq!(&next[..3], &state[..]);
        assert_eq!(next[3], Item::new(1000));
    }

    #[test]
    fn test_add_after_max_id_is_noop() {
        let stored: Vec<Item> = serde_json::from_str(r#"[{"id":0},{"id":18446744073709551615}]"#).unwrap();
        let next = apply(&stored, Action::Add, 1_700_000_000_000);
        assert_eq!(next, stored);
    }

    #[test]
    fn test_delete_missing_id_is_noop() {
        let state = sample();
        assert_eq!(apply(&state, Action::Delete(99), 0), state);
    }

    #[test]
    fn test_completed_toggles_only_target() {
        let next = apply(&sample(), Action::Completed(2), 0);
        assert_eq!(next, vec![item(1, "bread", false), item(2, "eggs", false), item(3, "", false)]);
    }

    #[test]
    fn test_update_text_missing_id_is_noop() {
        let state = sample();
        let next = apply(&state, Action::UpdateText { id: 42, value: "x".into() }, 0);
        assert_eq!(next, state);
    }

    #[test]
    fn test_reset_replaces_state() {
        let replacement = vec![item(7, "new", true)];
        let next = apply(&sample(), Action::Reset(Some(replacement.clone())), 0);
        assert_eq!(next, replacement);
    }

    #[test]
    fn test_reset_none_keeps_state() {
        let state = sample();
        assert_eq!(apply(&state, Action::Reset(None), 0), state);
    }

    #[test]
    fn test_reset_with_duplicate_ids_rejected() {
        let state = sample();
        let bad = vec![item(5, "a", false), item(5, "b", false)];
        assert_eq!(apply(&state, Action::Reset(Some(bad)), 0), state);
    }

    #[test]
    fn test_unknown_action_is_noop() {
        let state = sample();
        assert_eq!(apply(&state, Action::Unknown, 0), state);
    }

    #[test]
    fn test_milk_scenario() {
        let t = 1_700_000_000_000;
        let state = apply(&[], Action::Add, t);
        assert_eq!(state, vec![Item::new(t)]);

        let state = apply(&state, Action::UpdateText { id: t, value: "milk".into() }, t + 1);
        assert_eq!(state[0].text, "milk");

        let state = apply(&state, Action::Completed(t), t + 2);
        assert!(state[0].completed);

        let state = apply(&state, Action::Delete(t), t + 3);
        assert!(state.is_empty());
    }

    #[test]
    fn test_action_wire_format() {
        let parse = |s: &str| serde_json::from_str::<Action>(s).unwrap();

        assert_eq!(parse(r#"{"type":"add"}"#), Action::Add);
        assert_eq!(parse(r#"{"type":"delete","payload":5}"#), Action::Delete(5));
        assert_eq!(parse(r#"{"type":"completed","payload":5}"#), Action::Completed(5));
        assert_eq!(
            parse(r#"{"type":"updateText","payload":{"id":5,"value":"tea"}}"#),
            Action::UpdateText { id: 5, value: "tea".into() }
        );
        assert_eq!(parse(r#"{"type":"reset","payload":null}"#), Action::Reset(None));
        assert_eq!(parse(r#"{"type":"archive"}"#), Action::Unknown);
    }

    fn arb_items() -> impl Strategy<Value = Vec<Item>> {
        prop::collection::btree_map(any::<u32>(), (".{0,8}", any::<bool>()), 0..8).prop_map(|m| {
            m.into_iter()
                .map(|(id, (text, completed))| Item { id: id as ItemId, text, completed })
                .collect()
        })
    }

    proptest! {
        #[test]
        fn prop_adds_grow_list_with_unique_ids(
            state in arb_items(),
            clocks in prop::collection::vec(0u64..10_000, 1..20),
        ) {
            let mut current = state.clone();
            for (i, now) in clocks.iter().enumerate() {
                current = apply(&current, Action::Add, *now);
                prop_assert_eq!(current.len(), state.len() + i + 1);
            }
            prop_assert_eq!(duplicate_id(&current), None);
        }

        #[test]
        fn prop_delete_added_item_restores_others(state in arb_items(), now in any::<u32>()) {
            let added = apply(&state, Action::Add, now as u64);
            let id = added.last().unwrap().id;
            let removed = apply(&added, Action::Delete(id), 0);
            prop_assert_eq!(removed, state);
        }

        #[test]
        fn prop_completed_is_involution(state in arb_items(), pick in any::<prop::sample::Index>()) {
            prop_assume!(!state.is_empty());
            let id = state[pick.index(state.len())].id;
            let twice = apply(&apply(&state, Action::Completed(id), 0), Action::Completed(id), 0);
            prop_assert_eq!(twice, state);
        }

        #[test]
        fn prop_last_text_update_wins(
            state in arb_items(),
            pick in any::<prop::sample::Index>(),
            v in ".{0,12}",
            v2 in ".{0,12}",
        ) {
            prop_assume!(!state.is_empty());
            let id = state[pick.index(state.len())].id;
            let once = apply(&state, Action::UpdateText { id, value: v }, 0);
            let twice = apply(&once, Action::UpdateText { id, value: v2.clone() }, 0);
            let target = twice.iter().find(|item| item.id == id).unwrap();
            prop_assert_eq!(&target.text, &v2);
        }
    }
}
