//! Todo State Store
//!
//! Holds the item list in a reactive store and funnels every change
//! through the reducer.

use leptos::prelude::*;
use reactive_stores::Store;

use crate::models::{Item, ItemId};
use crate::persistence::{self, KeyValueStore};
use crate::reducer::{self, Action};

/// Application state with field-level reactivity
#[derive(Clone, Debug, Default, Store)]
pub struct TodoState {
    /// Items in display order
    pub items: Vec<Item>,
}

/// Handle for submitting actions, passed to components as a prop
#[derive(Clone, Copy)]
pub struct Dispatcher {
    store: Store<TodoState>,
    /// Millisecond wall clock used for new item ids
    now: fn() -> u64,
}

fn browser_now() -> u64 {
    js_sys::Date::now() as u64
}

impl Default for Dispatcher {
    fn default() -> Self {
        Self::new()
    }
}

impl Dispatcher {
    /// Create an empty store. Must run inside a reactive owner.
    pub fn new() -> Self {
        Self::with_clock(browser_now)
    }

    pub fn with_clock(now: fn() -> u64) -> Self {
        Self {
            store: Store::new(TodoState::default()),
            now,
        }
    }

    /// Apply one action against the current list
    pub fn dispatch(&self, action: Action) {
        log::debug!("dispatch {:?}", action);
        let current = self.store.items().get_untracked();
        let next = reducer::apply(&current, action, (self.now)());
        *self.store.items().write() = next;
    }

    /// Replace the list with what was loaded at startup
    pub fn seed(&self, items: Vec<Item>) {
        self.dispatch(Action::Reset(Some(items)));
    }

    /// Current list (tracked)
    pub fn items(&self) -> Vec<Item> {
        self.store.items().get()
    }

    /// Ids in display order (tracked)
    pub fn ids(&self) -> Vec<ItemId> {
        self.store.items().with(|items| items.iter().map(|item| item.id).collect())
    }

    /// Current snapshot of one item (tracked)
    pub fn item(&self, id: ItemId) -> Option<Item> {
        self.store.items().with(|items| items.iter().find(|item| item.id == id).cloned())
    }

    /// (total, completed) counts (tracked)
    pub fn counts(&self) -> (usize, usize) {
        self.store.items().with(|items| {
            (items.len(), items.iter().filter(|item| item.completed).count())
        })
    }

    /// Write the list to `storage` after every change.
    ///
    /// The first effect run only subscribes, so the state already in the
    /// store when this is called is not written back.
    pub fn persist_to<S: KeyValueStore + 'static>(&self, storage: S, key: String) {
        let this = *self;
        Effect::new(move |prev: Option<()>| {
            let items = this.items();
            if prev.is_none() {
                return;
            }
            match persistence::save(&storage, &key, &items) {
                Ok(()) => log::debug!("saved {} items", items.len()),
                Err(e) => log::error!("failed to save items: {}", e),
            }
        });
    }
}
