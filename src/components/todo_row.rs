//! Todo Row Component
//!
//! One item: completion checkbox, editable text, delete button.

use leptos::prelude::*;

use crate::models::ItemId;
use crate::reducer::Action;
use crate::store::Dispatcher;

/// A single item row, reading its fields live from the store
#[component]
pub fn TodoRow(id: ItemId, dispatcher: Dispatcher) -> impl IntoView {
    let completed = move || dispatcher.item(id).map(|item| item.completed).unwrap_or(false);
    let text = move || dispatcher.item(id).map(|item| item.text).unwrap_or_default();

    view! {
        <div class=move || if completed() { "todo-row completed" } else { "todo-row" }>
            <input
                type="checkbox"
                prop:checked=completed
                on:change=move |_| dispatcher.dispatch(Action::Completed(id))
            />
            <input
                type="text"
                prop:value=text
                on:input=move |ev| {
                    dispatcher.dispatch(Action::UpdateText { id, value: event_target_value(&ev) })
                }
            />
            <button class="delete-btn" on:click=move |_| dispatcher.dispatch(Action::Delete(id))>
                "X"
            </button>
        </div>
    }
}
