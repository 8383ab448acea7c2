//! Todo List Component

use leptos::prelude::*;

use crate::components::TodoRow;
use crate::store::Dispatcher;

/// All items in insertion order, keyed by id so rows keep focus while typing
#[component]
pub fn TodoList(dispatcher: Dispatcher) -> impl IntoView {
    view! {
        <div class="todo-list">
            <For
                each=move || dispatcher.ids()
                key=|id| *id
                children=move |id| view! { <TodoRow id=id dispatcher=dispatcher /> }
            />
        </div>
    }
}
