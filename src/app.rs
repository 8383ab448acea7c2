//! Todos App
//!
//! Root component: add button, item list, counters.

use leptos::prelude::*;

use crate::components::TodoList;
use crate::reducer::Action;
use crate::store::Dispatcher;

#[component]
pub fn App(dispatcher: Dispatcher) -> impl IntoView {
    view! {
        <main class="todos-app">
            <h1>"Todos App"</h1>
            <button class="add-btn" on:click=move |_| dispatcher.dispatch(Action::Add)>"New Todo"</button>

            <TodoList dispatcher=dispatcher />

            <p class="item-count">
                {move || {
                    let (total, completed) = dispatcher.counts();
                    count_label(total, completed)
                }}
            </p>
        </main>
    }
}

fn count_label(total: usize, completed: usize) -> String {
    let noun = if total == 1 { "item" } else { "items" };
    format!("{} {}, {} completed", total, noun, completed)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_count_label() {
        assert_eq!(count_label(0, 0), "0 items, 0 completed");
        assert_eq!(count_label(1, 0), "1 item, 0 completed");
        assert_eq!(count_label(3, 2), "3 items, 2 completed");
    }
}
