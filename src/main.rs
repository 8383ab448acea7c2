#![allow(warnings)]
//! Todos Frontend Entry Point

mod config;
mod logger;
mod models;
mod reducer;
mod persistence;
mod store;
mod components;
mod app;

use app::App;
use config::AppConfig;
use leptos::prelude::*;
use persistence::BrowserStorage;
use store::Dispatcher;

fn main() {
    console_error_panic_hook::set_once();

    let config = AppConfig::default();
    logger::init(config.log_level);

    // Load once, before anything is mounted
    let loaded = match BrowserStorage::local() {
        Ok(storage) => {
            let items = persistence::restore(&storage, &config.storage_key);
            Some((storage, items))
        }
        Err(e) => {
            log::warn!("changes will not be saved: {}", e);
            None
        }
    };

    mount_to_body(move || {
        let dispatcher = Dispatcher::new();
        if let Some((storage, items)) = loaded {
            dispatcher.seed(items);
            dispatcher.persist_to(storage, config.storage_key);
        }
        view! { <App dispatcher=dispatcher /> }
    });
}
