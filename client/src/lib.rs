//! # client
//!
//! Leptos + WASM frontend for the ADSO IA chat widget.
//!
//! This crate contains the page shell, components, chat state, widget
//! configuration and the HTTP client for the chat endpoint. The `ssr` feature
//! builds it for server rendering inside `server`; the `hydrate` feature builds
//! the browser bundle.

pub mod app;
pub mod components;
pub mod config;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// Browser entry point: install logging and hydrate the server-rendered body.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    use crate::app::App;
    use crate::config::ChatConfig;

    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);

    let config = ChatConfig::from_document();
    log::info!("chat widget using endpoint {}", config.endpoint);
    leptos::mount::hydrate_body(move || leptos::view! { <App config=config.clone()/> });
}
