//! Root application component and HTML shell.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{Route, Router, Routes},
};

use crate::config::{ChatConfig, ENDPOINT_META, SEND_POLICY_META};
use crate::pages::home::HomePage;

/// HTML shell rendered on the server for SSR + hydration.
///
/// The chat config is written into `<meta>` tags so the hydrated app reads
/// the same endpoint and send policy the server rendered with.
pub fn shell(options: LeptosOptions, config: ChatConfig) -> impl IntoView {
    let endpoint = config.endpoint.clone();
    let send_policy = config.send_policy.as_str();

    view! {
        <!DOCTYPE html>
        <html lang="es">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <meta name=ENDPOINT_META content=endpoint/>
                <meta name=SEND_POLICY_META content=send_policy/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App config/>
            </body>
        </html>
    }
}

/// Root application component.
///
/// Provides the chat config as context and routes `/` to the landing page.
#[component]
pub fn App(config: ChatConfig) -> impl IntoView {
    provide_meta_context();
    provide_context(config);

    view! {
        <Stylesheet id="leptos" href="/pkg/adso-chat.css"/>
        <Title text="ADSO IA"/>

        <Router>
            <Routes fallback=|| "Página no encontrada.".into_view()>
                <Route path=StaticSegment("") view=HomePage/>
            </Routes>
        </Router>
    }
}
