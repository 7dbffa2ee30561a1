//! Landing page: brand mark and chat widget side by side.

use leptos::prelude::*;

use crate::components::{brand_mark::BrandMark, chat_widget::ChatWidget};

/// Centered layout composing the static brand mark with the chat widget.
#[component]
pub fn HomePage() -> impl IntoView {
    view! {
        <main class="home-page">
            <BrandMark/>
            <ChatWidget/>
        </main>
    }
}
