//! Static brand mark shown next to the chat widget.

use leptos::prelude::*;

#[component]
pub fn BrandMark() -> impl IntoView {
    view! {
        <div class="brand-mark">
            <span class="brand-mark__logo" aria-hidden="true">"A"</span>
            <h1 class="brand-mark__name">"ADSO IA"</h1>
            <p class="brand-mark__tagline">"Asistente virtual"</p>
        </div>
    }
}
