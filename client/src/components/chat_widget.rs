//! Chat widget: conversation list, loading indicator and input row.

use leptos::prelude::*;

use crate::config::{ChatConfig, SendPolicy};
use crate::state::chat::{ChatAction, ChatState};

/// Chat widget showing the conversation and an input for sending new messages.
///
/// Owns its [`ChatState`]; every change goes through [`ChatState::apply`].
/// Each accepted send spawns one HTTP exchange against the configured
/// endpoint and feeds the outcome back as [`ChatAction::Settled`].
#[component]
pub fn ChatWidget() -> impl IntoView {
    let config = expect_context::<ChatConfig>();
    let chat = RwSignal::new(ChatState::new(config.send_policy));
    #[cfg_attr(not(feature = "hydrate"), allow(unused_variables))]
    let endpoint = StoredValue::new(config.endpoint.clone());
    let block_while_pending = config.send_policy == SendPolicy::BlockWhilePending;

    // Keystrokes only touch the draft; these memos keep the list and the
    // loading row from re-rendering on every input event.
    let messages = Memo::new(move |_| chat.with(|c| c.messages().to_vec()));
    let loading = Memo::new(move |_| chat.with(ChatState::loading));

    // Event handlers only run in the browser; the SSR build never sends.
    #[cfg_attr(not(feature = "hydrate"), allow(unused_variables))]
    let do_send = move || {
        let Some(pending) = chat.try_update(|c| c.apply(ChatAction::Send)).flatten() else {
            return;
        };

        #[cfg(feature = "hydrate")]
        {
            let endpoint = endpoint.get_value();
            leptos::task::spawn_local(async move {
                let transport = crate::net::transport::GlooTransport;
                let outcome = crate::net::transport::exchange(&transport, &endpoint, &pending).await;
                chat.update(|c| {
                    c.apply(ChatAction::Settled { id: pending.id, outcome });
                });
            });
        }
    };

    let on_click = move |_| do_send();

    let on_keydown = move |ev: leptos::ev::KeyboardEvent| {
        if ev.key() == "Enter" && !ev.shift_key() {
            ev.prevent_default();
            do_send();
        }
    };

    let send_disabled = move || block_while_pending && loading.get();

    view! {
        <div class="chat-widget">
            <div class="chat-widget__messages">
                {move || {
                    messages.with(|list| {
                        list.iter()
                            .map(|msg| {
                                let (row_class, bubble_class) = if msg.is_user() {
                                    ("chat-widget__row chat-widget__row--user", "chat-widget__bubble chat-widget__bubble--user")
                                } else {
                                    ("chat-widget__row chat-widget__row--bot", "chat-widget__bubble chat-widget__bubble--bot")
                                };
                                let text = msg.text.clone();
                                view! {
                                    <div class=row_class>
                                        <div class=bubble_class>{text}</div>
                                    </div>
                                }
                            })
                            .collect::<Vec<_>>()
                    })
                }}
                {move || {
                    loading
                        .get()
                        .then(|| view! { <div class="chat-widget__loading">"Cargando..."</div> })
                }}
            </div>
            <div class="chat-widget__input-row">
                <input
                    class="chat-widget__input"
                    type="text"
                    placeholder="Escribe un mensaje..."
                    prop:value=move || chat.with(|c| c.draft().to_owned())
                    on:input=move |ev| {
                        chat.update(|c| {
                            c.apply(ChatAction::EditDraft(event_target_value(&ev)));
                        });
                    }
                    on:keydown=on_keydown
                />
                <button class="btn btn--primary chat-widget__send" on:click=on_click disabled=send_disabled>
                    "Enviar"
                </button>
            </div>
        </div>
    }
}
