//! Conversation page: loads stored messages and renders the list.

use leptos::prelude::*;

use crate::components::message_list::MessageList;
use crate::state::conversation::ConversationState;

/// Conversation page: fetches rows from the host on mount.
#[component]
pub fn ConversationPage() -> impl IntoView {
    let conversation = expect_context::<RwSignal<ConversationState>>();

    // Message list resource: fetches on mount and on refresh.
    let fetched = LocalResource::new(|| crate::net::api::fetch_messages());

    Effect::new(move || {
        if let Some(result) = fetched.get() {
            conversation.update(|c| c.load(result));
        }
    });

    // Only a changed list remounts the message views.
    let messages = Memo::new(move |_| conversation.with(|c| c.messages.clone()));

    let on_refresh = move |_| {
        conversation.update(|c| c.loading = true);
        fetched.refetch();
    };

    view! {
        <div class="conversation-page">
            <header class="conversation-page__header">
                <h1>"Conversation"</h1>
                <button class="btn" on:click=on_refresh disabled=move || conversation.with(|c| c.loading)>
                    "Refresh"
                </button>
            </header>

            {move || {
                conversation
                    .with(|c| c.error.clone())
                    .map(|error| view! { <div class="conversation-page__error">{error}</div> })
            }}

            {move || {
                let loading = conversation.with(|c| c.loading);
                let list = messages.get();
                if loading && list.is_empty() {
                    view! { <p class="conversation-page__loading">"Loading messages..."</p> }.into_any()
                } else {
                    view! { <MessageList messages=list/> }.into_any()
                }
            }}
        </div>
    }
}
