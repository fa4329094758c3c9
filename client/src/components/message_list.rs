//! Conversation list rendering one `MessageItem` per turn.

use leptos::prelude::*;
use records::Message;

use crate::components::message::MessageItem;

/// Ordered list of messages, each with independent view state.
#[component]
pub fn MessageList(messages: Vec<Message>) -> impl IntoView {
    if messages.is_empty() {
        return view! { <div class="message-list__empty">"No messages yet"</div> }.into_any();
    }

    view! {
        <div class="message-list">
            {messages
                .into_iter()
                .map(|message| view! { <MessageItem message=message/> })
                .collect::<Vec<_>>()}
        </div>
    }
    .into_any()
}
