//! One conversation turn with inline editing, history, and follow-ups.
//!
//! SYSTEM CONTEXT
//! ==============
//! Wraps a `MessageView` in a local signal. Saves leave edit mode at once and
//! dispatch the write with `spawn_local`; the outcome only updates the sync
//! label when it arrives.

use leptos::prelude::*;
use records::{FollowUp, Message, Version};

use crate::state::message::{MessageBody, MessageView, SaveRequest};
use crate::util::clock::now_ms;
use crate::util::format::{follow_ups_toggle_label, format_timestamp, history_toggle_label, sync_label, version_label};

/// A single message with its edit controls and auxiliary lists.
#[component]
pub fn MessageItem(message: Message) -> impl IntoView {
    let view_state = RwSignal::new(MessageView::mount(&message, now_ms()));
    let role = message.role;
    let is_user = role.is_user();
    let is_assistant = !is_user;
    let role_label = role.label();
    let body = Memo::new(move |_| view_state.with(MessageView::body));

    let on_edit = move |_| view_state.update(MessageView::enter_edit);
    let on_cancel = move |_| view_state.update(MessageView::cancel_edit);
    let on_save = move |_| {
        if let Some(request) = view_state
            .try_update(|v| v.save_edit(now_ms()))
            .flatten()
        {
            dispatch_save(view_state, request);
        }
    };
    let on_toggle_history = move |_| view_state.update(MessageView::toggle_history);
    let on_toggle_follow_ups = move |_| view_state.update(MessageView::toggle_follow_ups);

    view! {
        <div class="message" class:message--user=is_user class:message--assistant=is_assistant>
            <div class="message__row">
                <div class="message__avatar" title=role_label>
                    {if is_user { "U" } else { "AI" }}
                </div>
                <div class="message__main">
                    <div class="message__body">
                        {move || match body.get() {
                            MessageBody::Pending => {
                                view! { <span class="message__pending" aria-label="Response pending">"▍"</span> }
                                    .into_any()
                            }
                            MessageBody::Editor => {
                                view! {
                                    <textarea
                                        class="message__editor"
                                        prop:value=move || view_state.with(|v| v.current_content().to_owned())
                                        on:input=move |ev| view_state.update(|v| v.update_draft(event_target_value(&ev)))
                                    ></textarea>
                                }
                                    .into_any()
                            }
                            MessageBody::Text => {
                                view! {
                                    <p class="message__text">
                                        {move || view_state.with(|v| v.current_content().to_owned())}
                                    </p>
                                }
                                    .into_any()
                            }
                        }}
                    </div>

                    <div class="message__controls">
                        {move || {
                            if view_state.with(MessageView::is_editing) {
                                view! {
                                    <button class="btn btn--primary" on:click=on_save>"Save"</button>
                                    <button class="btn" on:click=on_cancel>"Cancel"</button>
                                }
                                    .into_any()
                            } else if view_state.with(MessageView::can_edit) {
                                view! { <button class="btn" on:click=on_edit>"Edit"</button> }.into_any()
                            } else {
                                ().into_any()
                            }
                        }}
                        {move || {
                            view_state
                                .with(MessageView::has_history)
                                .then(|| {
                                    let shown = view_state.with(MessageView::show_history);
                                    view! {
                                        <button class="btn" on:click=on_toggle_history>
                                            {chevron(shown)} " " {history_toggle_label(shown)}
                                        </button>
                                    }
                                })
                        }}
                        {move || {
                            view_state
                                .with(MessageView::has_follow_ups)
                                .then(|| {
                                    let shown = view_state.with(MessageView::show_follow_ups);
                                    view! {
                                        <button class="btn" on:click=on_toggle_follow_ups>
                                            {chevron(shown)} " " {follow_ups_toggle_label(shown)}
                                        </button>
                                    }
                                })
                        }}
                        {move || {
                            view_state
                                .with(|v| sync_label(v.sync()))
                                .map(|label| view! { <span class="message__sync">{label}</span> })
                        }}
                    </div>

                    {move || {
                        view_state
                            .with(|v| v.show_history().then(|| v.history().to_vec()))
                            .map(|history| view! { <VersionList history=history/> })
                    }}
                    {move || {
                        view_state
                            .with(|v| v.show_follow_ups().then(|| v.follow_ups().to_vec()))
                            .map(|follow_ups| view! { <FollowUpList follow_ups=follow_ups/> })
                    }}
                </div>
            </div>
        </div>
    }
}

/// Prior versions, oldest first.
#[component]
fn VersionList(history: Vec<Version>) -> impl IntoView {
    if history.is_empty() {
        return view! { <div class="message__aux message__aux--empty">"No previous versions."</div> }.into_any();
    }

    view! {
        <div class="message__aux">
            {history
                .into_iter()
                .enumerate()
                .map(|(index, version)| {
                    view! {
                        <div class="message__aux-item">
                            <strong>{version_label(index)}</strong>
                            {format!(": {} ({})", version.content, format_timestamp(version.timestamp))}
                        </div>
                    }
                })
                .collect::<Vec<_>>()}
        </div>
    }
    .into_any()
}

/// Follow-up messages nested under the parent.
#[component]
fn FollowUpList(follow_ups: Vec<FollowUp>) -> impl IntoView {
    if follow_ups.is_empty() {
        return view! { <div class="message__aux message__aux--empty">"No follow-up messages."</div> }.into_any();
    }

    view! {
        <div class="message__aux">
            {follow_ups
                .into_iter()
                .map(|follow_up| {
                    view! {
                        <div class="message__aux-item">
                            <strong>{follow_up.role.label()}</strong>
                            {format!(": {}", follow_up.content.unwrap_or_default())}
                        </div>
                    }
                })
                .collect::<Vec<_>>()}
        </div>
    }
    .into_any()
}

fn chevron(expanded: bool) -> &'static str {
    if expanded { "▴" } else { "▾" }
}

/// Send the write without blocking the UI and fold the outcome back in.
fn dispatch_save(view_state: RwSignal<MessageView>, request: SaveRequest) {
    #[cfg(feature = "hydrate")]
    {
        leptos::task::spawn_local(async move {
            match crate::net::api::save_message(&request.content, request.role).await {
                Ok(record) => {
                    log::info!("message saved (id {:?})", record.id);
                    view_state.update(|v| {
                        v.apply_saved(request.seq);
                    });
                }
                Err(e) => {
                    log::error!("error saving message: {e}");
                    view_state.update(|v| {
                        v.apply_failed(request.seq, e);
                    });
                }
            }
        });
    }

    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (view_state, request);
    }
}
