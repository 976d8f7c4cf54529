//! A single message with its delete control and reaction buttons.

use leptos::prelude::*;

use crate::state::board::BoardState;
use crate::state::message::{Message, Reaction};

/// Card for one message.
///
/// Author and text never change after posting. Reaction counts and the
/// timestamp (restamped for welcome posts once hydrated) read the board
/// reactively.
#[component]
pub fn MessageCard(message: Message) -> impl IntoView {
    let board = expect_context::<RwSignal<BoardState>>();
    let id = message.id;
    let initial = message.initial();
    let timestamp = move || board.with(|b| b.get(id).map(|m| m.timestamp.clone()).unwrap_or_default());

    let on_delete = move |_| {
        board.maybe_update(|b| b.delete_message(id));
    };

    let reactions = Reaction::ALL
        .into_iter()
        .map(|reaction| {
            let count = move || board.with(|b| b.get(id).map_or(0, |m| m.reactions.get(reaction)));
            view! {
                <button
                    class="reaction-btn"
                    class:reaction-btn--active={move || count() > 0}
                    on:click=move |_| {
                        board.maybe_update(|b| b.react(id, reaction));
                    }
                >
                    <span class="reaction-btn__emoji">{reaction.symbol()}</span>
                    <span class="reaction-btn__count">{count}</span>
                </button>
            }
        })
        .collect::<Vec<_>>();

    view! {
        <article class="message-card">
            <div class="message-card__header">
                <div class="message-card__avatar">{initial}</div>
                <div class="message-card__meta">
                    <h3 class="message-card__author">{message.author}</h3>
                    <time class="message-card__timestamp">{timestamp}</time>
                </div>
                <button class="message-card__delete" aria-label="Delete message" on:click=on_delete>
                    "🗑️"
                </button>
            </div>
            <p class="message-card__text">{message.text}</p>
            <div class="message-card__reactions">{reactions}</div>
        </article>
    }
}
