//! Newest-first list of posted messages.

use leptos::prelude::*;

use crate::components::message_card::MessageCard;
use crate::state::board::BoardState;

/// Heading with the live message count, then one card per message.
///
/// Cards are keyed by id; reaction counts update inside the card without
/// rebuilding the list.
#[component]
pub fn MessageList() -> impl IntoView {
    let board = expect_context::<RwSignal<BoardState>>();

    view! {
        <section class="messages-section">
            <h2>"📝 Messages (" {move || board.with(BoardState::len)} ")"</h2>
            <div class="messages-list">
                <Show when=move || board.with(BoardState::is_empty)>
                    <div class="messages-list__empty">"No messages yet"</div>
                </Show>
                <For
                    each=move || board.with(|b| b.messages().to_vec())
                    key=|message| message.id
                    children=move |message| view! { <MessageCard message=message/> }
                />
            </div>
        </section>
    }
}
