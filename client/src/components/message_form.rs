//! Form for posting a new message.

use leptos::prelude::*;

use crate::state::board::{BoardState, Draft};

/// Author + body inputs bound to the draft signal.
///
/// Blank submissions are dropped silently by the view-model; the inputs keep
/// their contents in that case.
#[component]
pub fn MessageForm() -> impl IntoView {
    let board = expect_context::<RwSignal<BoardState>>();
    let draft = expect_context::<RwSignal<Draft>>();

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        draft.maybe_update(|d| {
            let mut accepted = false;
            board.maybe_update(|b| {
                accepted = b.submit_draft(d);
                accepted
            });
            accepted
        });
    };

    view! {
        <section class="form-section">
            <div class="card form-card">
                <h2>"✍️ Post a Message"</h2>
                <form on:submit=on_submit>
                    <div class="form-card__group">
                        <label for="author">"Your Name"</label>
                        <input
                            type="text"
                            id="author"
                            placeholder="Enter your name..."
                            prop:value=move || draft.with(|d| d.author.clone())
                            on:input=move |ev| draft.update(|d| d.author = event_target_value(&ev))
                        />
                    </div>
                    <div class="form-card__group">
                        <label for="message">"Message"</label>
                        <textarea
                            id="message"
                            placeholder="What's on your mind?"
                            rows="3"
                            prop:value=move || draft.with(|d| d.text.clone())
                            on:input=move |ev| draft.update(|d| d.text = event_target_value(&ev))
                        ></textarea>
                    </div>
                    <button type="submit" class="btn btn--primary form-card__submit">
                        <span>"Send Message"</span>
                        <span class="form-card__submit-icon">"→"</span>
                    </button>
                </form>
            </div>
        </section>
    }
}
