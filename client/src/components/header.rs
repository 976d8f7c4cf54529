//! Page header with the board title and the theme toggle.

use leptos::prelude::*;

use crate::state::board::BoardState;

/// Title bar with logo, tagline, and the light/dark toggle.
#[component]
pub fn Header() -> impl IntoView {
    let board = expect_context::<RwSignal<BoardState>>();
    let theme = move || board.with(BoardState::theme);

    view! {
        <header class="header">
            <div class="header__content">
                <div class="header__logo">
                    <span class="header__logo-icon">"💬"</span>
                    <h1>"Message Board"</h1>
                </div>
                <p class="header__tagline">"Leptos frontend, in-memory board"</p>

                <button
                    class="btn header__theme-toggle"
                    aria-label="Toggle theme"
                    on:click=move |_| {
                        board.maybe_update(BoardState::toggle_theme);
                    }
                >
                    <span class="header__toggle-icon">{move || theme().toggle_icon()}</span>
                    <span class="header__toggle-text">{move || theme().toggle_label()}</span>
                </button>
            </div>
        </header>
    }
}
