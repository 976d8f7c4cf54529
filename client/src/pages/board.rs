//! The message board page.

use leptos::prelude::*;

use crate::components::footer::Footer;
use crate::components::header::Header;
use crate::components::message_form::MessageForm;
use crate::components::message_list::MessageList;
use crate::state::board::BoardState;
use crate::util::dark_mode;

/// Full board: header, post form, message list, footer.
///
/// The root element carries the theme modifier; the `<html>` attribute is
/// kept in sync for page-level styles.
#[component]
pub fn BoardPage() -> impl IntoView {
    let board = expect_context::<RwSignal<BoardState>>();
    let theme = Memo::new(move |_| board.with(BoardState::theme));

    Effect::new(move || {
        dark_mode::apply(theme.get());
    });

    view! {
        <div class=move || format!("app app--{}", theme.get().as_str())>
            <Header/>
            <main class="main">
                <MessageForm/>
                <MessageList/>
            </main>
            <Footer/>
        </div>
    }
}
