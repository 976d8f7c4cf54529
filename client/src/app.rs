//! Root application component with routing and the board context.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{Route, Router, Routes},
};

use crate::pages::board::BoardPage;
use crate::state::board::{BoardState, Draft};
use crate::util::clock;

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en" data-theme="dark">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Root application component.
///
/// Provides the board view-model as a `RwSignal<BoardState>` context, seeded
/// with the welcome posts, plus the form draft as a separate
/// `RwSignal<Draft>`, and sets up routing.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let board = RwSignal::new(BoardState::with_welcome(&clock::display_timestamp(clock::now_ms())));
    let draft = RwSignal::new(Draft::default());
    provide_context(board);
    provide_context(draft);

    // Effects only run in the browser. Hydration keeps the server-rendered
    // stamp text, so notify even when the stamp string is unchanged.
    Effect::new(move || {
        let stamp = clock::display_timestamp(clock::now_ms());
        board.update(|b| {
            b.restamp_welcome(&stamp);
        });
    });

    view! {
        <Stylesheet id="leptos" href="/pkg/message-board.css"/>
        <Title text="Message Board"/>

        <Router>
            <Routes fallback=|| "Page not found.".into_view()>
                <Route path=StaticSegment("") view=BoardPage/>
            </Routes>
        </Router>
    }
}
