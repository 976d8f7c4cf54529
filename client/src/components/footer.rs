//! Static page footer.

use leptos::prelude::*;

#[component]
pub fn Footer() -> impl IntoView {
    view! {
        <footer class="footer">
            <p>"Built with ❤️ in Rust"</p>
            <div class="footer__stack">
                {["Leptos", "Axum", "WASM"]
                    .into_iter()
                    .map(|name| view! { <span class="footer__badge">{name}</span> })
                    .collect::<Vec<_>>()}
            </div>
        </footer>
    }
}
