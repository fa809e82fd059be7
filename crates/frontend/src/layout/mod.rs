pub mod global_context;
pub mod header;

use leptos::prelude::*;

/// Main application shell: header on top, the active page below.
#[component]
pub fn Shell(children: Children) -> impl IntoView {
    view! {
        <div class="app-layout">
            <header::Header />
            <main data-zone="center" class="app-main">
                {children()}
            </main>
        </div>
    }
}
