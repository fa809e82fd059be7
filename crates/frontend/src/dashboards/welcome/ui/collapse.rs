use leptos::prelude::*;

use crate::shared::icons::icon;

/// Panel with a clickable header that shows or hides its body
#[component]
pub fn CollapsePanel(
    #[prop(into)]
    header: String,
    open: RwSignal<bool>,
    /// Called with the new state after the header is clicked
    #[prop(optional)]
    on_toggle: Option<Callback<bool>>,
    children: ChildrenFn,
) -> impl IntoView {
    let toggle = move |_| {
        let next = !open.get_untracked();
        open.set(next);
        if let Some(cb) = on_toggle {
            cb.run(next);
        }
    };

    view! {
        <div class=move || if open.get() { "collapse-panel collapse-panel--open" } else { "collapse-panel" }>
            <div class="collapse-panel__header" on:click=toggle>
                {move || if open.get() { icon("chevron-down") } else { icon("chevron-right") }}
                <span class="collapse-panel__title">{header}</span>
            </div>
            <Show when=move || open.get()>
                <div class="collapse-panel__body">{children()}</div>
            </Show>
        </div>
    }
}
