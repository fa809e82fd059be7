/// List helpers shared by the welcome page tables (search matching, search box)
use gloo_timers::callback::Timeout;
use leptos::prelude::*;

/// Delay between the last keystroke and the search being applied
pub const SEARCH_DEBOUNCE_MS: u32 = 300;

/// Case-insensitive substring match; an empty query matches everything
pub fn matches_search(text: &str, query: &str) -> bool {
    let query = query.trim();
    query.is_empty() || text.to_lowercase().contains(&query.to_lowercase())
}

/// Search box with debounce and a clear button
#[component]
pub fn SearchInput(
    /// Applied search text
    #[prop(into)]
    value: Signal<String>,
    /// Called with the new text after the debounce delay
    #[prop(into)]
    on_change: Callback<String>,
    #[prop(optional, into)]
    placeholder: String,
) -> impl IntoView {
    let placeholder = if placeholder.is_empty() {
        "Search".to_string()
    } else {
        placeholder
    };

    // Local text until the debounce fires
    let (input_value, set_input_value) = signal(value.get_untracked());
    let pending = StoredValue::new_local(None::<Timeout>);

    let handle_input_change = move |new_value: String| {
        set_input_value.set(new_value.clone());
        // Dropping a pending Timeout cancels it
        pending.set_value(Some(Timeout::new(SEARCH_DEBOUNCE_MS, move || {
            on_change.run(new_value);
        })));
    };

    let clear = move |_| {
        pending.set_value(None);
        set_input_value.set(String::new());
        on_change.run(String::new());
    };

    view! {
        <div class="search-input">
            <input
                type="text"
                class=move || {
                    if value.get().trim().is_empty() {
                        "search-input__field"
                    } else {
                        "search-input__field search-input__field--active"
                    }
                }
                placeholder=placeholder
                prop:value=move || input_value.get()
                on:input=move |ev| handle_input_change(event_target_value(&ev))
            />
            <Show when=move || !input_value.get().is_empty()>
                <button class="search-input__clear" title="Clear" on:click=clear>
                    {crate::shared::icons::icon("x")}
                </button>
            </Show>
        </div>
    }
}
