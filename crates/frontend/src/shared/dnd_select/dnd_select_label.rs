use leptos::ev::DragEvent;
use leptos::prelude::*;

use super::drag_state::{use_drag_state, DndItem, DndItemType};
use crate::shared::icons::icon;

/// Control header plus a drop zone listing the current values.
///
/// The zone only accepts items of type `accept` for which `can_drop` holds;
/// everything else falls through without `prevent_default`, so the browser
/// shows the "not allowed" cursor.
#[component]
pub fn DndSelectLabel(
    /// Control label
    #[prop(into)]
    label: String,
    /// Accepted item type
    accept: DndItemType,
    /// Drop-acceptance predicate
    can_drop: Callback<DndItem, bool>,
    /// Called with an accepted item
    on_drop: Callback<DndItem>,
    /// Show the "drop here" placeholder after the values
    #[prop(into)]
    display_ghost_button: Signal<bool>,
    /// Placeholder text
    #[prop(into)]
    ghost_button_text: Signal<String>,
    /// Rendered values
    children: Children,
) -> impl IntoView {
    let drag = use_drag_state();
    let (is_over, set_is_over) = signal(false);

    let accepts = move |item: &DndItem| item.item_type == accept && can_drop.run(item.clone());

    // Highlight every compatible zone while a drag is in flight
    let can_accept_current = move || {
        drag.current
            .get()
            .map(|item| accepts(&item))
            .unwrap_or(false)
    };

    let on_dragover = move |ev: DragEvent| {
        if drag.peek().map(|item| accepts(&item)).unwrap_or(false) {
            ev.prevent_default();
            if let Some(dt) = ev.data_transfer() {
                dt.set_drop_effect("move");
            }
            set_is_over.set(true);
        }
    };

    let on_drop_event = move |ev: DragEvent| {
        ev.prevent_default();
        set_is_over.set(false);
        if let Some(item) = drag.peek() {
            if accepts(&item) {
                on_drop.run(item);
            } else {
                log::debug!("drop rejected: '{}'", item.column.column_name);
            }
        }
        drag.finish();
    };

    let zone_class = move || {
        let mut class = String::from("dnd-select__zone");
        if can_accept_current() {
            class.push_str(" dnd-select__zone--can-drop");
        }
        if is_over.get() {
            class.push_str(" dnd-select__zone--over");
        }
        class
    };

    view! {
        <div class="dnd-select">
            <div class="dnd-select__header">
                <span class="dnd-select__label">{label}</span>
            </div>
            <div
                class=zone_class
                on:dragover=on_dragover
                on:dragleave=move |_| set_is_over.set(false)
                on:drop=on_drop_event
            >
                {children()}
                <Show when=move || display_ghost_button.get()>
                    <div class="dnd-select__ghost">
                        {icon("plus")}
                        <span>{move || ghost_button_text.get()}</span>
                    </div>
                </Show>
            </div>
        </div>
    }
}
