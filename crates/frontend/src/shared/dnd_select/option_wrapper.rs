use contracts::shared::explore::ColumnMeta;
use leptos::ev::DragEvent;
use leptos::prelude::*;

use super::drag_state::{set_drag_payload, use_drag_state, DndItem, DndItemType};
use crate::shared::icons::icon;

/// One selected value: a close button plus drag-to-reorder.
///
/// Dropping another option of the same control onto this one reports
/// `(drag_index, hover_index)` through `on_shift_options`.
#[component]
pub fn OptionWrapper(
    /// Position of the value inside its control
    index: usize,
    /// Identifier of the owning control
    #[prop(into)]
    control: String,
    /// Column shown by this option
    column: ColumnMeta,
    click_close: Callback<usize>,
    on_shift_options: Callback<(usize, usize)>,
    children: Children,
) -> impl IntoView {
    let drag = use_drag_state();
    let (is_over, set_is_over) = signal(false);
    let control = StoredValue::new(control);
    let column = StoredValue::new(column);

    // Index of the option being dragged when it belongs to the same control
    let sibling_index = move || {
        drag.peek().and_then(|item| {
            let same_control =
                control.with_value(|c| item.source.as_deref() == Some(c.as_str()));
            if item.item_type == DndItemType::ColumnOption && same_control {
                item.index.filter(|i| *i != index)
            } else {
                None
            }
        })
    };

    let on_dragstart = move |ev: DragEvent| {
        let item = DndItem::option(column.get_value(), index, control.get_value());
        set_drag_payload(&ev, &item);
        drag.start(item);
    };

    let on_dragover = move |ev: DragEvent| {
        if sibling_index().is_some() {
            ev.prevent_default();
            ev.stop_propagation();
            set_is_over.set(true);
        }
    };

    let on_drop = move |ev: DragEvent| {
        set_is_over.set(false);
        if let Some(drag_index) = sibling_index() {
            ev.prevent_default();
            ev.stop_propagation();
            on_shift_options.run((drag_index, index));
            drag.finish();
        }
    };

    view! {
        <div
            class=move || if is_over.get() { "option-wrapper option-wrapper--over" } else { "option-wrapper" }
            draggable="true"
            on:dragstart=on_dragstart
            on:dragend=move |_| drag.finish()
            on:dragover=on_dragover
            on:dragleave=move |_| set_is_over.set(false)
            on:drop=on_drop
        >
            <button
                class="option-wrapper__close"
                title="Remove"
                on:click=move |_| click_close.run(index)
            >
                {icon("x")}
            </button>
            <span class="option-wrapper__handle">{icon("grip")}</span>
            <span class="option-wrapper__label">{children()}</span>
        </div>
    }
}
