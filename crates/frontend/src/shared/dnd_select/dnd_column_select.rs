use contracts::shared::explore::{ColumnMeta, SelectionValue};
use leptos::prelude::*;

use super::column_option::StyledColumnOption;
use super::dnd_select_label::DndSelectLabel;
use super::drag_state::{DndItem, DndItemType};
use super::option_selector::{OptionSelector, Reconciliation};
use super::option_wrapper::OptionWrapper;

/// Placeholder text of the drop zone
pub fn ghost_button_text(multi: bool) -> &'static str {
    if multi {
        "Drop columns"
    } else {
        "Drop column"
    }
}

/// Column control fed by drag and drop.
///
/// The selection is rebuilt from `value` and `options` whenever it is
/// needed; every drop, close or reorder reports the new value through
/// `on_change`, and the owner is expected to feed it back into `value`.
#[component]
pub fn DndColumnSelect(
    /// Control identifier, scopes option reordering to this control
    #[prop(into)]
    name: String,
    #[prop(into)]
    label: String,
    /// Current value held by the owner
    #[prop(into)]
    value: Signal<SelectionValue>,
    /// Columns of the current dataset
    #[prop(into)]
    options: Signal<Vec<ColumnMeta>>,
    /// Allow more than one column
    #[prop(default = true)]
    multi: bool,
    on_change: Callback<SelectionValue>,
) -> impl IntoView {
    let name = StoredValue::new(name);

    let snapshot = move || OptionSelector::new(options.get_untracked(), multi, &value.get_untracked());
    let tracked = move || OptionSelector::new(options.get(), multi, &value.get());

    // Push a corrected value when the owner's value no longer fits the
    // dataset or the control's shape
    Effect::new(move |_| {
        let current = value.get();
        let selector = OptionSelector::new(options.get(), multi, &current);
        if let Reconciliation::Corrected(corrected) = selector.reconcile(&current) {
            log::debug!(
                "{}: reconciled {:?} -> {:?}",
                name.get_value(),
                current,
                corrected
            );
            on_change.run(corrected);
        }
    });

    let on_drop = Callback::new(move |item: DndItem| {
        let mut selector = snapshot();
        if selector.drop_column(&item.column.column_name) {
            log::debug!("{}: dropped '{}'", name.get_value(), item.column.column_name);
        }
        on_change.run(selector.get_values());
    });

    let can_drop = Callback::new(move |item: DndItem| snapshot().can_drop(&item.column.column_name));

    let click_close = Callback::new(move |index: usize| {
        let mut selector = snapshot();
        selector.del(index);
        on_change.run(selector.get_values());
    });

    let on_shift_options = Callback::new(move |(drag_index, hover_index): (usize, usize)| {
        let mut selector = snapshot();
        selector.swap(drag_index, hover_index);
        on_change.run(selector.get_values());
    });

    let display_ghost_button = Signal::derive(move || multi || tracked().is_empty());

    view! {
        <DndSelectLabel
            label=label
            accept=DndItemType::Column
            can_drop=can_drop
            on_drop=on_drop
            display_ghost_button=display_ghost_button
            ghost_button_text=ghost_button_text(multi).to_string()
        >
            {move || {
                tracked()
                    .resolved()
                    .into_iter()
                    .map(|(index, column)| {
                        let label_column = column.clone();
                        view! {
                            <OptionWrapper
                                index=index
                                control=name.get_value()
                                column=column
                                click_close=click_close
                                on_shift_options=on_shift_options
                            >
                                <StyledColumnOption column=label_column.clone() show_type=true />
                            </OptionWrapper>
                        }
                    })
                    .collect_view()
            }}
        </DndSelectLabel>
    }
}
