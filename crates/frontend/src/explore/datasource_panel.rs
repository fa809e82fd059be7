use contracts::shared::explore::ColumnMeta;
use leptos::ev::DragEvent;
use leptos::prelude::*;
use thaw::Input;

use crate::shared::dnd_select::drag_state::{set_drag_payload, use_drag_state, DndItem};
use crate::shared::dnd_select::StyledColumnOption;
use crate::shared::list_utils::matches_search;

/// Columns whose name or label contains `query`, sorted by label
pub fn filter_columns(columns: &[ColumnMeta], query: &str) -> Vec<ColumnMeta> {
    let mut result: Vec<ColumnMeta> = columns
        .iter()
        .filter(|c| matches_search(&c.column_name, query) || matches_search(c.label(), query))
        .cloned()
        .collect();
    result.sort_by_key(|c| c.label().to_lowercase());
    result
}

/// Dataset columns, each draggable onto a column control
#[component]
pub fn DatasourcePanel(
    #[prop(into)]
    name: Signal<String>,
    #[prop(into)]
    columns: Signal<Vec<ColumnMeta>>,
) -> impl IntoView {
    let drag = use_drag_state();
    let search = RwSignal::new(String::new());

    let visible = Memo::new(move |_| {
        let query = search.get();
        columns.with(|cols| filter_columns(cols, &query))
    });

    view! {
        <aside class="datasource-panel">
            <div class="datasource-panel__header">
                <span class="datasource-panel__name">{move || name.get()}</span>
                <span class="datasource-panel__count">
                    {move || format!("{} of {} columns", visible.with(|v| v.len()), columns.with(|c| c.len()))}
                </span>
            </div>
            <Input value=search placeholder="Search columns" />
            <div class="datasource-panel__list">
                <For
                    each=move || visible.get()
                    key=|col| col.column_name.clone()
                    children=move |col| {
                        let item = DndItem::column(col.clone());
                        let on_dragstart = move |ev: DragEvent| {
                            set_drag_payload(&ev, &item);
                            drag.start(item.clone());
                        };
                        view! {
                            <div
                                class="datasource-panel__column"
                                draggable="true"
                                on:dragstart=on_dragstart
                                on:dragend=move |_| drag.finish()
                            >
                                <StyledColumnOption column=col show_type=true />
                            </div>
                        }
                    }
                />
            </div>
        </aside>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_filter_columns() {
        let mut boys = ColumnMeta::new("num_boys");
        boys.verbose_name = Some("Boys".to_string());
        let columns = vec![ColumnMeta::new("state"), boys, ColumnMeta::new("gender")];

        let all: Vec<String> = filter_columns(&columns, "")
            .into_iter()
            .map(|c| c.column_name)
            .collect();
        assert_eq!(all, vec!["num_boys", "gender", "state"]);

        assert_eq!(filter_columns(&columns, "BOY").len(), 1);
        assert_eq!(filter_columns(&columns, "num_").len(), 1);
        assert!(filter_columns(&columns, "zzz").is_empty());
    }
}
