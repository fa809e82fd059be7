use contracts::shared::explore::ColumnMeta;
use leptos::prelude::*;
use thaw::{Badge, BadgeAppearance, BadgeColor};

use crate::shared::icons::icon;

/// Column label with an optional type badge
#[component]
pub fn StyledColumnOption(
    column: ColumnMeta,
    /// Show the database type next to the label
    #[prop(optional)]
    show_type: bool,
) -> impl IntoView {
    let label = column.label().to_string();
    let title = column.column_name.clone();
    let type_name = column
        .type_name
        .clone()
        .filter(|t| show_type && !t.is_empty());
    let is_dttm = column.is_dttm;

    view! {
        <span class="column-option" title=title>
            {is_dttm.then(|| view! { <span class="column-option__icon">{icon("clock")}</span> })}
            <span class="column-option__label">{label}</span>
            {type_name.map(|t| view! {
                <span class="column-option__type">
                    <Badge appearance=BadgeAppearance::Tint color=BadgeColor::Informative>
                        {t}
                    </Badge>
                </span>
            })}
        </span>
    }
}
