use leptos::prelude::*;

use super::datasource_panel::DatasourcePanel;
use crate::layout::global_context::AppGlobalContext;
use crate::shared::dnd_select::DndColumnSelect;
use crate::shared::page_frame::{PageCategory, PageFrame};

/// Chart builder: dataset columns on the left, column controls on the right
#[component]
pub fn ExplorePage() -> impl IntoView {
    let ctx = use_context::<AppGlobalContext>().expect("AppGlobalContext not found");

    let groupby = Signal::derive(move || ctx.form_data.with(|fd| fd.groupby.clone()));
    let x_axis = Signal::derive(move || ctx.form_data.with(|fd| fd.x_axis.clone()));

    let form_data_json = move || {
        ctx.form_data
            .with(|fd| serde_json::to_string_pretty(fd))
            .unwrap_or_else(|e| format!("Failed to serialize form data: {}", e))
    };

    view! {
        <PageFrame page_id="explore--explore" category=PageCategory::Explore>
            <div class="page__header">
                <h1 class="page__title">"Explore"</h1>
            </div>
            <div class="page__content explore">
                <DatasourcePanel name=ctx.datasource_name columns=ctx.columns />
                <section class="explore__controls">
                    <DndColumnSelect
                        name="groupby"
                        label="Dimensions"
                        value=groupby
                        options=ctx.columns
                        on_change=Callback::new(move |v| ctx.set_groupby(v))
                    />
                    <DndColumnSelect
                        name="x_axis"
                        label="X-axis"
                        value=x_axis
                        options=ctx.columns
                        multi=false
                        on_change=Callback::new(move |v| ctx.set_x_axis(v))
                    />
                    <pre class="explore__form-data">{form_data_json}</pre>
                </section>
            </div>
        </PageFrame>
    }
}
