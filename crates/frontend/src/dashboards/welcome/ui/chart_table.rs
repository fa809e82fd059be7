use contracts::dashboards::welcome::{ChartSummary, OwnershipFilter};
use contracts::system::users::User;
use leptos::prelude::*;
use thaw::{
    Table, TableBody, TableCell, TableCellLayout, TableHeader, TableHeaderCell, TableRow,
};

use crate::dashboards::welcome::filters::filter_items;
use crate::shared::date_utils::{format_datetime, time_ago_now};
use crate::shared::icons::icon;

#[component]
pub fn ChartTable(
    #[prop(into)]
    charts: Signal<Vec<ChartSummary>>,
    #[prop(into)]
    filter: Signal<OwnershipFilter>,
    #[prop(into)]
    user: Signal<Option<User>>,
) -> impl IntoView {
    let rows = Memo::new(move |_| {
        let filter = filter.get();
        let user = user.get();
        charts.with(|items| filter_items(items, filter, user.as_ref(), ""))
    });

    view! {
        <Show
            when=move || !rows.with(|r| r.is_empty())
            fallback=|| view! { <div class="welcome__empty">"No charts"</div> }
        >
            <Table>
                <TableHeader>
                    <TableRow>
                        <TableHeaderCell min_width=32.0>""</TableHeaderCell>
                        <TableHeaderCell resizable=true min_width=240.0>"Chart"</TableHeaderCell>
                        <TableHeaderCell min_width=140.0>"Visualization type"</TableHeaderCell>
                        <TableHeaderCell min_width=140.0>"Modified"</TableHeaderCell>
                    </TableRow>
                </TableHeader>
                <TableBody>
                    <For
                        each=move || rows.get()
                        key=|c| c.id
                        children=|c| view! {
                            <TableRow>
                                <TableCell>
                                    <TableCellLayout>
                                        {c.favorite.then(|| view! { <span class="welcome__favorite">{icon("star")}</span> })}
                                    </TableCellLayout>
                                </TableCell>
                                <TableCell>
                                    <TableCellLayout>
                                        <a class="welcome__link" href=c.url.clone()>{c.slice_name.clone()}</a>
                                    </TableCellLayout>
                                </TableCell>
                                <TableCell>
                                    <TableCellLayout>{c.viz_type.clone()}</TableCellLayout>
                                </TableCell>
                                <TableCell>
                                    <TableCellLayout>
                                        <span title=format_datetime(&c.changed_on)>{time_ago_now(&c.changed_on)}</span>
                                    </TableCellLayout>
                                </TableCell>
                            </TableRow>
                        }
                    />
                </TableBody>
            </Table>
        </Show>
    }
}
