use contracts::dashboards::welcome::{DashboardSummary, OwnershipFilter};
use contracts::system::users::User;
use leptos::prelude::*;
use thaw::{
    Badge, BadgeAppearance, BadgeColor, Table, TableBody, TableCell, TableCellLayout, TableHeader,
    TableHeaderCell, TableRow,
};

use crate::dashboards::welcome::filters::filter_items;
use crate::shared::date_utils::{format_datetime, time_ago_now};
use crate::shared::icons::icon;

#[component]
pub fn DashboardTable(
    #[prop(into)]
    dashboards: Signal<Vec<DashboardSummary>>,
    #[prop(into)]
    filter: Signal<OwnershipFilter>,
    #[prop(into)]
    search: Signal<String>,
    #[prop(into)]
    user: Signal<Option<User>>,
) -> impl IntoView {
    let rows = Memo::new(move |_| {
        let filter = filter.get();
        let search = search.get();
        let user = user.get();
        dashboards.with(|items| filter_items(items, filter, user.as_ref(), &search))
    });

    view! {
        <Show
            when=move || !rows.with(|r| r.is_empty())
            fallback=|| view! { <div class="welcome__empty">"No dashboards"</div> }
        >
            <Table>
                <TableHeader>
                    <TableRow>
                        <TableHeaderCell min_width=32.0>""</TableHeaderCell>
                        <TableHeaderCell resizable=true min_width=240.0>"Title"</TableHeaderCell>
                        <TableHeaderCell min_width=100.0>"Status"</TableHeaderCell>
                        <TableHeaderCell min_width=140.0>"Modified"</TableHeaderCell>
                    </TableRow>
                </TableHeader>
                <TableBody>
                    <For
                        each=move || rows.get()
                        key=|d| d.id
                        children=|d| {
                            let (status, color) = if d.published {
                                ("Published", BadgeColor::Success)
                            } else {
                                ("Draft", BadgeColor::Informative)
                            };
                            view! {
                                <TableRow>
                                    <TableCell>
                                        <TableCellLayout>
                                            {d.favorite.then(|| view! { <span class="welcome__favorite">{icon("star")}</span> })}
                                        </TableCellLayout>
                                    </TableCell>
                                    <TableCell>
                                        <TableCellLayout>
                                            <a class="welcome__link" href=d.url.clone()>{d.dashboard_title.clone()}</a>
                                        </TableCellLayout>
                                    </TableCell>
                                    <TableCell>
                                        <TableCellLayout>
                                            <Badge appearance=BadgeAppearance::Tint color=color>{status}</Badge>
                                        </TableCellLayout>
                                    </TableCell>
                                    <TableCell>
                                        <TableCellLayout>
                                            <span title=format_datetime(&d.changed_on)>{time_ago_now(&d.changed_on)}</span>
                                        </TableCellLayout>
                                    </TableCell>
                                </TableRow>
                            }
                        }
                    />
                </TableBody>
            </Table>
        </Show>
    }
}
