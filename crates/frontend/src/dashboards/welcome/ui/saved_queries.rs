use contracts::dashboards::welcome::{OwnershipFilter, SavedQuerySummary};
use contracts::system::users::User;
use leptos::prelude::*;
use thaw::{
    Table, TableBody, TableCell, TableCellLayout, TableHeader, TableHeaderCell, TableRow,
};

use crate::dashboards::welcome::filters::filter_items;
use crate::shared::date_utils::{format_datetime, time_ago_now};

/// First line of the SQL, shortened for the table
fn sql_preview(sql: &str) -> String {
    const MAX_CHARS: usize = 80;
    let first_line = sql.lines().map(str::trim).find(|l| !l.is_empty()).unwrap_or("");
    if first_line.chars().count() > MAX_CHARS {
        let cut: String = first_line.chars().take(MAX_CHARS).collect();
        format!("{}…", cut)
    } else {
        first_line.to_string()
    }
}

#[component]
pub fn SavedQueries(
    #[prop(into)]
    queries: Signal<Vec<SavedQuerySummary>>,
    #[prop(into)]
    filter: Signal<OwnershipFilter>,
    #[prop(into)]
    user: Signal<Option<User>>,
) -> impl IntoView {
    let rows = Memo::new(move |_| {
        let filter = filter.get();
        let user = user.get();
        queries.with(|items| filter_items(items, filter, user.as_ref(), ""))
    });

    view! {
        <Show
            when=move || !rows.with(|r| r.is_empty())
            fallback=|| view! { <div class="welcome__empty">"No saved queries"</div> }
        >
            <Table>
                <TableHeader>
                    <TableRow>
                        <TableHeaderCell resizable=true min_width=200.0>"Name"</TableHeaderCell>
                        <TableHeaderCell min_width=120.0>"Database"</TableHeaderCell>
                        <TableHeaderCell resizable=true min_width=280.0>"SQL"</TableHeaderCell>
                        <TableHeaderCell min_width=140.0>"Modified"</TableHeaderCell>
                    </TableRow>
                </TableHeader>
                <TableBody>
                    <For
                        each=move || rows.get()
                        key=|q| q.id
                        children=|q| view! {
                            <TableRow>
                                <TableCell>
                                    <TableCellLayout>
                                        <span title=q.description.clone().unwrap_or_default()>{q.label.clone()}</span>
                                    </TableCellLayout>
                                </TableCell>
                                <TableCell>
                                    <TableCellLayout>{q.database_name.clone()}</TableCellLayout>
                                </TableCell>
                                <TableCell>
                                    <TableCellLayout>
                                        <code class="welcome__sql">{sql_preview(&q.sql)}</code>
                                    </TableCellLayout>
                                </TableCell>
                                <TableCell>
                                    <TableCellLayout>
                                        <span title=format_datetime(&q.changed_on)>{time_ago_now(&q.changed_on)}</span>
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

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sql_preview() {
        assert_eq!(sql_preview("\n  SELECT name\nFROM birth_names"), "SELECT name");
        assert_eq!(sql_preview(""), "");

        let long = format!("SELECT {}", "x, ".repeat(40));
        let preview = sql_preview(&long);
        assert!(preview.ends_with('…'));
        assert_eq!(preview.chars().count(), 81);
    }
}
