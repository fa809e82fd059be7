use contracts::dashboards::welcome::{ActivityKind, ObjectType, RecentActivity};
use leptos::prelude::*;

use crate::dashboards::welcome::filters::filter_activity;
use crate::shared::date_utils::{format_datetime, time_ago_now};
use crate::shared::icons::icon;

fn type_icon(item_type: ObjectType) -> AnyView {
    match item_type {
        ObjectType::Dashboard => icon("dashboard"),
        ObjectType::Chart => icon("chart"),
        ObjectType::SavedQuery => icon("query"),
    }
}

#[component]
pub fn RecentActivityList(
    #[prop(into)]
    items: Signal<Vec<RecentActivity>>,
    #[prop(into)]
    kind: Signal<ActivityKind>,
) -> impl IntoView {
    let rows = Memo::new(move |_| {
        let kind = kind.get();
        items.with(|items| filter_activity(items, kind))
    });

    view! {
        <Show
            when=move || !rows.with(|r| r.is_empty())
            fallback=move || view! {
                <div class="welcome__empty">
                    {move || format!("Nothing {} yet", kind.get().as_str().to_lowercase())}
                </div>
            }
        >
            <ul class="recent-activity">
                <For
                    each=move || rows.get()
                    key=|item| (item.item_url.clone(), item.time)
                    children=|item| {
                        let exact = format_datetime(&item.time);
                        let ago = time_ago_now(&item.time);
                        view! {
                            <li class="recent-activity__item">
                                <span class="recent-activity__icon" title=item.item_type.as_str()>
                                    {type_icon(item.item_type)}
                                </span>
                                <a class="recent-activity__title" href=item.item_url.clone()>
                                    {item.item_title.clone()}
                                </a>
                                <span class="recent-activity__time" title=exact>{ago}</span>
                            </li>
                        }
                    }
                />
            </ul>
        </Show>
    }
}
