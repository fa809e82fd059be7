use contracts::dashboards::welcome::{ActivityKind, OwnershipFilter};
use contracts::system::users::User;
use leptos::prelude::*;

use super::chart_table::ChartTable;
use super::collapse::CollapsePanel;
use super::dashboard_table::DashboardTable;
use super::recent_activity::RecentActivityList;
use super::saved_queries::SavedQueries;
use super::sub_menu::SubMenu;
use crate::dashboards::welcome::state::{
    use_sync_query_state, WelcomeFilters, WelcomePanel, ACTIVE_TAB_PARAM, DEFAULT_ACTIVE_TAB,
    SEARCH_PARAM,
};
use crate::layout::global_context::AppGlobalContext;
use crate::shared::list_utils::SearchInput;
use crate::shared::page_frame::{PageCategory, PageFrame};

fn ownership_items() -> Vec<(OwnershipFilter, &'static str)> {
    OwnershipFilter::ALL.into_iter().map(|f| (f, f.as_str())).collect()
}

fn activity_items() -> Vec<(ActivityKind, &'static str)> {
    ActivityKind::ALL.into_iter().map(|k| (k, k.as_str())).collect()
}

/// Landing page: recent activity, dashboards, saved queries and charts
#[component]
pub fn Welcome(
    #[prop(into)]
    user: Signal<Option<User>>,
) -> impl IntoView {
    let ctx = use_context::<AppGlobalContext>().expect("AppGlobalContext not found");
    let (active_tab, set_active_tab) = use_sync_query_state(ACTIVE_TAB_PARAM, DEFAULT_ACTIVE_TAB);
    let (search_query, set_search_query) = use_sync_query_state(SEARCH_PARAM, "");
    let filters = WelcomeFilters::new();

    let initial_tab = active_tab.get_untracked();
    let panel_open = |panel: WelcomePanel| RwSignal::new(panel.opens_for(&initial_tab));
    let recents_open = panel_open(WelcomePanel::Recents);
    let dashboards_open = panel_open(WelcomePanel::Dashboards);
    let saved_queries_open = panel_open(WelcomePanel::SavedQueries);
    let charts_open = panel_open(WelcomePanel::Charts);

    // Expanding a panel makes it the active tab; collapsing the active one resets it
    let on_toggle = move |panel: WelcomePanel| {
        Callback::new(move |open: bool| {
            if open {
                set_active_tab.run(panel.key().to_string());
            } else if active_tab.get_untracked() == panel.key() {
                set_active_tab.run(DEFAULT_ACTIVE_TAB.to_string());
            }
        })
    };

    let greeting = move || {
        user.get()
            .map(|u| format!("Welcome, {}", u.display_name()))
            .unwrap_or_else(|| "Welcome".to_string())
    };

    view! {
        <PageFrame page_id="welcome--dashboard" category=PageCategory::Dashboard>
            <div class="page__header">
                <h1 class="page__title">{greeting}</h1>
            </div>
            <div class="page__content welcome">
                <CollapsePanel
                    header=WelcomePanel::Recents.title()
                    open=recents_open
                    on_toggle=on_toggle(WelcomePanel::Recents)
                >
                    <SubMenu
                        items=activity_items()
                        active=filters.recents
                        on_select=Callback::new(move |k| filters.recents.set(k))
                    />
                    <RecentActivityList items=ctx.recent_activity kind=filters.recents />
                </CollapsePanel>

                <CollapsePanel
                    header=WelcomePanel::Dashboards.title()
                    open=dashboards_open
                    on_toggle=on_toggle(WelcomePanel::Dashboards)
                >
                    <SubMenu
                        items=ownership_items()
                        active=filters.dashboards
                        on_select=Callback::new(move |f| filters.dashboards.set(f))
                    />
                    <SearchInput
                        value=search_query
                        on_change=set_search_query
                        placeholder="Search dashboards"
                    />
                    <DashboardTable
                        dashboards=ctx.dashboards
                        filter=filters.dashboards
                        search=search_query
                        user=user
                    />
                </CollapsePanel>

                <CollapsePanel
                    header=WelcomePanel::SavedQueries.title()
                    open=saved_queries_open
                    on_toggle=on_toggle(WelcomePanel::SavedQueries)
                >
                    <SubMenu
                        items=ownership_items()
                        active=filters.saved_queries
                        on_select=Callback::new(move |f| filters.saved_queries.set(f))
                    />
                    <SavedQueries queries=ctx.saved_queries filter=filters.saved_queries user=user />
                </CollapsePanel>

                <CollapsePanel
                    header=WelcomePanel::Charts.title()
                    open=charts_open
                    on_toggle=on_toggle(WelcomePanel::Charts)
                >
                    <SubMenu
                        items=ownership_items()
                        active=filters.charts
                        on_select=Callback::new(move |f| filters.charts.set(f))
                    />
                    <ChartTable charts=ctx.charts filter=filters.charts user=user />
                </CollapsePanel>
            </div>
        </PageFrame>
    }
}
