use crate::dashboards::welcome::ui::Welcome;
use crate::explore::ExplorePage;
use crate::layout::global_context::{AppGlobalContext, AppPage};
use crate::layout::Shell;
use crate::shared::bootstrap::load_bootstrap;
use crate::shared::dnd_select::DragState;
use leptos::prelude::*;

#[component]
pub fn App() -> impl IntoView {
    // Provide the AppGlobalContext store, seeded from the host page, to the whole app.
    let ctx = AppGlobalContext::new(load_bootstrap());
    provide_context(ctx);

    // Item currently dragged between the datasource panel and column controls
    provide_context(DragState::new());

    ctx.init_router_integration();

    view! {
        <Shell>
            {move || match ctx.page.get() {
                AppPage::Welcome => view! { <Welcome user=ctx.user /> }.into_any(),
                AppPage::Explore => view! { <ExplorePage /> }.into_any(),
            }}
        </Shell>
    }
}
