use crate::layout::global_context::{AppGlobalContext, AppPage};
use leptos::prelude::*;
use thaw::{Button, ButtonAppearance, Space};

#[component]
pub fn Header() -> impl IntoView {
    let ctx = leptos::context::use_context::<AppGlobalContext>()
        .expect("AppGlobalContext context not found");

    let user_name = move || {
        ctx.user
            .get()
            .map(|u| u.display_name())
            .unwrap_or_else(|| "Guest".to_string())
    };

    view! {
        <header data-zone="header" class="header">
            <div class="header__content">
                <span class="header__title">"Analytics"</span>
                <Space>
                    {AppPage::ALL
                        .into_iter()
                        .map(|page| view! {
                            <Button
                                appearance=move || if ctx.page.get() == page { ButtonAppearance::Primary } else { ButtonAppearance::Subtle }
                                on_click=move |_| ctx.open_page(page)
                            >
                                {page.title()}
                            </Button>
                        })
                        .collect_view()}
                </Space>
            </div>
            <div class="header__actions">
                <span class="header__user">{user_name}</span>
            </div>
        </header>
    }
}
