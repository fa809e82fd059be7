use leptos::prelude::*;
use thaw::{Button, ButtonAppearance, ButtonSize, Space};

/// Row of buttons acting as a single-choice filter
#[component]
pub fn SubMenu<T>(
    /// Choices with their labels
    items: Vec<(T, &'static str)>,
    #[prop(into)]
    active: Signal<T>,
    on_select: Callback<T>,
) -> impl IntoView
where
    T: Copy + PartialEq + Send + Sync + 'static,
{
    view! {
        <div class="sub-menu">
            <Space>
                {items
                    .into_iter()
                    .map(|(item, label)| {
                        view! {
                            <Button
                                size=ButtonSize::Small
                                appearance=move || if active.get() == item { ButtonAppearance::Primary } else { ButtonAppearance::Subtle }
                                on_click=move |_| on_select.run(item)
                            >
                                {label}
                            </Button>
                        }
                    })
                    .collect_view()}
            </Space>
        </div>
    }
}
