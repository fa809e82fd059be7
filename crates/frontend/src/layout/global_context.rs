use contracts::dashboards::welcome::{
    ChartSummary, DashboardSummary, RecentActivity, SavedQuerySummary,
};
use contracts::shared::explore::{ColumnMeta, ExploreFormData, SelectionValue};
use contracts::system::bootstrap::BootstrapData;
use contracts::system::users::User;
use leptos::prelude::Effect;
use leptos::prelude::*;

use crate::shared::query_params;

pub const PAGE_PARAM: &str = "page";

/// Top-level pages of the app
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AppPage {
    #[default]
    Welcome,
    Explore,
}

impl AppPage {
    pub const ALL: [AppPage; 2] = [Self::Welcome, Self::Explore];

    pub fn key(&self) -> &'static str {
        match self {
            Self::Welcome => "welcome",
            Self::Explore => "explore",
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            Self::Welcome => "Home",
            Self::Explore => "Explore",
        }
    }

    pub fn from_key(key: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|p| p.key() == key)
    }
}

/// Application-wide state, seeded from the bootstrap payload
#[derive(Clone, Copy)]
pub struct AppGlobalContext {
    pub page: RwSignal<AppPage>,
    pub user: RwSignal<Option<User>>,
    pub datasource_name: RwSignal<String>,
    pub columns: RwSignal<Vec<ColumnMeta>>,
    pub form_data: RwSignal<ExploreFormData>,
    pub recent_activity: RwSignal<Vec<RecentActivity>>,
    pub dashboards: RwSignal<Vec<DashboardSummary>>,
    pub saved_queries: RwSignal<Vec<SavedQuerySummary>>,
    pub charts: RwSignal<Vec<ChartSummary>>,
}

impl AppGlobalContext {
    pub fn new(data: BootstrapData) -> Self {
        Self {
            page: RwSignal::new(AppPage::default()),
            user: RwSignal::new(data.user),
            datasource_name: RwSignal::new(data.datasource.name),
            columns: RwSignal::new(data.datasource.columns),
            form_data: RwSignal::new(data.form_data),
            recent_activity: RwSignal::new(data.recent_activity),
            dashboards: RwSignal::new(data.dashboards),
            saved_queries: RwSignal::new(data.saved_queries),
            charts: RwSignal::new(data.charts),
        }
    }

    /// Restores the page from `?page=` and keeps the URL in step with it.
    pub fn init_router_integration(&self) {
        if let Some(page) = query_params::read_param(PAGE_PARAM)
            .as_deref()
            .and_then(AppPage::from_key)
        {
            self.page.set(page);
        }

        let this = *self;
        Effect::new(move |_| {
            let page = this.page.get();
            let value = (page != AppPage::default()).then_some(page.key());
            if let Err(e) = query_params::write_param(PAGE_PARAM, value) {
                log::warn!("failed to sync page to the URL: {}", e);
            }
        });
    }

    pub fn open_page(&self, page: AppPage) {
        log::debug!("open page '{}'", page.key());
        self.page.set(page);
    }

    pub fn set_groupby(&self, value: SelectionValue) {
        log::debug!("groupby -> {:?}", value);
        self.form_data.update(|fd| fd.groupby = value);
    }

    pub fn set_x_axis(&self, value: SelectionValue) {
        log::debug!("x_axis -> {:?}", value);
        self.form_data.update(|fd| fd.x_axis = value);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_page_keys() {
        for page in AppPage::ALL {
            assert_eq!(AppPage::from_key(page.key()), Some(page));
        }
        assert_eq!(AppPage::from_key("sqllab"), None);
        assert_eq!(AppPage::default(), AppPage::Welcome);
    }
}
