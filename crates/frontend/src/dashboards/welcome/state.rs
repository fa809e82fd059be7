use contracts::dashboards::welcome::{ActivityKind, OwnershipFilter};
use leptos::prelude::*;

use crate::shared::query_params::{self, param_value};

pub const ACTIVE_TAB_PARAM: &str = "activeTab";
pub const SEARCH_PARAM: &str = "search";
pub const DEFAULT_ACTIVE_TAB: &str = "all";

/// Collapsible panels of the welcome page; the key is what `activeTab` holds
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WelcomePanel {
    Recents,
    Dashboards,
    SavedQueries,
    Charts,
}

impl WelcomePanel {
    pub const ALL: [WelcomePanel; 4] = [
        Self::Recents,
        Self::Dashboards,
        Self::SavedQueries,
        Self::Charts,
    ];

    pub fn key(&self) -> &'static str {
        match self {
            Self::Recents => "recents",
            Self::Dashboards => "dashboards",
            Self::SavedQueries => "saved_queries",
            Self::Charts => "charts",
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            Self::Recents => "Recents",
            Self::Dashboards => "Dashboards",
            Self::SavedQueries => "Saved Queries",
            Self::Charts => "Charts",
        }
    }

    pub fn from_key(key: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|p| p.key() == key)
    }

    /// Whether the panel starts expanded for the given `activeTab`.
    /// `all` and unknown keys open the first panel only.
    pub fn opens_for(&self, active_tab: &str) -> bool {
        match Self::from_key(active_tab) {
            Some(panel) => panel == *self,
            None => *self == Self::Recents,
        }
    }
}

/// Value of `param` in `search`, or `default` when missing or empty
pub fn initial_param(search: &str, param: &str, default: &str) -> String {
    param_value(search, param)
        .filter(|v| !v.is_empty())
        .unwrap_or_else(|| default.to_string())
}

/// Local state mirrored into the URL query string.
///
/// Reads `param` once, falling back to `default`; every update writes the
/// signal and the address bar. The default value is kept out of the URL.
pub fn use_sync_query_state(param: &'static str, default: &'static str) -> (Signal<String>, Callback<String>) {
    let search = web_sys::window()
        .and_then(|w| w.location().search().ok())
        .unwrap_or_default();
    let state = RwSignal::new(initial_param(&search, param, default));

    let set_state = Callback::new(move |value: String| {
        let url_value = (!value.is_empty() && value != default).then_some(value.as_str());
        if let Err(e) = query_params::write_param(param, url_value) {
            log::warn!("failed to sync '{}' to the URL: {}", param, e);
        }
        state.set(value);
    });

    (state.into(), set_state)
}

/// Sub-menu filters of the panels, local to one page visit
#[derive(Clone, Copy)]
pub struct WelcomeFilters {
    pub recents: RwSignal<ActivityKind>,
    pub dashboards: RwSignal<OwnershipFilter>,
    pub saved_queries: RwSignal<OwnershipFilter>,
    pub charts: RwSignal<OwnershipFilter>,
}

impl WelcomeFilters {
    pub fn new() -> Self {
        Self {
            recents: RwSignal::new(ActivityKind::Viewed),
            dashboards: RwSignal::new(OwnershipFilter::Favorite),
            saved_queries: RwSignal::new(OwnershipFilter::Favorite),
            charts: RwSignal::new(OwnershipFilter::Favorite),
        }
    }
}

impl Default for WelcomeFilters {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_initial_param_defaults() {
        assert_eq!(initial_param("", ACTIVE_TAB_PARAM, DEFAULT_ACTIVE_TAB), "all");
        assert_eq!(initial_param("?activeTab=", ACTIVE_TAB_PARAM, DEFAULT_ACTIVE_TAB), "all");
        assert_eq!(
            initial_param("?activeTab=charts&x=1", ACTIVE_TAB_PARAM, DEFAULT_ACTIVE_TAB),
            "charts"
        );
        assert_eq!(initial_param("?search=births", SEARCH_PARAM, ""), "births");
    }

    #[test]
    fn test_panel_keys_round_trip() {
        for panel in WelcomePanel::ALL {
            assert_eq!(WelcomePanel::from_key(panel.key()), Some(panel));
        }
        assert_eq!(WelcomePanel::from_key("all"), None);
    }

    #[test]
    fn test_opens_for() {
        assert!(WelcomePanel::Recents.opens_for("all"));
        assert!(!WelcomePanel::Charts.opens_for("all"));
        assert!(WelcomePanel::Charts.opens_for("charts"));
        assert!(!WelcomePanel::Recents.opens_for("charts"));
        assert!(WelcomePanel::Recents.opens_for("bogus"));
    }
}
