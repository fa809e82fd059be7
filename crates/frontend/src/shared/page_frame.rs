//! PageFrame: standard root wrapper for every page of the app.
//!
//! Sets two metadata attributes on the root DOM element:
//!   - `id`: `"{page}--{category}"`, e.g. `"welcome--dashboard"`
//!   - `data-page-category`: see [`PageCategory`]

use leptos::prelude::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageCategory {
    /// Landing / overview page built from lists
    Dashboard,
    /// Chart building page with column controls
    Explore,
}

impl PageCategory {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Dashboard => "dashboard",
            Self::Explore => "explore",
        }
    }

    fn class(&self) -> &'static str {
        match self {
            Self::Dashboard => "page page--dashboard",
            Self::Explore => "page page--explore",
        }
    }
}

/// Validate that a page id matches the `{page}--{category}` format.
pub fn is_valid_page_id(id: &str) -> bool {
    matches!(id.split_once("--"), Some((page, category)) if !page.is_empty() && !category.is_empty())
}

#[component]
pub fn PageFrame(
    /// HTML id in format `{page}--{category}`
    page_id: &'static str,
    category: PageCategory,
    children: Children,
) -> impl IntoView {
    debug_assert!(is_valid_page_id(page_id), "malformed page id: {}", page_id);

    view! {
        <div
            id=page_id
            class=category.class()
            data-page-category=category.as_str()
        >
            {children()}
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_valid_page_id() {
        assert!(is_valid_page_id("welcome--dashboard"));
        assert!(!is_valid_page_id("welcome"));
        assert!(!is_valid_page_id("--dashboard"));
        assert!(!is_valid_page_id("welcome--"));
    }
}
