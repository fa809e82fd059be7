//! Row filtering for the welcome page lists

use contracts::dashboards::welcome::{
    ActivityKind, ChartSummary, DashboardSummary, OwnershipFilter, RecentActivity,
    SavedQuerySummary,
};
use contracts::system::users::User;

use crate::shared::list_utils::matches_search;

/// Row of a Favorite / Mine list
pub trait WelcomeListItem {
    fn title(&self) -> &str;
    fn is_favorite(&self) -> bool;
    fn is_owned_by(&self, user_id: i64) -> bool;
}

impl WelcomeListItem for DashboardSummary {
    fn title(&self) -> &str {
        &self.dashboard_title
    }

    fn is_favorite(&self) -> bool {
        self.favorite
    }

    fn is_owned_by(&self, user_id: i64) -> bool {
        self.owners.contains(&user_id)
    }
}

impl WelcomeListItem for ChartSummary {
    fn title(&self) -> &str {
        &self.slice_name
    }

    fn is_favorite(&self) -> bool {
        self.favorite
    }

    fn is_owned_by(&self, user_id: i64) -> bool {
        self.owners.contains(&user_id)
    }
}

impl WelcomeListItem for SavedQuerySummary {
    fn title(&self) -> &str {
        &self.label
    }

    fn is_favorite(&self) -> bool {
        self.favorite
    }

    fn is_owned_by(&self, user_id: i64) -> bool {
        self.created_by == user_id
    }
}

/// Applies the Favorite / Mine switch and the search text.
///
/// `Mine` without a signed-in user matches nothing. Input order is kept.
pub fn filter_items<T>(items: &[T], filter: OwnershipFilter, user: Option<&User>, search: &str) -> Vec<T>
where
    T: WelcomeListItem + Clone,
{
    items
        .iter()
        .filter(|item| match filter {
            OwnershipFilter::Favorite => item.is_favorite(),
            OwnershipFilter::Mine => user.map(|u| item.is_owned_by(u.user_id)).unwrap_or(false),
        })
        .filter(|item| matches_search(item.title(), search))
        .cloned()
        .collect()
}

/// Recent activity of one kind, newest first
pub fn filter_activity(items: &[RecentActivity], kind: ActivityKind) -> Vec<RecentActivity> {
    let mut result: Vec<RecentActivity> = items
        .iter()
        .filter(|item| item.action == kind)
        .cloned()
        .collect();
    result.sort_by(|a, b| b.time.cmp(&a.time));
    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};
    use contracts::dashboards::welcome::ObjectType;

    fn user(id: i64) -> User {
        User {
            user_id: id,
            username: format!("user{}", id),
            first_name: String::new(),
            last_name: String::new(),
            email: None,
        }
    }

    fn dashboard(id: i64, title: &str, owners: Vec<i64>, favorite: bool) -> DashboardSummary {
        DashboardSummary {
            id,
            dashboard_title: title.to_string(),
            url: format!("/dashboard/{}/", id),
            owners,
            favorite,
            published: true,
            changed_on: Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap(),
        }
    }

    fn activity(title: &str, action: ActivityKind, hour: u32) -> RecentActivity {
        RecentActivity {
            item_title: title.to_string(),
            item_url: "/".to_string(),
            item_type: ObjectType::Chart,
            action,
            time: Utc.with_ymd_and_hms(2024, 1, 1, hour, 0, 0).unwrap(),
        }
    }

    fn titles(items: &[DashboardSummary]) -> Vec<&str> {
        items.iter().map(|d| d.title()).collect()
    }

    #[test]
    fn test_favorite_filter() {
        let items = vec![
            dashboard(1, "Births", vec![1], true),
            dashboard(2, "World Bank", vec![2], false),
            dashboard(3, "Misc", vec![2], true),
        ];
        let result = filter_items(&items, OwnershipFilter::Favorite, None, "");
        assert_eq!(titles(&result), vec!["Births", "Misc"]);
    }

    #[test]
    fn test_mine_filter() {
        let items = vec![
            dashboard(1, "Births", vec![1], true),
            dashboard(2, "World Bank", vec![2, 1], false),
            dashboard(3, "Misc", vec![2], true),
        ];
        let me = user(1);
        let result = filter_items(&items, OwnershipFilter::Mine, Some(&me), "");
        assert_eq!(titles(&result), vec!["Births", "World Bank"]);

        assert!(filter_items(&items, OwnershipFilter::Mine, None, "").is_empty());
    }

    #[test]
    fn test_search_is_case_insensitive() {
        let items = vec![
            dashboard(1, "Births", vec![1], true),
            dashboard(2, "World Bank", vec![1], true),
        ];
        let result = filter_items(&items, OwnershipFilter::Favorite, None, "bank");
        assert_eq!(titles(&result), vec!["World Bank"]);
    }

    #[test]
    fn test_saved_query_ownership() {
        let query = SavedQuerySummary {
            id: 1,
            label: "Top names".to_string(),
            description: None,
            database_name: "examples".to_string(),
            sql: "SELECT 1".to_string(),
            created_by: 5,
            favorite: false,
            changed_on: Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap(),
        };
        assert!(query.is_owned_by(5));
        assert!(!query.is_owned_by(6));
        let me = user(5);
        assert_eq!(
            filter_items(&[query], OwnershipFilter::Mine, Some(&me), "top").len(),
            1
        );
    }

    #[test]
    fn test_filter_activity_newest_first() {
        let items = vec![
            activity("a", ActivityKind::Viewed, 1),
            activity("b", ActivityKind::Edited, 2),
            activity("c", ActivityKind::Viewed, 3),
        ];
        let viewed = filter_activity(&items, ActivityKind::Viewed);
        let titles: Vec<&str> = viewed.iter().map(|a| a.item_title.as_str()).collect();
        assert_eq!(titles, vec!["c", "a"]);
        assert!(filter_activity(&items, ActivityKind::Created).is_empty());
    }
}
