pub mod chart_table;
pub mod collapse;
pub mod dashboard_table;
pub mod page;
pub mod recent_activity;
pub mod saved_queries;
pub mod sub_menu;

pub use page::Welcome;
