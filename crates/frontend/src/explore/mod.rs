pub mod datasource_panel;
pub mod page;

pub use page::ExplorePage;
