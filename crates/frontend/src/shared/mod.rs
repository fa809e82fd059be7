pub mod bootstrap;
pub mod date_utils;
pub mod dnd_select;
pub mod icons;
pub mod list_utils;
pub mod page_frame;
pub mod query_params;
