pub mod filters;
pub mod state;
pub mod ui;
