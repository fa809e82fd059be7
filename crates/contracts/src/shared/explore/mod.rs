//! Explore view contracts: dataset columns and the values of column controls

mod column;
mod form_data;
mod selection;

pub use column::ColumnMeta;
pub use form_data::ExploreFormData;
pub use selection::SelectionValue;
