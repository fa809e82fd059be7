//! Drag-and-drop column selection controls

pub mod column_option;
pub mod dnd_column_select;
pub mod dnd_select_label;
pub mod drag_state;
pub mod option_selector;
pub mod option_wrapper;

pub use column_option::StyledColumnOption;
pub use dnd_column_select::DndColumnSelect;
pub use dnd_select_label::DndSelectLabel;
pub use drag_state::{use_drag_state, DndItem, DndItemType, DragState};
pub use option_selector::{OptionSelector, Reconciliation};
pub use option_wrapper::OptionWrapper;
