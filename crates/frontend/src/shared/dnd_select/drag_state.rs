use contracts::shared::explore::ColumnMeta;
use leptos::prelude::*;

/// What is being dragged
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DndItemType {
    /// A dataset column dragged from the datasource panel
    Column,
    /// An already selected option being reordered inside its control
    ColumnOption,
}

impl DndItemType {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Column => "column",
            Self::ColumnOption => "columnOption",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DndItem {
    pub item_type: DndItemType,
    pub column: ColumnMeta,
    /// Position inside the source control, set for `ColumnOption`
    pub index: Option<usize>,
    /// Control the option belongs to, set for `ColumnOption`
    pub source: Option<String>,
}

impl DndItem {
    pub fn column(column: ColumnMeta) -> Self {
        Self {
            item_type: DndItemType::Column,
            column,
            index: None,
            source: None,
        }
    }

    pub fn option(column: ColumnMeta, index: usize, source: impl Into<String>) -> Self {
        Self {
            item_type: DndItemType::ColumnOption,
            column,
            index: Some(index),
            source: Some(source.into()),
        }
    }
}

/// Item currently in flight.
///
/// Browsers only expose `DataTransfer` payloads on `drop`, so drop targets
/// read the dragged item from here while deciding whether to accept it.
#[derive(Clone, Copy)]
pub struct DragState {
    pub current: RwSignal<Option<DndItem>>,
}

impl DragState {
    pub fn new() -> Self {
        Self {
            current: RwSignal::new(None),
        }
    }

    pub fn start(&self, item: DndItem) {
        log::debug!("drag start: {} '{}'", item.item_type.as_str(), item.column.column_name);
        self.current.set(Some(item));
    }

    pub fn finish(&self) {
        self.current.set(None);
    }

    pub fn peek(&self) -> Option<DndItem> {
        self.current.get_untracked()
    }
}

impl Default for DragState {
    fn default() -> Self {
        Self::new()
    }
}

pub fn use_drag_state() -> DragState {
    use_context::<DragState>().expect("DragState context not found")
}

/// Marks a drag as a move and attaches the column name as plain text
pub fn set_drag_payload(ev: &leptos::ev::DragEvent, item: &DndItem) {
    if let Some(dt) = ev.data_transfer() {
        dt.set_effect_allowed("move");
        let _ = dt.set_data("text/plain", &item.column.column_name);
    }
}
