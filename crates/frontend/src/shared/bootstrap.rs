//! Reads the bootstrap payload embedded by the host page

use contracts::system::bootstrap::BootstrapData;
use web_sys::window;

/// Element the application mounts next to and reads its payload from
pub const APP_ELEMENT_ID: &str = "app";
/// Attribute holding the JSON payload
pub const BOOTSTRAP_ATTRIBUTE: &str = "data-bootstrap";

fn read_raw() -> Result<String, String> {
    let document = window()
        .and_then(|w| w.document())
        .ok_or("document is not available")?;
    let element = document
        .get_element_by_id(APP_ELEMENT_ID)
        .ok_or_else(|| format!("element #{} not found", APP_ELEMENT_ID))?;
    element
        .get_attribute(BOOTSTRAP_ATTRIBUTE)
        .ok_or_else(|| format!("#{} has no {} attribute", APP_ELEMENT_ID, BOOTSTRAP_ATTRIBUTE))
}

pub fn read_bootstrap() -> Result<BootstrapData, String> {
    let raw = read_raw()?;
    BootstrapData::parse(&raw).map_err(|e| format!("{:#}", e))
}

/// Payload of the page, or an empty one when the host embedded nothing usable
pub fn load_bootstrap() -> BootstrapData {
    match read_bootstrap() {
        Ok(data) => {
            log::debug!(
                "bootstrap: {} columns, {} dashboards, {} charts, {} saved queries",
                data.datasource.columns.len(),
                data.dashboards.len(),
                data.charts.len(),
                data.saved_queries.len()
            );
            data
        }
        Err(e) => {
            log::warn!("bootstrap payload unavailable, starting empty: {}", e);
            BootstrapData::default()
        }
    }
}
