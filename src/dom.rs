//! DOM Query Helpers
//!
//! Thin wrappers over `query_selector`, plus the data-attribute read used
//! to recover the gallery's current visual order.

use wasm_bindgen::JsCast;
use web_sys::Element;

use crate::models::ImageId;

/// Find the first element matching `selector` in the document
pub fn find(selector: &str) -> Option<Element> {
    web_sys::window()?
        .document()?
        .query_selector(selector)
        .ok()
        .flatten()
}

/// All elements matching `selector` under `root`, in document order
pub fn find_all_in(root: &Element, selector: &str) -> Vec<Element> {
    let Ok(list) = root.query_selector_all(selector) else {
        return Vec::new();
    };
    (0..list.length())
        .filter_map(|i| list.item(i))
        .filter_map(|node| node.dyn_into::<Element>().ok())
        .collect()
}

/// Read the current visual order of the gallery from each media box's
/// `data-image-id` attribute (base-10). A box without a parsable id means
/// the page structure is broken; surface that instead of persisting a
/// truncated order.
pub fn read_image_order(container: &Element) -> Result<Vec<ImageId>, String> {
    find_all_in(container, ".media-box")
        .into_iter()
        .map(|el| {
            let raw = el
                .get_attribute("data-image-id")
                .ok_or_else(|| "media box without data-image-id".to_string())?;
            raw.parse::<ImageId>()
                .map_err(|e| format!("bad image id {:?}: {}", raw, e))
        })
        .collect()
}
