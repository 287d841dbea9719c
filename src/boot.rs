//! Host Page Boot Data
//!
//! The server attaches per-page state to a `window.booru` global before the
//! app mounts. This module turns that ambient state into an explicit config
//! object; when the global is absent or incomplete, the reorder feature
//! simply does not apply to this page.

use serde::Deserialize;
use wasm_bindgen::JsValue;

use crate::models::{ImageId, SequenceImage};

/// Page-provided configuration for the sequence gallery
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PageConfig {
    /// Gallery entries in their server-confirmed order; absent when the
    /// current page has no sequence data
    #[serde(default)]
    pub sequence_images: Option<Vec<SequenceImage>>,
    /// Destination path for the reorder PATCH; absent when the viewer may
    /// not rearrange
    #[serde(default)]
    pub reorder_path: Option<String>,
}

impl PageConfig {
    /// Whether the rearrange feature binds on this page. Presence of the
    /// sequence data and a reorder destination is what counts; an empty
    /// gallery still binds.
    pub fn is_applicable(&self) -> bool {
        self.reorder_path.is_some() && self.sequence_images.is_some()
    }

    /// The server-confirmed order, used to seed the editor baseline
    pub fn initial_order(&self) -> Vec<ImageId> {
        self.sequence_images
            .as_deref()
            .unwrap_or_default()
            .iter()
            .map(|image| image.id)
            .collect()
    }
}

/// Read `window.booru` into a [`PageConfig`], if present
pub fn page_config() -> Option<PageConfig> {
    let win = web_sys::window()?;
    let raw = js_sys::Reflect::get(&win, &JsValue::from_str("booru")).ok()?;
    if raw.is_undefined() || raw.is_null() {
        return None;
    }
    match serde_wasm_bindgen::from_value(raw) {
        Ok(config) => Some(config),
        Err(e) => {
            web_sys::console::error_1(&format!("[sequence] bad boot data: {}", e).into());
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::PageConfig;

    fn parse(json: &str) -> PageConfig {
        serde_json::from_str(json).unwrap()
    }

    #[test]
    fn test_applicable_when_images_and_path_present() {
        let config = parse(
            r#"{
                "sequenceImages": [
                    {"id": 101, "name": "a", "thumbUrl": "/a.png"},
                    {"id": 102, "name": "b", "thumbUrl": "/b.png"}
                ],
                "reorderPath": "/sequences/7/reorder"
            }"#,
        );
        assert!(config.is_applicable());
        assert_eq!(config.initial_order(), vec![101, 102]);
    }

    #[test]
    fn test_not_applicable_without_reorder_path() {
        let config =
            parse(r#"{"sequenceImages": [{"id": 1, "name": "a", "thumbUrl": "/a.png"}]}"#);
        assert!(!config.is_applicable());
    }

    #[test]
    fn test_not_applicable_without_sequence_data() {
        let config = parse(r#"{"reorderPath": "/sequences/7/reorder"}"#);
        assert!(!config.is_applicable());
        assert!(config.initial_order().is_empty());
    }

    #[test]
    fn test_empty_gallery_still_binds() {
        let config = parse(r#"{"sequenceImages": [], "reorderPath": "/sequences/7/reorder"}"#);
        assert!(config.is_applicable());
        assert!(config.initial_order().is_empty());
    }
}
