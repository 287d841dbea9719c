//! Frontend Models
//!
//! Data structures matching the host page's boot data and the server's
//! reorder endpoint.

use serde::{Deserialize, Serialize};

/// Opaque image identifier
pub type ImageId = u32;

/// One gallery entry, as provided by the host page
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SequenceImage {
    pub id: ImageId,
    pub name: String,
    pub thumb_url: String,
}

/// PATCH body for the reorder endpoint: the full new order, not a diff
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReorderRequest {
    pub image_ids: Vec<ImageId>,
}
