//! Server Requests
//!
//! JSON fetch wrappers for the host site's endpoints. Requests go out
//! same-origin with the page's CSRF token attached; only success/failure
//! of the response is consumed.

use serde::Serialize;
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;
use web_sys::{Request, RequestCredentials, RequestInit, Response};

use crate::dom;
use crate::models::{ImageId, ReorderRequest};

fn csrf_token() -> Option<String> {
    dom::find("meta[name=\"csrf-token\"]")?.get_attribute("content")
}

/// Issue a JSON request and resolve once the server answered 2xx.
/// Non-2xx responses and transport errors both reject.
pub async fn fetch_json<B: Serialize>(method: &str, path: &str, body: &B) -> Result<(), String> {
    let payload = serde_json::to_string(body).map_err(|e| e.to_string())?;

    let opts = RequestInit::new();
    opts.set_method(method);
    opts.set_credentials(RequestCredentials::SameOrigin);
    opts.set_body(&JsValue::from_str(&payload));

    let request =
        Request::new_with_str_and_init(path, &opts).map_err(|e| format!("{:?}", e))?;
    request
        .headers()
        .set("content-type", "application/json")
        .map_err(|e| format!("{:?}", e))?;
    if let Some(token) = csrf_token() {
        request
            .headers()
            .set("x-csrf-token", &token)
            .map_err(|e| format!("{:?}", e))?;
    }

    let win = web_sys::window().ok_or_else(|| "no window".to_string())?;
    let resp = JsFuture::from(win.fetch_with_request(&request))
        .await
        .map_err(|e| format!("{:?}", e))?;
    let resp: Response = resp
        .dyn_into()
        .map_err(|_| "fetch did not yield a Response".to_string())?;

    if resp.ok() {
        Ok(())
    } else {
        Err(format!("request failed with status {}", resp.status()))
    }
}

/// Persist a new sequence order: one PATCH carrying the full id list
pub async fn reorder_images(path: &str, image_ids: &[ImageId]) -> Result<(), String> {
    fetch_json(
        "PATCH",
        path,
        &ReorderRequest {
            image_ids: image_ids.to_vec(),
        },
    )
    .await
}
