//! Browser interop: the readings fetch and `js_sys::eval()` helpers.

use anyhow::{anyhow, bail};
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;
use web_sys::Response;

fn js_error(context: &str, err: JsValue) -> anyhow::Error {
    anyhow!("{}: {:?}", context, err)
}

/// Fetch `url` once and return the response body as text.
///
/// Network failures and non-2xx statuses are errors. There is no retry.
pub async fn fetch_text(url: &str) -> anyhow::Result<String> {
    let window = web_sys::window().ok_or_else(|| anyhow!("no global `window` available"))?;
    let response = JsFuture::from(window.fetch_with_str(url))
        .await
        .map_err(|e| js_error("fetch failed", e))?;
    let response: Response = response
        .dyn_into()
        .map_err(|e| js_error("fetch did not return a Response", e))?;
    if !response.ok() {
        bail!("GET {} returned HTTP {}", url, response.status());
    }
    let body = response
        .text()
        .map_err(|e| js_error("could not read response body", e))?;
    let body = JsFuture::from(body)
        .await
        .map_err(|e| js_error("could not read response body", e))?;
    let text = body
        .as_string()
        .ok_or_else(|| anyhow!("response body of {} was not text", url))?;
    log::info!("[ESD] js_bridge: Fetched {} bytes from {}", text.len(), url);
    Ok(text)
}

/// Execute arbitrary JS, wrapping in try/catch to avoid panics.
pub fn call_js(code: &str) {
    let wrapped = format!(
        "try {{ {} }} catch(e) {{ console.warn('ESD JS call failed:', e); }}",
        code
    );
    let _ = js_sys::eval(&wrapped);
}

/// Scroll an element (the table container) back to its top.
pub fn scroll_to_top(element_id: &str) {
    call_js(&format!(
        "var el = document.getElementById('{}'); if (el) el.scrollTop = 0;",
        element_id
    ));
}
