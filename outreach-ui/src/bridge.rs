use futures::join;
use js_sys::{Function, Promise, Reflect};
use outreach_data::{LoadOutcome, Source};
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;
use web_sys::Response;

/// Fetch all three sources concurrently and record each result separately.
pub async fn load_sources() -> LoadOutcome {
    let (brief, queue, leads) = join!(
        fetch_text(Source::Brief),
        fetch_text(Source::Queue),
        fetch_text(Source::Leads),
    );
    LoadOutcome {
        brief,
        queue,
        leads,
    }
}

pub async fn fetch_text(source: Source) -> Result<String, String> {
    let window = web_sys::window().ok_or_else(|| "window not available".to_string())?;
    let response = JsFuture::from(window.fetch_with_str(source.route()))
        .await
        .map_err(|e| describe(&e))?;
    let response: Response = response
        .dyn_into()
        .map_err(|_| "fetch did not resolve to a Response".to_string())?;
    if !response.ok() {
        return Err(format!("HTTP {} {}", response.status(), response.status_text()));
    }
    let body = response.text().map_err(|e| describe(&e))?;
    let text = JsFuture::from(body).await.map_err(|e| describe(&e))?;
    text.as_string()
        .ok_or_else(|| "response body was not text".to_string())
}

/// `navigator.clipboard.writeText(text)`.
pub async fn write_clipboard(text: &str) -> Result<(), String> {
    let window = web_sys::window().ok_or_else(|| "window not available".to_string())?;
    let navigator = Reflect::get(&window, &JsValue::from_str("navigator"))
        .map_err(|_| "failed to access navigator".to_string())?;
    let clipboard = Reflect::get(&navigator, &JsValue::from_str("clipboard"))
        .map_err(|_| "failed to access navigator.clipboard".to_string())?;
    if clipboard.is_undefined() || clipboard.is_null() {
        return Err("clipboard unavailable".into());
    }

    let write_text = Reflect::get(&clipboard, &JsValue::from_str("writeText"))
        .map_err(|_| "failed to access clipboard.writeText".to_string())?;
    if !write_text.is_function() {
        return Err("clipboard.writeText is not a function".into());
    }
    let write_text = write_text.unchecked_into::<Function>();

    let pending = write_text
        .call1(&clipboard, &JsValue::from_str(text))
        .map_err(|e| format!("writeText failed: {}", describe(&e)))?;
    JsFuture::from(Promise::from(pending))
        .await
        .map_err(|e| format!("writeText rejected: {}", describe(&e)))?;
    Ok(())
}

fn describe(value: &JsValue) -> String {
    if let Some(err) = value.dyn_ref::<js_sys::Error>() {
        return String::from(err.message());
    }
    value.as_string().unwrap_or_else(|| format!("{value:?}"))
}
