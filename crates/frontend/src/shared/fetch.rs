//! Typed fetch helpers over `web_sys::Request`.
//!
//! Every entity UI speaks to the backend through these four calls;
//! errors come back as display-ready strings.

use serde::de::DeserializeOwned;
use serde::Serialize;
use wasm_bindgen::JsCast;
use web_sys::{Request, RequestInit, RequestMode, Response};

use super::api_utils::api_url;

async fn run_request(request: Request) -> Result<Response, String> {
    let window = web_sys::window().ok_or_else(|| "no window".to_string())?;
    let resp_value = wasm_bindgen_futures::JsFuture::from(window.fetch_with_request(&request))
        .await
        .map_err(|e| format!("{e:?}"))?;
    let resp: Response = resp_value.dyn_into().map_err(|e| format!("{e:?}"))?;
    Ok(resp)
}

async fn response_text(resp: &Response) -> Result<String, String> {
    let text = wasm_bindgen_futures::JsFuture::from(resp.text().map_err(|e| format!("{e:?}"))?)
        .await
        .map_err(|e| format!("{e:?}"))?;
    text.as_string().ok_or_else(|| "bad text".to_string())
}

/// Extract the backend's `{"error": "..."}` message, falling back to the
/// bare status code
async fn error_message(resp: &Response) -> String {
    if let Ok(text) = response_text(resp).await {
        if let Ok(value) = serde_json::from_str::<serde_json::Value>(&text) {
            if let Some(message) = value.get("error").and_then(|v| v.as_str()) {
                return message.to_string();
            }
        }
    }
    format!("HTTP {}", resp.status())
}

/// GET a JSON resource
pub async fn get_json<T: DeserializeOwned>(path: &str) -> Result<T, String> {
    let opts = RequestInit::new();
    opts.set_method("GET");
    opts.set_mode(RequestMode::Cors);

    let request =
        Request::new_with_str_and_init(&api_url(path), &opts).map_err(|e| format!("{e:?}"))?;
    request
        .headers()
        .set("Accept", "application/json")
        .map_err(|e| format!("{e:?}"))?;

    let resp = run_request(request).await?;
    if resp.status() == 404 {
        return Err("Not found".to_string());
    }
    if !resp.ok() {
        return Err(error_message(&resp).await);
    }
    let text = response_text(&resp).await?;
    serde_json::from_str(&text).map_err(|e| format!("{e}"))
}

/// POST a JSON body, decode a JSON reply
pub async fn post_json<B: Serialize, T: DeserializeOwned>(
    path: &str,
    body: &B,
) -> Result<T, String> {
    let json_data = serde_json::to_string(body).map_err(|e| format!("{e}"))?;

    let opts = RequestInit::new();
    opts.set_method("POST");
    opts.set_mode(RequestMode::Cors);
    let body = wasm_bindgen::JsValue::from_str(&json_data);
    opts.set_body(&body);

    let request =
        Request::new_with_str_and_init(&api_url(path), &opts).map_err(|e| format!("{e:?}"))?;
    request
        .headers()
        .set("Content-Type", "application/json")
        .map_err(|e| format!("{e:?}"))?;
    request
        .headers()
        .set("Accept", "application/json")
        .map_err(|e| format!("{e:?}"))?;

    let resp = run_request(request).await?;
    if !resp.ok() {
        return Err(error_message(&resp).await);
    }
    let text = response_text(&resp).await?;
    serde_json::from_str(&text).map_err(|e| format!("{e}"))
}

/// POST without a body (testdata fills, refreshes)
pub async fn post_empty(path: &str) -> Result<(), String> {
    let opts = RequestInit::new();
    opts.set_method("POST");
    opts.set_mode(RequestMode::Cors);

    let request =
        Request::new_with_str_and_init(&api_url(path), &opts).map_err(|e| format!("{e:?}"))?;
    request
        .headers()
        .set("Accept", "application/json")
        .map_err(|e| format!("{e:?}"))?;

    let resp = run_request(request).await?;
    if !resp.ok() {
        return Err(error_message(&resp).await);
    }
    Ok(())
}

/// DELETE a resource
pub async fn delete(path: &str) -> Result<(), String> {
    let opts = RequestInit::new();
    opts.set_method("DELETE");
    opts.set_mode(RequestMode::Cors);

    let request =
        Request::new_with_str_and_init(&api_url(path), &opts).map_err(|e| format!("{e:?}"))?;
    request
        .headers()
        .set("Accept", "application/json")
        .map_err(|e| format!("{e:?}"))?;

    let resp = run_request(request).await?;
    if !resp.ok() {
        return Err(error_message(&resp).await);
    }
    Ok(())
}
