//! HTTP API client wrapping `gloo-net` for calls to `/api/*`.

use gloo_net::http::{Request, Response};
use serde::Deserialize;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::JsFuture;
use wifibutton_app::endpoints;
use wifibutton_app::ports::{ApiError, DeviceApi};
use wifibutton_domain::relay::RelayState;
use wifibutton_domain::response::DeviceResponse;
use wifibutton_domain::settings::{ClockSettings, LedColor, WifiCredentials};
use wifibutton_domain::upload::{UploadPath, UploadPayload, UploadTarget};

/// [`DeviceApi`] talking to the server that served the page.
#[derive(Debug, Clone, Copy, Default)]
pub struct GlooDeviceApi;

/// JSON error body returned by the server on non-2xx responses.
#[derive(Deserialize)]
struct ErrorBody {
    #[serde(default)]
    error: Option<String>,
    #[serde(default)]
    detail: Option<String>,
}

fn network_error(err: gloo_net::Error) -> ApiError {
    match err {
        gloo_net::Error::SerdeError(err) => ApiError::Decode(err.to_string()),
        other => ApiError::Network(other.to_string()),
    }
}

/// Check the HTTP response status and extract an error if non-2xx.
async fn check_response(resp: Response) -> Result<Response, ApiError> {
    if resp.ok() {
        return Ok(resp);
    }
    let status = resp.status();
    let message = match resp.json::<ErrorBody>().await {
        Ok(ErrorBody {
            error: Some(text), ..
        })
        | Ok(ErrorBody {
            detail: Some(text), ..
        }) => text,
        _ => resp.status_text(),
    };
    Err(ApiError::Status { status, message })
}

async fn send(request: Request) -> Result<Response, ApiError> {
    let resp = request.send().await.map_err(network_error)?;
    check_response(resp).await
}

async fn get_json(url: &str) -> Result<DeviceResponse, ApiError> {
    let resp = send(Request::get(url).build().map_err(network_error)?).await?;
    resp.json().await.map_err(network_error)
}

async fn get_ignoring_body(url: &str) -> Result<(), ApiError> {
    send(Request::get(url).build().map_err(network_error)?).await?;
    Ok(())
}

async fn post_form(url: &str, fields: &[(&str, String)]) -> Result<(), ApiError> {
    let request = Request::post(url)
        .header("Content-Type", endpoints::FORM_CONTENT_TYPE)
        .body(endpoints::encode_form(fields))
        .map_err(network_error)?;
    send(request).await?;
    Ok(())
}

impl DeviceApi for GlooDeviceApi {
    async fn set_relay(&self, state: RelayState) -> Result<DeviceResponse, ApiError> {
        get_json(&endpoints::relay_url(state)).await
    }

    async fn button_state(&self) -> Result<DeviceResponse, ApiError> {
        get_json(endpoints::BUTTON_STATE).await
    }

    async fn upload(&self, target: UploadTarget, payload: &UploadPayload) -> Result<(), ApiError> {
        // raw bytes, no content type
        let body = js_sys::Uint8Array::from(payload.bytes());
        let request = Request::post(target.endpoint())
            .body(body)
            .map_err(network_error)?;
        send(request).await?;
        Ok(())
    }

    async fn set_upload_path(&self, path: &UploadPath) -> Result<(), ApiError> {
        get_ignoring_body(&endpoints::upload_path_url(path)).await
    }

    async fn set_leds(&self, color: LedColor) -> Result<(), ApiError> {
        post_form(endpoints::LEDS, &color.form_fields()).await
    }

    async fn set_wifi(&self, credentials: &WifiCredentials) -> Result<(), ApiError> {
        post_form(endpoints::SSID, &credentials.form_fields()).await
    }

    async fn set_clock(&self, clock: ClockSettings) -> Result<(), ApiError> {
        post_form(endpoints::TIME, &clock.form_fields()).await
    }

    async fn reset(&self) -> Result<(), ApiError> {
        get_ignoring_body(endpoints::RESET).await
    }
}

/// Read the first file selected in a file input.
///
/// `Ok(None)` when nothing is selected.
///
/// # Errors
///
/// Returns the browser's error text when the file cannot be read.
pub async fn read_selected_file(
    input: &web_sys::HtmlInputElement,
) -> Result<Option<(String, Vec<u8>)>, String> {
    let Some(file) = input.files().and_then(|files| files.get(0)) else {
        return Ok(None);
    };
    let buffer = JsFuture::from(file.array_buffer())
        .await
        .map_err(|err| format!("{err:?}"))?;
    let buffer = buffer
        .dyn_into::<js_sys::ArrayBuffer>()
        .map_err(|_| "file contents are not an ArrayBuffer".to_string())?;
    Ok(Some((file.name(), js_sys::Uint8Array::new(&buffer).to_vec())))
}
