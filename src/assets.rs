use crate::error::RippleError;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::JsFuture;
use web_sys as web;

/// Shader sources and the decoded surface image, fetched once at startup.
pub struct StartupAssets {
    pub vertex_wgsl: String,
    pub fragment_wgsl: String,
    pub image: web::ImageBitmap,
}

fn js_err(what: &str, url: &str, e: wasm_bindgen::JsValue) -> RippleError {
    RippleError::setup(format!("{} {}: {:?}", what, url, e))
}

async fn fetch_ok(url: &str) -> Result<web::Response, RippleError> {
    let window = web::window().ok_or_else(|| RippleError::setup("no window"))?;
    let resp = JsFuture::from(window.fetch_with_str(url))
        .await
        .map_err(|e| js_err("fetch", url, e))?
        .dyn_into::<web::Response>()
        .map_err(|e| js_err("fetch", url, e))?;
    if !resp.ok() {
        return Err(RippleError::setup(format!(
            "fetch {}: HTTP {}",
            url,
            resp.status()
        )));
    }
    Ok(resp)
}

pub async fn fetch_text(url: &str) -> Result<String, RippleError> {
    let resp = fetch_ok(url).await?;
    let promise = resp.text().map_err(|e| js_err("read", url, e))?;
    JsFuture::from(promise)
        .await
        .map_err(|e| js_err("read", url, e))?
        .as_string()
        .ok_or_else(|| RippleError::setup(format!("read {}: body is not text", url)))
}

/// Fetch and decode an image off the main thread via `createImageBitmap`.
pub async fn fetch_image_bitmap(url: &str) -> Result<web::ImageBitmap, RippleError> {
    let resp = fetch_ok(url).await?;
    let blob: web::Blob = JsFuture::from(resp.blob().map_err(|e| js_err("read", url, e))?)
        .await
        .map_err(|e| js_err("read", url, e))?
        .dyn_into()
        .map_err(|e| js_err("read", url, e))?;
    let window = web::window().ok_or_else(|| RippleError::setup("no window"))?;
    let promise = window
        .create_image_bitmap_with_blob(&blob)
        .map_err(|e| js_err("decode", url, e))?;
    JsFuture::from(promise)
        .await
        .map_err(|e| js_err("decode", url, e))?
        .dyn_into::<web::ImageBitmap>()
        .map_err(|e| js_err("decode", url, e))
}

pub async fn load_startup_assets(
    vertex_url: &str,
    fragment_url: &str,
    image_url: &str,
) -> Result<StartupAssets, RippleError> {
    let vertex_wgsl = fetch_text(vertex_url).await?;
    let fragment_wgsl = fetch_text(fragment_url).await?;
    let image = fetch_image_bitmap(image_url).await?;
    log::info!(
        "[assets] shaders {}B/{}B, image {}x{}",
        vertex_wgsl.len(),
        fragment_wgsl.len(),
        image.width(),
        image.height()
    );
    Ok(StartupAssets {
        vertex_wgsl,
        fragment_wgsl,
        image,
    })
}
