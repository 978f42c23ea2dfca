//! Platform helpers for saving a PDF payload and opening external URLs.
//!
//! Contract: binary response in, user-visible file out. On the web the bytes
//! become a Blob saved through a download link; on native targets they are
//! written into the user's download directory.

/// Filename for a downloaded version, derived from the version number.
pub fn pdf_filename(version: u32) -> String {
    format!("resume-v{version}.pdf")
}

/// Open `url` in a new browsing context (new tab on the web, the system
/// browser on native).
pub fn open_in_new_tab(url: &str) {
    #[cfg(target_arch = "wasm32")]
    {
        if let Some(window) = web_sys::window() {
            if window.open_with_url_and_target(url, "_blank").is_err() {
                tracing::error!("Failed to open {url}");
            }
        }
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        if let Err(e) = open::that(url) {
            tracing::error!("Failed to open browser: {}", e);
        }
    }
}

/// Save a PDF payload under `filename`.
#[cfg(target_arch = "wasm32")]
pub fn save_pdf(bytes: &[u8], filename: &str) -> Result<(), String> {
    use wasm_bindgen::JsCast;

    let array = js_sys::Uint8Array::from(bytes);
    let parts = js_sys::Array::new();
    parts.push(&array.buffer());

    let blob = web_sys::Blob::new_with_u8_array_sequence(&parts)
        .map_err(|_| "failed to build blob".to_string())?;
    let url = web_sys::Url::create_object_url_with_blob(&blob)
        .map_err(|_| "failed to create object url".to_string())?;

    let document = web_sys::window()
        .and_then(|w| w.document())
        .ok_or_else(|| "no document".to_string())?;
    let anchor: web_sys::HtmlAnchorElement = document
        .create_element("a")
        .map_err(|_| "failed to create anchor".to_string())?
        .dyn_into()
        .map_err(|_| "failed to create anchor".to_string())?;

    anchor.set_href(&url);
    anchor.set_download(filename);

    // Firefox only honors the click when the anchor is in the document
    if let Some(body) = document.body() {
        let _ = body.append_child(&anchor);
        anchor.click();
        let _ = body.remove_child(&anchor);
    } else {
        anchor.click();
    }

    let _ = web_sys::Url::revoke_object_url(&url);
    Ok(())
}

/// Save a PDF payload under `filename` in the download directory.
#[cfg(not(target_arch = "wasm32"))]
pub fn save_pdf(bytes: &[u8], filename: &str) -> Result<(), String> {
    let dir = dirs::download_dir().unwrap_or_else(|| std::path::PathBuf::from("."));
    let path = dir.join(filename);
    std::fs::write(&path, bytes).map_err(|e| e.to_string())?;
    tracing::info!("Saved {}", path.display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_filename_derives_from_version() {
        assert_eq!(pdf_filename(1), "resume-v1.pdf");
        assert_eq!(pdf_filename(12), "resume-v12.pdf");
    }
}
