//! Reading user-picked files (WASM only)

use wasm_bindgen::JsCast;
use wasm_bindgen::JsValue;
use wasm_bindgen_futures::JsFuture;
use web_sys::{File, HtmlInputElement};

use crate::data_url;

/// First file selected in a file input, if any
pub fn selected_file(input: &HtmlInputElement) -> Option<File> {
    input.files().and_then(|files| files.get(0))
}

/// Read a file's bytes and encode them as a `data:` URL
pub async fn read_as_data_url(file: File) -> Result<String, JsValue> {
    let buffer = JsFuture::from(file.array_buffer()).await?;
    let buffer: js_sys::ArrayBuffer = buffer.dyn_into()?;
    let bytes = js_sys::Uint8Array::new(&buffer).to_vec();
    log::info!("Read '{}' ({} bytes)", file.name(), bytes.len());
    Ok(data_url::encode(&file.type_(), &bytes))
}
