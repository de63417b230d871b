//! Reading files picked in an `<input type="file">`.

use crate::common::ApiError;

pub struct PickedFile {
    pub name: String,
    pub mime: String,
    pub bytes: Vec<u8>,
}

/// First file selected in `input`, if any.
pub fn selected_file(input: &web_sys::HtmlInputElement) -> Option<web_sys::File> {
    input.files()?.get(0)
}

#[cfg(feature = "hydrate")]
pub async fn read_file(file: web_sys::File) -> Result<PickedFile, ApiError> {
    let buffer = wasm_bindgen_futures::JsFuture::from(file.array_buffer())
        .await
        .map_err(|e| ApiError::InvalidRequest(format!("could not read file: {:?}", e)))?;
    let bytes = js_sys::Uint8Array::new(&buffer).to_vec();

    let name = file.name();
    let mime = Some(file.type_())
        .filter(|mime| !mime.trim().is_empty())
        .or_else(|| crate::state::image_mime(&name).map(str::to_string))
        .unwrap_or_default();

    Ok(PickedFile { name, mime, bytes })
}

#[cfg(not(feature = "hydrate"))]
pub async fn read_file(_file: web_sys::File) -> Result<PickedFile, ApiError> {
    Err(ApiError::InvalidRequest(
        "file uploads are only available in the browser".to_string(),
    ))
}
