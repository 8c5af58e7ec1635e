//! Helpers for `<input type="file">`.

use wasm_bindgen::JsCast;
use web_sys::{Event, File, HtmlInputElement, Url};

/// First file chosen in the input that fired `ev`
pub fn selected_file(ev: &Event) -> Option<File> {
    let input = ev
        .target()
        .and_then(|t| t.dyn_into::<HtmlInputElement>().ok())?;
    input.files()?.get(0)
}

/// Local `blob:` URL for previewing a file before upload
pub fn object_url(file: &File) -> Option<String> {
    match Url::create_object_url_with_blob(file) {
        Ok(url) => Some(url),
        Err(e) => {
            log::warn!("Cannot preview {}: {:?}", file.name(), e);
            None
        }
    }
}

pub fn revoke_object_url(url: &str) {
    if url.starts_with("blob:") {
        let _ = Url::revoke_object_url(url);
    }
}
