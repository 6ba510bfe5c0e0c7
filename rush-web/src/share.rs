//! Three-tier share degradation: native share, then clipboard, then a
//! non-blocking notice. No failure here ever surfaces beyond the note.

use crate::game::{SHARE_NOTE_UNAVAILABLE, share_payload};

/// Attempt to share a finished run's time. Returns the status note to show
/// under the share button.
#[cfg(target_arch = "wasm32")]
pub async fn share_run(total_seconds: u32) -> &'static str {
    use crate::game::{SHARE_NOTE_COPIED, SHARE_NOTE_SHARED, SHARE_TITLE};
    use wasm_bindgen::JsValue;
    use wasm_bindgen_futures::JsFuture;

    let payload = share_payload(total_seconds);
    let Some(window) = web_sys::window() else {
        return SHARE_NOTE_UNAVAILABLE;
    };
    let navigator = window.navigator();

    let has_native_share = js_sys::Reflect::get(navigator.as_ref(), &JsValue::from_str("share"))
        .map(|value| value.is_function())
        .unwrap_or(false);
    if has_native_share {
        let data = web_sys::ShareData::new();
        data.set_title(SHARE_TITLE);
        data.set_text(&payload);
        if JsFuture::from(navigator.share_with_data(&data)).await.is_ok() {
            return SHARE_NOTE_SHARED;
        }
    }

    let clipboard = navigator.clipboard();
    if JsFuture::from(clipboard.write_text(&payload)).await.is_ok() {
        return SHARE_NOTE_COPIED;
    }
    SHARE_NOTE_UNAVAILABLE
}

#[cfg(not(target_arch = "wasm32"))]
pub async fn share_run(total_seconds: u32) -> &'static str {
    let _ = share_payload(total_seconds);
    SHARE_NOTE_UNAVAILABLE
}

#[cfg(test)]
mod tests {
    use super::*;
    use futures::executor::block_on;

    #[test]
    fn native_fallback_reports_unavailable() {
        assert_eq!(block_on(share_run(61)), SHARE_NOTE_UNAVAILABLE);
    }
}
