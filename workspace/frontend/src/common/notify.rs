//! Blocking browser dialogs used for per-screen success/failure notices.

pub fn alert(message: &str) {
    if let Some(window) = web_sys::window() {
        if let Err(e) = window.alert_with_message(message) {
            log::warn!("alert failed: {:?}", e);
        }
    }
}

/// `false` when the user cancels or no window is available
pub fn confirm(message: &str) -> bool {
    web_sys::window()
        .and_then(|w| w.confirm_with_message(message).ok())
        .unwrap_or(false)
}
