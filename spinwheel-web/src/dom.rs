//! Thin wrappers over browser globals that degrade gracefully off-wasm.
use chrono::{DateTime, Utc};
#[cfg(target_arch = "wasm32")]
use wasm_bindgen::{JsCast, JsValue};

/// Convert a JavaScript value into a readable string for error reporting.
#[cfg(target_arch = "wasm32")]
#[must_use]
pub fn js_error_message(value: &JsValue) -> String {
    value
        .as_string()
        .or_else(|| {
            value
                .dyn_ref::<js_sys::Error>()
                .map(|err| err.message().into())
        })
        .unwrap_or_else(|| format!("{value:?}"))
}

/// Access the browser `localStorage` handle.
///
/// # Errors
/// Returns an error if there is no window or storage is disabled.
#[cfg(target_arch = "wasm32")]
pub fn local_storage() -> Result<web_sys::Storage, spinwheel_game::StorageError> {
    use spinwheel_game::StorageError;

    let window =
        web_sys::window().ok_or_else(|| StorageError::Unavailable("no window".to_string()))?;
    window
        .local_storage()
        .map_err(|e| StorageError::Unavailable(js_error_message(&e)))?
        .ok_or_else(|| StorageError::Unavailable("localStorage disabled".to_string()))
}

/// Ask the user to confirm a destructive action. Off-wasm this always agrees.
#[must_use]
pub fn confirm(message: &str) -> bool {
    #[cfg(target_arch = "wasm32")]
    {
        web_sys::window()
            .and_then(|w| w.confirm_with_message(message).ok())
            .unwrap_or(false)
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        let _ = message;
        true
    }
}

/// Wall-clock now. On wasm the browser clock is read directly through
/// `Date.now()`.
#[must_use]
pub fn now_utc() -> DateTime<Utc> {
    #[cfg(target_arch = "wasm32")]
    {
        let millis = spinwheel_game::numbers::millis_to_i64(js_sys::Date::now());
        DateTime::from_timestamp_millis(millis).unwrap_or_default()
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        Utc::now()
    }
}

/// Seed material for the spin RNG.
#[must_use]
pub fn next_entropy() -> u64 {
    #[cfg(target_arch = "wasm32")]
    {
        js_sys::Date::now().to_bits() ^ js_sys::Math::random().to_bits()
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        now_utc()
            .timestamp_nanos_opt()
            .map_or(0, i64::unsigned_abs)
    }
}
