//! Wall-clock seam for cache freshness. Everything that needs "now" takes a
//! millisecond timestamp so tests can inject time instead of sleeping.

/// Current wall-clock time in milliseconds since the Unix epoch.
#[cfg(all(target_arch = "wasm32", feature = "web"))]
pub fn now_millis() -> u64 {
    js_sys::Date::now() as u64
}

#[cfg(all(target_arch = "wasm32", not(feature = "web")))]
pub fn now_millis() -> u64 {
    0
}

#[cfg(not(target_arch = "wasm32"))]
pub fn now_millis() -> u64 {
    use std::time::{SystemTime, UNIX_EPOCH};
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_millis() as u64)
        .unwrap_or(0)
}
