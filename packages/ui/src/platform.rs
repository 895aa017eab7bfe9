//! Small platform seams: timers, redirects, scrolling. Each compiles to the
//! browser API on wasm and to a harmless native equivalent elsewhere so the
//! logic around them stays testable on the host.

use std::time::Duration;

/// Suspend the current task. Backed by `gloo-timers` in the browser and
/// `tokio` natively.
pub async fn sleep(duration: Duration) {
    #[cfg(target_arch = "wasm32")]
    gloo_timers::future::sleep(duration).await;
    #[cfg(not(target_arch = "wasm32"))]
    tokio::time::sleep(duration).await;
}

/// Hard-navigate to a route, bypassing the router. Used by the global 401
/// handler, which can run outside any component scope.
pub fn redirect(path: &str) {
    #[cfg(target_arch = "wasm32")]
    if let Some(window) = web_sys::window() {
        let _ = window.location().set_href(path);
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        tracing::debug!("redirect to {path} skipped off-web");
    }
}

/// Bring the element with the given id into view (chat auto-scroll).
pub fn scroll_into_view(element_id: &str) {
    #[cfg(target_arch = "wasm32")]
    if let Some(element) = web_sys::window()
        .and_then(|w| w.document())
        .and_then(|d| d.get_element_by_id(element_id))
    {
        element.scroll_into_view();
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        let _ = element_id;
    }
}
