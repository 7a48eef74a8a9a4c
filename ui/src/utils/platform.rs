//! Platform Detection Utilities
//!
//! Browser lookups used when the app runs as wasm. Native builds (tests,
//! server-side rendering) have no window and fall back to `None`.

#[cfg(target_arch = "wasm32")]
use web_sys::window;

/// Origin the page was loaded from, e.g. `https://example.com`
pub fn current_origin() -> Option<String> {
    #[cfg(target_arch = "wasm32")]
    {
        let origin = window().and_then(|w| w.location().origin().ok());
        if origin.is_none() {
            crate::console_warn!("Unable to read window.location.origin");
        }
        origin
    }

    #[cfg(not(target_arch = "wasm32"))]
    {
        None
    }
}


#[cfg(all(test, not(target_arch = "wasm32")))]
mod native_tests {
    use super::*;

    #[test]
    fn test_no_origin_outside_browser() {
        assert!(current_origin().is_none());
    }
}
