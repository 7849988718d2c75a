//! Cross-platform utilities that work in both WASM and native contexts

#[cfg(target_arch = "wasm32")]
mod wasm_impl {
    use wasm_bindgen::prelude::*;

    #[wasm_bindgen]
    extern "C" {
        #[wasm_bindgen(js_namespace = console)]
        fn log(s: &str);
    }

    pub fn console_log(s: &str) {
        log(s);
    }

    pub fn set_panic_hook() {
        // Routes panic messages to the developer console.
        #[cfg(feature = "console_error_panic_hook")]
        console_error_panic_hook::set_once();
    }

    /// Hard reload of the hosting page. Every in-memory value is discarded.
    pub fn reload_page() {
        let Some(window) = web_sys::window() else {
            log::error!("No window available; cannot reload");
            return;
        };

        if let Err(e) = window.location().reload() {
            log::error!("Page reload failed: {:?}", e);
        }
    }

    pub fn spawn_async<F>(future: F)
    where
        F: std::future::Future<Output = ()> + 'static,
    {
        wasm_bindgen_futures::spawn_local(future);
    }
}

#[cfg(not(target_arch = "wasm32"))]
mod native_impl {
    pub fn console_log(s: &str) {
        log::info!("{}", s);
    }

    pub fn set_panic_hook() {
        // Native panics already reach stderr
    }

    /// The desktop window has no page to reload; the form state has already
    /// been reset, which is the equivalent of a fresh load.
    pub fn reload_page() {
        log::info!("Reload requested; form restarted with default values");
    }
}

// Re-export the appropriate implementation
#[cfg(target_arch = "wasm32")]
pub use wasm_impl::*;

#[cfg(not(target_arch = "wasm32"))]
pub use native_impl::*;
