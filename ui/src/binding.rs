//! Where the search term is mirrored.
//!
//! Native builds keep an in-memory location string. On the web the term lives in the
//! page URL and is rewritten with `history.replaceState`, so typing in the search box
//! does not pile up history entries.

#[cfg(target_arch = "wasm32")]
pub use web::LocationBinding;

#[cfg(not(target_arch = "wasm32"))]
pub type AppBinding = adminui_business::QueryStringBinding;

#[cfg(target_arch = "wasm32")]
pub type AppBinding = LocationBinding;

#[cfg(target_arch = "wasm32")]
mod web {
    use adminui_business::{QueryStringBinding, ViewStateBinding};
    use log::warn;
    use wasm_bindgen::JsValue;

    /// Reads and writes `?search=` on `window.location`.
    #[derive(Debug, Default)]
    pub struct LocationBinding;

    impl LocationBinding {
        fn current() -> Option<QueryStringBinding> {
            let location = web_sys::window()?.location();
            let path = location.pathname().unwrap_or_else(|_| "/".to_string());
            let search = location.search().unwrap_or_default();
            Some(QueryStringBinding::parse(&format!("{path}{search}")))
        }
    }

    impl ViewStateBinding for LocationBinding {
        fn read(&self) -> String {
            Self::current().map(|query| query.read()).unwrap_or_default()
        }

        fn write(&mut self, term: &str) {
            let Some(mut query) = Self::current() else {
                return;
            };
            query.write(term);

            let Some(window) = web_sys::window() else {
                return;
            };
            let result = window.history().and_then(|history| {
                history.replace_state_with_url(&JsValue::NULL, "", Some(&query.location()))
            });
            if let Err(err) = result {
                warn!("Failed to update location: {err:?}");
            }
        }
    }
}
