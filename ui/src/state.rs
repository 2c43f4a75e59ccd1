use adminui_business::{BusinessConfig, MembersController};

use crate::binding::AppBinding;

/// The main application state.
pub struct State {
    pub config: BusinessConfig,
    pub members: MembersController<AppBinding>,
    /// Text in the search box. Kept apart from the table's term so typing stays
    /// responsive while the term is only pushed on change.
    pub search_input: String,
}

impl Default for State {
    fn default() -> Self {
        Self::new(BusinessConfig::default(), AppBinding::default())
    }
}

impl State {
    pub fn new(config: BusinessConfig, binding: AppBinding) -> Self {
        let members = MembersController::new(&config, binding);
        Self {
            config,
            members,
            search_input: String::new(),
        }
    }

    #[cfg(not(target_arch = "wasm32"))]
    pub fn test(base_url: String) -> Self {
        Self::test_at(base_url, "/")
    }

    /// Test state whose location starts at `location`, e.g. `/?search=ann`.
    #[cfg(not(target_arch = "wasm32"))]
    pub fn test_at(base_url: String, location: &str) -> Self {
        Self::new(
            BusinessConfig::new(&base_url),
            adminui_business::QueryStringBinding::parse(location),
        )
    }
}
