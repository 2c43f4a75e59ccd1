use ustr::Ustr;

/// Production endpoint serving the members list.
pub const DEFAULT_MEMBERS_URL: &str =
    "https://geektrust.s3-ap-southeast-1.amazonaws.com/adminui-problem/members.json";

/// Path of the members document relative to a base URL.
const MEMBERS_PATH: &str = "/adminui-problem/members.json";

#[derive(Debug, Clone)]
pub struct BusinessConfig {
    /// Full URL of the members JSON document, without query string.
    pub members_url: Ustr,
}

impl BusinessConfig {
    /// Points the config at `base_url`, e.g. a mock server in tests.
    pub fn new(base_url: &str) -> Self {
        let base = base_url.trim_end_matches('/');
        Self {
            members_url: Ustr::from(&format!("{base}{MEMBERS_PATH}")),
        }
    }

    pub fn members_url(&self) -> &str {
        self.members_url.as_str()
    }
}

impl Default for BusinessConfig {
    fn default() -> Self {
        Self {
            members_url: Ustr::from(DEFAULT_MEMBERS_URL),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_points_at_production() {
        let config = BusinessConfig::default();
        assert_eq!(config.members_url(), DEFAULT_MEMBERS_URL);
    }

    #[test]
    fn test_new_appends_members_path() {
        let config = BusinessConfig::new("http://127.0.0.1:4000");
        assert_eq!(
            config.members_url(),
            "http://127.0.0.1:4000/adminui-problem/members.json"
        );
    }

    #[test]
    fn test_new_trims_trailing_slash() {
        let config = BusinessConfig::new("http://127.0.0.1:4000/");
        assert_eq!(
            config.members_url(),
            "http://127.0.0.1:4000/adminui-problem/members.json"
        );
    }
}
