use std::path::PathBuf;
use std::time::Duration;

/// Where the app under verification is expected to be reachable.
pub const DEFAULT_TARGET_URL: &str = "http://localhost:5173";

pub struct VerifyConfig {
    /// URL of the frontend under verification.
    pub target_url: String,
    /// Deadline for the initial navigation (default: 60s).
    pub navigation_timeout: Duration,
    /// Wait budget for `wait_for_selector` (default: 30s).
    pub selector_timeout: Duration,
    pub headless: bool,
    pub viewport_width: u32,
    pub viewport_height: u32,
    pub chrome_path: Option<String>,
    /// Directory screenshots are written to.
    pub output_dir: PathBuf,
}

impl Default for VerifyConfig {
    fn default() -> Self {
        Self {
            target_url: DEFAULT_TARGET_URL.to_string(),
            navigation_timeout: Duration::from_secs(60),
            selector_timeout: Duration::from_secs(30),
            headless: true,
            viewport_width: 1920,
            viewport_height: 1080,
            chrome_path: None,
            output_dir: PathBuf::from("verification"),
        }
    }
}

pub struct VerifyConfigBuilder {
    config: VerifyConfig,
}

impl VerifyConfigBuilder {
    pub fn new() -> Self {
        Self {
            config: VerifyConfig::default(),
        }
    }

    pub fn target_url(mut self, url: impl Into<String>) -> Self {
        self.config.target_url = url.into();
        self
    }

    pub fn navigation_timeout(mut self, timeout: Duration) -> Self {
        self.config.navigation_timeout = timeout;
        self
    }

    /// Set the wait budget for `wait_for_selector`.
    pub fn selector_timeout(mut self, timeout: Duration) -> Self {
        self.config.selector_timeout = timeout;
        self
    }

    pub fn headless(mut self, headless: bool) -> Self {
        self.config.headless = headless;
        self
    }

    pub fn viewport(mut self, width: u32, height: u32) -> Self {
        self.config.viewport_width = width;
        self.config.viewport_height = height;
        self
    }

    pub fn chrome_path(mut self, path: impl Into<String>) -> Self {
        self.config.chrome_path = Some(path.into());
        self
    }

    pub fn output_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.config.output_dir = dir.into();
        self
    }

    pub fn build(self) -> VerifyConfig {
        self.config
    }
}

impl Default for VerifyConfigBuilder {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_the_verification_script() {
        let config = VerifyConfig::default();
        assert_eq!(config.target_url, "http://localhost:5173");
        assert_eq!(config.navigation_timeout, Duration::from_secs(60));
        assert!(config.headless);
        assert_eq!(config.output_dir, PathBuf::from("verification"));
    }

    #[test]
    fn builder_overrides_defaults() {
        let config = VerifyConfigBuilder::new()
            .target_url("http://localhost:8080")
            .navigation_timeout(Duration::from_secs(5))
            .selector_timeout(Duration::from_millis(500))
            .headless(false)
            .viewport(1280, 720)
            .output_dir("/tmp/shots")
            .build();
        assert_eq!(config.target_url, "http://localhost:8080");
        assert_eq!(config.navigation_timeout, Duration::from_secs(5));
        assert_eq!(config.selector_timeout, Duration::from_millis(500));
        assert!(!config.headless);
        assert_eq!(config.viewport_width, 1280);
        assert_eq!(config.output_dir, PathBuf::from("/tmp/shots"));
    }
}
