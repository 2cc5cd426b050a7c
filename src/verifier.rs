//! The fixed verification sequence for the CS2 RCON web frontend.
//!
//! One pass, no retries: navigate, wait for the app shell, check the
//! expected text, fill the connect form, confirm the console input is
//! still disabled, screenshot. Any failure is logged once, captured as an
//! error screenshot, and propagated so the process exits non-zero.

use tracing::{error, info};

use crate::browser::Browser;
use crate::config::VerifyConfig;
use crate::error::{Error, Result};
use crate::page::Page;

/// Selectors that must be present before the app counts as loaded.
pub const READY_SELECTORS: &[&str] = &[".header", ".sidebar", ".console-area"];

/// Literal fragments the rendered document must contain.
pub const REQUIRED_FRAGMENTS: &[&str] = &["CS2 RCON", "Connection", "Console Output"];

/// Connect-form fills, keyed by input placeholder.
pub const FORM_FILLS: &[(&str, &str)] = &[
    ("127.0.0.1", "192.168.1.100"),
    ("27015", "27016"),
    ("\u{2022}\u{2022}\u{2022}\u{2022}\u{2022}\u{2022}\u{2022}\u{2022}", "mypassword"),
];

/// The console command input; must stay disabled until a connection exists.
pub const COMMAND_INPUT: &str = "#commandInput";

pub const SUCCESS_SCREENSHOT: &str = "frontend_verification.png";
pub const ERROR_SCREENSHOT: &str = "error_screenshot.png";

/// Run the whole verification pass. The browser session is released on
/// every exit path.
pub async fn run(config: &VerifyConfig) -> Result<()> {
    let browser = Browser::launch(config).await?;
    let outcome = verify(&browser, config).await;
    if let Err(e) = browser.close().await {
        error!("browser shutdown failed: {e}");
    }
    outcome
}

/// The single error boundary: on any check failure, log it, best-effort
/// capture an error screenshot, and propagate the original error.
async fn verify(browser: &Browser, config: &VerifyConfig) -> Result<()> {
    std::fs::create_dir_all(&config.output_dir)?;
    let page = browser.new_page().await?;

    match run_checks(&page, config).await {
        Ok(()) => Ok(()),
        Err(e) => {
            error!("verification failed: {e}");
            let path = config.output_dir.join(ERROR_SCREENSHOT);
            if let Err(shot_err) = page.screenshot_to_file(&path, false).await {
                error!("could not capture error screenshot: {shot_err}");
            }
            Err(e)
        }
    }
}

async fn run_checks(page: &Page, config: &VerifyConfig) -> Result<()> {
    info!("navigating to {}", config.target_url);
    page.goto(&config.target_url, config.navigation_timeout).await?;

    for selector in READY_SELECTORS {
        page.wait_for_selector(selector).await?;
    }
    info!("app loaded, checking elements");

    let html = page.html().await?;
    let missing = missing_fragments(&html, REQUIRED_FRAGMENTS);
    if !missing.is_empty() {
        return Err(Error::Assertion(format!(
            "expected text not found in page: {}",
            missing.join(", ")
        )));
    }

    for (placeholder, value) in FORM_FILLS {
        page.fill(&placeholder_selector(placeholder), value).await?;
    }

    let disabled = page.is_disabled(COMMAND_INPUT).await?;
    if !disabled {
        return Err(Error::Assertion(format!(
            "{COMMAND_INPUT} should be disabled until a connection is established"
        )));
    }
    info!("console input is disabled as expected");

    info!("taking screenshot");
    let path = config.output_dir.join(SUCCESS_SCREENSHOT);
    page.screenshot_to_file(&path, true).await?;

    info!("verification complete");
    Ok(())
}

/// Return the fragments from `fragments` that `html` does not contain.
pub fn missing_fragments<'a>(html: &str, fragments: &[&'a str]) -> Vec<&'a str> {
    fragments
        .iter()
        .copied()
        .filter(|fragment| !html.contains(fragment))
        .collect()
}

/// CSS selector locating an input by its placeholder attribute.
pub fn placeholder_selector(placeholder: &str) -> String {
    format!("input[placeholder='{placeholder}']")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_fragments_reports_only_absent_text() {
        let html = "<div>CS2 RCON</div><span>Console Output</span>";
        let missing = missing_fragments(html, REQUIRED_FRAGMENTS);
        assert_eq!(missing, vec!["Connection"]);
    }

    #[test]
    fn missing_fragments_empty_when_all_present() {
        let html = "CS2 RCON ... Connection ... Console Output";
        assert!(missing_fragments(html, REQUIRED_FRAGMENTS).is_empty());
    }

    #[test]
    fn placeholder_selector_matches_attribute_syntax() {
        assert_eq!(
            placeholder_selector("127.0.0.1"),
            "input[placeholder='127.0.0.1']"
        );
    }

    #[test]
    fn form_fills_cover_host_port_and_password() {
        assert_eq!(FORM_FILLS.len(), 3);
        let (password_placeholder, password) = FORM_FILLS[2];
        assert_eq!(password_placeholder.chars().count(), 8);
        assert!(password_placeholder.chars().all(|c| c == '\u{2022}'));
        assert_eq!(password, "mypassword");
    }
}
