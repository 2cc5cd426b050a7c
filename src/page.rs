use std::path::Path;
use std::time::Duration;

use chromiumoxide::cdp::browser_protocol::page::CaptureScreenshotFormat;
use chromiumoxide::page::Page as CrPage;
use chromiumoxide::page::ScreenshotParams;

use crate::element::Element;
use crate::error::{Error, Result};

/// Wrapper around a chromiumoxide Page with the operations the verifier needs.
pub struct Page {
    inner: CrPage,
    selector_timeout: Duration,
}

impl Page {
    pub(crate) fn new(inner: CrPage, selector_timeout: Duration) -> Self {
        Self {
            inner,
            selector_timeout,
        }
    }

    /// Navigate to the given URL, failing if the page does not respond
    /// within `deadline`.
    pub async fn goto(&self, url: &str, deadline: Duration) -> Result<()> {
        match tokio::time::timeout(deadline, self.inner.goto(url)).await {
            Ok(Ok(_)) => Ok(()),
            Ok(Err(e)) => Err(Error::Navigation(e.to_string())),
            Err(_) => Err(Error::Navigation(format!(
                "no response from {url} within {}s",
                deadline.as_secs()
            ))),
        }
    }

    /// Wait for an element matching the given CSS selector to appear in the
    /// DOM. Polls every 100ms up to the configured selector timeout.
    pub async fn wait_for_selector(&self, selector: &str) -> Result<Element> {
        let interval = Duration::from_millis(100);
        let start = std::time::Instant::now();

        loop {
            match self.find_element(selector).await {
                Ok(el) => return Ok(el),
                Err(_) if start.elapsed() < self.selector_timeout => {
                    tokio::time::sleep(interval).await;
                }
                Err(_) => return Err(Error::SelectorTimeout(selector.to_string())),
            }
        }
    }

    /// Get the full HTML content of the page.
    pub async fn html(&self) -> Result<String> {
        self.inner
            .content()
            .await
            .map_err(|e| Error::Js(e.to_string()))
    }

    /// Fill a form field: locate it, click to focus, then type the value.
    pub async fn fill(&self, selector: &str, value: &str) -> Result<()> {
        let el = self.find_element(selector).await?;
        el.click().await?;
        el.type_text(value).await?;
        Ok(())
    }

    /// Query the `disabled` property of the element matching the selector.
    /// Errors if no such element exists.
    pub async fn is_disabled(&self, selector: &str) -> Result<bool> {
        let selector_js =
            serde_json::to_string(selector).map_err(|e| Error::Js(e.to_string()))?;
        let js = format!(
            r#"
            (() => {{
                const el = document.querySelector({selector_js});
                if (!el) throw new Error('Element not found: ' + {selector_js});
                return !!el.disabled;
            }})()
            "#,
        );
        let result = self
            .inner
            .evaluate(js)
            .await
            .map_err(|e| Error::ElementNotFound(format!("{selector}: {e}")))?;
        result
            .into_value::<bool>()
            .map_err(|e| Error::Js(e.to_string()))
    }

    /// Take a screenshot and save it to a file (PNG format).
    pub async fn screenshot_to_file(
        &self,
        path: impl AsRef<Path>,
        full_page: bool,
    ) -> Result<()> {
        let params = ScreenshotParams::builder()
            .format(CaptureScreenshotFormat::Png)
            .full_page(full_page)
            .build();
        self.inner
            .save_screenshot(params, path)
            .await
            .map_err(|e| Error::Screenshot(e.to_string()))?;
        Ok(())
    }

    /// Find an element matching the given CSS selector.
    pub async fn find_element(&self, selector: &str) -> Result<Element> {
        let el = self
            .inner
            .find_element(selector)
            .await
            .map_err(|e| Error::ElementNotFound(format!("{selector}: {e}")))?;
        Ok(Element::new(el))
    }
}
