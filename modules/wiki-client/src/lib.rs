pub mod error;

pub use error::{Result, WikiError};

use std::time::Duration;

use serde::Deserialize;
use tracing::debug;

const DEFAULT_BASE_URL: &str = "https://en.wikipedia.org/api/rest_v1";

/// Lead-image fields of the REST `page/summary` response. Everything else
/// in the payload is ignored.
#[derive(Debug, Clone, Deserialize)]
pub struct PageSummary {
    #[serde(rename = "originalimage")]
    pub original_image: Option<PageImage>,
    pub thumbnail: Option<PageImage>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct PageImage {
    pub source: String,
}

impl PageSummary {
    /// Best available image URL: full-size original, else thumbnail.
    pub fn image_url(&self) -> Option<&str> {
        self.original_image
            .as_ref()
            .or(self.thumbnail.as_ref())
            .map(|image| image.source.as_str())
    }
}

pub struct WikiClient {
    client: reqwest::Client,
    base_url: String,
}

impl WikiClient {
    pub fn new() -> Self {
        Self::with_base_url(DEFAULT_BASE_URL)
    }

    pub fn with_base_url(base_url: &str) -> Self {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(10))
            .build()
            .expect("Failed to build HTTP client");

        Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    /// Fetch the summary for a page title.
    pub async fn summary(&self, title: &str) -> Result<PageSummary> {
        let endpoint = format!("{}/page/summary/{title}", self.base_url);

        let resp = self.client.get(&endpoint).send().await?;

        let status = resp.status();
        if !status.is_success() {
            let message = resp.text().await.unwrap_or_default();
            return Err(WikiError::Api {
                status: status.as_u16(),
                message,
            });
        }

        Ok(resp.json::<PageSummary>().await?)
    }

    /// Best-effort lead-image lookup for a page reference (a bare title or
    /// a full article URL). A page the API does not know yields `Ok(None)`;
    /// only transport failures surface as errors.
    pub async fn page_image(&self, reference: &str) -> Result<Option<String>> {
        let title = page_title(reference);

        match self.summary(title).await {
            Ok(summary) => Ok(summary.image_url().map(String::from)),
            Err(WikiError::Api { status, .. }) => {
                debug!(title, status, "no summary for page");
                Ok(None)
            }
            Err(err) => Err(err),
        }
    }
}

impl Default for WikiClient {
    fn default() -> Self {
        Self::new()
    }
}

/// Page title of a reference: the last path segment if it looks like a
/// URL, otherwise the reference itself.
fn page_title(reference: &str) -> &str {
    reference
        .rsplit('/')
        .next()
        .filter(|segment| !segment.is_empty())
        .unwrap_or(reference)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn page_title_takes_the_last_url_segment() {
        assert_eq!(
            page_title("https://en.wikipedia.org/wiki/Masala_dosa"),
            "Masala_dosa"
        );
    }

    #[test]
    fn page_title_passes_bare_titles_through() {
        assert_eq!(page_title("Dhokla"), "Dhokla");
    }

    #[test]
    fn summary_prefers_the_original_image() {
        let summary: PageSummary = serde_json::from_str(
            r#"{
                "title": "Biryani",
                "originalimage": { "source": "https://upload.example/full.jpg", "width": 1200 },
                "thumbnail": { "source": "https://upload.example/thumb.jpg", "width": 320 }
            }"#,
        )
        .unwrap();
        assert_eq!(summary.image_url(), Some("https://upload.example/full.jpg"));
    }

    #[test]
    fn summary_falls_back_to_the_thumbnail() {
        let summary: PageSummary = serde_json::from_str(
            r#"{ "thumbnail": { "source": "https://upload.example/thumb.jpg" } }"#,
        )
        .unwrap();
        assert_eq!(
            summary.image_url(),
            Some("https://upload.example/thumb.jpg")
        );
    }

    #[test]
    fn summary_without_images_yields_none() {
        let summary: PageSummary = serde_json::from_str(r#"{ "title": "Stub" }"#).unwrap();
        assert_eq!(summary.image_url(), None);
    }
}
