//! Input resolver - turns any input modality into plain text
//!
//! Text passes through untouched. Images go through the object detector and
//! come back as a scene sentence. URLs are fetched; remote images take the
//! image path, everything else is read as HTML.

mod html;

use std::sync::Arc;

use domain::formatting::{dedupe_labels, describe_scene};
use domain::{ConversionInput, ResolvedText, ScratchArea, TransientFile};
use tracing::{debug, info, instrument, warn};

use crate::error::ApplicationError;
use crate::ports::{ContentFetcherPort, TransientStorePort};
use crate::services::ModelRegistry;

pub use html::readable_text;

/// Upper bound on text extracted from a web page, in characters
pub const MAX_PAGE_CHARS: usize = 10_000;

/// URL suffixes treated as images
const IMAGE_SUFFIXES: &[&str] = &[".jpg", ".jpeg", ".png", ".gif"];

/// Resolves conversion inputs to text
pub struct InputResolver {
    registry: Arc<ModelRegistry>,
    fetcher: Arc<dyn ContentFetcherPort>,
    store: Arc<dyn TransientStorePort>,
}

impl std::fmt::Debug for InputResolver {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("InputResolver")
            .field("registry", &self.registry)
            .finish_non_exhaustive()
    }
}

impl InputResolver {
    pub fn new(
        registry: Arc<ModelRegistry>,
        fetcher: Arc<dyn ContentFetcherPort>,
        store: Arc<dyn TransientStorePort>,
    ) -> Self {
        Self {
            registry,
            fetcher,
            store,
        }
    }

    /// Resolve an input to text
    ///
    /// URL retrieval problems become diagnostic text rather than errors.
    /// Errors are returned only when a capability or the scratch store fails.
    #[instrument(skip(self, input), fields(kind = %input.kind()))]
    pub async fn resolve(&self, input: &ConversionInput) -> Result<ResolvedText, ApplicationError> {
        match input {
            ConversionInput::Text(text) => Ok(ResolvedText::new(text.clone())),
            ConversionInput::Image(bytes) => self.describe_image(bytes, image_extension(bytes)).await,
            ConversionInput::Url(url) => self.resolve_url(url).await,
        }
    }

    async fn describe_image(
        &self,
        bytes: &[u8],
        extension: &str,
    ) -> Result<ResolvedText, ApplicationError> {
        let detector = self.registry.object_detector().await?;

        let name = TransientFile::unique_name("image", extension);
        let file = self.store.persist(ScratchArea::Temp, &name, bytes).await?;

        let labels = detector.detect(&file.path).await?;
        let distinct = dedupe_labels(labels);
        debug!(labels = distinct.len(), "Objects detected");

        Ok(ResolvedText::new(describe_scene(&distinct)))
    }

    async fn resolve_url(&self, url: &str) -> Result<ResolvedText, ApplicationError> {
        let content = match self.fetcher.fetch(url).await {
            Ok(content) => content,
            Err(e) => {
                warn!(error = %e, "URL retrieval failed");
                let cause = match e {
                    ApplicationError::FetchFailed(cause) => cause,
                    other => other.to_string(),
                };
                return Ok(ResolvedText::new(format!(
                    "Error retrieving URL content: {cause}"
                )));
            },
        };

        if !content.is_success() {
            info!(status = content.status, "URL returned non-success status");
            return Ok(ResolvedText::new(format!(
                "Failed to retrieve content from URL: {url}. Status code: {}",
                content.status
            )));
        }

        // The suffix wins; the media type catches image URLs without one.
        let extension = image_suffix(url)
            .or_else(|| content.is_image().then(|| image_extension(&content.body)));
        if let Some(extension) = extension {
            return self.describe_image(&content.body, extension).await;
        }

        let page = String::from_utf8_lossy(&content.body);
        Ok(ResolvedText::new(readable_text(&page, MAX_PAGE_CHARS)))
    }
}

/// Image extension named by a URL, if it points at an image
fn image_suffix(url: &str) -> Option<&'static str> {
    let lower = url.to_ascii_lowercase();
    IMAGE_SUFFIXES
        .iter()
        .find(|suffix| lower.ends_with(**suffix))
        .map(|suffix| &suffix[1..])
}

/// Pick a file extension from the leading magic bytes
fn image_extension(bytes: &[u8]) -> &'static str {
    if bytes.starts_with(b"\x89PNG") {
        "png"
    } else if bytes.starts_with(b"GIF8") {
        "gif"
    } else {
        "jpg"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ports::{FetchedContent, MockContentFetcherPort};
    use crate::services::test_support::{CountingLoader, MemoryStore};

    fn resolver(
        fetcher: MockContentFetcherPort,
        loader: CountingLoader,
    ) -> (InputResolver, Arc<MemoryStore>, Arc<CountingLoader>) {
        let loader = Arc::new(loader);
        let store = Arc::new(MemoryStore::new());
        let registry = Arc::new(ModelRegistry::new(loader.clone()));
        (
            InputResolver::new(registry, Arc::new(fetcher), store.clone()),
            store,
            loader,
        )
    }

    fn page(status: u16, body: &str) -> FetchedContent {
        FetchedContent {
            status,
            content_type: Some("text/html".into()),
            body: body.as_bytes().to_vec(),
        }
    }

    #[tokio::test]
    async fn text_is_returned_verbatim_without_models() {
        let mut fetcher = MockContentFetcherPort::new();
        fetcher.expect_fetch().never();
        let (resolver, store, loader) = resolver(fetcher, CountingLoader::new());

        let text = resolver
            .resolve(&ConversionInput::Text("  Hello, world!  ".into()))
            .await
            .unwrap();

        assert_eq!(text.as_str(), "  Hello, world!  ");
        assert_eq!(loader.load_count(), 0);
        assert!(store.written().is_empty());
    }

    #[tokio::test]
    async fn image_is_described_with_distinct_labels() {
        let (resolver, store, _) =
            resolver(MockContentFetcherPort::new(), CountingLoader::new());

        let text = resolver
            .resolve(&ConversionInput::Image(b"\x89PNG....".to_vec()))
            .await
            .unwrap();

        assert_eq!(text.as_str(), "In the image, there are a person and a dog.");
        let written = store.written();
        assert_eq!(written.len(), 1);
        assert_eq!(written[0].0, ScratchArea::Temp);
        assert!(written[0].1.starts_with("image_"));
        assert!(written[0].1.ends_with(".png"));
    }

    #[tokio::test]
    async fn image_without_detections() {
        let (resolver, _, _) = resolver(
            MockContentFetcherPort::new(),
            CountingLoader::new().with_labels(&[]),
        );

        let text = resolver
            .resolve(&ConversionInput::Image(vec![0xff, 0xd8]))
            .await
            .unwrap();
        assert_eq!(text.as_str(), "No objects detected in the image.");
    }

    #[tokio::test]
    async fn image_fails_when_detector_unavailable() {
        let (resolver, store, _) = resolver(
            MockContentFetcherPort::new(),
            CountingLoader::new().failing_first(1),
        );

        let err = resolver
            .resolve(&ConversionInput::Image(vec![1, 2, 3]))
            .await
            .unwrap_err();
        assert!(matches!(err, ApplicationError::ModelUnavailable { .. }));
        assert!(store.written().is_empty());
    }

    #[tokio::test]
    async fn non_success_status_names_url_and_status() {
        let mut fetcher = MockContentFetcherPort::new();
        fetcher
            .expect_fetch()
            .returning(|_| Ok(page(404, "not here")));
        let (resolver, _, _) = resolver(fetcher, CountingLoader::new());

        let text = resolver
            .resolve(&ConversionInput::Url("https://example.com/missing".into()))
            .await
            .unwrap();

        assert_eq!(
            text.as_str(),
            "Failed to retrieve content from URL: https://example.com/missing. Status code: 404"
        );
    }

    #[tokio::test]
    async fn network_error_becomes_diagnostic_text() {
        let mut fetcher = MockContentFetcherPort::new();
        fetcher
            .expect_fetch()
            .returning(|_| Err(ApplicationError::FetchFailed("connection refused".into())));
        let (resolver, _, _) = resolver(fetcher, CountingLoader::new());

        let text = resolver
            .resolve(&ConversionInput::Url("https://unreachable.invalid".into()))
            .await
            .unwrap();

        assert_eq!(text.as_str(), "Error retrieving URL content: connection refused");
    }

    #[tokio::test]
    async fn html_page_yields_paragraph_text() {
        let mut fetcher = MockContentFetcherPort::new();
        fetcher.expect_fetch().returning(|_| {
            Ok(page(
                200,
                "<html><body><nav>Menu</nav><p>Alpha.</p><p>Beta.</p></body></html>",
            ))
        });
        let (resolver, _, loader) = resolver(fetcher, CountingLoader::new());

        let text = resolver
            .resolve(&ConversionInput::Url("https://example.com/article".into()))
            .await
            .unwrap();

        assert_eq!(text.as_str(), "Alpha. Beta.");
        assert_eq!(loader.load_count(), 0);
    }

    #[tokio::test]
    async fn long_pages_are_truncated() {
        let mut fetcher = MockContentFetcherPort::new();
        fetcher
            .expect_fetch()
            .returning(|_| Ok(page(200, &format!("<p>{}</p>", "a".repeat(20_000)))));
        let (resolver, _, _) = resolver(fetcher, CountingLoader::new());

        let text = resolver
            .resolve(&ConversionInput::Url("https://example.com".into()))
            .await
            .unwrap();
        assert_eq!(text.char_count(), MAX_PAGE_CHARS);
    }

    #[tokio::test]
    async fn image_url_takes_image_path() {
        let mut fetcher = MockContentFetcherPort::new();
        fetcher.expect_fetch().returning(|_| {
            Ok(FetchedContent {
                status: 200,
                content_type: Some("image/jpeg".into()),
                body: vec![0xff, 0xd8, 0xff],
            })
        });
        let (resolver, store, _) =
            resolver(fetcher, CountingLoader::new().with_labels(&["cat"]));

        let text = resolver
            .resolve(&ConversionInput::Url("https://example.com/Photo.JPEG".into()))
            .await
            .unwrap();

        assert_eq!(text.as_str(), "In the image, there is a cat.");
        let written = store.written();
        assert!(written[0].1.ends_with(".jpeg"));
        assert_eq!(written[0].2, vec![0xff, 0xd8, 0xff]);
    }

    #[tokio::test]
    async fn image_media_type_without_suffix_takes_image_path() {
        let mut fetcher = MockContentFetcherPort::new();
        fetcher.expect_fetch().returning(|_| {
            Ok(FetchedContent {
                status: 200,
                content_type: Some("image/png".into()),
                body: b"\x89PNG\r\n".to_vec(),
            })
        });
        let (resolver, store, _) =
            resolver(fetcher, CountingLoader::new().with_labels(&["dog", "dog"]));

        let text = resolver
            .resolve(&ConversionInput::Url("https://example.com/render?id=7".into()))
            .await
            .unwrap();

        assert_eq!(text.as_str(), "In the image, there is a dog.");
        assert!(store.written()[0].1.ends_with(".png"));
    }

    #[test]
    fn image_suffix_detection() {
        assert_eq!(image_suffix("http://x/a.PNG"), Some("png"));
        assert_eq!(image_suffix("http://x/a.gif"), Some("gif"));
        assert_eq!(image_suffix("http://x/a.jpg?size=2"), None);
        assert_eq!(image_suffix("http://x/page.html"), None);
    }

    #[test]
    fn magic_bytes_pick_extension() {
        assert_eq!(image_extension(b"\x89PNG\r\n"), "png");
        assert_eq!(image_extension(b"GIF89a"), "gif");
        assert_eq!(image_extension(&[0xff, 0xd8]), "jpg");
    }
}
