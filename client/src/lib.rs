//! Client-side orchestration for the video-upload page.
//!
//! Three independent flows share one [`ui::Page`]: the selection reporter
//! projects the picked file's name, the submission coordinator runs the
//! upload to settlement, and the gallery fetcher fills the processed-videos
//! panel. The server is a black box behind two endpoints.

use std::time::Duration;

use reqwest::Client;
use url::Url;

pub mod animation;
pub mod error;
pub mod gallery;
pub mod selection;
pub mod submission;
pub mod ui;

pub use error::RequestError;
pub use gallery::GalleryFetcher;
pub use selection::SelectionReporter;
pub use submission::{
    OverlapPolicy, ProcessingRequest, ProcessingResult, SubmissionCoordinator, SubmissionState,
};
pub use ui::{Link, Page, Region, ResultContent};

/// Builds the HTTP client shared by the upload and gallery flows. No request
/// timeout is set; the transport's own failure behavior drives the error
/// branches.
pub fn http_client() -> reqwest::Result<Client> {
    Client::builder()
        .user_agent(concat!("trailcut/", env!("CARGO_PKG_VERSION")))
        .tcp_keepalive(Some(Duration::from_secs(30)))
        .build()
}

/// The wired-up page: all three flows over one [`Page`] and one HTTP client.
pub struct UploadPage {
    pub page: Page,
    pub selection: SelectionReporter,
    pub submission: SubmissionCoordinator,
    pub gallery: GalleryFetcher,
}

impl UploadPage {
    pub fn new(base_url: &Url, policy: OverlapPolicy) -> reqwest::Result<Self> {
        Ok(Self::with_client(http_client()?, base_url, policy))
    }

    pub fn with_client(client: Client, base_url: &Url, policy: OverlapPolicy) -> Self {
        let page = Page::new();
        Self {
            selection: SelectionReporter::new(page.file_name.clone()),
            submission: SubmissionCoordinator::new(
                client.clone(),
                base_url,
                page.clone(),
                policy,
            ),
            gallery: GalleryFetcher::new(client, base_url, page.videos.clone()),
            page,
        }
    }
}
