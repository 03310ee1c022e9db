//! Gallery Fetcher: the processed-videos panel.

use common::data::VideoEntry;
use common::payloads::ProcessedVideosResponse;
use reqwest::Client;
use url::Url;

use crate::error::RequestError;
use crate::ui::{Link, Region};

#[derive(Clone, Debug)]
pub struct GalleryFetcher {
    client: Client,
    endpoint: Url,
    panel: Region<Vec<Link>>,
}

impl GalleryFetcher {
    pub fn new(client: Client, base_url: &Url, panel: Region<Vec<Link>>) -> Self {
        let endpoint = base_url.join("get_processed_videos").unwrap();
        Self {
            client,
            endpoint,
            panel,
        }
    }

    /// The show-videos trigger: refresh the listing, then toggle the panel.
    /// Viewing the gallery is non-critical, so a failed fetch is only
    /// logged and the panel is left exactly as it was, stale listing
    /// included.
    pub async fn show_processed_videos(&self) {
        match self.fetch().await {
            Ok(videos) => {
                let items = videos
                    .into_iter()
                    .map(|v| Link::new_tab(v.filename, v.url))
                    .collect();
                self.panel.set(items);
                self.panel.toggle();
            }
            Err(e) => log::error!("error fetching processed videos: {e}"),
        }
    }

    /// Fetches the processed-videos listing.
    pub async fn fetch(&self) -> Result<Vec<VideoEntry>, RequestError> {
        let res = self.client.get(self.endpoint.clone()).send().await?;
        let text = res.text().await?;
        let listing: ProcessedVideosResponse = serde_json::from_str(&text)?;
        Ok(listing.videos)
    }
}
