//! Fetch pipeline for Olympic participation data.
//!
//! Uses channel-based communication to bridge the blocking fetch
//! (run on a background thread) with egui's synchronous update loop.

use super::types::Country;
use eframe::egui;
use std::sync::mpsc::{channel, Receiver, Sender};
use std::sync::Arc;
use std::time::Duration;
use thiserror::Error;

/// Failure modes of a single load attempt.
///
/// All variants are fatal to that attempt: the store flags its error
/// channel and propagates the failure to the caller.
#[derive(Debug, Error)]
pub enum FetchError {
    #[error("transport error: {0}")]
    Transport(#[from] Box<ureq::Error>),

    #[error("read error: {0}")]
    Io(#[from] std::io::Error),

    #[error("malformed country data: {0}")]
    Decode(#[from] serde_json::Error),
}

/// Fetch capability injected into the store.
///
/// Implementations run on a background thread, so they may block.
pub trait CountryFetcher: Send + Sync {
    /// Retrieves the full country collection from `source`.
    fn fetch(&self, source: &str) -> Result<Vec<Country>, FetchError>;
}

/// Production fetcher: HTTP GET for `http(s)://` sources, filesystem
/// read for anything else (the bundled mock asset is a local path).
pub struct HttpFetcher {
    timeout: Duration,
}

impl Default for HttpFetcher {
    fn default() -> Self {
        Self {
            timeout: Duration::from_secs(10),
        }
    }
}

impl HttpFetcher {
    pub fn new() -> Self {
        Self::default()
    }
}

impl CountryFetcher for HttpFetcher {
    fn fetch(&self, source: &str) -> Result<Vec<Country>, FetchError> {
        if source.starts_with("http://") || source.starts_with("https://") {
            let response = ureq::get(source)
                .timeout(self.timeout)
                .call()
                .map_err(Box::new)?;
            Ok(response.into_json::<Vec<Country>>()?)
        } else {
            let payload = std::fs::read_to_string(source)?;
            Ok(serde_json::from_str(&payload)?)
        }
    }
}

/// Result of a completed load attempt.
pub type LoadResult = Result<Vec<Country>, FetchError>;

/// Channel-based loader for async data retrieval.
///
/// Fetches block, but egui's update() is synchronous. This struct
/// provides a channel to pass results from the background fetch
/// thread back to the UI thread.
pub struct LoadChannel {
    sender: Sender<LoadResult>,
    receiver: Receiver<LoadResult>,
}

impl Default for LoadChannel {
    fn default() -> Self {
        Self::new()
    }
}

impl LoadChannel {
    pub fn new() -> Self {
        let (sender, receiver) = channel();
        Self { sender, receiver }
    }

    /// Spawns a background fetch of `source` using `fetcher`.
    pub fn spawn(&self, ctx: egui::Context, fetcher: Arc<dyn CountryFetcher>, source: String) {
        let sender = self.sender.clone();

        std::thread::spawn(move || {
            let result = fetcher.fetch(&source);
            match &result {
                Ok(countries) => {
                    log::info!("Fetched {} countries from {}", countries.len(), source)
                }
                Err(e) => log::error!("Fetch from {} failed: {}", source, e),
            }
            let _ = sender.send(result);
            ctx.request_repaint();
        });
    }

    /// Non-blocking check for a completed fetch.
    ///
    /// Returns Some(result) if a fetch completed, None if no result
    /// is ready yet.
    pub fn try_recv(&self) -> Option<LoadResult> {
        self.receiver.try_recv().ok()
    }

    /// Delivers a result directly, bypassing the fetch thread.
    #[cfg(test)]
    pub fn send_direct(&self, result: LoadResult) {
        let _ = self.sender.send(result);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    const VALID_JSON: &str = r#"[
        {
            "id": 1,
            "country": "Italy",
            "participations": [
                { "id": 1, "year": 2012, "city": "Londres", "medalsCount": 28, "athleteCount": 284 }
            ]
        }
    ]"#;

    fn write_temp_json(contents: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(contents.as_bytes()).unwrap();
        file
    }

    #[test]
    fn test_file_fetch_parses_countries() {
        let file = write_temp_json(VALID_JSON);
        let fetcher = HttpFetcher::new();

        let countries = fetcher.fetch(file.path().to_str().unwrap()).unwrap();
        assert_eq!(countries.len(), 1);
        assert_eq!(countries[0].name, "Italy");
        assert_eq!(countries[0].participations[0].medals_count, 28);
    }

    #[test]
    fn test_file_fetch_malformed_payload_is_decode_error() {
        let file = write_temp_json("{ not json ]");
        let fetcher = HttpFetcher::new();

        let err = fetcher.fetch(file.path().to_str().unwrap()).unwrap_err();
        assert!(matches!(err, FetchError::Decode(_)));
    }

    #[test]
    fn test_file_fetch_missing_file_is_io_error() {
        let fetcher = HttpFetcher::new();
        let err = fetcher.fetch("/nonexistent/olympic.json").unwrap_err();
        assert!(matches!(err, FetchError::Io(_)));
    }

    #[test]
    fn test_load_channel_passes_results_through() {
        let channel = LoadChannel::new();
        assert!(channel.try_recv().is_none());

        channel.send_direct(Ok(Vec::new()));
        let result = channel.try_recv().expect("result is ready");
        assert!(result.unwrap().is_empty());
        assert!(channel.try_recv().is_none());
    }
}
