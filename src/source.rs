use crate::api::YouTubeApi;
use crate::config::Settings;

/// Where video data comes from, decided once at start-up.
///
/// The value is passed to every retrieval function in [`crate::catalog`], so
/// callers and tests pick the source explicitly instead of relying on
/// process-wide state.
#[derive(Debug, Clone)]
pub enum DataSource {
    /// Query the YouTube Data API.
    Live(YouTubeApi),
    /// Serve the embedded sample catalog.
    Sample,
}

impl DataSource {
    /// Pick the live API when an API key is configured, else the sample catalog.
    pub fn from_settings(settings: &Settings) -> Self {
        let Some(api_key) = settings.api_key.as_deref() else {
            tracing::info!("no YouTube API key configured, serving sample data");
            return DataSource::Sample;
        };

        match YouTubeApi::new(api_key) {
            Ok(api) => DataSource::Live(api),
            Err(e) => {
                tracing::warn!("failed to build YouTube API client, serving sample data: {}", e);
                DataSource::Sample
            }
        }
    }

    pub fn is_live(&self) -> bool {
        matches!(self, DataSource::Live(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn no_key_selects_sample() {
        assert!(!DataSource::from_settings(&Settings::new(None)).is_live());
        assert!(!DataSource::from_settings(&Settings::new(Some(" ".to_string()))).is_live());
    }

    #[test]
    fn key_selects_live() {
        let source = DataSource::from_settings(&Settings::new(Some("key".to_string())));
        assert!(source.is_live());
    }
}
