//! Simulated Reddit activity source.
//!
//! Stands in for a real Reddit client: waits for a fixed latency window and
//! returns the sample dataset whatever the username.

use std::time::Duration;

use async_trait::async_trait;
use rpg_core::Result;
use rpg_core::activity::{ActivityRecord, ActivitySource, get_sample_activity};
use rpg_core::config::FetchSettings;

#[derive(Debug, Clone)]
pub struct MockRedditSource {
    delay: Duration,
}

impl MockRedditSource {
    pub fn new(delay: Duration) -> Self {
        Self { delay }
    }

    pub fn from_settings(settings: &FetchSettings) -> Self {
        Self::new(settings.delay())
    }

    pub fn delay(&self) -> Duration {
        self.delay
    }
}

impl Default for MockRedditSource {
    fn default() -> Self {
        Self::from_settings(&FetchSettings::default())
    }
}

#[async_trait]
impl ActivitySource for MockRedditSource {
    async fn fetch(&self, username: &str) -> Result<ActivityRecord> {
        tracing::debug!(
            "Simulating Reddit fetch for '{}' ({}ms)",
            username,
            self.delay.as_millis()
        );
        tokio::time::sleep(self.delay).await;
        Ok(get_sample_activity())
    }
}
