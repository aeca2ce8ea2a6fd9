//! Persona generator use case.
//!
//! This module provides the `PersonaGenerator`, which owns the view state and
//! drives a request through `resolve → fetch → synthesize`, reporting each
//! outcome on a notification channel.

use std::path::PathBuf;
use std::sync::Arc;

use rpg_core::activity::{ActivityRecord, ActivitySource};
use rpg_core::notification::{Notification, messages};
use rpg_core::persona::{Persona, PersonaExporter, format_report, report_file_name, synthesize};
use rpg_core::profile::validate_profile_url;
use rpg_core::session::{AnalysisPhase, AnalysisState};
use rpg_core::{Result, RpgError};
use tokio::sync::Mutex;
use tokio::sync::mpsc::UnboundedSender;
use uuid::Uuid;

/// Use case for analyzing a profile and downloading the resulting persona.
///
/// # Responsibilities
///
/// - Validating the profile URL before any state changes
/// - Allowing at most one outstanding analysis; a second request while one
///   is pending is rejected with `AnalysisInProgress`
/// - Converting fetch/synthesis failures into `AnalysisFailure` while
///   keeping the previously displayed persona
/// - Rendering and exporting the current persona on demand
///
/// # Thread Safety
///
/// State lives behind a `tokio::sync::Mutex`. The lock is released before
/// the fetch is awaited, so readers (`snapshot`, `is_loading`) never block on
/// the network. If an `analyze` future is dropped mid-request, the pending
/// phase is settled so later requests are not locked out.
pub struct PersonaGenerator {
    /// Where posts and comments come from
    source: Arc<dyn ActivitySource>,
    /// Where downloaded reports go
    exporter: Arc<dyn PersonaExporter>,
    state: Arc<Mutex<AnalysisState>>,
    /// User feedback channel; send failures (receiver dropped) are ignored
    notifications: UnboundedSender<Notification>,
}

impl PersonaGenerator {
    /// Creates a new `PersonaGenerator`.
    ///
    /// # Arguments
    ///
    /// * `source` - Activity source used by `analyze`
    /// * `exporter` - Exporter used by `download`
    /// * `notifications` - Sender for user-facing notifications
    pub fn new(
        source: Arc<dyn ActivitySource>,
        exporter: Arc<dyn PersonaExporter>,
        notifications: UnboundedSender<Notification>,
    ) -> Self {
        Self {
            source,
            exporter,
            state: Arc::new(Mutex::new(AnalysisState::new())),
            notifications,
        }
    }

    /// Analyzes the profile at `input` and stores the resulting persona.
    ///
    /// # Errors
    ///
    /// - `InvalidInput` if the URL is blank or not a profile URL (state untouched)
    /// - `AnalysisInProgress` if another analysis is pending (state untouched)
    /// - `AnalysisFailure` if fetching or synthesis fails (previous persona kept)
    pub async fn analyze(&self, input: &str) -> Result<Persona> {
        let query = validate_profile_url(input)
            .inspect_err(|e| self.notify(Notification::error(user_message(e))))?;

        {
            let mut state = self.state.lock().await;
            if state.is_loading() {
                tracing::warn!(url = %query.url, "Rejected analysis: another request is pending");
                self.notify(Notification::warning(messages::ANALYSIS_IN_PROGRESS));
                return Err(RpgError::AnalysisInProgress);
            }
            state.url = query.url.clone();
            state.phase = AnalysisPhase::Resolving;
        }
        let pending = PendingGuard::new(Arc::clone(&self.state));

        let username = query.username();
        let request_id = Uuid::new_v4();
        tracing::info!(%request_id, %username, "Analysis started");
        self.notify(Notification::success(messages::analyzing(&username)));

        match self.fetch_and_synthesize(&username).await {
            Ok((activity, persona)) => {
                let mut state = self.state.lock().await;
                state.activity = Some(activity);
                state.persona = Some(persona.clone());
                state.phase = AnalysisPhase::Displaying;
                drop(state);
                pending.disarm();

                tracing::info!(%request_id, name = %persona.name, "Analysis finished");
                self.notify(Notification::success(messages::ANALYSIS_SUCCEEDED));
                Ok(persona)
            }
            Err(cause) => {
                let mut state = self.state.lock().await;
                state.phase = state.settled_phase();
                drop(state);
                pending.disarm();

                tracing::warn!(%request_id, error = %cause, "Analysis failed");
                self.notify(Notification::error(messages::ANALYSIS_FAILED));
                Err(RpgError::analysis_failure(cause.to_string()))
            }
        }
    }

    /// Renders the current persona as the text report.
    pub async fn report(&self) -> Result<String> {
        let persona = self.persona().await.ok_or(RpgError::NoPersona)?;
        format_report(&persona)
    }

    /// Exports the current persona's report as `<Name>_persona.txt`.
    ///
    /// # Errors
    ///
    /// - `NoPersona` if nothing has been generated yet
    /// - `MalformedPersona` if the stored persona cannot be formatted
    /// - Whatever the exporter reports (typically `Io`)
    pub async fn download(&self) -> Result<PathBuf> {
        let Some(persona) = self.persona().await else {
            self.notify(Notification::warning(messages::NOTHING_TO_DOWNLOAD));
            return Err(RpgError::NoPersona);
        };

        let result = match format_report(&persona) {
            Ok(report) => {
                self.exporter
                    .export(&report_file_name(&persona), &report)
                    .await
            }
            Err(e) => Err(e),
        };

        match result {
            Ok(path) => {
                self.notify(Notification::success(messages::DOWNLOAD_SUCCEEDED));
                Ok(path)
            }
            Err(e) => {
                tracing::warn!("Persona download failed: {}", e);
                self.notify(Notification::error(e.to_string()));
                Err(e)
            }
        }
    }

    /// Returns a copy of the current view state.
    pub async fn snapshot(&self) -> AnalysisState {
        self.state.lock().await.clone()
    }

    pub async fn persona(&self) -> Option<Persona> {
        self.state.lock().await.persona.clone()
    }

    pub async fn activity(&self) -> Option<ActivityRecord> {
        self.state.lock().await.activity.clone()
    }

    pub async fn is_loading(&self) -> bool {
        self.state.lock().await.is_loading()
    }

    async fn fetch_and_synthesize(&self, username: &str) -> Result<(ActivityRecord, Persona)> {
        self.set_phase(AnalysisPhase::Fetching).await;
        let activity = self.source.fetch(username).await?;

        self.set_phase(AnalysisPhase::Synthesizing).await;
        let persona = synthesize(&activity, username)?;

        Ok((activity, persona))
    }

    async fn set_phase(&self, phase: AnalysisPhase) {
        tracing::debug!(?phase, "Analysis phase changed");
        self.state.lock().await.phase = phase;
    }

    fn notify(&self, notification: Notification) {
        let _ = self.notifications.send(notification);
    }
}

/// Settles a pending phase if `analyze` is dropped before it finishes.
struct PendingGuard {
    state: Arc<Mutex<AnalysisState>>,
    armed: bool,
}

impl PendingGuard {
    fn new(state: Arc<Mutex<AnalysisState>>) -> Self {
        Self { state, armed: true }
    }

    fn disarm(mut self) {
        self.armed = false;
    }
}

impl Drop for PendingGuard {
    fn drop(&mut self) {
        if !self.armed {
            return;
        }
        tracing::warn!("Analysis cancelled before completion");

        // Nothing else leaves the pending phase, so a deferred settle is sound.
        match self.state.try_lock() {
            Ok(mut state) => settle(&mut state),
            Err(_) => {
                if let Ok(handle) = tokio::runtime::Handle::try_current() {
                    let state = Arc::clone(&self.state);
                    handle.spawn(async move { settle(&mut *state.lock().await) });
                }
            }
        }
    }
}

fn settle(state: &mut AnalysisState) {
    if state.is_loading() {
        state.phase = state.settled_phase();
    }
}

/// Text shown to the user for a rejected request.
fn user_message(err: &RpgError) -> String {
    match err {
        RpgError::InvalidInput(message) => message.clone(),
        other => other.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rpg_core::activity::get_sample_activity;
    use rpg_core::notification::NotificationLevel;
    use std::sync::Mutex as StdMutex;
    use tokio::sync::{Notify, mpsc};

    const URL: &str = "https://www.reddit.com/user/janeDoe/";

    // Returns the sample dataset immediately
    struct SampleSource;

    #[async_trait::async_trait]
    impl ActivitySource for SampleSource {
        async fn fetch(&self, _username: &str) -> Result<ActivityRecord> {
            Ok(get_sample_activity())
        }
    }

    // Always fails like an unreachable network
    struct FailingSource;

    #[async_trait::async_trait]
    impl ActivitySource for FailingSource {
        async fn fetch(&self, _username: &str) -> Result<ActivityRecord> {
            Err(RpgError::unavailable("connection refused"))
        }
    }

    // Returns a record with only one comment
    struct ShortSource;

    #[async_trait::async_trait]
    impl ActivitySource for ShortSource {
        async fn fetch(&self, _username: &str) -> Result<ActivityRecord> {
            let mut record = get_sample_activity();
            record.comments.truncate(1);
            Ok(record)
        }
    }

    // Signals `entered` then blocks until `release` fires
    struct GatedSource {
        entered: Arc<Notify>,
        release: Arc<Notify>,
    }

    #[async_trait::async_trait]
    impl ActivitySource for GatedSource {
        async fn fetch(&self, _username: &str) -> Result<ActivityRecord> {
            self.entered.notify_one();
            self.release.notified().await;
            Ok(get_sample_activity())
        }
    }

    // Collects exported reports in memory
    #[derive(Default)]
    struct RecordingExporter {
        exports: StdMutex<Vec<(String, String)>>,
    }

    #[async_trait::async_trait]
    impl PersonaExporter for RecordingExporter {
        async fn export(&self, file_name: &str, contents: &str) -> Result<PathBuf> {
            self.exports
                .lock()
                .unwrap()
                .push((file_name.to_string(), contents.to_string()));
            Ok(PathBuf::from(file_name))
        }
    }

    fn generator(
        source: Arc<dyn ActivitySource>,
    ) -> (
        PersonaGenerator,
        Arc<RecordingExporter>,
        mpsc::UnboundedReceiver<Notification>,
    ) {
        let exporter = Arc::new(RecordingExporter::default());
        let (tx, rx) = mpsc::unbounded_channel();
        (PersonaGenerator::new(source, exporter.clone(), tx), exporter, rx)
    }

    fn drain(rx: &mut mpsc::UnboundedReceiver<Notification>) -> Vec<(NotificationLevel, String)> {
        let mut out = Vec::new();
        while let Ok(n) = rx.try_recv() {
            out.push((n.level, n.message));
        }
        out
    }

    #[tokio::test]
    async fn test_analyze_success_updates_state_and_notifies() {
        let (generator, _, mut rx) = generator(Arc::new(SampleSource));

        let persona = generator.analyze(URL).await.unwrap();
        assert_eq!(persona.name, "JaneDoe");

        let state = generator.snapshot().await;
        assert_eq!(state.phase, AnalysisPhase::Displaying);
        assert_eq!(state.url, URL);
        assert_eq!(state.persona, Some(persona));
        assert_eq!(state.activity, Some(get_sample_activity()));

        assert_eq!(
            drain(&mut rx),
            vec![
                (NotificationLevel::Success, "Analyzing profile: janeDoe".to_string()),
                (NotificationLevel::Success, "Persona generated successfully!".to_string()),
            ]
        );
    }

    #[tokio::test]
    async fn test_invalid_input_leaves_state_untouched() {
        let (generator, _, mut rx) = generator(Arc::new(SampleSource));

        let err = generator.analyze("  ").await.unwrap_err();
        assert!(err.is_invalid_input());
        let err = generator.analyze("https://example.com/u/x").await.unwrap_err();
        assert!(err.is_invalid_input());

        assert_eq!(generator.snapshot().await, AnalysisState::new());
        assert_eq!(
            drain(&mut rx),
            vec![
                (NotificationLevel::Error, "Please enter a Reddit profile URL".to_string()),
                (
                    NotificationLevel::Error,
                    "Please enter a valid Reddit user profile URL".to_string()
                ),
            ]
        );
    }

    #[tokio::test]
    async fn test_fetch_failure_reports_analysis_failure() {
        let (generator, _, mut rx) = generator(Arc::new(FailingSource));

        let err = generator.analyze(URL).await.unwrap_err();
        assert!(err.is_analysis_failure());
        assert!(err.to_string().contains("connection refused"));

        let state = generator.snapshot().await;
        assert_eq!(state.phase, AnalysisPhase::Idle);
        assert!(state.persona.is_none());

        let notes = drain(&mut rx);
        assert_eq!(
            notes.last().unwrap(),
            &(
                NotificationLevel::Error,
                "Failed to analyze profile. Please try again.".to_string()
            )
        );
    }

    #[tokio::test]
    async fn test_short_activity_fails_without_partial_persona() {
        let (generator, _, _rx) = generator(Arc::new(ShortSource));

        let err = generator.analyze(URL).await.unwrap_err();
        assert!(err.is_analysis_failure());
        assert!(err.to_string().contains("Insufficient activity"));
        assert!(generator.persona().await.is_none());
    }

    #[tokio::test]
    async fn test_failure_keeps_previous_persona() {
        let (tx, _rx) = mpsc::unbounded_channel();
        let exporter = Arc::new(RecordingExporter::default());

        let first = PersonaGenerator::new(Arc::new(SampleSource), exporter.clone(), tx.clone());
        let persona = first.analyze(URL).await.unwrap();

        // Reuse the stored state with a failing source
        let second = PersonaGenerator {
            source: Arc::new(FailingSource),
            exporter,
            state: Arc::new(Mutex::new(first.snapshot().await)),
            notifications: tx,
        };
        let err = second
            .analyze("https://reddit.com/user/other/")
            .await
            .unwrap_err();
        assert!(err.is_analysis_failure());

        let state = second.snapshot().await;
        assert_eq!(state.persona, Some(persona));
        assert_eq!(state.phase, AnalysisPhase::Displaying);
    }

    #[tokio::test]
    async fn test_second_request_rejected_while_pending() {
        let entered = Arc::new(Notify::new());
        let release = Arc::new(Notify::new());
        let source = GatedSource {
            entered: entered.clone(),
            release: release.clone(),
        };
        let (generator, _, mut rx) = generator(Arc::new(source));
        let generator = Arc::new(generator);

        let pending = {
            let generator = generator.clone();
            tokio::spawn(async move { generator.analyze(URL).await })
        };
        entered.notified().await;
        assert!(generator.is_loading().await);
        assert_eq!(generator.snapshot().await.phase, AnalysisPhase::Fetching);

        let err = generator
            .analyze("https://reddit.com/user/someoneElse/")
            .await
            .unwrap_err();
        assert_eq!(err, RpgError::AnalysisInProgress);
        assert_eq!(generator.snapshot().await.url, URL);

        release.notify_one();
        let persona = pending.await.unwrap().unwrap();
        assert_eq!(persona.name, "JaneDoe");
        assert!(!generator.is_loading().await);

        let notes = drain(&mut rx);
        assert!(notes.contains(&(
            NotificationLevel::Warning,
            "An analysis is already in progress".to_string()
        )));
    }

    #[tokio::test]
    async fn test_cancelled_analysis_releases_pending_phase() {
        let entered = Arc::new(Notify::new());
        let source = GatedSource {
            entered: entered.clone(),
            release: Arc::new(Notify::new()),
        };
        let (generator, _, _rx) = generator(Arc::new(source));
        let generator = Arc::new(generator);

        let pending = {
            let generator = generator.clone();
            tokio::spawn(async move { generator.analyze(URL).await })
        };
        entered.notified().await;
        assert!(generator.is_loading().await);

        pending.abort();
        assert!(pending.await.unwrap_err().is_cancelled());

        let state = generator.snapshot().await;
        assert_eq!(state.phase, AnalysisPhase::Idle);
        assert!(state.persona.is_none());
    }

    #[tokio::test]
    async fn test_whitespace_username_can_be_downloaded() {
        let (generator, exporter, mut rx) = generator(Arc::new(SampleSource));

        let persona = generator.analyze("https://reddit.com/user/ /").await.unwrap();
        assert_eq!(persona.name, " ");
        assert!(generator.report().await.is_ok());

        let path = generator.download().await.unwrap();
        assert_eq!(path, PathBuf::from(" _persona.txt"));
        assert_eq!(exporter.exports.lock().unwrap().len(), 1);
        assert_eq!(
            drain(&mut rx).last().unwrap(),
            &(
                NotificationLevel::Success,
                "Persona downloaded successfully!".to_string()
            )
        );
    }

    #[tokio::test]
    async fn test_download_requires_persona() {
        let (generator, exporter, mut rx) = generator(Arc::new(SampleSource));

        assert_eq!(generator.download().await.unwrap_err(), RpgError::NoPersona);
        assert!(exporter.exports.lock().unwrap().is_empty());
        assert_eq!(
            drain(&mut rx),
            vec![(
                NotificationLevel::Warning,
                "Generate a persona before downloading".to_string()
            )]
        );
    }

    #[tokio::test]
    async fn test_download_exports_report() {
        let (generator, exporter, mut rx) = generator(Arc::new(SampleSource));
        generator.analyze(URL).await.unwrap();
        drain(&mut rx);

        let path = generator.download().await.unwrap();
        assert_eq!(path, PathBuf::from("JaneDoe_persona.txt"));

        let exports = exporter.exports.lock().unwrap();
        assert_eq!(exports.len(), 1);
        assert_eq!(exports[0].0, "JaneDoe_persona.txt");
        assert!(exports[0].1.starts_with("REDDIT USER PERSONA: JaneDoe"));
        drop(exports);

        assert_eq!(
            drain(&mut rx),
            vec![(
                NotificationLevel::Success,
                "Persona downloaded successfully!".to_string()
            )]
        );
        let report = generator.report().await.unwrap();
        assert_eq!(report.lines().next(), Some("REDDIT USER PERSONA: JaneDoe"));
    }

    #[tokio::test]
    async fn test_anonymous_profile_name() {
        // Marker present but nothing after it: placeholder name is used
        let (generator, _, _rx) = generator(Arc::new(SampleSource));
        let persona = generator.analyze("https://reddit.com/user//").await.unwrap();
        assert_eq!(persona.name, "Anonymous User");
    }
}
