pub mod config_service;
pub mod file_persona_exporter;
pub mod logging;
pub mod mock_activity_source;
pub mod paths;

pub use crate::config_service::ConfigService;
pub use crate::file_persona_exporter::FilePersonaExporter;
pub use crate::mock_activity_source::MockRedditSource;
pub use crate::paths::RpgPaths;
