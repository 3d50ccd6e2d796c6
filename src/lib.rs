pub mod adapters;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::CliConfig;
pub use config::PracticeConfig;

pub use adapters::{LogNavigator, RecordingNavigator, StdoutNavigator};
pub use self::core::carousel::Carousel;
pub use self::core::composer::{validate_draft, ComposerSettings, Handoff, RequestComposer, SubmitPhase};
pub use self::core::handoff::{build_handoff_url, HandoffTarget};
pub use self::core::message::{compose_message, compose_message_at, TimestampStyle};
pub use domain::model::{Draft, DraftField, FieldUpdate, ServiceCatalog, Testimonial};
pub use domain::ports::Navigator;
pub use utils::error::{DeskError, Result};
