use crate::core::handoff::HandoffTarget;
use crate::core::message::{compose_message_at, TimestampStyle};
use crate::domain::catalog::{self, PRACTICE_NAME, RESET_DELAY_MS};
use crate::domain::model::{Draft, DraftField, FieldUpdate, ServiceCatalog};
use crate::domain::ports::Navigator;
use crate::utils::error::{DeskError, Result};
use crate::utils::validation::{validate_required_field, Validate};
use chrono::{Local, NaiveDate, Utc};
use std::time::Duration;

/// Checks the required fields in order: name, phone, service code.
pub fn validate_draft(draft: &Draft) -> Result<()> {
    for field in DraftField::REQUIRED {
        validate_required_field(field, &draft.value_of(field))?;
    }
    Ok(())
}

impl Validate for Draft {
    fn validate(&self) -> Result<()> {
        validate_draft(self)
    }
}

/// Earliest date the form offers, as `YYYY-MM-DD`.
pub fn min_preferred_date(today: NaiveDate) -> String {
    today.format("%Y-%m-%d").to_string()
}

/// Today's UTC calendar date, like the browser's `toISOString()` date part.
pub fn today_iso() -> String {
    min_preferred_date(Utc::now().date_naive())
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SubmitPhase {
    #[default]
    Idle,
    Submitting,
    Done,
}

impl SubmitPhase {
    pub fn is_busy(&self) -> bool {
        !matches!(self, SubmitPhase::Idle)
    }

    pub fn button_label(&self) -> &'static str {
        match self {
            SubmitPhase::Idle => "Book via WhatsApp",
            SubmitPhase::Submitting | SubmitPhase::Done => "Connecting to WhatsApp...",
        }
    }
}

#[derive(Debug, Clone)]
pub struct ComposerSettings {
    pub practice_name: String,
    pub target: HandoffTarget,
    pub reset_delay: Duration,
    pub timestamp: TimestampStyle,
}

impl Default for ComposerSettings {
    fn default() -> Self {
        Self {
            practice_name: PRACTICE_NAME.to_string(),
            target: HandoffTarget::default(),
            reset_delay: Duration::from_millis(RESET_DELAY_MS),
            timestamp: TimestampStyle::from_host(),
        }
    }
}

/// What a successful submit handed to the navigator.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Handoff {
    pub message: String,
    pub url: String,
}

/// Owns the live draft and turns it into a messaging handoff on submit.
pub struct RequestComposer<N: Navigator> {
    draft: Draft,
    phase: SubmitPhase,
    settings: ComposerSettings,
    services: ServiceCatalog,
    navigator: N,
}

impl<N: Navigator> RequestComposer<N> {
    pub fn new(navigator: N) -> Self {
        Self::with_settings(ComposerSettings::default(), catalog::service_catalog(), navigator)
    }

    pub fn with_settings(settings: ComposerSettings, services: ServiceCatalog, navigator: N) -> Self {
        Self {
            draft: Draft::default(),
            phase: SubmitPhase::Idle,
            settings,
            services,
            navigator,
        }
    }

    pub fn draft(&self) -> &Draft {
        &self.draft
    }

    pub fn phase(&self) -> SubmitPhase {
        self.phase
    }

    pub fn settings(&self) -> &ComposerSettings {
        &self.settings
    }

    pub fn services(&self) -> &ServiceCatalog {
        &self.services
    }

    pub fn navigator(&self) -> &N {
        &self.navigator
    }

    pub fn update_field(&mut self, update: FieldUpdate) {
        tracing::trace!("draft edit: {}", update.field());
        self.draft.apply(update);
    }

    /// Edit by form field name, e.g. `("preferredTime", "9:00 AM")`.
    pub fn set_field(&mut self, name: &str, raw: &str) -> Result<()> {
        let field: DraftField = name.parse()?;
        self.update_field(FieldUpdate::parse(field, raw)?);
        Ok(())
    }

    /// Renders the current draft, stamped with the local time.
    pub fn compose(&self) -> String {
        let timestamp = self.settings.timestamp.render(&Local::now());
        compose_message_at(
            &self.draft,
            &self.services,
            &self.settings.practice_name,
            &timestamp,
        )
    }

    /// Validates, composes and opens the handoff URL.
    ///
    /// On validation failure the draft is untouched and the phase returns to
    /// `Idle`. On success the phase stays `Done` until [`settle`](Self::settle)
    /// resets the draft.
    pub fn submit(&mut self) -> Result<Handoff> {
        if self.phase.is_busy() {
            return Err(DeskError::SubmissionInProgress);
        }
        self.phase = SubmitPhase::Submitting;

        if let Err(e) = validate_draft(&self.draft) {
            tracing::warn!("Submission rejected: {}", e);
            self.phase = SubmitPhase::Idle;
            return Err(e);
        }

        let message = self.compose();
        let url = self.settings.target.url_for(&message);

        tracing::info!(
            "Handing off appointment request to {} (emergency: {})",
            self.settings.target.host(),
            self.draft.is_emergency
        );
        self.navigator.open(&url);
        self.phase = SubmitPhase::Done;

        Ok(Handoff { message, url })
    }

    /// Finishes a successful submission: clears the draft and goes idle.
    /// Does nothing unless a submission is `Done`.
    pub fn settle(&mut self) {
        if self.phase == SubmitPhase::Done {
            self.draft = Draft::default();
            self.phase = SubmitPhase::Idle;
            tracing::debug!("Draft reset after handoff");
        }
    }

    /// `submit`, then wait `reset_delay` before settling.
    ///
    /// Dropping the returned future cancels the pending reset; the composer is
    /// then left `Done` and the host calls [`settle`](Self::settle) itself.
    pub async fn submit_and_settle(&mut self) -> Result<Handoff> {
        let handoff = self.submit()?;
        if !self.settings.reset_delay.is_zero() {
            tokio::time::sleep(self.settings.reset_delay).await;
        }
        self.settle();
        Ok(handoff)
    }
}
