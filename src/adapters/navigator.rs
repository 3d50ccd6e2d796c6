use crate::domain::ports::Navigator;
use std::io::Write;
use std::sync::Mutex;

/// Only records the handoff in the log.
#[derive(Debug, Clone, Default)]
pub struct LogNavigator;

impl Navigator for LogNavigator {
    fn open(&self, url: &str) {
        tracing::info!("Opening handoff URL ({} bytes)", url.len());
        tracing::debug!("Handoff URL: {}", url);
    }
}

/// Prints the URL so a terminal user can follow it.
#[derive(Debug, Clone, Default)]
pub struct StdoutNavigator;

impl Navigator for StdoutNavigator {
    fn open(&self, url: &str) {
        // 寫入失敗也不回報，交接本來就沒有回應通道
        let mut stdout = std::io::stdout().lock();
        if writeln!(stdout, "{}", url).is_err() {
            tracing::warn!("Could not print handoff URL");
        }
    }
}

/// Keeps every opened URL in memory.
#[derive(Debug, Default)]
pub struct RecordingNavigator {
    opened: Mutex<Vec<String>>,
}

impl RecordingNavigator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn opened(&self) -> Vec<String> {
        match self.opened.lock() {
            Ok(opened) => opened.clone(),
            Err(poisoned) => poisoned.into_inner().clone(),
        }
    }

    pub fn last(&self) -> Option<String> {
        self.opened().pop()
    }
}

impl Navigator for RecordingNavigator {
    fn open(&self, url: &str) {
        match self.opened.lock() {
            Ok(mut opened) => opened.push(url.to_string()),
            Err(poisoned) => poisoned.into_inner().push(url.to_string()),
        }
    }
}
