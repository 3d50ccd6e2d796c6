// Adapters layer: concrete host implementations of the domain ports.

pub mod navigator;

pub use navigator::{LogNavigator, RecordingNavigator, StdoutNavigator};
