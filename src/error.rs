//! Error types for fretboard rendering.

use thiserror::Error;

/// Result type for traste operations.
pub type Result<T> = std::result::Result<T, TrasteError>;

/// Errors that can occur while resolving notes or drawing a fretboard.
#[derive(Debug, Error)]
pub enum TrasteError {
    /// Note name that resolves to no pitch class, directly or enharmonically.
    #[error("unknown note: {name}")]
    UnknownNote {
        /// The unresolvable spelling.
        name: String,
    },

    /// Selector that matches nothing on the drawing surface.
    #[error("no element found using selector: {selector}")]
    ContainerNotFound {
        /// The selector that was looked up.
        selector: String,
    },

    /// Instrument data that breaks an instrument invariant.
    #[error("invalid instrument: {0}")]
    InvalidInstrument(#[from] InstrumentError),

    /// Preset name with no bundled instrument.
    #[error("unknown instrument preset: {name}")]
    UnknownPreset {
        /// The requested preset name.
        name: String,
    },

    /// JSON (de)serialization error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Host markup could not be parsed.
    #[error("markup error: {0}")]
    Markup(#[from] roxmltree::Error),
}

impl TrasteError {
    /// Creates an unknown note error.
    pub fn unknown_note(name: impl Into<String>) -> Self {
        Self::UnknownNote { name: name.into() }
    }

    /// Creates a container not found error.
    pub fn container_not_found(selector: impl Into<String>) -> Self {
        Self::ContainerNotFound {
            selector: selector.into(),
        }
    }
}

/// Broken instrument invariants, reported at construction time.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum InstrumentError {
    #[error("tuning has no strings")]
    EmptyTuning,

    #[error("{tuning} strings in tuning but {gauges} string gauges")]
    GaugeCountMismatch { tuning: usize, gauges: usize },

    #[error("string {index} has invalid gauge {gauge}")]
    InvalidGauge { index: usize, gauge: f64 },

    #[error("fret marker {marker} is past the last fret ({fret_count})")]
    MarkerOutOfRange { marker: u32, fret_count: u32 },
}
