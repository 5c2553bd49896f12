//! Data model for a stringed instrument.
//!
//! An [`Instrument`] is validated once at construction and is read-only
//! afterwards, so drawing code never has to re-check its invariants.

use serde::{Deserialize, Serialize};

use crate::error::InstrumentError;

/// A stringed instrument: tuning, string gauges, fret count and inlays.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "InstrumentDef", into = "InstrumentDef")]
pub struct Instrument {
    tuning: Vec<String>,
    string_gauges: Vec<f64>,
    fret_count: u32,
    fret_markers: Vec<u32>,
}

/// Unvalidated wire form of [`Instrument`].
#[derive(Debug, Clone, Serialize, Deserialize)]
struct InstrumentDef {
    tuning: Vec<String>,
    string_gauges: Vec<f64>,
    fret_count: u32,
    #[serde(default)]
    fret_markers: Vec<u32>,
}

impl Instrument {
    /// Build an instrument, checking that every string has a positive gauge
    /// and every fret marker sits on the board.
    pub fn new<S: Into<String>>(
        tuning: impl IntoIterator<Item = S>,
        string_gauges: impl IntoIterator<Item = f64>,
        fret_count: u32,
        fret_markers: impl IntoIterator<Item = u32>,
    ) -> Result<Self, InstrumentError> {
        let tuning: Vec<String> = tuning.into_iter().map(Into::into).collect();
        let string_gauges: Vec<f64> = string_gauges.into_iter().collect();
        let mut fret_markers: Vec<u32> = fret_markers.into_iter().collect();

        if tuning.is_empty() {
            return Err(InstrumentError::EmptyTuning);
        }
        if tuning.len() != string_gauges.len() {
            return Err(InstrumentError::GaugeCountMismatch {
                tuning: tuning.len(),
                gauges: string_gauges.len(),
            });
        }
        if let Some((index, &gauge)) = string_gauges
            .iter()
            .enumerate()
            .find(|(_, g)| !g.is_finite() || **g <= 0.0)
        {
            return Err(InstrumentError::InvalidGauge { index, gauge });
        }
        if let Some(&marker) = fret_markers.iter().find(|&&m| m > fret_count) {
            return Err(InstrumentError::MarkerOutOfRange { marker, fret_count });
        }

        fret_markers.sort_unstable();
        fret_markers.dedup();

        Ok(Self {
            tuning,
            string_gauges,
            fret_count,
            fret_markers,
        })
    }

    /// Open-string note names, first to last physical string.
    pub fn tuning(&self) -> &[String] {
        &self.tuning
    }

    /// Relative string thickness, parallel to [`tuning`](Self::tuning).
    pub fn string_gauges(&self) -> &[f64] {
        &self.string_gauges
    }

    /// Number of frets past the nut.
    pub fn fret_count(&self) -> u32 {
        self.fret_count
    }

    /// Frets carrying an inlay dot, ascending.
    pub fn fret_markers(&self) -> &[u32] {
        &self.fret_markers
    }

    pub fn string_count(&self) -> usize {
        self.tuning.len()
    }
}

impl TryFrom<InstrumentDef> for Instrument {
    type Error = InstrumentError;

    fn try_from(def: InstrumentDef) -> Result<Self, Self::Error> {
        Instrument::new(def.tuning, def.string_gauges, def.fret_count, def.fret_markers)
    }
}

impl From<Instrument> for InstrumentDef {
    fn from(instrument: Instrument) -> Self {
        InstrumentDef {
            tuning: instrument.tuning,
            string_gauges: instrument.string_gauges,
            fret_count: instrument.fret_count,
            fret_markers: instrument.fret_markers,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn valid_instrument_sorts_markers() {
        let inst = Instrument::new(["G", "C", "E", "A"], [0.026, 0.037, 0.031, 0.024], 12, [12, 5, 7, 5])
            .unwrap();
        assert_eq!(inst.string_count(), 4);
        assert_eq!(inst.fret_markers(), &[5, 7, 12]);
    }

    #[test]
    fn mismatched_gauges_rejected() {
        let err = Instrument::new(["E", "A"], [0.01], 12, []).unwrap_err();
        assert_eq!(err, InstrumentError::GaugeCountMismatch { tuning: 2, gauges: 1 });
    }

    #[test]
    fn bad_gauges_rejected() {
        let err = Instrument::new(["E", "A"], [0.01, 0.0], 12, []).unwrap_err();
        assert!(matches!(err, InstrumentError::InvalidGauge { index: 1, .. }));
        let err = Instrument::new(["E"], [f64::NAN], 12, []).unwrap_err();
        assert!(matches!(err, InstrumentError::InvalidGauge { index: 0, .. }));
    }

    #[test]
    fn empty_tuning_rejected() {
        let err = Instrument::new(Vec::<String>::new(), [], 12, []).unwrap_err();
        assert_eq!(err, InstrumentError::EmptyTuning);
    }

    #[test]
    fn marker_past_last_fret_rejected() {
        let err = Instrument::new(["E"], [0.01], 12, [3, 15]).unwrap_err();
        assert_eq!(err, InstrumentError::MarkerOutOfRange { marker: 15, fret_count: 12 });
    }

    #[test]
    fn json_goes_through_validation() {
        let ok: Instrument = serde_json::from_str(
            r#"{"tuning": ["D", "A", "D"], "string_gauges": [0.02, 0.03, 0.04], "fret_count": 5}"#,
        )
        .unwrap();
        assert!(ok.fret_markers().is_empty());

        let bad = serde_json::from_str::<Instrument>(
            r#"{"tuning": ["D", "A"], "string_gauges": [0.02], "fret_count": 5}"#,
        );
        assert!(bad.is_err());
    }
}
