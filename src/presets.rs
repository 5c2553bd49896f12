//! Bundled instrument definitions.

use crate::error::{Result, TrasteError};
use crate::model::Instrument;

/// Static description of a bundled instrument.
struct Preset {
    name: &'static str,
    tuning: &'static [&'static str],
    string_gauges: &'static [f64],
    fret_count: u32,
    fret_markers: &'static [u32],
}

const PRESETS: &[Preset] = &[
    Preset {
        name: "guitar",
        tuning: &["E4", "B3", "G3", "D3", "A2", "E2"],
        string_gauges: &[0.01, 0.013, 0.017, 0.026, 0.036, 0.046],
        fret_count: 15,
        fret_markers: &[3, 5, 7, 9, 12, 15],
    },
    Preset {
        name: "ukulele",
        tuning: &["A4", "E4", "C4", "G4"],
        string_gauges: &[0.024, 0.031, 0.037, 0.026],
        fret_count: 12,
        fret_markers: &[5, 7, 10, 12],
    },
    Preset {
        name: "bass",
        tuning: &["G2", "D2", "A1", "E1"],
        string_gauges: &[0.045, 0.065, 0.085, 0.105],
        fret_count: 20,
        fret_markers: &[3, 5, 7, 9, 12, 15, 17, 19],
    },
];

/// Names accepted by [`preset`].
pub const PRESET_NAMES: [&str; 3] = ["guitar", "ukulele", "bass"];

impl Preset {
    fn build(&self) -> Result<Instrument> {
        Ok(Instrument::new(
            self.tuning.iter().copied(),
            self.string_gauges.iter().copied(),
            self.fret_count,
            self.fret_markers.iter().copied(),
        )?)
    }
}

/// Look up a bundled instrument by name.
pub fn preset(name: &str) -> Result<Instrument> {
    PRESETS
        .iter()
        .find(|p| p.name == name)
        .ok_or_else(|| TrasteError::UnknownPreset { name: name.to_string() })?
        .build()
}

/// Six-string guitar in standard tuning, 15 frets.
pub fn guitar() -> Result<Instrument> {
    preset("guitar")
}

/// Soprano ukulele in re-entrant GCEA tuning, 12 frets.
pub fn ukulele() -> Result<Instrument> {
    preset("ukulele")
}

/// Four-string bass guitar, 20 frets.
pub fn bass() -> Result<Instrument> {
    preset("bass")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::notes::note_index;

    #[test]
    fn every_preset_is_valid() {
        assert_eq!(PRESET_NAMES.len(), PRESETS.len());
        for name in PRESET_NAMES {
            let inst = preset(name).unwrap_or_else(|e| panic!("{name}: {e}"));
            for open in inst.tuning() {
                note_index(open).unwrap();
            }
        }
    }

    #[test]
    fn guitar_shape() {
        let g = guitar().unwrap();
        assert_eq!(g.string_count(), 6);
        assert_eq!(g.fret_count(), 15);
        assert_eq!(g.tuning()[0], "E4");
    }

    #[test]
    fn unknown_preset() {
        assert!(matches!(preset("banjo"), Err(TrasteError::UnknownPreset { .. })));
    }
}
