//! Note theory: chromatic indexing, enharmonic spellings, labels and colors.
//!
//! Pitch classes are numbered 0..=11 starting at C. Note names are plain
//! ASCII spellings (`C`, `F#`, `Bb`, `G##`, `Fbb`), optionally followed by a
//! scientific-pitch octave (`E4`, `C-1`) which is ignored for pitch-class
//! arithmetic.

use crate::error::{Result, TrasteError};

/// Canonical spelling of every pitch class, starting at C.
pub const CHROMATIC_SCALE: [&str; 12] = [
    "C", "C#", "D", "D#", "E", "F", "F#", "G", "G#", "A", "A#", "B",
];

/// Every accepted spelling per pitch class, canonical spelling first.
///
/// Covers naturals plus single and double sharps and flats on all seven
/// letters, so every spelling reachable in standard notation resolves.
pub const ENHARMONIC_SPELLINGS: [&[&str]; 12] = [
    &["C", "B#", "Dbb"],
    &["C#", "Db", "B##"],
    &["D", "C##", "Ebb"],
    &["D#", "Eb", "Fbb"],
    &["E", "Fb", "D##"],
    &["F", "E#", "Gbb"],
    &["F#", "Gb", "E##"],
    &["G", "F##", "Abb"],
    &["G#", "Ab"],
    &["A", "G##", "Bbb"],
    &["A#", "Bb", "Cbb"],
    &["B", "Cb", "A##"],
];

/// Fill color per pitch class, a hue wheel starting at C.
pub const NOTE_COLORS: [&str; 12] = [
    "#ff6961", "#ff9f5a", "#ffc75f", "#f9f871", "#b5e550", "#6fdb8b",
    "#4fd1c5", "#5bc0eb", "#7a9cf0", "#9b8cf2", "#c78bf0", "#f28bd0",
];

/// Drop a trailing octave number (`E4` → `E`, `C-1` → `C`).
fn pitch_spelling(name: &str) -> &str {
    let trimmed = name.trim_end_matches(|c: char| c.is_ascii_digit());
    if trimmed.len() == name.len() {
        return name;
    }
    trimmed.strip_suffix('-').unwrap_or(trimmed)
}

/// Look up the pitch class of a spelling in the enharmonic table.
pub fn pitch_class(spelling: &str) -> Option<usize> {
    ENHARMONIC_SPELLINGS
        .iter()
        .position(|names| names.contains(&spelling))
}

/// All spellings of a pitch class. The index wraps modulo 12.
pub fn spellings(pitch_class: usize) -> &'static [&'static str] {
    ENHARMONIC_SPELLINGS[pitch_class % CHROMATIC_SCALE.len()]
}

/// Return the index of a note in [`CHROMATIC_SCALE`].
///
/// The canonical scale is tried first, then the enharmonic table, so
/// `note_index("Db") == note_index("C#")`.
pub fn note_index(name: &str) -> Result<usize> {
    let spelling = pitch_spelling(name);
    if let Some(idx) = CHROMATIC_SCALE.iter().position(|&n| n == spelling) {
        return Ok(idx);
    }
    pitch_class(spelling).ok_or_else(|| TrasteError::unknown_note(name))
}

/// Alternate spellings of the same pitch class, excluding `name` itself.
pub fn enharmonic(name: &str) -> Result<Vec<&'static str>> {
    let spelling = pitch_spelling(name);
    let idx = note_index(name)?;
    Ok(spellings(idx)
        .iter()
        .copied()
        .filter(|&s| s != spelling)
        .collect())
}

/// Return the note sounding `fret_offset` frets above the open string whose
/// pitch class is `root_index`.
///
/// Without `allowed`, the canonical spelling is returned. With `allowed`,
/// only notes from that list qualify, and the caller's own spelling comes
/// back: asking for `["Db"]` labels the position `Db`, never `C#`.
///
/// A literal canonical spelling anywhere in `allowed` wins over enharmonic
/// ones. An unknown name in `allowed` is an error only at positions that no
/// other name matches.
pub fn note_at_position<'a>(
    root_index: usize,
    fret_offset: usize,
    allowed: Option<&[&'a str]>,
) -> Result<Option<&'a str>> {
    let octave = CHROMATIC_SCALE.len();
    let idx = (root_index % octave + fret_offset % octave) % octave;
    let canonical = CHROMATIC_SCALE[idx];

    let Some(allowed) = allowed else {
        return Ok(Some(canonical));
    };

    if let Some(&name) = allowed.iter().find(|&&n| pitch_spelling(n) == canonical) {
        return Ok(Some(name));
    }

    let mut unknown = None;
    for &name in allowed {
        match note_index(name) {
            Ok(i) if i == idx => return Ok(Some(name)),
            Ok(_) => {}
            Err(e) => {
                unknown.get_or_insert(e);
            }
        }
    }
    unknown.map_or(Ok(None), Err)
}

/// Return the display label of a note, with proper accidental glyphs.
pub fn note_label(name: &str) -> String {
    name.replace('b', "♭").replace('#', "♯")
}

/// Return the fill color of a note. Enharmonic spellings share a color.
pub fn note_color(name: &str) -> Result<&'static str> {
    Ok(NOTE_COLORS[note_index(name)?])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn canonical_names_index_in_order() {
        for (i, name) in CHROMATIC_SCALE.iter().enumerate() {
            assert_eq!(note_index(name).unwrap(), i);
        }
    }

    #[test]
    fn table_is_total_and_disjoint() {
        let mut all: Vec<&str> = ENHARMONIC_SPELLINGS.iter().flat_map(|s| s.iter().copied()).collect();
        assert_eq!(all.len(), 35, "7 letters x 5 accidentals");
        all.sort_unstable();
        all.dedup();
        assert_eq!(all.len(), 35, "no spelling belongs to two pitch classes");

        for (class, names) in ENHARMONIC_SPELLINGS.iter().enumerate() {
            assert_eq!(names[0], CHROMATIC_SCALE[class]);
            for name in names.iter() {
                assert_eq!(pitch_class(name), Some(class), "{name}");
            }
        }
    }

    #[test]
    fn flats_and_double_accidentals_resolve() {
        assert_eq!(note_index("Db").unwrap(), note_index("C#").unwrap());
        assert_eq!(note_index("Bb").unwrap(), 10);
        assert_eq!(note_index("Cb").unwrap(), 11);
        assert_eq!(note_index("B#").unwrap(), 0);
        assert_eq!(note_index("G##").unwrap(), 9);
        assert_eq!(note_index("Ebb").unwrap(), 2);
    }

    #[test]
    fn octave_suffix_is_ignored() {
        assert_eq!(note_index("E4").unwrap(), 4);
        assert_eq!(note_index("Bb3").unwrap(), 10);
        assert_eq!(note_index("C-1").unwrap(), 0);
        assert_eq!(note_index("A10").unwrap(), 9);
    }

    #[test]
    fn unknown_names_are_errors() {
        for name in ["H", "", "c", "C###", "Xb", "4"] {
            match note_index(name) {
                Err(TrasteError::UnknownNote { name: n }) => assert_eq!(n, name),
                other => panic!("expected UnknownNote for {name:?}, got {other:?}"),
            }
        }
    }

    #[test]
    fn enharmonic_lists_alternates() {
        assert_eq!(enharmonic("C#").unwrap(), vec!["Db", "B##"]);
        assert_eq!(enharmonic("Ab").unwrap(), vec!["G#"]);
        assert_eq!(enharmonic("F4").unwrap(), vec!["E#", "Gbb"]);
    }

    #[test]
    fn position_without_filter_is_canonical() {
        assert_eq!(note_at_position(4, 0, None).unwrap(), Some("E"));
        assert_eq!(note_at_position(4, 1, None).unwrap(), Some("F"));
        assert_eq!(note_at_position(9, 4, None).unwrap(), Some("C#"));
        assert_eq!(note_at_position(11, 1, None).unwrap(), Some("C"));
    }

    #[test]
    fn position_is_periodic() {
        for root in 0..12 {
            for k in 0..24 {
                assert_eq!(
                    note_at_position(root, k, None).unwrap(),
                    note_at_position(root, k + 12, None).unwrap()
                );
            }
        }
    }

    #[test]
    fn filter_returns_caller_spelling() {
        // A string, 4th fret is C#
        assert_eq!(note_at_position(9, 4, Some(&["Db"])).unwrap(), Some("Db"));
        assert_eq!(note_at_position(9, 4, Some(&["C#"])).unwrap(), Some("C#"));
        assert_eq!(note_at_position(9, 4, Some(&["F"])).unwrap(), None);
        assert_eq!(note_at_position(9, 4, Some(&["F", "B##"])).unwrap(), Some("B##"));
        assert_eq!(note_at_position(9, 4, Some(&[])).unwrap(), None);
    }

    #[test]
    fn position_near_usize_max_wraps() {
        // usize::MAX is 3 mod 12
        assert_eq!(note_at_position(1, usize::MAX, None).unwrap(), Some("E"));
        assert_eq!(note_at_position(usize::MAX, usize::MAX, None).unwrap(), Some("F#"));
        for k in [usize::MAX, usize::MAX - 1, usize::MAX - 11] {
            assert_eq!(
                note_at_position(4, k, None).unwrap(),
                note_at_position(4, k - 12, None).unwrap()
            );
        }
    }

    #[test]
    fn literal_spelling_beats_enharmonic_regardless_of_order() {
        // C# position
        assert_eq!(note_at_position(1, 0, Some(&["Db", "C#"])).unwrap(), Some("C#"));
        assert_eq!(note_at_position(1, 0, Some(&["C#", "Db"])).unwrap(), Some("C#"));
        assert_eq!(note_at_position(1, 0, Some(&["B##", "Db"])).unwrap(), Some("B##"));
    }

    #[test]
    fn filter_with_unknown_name_fails_only_when_unmatched() {
        for allowed in [["C", "H"], ["H", "C"]] {
            assert_eq!(note_at_position(0, 0, Some(&allowed)).unwrap(), Some("C"));
            assert_eq!(note_at_position(0, 12, Some(&allowed)).unwrap(), Some("C"));
            match note_at_position(0, 1, Some(&allowed)) {
                Err(TrasteError::UnknownNote { name }) => assert_eq!(name, "H"),
                other => panic!("expected UnknownNote for {allowed:?}, got {other:?}"),
            }
        }
        // an enharmonic match also shields the position
        assert_eq!(note_at_position(1, 0, Some(&["H", "Db"])).unwrap(), Some("Db"));
    }

    #[test]
    fn labels_use_glyphs() {
        assert_eq!(note_label("Bb"), "B♭");
        assert_eq!(note_label("F#"), "F♯");
        assert_eq!(note_label("Ebb"), "E♭♭");
        assert_eq!(note_label("B"), "B");
    }

    #[test]
    fn colors_follow_pitch_class() {
        for names in ENHARMONIC_SPELLINGS.iter() {
            let first = note_color(names[0]).unwrap();
            for name in names.iter() {
                assert_eq!(note_color(name).unwrap(), first);
            }
        }
        let mut palette = NOTE_COLORS.to_vec();
        palette.sort_unstable();
        palette.dedup();
        assert_eq!(palette.len(), 12);
        assert!(note_color("H").is_err());
    }
}
