//! Integration tests for note resolution across the enharmonic table.

use traste::notes::{spellings, CHROMATIC_SCALE, ENHARMONIC_SPELLINGS};
use traste::{enharmonic, note_at_position, note_color, note_index, note_label, TrasteError};

#[test]
fn every_spelling_indexes_into_scale() {
    for names in ENHARMONIC_SPELLINGS {
        for name in names {
            let idx = note_index(name).unwrap();
            assert!(idx < 12, "{name} -> {idx}");
            assert_eq!(CHROMATIC_SCALE[idx], names[0]);
        }
    }
}

#[test]
fn enharmonic_pairs_agree() {
    for names in ENHARMONIC_SPELLINGS {
        for name in names {
            for alt in enharmonic(name).unwrap() {
                assert_eq!(note_index(name).unwrap(), note_index(alt).unwrap(), "{name}/{alt}");
                assert_eq!(note_color(name).unwrap(), note_color(alt).unwrap(), "{name}/{alt}");
            }
        }
    }
    assert_eq!(note_index("C#").unwrap(), note_index("Db").unwrap());
}

#[test]
fn caller_spelling_wins() {
    let c_sharp = note_index("C#").unwrap();
    assert_eq!(note_at_position(c_sharp, 0, Some(&["Db"])).unwrap(), Some("Db"));
    assert_eq!(note_at_position(c_sharp, 12, Some(&["Db"])).unwrap(), Some("Db"));
    assert_eq!(note_at_position(c_sharp, 0, Some(&["F"])).unwrap(), None);
}

#[test]
fn scale_walk_along_a_string() {
    // low E string, frets 0..=12
    let e = note_index("E2").unwrap();
    let walked: Vec<&str> = (0..=12)
        .map(|fret| note_at_position(e, fret, None).unwrap().unwrap())
        .collect();
    assert_eq!(
        walked,
        ["E", "F", "F#", "G", "G#", "A", "A#", "B", "C", "C#", "D", "D#", "E"]
    );

    // E minor pentatonic spelled with the caller's names
    let pentatonic = ["E", "G", "A", "B", "D"];
    let hits: Vec<usize> = (0..12)
        .filter(|&fret| note_at_position(e, fret, Some(&pentatonic)).unwrap().is_some())
        .collect();
    assert_eq!(hits, vec![0, 3, 5, 7, 10]);
}

#[test]
fn spellings_wrap() {
    assert_eq!(spellings(13), spellings(1));
}

#[test]
fn unknown_note_error() {
    let err = note_index("H").unwrap_err();
    assert!(matches!(err, TrasteError::UnknownNote { ref name } if name == "H"));
    assert_eq!(err.to_string(), "unknown note: H");
}

#[test]
fn labels() {
    assert_eq!(note_label("Db"), "D♭");
    assert_eq!(note_label("G##"), "G♯♯");
}
