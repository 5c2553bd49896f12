//! Note rendering: labeled circles at every string/fret position whose note
//! is requested.

use log::warn;

use crate::model::Instrument;
use crate::notes::{note_at_position, note_color, note_index, note_label};
use crate::surface::Surface;
use super::constants::*;
use super::layout::FretboardLayout;
use super::svg_builder::SvgBuilder;
use super::SkippedNote;

/// Draw the notes of every string from the open string up to the last fret.
///
/// A position whose note cannot be resolved is skipped and recorded in
/// `skipped`; the rest of the board is still drawn. Returns the number of
/// notes drawn.
pub(super) fn render_notes<S: Surface>(
    svg: &mut SvgBuilder<'_, S>,
    group: S::Node,
    layout: &FretboardLayout,
    instrument: &Instrument,
    notes: Option<&[&str]>,
    skipped: &mut Vec<SkippedNote>,
) -> usize {
    let mut drawn = 0;

    for (string, open) in instrument.tuning().iter().enumerate() {
        let root = match note_index(open) {
            Ok(idx) => idx,
            Err(e) => {
                warn!("string {string}: open note {open:?} unresolvable, skipping its notes: {e}");
                skipped.extend((0..=layout.fret_count).map(|fret| SkippedNote {
                    string,
                    fret,
                    reason: e.to_string(),
                }));
                continue;
            }
        };

        for fret in 0..=layout.fret_count {
            let resolved = note_at_position(root, fret as usize, notes)
                .and_then(|note| note.map(|n| note_color(n).map(|c| (n, c))).transpose());
            match resolved {
                Ok(Some((note, color))) => {
                    render_note(svg, group, layout, (string, fret), note, color);
                    drawn += 1;
                }
                Ok(None) => {}
                Err(e) => {
                    warn!("string {string} fret {fret}: {e}");
                    skipped.push(SkippedNote {
                        string,
                        fret,
                        reason: e.to_string(),
                    });
                }
            }
        }
    }
    drawn
}

fn render_note<S: Surface>(
    svg: &mut SvgBuilder<'_, S>,
    group: S::Node,
    layout: &FretboardLayout,
    (string, fret): (usize, u32),
    note: &str,
    color: &str,
) {
    let label = note_label(note);
    let font_size = layout.note_font_size(label.chars().count());
    let center = (layout.fret_center_x(fret), layout.string_y(string));
    let r = layout.note_radius;

    svg.circle(
        group,
        center,
        r,
        color,
        Some((NOTE_STROKE_COLOR, r * NOTE_STROKE_RATIO)),
        Some(note),
    );
    svg.label(group, center, &label, font_size, NOTE_TEXT_DY, NOTE_TEXT_COLOR, NOTE_FONT_FAMILY);
}
