//! Fret, fret-marker and string rendering.

use crate::model::Instrument;
use crate::surface::Surface;
use super::constants::*;
use super::layout::FretboardLayout;
use super::svg_builder::SvgBuilder;

// ═══════════════════════════════════════════════════════════════════════
// Frets
// ═══════════════════════════════════════════════════════════════════════

/// Draw the nut and every fret as vertical lines. Returns the line count.
pub(super) fn render_frets<S: Surface>(
    svg: &mut SvgBuilder<'_, S>,
    group: S::Node,
    layout: &FretboardLayout,
) -> usize {
    let y1 = -layout.string_padding / 2.0;
    let y2 = layout.fret_height + layout.string_padding;

    for fret in 0..=layout.fret_count {
        let x = layout.fret_x(fret);
        let stroke_width = if fret == 0 {
            layout.fret_width * NUT_WIDTH_FACTOR
        } else {
            layout.fret_width
        };
        svg.line(group, (x, y1), (x, y2), FRET_COLOR, stroke_width, &fret.to_string());
    }
    layout.fret_count as usize + 1
}

// ═══════════════════════════════════════════════════════════════════════
// Fret markers
// ═══════════════════════════════════════════════════════════════════════

/// Draw inlay dots below the strings. Octave frets get a pair of dots.
/// Returns the dot count.
pub(super) fn render_fret_markers<S: Surface>(
    svg: &mut SvgBuilder<'_, S>,
    group: S::Node,
    layout: &FretboardLayout,
    markers: &[u32],
) -> usize {
    let cy = layout.fret_marker_y();
    let r = layout.fret_marker_radius;
    let mut dots = 0;

    for &fret in markers.iter().filter(|&&m| m <= layout.fret_count) {
        let cx = layout.fret_center_x(fret);
        if is_octave(fret) {
            let offset = r * OCTAVE_MARKER_OFFSET;
            svg.circle(group, (cx + offset, cy), r, FRET_MARKER_COLOR, None, None);
            svg.circle(group, (cx - offset, cy), r, FRET_MARKER_COLOR, None, None);
            dots += 2;
        } else {
            svg.circle(group, (cx, cy), r, FRET_MARKER_COLOR, None, None);
            dots += 1;
        }
    }
    dots
}

/// The open position and every 12th fret.
fn is_octave(fret: u32) -> bool {
    fret % FRETS_PER_OCTAVE == 0
}

// ═══════════════════════════════════════════════════════════════════════
// Strings
// ═══════════════════════════════════════════════════════════════════════

/// Draw one horizontal line per string, thickness following its gauge.
/// Returns the line count.
pub(super) fn render_strings<S: Surface>(
    svg: &mut SvgBuilder<'_, S>,
    group: S::Node,
    layout: &FretboardLayout,
    instrument: &Instrument,
) -> usize {
    let x1 = -layout.fret_padding / 2.0;
    let x2 = layout.string_width + layout.fret_padding;

    for (i, (open, gauge)) in instrument
        .tuning()
        .iter()
        .zip(instrument.string_gauges())
        .enumerate()
    {
        let y = layout.string_y(i);
        svg.line(group, (x1, y), (x2, y), STRING_COLOR, gauge * layout.string_distance, open);
    }
    instrument.string_count()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn octave_frets() {
        assert!(is_octave(12));
        assert!(is_octave(24));
        assert!(is_octave(0));
        assert!(!is_octave(7));
    }
}
