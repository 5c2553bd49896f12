//! Layout computation: turns an instrument and a target width into the
//! pixel geometry every drawing step works from.

use crate::model::Instrument;
use crate::surface::num;
use super::constants::*;

// ═══════════════════════════════════════════════════════════════════════
// Width policy
// ═══════════════════════════════════════════════════════════════════════

/// Bounds on the width of a single fret column.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WidthPolicy {
    /// Narrowest fret column; the board never gets smaller than this.
    pub min_fret_width: f64,
    /// Widest fret column, if the board should stop growing on very wide
    /// containers. Unset by default.
    pub max_fret_width: Option<f64>,
}

impl Default for WidthPolicy {
    fn default() -> Self {
        Self {
            min_fret_width: MIN_FRET_WIDTH,
            max_fret_width: None,
        }
    }
}

/// Pick the board width.
///
/// An explicit `requested` width wins; otherwise the container's
/// `available` width scaled by 0.95. The result is clamped to the policy's
/// per-fret bounds, the minimum taking precedence.
pub fn resolve_width(
    requested: Option<f64>,
    available: Option<f64>,
    fret_count: u32,
    policy: &WidthPolicy,
) -> f64 {
    let columns = f64::from(fret_count) + 1.0;
    let mut width = requested
        .or_else(|| available.map(|w| w * CONTAINER_WIDTH_FACTOR))
        .unwrap_or(0.0);
    if let Some(max) = policy.max_fret_width {
        width = width.min(max * columns);
    }
    width.max(policy.min_fret_width * columns)
}

// ═══════════════════════════════════════════════════════════════════════
// Layout
// ═══════════════════════════════════════════════════════════════════════

/// Geometry of one fretboard drawing, in SVG user units.
///
/// Coordinates of frets, strings and notes are relative to the translated
/// drawing origin (`margin_horizontal`, `margin_vertical`).
#[derive(Debug, Clone, PartialEq)]
pub struct FretboardLayout {
    pub width: f64,
    pub height: f64,
    pub fret_count: u32,
    pub string_count: usize,
    pub fret_distance: f64,
    pub string_distance: f64,
    pub note_radius: f64,
    pub fret_marker_radius: f64,
    pub string_padding: f64,
    pub fret_padding: f64,
    pub margin_horizontal: f64,
    pub margin_vertical: f64,
    /// Length of a string line.
    pub string_width: f64,
    /// Distance from the first string to the last.
    pub fret_height: f64,
    /// Stroke width of an ordinary fret.
    pub fret_width: f64,
}

impl FretboardLayout {
    /// Compute the geometry for `instrument` drawn `width` units wide.
    pub fn compute(instrument: &Instrument, width: f64) -> Self {
        let fret_count = instrument.fret_count();
        let string_count = instrument.string_count();

        let fret_distance = width / (f64::from(fret_count) + 1.0);
        let string_distance = fret_distance * STRING_DISTANCE_RATIO;
        let note_radius = fret_distance * NOTE_RADIUS_RATIO;

        let margin_horizontal = fret_distance * MARGIN_HORIZONTAL_RATIO;
        let margin_vertical = string_distance * MARGIN_VERTICAL_RATIO;

        Self {
            width,
            height: string_distance * string_count as f64 + margin_vertical,
            fret_count,
            string_count,
            fret_distance,
            string_distance,
            note_radius,
            fret_marker_radius: note_radius * FRET_MARKER_RADIUS_RATIO,
            string_padding: string_distance * STRING_PADDING_RATIO,
            fret_padding: fret_distance * FRET_PADDING_RATIO,
            margin_horizontal,
            margin_vertical,
            string_width: width - margin_horizontal * STRING_WIDTH_MARGIN_FACTOR,
            fret_height: string_distance * (string_count.saturating_sub(1)) as f64,
            fret_width: fret_distance * FRET_WIDTH_RATIO,
        }
    }

    /// `transform` attribute shared by every drawing group.
    pub fn transform(&self) -> String {
        format!("translate({}, {})", num(self.margin_horizontal), num(self.margin_vertical))
    }

    /// Horizontal position of fret `fret` (0 is the nut).
    pub fn fret_x(&self, fret: u32) -> f64 {
        f64::from(fret) * self.fret_distance
    }

    /// Vertical position of string `string` (0 is the first string).
    pub fn string_y(&self, string: usize) -> f64 {
        string as f64 * self.string_distance
    }

    /// Center of the space behind fret `fret`, where a finger goes.
    pub fn fret_center_x(&self, fret: u32) -> f64 {
        self.fret_x(fret) - self.fret_distance / 2.0
    }

    /// Vertical position of fret-marker dots, just below the last string.
    pub fn fret_marker_y(&self) -> f64 {
        self.height - self.margin_vertical - self.fret_marker_radius * FRET_MARKER_LIFT
    }

    /// Font size of a note label `label_chars` characters long.
    ///
    /// Longer labels (accidentals) shrink a little so they stay inside the
    /// circle.
    pub fn note_font_size(&self, label_chars: usize) -> f64 {
        let chars = label_chars.max(1) as f64;
        let reduce = NOTE_FONT_REDUCTION * (1.0 - 1.0 / chars);
        self.note_radius * NOTE_FONT_RATIO - reduce
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::presets::guitar;

    #[test]
    fn explicit_width_wins() {
        let p = WidthPolicy::default();
        assert_eq!(resolve_width(Some(800.0), Some(2000.0), 15, &p), 800.0);
    }

    #[test]
    fn container_width_is_scaled() {
        let p = WidthPolicy::default();
        assert_eq!(resolve_width(None, Some(1000.0), 15, &p), 950.0);
    }

    #[test]
    fn min_clamp() {
        let p = WidthPolicy::default();
        assert_eq!(resolve_width(Some(100.0), None, 15, &p), 416.0);
        assert_eq!(resolve_width(None, None, 15, &p), 416.0);
        assert_eq!(resolve_width(Some(f64::NAN), None, 3, &p), 104.0);
    }

    #[test]
    fn max_clamp_only_when_configured() {
        let p = WidthPolicy { max_fret_width: Some(140.0), ..WidthPolicy::default() };
        assert_eq!(resolve_width(Some(5000.0), None, 15, &p), 2240.0);
        assert_eq!(resolve_width(Some(800.0), None, 15, &p), 800.0);
        assert_eq!(resolve_width(Some(5000.0), None, 15, &WidthPolicy::default()), 5000.0);
    }

    #[test]
    fn guitar_geometry() {
        let g = guitar().unwrap();
        let l = FretboardLayout::compute(&g, 800.0);
        assert_eq!(l.fret_distance, 800.0 / 16.0);
        assert_eq!(l.string_distance, 50.0 * 0.65);
        assert_eq!(l.note_radius, 50.0 * 0.23);
        assert_eq!(l.margin_vertical, l.string_distance * 0.5);
        assert_eq!(l.height, l.string_distance * 6.0 + l.margin_vertical);
        assert_eq!(l.fret_height, l.string_distance * 5.0);
        assert!(l.fret_marker_radius < l.note_radius);
        assert_eq!(l.transform(), "translate(40, 16.25)");
    }

    #[test]
    fn positions() {
        let g = guitar().unwrap();
        let l = FretboardLayout::compute(&g, 800.0);
        assert_eq!(l.fret_x(0), 0.0);
        assert_eq!(l.fret_x(3), 150.0);
        assert_eq!(l.fret_center_x(1), 25.0);
        assert_eq!(l.fret_center_x(0), -25.0);
        assert_eq!(l.string_y(2), 65.0);
    }

    #[test]
    fn font_shrinks_with_label_length() {
        let g = guitar().unwrap();
        let l = FretboardLayout::compute(&g, 800.0);
        let one = l.note_font_size(1);
        assert_eq!(one, l.note_radius * 1.05);
        assert_eq!(l.note_font_size(2), one - 2.5);
        assert!(l.note_font_size(3) < l.note_font_size(2));
        assert_eq!(l.note_font_size(0), one);
    }
}
