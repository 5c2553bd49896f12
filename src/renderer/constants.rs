//! Shared constants for the fretboard renderer (ratios and SVG user units).

// ── Width ───────────────────────────────────────────────────────────
pub(super) const CONTAINER_WIDTH_FACTOR: f64 = 0.95; // breathing room inside the parent
pub(super) const MIN_FRET_WIDTH: f64 = 26.0; // narrowest legible fret

// ── Spacing, relative to fret distance ──────────────────────────────
pub(super) const STRING_DISTANCE_RATIO: f64 = 0.65;
pub(super) const NOTE_RADIUS_RATIO: f64 = 0.23;
pub(super) const FRET_PADDING_RATIO: f64 = 0.01;
pub(super) const MARGIN_HORIZONTAL_RATIO: f64 = 0.8;
pub(super) const FRET_WIDTH_RATIO: f64 = 0.06;

// ── Spacing, relative to string distance ────────────────────────────
pub(super) const STRING_PADDING_RATIO: f64 = 0.1;
pub(super) const MARGIN_VERTICAL_RATIO: f64 = 0.5;

// ── Frets & markers ─────────────────────────────────────────────────
pub(super) const STRING_WIDTH_MARGIN_FACTOR: f64 = 1.2;
pub(super) const NUT_WIDTH_FACTOR: f64 = 1.5;
pub(super) const FRET_MARKER_RADIUS_RATIO: f64 = 0.3; // of note radius
pub(super) const OCTAVE_MARKER_OFFSET: f64 = 1.3; // of marker radius
pub(super) const FRET_MARKER_LIFT: f64 = 3.0; // of marker radius, above the bottom margin
pub(super) const FRETS_PER_OCTAVE: u32 = 12;

// ── Note glyphs ─────────────────────────────────────────────────────
pub(super) const NOTE_FONT_RATIO: f64 = 1.05; // of note radius
pub(super) const NOTE_FONT_REDUCTION: f64 = 5.0;
pub(super) const NOTE_STROKE_RATIO: f64 = 0.1; // of note radius
pub(super) const NOTE_TEXT_DY: &str = "0.38em";
pub(super) const NOTE_FONT_FAMILY: &str = "Roboto,Ubuntu,Helvetica,Arial,sans-serif";

// ── Colors ──────────────────────────────────────────────────────────
pub(super) const FRET_COLOR: &str = "#222222";
pub(super) const STRING_COLOR: &str = "#444444";
pub(super) const FRET_MARKER_COLOR: &str = "#cccccc";
pub(super) const NOTE_STROKE_COLOR: &str = "#999999";
pub(super) const NOTE_TEXT_COLOR: &str = "#000000";

// ── Group classes ───────────────────────────────────────────────────
pub(super) const FRETS_CLASS: &str = "frets";
pub(super) const FRET_MARKERS_CLASS: &str = "fret-markers";
pub(super) const STRINGS_CLASS: &str = "strings";
pub(super) const NOTES_CLASS: &str = "notes";
