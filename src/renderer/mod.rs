//! Fretboard renderer: draws an instrument's fretboard and its notes into a
//! container on a [`Surface`].
//!
//! Every draw computes a fresh [`FretboardLayout`] from the instrument and
//! the target width and passes it down to each drawing step; nothing is kept
//! between calls. The container is cleared first, so drawing again into the
//! same container replaces the previous board.

mod constants;
mod frets;
mod layout;
mod notes;
mod svg_builder;

use log::{debug, warn};

use crate::error::{Result, TrasteError};
use crate::model::Instrument;
use crate::surface::{num, Surface};
use constants::*;
use frets::{render_fret_markers, render_frets, render_strings};
use notes::render_notes;
use svg_builder::SvgBuilder;

pub use layout::{resolve_width, FretboardLayout, WidthPolicy};

// ═══════════════════════════════════════════════════════════════════════
// Results
// ═══════════════════════════════════════════════════════════════════════

/// A string/fret position whose note could not be drawn.
#[derive(Debug, Clone, PartialEq)]
pub struct SkippedNote {
    pub string: usize,
    pub fret: u32,
    pub reason: String,
}

/// What one draw call produced.
#[derive(Debug, Clone, PartialEq)]
pub struct DrawSummary {
    pub layout: FretboardLayout,
    /// Fret lines, nut included.
    pub frets: usize,
    /// Fret-marker dots (octave frets count twice).
    pub fret_markers: usize,
    pub strings: usize,
    /// Note circles drawn.
    pub notes: usize,
    pub skipped: Vec<SkippedNote>,
}

// ═══════════════════════════════════════════════════════════════════════
// Public API
// ═══════════════════════════════════════════════════════════════════════

/// Fretboard diagram of one instrument.
#[derive(Debug, Clone)]
pub struct Fretboard<'a> {
    instrument: &'a Instrument,
    policy: WidthPolicy,
}

impl<'a> Fretboard<'a> {
    pub fn new(instrument: &'a Instrument) -> Self {
        Self {
            instrument,
            policy: WidthPolicy::default(),
        }
    }

    pub fn with_width_policy(mut self, policy: WidthPolicy) -> Self {
        self.policy = policy;
        self
    }

    /// Stop the board from growing past `max` units per fret.
    pub fn with_max_fret_width(mut self, max: f64) -> Self {
        self.policy.max_fret_width = Some(max);
        self
    }

    /// Draw the fretboard into the element matching `selector`.
    ///
    /// `notes` restricts the drawn notes to the given spellings (labels use
    /// the caller's spelling); `None` draws every position. `width` defaults
    /// to the container's available width.
    ///
    /// Fails with [`TrasteError::ContainerNotFound`] before touching the
    /// surface when `selector` matches nothing.
    pub fn draw<S: Surface>(
        &self,
        surface: &mut S,
        selector: &str,
        notes: Option<&[&str]>,
        width: Option<f64>,
    ) -> Result<DrawSummary> {
        let container = surface
            .select(selector)
            .ok_or_else(|| TrasteError::container_not_found(selector))?;
        surface.clear(container);

        let available = match width {
            Some(_) => None,
            None => {
                let available = surface.available_width(container);
                if available.is_none() {
                    warn!("{selector}: container has no measurable width, using the minimum");
                }
                available
            }
        };
        let width = resolve_width(width, available, self.instrument.fret_count(), &self.policy);
        let layout = FretboardLayout::compute(self.instrument, width);
        debug!(
            "{selector}: {}x{} board, fret distance {}, string distance {}",
            num(layout.width),
            num(layout.height),
            num(layout.fret_distance),
            num(layout.string_distance)
        );

        surface.set_attr(container, "width", &num(layout.width));
        surface.set_attr(container, "height", &num(layout.height));

        let transform = layout.transform();
        let mut svg = SvgBuilder::new(surface);
        let g_frets = svg.group(container, FRETS_CLASS, &transform);
        let g_fret_markers = svg.group(container, FRET_MARKERS_CLASS, &transform);
        let g_strings = svg.group(container, STRINGS_CLASS, &transform);
        let g_notes = svg.group(container, NOTES_CLASS, &transform);

        let frets = render_frets(&mut svg, g_frets, &layout);
        let fret_markers =
            render_fret_markers(&mut svg, g_fret_markers, &layout, self.instrument.fret_markers());
        let strings = render_strings(&mut svg, g_strings, &layout, self.instrument);

        let mut skipped = Vec::new();
        let notes = render_notes(&mut svg, g_notes, &layout, self.instrument, notes, &mut skipped);

        Ok(DrawSummary {
            layout,
            frets,
            fret_markers,
            strings,
            notes,
            skipped,
        })
    }
}

/// Draw `instrument` into the element matching `selector` with the default
/// width policy. See [`Fretboard::draw`].
pub fn draw<S: Surface>(
    surface: &mut S,
    selector: &str,
    instrument: &Instrument,
    notes: Option<&[&str]>,
    width: Option<f64>,
) -> Result<DrawSummary> {
    Fretboard::new(instrument).draw(surface, selector, notes, width)
}
