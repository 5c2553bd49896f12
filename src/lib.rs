//! traste - fretboard diagram rendering for stringed instruments.
//!
//! Draws frets, inlay markers, strings and labeled notes of an instrument
//! into any retained-mode [`Surface`], or straight to an SVG string.
//!
//! # Example
//! ```no_run
//! use traste::{presets, render_to_svg};
//!
//! let guitar = presets::guitar().unwrap();
//! // C major triad, spelled the way the labels should read
//! let svg = render_to_svg(&guitar, Some(&["C", "E", "G"]), Some(800.0)).unwrap();
//! println!("{svg}");
//! ```

pub mod document;
pub mod error;
pub mod model;
pub mod notes;
pub mod presets;
pub mod renderer;
pub mod surface;

#[cfg(target_os = "android")]
pub mod android;

pub use document::{Document, NodeId};
pub use error::{InstrumentError, Result, TrasteError};
pub use model::Instrument;
pub use notes::{enharmonic, note_at_position, note_color, note_index, note_label};
pub use renderer::{draw, DrawSummary, Fretboard, FretboardLayout, SkippedNote, WidthPolicy};
pub use surface::Surface;

/// Parse and validate an instrument definition from JSON.
pub fn instrument_from_json(json: &str) -> Result<Instrument> {
    Ok(serde_json::from_str(json)?)
}

/// Render `instrument` to a standalone SVG string.
///
/// Without a `width` the board is drawn at the minimum legible width, since
/// there is no container to measure.
pub fn render_to_svg(
    instrument: &Instrument,
    notes: Option<&[&str]>,
    width: Option<f64>,
) -> Result<String> {
    let mut doc = Document::new("svg");
    let root = doc.root();
    doc.set_attr(root, "class", "fretboard");
    draw(&mut doc, "svg", instrument, notes, width)?;
    Ok(doc.svg_markup(root))
}

/// Render a bundled instrument (see [`presets::PRESET_NAMES`]) to SVG.
pub fn render_preset_to_svg(
    name: &str,
    notes: Option<&[&str]>,
    width: Option<f64>,
) -> Result<String> {
    let instrument = presets::preset(name)?;
    render_to_svg(&instrument, notes, width)
}

/// Split a comma separated note list (`"C, E, G"`) as passed over FFI.
pub fn parse_note_list(list: &str) -> Vec<&str> {
    list.split(',').map(str::trim).filter(|s| !s.is_empty()).collect()
}

// ═══════════════════════════════════════════════════════════════════════
// C FFI for iOS (static library) and Android (JNI)
// ═══════════════════════════════════════════════════════════════════════

use std::ffi::{CStr, CString};
use std::os::raw::c_char;

/// Read an optional C string argument; null or invalid UTF-8 gives `None`.
unsafe fn opt_str<'a>(ptr: *const c_char) -> Option<&'a str> {
    if ptr.is_null() {
        return None;
    }
    unsafe { CStr::from_ptr(ptr) }.to_str().ok()
}

/// Hand SVG to C, or null if rendering failed or the output holds a NUL byte.
fn svg_to_c(result: Result<String>) -> *mut c_char {
    let svg = match result {
        Ok(svg) => svg,
        Err(e) => {
            log::warn!("render failed: {e}");
            return std::ptr::null_mut();
        }
    };
    match CString::new(svg) {
        Ok(c) => c.into_raw(),
        Err(e) => {
            log::warn!("rendered SVG has a NUL byte at {}", e.nul_position());
            std::ptr::null_mut()
        }
    }
}

/// Render a bundled instrument and return SVG as a C string.
/// The caller must free the returned string with `traste_free_string`.
///
/// `notes` is a comma separated list of spellings, or null for every note.
/// `width` <= 0.0 uses the minimum legible width.
///
/// # Safety
/// `name` must be a valid null-terminated UTF-8 C string. `notes` may be null.
#[no_mangle]
pub unsafe extern "C" fn traste_render_preset(
    name: *const c_char,
    notes: *const c_char,
    width: f64,
) -> *mut c_char {
    let Some(name) = (unsafe { opt_str(name) }) else {
        return std::ptr::null_mut();
    };
    let notes = unsafe { opt_str(notes) }.map(parse_note_list);
    let w = if width > 0.0 { Some(width) } else { None };

    svg_to_c(render_preset_to_svg(name, notes.as_deref(), w))
}

/// Render an instrument given as JSON and return SVG as a C string.
/// The caller must free the returned string with `traste_free_string`.
///
/// # Safety
/// `json` must be a valid null-terminated UTF-8 C string. `notes` may be null.
#[no_mangle]
pub unsafe extern "C" fn traste_render_json(
    json: *const c_char,
    notes: *const c_char,
    width: f64,
) -> *mut c_char {
    let Some(json) = (unsafe { opt_str(json) }) else {
        return std::ptr::null_mut();
    };
    let notes = unsafe { opt_str(notes) }.map(parse_note_list);
    let w = if width > 0.0 { Some(width) } else { None };

    svg_to_c(instrument_from_json(json).and_then(|i| render_to_svg(&i, notes.as_deref(), w)))
}

/// Free a string previously returned by traste functions.
///
/// # Safety
/// `ptr` must be a string previously returned by a traste function, or null.
#[no_mangle]
pub unsafe extern "C" fn traste_free_string(ptr: *mut c_char) {
    if !ptr.is_null() {
        unsafe {
            let _ = CString::from_raw(ptr);
        }
    }
}
