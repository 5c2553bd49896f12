//! JNI bindings for Android.
//!
//! These functions are called from Kotlin via the JNI bridge.

use jni::objects::{JClass, JString};
use jni::sys::{jfloat, jstring};
use jni::JNIEnv;

use crate::{instrument_from_json, parse_note_list, render_preset_to_svg, render_to_svg, Result};

fn opt_string(env: &mut JNIEnv, s: &JString) -> Option<String> {
    if s.is_null() {
        None
    } else {
        env.get_string(s).ok().map(|s| s.into())
    }
}

fn svg_to_java(env: &mut JNIEnv, result: Result<String>) -> jstring {
    match result {
        Ok(svg) => match env.new_string(&svg) {
            Ok(js) => js.into_raw(),
            Err(_) => std::ptr::null_mut(),
        },
        Err(e) => {
            log::warn!("render failed: {e}");
            std::ptr::null_mut()
        }
    }
}

/// Render a bundled instrument to SVG.
///
/// Called from Kotlin as:
///   external fun renderPreset(name: String, notes: String?, width: Float): String?
#[no_mangle]
pub extern "system" fn Java_com_traste_Fretboard_renderPreset(
    mut env: JNIEnv,
    _class: JClass,
    name: JString,
    notes: JString,
    width: jfloat,
) -> jstring {
    let Some(name) = opt_string(&mut env, &name) else {
        return std::ptr::null_mut();
    };
    let notes = opt_string(&mut env, &notes);
    let notes = notes.as_deref().map(parse_note_list);
    let w = if width > 0.0 { Some(width as f64) } else { None };

    let result = render_preset_to_svg(&name, notes.as_deref(), w);
    svg_to_java(&mut env, result)
}

/// Render an instrument given as JSON to SVG.
///
/// Called from Kotlin as:
///   external fun renderJson(json: String, notes: String?, width: Float): String?
#[no_mangle]
pub extern "system" fn Java_com_traste_Fretboard_renderJson(
    mut env: JNIEnv,
    _class: JClass,
    json: JString,
    notes: JString,
    width: jfloat,
) -> jstring {
    let Some(json) = opt_string(&mut env, &json) else {
        return std::ptr::null_mut();
    };
    let notes = opt_string(&mut env, &notes);
    let notes = notes.as_deref().map(parse_note_list);
    let w = if width > 0.0 { Some(width as f64) } else { None };

    let result = instrument_from_json(&json).and_then(|i| render_to_svg(&i, notes.as_deref(), w));
    svg_to_java(&mut env, result)
}
