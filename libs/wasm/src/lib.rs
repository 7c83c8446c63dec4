//! WASM-facing entry points for the GDL preview interpreter.
//!
//! This crate is compiled to a `cdylib` and consumed from JavaScript via
//! `wasm-bindgen`. Every entry point takes script text, a JSON object of
//! parameters and a loop limit, and returns the serialized result. Native
//! tests call the `*_internal` helpers, which keep Rust error types.
//!
//! ```
//! let json = gdl_preview_wasm::preview_3d_internal("BLOCK 1, 1, 1", "{}", 500).unwrap();
//! assert!(json.contains("\"meshes\""));
//! ```

use config::constants::DEFAULT_FOR_LIMIT;
use gdl_preview::params::parse_parameters;
use gdl_preview::{preview_2d, preview_3d, preview_both, PreviewError};
use wasm_bindgen::prelude::*;

/// Installs a panic hook that forwards Rust panics to the browser console.
///
/// # Examples
/// ```no_run
/// // In JavaScript: import and call once at startup.
/// // import { init_panic_hook } from "gdl-preview-wasm";
/// // init_panic_hook();
/// ```
#[wasm_bindgen]
pub fn init_panic_hook() {
    #[cfg(feature = "console_error_panic_hook")]
    console_error_panic_hook::set_once();
}

/// Loop limit editors should pass when the user has not chosen one.
///
/// # Examples
/// ```
/// assert_eq!(gdl_preview_wasm::default_for_limit(), 500);
/// ```
#[wasm_bindgen]
pub fn default_for_limit() -> u32 {
    u32::try_from(DEFAULT_FOR_LIMIT).unwrap_or(u32::MAX)
}

/// Previews a 2D script and returns the result as JSON.
///
/// # Errors
/// Returns a JavaScript error string when `params_json` is not a JSON
/// object of parameter values.
///
/// # Examples
/// ```no_run
/// // In JavaScript:
/// // const result = JSON.parse(preview_2d_json("CIRCLE2 0, 0, 1", "{}", 500));
/// // console.log(result.circles.length, result.warnings);
/// ```
#[wasm_bindgen]
pub fn preview_2d_json(script: &str, params_json: &str, for_limit: i32) -> Result<String, JsValue> {
    preview_2d_internal(script, params_json, i64::from(for_limit)).map_err(to_js_error)
}

/// Previews a 3D script and returns the result as JSON.
///
/// Meshes are encoded as split `x`/`y`/`z` coordinate and `i`/`j`/`k`
/// index columns.
///
/// # Errors
/// Returns a JavaScript error string for malformed parameter JSON.
#[wasm_bindgen]
pub fn preview_3d_json(script: &str, params_json: &str, for_limit: i32) -> Result<String, JsValue> {
    preview_3d_internal(script, params_json, i64::from(for_limit)).map_err(to_js_error)
}

/// Previews a 2D and a 3D script and returns the combined result as JSON.
///
/// # Errors
/// Returns a JavaScript error string for malformed parameter JSON.
#[wasm_bindgen]
pub fn preview_both_json(
    script_2d: &str,
    script_3d: &str,
    params_json: &str,
    for_limit: i32,
) -> Result<String, JsValue> {
    preview_both_internal(script_2d, script_3d, params_json, i64::from(for_limit))
        .map_err(to_js_error)
}

fn to_js_error(err: PreviewError) -> JsValue {
    JsValue::from_str(&err.to_string())
}

// =============================================================================
// HOST HELPERS
// =============================================================================

/// Host-only helper behind [`preview_2d_json`].
///
/// # Examples
/// ```
/// let json = gdl_preview_wasm::preview_2d_internal("LINE2 0, 0, 1, 1", "", 500).unwrap();
/// assert!(json.starts_with("{\"lines\":[[[0.0,0.0],[1.0,1.0]]]"));
/// ```
pub fn preview_2d_internal(
    script: &str,
    params_json: &str,
    for_limit: i64,
) -> Result<String, PreviewError> {
    let params = parse_parameters(params_json)?;
    let result = preview_2d(script, &params, for_limit);
    serde_json::to_string(&result).map_err(PreviewError::Serialize)
}

/// Host-only helper behind [`preview_3d_json`].
pub fn preview_3d_internal(
    script: &str,
    params_json: &str,
    for_limit: i64,
) -> Result<String, PreviewError> {
    let params = parse_parameters(params_json)?;
    let result = preview_3d(script, &params, for_limit);
    serde_json::to_string(&result).map_err(PreviewError::Serialize)
}

/// Host-only helper behind [`preview_both_json`].
pub fn preview_both_internal(
    script_2d: &str,
    script_3d: &str,
    params_json: &str,
    for_limit: i64,
) -> Result<String, PreviewError> {
    let params = parse_parameters(params_json)?;
    let result = preview_both(script_2d, script_3d, &params, for_limit);
    serde_json::to_string(&result).map_err(PreviewError::Serialize)
}

#[cfg(test)]
mod tests;
