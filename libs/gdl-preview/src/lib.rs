//! # GDL Preview
//!
//! Best-effort preview interpreter for GDL 2D and 3D scripts.
//!
//! ## Architecture
//!
//! ```text
//! script → gdl-script (logical lines, expressions)
//!        → Runtime (assignments, FOR/NEXT, ADD/DEL)
//!        → dispatch tables (2D records | gdl-mesh solids)
//!        → Preview2DResult / Preview3DResult + warnings
//! ```
//!
//! Malformed or unsupported script content never fails a call: the
//! statement is skipped and a line-tagged warning is recorded. The only
//! errors are caller contract violations, reported by [`Runtime::new`] and
//! [`Runtime::with_config`].
//!
//! ## Example
//!
//! ```rust
//! use gdl_preview::{preview_3d, Parameters, ParamValue};
//!
//! let mut params = Parameters::new();
//! params.insert("n".to_string(), ParamValue::Number(3.0));
//!
//! let script = "
//! FOR i = 1 TO n
//!     BLOCK 1, 1, 0.1
//!     ADDZ 0.5
//! NEXT i
//! DEL n
//! SPHERE 0
//! ";
//! let result = preview_3d(script, &params, 500);
//! assert_eq!(result.meshes.len(), 3);
//! assert_eq!(result.warnings, ["line 7: SPHERE radius is zero, skipped"]);
//! ```

pub mod diagnostics;
pub mod dispatch;
pub mod error;
pub mod params;
pub mod result;
pub mod runtime;
pub mod transform;

pub use dispatch::Mode;
pub use error::PreviewError;
pub use params::{ParamValue, Parameters};
pub use result::{Arc2D, Circle2D, Preview2DResult, Preview3DResult, PreviewResult, Segment2D};
pub use runtime::Runtime;

/// Previews a 2D script.
///
/// `for_limit` below one is treated as one.
pub fn preview_2d(script: &str, parameters: &Parameters, for_limit: i64) -> Preview2DResult {
    let mut runtime = Runtime::clamped(parameters, for_limit);
    runtime.execute(script, Mode::Plan2D);
    runtime.into_result_2d()
}

/// Previews a 3D script.
///
/// `for_limit` below one is treated as one.
pub fn preview_3d(script: &str, parameters: &Parameters, for_limit: i64) -> Preview3DResult {
    let mut runtime = Runtime::clamped(parameters, for_limit);
    runtime.execute(script, Mode::Model3D);
    runtime.into_result_3d()
}

/// Previews a 2D and a 3D script with independent state and merges their
/// warnings, 2D first.
pub fn preview_both(
    script_2d: &str,
    script_3d: &str,
    parameters: &Parameters,
    for_limit: i64,
) -> PreviewResult {
    PreviewResult::new(
        preview_2d(script_2d, parameters, for_limit),
        preview_3d(script_3d, parameters, for_limit),
    )
}
