//! # Config Crate
//!
//! Centralized configuration constants for the GDL preview pipeline.
//! Loop limits, tolerances and tessellation parameters are defined here so
//! the script, mesh and preview crates agree on them.
//!
//! ## Usage
//!
//! ```rust
//! use config::constants::{DEFAULT_FOR_LIMIT, LOOP_EPSILON, FRUSTUM_SEGMENTS};
//!
//! // A loop bound that lands just short of the end value still counts.
//! let end = 1.0;
//! let counter = 0.1 + 0.2 + 0.7 - 1e-12;
//! assert!(counter <= end + LOOP_EPSILON);
//!
//! assert_eq!(DEFAULT_FOR_LIMIT, 500);
//! assert!(FRUSTUM_SEGMENTS >= 3);
//! ```
//!
//! ## Design Principles
//!
//! - **Single Source of Truth**: All constants defined once, used everywhere
//! - **Browser-Safe**: No platform-specific values
//! - **Validated Snapshots**: `PreviewConfig` rejects caller contract violations
//!   at construction time, never mid-run

pub mod constants;
