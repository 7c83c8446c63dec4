//! # Configuration Constants
//!
//! Centralized values shared across the GDL preview pipeline.
//!
//! ## Categories
//!
//! - **Precision**: Floating-point comparison tolerances
//! - **Limits**: Safety bounds for loops and nesting
//! - **Tessellation**: Ring and band counts for curved primitives

use std::fmt;

// =============================================================================
// PRECISION CONSTANTS
// =============================================================================

/// Tolerance applied to `FOR` loop bounds.
///
/// Accumulating a fractional `STEP` drifts away from the exact end value;
/// the loop keeps running while the counter is within this distance of it.
///
/// # Example
///
/// ```rust
/// use config::constants::LOOP_EPSILON;
///
/// let mut v = 0.0;
/// for _ in 0..10 {
///     v += 0.1;
/// }
/// assert!(v <= 1.0 + LOOP_EPSILON);
/// ```
pub const LOOP_EPSILON: f64 = 1e-9;

/// Smallest `STEP` magnitude accepted by a `FOR` header.
///
/// # Example
///
/// ```rust
/// use config::constants::STEP_EPSILON;
///
/// let step: f64 = 0.0;
/// assert!(step.abs() < STEP_EPSILON);
/// ```
pub const STEP_EPSILON: f64 = 1e-12;

/// Threshold below which a radius, height or edge length is treated as zero.
///
/// # Example
///
/// ```rust
/// use config::constants::DEGENERATE_EPSILON;
///
/// fn is_degenerate(length: f64) -> bool {
///     length.abs() <= DEGENERATE_EPSILON
/// }
///
/// assert!(is_degenerate(1e-12));
/// assert!(!is_degenerate(0.001));
/// ```
pub const DEGENERATE_EPSILON: f64 = 1e-9;

// =============================================================================
// LIMIT CONSTANTS
// =============================================================================

/// Default ceiling on the total number of `FOR` iterations in one run.
///
/// The counter is shared by every loop of the run, nested or not.
///
/// # Example
///
/// ```rust
/// use config::constants::DEFAULT_FOR_LIMIT;
///
/// let requested: Option<usize> = None;
/// assert_eq!(requested.unwrap_or(DEFAULT_FOR_LIMIT), 500);
/// ```
pub const DEFAULT_FOR_LIMIT: usize = 500;

/// Maximum `FOR` nesting depth.
///
/// Nested loops are executed recursively; deeper scripts are skipped with a
/// warning instead of growing the call stack.
///
/// # Example
///
/// ```rust
/// use config::constants::MAX_FOR_NESTING;
///
/// let depth = 3;
/// assert!(depth < MAX_FOR_NESTING);
/// ```
pub const MAX_FOR_NESTING: usize = 64;

/// Maximum nesting depth of one arithmetic expression.
///
/// Counts parentheses, prefix signs and chained operators alike. Deeper
/// expressions fail to parse instead of exhausting the stack.
///
/// # Example
///
/// ```rust
/// use config::constants::MAX_EXPR_DEPTH;
///
/// let parens = 3;
/// assert!(parens < MAX_EXPR_DEPTH);
/// ```
pub const MAX_EXPR_DEPTH: usize = 256;

// =============================================================================
// TESSELLATION CONSTANTS
// =============================================================================

/// Segments around the circumference of `CYLIND` and `CONE` rings.
pub const FRUSTUM_SEGMENTS: u32 = 24;

/// Latitude bands of a `SPHERE` mesh (pole to pole).
pub const SPHERE_LAT_STEPS: u32 = 10;

/// Longitude segments of a `SPHERE` mesh.
pub const SPHERE_LON_STEPS: u32 = 20;

/// Vertical struts drawn on a frustum wireframe.
///
/// # Example
///
/// ```rust
/// use config::constants::{FRUSTUM_SEGMENTS, FRUSTUM_STRUTS};
///
/// let stride = (FRUSTUM_SEGMENTS / FRUSTUM_STRUTS).max(1);
/// assert_eq!(stride, 3);
/// ```
pub const FRUSTUM_STRUTS: u32 = 8;

// =============================================================================
// PREVIEW CONFIG
// =============================================================================

/// Immutable snapshot of the settings one preview run is executed with.
///
/// # Examples
/// ```
/// use config::constants::PreviewConfig;
/// let config = PreviewConfig::default();
/// assert_eq!(config.for_limit, 500);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PreviewConfig {
    /// Global ceiling on `FOR` iterations across the whole run.
    pub for_limit: usize,
    /// Maximum `FOR` nesting depth.
    pub max_for_nesting: usize,
    /// Ring segment count for `CYLIND`/`CONE`.
    pub frustum_segments: u32,
    /// Latitude bands for `SPHERE`.
    pub sphere_lat_steps: u32,
    /// Longitude segments for `SPHERE`.
    pub sphere_lon_steps: u32,
}

impl PreviewConfig {
    /// Builds a configuration with the given loop limit and default
    /// tessellation, rejecting a zero limit.
    ///
    /// # Examples
    /// ```
    /// use config::constants::PreviewConfig;
    /// let cfg = PreviewConfig::new(20).expect("valid config");
    /// assert_eq!(cfg.for_limit, 20);
    /// assert!(PreviewConfig::new(0).is_err());
    /// ```
    pub fn new(for_limit: usize) -> Result<Self, ConfigError> {
        Self {
            for_limit,
            ..Self::default()
        }
        .validated()
    }

    /// Builds a configuration from a caller-supplied signed limit, rejecting
    /// anything below one.
    ///
    /// # Examples
    /// ```
    /// use config::constants::{ConfigError, PreviewConfig};
    /// assert_eq!(PreviewConfig::from_signed(8).unwrap().for_limit, 8);
    /// assert_eq!(
    ///     PreviewConfig::from_signed(-1).unwrap_err(),
    ///     ConfigError::NegativeForLimit(-1)
    /// );
    /// ```
    pub fn from_signed(for_limit: i64) -> Result<Self, ConfigError> {
        let limit =
            usize::try_from(for_limit).map_err(|_| ConfigError::NegativeForLimit(for_limit))?;
        Self::new(limit)
    }

    /// Builds a configuration from a caller-supplied signed limit, clamping
    /// anything below one up to one.
    ///
    /// # Examples
    /// ```
    /// use config::constants::PreviewConfig;
    /// assert_eq!(PreviewConfig::clamped(-4).for_limit, 1);
    /// assert_eq!(PreviewConfig::clamped(75).for_limit, 75);
    /// ```
    pub fn clamped(for_limit: i64) -> Self {
        let for_limit = usize::try_from(for_limit.max(1)).unwrap_or(usize::MAX);
        Self {
            for_limit,
            ..Self::default()
        }
    }

    /// Checks every field, returning the configuration unchanged if valid.
    ///
    /// # Examples
    /// ```
    /// use config::constants::{ConfigError, PreviewConfig};
    /// let cfg = PreviewConfig { frustum_segments: 2, ..PreviewConfig::default() };
    /// assert_eq!(cfg.validated().unwrap_err(), ConfigError::InvalidSegments(2));
    /// ```
    pub fn validated(self) -> Result<Self, ConfigError> {
        if self.for_limit == 0 {
            return Err(ConfigError::InvalidForLimit(self.for_limit));
        }
        if self.max_for_nesting == 0 {
            return Err(ConfigError::InvalidNesting(self.max_for_nesting));
        }
        if self.frustum_segments < 3 {
            return Err(ConfigError::InvalidSegments(self.frustum_segments));
        }
        if self.sphere_lon_steps < 3 {
            return Err(ConfigError::InvalidSegments(self.sphere_lon_steps));
        }
        if self.sphere_lat_steps < 2 {
            return Err(ConfigError::InvalidSegments(self.sphere_lat_steps));
        }
        Ok(self)
    }
}

impl Default for PreviewConfig {
    fn default() -> Self {
        Self {
            for_limit: DEFAULT_FOR_LIMIT,
            max_for_nesting: MAX_FOR_NESTING,
            frustum_segments: FRUSTUM_SEGMENTS,
            sphere_lat_steps: SPHERE_LAT_STEPS,
            sphere_lon_steps: SPHERE_LON_STEPS,
        }
    }
}

/// Error returned when invalid configuration values are provided.
#[derive(Debug, PartialEq, Eq)]
pub enum ConfigError {
    /// Raised when the loop iteration limit is zero.
    InvalidForLimit(usize),
    /// Raised when a signed loop iteration limit is negative.
    NegativeForLimit(i64),
    /// Raised when the nesting depth is zero.
    InvalidNesting(usize),
    /// Raised when a tessellation count is too small to form a ring.
    InvalidSegments(u32),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::InvalidForLimit(value) => {
                write!(f, "for_limit must be at least 1: {value}")
            }
            ConfigError::NegativeForLimit(value) => {
                write!(f, "for_limit must not be negative: {value}")
            }
            ConfigError::InvalidNesting(value) => {
                write!(f, "max_for_nesting must be at least 1: {value}")
            }
            ConfigError::InvalidSegments(value) => {
                write!(f, "tessellation count too small: {value}")
            }
        }
    }
}

impl std::error::Error for ConfigError {}
