//! Vertex list decoding shared by `POLY2` and `PRISM_`.
//!
//! Scripts pass polygon vertices either as `(status, x, y)` triplets or as
//! plain `(x, y)` pairs, and nothing in the statement says which. Triplets
//! win whenever there are enough values for them.

use glam::DVec2;

/// Decodes `n` vertices from `values`.
///
/// Returns `None` when `n` is zero or there are fewer than `2n` values.
/// Values past the last decoded vertex are ignored.
///
/// # Examples
/// ```
/// use gdl_preview::dispatch::points::extract_points;
/// use glam::DVec2;
///
/// // pairs
/// let pts = extract_points(&[0.0, 0.0, 1.0, 0.0], 2).unwrap();
/// assert_eq!(pts, vec![DVec2::new(0.0, 0.0), DVec2::new(1.0, 0.0)]);
///
/// // triplets: the leading status of each vertex is skipped
/// let pts = extract_points(&[1.0, 5.0, 6.0, 1.0, 7.0, 8.0], 2).unwrap();
/// assert_eq!(pts, vec![DVec2::new(5.0, 6.0), DVec2::new(7.0, 8.0)]);
///
/// assert!(extract_points(&[1.0, 2.0, 3.0], 2).is_none());
/// ```
pub fn extract_points(values: &[f64], n: usize) -> Option<Vec<DVec2>> {
    if n == 0 {
        return None;
    }
    if covers(values, n, 3) {
        return Some(
            values
                .chunks_exact(3)
                .take(n)
                .map(|c| DVec2::new(c[1], c[2]))
                .collect(),
        );
    }
    if covers(values, n, 2) {
        return Some(
            values
                .chunks_exact(2)
                .take(n)
                .map(|c| DVec2::new(c[0], c[1]))
                .collect(),
        );
    }
    None
}

/// Whether `values` holds at least `n * width` entries.
fn covers(values: &[f64], n: usize, width: usize) -> bool {
    n.checked_mul(width)
        .is_some_and(|needed| values.len() >= needed)
}

/// Vertex count argument rounded half to even.
///
/// Saturates for out-of-range values; NaN counts as zero.
pub(crate) fn vertex_count(value: f64) -> i64 {
    value.round_ties_even() as i64
}
