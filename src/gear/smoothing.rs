//! Single pass removal of isolated corners from a closed outline.
//!
//! Boolean unions of many cutter placements leave tiny notches between
//! neighbouring placements. A notch shows up as one concave corner between two
//! convex ones (or the other way round when the outline is traced around the
//! material instead of the void) and is dropped here.

use crate::float_types::Real;

/// Which kind of isolated corner to drop.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SmoothingMode {
    /// Drop concave corners whose neighbours are both convex
    RemoveSingleConcave,
    /// Drop convex corners whose neighbours are both concave
    RemoveSingleConvex,
}

/// Convexity of every corner of a counter-clockwise closed outline, `true`
/// for convex.
pub fn classify_corners(corners: &[[Real; 2]]) -> Vec<bool> {
    let n = corners.len();
    (0..n)
        .map(|i| {
            let current = corners[i];
            let previous = corners[(i + n - 1) % n];
            let next = corners[(i + 1) % n];
            let v1 = [previous[0] - current[0], previous[1] - current[1]];
            let v2 = [next[0] - current[0], next[1] - current[1]];
            v1[0] * v2[1] - v1[1] * v2[0] < 0.0
        })
        .collect()
}

/// Remove isolated corners in one pass.
///
/// Every corner is judged against the classification of the input, so removing
/// one corner never causes its neighbours to be removed in the same call.
/// Lists of fewer than three points are returned unchanged.
pub fn smooth_corners(corners: &[[Real; 2]], mode: SmoothingMode) -> Vec<[Real; 2]> {
    let n = corners.len();
    if n < 3 {
        return corners.to_vec();
    }
    let convex = classify_corners(corners);
    corners
        .iter()
        .enumerate()
        .filter(|&(i, _)| {
            let (previous, current, next) = (convex[(i + n - 1) % n], convex[i], convex[(i + 1) % n]);
            let isolated = match mode {
                SmoothingMode::RemoveSingleConcave => !current && previous && next,
                SmoothingMode::RemoveSingleConvex => current && !previous && !next,
            };
            !isolated
        })
        .map(|(_, p)| *p)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn square_corners_are_convex() {
        let square = [[0.0, 0.0], [1.0, 0.0], [1.0, 1.0], [0.0, 1.0]];
        assert_eq!(classify_corners(&square), vec![true; 4]);
    }

    #[test]
    fn notch_in_square_is_removed() {
        // Bottom edge has a dent at x = 0.5.
        let notched = [[0.0, 0.0], [0.5, 0.2], [1.0, 0.0], [1.0, 1.0], [0.0, 1.0]];
        assert_eq!(
            classify_corners(&notched),
            vec![true, false, true, true, true]
        );
        let smoothed = smooth_corners(&notched, SmoothingMode::RemoveSingleConcave);
        assert_eq!(smoothed, vec![[0.0, 0.0], [1.0, 0.0], [1.0, 1.0], [0.0, 1.0]]);
        assert_eq!(
            smooth_corners(&notched, SmoothingMode::RemoveSingleConvex),
            notched.to_vec()
        );
    }

    #[test]
    fn short_lists_are_untouched() {
        let line = [[0.0, 0.0], [1.0, 1.0]];
        assert_eq!(smooth_corners(&line, SmoothingMode::RemoveSingleConcave), line.to_vec());
        assert!(smooth_corners(&[], SmoothingMode::RemoveSingleConvex).is_empty());
    }
}
