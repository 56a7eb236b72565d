//! 2D Shapes as `Sketch`s

use crate::float_types::{Real, TAU};
use crate::sketch::{Path2D, Sketch};
use crate::traits::CSGOps;
use std::fmt::Debug;

impl<S: Clone + Debug + Send + Sync> Sketch<S> {
    /// Creates a 2D rectangle spanning two opposite corners.
    ///
    /// # Example
    /// ```
    /// use gearshaper::sketch::Sketch;
    /// let bar = Sketch::<()>::rectangle_corners([-3.0, -1.0], [0.0, 1.0], None);
    /// assert!((bar.area() - 6.0).abs() < 1e-12);
    /// ```
    pub fn rectangle_corners(corner1: [Real; 2], corner2: [Real; 2], metadata: Option<S>) -> Self {
        let (x0, x1) = (corner1[0].min(corner2[0]), corner1[0].max(corner2[0]));
        let (y0, y1) = (corner1[1].min(corner2[1]), corner1[1].max(corner2[1]));
        Sketch::from_points(&[[x0, y0], [x1, y0], [x1, y1], [x0, y1]], metadata)
    }

    /// Creates a circle approximated by `resolution` segments, the first vertex
    /// on the +X side of `center`.
    ///
    /// The polygonal approximation has a maximum radial error of
    /// r(1 - cos(π/n)), so it lies entirely inside the true circle.
    pub fn circle(center: [Real; 2], radius: Real, resolution: usize, metadata: Option<S>) -> Self {
        if resolution < 3 || radius <= 0.0 {
            return Sketch::new();
        }
        let points: Vec<[Real; 2]> = (0..resolution)
            .map(|i| {
                let theta = TAU * (i as Real) / (resolution as Real);
                [center[0] + radius * theta.cos(), center[1] + radius * theta.sin()]
            })
            .collect();
        Sketch::from_points(&points, metadata)
    }

    /// Create a 2D "pie slice" (wedge) with its apex at the origin.
    /// - `radius`: outer radius of the slice.
    /// - `start_angle_deg`, `end_angle_deg`: arc end points, measured from the X-axis;
    ///   the arc may run in either direction.
    /// - `resolution`: segments per full turn used to approximate the arc.
    pub fn pie_slice(
        radius: Real,
        start_angle_deg: Real,
        end_angle_deg: Real,
        resolution: usize,
        metadata: Option<S>,
    ) -> Sketch<S> {
        Path2D::new(vec![[0.0, 0.0]], false)
            .concat(&Path2D::arc([0.0, 0.0], radius, start_angle_deg, end_angle_deg, resolution))
            .close()
            .inner_to_sketch(metadata)
    }
}
