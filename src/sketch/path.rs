//! Open and closed polylines, used to build arcs and sectors and to stroke
//! outlines for illustrations.

use crate::float_types::Real;
use crate::sketch::Sketch;
use crate::traits::CSGOps;
use std::fmt::Debug;

/// An ordered list of points, optionally closed back to its first point.
#[derive(Clone, Debug, PartialEq)]
pub struct Path2D {
    pub points: Vec<[Real; 2]>,
    pub closed: bool,
}

impl Path2D {
    pub const fn new(points: Vec<[Real; 2]>, closed: bool) -> Self {
        Path2D { points, closed }
    }

    /// Tessellated circular arc from `start_angle_deg` to `end_angle_deg`.
    ///
    /// `resolution` is the number of segments a full turn would get; the arc
    /// uses a proportional share of them (at least one) and always contains
    /// both end points. When `end < start` the arc runs clockwise.
    pub fn arc(
        center: [Real; 2],
        radius: Real,
        start_angle_deg: Real,
        end_angle_deg: Real,
        resolution: usize,
    ) -> Path2D {
        let sweep = end_angle_deg - start_angle_deg;
        let segments = ((resolution as Real) * sweep.abs() / 360.0).ceil().max(1.0) as usize;
        let points = (0..=segments)
            .map(|i| {
                let angle =
                    (start_angle_deg + sweep * (i as Real) / (segments as Real)).to_radians();
                [center[0] + radius * angle.cos(), center[1] + radius * angle.sin()]
            })
            .collect();
        Path2D::new(points, false)
    }

    /// Append `other`, skipping its first point when it repeats our last one.
    pub fn concat(&self, other: &Path2D) -> Path2D {
        let mut points = self.points.clone();
        let mut rest = other.points.iter().peekable();
        if let (Some(last), Some(first)) = (points.last(), rest.peek()) {
            if last == *first {
                rest.next();
            }
        }
        points.extend(rest);
        Path2D::new(points, false)
    }

    pub fn close(mut self) -> Path2D {
        self.closed = true;
        self
    }

    /// Fill the area enclosed by the (implicitly closed) path.
    pub fn inner_to_sketch<S: Clone + Debug + Send + Sync>(&self, metadata: Option<S>) -> Sketch<S> {
        Sketch::from_points(&self.points, metadata)
    }

    /// Stroke the path: the union of a disc of `radius` around every point and
    /// a rectangle of width `2 * radius` along every segment.
    pub fn expand_to_sketch<S: Clone + Debug + Send + Sync>(
        &self,
        radius: Real,
        resolution: usize,
        metadata: Option<S>,
    ) -> Sketch<S> {
        let mut stroke = Sketch::<S>::new();
        for p in &self.points {
            stroke = stroke.union(&Sketch::circle(*p, radius, resolution.max(3), None));
        }

        let segment_count = match (self.closed, self.points.len()) {
            (_, 0 | 1) => 0,
            (true, n) => n,
            (false, n) => n - 1,
        };
        for i in 0..segment_count {
            let a = self.points[i];
            let b = self.points[(i + 1) % self.points.len()];
            let (dx, dy) = (b[0] - a[0], b[1] - a[1]);
            let length = dx.hypot(dy);
            if length <= 0.0 {
                continue;
            }
            let (nx, ny) = (-dy / length * radius, dx / length * radius);
            let segment = Sketch::from_points(
                &[
                    [a[0] + nx, a[1] + ny],
                    [b[0] + nx, b[1] + ny],
                    [b[0] - nx, b[1] - ny],
                    [a[0] - nx, a[1] - ny],
                ],
                None,
            );
            stroke = stroke.union(&segment);
        }
        stroke.metadata = metadata;
        stroke
    }
}
