//! `Sketch` struct and implementations of the `CSGOps` trait for `Sketch`
//!
//! A `Sketch` is a planar polygon-with-holes set stored as a [`geo::MultiPolygon`].
//! Boolean operations are delegated to `geo`'s [`BooleanOps`], transforms are
//! expressed as 3x3 homogeneous `nalgebra` matrices.

use crate::float_types::{Real, tolerance};
use crate::traits::CSGOps;
use geo::{
    AffineOps, AffineTransform, Area, BooleanOps, BoundingRect, Coord, LineString,
    MultiPolygon, Orient, Polygon as GeoPolygon, Rect, orient::Direction,
};
use nalgebra::Matrix3;
use std::fmt::Debug;
use std::sync::OnceLock;

pub mod path;
pub mod shapes;

pub use path::Path2D;

#[derive(Clone, Debug)]
pub struct Sketch<S: Clone + Send + Sync + Debug> {
    /// 2D polygons, exteriors counter-clockwise unless built unchecked
    pub geometry: MultiPolygon<Real>,

    /// Lazily calculated bounds of `geometry`
    pub bounding_box: OnceLock<Option<Rect<Real>>>,

    /// Metadata
    pub metadata: Option<S>,
}

impl<S: Clone + Send + Sync + Debug> Sketch<S> {
    /// Wrap an existing `geo` multipolygon.
    pub fn from_geo(geometry: MultiPolygon<Real>, metadata: Option<S>) -> Self {
        Sketch {
            geometry,
            bounding_box: OnceLock::new(),
            metadata,
        }
    }

    /// Build a polygon from an ordered point list.
    ///
    /// Consecutive duplicate points are dropped and the ring is oriented
    /// counter-clockwise. Fewer than three distinct points give an empty sketch.
    pub fn from_points(points: &[[Real; 2]], metadata: Option<S>) -> Self {
        let eps = tolerance();
        let mut coords: Vec<Coord<Real>> = Vec::with_capacity(points.len() + 1);
        for p in points {
            let c = Coord { x: p[0], y: p[1] };
            match coords.last() {
                Some(last) if (last.x - c.x).abs() < eps && (last.y - c.y).abs() < eps => {},
                _ => coords.push(c),
            }
        }
        while coords.len() > 1 {
            let (first, last) = (coords[0], coords[coords.len() - 1]);
            if (first.x - last.x).abs() < eps && (first.y - last.y).abs() < eps {
                coords.pop();
            } else {
                break;
            }
        }
        if coords.len() < 3 {
            return Sketch::new();
        }
        let polygon = GeoPolygon::new(LineString::new(coords), vec![]);
        Sketch::from_geo(
            MultiPolygon(vec![polygon.orient(Direction::Default)]),
            metadata,
        )
    }

    /// Build a polygon from an ordered point list without cleaning or re-orienting it.
    ///
    /// Meant for large outlines generated by rotating an already clean point list,
    /// where the checks in [`Sketch::from_points`] would only cost time.
    pub fn from_points_no_check(points: &[[Real; 2]], metadata: Option<S>) -> Self {
        if points.len() < 3 {
            return Sketch::new();
        }
        let ring: LineString<Real> = points.iter().map(|p| (p[0], p[1])).collect();
        Sketch::from_geo(MultiPolygon(vec![GeoPolygon::new(ring, vec![])]), metadata)
    }

    /// Boundary loops as point lists without the closing duplicate.
    ///
    /// Exterior rings come first, counter-clockwise and sorted by descending
    /// polygon area; they are followed by all holes, clockwise.
    pub fn outline_paths(&self) -> Vec<Vec<[Real; 2]>> {
        let mut polygons: Vec<GeoPolygon<Real>> = self
            .geometry
            .0
            .iter()
            .map(|p| p.orient(Direction::Default))
            .collect();
        polygons.sort_by(|a, b| b.unsigned_area().total_cmp(&a.unsigned_area()));

        let mut paths: Vec<Vec<[Real; 2]>> =
            polygons.iter().map(|p| ring_points(p.exterior())).collect();
        paths.extend(
            polygons
                .iter()
                .flat_map(|p| p.interiors().iter().map(ring_points)),
        );
        paths
    }

    /// Total enclosed area (holes subtracted).
    pub fn area(&self) -> Real {
        self.geometry.unsigned_area()
    }

    pub fn is_empty(&self) -> bool {
        self.geometry.0.is_empty()
    }

    /// Number of separate polygons.
    pub fn polygon_count(&self) -> usize {
        self.geometry.0.len()
    }

    /// Number of holes over all polygons.
    pub fn hole_count(&self) -> usize {
        self.geometry.0.iter().map(|p| p.interiors().len()).sum()
    }

    fn with_geometry(&self, geometry: MultiPolygon<Real>) -> Self {
        Sketch {
            geometry,
            bounding_box: OnceLock::new(),
            metadata: self.metadata.clone(),
        }
    }
}

fn ring_points(ring: &LineString<Real>) -> Vec<[Real; 2]> {
    let mut points: Vec<[Real; 2]> = ring.coords().map(|c| [c.x, c.y]).collect();
    if points.len() > 1 && points.first() == points.last() {
        points.pop();
    }
    points
}

impl<S: Clone + Send + Sync + Debug> CSGOps for Sketch<S> {
    /// Returns a new empty Sketch
    fn new() -> Self {
        Sketch {
            geometry: MultiPolygon(Vec::new()),
            bounding_box: OnceLock::new(),
            metadata: None,
        }
    }

    /// Return a new Sketch representing union of the two Sketches.
    ///
    /// ```text
    /// let c = a.union(b);
    ///     +-------+            +-------+
    ///     |       |            |       |
    ///     |   a   |            |   c   |
    ///     |    +--+----+   =   |       +----+
    ///     +----+--+    |       +----+       |
    ///          |   b   |            |   c   |
    ///          |       |            |       |
    ///          +-------+            +-------+
    /// ```
    fn union(&self, other: &Sketch<S>) -> Sketch<S> {
        if self.is_empty() {
            let mut result = other.clone();
            result.metadata = self.metadata.clone().or_else(|| other.metadata.clone());
            return result;
        }
        if other.is_empty() {
            return self.clone();
        }
        self.with_geometry(self.geometry.union(&other.geometry))
    }

    /// Return a new Sketch representing difference of the two Sketches.
    ///
    /// ```text
    /// let c = a.difference(b);
    ///     +-------+            +-------+
    ///     |       |            |       |
    ///     |   a   |            |   c   |
    ///     |    +--+----+   =   |    +--+
    ///     +----+--+    |       +----+
    ///          |   b   |
    ///          |       |
    ///          +-------+
    /// ```
    fn difference(&self, other: &Sketch<S>) -> Sketch<S> {
        if self.is_empty() || other.is_empty() {
            return self.clone();
        }
        self.with_geometry(self.geometry.difference(&other.geometry))
    }

    /// Return a new Sketch representing intersection of the two Sketches.
    fn intersection(&self, other: &Sketch<S>) -> Sketch<S> {
        if self.is_empty() || other.is_empty() {
            return self.with_geometry(MultiPolygon(Vec::new()));
        }
        self.with_geometry(self.geometry.intersection(&other.geometry))
    }

    /// Return a new Sketch covering the area of exactly one of the two Sketches.
    fn xor(&self, other: &Sketch<S>) -> Sketch<S> {
        if self.is_empty() {
            return other.clone();
        }
        if other.is_empty() {
            return self.clone();
        }
        self.with_geometry(self.geometry.xor(&other.geometry))
    }

    /// Apply a 2D homogeneous transform. Rings are re-oriented afterwards so
    /// mirroring keeps exteriors counter-clockwise.
    fn transform(&self, mat: &Matrix3<Real>) -> Sketch<S> {
        let affine = AffineTransform::new(
            mat[(0, 0)],
            mat[(0, 1)],
            mat[(0, 2)],
            mat[(1, 0)],
            mat[(1, 1)],
            mat[(1, 2)],
        );
        let moved = self.geometry.affine_transform(&affine);
        let geometry = if mat[(0, 0)] * mat[(1, 1)] - mat[(0, 1)] * mat[(1, 0)] < 0.0 {
            moved.orient(Direction::Default)
        } else {
            moved
        };
        self.with_geometry(geometry)
    }

    fn bounding_box(&self) -> Option<Rect<Real>> {
        *self
            .bounding_box
            .get_or_init(|| self.geometry.bounding_rect())
    }

    fn invalidate_bounding_box(&mut self) {
        self.bounding_box = OnceLock::new();
    }
}
