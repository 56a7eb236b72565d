use crate::float_types::Real;
use geo::Rect;
use nalgebra::{Matrix3, Rotation2, Translation2, Vector2};

/// Boolean operations + transformations
pub trait CSGOps: Sized + Clone {
    fn new() -> Self;
    fn union(&self, other: &Self) -> Self;
    fn difference(&self, other: &Self) -> Self;
    fn intersection(&self, other: &Self) -> Self;
    fn xor(&self, other: &Self) -> Self;
    /// Apply a 2D homogeneous transform (3x3 matrix).
    fn transform(&self, matrix: &Matrix3<Real>) -> Self;
    /// Axis aligned bounds, `None` for an empty shape.
    fn bounding_box(&self) -> Option<Rect<Real>>;
    fn invalidate_bounding_box(&mut self);

    /// Returns a new Self translated by vector.
    fn translate_vector(&self, vector: Vector2<Real>) -> Self {
        self.transform(&Translation2::from(vector).to_homogeneous())
    }

    /// Returns a new Self translated by x and y.
    fn translate(&self, x: Real, y: Real) -> Self {
        self.translate_vector(Vector2::new(x, y))
    }

    /// Rotates counter-clockwise about the origin by `degrees`.
    fn rotate(&self, degrees: Real) -> Self {
        self.transform(&Rotation2::new(degrees.to_radians()).to_homogeneous())
    }

    /// Mirror across the Y axis (x → -x).
    fn mirror_x(&self) -> Self {
        let mut reflect = Matrix3::identity();
        reflect[(0, 0)] = -1.0;
        self.transform(&reflect)
    }

    /// Distribute this shape `count` times along a straight line (vector),
    /// each copy spaced by `spacing`.
    /// E.g. if `dir=(0.0,1.0)` and `spacing=2.0`, you get copies at
    /// y=0, y=2, y=4, ... etc.
    fn distribute_linear(&self, count: usize, dir: Vector2<Real>, spacing: Real) -> Self {
        if count < 1 {
            return self.clone();
        }
        let step = dir.normalize() * spacing;

        // create a container to hold our unioned copies
        let mut all = Self::new();

        for i in 0..count {
            let offset = step * (i as Real);
            let trans = Translation2::from(offset).to_homogeneous();

            // Transform a copy of self and union with other copies
            all = all.union(&self.transform(&trans));
        }
        all.invalidate_bounding_box();

        all
    }
}
