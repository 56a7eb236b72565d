use crate::float_types::Real;
use crate::io::IoError;
use crate::sketch::Sketch;
use crate::traits::CSGOps;
use std::fmt::Debug;

use svg::Document;
use svg::node::element::Path;
use svg::node::element::path::Data;

/// Empty border around the drawing, in drawing units.
pub const SVG_MARGIN: Real = 1.0;

impl<S: Clone + Debug + Send + Sync> Sketch<S> {
    /// Export as one SVG `<path>` with even-odd filling, so holes stay open.
    ///
    /// SVG's y axis points down; coordinates are flipped so the drawing reads
    /// the same way as the geometry.
    pub fn to_svg(&self) -> Result<String, IoError> {
        let bounds = self
            .bounding_box()
            .ok_or_else(|| IoError::EmptyGeometry("no polygons to write as SVG".into()))?;

        let mut data = Data::new();
        for ring in self.outline_paths() {
            let mut points = ring.iter();
            let Some(first) = points.next() else {
                continue;
            };
            data = data.move_to((first[0], -first[1]));
            for p in points {
                data = data.line_to((p[0], -p[1]));
            }
            data = data.close();
        }

        let path = Path::new()
            .set("fill", "black")
            .set("fill-rule", "evenodd")
            .set("stroke", "none")
            .set("d", data);

        let (min, max) = (bounds.min(), bounds.max());
        let document = Document::new()
            .set(
                "viewBox",
                (
                    min.x - SVG_MARGIN,
                    -max.y - SVG_MARGIN,
                    max.x - min.x + 2.0 * SVG_MARGIN,
                    max.y - min.y + 2.0 * SVG_MARGIN,
                ),
            )
            .add(path);

        Ok(document.to_string())
    }
}
