use crate::float_types::Real;
use crate::io::IoError;
use crate::sketch::Sketch;
use std::fmt::Debug;

use dxf::Drawing;
use dxf::LwPolylineVertex;
use dxf::entities::*;
use dxf::enums::AcadVersion;

fn ring_to_lwpolyline(points: &[[Real; 2]]) -> LwPolyline {
    let mut polyline = LwPolyline::default();
    polyline.set_is_closed(true);
    for p in points {
        #[allow(clippy::unnecessary_cast)]
        polyline.vertices.push(LwPolylineVertex {
            x: p[0] as f64,
            y: p[1] as f64,
            ..Default::default()
        });
    }
    polyline
}

impl<S: Clone + Debug + Send + Sync> Sketch<S> {
    /// Export every boundary loop (exteriors and holes) as a closed
    /// `LWPOLYLINE` in an R2000 drawing.
    pub fn to_dxf(&self) -> Result<Vec<u8>, IoError> {
        if self.is_empty() {
            return Err(IoError::EmptyGeometry("no polygons to write as DXF".into()));
        }
        let mut drawing = Drawing::new();
        drawing.header.version = AcadVersion::R2000;

        for ring in self.outline_paths() {
            let entity = Entity::new(EntityType::LwPolyline(ring_to_lwpolyline(&ring)));
            drawing.add_entity(entity);
        }

        let mut buffer = Vec::new();
        drawing.save(&mut buffer)?;
        Ok(buffer)
    }
}
