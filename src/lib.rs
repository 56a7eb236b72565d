//! Involute **spur gear, ring gear and rack** outlines, generated the way a
//! gear shaper cuts them: a straight-flanked rack tooth is rolled along the
//! gear's pitch circle and every position it passes through is removed.
//!
//! The result is a planar polygon-with-holes ([`Sketch`]) ready to be written
//! as DXF or SVG, or to be extruded by another tool.
//!
//! ```no_run
//! use gearshaper::gear::{Gear, GearSpec};
//! use gearshaper::gearset::{GearPair, ShowOption};
//!
//! let spec = |teeth| GearSpec::builder().tooth_count(teeth).circular_pitch(8.0).build();
//! let pair = GearPair::new(Gear::new(spec(30)?)?, Gear::new(spec(8)?)?);
//! let layout = pair.layout(ShowOption::Both)?;
//! println!("{}", layout.diagnostics);
//! # Ok::<(), gearshaper::errors::GearError>(())
//! ```
//!
//! # Features
//! #### Default
//! - [**dxf-io**](https://en.wikipedia.org/wiki/AutoCAD_DXF): `.dxf` export
//! - **svg-io**: `.svg` export

#![forbid(unsafe_code)]
#![deny(unused)]
#![warn(clippy::missing_const_for_fn, clippy::approx_constant, clippy::all)]

pub mod errors;
pub mod float_types;
pub mod gear;
pub mod gearset;
pub mod io;
pub mod sketch;
pub mod traits;

pub use errors::GearError;
pub use gear::{Gear, GearProfile, GearSpec, GearType, MeshPairContext};
pub use gearset::{GearPair, PairedLayout, ShowOption};
pub use sketch::Sketch;
pub use traits::CSGOps;
