mod support;

use gearshaper::{
    gear::QualityPreset,
    io::{IoError, OutputFormat},
    sketch::Sketch,
    traits::CSGOps,
};
use std::io::Write;

#[cfg(feature = "svg-io")]
fn square() -> Sketch<()> {
    Sketch::rectangle_corners([0.0, 0.0], [2.0, 2.0], None)
}

#[test]
fn output_format_from_extension() {
    assert_eq!(OutputFormat::from_extension("dxf"), Some(OutputFormat::Dxf));
    assert_eq!(OutputFormat::from_extension("SVG"), Some(OutputFormat::Svg));
    assert_eq!(OutputFormat::from_extension("stl"), None);
}

#[cfg(feature = "dxf-io")]
#[test]
fn dxf_writes_one_polyline_per_loop() {
    let gear = support::default_wheel(12, 4.0).profile(None).unwrap();
    let bytes = gear.shape.to_dxf().unwrap();
    let text = String::from_utf8(bytes).unwrap();
    assert!(text.contains("AC1015"));
    // Outline and center hole.
    assert!(text.matches("LWPOLYLINE").count() >= 2);

    assert!(matches!(
        Sketch::<()>::new().to_dxf(),
        Err(IoError::EmptyGeometry(_))
    ));
}

#[cfg(feature = "svg-io")]
#[test]
fn svg_uses_even_odd_fill_and_flips_y() {
    let text = square().to_svg().unwrap();
    assert!(text.contains("<svg"));
    assert!(text.contains("<path"));
    assert!(text.contains("evenodd"));
    assert!(text.contains("viewBox=\"-1 -3 4 4\""));

    assert!(matches!(
        Sketch::<()>::new().to_svg(),
        Err(IoError::EmptyGeometry(_))
    ));
}

#[cfg(all(feature = "dxf-io", feature = "svg-io"))]
#[test]
fn to_format_dispatches_and_writes_files() {
    let profile = support::plain_gear(10, QualityPreset::Draft)
        .profile(None)
        .unwrap();
    let svg = profile.shape.to_format(OutputFormat::Svg).unwrap();
    assert!(String::from_utf8(svg).unwrap().contains("<svg"));
    let dxf = profile.shape.to_format(OutputFormat::Dxf).unwrap();
    assert!(!dxf.is_empty());

    let mut file = tempfile::NamedTempFile::new().unwrap();
    file.write_all(&dxf).unwrap();
    let written = std::fs::read(file.path()).unwrap();
    assert_eq!(written, dxf);
}
