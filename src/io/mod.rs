//! Writers for finished outlines.

#[cfg(feature = "svg-io")]
mod svg;

#[cfg(feature = "dxf-io")]
mod dxf;

#[cfg(feature = "svg-io")]
pub use svg::SVG_MARGIN;

/// Generic I/O and format‑conversion errors.
///
/// Many I/O features are behind cargo feature‑flags.
/// When a feature is disabled the corresponding variant does not exist.
#[derive(Debug, thiserror::Error)]
pub enum IoError {
    #[error("std::io::Error: {0}")]
    StdIo(#[from] std::io::Error),

    /// There is nothing to write
    #[error("Input is empty: {0}")]
    EmptyGeometry(String),

    #[error("Output format is not supported: {0}")]
    Unsupported(String),

    #[cfg(feature = "dxf-io")]
    /// Error bubbled up from the `dxf` crate while writing.
    #[error("DXF write error: {0}")]
    Dxf(#[from] ::dxf::DxfError),
}

/// Output formats the CLI can select.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Dxf,
    Svg,
}

impl OutputFormat {
    /// Guess from a file extension, case-insensitively.
    pub fn from_extension(extension: &str) -> Option<Self> {
        match extension.to_ascii_lowercase().as_str() {
            "dxf" => Some(OutputFormat::Dxf),
            "svg" => Some(OutputFormat::Svg),
            _ => None,
        }
    }
}

impl<S: Clone + std::fmt::Debug + Send + Sync> crate::sketch::Sketch<S> {
    /// Serialize in `format`, failing when the matching feature is disabled.
    pub fn to_format(&self, format: OutputFormat) -> Result<Vec<u8>, IoError> {
        match format {
            #[cfg(feature = "dxf-io")]
            OutputFormat::Dxf => self.to_dxf(),
            #[cfg(feature = "svg-io")]
            OutputFormat::Svg => self.to_svg().map(String::into_bytes),
            #[allow(unreachable_patterns)]
            other => Err(IoError::Unsupported(format!(
                "{other:?} output needs the matching cargo feature"
            ))),
        }
    }
}
