//! Content based image type detection
//!
//! The type comes from the output of the `file` command rather than from the
//! file extension, so a mislabelled `logo.png` that is really a JPEG is
//! optimized with the JPEG tool.

use crate::command::ToolSet;
use crate::error::Result;
use std::fmt;
use std::path::Path;

/// Image types the optimizer knows how to handle
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ImageType {
    Jpeg,
    Png,
    Gif,
    Svg,
    /// Anything else, including non-image files
    Unsupported,
}

impl ImageType {
    /// Interpret the output of `file PATH`.
    ///
    /// The second whitespace separated token is the type word, e.g.
    /// `logo.png: PNG image data, 64 x 64` yields `Png`.
    pub fn from_file_output(output: &str) -> Self {
        match output.split_whitespace().nth(1) {
            Some("JPEG") => ImageType::Jpeg,
            Some("PNG") => ImageType::Png,
            Some("GIF") => ImageType::Gif,
            Some("SVG") => ImageType::Svg,
            _ => ImageType::Unsupported,
        }
    }

    pub fn is_supported(&self) -> bool {
        !matches!(self, ImageType::Unsupported)
    }
}

impl fmt::Display for ImageType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ImageType::Jpeg => "JPEG",
            ImageType::Png => "PNG",
            ImageType::Gif => "GIF",
            ImageType::Svg => "SVG",
            ImageType::Unsupported => "unsupported",
        };
        write!(f, "{}", name)
    }
}

/// Classify a file by running the type detection command on it
pub fn classify(tools: &ToolSet, path: &Path) -> Result<ImageType> {
    let output = tools.file.run([path])?;
    Ok(ImageType::from_file_output(&output))
}
