use serde::Serialize;
use std::fmt;
use utoipa::ToSchema;

/// Neutral gray shown while an image is loading or when sampling fails.
pub const FALLBACK_BACKGROUND: &str = "rgb(243, 244, 246)";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RgbColor {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl RgbColor {
    pub fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Reads a straight-alpha pixel the way a cleared raster surface does:
    /// fully transparent reads back as black.
    pub fn from_rgba([r, g, b, a]: [u8; 4]) -> Self {
        if a == 0 {
            Self::new(0, 0, 0)
        } else {
            Self::new(r, g, b)
        }
    }
}

impl fmt::Display for RgbColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "rgb({}, {}, {})", self.r, self.g, self.b)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ImagePlaceholder {
    /// Normalized image source.
    #[schema(example = "/projects/cover.png")]
    pub src: String,

    /// Color of the top-left pixel, absent when it could not be sampled.
    #[schema(example = "rgb(255, 0, 0)")]
    pub background: Option<String>,

    #[schema(example = "rgb(243, 244, 246)")]
    pub fallback_background: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn displays_as_css_rgb() {
        assert_eq!(RgbColor::new(255, 0, 0).to_string(), "rgb(255, 0, 0)");
    }

    #[test]
    fn transparent_pixel_reads_black() {
        assert_eq!(RgbColor::from_rgba([10, 20, 30, 0]), RgbColor::new(0, 0, 0));
        assert_eq!(RgbColor::from_rgba([10, 20, 30, 128]), RgbColor::new(10, 20, 30));
    }
}
