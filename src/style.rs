//! Draw metrics of the slider, loadable from TOML.
//!
//! Metrics are stored unscaled; every accessor applies [`SliderStyle::scale`].

use iced::Vector;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum StyleError {
    #[error("failed to read style file {path:?}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse style: {0}")]
    Parse(#[from] toml::de::Error),
    #[error("invalid style field `{field}`: {reason}")]
    Invalid { field: &'static str, reason: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SliderStyle {
    pub scale: f32,
    /// Margin between the groove and the container edge on the cross axis.
    pub dummy: [f32; 2],
    pub thumb_dummy: [f32; 2],
    pub groove: [f32; 2],
    /// Thickness of the hit-testable band around the groove centerline.
    pub draggable_region: [f32; 2],
    pub thumb_radius: f32,
    pub thumb_border: f32,
    pub rounding: f32,
    /// Room reserved for labels at both ends of the primary axis.
    pub text_dummy: [f32; 2],
    pub text_padding: [f32; 2],
    pub label_text_size: f32,
    /// Advance of one text column, used to measure labels.
    pub glyph_width: f32,
    /// Pointer travel after a press before the press counts as a drag.
    pub drag_threshold: f32,
}

impl Default for SliderStyle {
    fn default() -> Self {
        Self {
            scale: 1.0,
            dummy: [24.0, 16.0],
            thumb_dummy: [17.0, 17.0],
            groove: [4.0, 4.0],
            draggable_region: [20.0, 19.0],
            thumb_radius: 10.0,
            thumb_border: 2.0,
            rounding: 2.0,
            text_dummy: [50.0, 34.0],
            text_padding: [5.0, 2.0],
            label_text_size: 13.0,
            glyph_width: 7.0,
            drag_threshold: 6.0,
        }
    }
}

fn vector(pair: [f32; 2], scale: f32) -> Vector {
    Vector::new(pair[0] * scale, pair[1] * scale)
}

impl SliderStyle {
    pub fn dummy_sz(&self) -> Vector {
        vector(self.dummy, self.scale)
    }

    pub fn thumb_dummy_sz(&self) -> Vector {
        vector(self.thumb_dummy, self.scale)
    }

    pub fn groove_sz(&self) -> Vector {
        vector(self.groove, self.scale)
    }

    pub fn draggable_region_sz(&self) -> Vector {
        vector(self.draggable_region, self.scale)
    }

    pub fn text_dummy_sz(&self) -> Vector {
        vector(self.text_dummy, self.scale)
    }

    pub fn text_padding(&self) -> Vector {
        vector(self.text_padding, self.scale)
    }

    pub fn thumb_radius(&self) -> f32 {
        self.thumb_radius * self.scale
    }

    pub fn thumb_border(&self) -> f32 {
        self.thumb_border * self.scale
    }

    pub fn rounding(&self) -> f32 {
        self.rounding * self.scale
    }

    pub fn label_text_size(&self) -> f32 {
        self.label_text_size * self.scale
    }

    pub fn glyph_width(&self) -> f32 {
        self.glyph_width * self.scale
    }

    pub fn drag_threshold(&self) -> f32 {
        self.drag_threshold * self.scale
    }

    pub fn from_toml_str(source: &str) -> Result<Self, StyleError> {
        let style: SliderStyle = toml::from_str(source)?;
        style.validate()?;
        Ok(style)
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self, StyleError> {
        let path = path.as_ref();
        let source = std::fs::read_to_string(path).map_err(|source| StyleError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let style = Self::from_toml_str(&source)?;
        log::debug!("loaded slider style from {path:?}");
        Ok(style)
    }

    pub fn validate(&self) -> Result<(), StyleError> {
        if !self.scale.is_finite() || self.scale <= 0.0 {
            return Err(StyleError::Invalid {
                field: "scale",
                reason: format!("must be positive, got {}", self.scale),
            });
        }

        let scalars = [
            ("thumb_radius", self.thumb_radius),
            ("thumb_border", self.thumb_border),
            ("rounding", self.rounding),
            ("label_text_size", self.label_text_size),
            ("glyph_width", self.glyph_width),
            ("drag_threshold", self.drag_threshold),
        ];
        let pairs = [
            ("dummy", self.dummy),
            ("thumb_dummy", self.thumb_dummy),
            ("groove", self.groove),
            ("draggable_region", self.draggable_region),
            ("text_dummy", self.text_dummy),
            ("text_padding", self.text_padding),
        ];

        let values = scalars
            .into_iter()
            .chain(pairs.into_iter().flat_map(|(field, [x, y])| [(field, x), (field, y)]));
        for (field, value) in values {
            if !value.is_finite() || value < 0.0 {
                return Err(StyleError::Invalid {
                    field,
                    reason: format!("must be a non-negative number, got {value}"),
                });
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn partial_toml_keeps_defaults() {
        let style = SliderStyle::from_toml_str("thumb_radius = 12.0\nscale = 2.0\n").unwrap();
        assert_eq!(style.thumb_radius(), 24.0);
        assert_eq!(style.groove, SliderStyle::default().groove);
        assert_eq!(style.groove_sz(), Vector::new(8.0, 8.0));
    }

    #[test]
    fn rejects_negative_metric() {
        let err = SliderStyle::from_toml_str("groove = [4.0, -1.0]").unwrap_err();
        assert!(matches!(err, StyleError::Invalid { field: "groove", .. }));
    }

    #[test]
    fn rejects_zero_scale() {
        let err = SliderStyle::from_toml_str("scale = 0.0").unwrap_err();
        assert!(matches!(err, StyleError::Invalid { field: "scale", .. }));
    }

    #[test]
    fn reports_parse_errors() {
        let err = SliderStyle::from_toml_str("thumb_radius = \"big\"").unwrap_err();
        assert!(matches!(err, StyleError::Parse(_)));
    }

    #[test]
    fn missing_file_is_io_error() {
        let err = SliderStyle::load("/nonexistent/double_slider_style.toml").unwrap_err();
        assert!(matches!(err, StyleError::Io { .. }));
    }
}
