//! Lectern configuration system
//!
//! This crate provides centralized configuration for lectern text boxes,
//! loading defaults from `lectern.toml` with environment variable overrides.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Default configuration file looked up by [`LecternConfig::load_or_default`].
pub const DEFAULT_CONFIG_FILE: &str = "lectern.toml";

/// Errors that can occur while loading a configuration file.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to read config file {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse config file {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
}

/// Main configuration structure for lectern
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
#[serde(default)]
pub struct LecternConfig {
    /// Default text style settings
    pub text: TextConfig,
    /// Default text box layout settings
    pub layout: LayoutConfig,
}

/// Writing direction as spelled in configuration files.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, Default, PartialEq, Eq)]
#[serde(rename_all = "kebab-case")]
pub enum DirectionSetting {
    #[default]
    HorizontalLtr,
    HorizontalRtl,
    VerticalLtrStack,
    VerticalRtlStack,
}

impl DirectionSetting {
    /// Parse the kebab-case spelling used in TOML and environment variables.
    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            "horizontal-ltr" | "ltr" => Some(Self::HorizontalLtr),
            "horizontal-rtl" | "rtl" => Some(Self::HorizontalRtl),
            "vertical-ltr-stack" | "vertical-lr" => Some(Self::VerticalLtrStack),
            "vertical-rtl-stack" | "vertical-rl" => Some(Self::VerticalRtlStack),
            _ => None,
        }
    }
}

/// Alignment as spelled in configuration files.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, Default, PartialEq, Eq)]
#[serde(rename_all = "kebab-case")]
pub enum AlignSetting {
    #[default]
    Auto,
    Start,
    Center,
    End,
}

impl AlignSetting {
    /// Parse an alignment keyword. Physical synonyms (`left`, `top`,
    /// `middle`, `right`, `bottom`) are accepted too.
    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            "auto" => Some(Self::Auto),
            "start" | "left" | "top" => Some(Self::Start),
            "center" | "middle" => Some(Self::Center),
            "end" | "right" | "bottom" => Some(Self::End),
            _ => None,
        }
    }
}

/// Default text style configuration
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct TextConfig {
    /// Font family name to look up in the font registry (fuzzy matched)
    pub font: Option<String>,
    /// Path to a font file (.ttf/.otf); takes precedence over `font`
    pub font_path: Option<PathBuf>,
    /// Font size in pixels
    pub size: f32,
    /// Writing direction of the default face
    pub direction: DirectionSetting,
}

/// Default text box layout configuration
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct LayoutConfig {
    /// Relative extra spacing per line (0.0 is single-spaced, 1.0 double)
    pub line_spacing: f32,
    /// Alignment along the axis governed by `align`
    pub align: AlignSetting,
    /// Alignment along the axis governed by `vert_align`
    pub vert_align: AlignSetting,
    /// Padding between box edge and text, `[x, y]`. Carried through to
    /// callers; layout does not apply it.
    pub padding: [f32; 2],
}

impl Default for TextConfig {
    fn default() -> Self {
        Self {
            font: None,
            font_path: None,
            size: 24.0,
            direction: DirectionSetting::default(),
        }
    }
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            line_spacing: 0.0,
            align: AlignSetting::Auto,
            vert_align: AlignSetting::Auto,
            padding: [0.0, 0.0],
        }
    }
}

impl LecternConfig {
    /// Load configuration from a TOML file
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;

        toml::from_str(&content).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Load configuration from the default location (lectern.toml in the current directory)
    /// or return default configuration if the file doesn't exist or fails to parse
    pub fn load_or_default() -> Self {
        Self::load_from_file(DEFAULT_CONFIG_FILE).unwrap_or_default()
    }

    /// Merge configuration with environment variables
    ///
    /// Environment variables take precedence over configuration file values.
    /// Values that fail to parse are ignored.
    pub fn merge_with_env(&mut self) {
        // Text settings
        if let Ok(font) = std::env::var("LECTERN_FONT") {
            self.text.font = Some(font);
        }
        if let Ok(path) = std::env::var("LECTERN_FONT_PATH") {
            self.text.font_path = Some(PathBuf::from(path));
        }
        if let Ok(val) = std::env::var("LECTERN_TEXT_SIZE") {
            if let Ok(size) = val.parse::<f32>() {
                self.text.size = size;
            }
        }
        if let Ok(val) = std::env::var("LECTERN_DIRECTION") {
            if let Some(direction) = DirectionSetting::parse(&val) {
                self.text.direction = direction;
            }
        }

        // Layout settings
        if let Ok(val) = std::env::var("LECTERN_LINE_SPACING") {
            if let Ok(spacing) = val.parse::<f32>() {
                self.layout.line_spacing = spacing;
            }
        }
        if let Ok(val) = std::env::var("LECTERN_ALIGN") {
            if let Some(align) = AlignSetting::parse(&val) {
                self.layout.align = align;
            }
        }
        if let Ok(val) = std::env::var("LECTERN_VERT_ALIGN") {
            if let Some(align) = AlignSetting::parse(&val) {
                self.layout.vert_align = align;
            }
        }
    }

    /// Load configuration with environment variable overrides
    ///
    /// 1. Load from lectern.toml (or use defaults if not found)
    /// 2. Override with environment variables if present
    pub fn load() -> Self {
        let mut config = Self::load_or_default();
        config.merge_with_env();
        config
    }
}
