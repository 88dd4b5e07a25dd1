// filepath: src/config.rs
//! Configuration handling for hypr-paint
//!
//! This file defines the configuration structure and provides
//! functionality to load and save configuration from/to files.
//! The PaintConfig struct contains all configurable parameters.

use crate::layout::PalettePos;
use log::warn;
use serde::{Deserialize, Serialize};
use std::{
    fs,
    io::ErrorKind,
    path::{Path, PathBuf},
};

/// Smallest canvas side; the border plus the stroke margins need some room
const MIN_CANVAS: u32 = 16;
/// Largest canvas side accepted from the config file
const MAX_CANVAS: u32 = 8192;

/// Configuration for the paint window
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PaintConfig {
    pub canvas_width: u32,
    pub canvas_height: u32,
    pub palette_position: PalettePos,
    pub title: String,
    /// TTF/OTF used for the Clear label; common system fonts are tried if unset
    pub font_path: Option<PathBuf>,
    pub label_size: f32,
}

impl Default for PaintConfig {
    fn default() -> Self {
        Self {
            canvas_width: 600,
            canvas_height: 400,
            palette_position: PalettePos::Left,
            title: "Advanced Paint".to_string(),
            font_path: None,
            label_size: 12.0,
        }
    }
}

impl PaintConfig {
    /// Get the path to the configuration file
    pub fn get_config_path() -> PathBuf {
        let config_dir = if let Some(config_dir) = dirs::config_dir() {
            config_dir.join("hypr-paint")
        } else {
            PathBuf::from(".config/hypr-paint")
        };

        config_dir.join("config.toml")
    }

    /// Load configuration from the default path, writing defaults if missing
    pub fn load_from_file() -> Result<Self, Box<dyn std::error::Error>> {
        Self::load_from(&Self::get_config_path())
    }

    pub fn load_from(config_path: &Path) -> Result<Self, Box<dyn std::error::Error>> {
        match fs::read_to_string(config_path) {
            Ok(content) => {
                let config: Self = toml::from_str(&content)?;
                Ok(config.validated())
            }
            Err(e) if e.kind() == ErrorKind::NotFound => {
                // If the file doesn't exist, create it with default values
                let default_config = Self::default();
                default_config.save_to(config_path)?;
                Ok(default_config)
            }
            Err(e) => Err(Box::new(e)),
        }
    }

    /// Save configuration to the default path
    pub fn save_to_file(&self) -> Result<(), Box<dyn std::error::Error>> {
        self.save_to(&Self::get_config_path())
    }

    pub fn save_to(&self, config_path: &Path) -> Result<(), Box<dyn std::error::Error>> {
        // Create the directory if it doesn't exist
        if let Some(parent) = config_path.parent() {
            if !Path::exists(parent) {
                fs::create_dir_all(parent)?;
            }
        }

        let content = toml::to_string_pretty(self)?;
        fs::write(config_path, content)?;

        Ok(())
    }

    /// Replace values the surface cannot work with by their defaults.
    fn validated(mut self) -> Self {
        let defaults = Self::default();
        if self.canvas_width < MIN_CANVAS {
            warn!("canvas_width {} too small, using {}", self.canvas_width, defaults.canvas_width);
            self.canvas_width = defaults.canvas_width;
        }
        if self.canvas_height < MIN_CANVAS {
            warn!("canvas_height {} too small, using {}", self.canvas_height, defaults.canvas_height);
            self.canvas_height = defaults.canvas_height;
        }
        if self.canvas_width > MAX_CANVAS {
            warn!("canvas_width {} too large, using {}", self.canvas_width, defaults.canvas_width);
            self.canvas_width = defaults.canvas_width;
        }
        if self.canvas_height > MAX_CANVAS {
            warn!("canvas_height {} too large, using {}", self.canvas_height, defaults.canvas_height);
            self.canvas_height = defaults.canvas_height;
        }
        if !self.label_size.is_finite() || self.label_size <= 0.0 {
            warn!("label_size {} invalid, using {}", self.label_size, defaults.label_size);
            self.label_size = defaults.label_size;
        }
        self
    }
}
