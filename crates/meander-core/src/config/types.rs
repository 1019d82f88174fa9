//! Configuration type definitions
//!
//! The two sections mirror the two commands: `pattern` for the static grid and
//! `flow` for the scrolling marker.

use crate::errors::{MeanderError, Result};
use crate::pattern::ORDER_CEILING;
use serde::{Deserialize, Serialize};
use std::time::Duration;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MeanderConfig {
    #[serde(default)]
    pub pattern: PatternConfig,
    #[serde(default)]
    pub flow: FlowConfig,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PatternConfig {
    #[serde(default = "default_max_order")]
    pub max_order: u32,
    #[serde(default)]
    pub glyphs: GlyphSet,
}

impl Default for PatternConfig {
    fn default() -> Self {
        Self {
            max_order: default_max_order(),
            glyphs: GlyphSet::default(),
        }
    }
}

impl PatternConfig {
    pub fn with_max_order(mut self, max_order: u32) -> Self {
        self.max_order = max_order;
        self
    }

    pub fn with_glyphs(mut self, glyphs: GlyphSet) -> Self {
        self.glyphs = glyphs;
        self
    }
}

/// Characters used to print a grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct GlyphSet {
    #[serde(default = "default_on_glyph")]
    pub on: char,
    #[serde(default = "default_off_glyph")]
    pub off: char,
    #[serde(default = "default_border_glyph")]
    pub border: char,
}

impl Default for GlyphSet {
    fn default() -> Self {
        Self {
            on: default_on_glyph(),
            off: default_off_glyph(),
            border: default_border_glyph(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FlowConfig {
    /// Lines per minute; 60 gives one line per second.
    #[serde(default = "default_frequency")]
    pub frequency: i64,
    #[serde(default = "default_marker")]
    pub marker: char,
}

impl Default for FlowConfig {
    fn default() -> Self {
        Self {
            frequency: default_frequency(),
            marker: default_marker(),
        }
    }
}

impl FlowConfig {
    pub fn with_frequency(mut self, frequency: i64) -> Self {
        self.frequency = frequency;
        self
    }

    pub fn with_marker(mut self, marker: char) -> Self {
        self.marker = marker;
        self
    }

    /// Pause between two printed lines.
    pub fn interval(&self) -> Result<Duration> {
        frequency_to_interval(self.frequency)
    }
}

/// `60 / frequency` seconds. Zero and negative rates have no meaningful pause.
pub fn frequency_to_interval(frequency: i64) -> Result<Duration> {
    if frequency <= 0 {
        return Err(MeanderError::InvalidFrequency(frequency));
    }
    Ok(Duration::from_secs_f64(60.0 / frequency as f64))
}

impl MeanderConfig {
    pub fn validate(&self) -> Result<()> {
        if self.pattern.max_order > ORDER_CEILING {
            return Err(MeanderError::config_error(format!(
                "pattern.max_order {} exceeds the ceiling of {}",
                self.pattern.max_order, ORDER_CEILING
            )));
        }

        let glyphs = &self.pattern.glyphs;
        if glyphs.on == glyphs.off {
            return Err(MeanderError::config_error(format!(
                "pattern.glyphs.on and pattern.glyphs.off are both '{}'",
                glyphs.on
            )));
        }

        if self.flow.frequency <= 0 {
            return Err(MeanderError::config_error(format!(
                "flow.frequency must be greater than 0, got {}",
                self.flow.frequency
            )));
        }

        Ok(())
    }
}

fn default_max_order() -> u32 {
    12
}

fn default_on_glyph() -> char {
    '*'
}

fn default_off_glyph() -> char {
    ' '
}

fn default_border_glyph() -> char {
    '-'
}

fn default_frequency() -> i64 {
    60
}

fn default_marker() -> char {
    '*'
}
