use std::error::Error;
use std::fmt;
use std::time::Duration;

use crate::core::data::colour::Colour;
use crate::core::data::vec2::Vec2;
use crate::core::snowflake::render_mode::RenderMode;

const DEFAULT_DISPLAY_SIZE: u32 = 800;
const DEFAULT_SUPERSAMPLE_FACTOR: u32 = 4;
const DEFAULT_LEVELS: usize = 12;
const DEFAULT_RADIUS: f64 = 300.0;
const DEFAULT_BACKGROUND: Colour = Colour::grey(88);

#[derive(Debug, Clone, PartialEq)]
pub enum SnowflakeConfigError {
    ZeroLevels,
    ZeroDisplaySize,
    ZeroSupersampleFactor,
    NonFiniteCentre { centre: Vec2 },
    InvalidRadius { radius: f64 },
}

impl fmt::Display for SnowflakeConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ZeroLevels => write!(f, "at least one level must be shown"),
            Self::ZeroDisplaySize => write!(f, "display size must be greater than zero"),
            Self::ZeroSupersampleFactor => {
                write!(f, "supersample factor must be greater than zero")
            }
            Self::NonFiniteCentre { centre } => {
                write!(f, "centre must be finite, got ({}, {})", centre.x, centre.y)
            }
            Self::InvalidRadius { radius } => {
                write!(f, "radius must be positive and finite, got {}", radius)
            }
        }
    }
}

impl Error for SnowflakeConfigError {}

#[derive(Debug, Clone, PartialEq)]
pub struct SnowflakeConfig {
    pub centre: Vec2,
    pub radius: f64,
    /// Number of levels shown, starting at the level 0 triangle.
    pub levels: usize,
    pub display_size: u32,
    pub supersample_factor: u32,
    pub render_mode: RenderMode,
    pub background: Colour,
    pub line_colour: Colour,
    pub frame_delay: Duration,
    pub final_hold: Duration,
}

impl Default for SnowflakeConfig {
    fn default() -> Self {
        let half = f64::from(DEFAULT_DISPLAY_SIZE) / 2.0;

        Self {
            centre: Vec2::new(half, half),
            radius: DEFAULT_RADIUS,
            levels: DEFAULT_LEVELS,
            display_size: DEFAULT_DISPLAY_SIZE,
            supersample_factor: DEFAULT_SUPERSAMPLE_FACTOR,
            render_mode: RenderMode::default(),
            background: DEFAULT_BACKGROUND,
            line_colour: Colour::WHITE,
            frame_delay: Duration::from_millis(1000),
            final_hold: Duration::from_millis(3000),
        }
    }
}

impl SnowflakeConfig {
    #[must_use]
    pub fn with_render_mode(mut self, render_mode: RenderMode) -> Self {
        self.render_mode = render_mode;
        self
    }

    pub fn validate(&self) -> Result<(), SnowflakeConfigError> {
        if self.levels == 0 {
            return Err(SnowflakeConfigError::ZeroLevels);
        }

        if self.display_size == 0 {
            return Err(SnowflakeConfigError::ZeroDisplaySize);
        }

        if self.supersample_factor == 0 {
            return Err(SnowflakeConfigError::ZeroSupersampleFactor);
        }

        if !self.centre.is_finite() {
            return Err(SnowflakeConfigError::NonFiniteCentre {
                centre: self.centre,
            });
        }

        if !self.radius.is_finite() || self.radius <= 0.0 {
            return Err(SnowflakeConfigError::InvalidRadius {
                radius: self.radius,
            });
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_matches_classic_snowflake() {
        let config = SnowflakeConfig::default();

        assert_eq!(config.centre, Vec2::new(400.0, 400.0));
        assert_eq!(config.radius, 300.0);
        assert_eq!(config.levels, 12);
        assert_eq!(config.display_size, 800);
        assert_eq!(config.supersample_factor, 4);
        assert_eq!(config.render_mode, RenderMode::Plain);
        assert_eq!(config.frame_delay, Duration::from_secs(1));
        assert_eq!(config.final_hold, Duration::from_secs(3));
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_with_render_mode() {
        let config = SnowflakeConfig::default().with_render_mode(RenderMode::Antialiased);

        assert_eq!(config.render_mode, RenderMode::Antialiased);
    }

    #[test]
    fn test_validate_rejects_zero_levels() {
        let config = SnowflakeConfig {
            levels: 0,
            ..SnowflakeConfig::default()
        };

        assert_eq!(config.validate(), Err(SnowflakeConfigError::ZeroLevels));
    }

    #[test]
    fn test_validate_rejects_zero_sizes() {
        let no_display = SnowflakeConfig {
            display_size: 0,
            ..SnowflakeConfig::default()
        };
        let no_supersample = SnowflakeConfig {
            supersample_factor: 0,
            ..SnowflakeConfig::default()
        };

        assert_eq!(no_display.validate(), Err(SnowflakeConfigError::ZeroDisplaySize));
        assert_eq!(
            no_supersample.validate(),
            Err(SnowflakeConfigError::ZeroSupersampleFactor)
        );
    }

    #[test]
    fn test_validate_rejects_bad_geometry() {
        let negative_radius = SnowflakeConfig {
            radius: -1.0,
            ..SnowflakeConfig::default()
        };
        let infinite_centre = SnowflakeConfig {
            centre: Vec2::new(f64::INFINITY, 0.0),
            ..SnowflakeConfig::default()
        };

        assert_eq!(
            negative_radius.validate(),
            Err(SnowflakeConfigError::InvalidRadius { radius: -1.0 })
        );
        assert!(matches!(
            infinite_centre.validate(),
            Err(SnowflakeConfigError::NonFiniteCentre { .. })
        ));
    }
}
