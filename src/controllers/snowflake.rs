use std::error::Error;
use std::fmt;
use std::sync::Arc;
use std::time::Instant;

use log::{debug, info};

use crate::controllers::ports::display_surface::DisplaySurfacePort;
use crate::core::actions::generate_snowflake::errors::GenerateSnowflakeError;
use crate::core::actions::rasterize::errors::RasterizeError;
use crate::core::actions::rasterize::polyline::polyline_points;
use crate::core::actions::rasterize::supersample::SupersampleRasterizer;
use crate::core::data::boundary::Boundary;
use crate::core::snowflake::levels::SnowflakeLevels;
use crate::core::snowflake::render_mode::RenderMode;
use crate::core::snowflake::snowflake_config::{SnowflakeConfig, SnowflakeConfigError};

#[derive(Debug)]
pub enum SnowflakeControllerError<E> {
    Config(SnowflakeConfigError),
    Generate(GenerateSnowflakeError),
    Rasterize(RasterizeError),
    Surface(E),
}

impl<E: fmt::Display> fmt::Display for SnowflakeControllerError<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Config(err) => write!(f, "invalid configuration: {}", err),
            Self::Generate(err) => write!(f, "generation error: {}", err),
            Self::Rasterize(err) => write!(f, "rasterizer error: {}", err),
            Self::Surface(err) => write!(f, "display surface error: {}", err),
        }
    }
}

impl<E: Error + 'static> Error for SnowflakeControllerError<E> {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Config(err) => Some(err),
            Self::Generate(err) => Some(err),
            Self::Rasterize(err) => Some(err),
            Self::Surface(err) => Some(err),
        }
    }
}

impl<E> From<GenerateSnowflakeError> for SnowflakeControllerError<E> {
    fn from(err: GenerateSnowflakeError) -> Self {
        Self::Generate(err)
    }
}

/// Generates each level in turn and presents it on a display surface.
pub struct SnowflakeController<S: DisplaySurfacePort> {
    config: SnowflakeConfig,
    surface: S,
    levels: SnowflakeLevels,
    rasterizer: Option<SupersampleRasterizer>,
}

impl<S: DisplaySurfacePort> SnowflakeController<S> {
    pub fn new(config: SnowflakeConfig, surface: S) -> Result<Self, SnowflakeControllerError<S::Failure>> {
        config.validate().map_err(SnowflakeControllerError::Config)?;

        let rasterizer = match config.render_mode {
            RenderMode::Plain => None,
            RenderMode::Antialiased => Some(
                SupersampleRasterizer::new(config.display_size, config.supersample_factor)
                    .map_err(SnowflakeControllerError::Rasterize)?,
            ),
        };

        let levels = SnowflakeLevels::new(config.centre, config.radius, config.levels);

        Ok(Self {
            config,
            surface,
            levels,
            rasterizer,
        })
    }

    #[must_use]
    pub fn surface(&self) -> &S {
        &self.surface
    }

    pub fn surface_mut(&mut self) -> &mut S {
        &mut self.surface
    }

    pub fn into_surface(self) -> S {
        self.surface
    }

    /// Generates and presents the next level. Returns the number of vertices
    /// presented, or `None` once every level has been shown.
    pub fn step(&mut self) -> Result<Option<usize>, SnowflakeControllerError<S::Failure>> {
        let level = self.levels.next_level();

        let start = Instant::now();
        let boundary: Arc<Boundary> = match self.levels.next() {
            Some(next) => next?,
            None => return Ok(None),
        };
        debug!("Generated level {} in {:?}", level, start.elapsed());

        info!("Current snowflake has {} vertices.", boundary.len());

        let start = Instant::now();
        self.present_boundary(&boundary)?;
        debug!("Presented level {} in {:?}", level, start.elapsed());

        Ok(Some(boundary.len()))
    }

    /// Shows every level with the configured delay between frames, then holds
    /// the last frame. Returns how many levels were shown.
    pub fn run(&mut self) -> Result<usize, SnowflakeControllerError<S::Failure>> {
        info!(
            "Rendering {} levels in {} mode",
            self.config.levels,
            self.config.render_mode.display_name()
        );

        let mut shown = 0;

        while self.step()?.is_some() {
            shown += 1;
            self.surface.pause(self.config.frame_delay);
        }

        self.surface.pause(self.config.final_hold);

        Ok(shown)
    }

    fn present_boundary(&mut self, boundary: &Boundary) -> Result<(), SnowflakeControllerError<S::Failure>> {
        self.surface
            .clear(self.config.background)
            .map_err(SnowflakeControllerError::Surface)?;

        match self.rasterizer.as_mut() {
            None => {
                let points = polyline_points(boundary);
                self.surface
                    .draw_polyline(&points, self.config.line_colour)
                    .map_err(SnowflakeControllerError::Surface)?;
            }
            Some(rasterizer) => {
                let buckets = rasterizer.render(boundary);

                for (index, points) in buckets.iter() {
                    let shade = buckets.shade(index, self.config.background);
                    self.surface
                        .draw_points(points, shade)
                        .map_err(SnowflakeControllerError::Surface)?;
                }
            }
        }

        self.surface.present().map_err(SnowflakeControllerError::Surface)
    }
}
