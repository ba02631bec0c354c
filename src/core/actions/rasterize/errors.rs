use std::error::Error;
use std::fmt;

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum RasterizeError {
    ZeroDisplaySize,
    ZeroSupersampleFactor,
    GridTooLarge {
        display_size: u32,
        supersample_factor: u32,
    },
}

impl fmt::Display for RasterizeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ZeroDisplaySize => write!(f, "display size must be greater than zero"),
            Self::ZeroSupersampleFactor => {
                write!(f, "supersample factor must be greater than zero")
            }
            Self::GridTooLarge {
                display_size,
                supersample_factor,
            } => {
                write!(
                    f,
                    "supersample grid for display size {} at factor {} is too large",
                    display_size, supersample_factor
                )
            }
        }
    }
}

impl Error for RasterizeError {}
