use crate::core::data::boundary::BoundaryError;
use crate::core::data::vec2::Vec2;
use std::error::Error;
use std::fmt;

#[derive(Debug, Clone, PartialEq)]
pub enum GenerateSnowflakeError {
    InvalidRadius { radius: f64 },
    NonFiniteCentre { centre: Vec2 },
    DegenerateEdge { index: usize, start: Vec2, end: Vec2 },
    Boundary(BoundaryError),
}

impl fmt::Display for GenerateSnowflakeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidRadius { radius } => {
                write!(f, "radius must be positive and finite, got {}", radius)
            }
            Self::NonFiniteCentre { centre } => {
                write!(f, "centre must be finite, got ({}, {})", centre.x, centre.y)
            }
            Self::DegenerateEdge { index, start, end } => {
                write!(
                    f,
                    "degenerate edge {} from ({}, {}) to ({}, {})",
                    index, start.x, start.y, end.x, end.y
                )
            }
            Self::Boundary(err) => write!(f, "boundary error: {}", err),
        }
    }
}

impl Error for GenerateSnowflakeError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Boundary(err) => Some(err),
            _ => None,
        }
    }
}

impl From<BoundaryError> for GenerateSnowflakeError {
    fn from(err: BoundaryError) -> Self {
        Self::Boundary(err)
    }
}
