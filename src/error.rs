use std::fmt::{Debug, Display, Formatter};
use std::{fmt, result};

use crate::game::NoSpaceForFoodError;
use crate::snake;
use crate::world::{BoardDimError, OutOfBoundsError, WorldGenerationError};

#[derive(Debug)]
pub enum ErrorType {
    BoardDimError(BoardDimError),
    SnakeBuilderError(snake::BuilderError),
    WorldGenerationError(WorldGenerationError),
    NoSpaceForFoodError(NoSpaceForFoodError),
    OutOfBoundsError(OutOfBoundsError),
}

/// The second member contains a trace in reverse order
#[must_use]
pub struct Error(ErrorType, Vec<String>);

impl From<BoardDimError> for Error {
    fn from(e: BoardDimError) -> Self {
        Self(ErrorType::BoardDimError(e), vec![])
    }
}

impl From<snake::BuilderError> for Error {
    fn from(e: snake::BuilderError) -> Self {
        Self(ErrorType::SnakeBuilderError(e), vec![])
    }
}

impl From<WorldGenerationError> for Error {
    fn from(e: WorldGenerationError) -> Self {
        Self(ErrorType::WorldGenerationError(e), vec![])
    }
}

impl From<NoSpaceForFoodError> for Error {
    fn from(e: NoSpaceForFoodError) -> Self {
        Self(ErrorType::NoSpaceForFoodError(e), vec![])
    }
}

impl From<OutOfBoundsError> for Error {
    fn from(e: OutOfBoundsError) -> Self {
        Self(ErrorType::OutOfBoundsError(e), vec![])
    }
}

impl Error {
    pub fn with_trace_step<S: ToString>(mut self, s: S) -> Self {
        self.1.push(s.to_string());
        self
    }

    pub fn error_type(&self) -> &ErrorType {
        &self.0
    }
}

impl Debug for Error {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        writeln!(f, "Error:\n{:?}\nTrace:", self.0)?;
        for t in (self.1).iter().rev() {
            writeln!(f, " in {}", t)?;
        }
        Ok(())
    }
}

impl Display for Error {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        Debug::fmt(self, f)
    }
}

impl std::error::Error for Error {}

pub type Result<T = ()> = result::Result<T, Error>;

pub trait ErrorConversion {
    fn with_trace_step<S: ToString>(self, s: S) -> Self;
}

impl<T> ErrorConversion for Result<T> {
    fn with_trace_step<S: ToString>(self, s: S) -> Self {
        self.map_err(|e| e.with_trace_step(s.to_string()))
    }
}

#[test]
fn test_trace_order() {
    let err = Error::from(NoSpaceForFoodError { tiles: 4 })
        .with_trace_step("place_food")
        .with_trace_step("step");
    let text = format!("{:?}", err);
    let step = text.find("in step").unwrap();
    let place = text.find("in place_food").unwrap();
    assert!(step < place, "{}", text);
    assert!(matches!(err.error_type(), ErrorType::NoSpaceForFoodError(_)));
}
