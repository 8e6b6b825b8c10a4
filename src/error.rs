use std::fmt::{Debug, Display, Formatter};
use std::{fmt, result};

#[derive(Debug, thiserror::Error)]
pub enum ErrorType {
    #[cfg(feature = "ggez")]
    #[error("ggez: {0}")]
    GameError(ggez::GameError),
    #[error("surface: {0}")]
    Surface(String),
}

/// The second member contains a trace in reverse order
#[must_use]
pub struct Error(ErrorType, Vec<String>);

impl From<ErrorType> for Error {
    fn from(e: ErrorType) -> Self {
        Self(e, vec![])
    }
}

#[cfg(feature = "ggez")]
impl From<ggez::GameError> for Error {
    fn from(e: ggez::GameError) -> Self {
        Self(ErrorType::GameError(e), vec![])
    }
}

impl Error {
    pub fn surface<S: ToString>(message: S) -> Self {
        ErrorType::Surface(message.to_string()).into()
    }

    pub fn error_type(&self) -> &ErrorType {
        &self.0
    }

    pub fn trace(&self) -> impl Iterator<Item = &str> {
        self.1.iter().rev().map(String::as_str)
    }

    pub fn with_trace_step<S: ToString>(mut self, s: S) -> Self {
        self.1.push(s.to_string());
        self
    }
}

impl Debug for Error {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        writeln!(f, "Error:\n{:?}\nTrace:", self.0)?;
        for t in self.trace() {
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
    let result: Result = Err(Error::surface("out of vertices"));
    let err = result
        .with_trace_step("fill_polygon")
        .with_trace_step("TriangleFigure::draw_fill")
        .unwrap_err();
    assert!(matches!(err.error_type(), ErrorType::Surface(m) if m == "out of vertices"));
    assert_eq!(
        err.trace().collect::<Vec<_>>(),
        ["TriangleFigure::draw_fill", "fill_polygon"]
    );
    assert!(format!("{}", err).contains(" in fill_polygon"));
}
