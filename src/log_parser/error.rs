use std::fmt;
use std::io;

use failure::Fail;

/// Positional fields of a test or totals line, in the order they appear.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Field {
    Identifier,
    ExecutionCount,
    ErrorCount,
    MeanTime,
    TimeStdDev,
    MeanResponseLength,
    ResponseBytesPerSecond,
    ResponseErrorCount,
    ResolveHostMeanTime,
    EstablishConnectionMeanTime,
    FirstByteMeanTime,
    Name,
}

impl Field {
    /// 0-based column position on the line.
    pub fn index(self) -> usize {
        match self {
            Field::Identifier => 0,
            Field::ExecutionCount => 1,
            Field::ErrorCount => 2,
            Field::MeanTime => 3,
            Field::TimeStdDev => 4,
            Field::MeanResponseLength => 5,
            Field::ResponseBytesPerSecond => 6,
            Field::ResponseErrorCount => 7,
            Field::ResolveHostMeanTime => 8,
            Field::EstablishConnectionMeanTime => 9,
            Field::FirstByteMeanTime => 10,
            Field::Name => 11,
        }
    }

    fn label(self) -> &'static str {
        match self {
            Field::Identifier => "identifier",
            Field::ExecutionCount => "execution count",
            Field::ErrorCount => "error count",
            Field::MeanTime => "mean time",
            Field::TimeStdDev => "time standard deviation",
            Field::MeanResponseLength => "mean response length",
            Field::ResponseBytesPerSecond => "response bytes per second",
            Field::ResponseErrorCount => "response error count",
            Field::ResolveHostMeanTime => "mean time to resolve host",
            Field::EstablishConnectionMeanTime => "mean time to establish connection",
            Field::FirstByteMeanTime => "mean time to first byte",
            Field::Name => "name",
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{} (field {})", self.label(), self.index())
    }
}

#[derive(Debug, Fail)]
pub enum ParseError {
    #[fail(display = "Empty input stream")]
    EmptyInput,

    #[fail(display = "Malformed line, {}: {}: {:?}", field, reason, line)]
    MalformedLine {
        line: String,
        field: Field,
        reason: String,
    },

    #[fail(display = "Could not read log: {}", _0)]
    IoFailure(#[cause] io::Error),
}

impl ParseError {
    pub fn malformed(line: &str, field: Field, reason: impl Into<String>) -> ParseError {
        ParseError::MalformedLine {
            line: line.to_string(),
            field,
            reason: reason.into(),
        }
    }
}

impl From<io::Error> for ParseError {
    fn from(err: io::Error) -> ParseError {
        ParseError::IoFailure(err)
    }
}
