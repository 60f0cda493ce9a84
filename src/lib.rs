//! Reads the out log of a Grinder load test run into typed records.
//!
//! ```no_run
//! use std::fs::File;
//! use std::io;
//!
//! let log = File::open("out_host-0.log").unwrap();
//! let result = grinder_log_parser::parse(Some(log), &mut io::stderr()).unwrap();
//!
//! println!("{} tests, {} executions", result.len(), result.totals().execution_count);
//! ```

#[macro_use]
extern crate log;

pub mod log_parser;
pub mod result;

pub use crate::log_parser::error::{Field, ParseError};
pub use crate::log_parser::log_lines::{LineMatch, LineMatches, LineShape};
pub use crate::log_parser::number_format::{NumberError, NumberFormat};
pub use crate::log_parser::test_record::Record;
pub use crate::log_parser::{parse, parse_str, LogParser};
pub use crate::result::ParseResult;
