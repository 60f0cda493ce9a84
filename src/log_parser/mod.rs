use std::io;
use std::io::{Read, Write};

pub mod error;
pub mod log_lines;
pub mod number_format;
pub mod test_record;
mod tokenizer;

use self::error::{Field, ParseError};
use self::log_lines::LineShape;
use self::number_format::NumberFormat;
use self::test_record::Record;
use crate::result::ParseResult;

/// Reads Grinder out logs, reporting failures to the console of the
/// calling build step.
pub struct LogParser<'a> {
    console: &'a mut dyn Write,
    format: NumberFormat,
}

impl<'a> LogParser<'a> {
    pub fn new(console: &'a mut dyn Write) -> LogParser<'a> {
        LogParser {
            console,
            format: NumberFormat::ENGLISH,
        }
    }

    pub fn with_number_format(mut self, format: NumberFormat) -> LogParser<'a> {
        self.format = format;
        self
    }

    /// Reads `input` to the end and parses it. `None` stands for a
    /// missing log and fails without reading anything.
    pub fn parse<R: Read>(&mut self, input: Option<R>) -> Result<ParseResult, ParseError> {
        let result = match input {
            Some(input) => read_to_string(input).and_then(|content| parse_str(&content, &self.format)),
            None => Err(ParseError::EmptyInput),
        };

        if let Err(ref err) = result {
            self.report(err);
        }

        result
    }

    fn report(&mut self, err: &ParseError) {
        error!("Problem parsing Grinder out log: {}", err);

        let _ = writeln!(self.console, "Problem parsing Grinder out log: {}", err);
        if let ParseError::IoFailure(ref cause) = *err {
            let _ = writeln!(self.console, "Caused by: {:?}", cause);
        }
    }
}

pub fn parse<R: Read>(input: Option<R>, console: &mut dyn Write) -> Result<ParseResult, ParseError> {
    LogParser::new(console).parse(input)
}

/// Parses a whole log held in memory. All test lines come first, the
/// totals line is looked up after the last of them.
pub fn parse_str(content: &str, format: &NumberFormat) -> Result<ParseResult, ParseError> {
    let mut tests: Vec<Record> = Vec::new();
    let mut offset = 0;

    for line in LineShape::Test.matches(content) {
        tests.push(Record::new_from_log_line(line.text, LineShape::Test, format)?);
        offset = line.end;
    }

    debug!("Read {} test lines", tests.len());

    let totals = match LineShape::Totals.find_from(content, offset) {
        Some(line) => Record::new_from_log_line(line.text, LineShape::Totals, format)?,
        None => {
            return Err(ParseError::malformed(
                "",
                Field::Identifier,
                "no totals line found",
            ))
        }
    };

    Ok(ParseResult::new(tests, totals))
}

fn read_to_string<R: Read>(mut input: R) -> Result<String, ParseError> {
    let mut buffer = Vec::new();
    input.read_to_end(&mut buffer)?;

    match String::from_utf8(buffer) {
        Ok(content) => Ok(content),
        Err(err) => {
            warn!("Log is not valid UTF-8, replacing invalid bytes");
            Ok(String::from_utf8_lossy(err.as_bytes()).into_owned())
        }
    }
}
