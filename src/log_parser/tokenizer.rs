use once_cell::sync::Lazy;
use regex::Regex;

use crate::log_parser::error::{Field, ParseError};
use crate::log_parser::number_format::{NumberError, NumberFormat};

// A single space can occur inside a column (the quoted test name, the
// "Test 1" identifier), so only runs of two or more separate columns.
static COLUMN_SEPARATOR: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\s{2,}").expect("valid column separator pattern"));

/// The columns of one report line, read by position.
pub struct Columns<'a> {
    line: &'a str,
    columns: Vec<&'a str>,
    format: &'a NumberFormat,
}

impl<'a> Columns<'a> {
    pub fn split(line: &'a str, format: &'a NumberFormat) -> Columns<'a> {
        let columns = COLUMN_SEPARATOR
            .split(line)
            .filter(|column| !column.is_empty())
            .collect();

        Columns {
            line,
            columns,
            format,
        }
    }

    pub fn len(&self) -> usize {
        self.columns.len()
    }

    pub fn text(&self, field: Field) -> Result<&'a str, ParseError> {
        match self.columns.get(field.index()) {
            Some(column) => Ok(*column),
            None => Err(ParseError::malformed(
                self.line,
                field,
                format!("missing, line has only {} fields", self.len()),
            )),
        }
    }

    pub fn integer(&self, field: Field) -> Result<u64, ParseError> {
        let column = self.text(field)?;
        self.format
            .parse_integer(column)
            .map_err(|err| self.number_error(field, err))
    }

    pub fn decimal(&self, field: Field) -> Result<f64, ParseError> {
        let column = self.text(field)?;
        self.format
            .parse_decimal(column)
            .map_err(|err| self.number_error(field, err))
    }

    fn number_error(&self, field: Field, err: NumberError) -> ParseError {
        ParseError::malformed(self.line, field, err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const LINE: &str = "Test 1      100   2     250.5   12.3    512.0   ?   1   10.0   5.0   20.0   \"home page\"";

    #[test]
    fn test_split_keeps_single_spaces() {
        let format = NumberFormat::ENGLISH;
        let columns = Columns::split(LINE, &format);

        assert_eq!(columns.len(), 12);
        assert_eq!(columns.text(Field::Identifier).unwrap(), "Test 1");
        assert_eq!(columns.text(Field::Name).unwrap(), "\"home page\"");
    }

    #[test]
    fn test_split_drops_trailing_separator() {
        let format = NumberFormat::ENGLISH;
        let columns = Columns::split("Totals   1   2     ", &format);

        assert_eq!(columns.len(), 3);
    }

    #[test]
    fn test_split_on_tabs() {
        let format = NumberFormat::ENGLISH;
        let columns = Columns::split("Test 3\t\t7\t\t0", &format);

        assert_eq!(columns.integer(Field::ExecutionCount).unwrap(), 7);
        assert_eq!(columns.integer(Field::ErrorCount).unwrap(), 0);
    }

    #[test]
    fn test_typed_columns() {
        let format = NumberFormat::ENGLISH;
        let columns = Columns::split(LINE, &format);

        assert_eq!(columns.integer(Field::ExecutionCount).unwrap(), 100);
        assert_eq!(columns.decimal(Field::MeanTime).unwrap(), 250.5);
        assert_eq!(columns.text(Field::ResponseBytesPerSecond).unwrap(), "?");
    }

    #[test]
    fn test_missing_column() {
        let format = NumberFormat::ENGLISH;
        let columns = Columns::split("Test 1  100  2", &format);

        match columns.decimal(Field::MeanTime) {
            Err(ParseError::MalformedLine { field, line, .. }) => {
                assert_eq!(field, Field::MeanTime);
                assert_eq!(line, "Test 1  100  2");
            }
            other => panic!("unexpected {:?}", other),
        }
    }

    #[test]
    fn test_wrong_column_type() {
        let format = NumberFormat::ENGLISH;
        let columns = Columns::split(LINE, &format);

        match columns.integer(Field::MeanTime) {
            Err(ParseError::MalformedLine { field, reason, .. }) => {
                assert_eq!(field, Field::MeanTime);
                assert!(reason.contains("250.5"));
            }
            other => panic!("unexpected {:?}", other),
        }
    }
}
