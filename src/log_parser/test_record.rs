use crate::log_parser::error::{Field, ParseError};
use crate::log_parser::log_lines::LineShape;
use crate::log_parser::number_format::NumberFormat;
use crate::log_parser::tokenizer::Columns;

/// Statistics of one test, or of all tests on the totals line.
///
/// Times are in milliseconds, lengths in bytes.
#[derive(PartialEq, Clone, Debug)]
pub struct Record {
    pub shape: LineShape,
    pub identifier: String,
    pub execution_count: u64,
    pub error_count: u64,
    pub mean_time: f64,
    pub time_std_dev: f64,
    pub mean_response_length: f64,
    /// The Grinder prints `?` in this column; always 0.0.
    pub response_bytes_per_second: f64,
    pub response_error_count: u64,
    pub resolve_host_mean_time: f64,
    pub establish_connection_mean_time: f64,
    pub first_byte_mean_time: f64,
    pub name: String,
}

impl Record {
    pub fn new_from_log_line(
        log_line: &str,
        shape: LineShape,
        format: &NumberFormat,
    ) -> Result<Record, ParseError> {
        let columns = Columns::split(log_line, format);

        let identifier = columns
            .text(Field::Identifier)?
            .trim_start_matches(shape.keyword())
            .trim()
            .to_string();

        let execution_count = columns.integer(Field::ExecutionCount)?;
        let error_count = columns.integer(Field::ErrorCount)?;
        let mean_time = columns.decimal(Field::MeanTime)?;
        let time_std_dev = columns.decimal(Field::TimeStdDev)?;
        let mean_response_length = columns.decimal(Field::MeanResponseLength)?;
        columns.text(Field::ResponseBytesPerSecond)?;
        let response_error_count = columns.integer(Field::ResponseErrorCount)?;
        let resolve_host_mean_time = columns.decimal(Field::ResolveHostMeanTime)?;
        let establish_connection_mean_time = columns.decimal(Field::EstablishConnectionMeanTime)?;
        let first_byte_mean_time = columns.decimal(Field::FirstByteMeanTime)?;

        let name = if shape.has_name() {
            columns.text(Field::Name)?.replace('"', "")
        } else {
            String::new()
        };

        Ok(Record {
            shape,
            identifier,
            execution_count,
            error_count,
            mean_time,
            time_std_dev,
            mean_response_length,
            response_bytes_per_second: 0.0,
            response_error_count,
            resolve_host_mean_time,
            establish_connection_mean_time,
            first_byte_mean_time,
            name,
        })
    }

    pub fn is_totals(&self) -> bool {
        self.shape == LineShape::Totals
    }
}
