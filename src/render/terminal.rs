use std::io::prelude::*;

use grinder_log_parser::ParseResult;

use crate::render::Renderer;

pub struct TerminalRenderer<'a> {
    stream: &'a mut dyn Write,
}

impl<'a> TerminalRenderer<'a> {
    pub fn new(stream: &'a mut dyn Write) -> TerminalRenderer {
        TerminalRenderer { stream }
    }
}

impl<'a> Renderer for TerminalRenderer<'a> {
    fn render(&mut self, result: &ParseResult) {
        let mut write =
            |text: String| { let _ = self.stream.write(format!("{}\n", text).as_bytes()); };

        if result.is_empty() {
            warn!("No test lines in log, only totals.");
        }
        write(format!("tests:\t{}", result.len()));

        let totals = result.totals();
        write(format!("totals.executions:\t{}", totals.execution_count));
        write(format!("totals.errors:\t{}", totals.error_count));
        write(format!("totals.mean_time:\t{}", totals.mean_time));
        write(format!("totals.time_std_dev:\t{}", totals.time_std_dev));
        write(format!("totals.mean_response_length:\t{}", totals.mean_response_length));
        write(format!("totals.response_errors:\t{}", totals.response_error_count));
        write(format!("totals.resolve_host_mean_time:\t{}", totals.resolve_host_mean_time));
        write(format!(
            "totals.establish_connection_mean_time:\t{}",
            totals.establish_connection_mean_time
        ));
        write(format!("totals.first_byte_mean_time:\t{}", totals.first_byte_mean_time));
    }
}
