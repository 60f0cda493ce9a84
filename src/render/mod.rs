use grinder_log_parser::ParseResult;

pub mod terminal;

pub trait Renderer {
    fn render(&mut self, result: &ParseResult);
}
