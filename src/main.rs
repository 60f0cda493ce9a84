#[macro_use]
extern crate clap;
#[macro_use]
extern crate log;

use std::io;
use std::process;

use grinder_log_parser::{LogParser, ParseResult};

mod args;
mod input;
mod render;

use crate::render::Renderer;

pub fn run(args: &args::GrinderLogParserArgs) -> Result<ParseResult, i32> {
    let reader = match input::open_input(&args.filename, args.gzip) {
        Ok(reader) => reader,
        Err(err) => {
            error!("{}", err);
            return Err(2);
        }
    };

    let mut console = io::stderr();
    LogParser::new(&mut console)
        .parse(Some(reader))
        .map_err(|_| 1)
}

fn main() {
    env_logger::init();

    let args = match args::parse_args(std::env::args()) {
        Ok(args) => args,
        Err(err) => {
            if let Some(clap_err) = err.downcast_ref::<clap::Error>() {
                clap_err.exit();
            }
            error!("{}", err);
            process::exit(2);
        }
    };

    let result = match run(&args) {
        Ok(result) => result,
        Err(code) => process::exit(code),
    };

    info!("Parsed {} tests from {}", result.len(), args.filename);

    if !args.quiet {
        let mut stdout = io::stdout();
        let mut renderer = render::terminal::TerminalRenderer::new(&mut stdout);
        renderer.render(&result);
    }
}
