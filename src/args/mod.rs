use clap::{App, Arg};
use failure::Error;

#[derive(PartialEq, Debug)]
pub struct GrinderLogParserArgs {
    pub filename: String,
    pub gzip: bool,
    pub quiet: bool,
}

pub fn parse_args<T>(args: T) -> Result<GrinderLogParserArgs, Error>
where
    T: IntoIterator<Item = String>,
{
    let app = App::new("Grinder Log Parser")
        .author(crate_authors!())
        .version(crate_version!())
        .after_help(crate_description!())
        .arg(
            Arg::with_name("filename")
                .index(1)
                .value_name("FILE")
                .required(false)
                .help("Grinder out log to parse, defaults to stdin")
                .takes_value(true),
        )
        .arg(
            Arg::with_name("gzip")
                .short("z")
                .long("gzip")
                .help("Input is gzip compressed (implied by a .gz file name)"),
        )
        .arg(
            Arg::with_name("quiet")
                .short("q")
                .long("quiet")
                .help("Don't output results to stdout"),
        )
        .get_matches_from_safe(args)?;

    let filename = app.value_of("filename").unwrap_or("-").to_string();
    let gzip = app.is_present("gzip") || filename.ends_with(".gz");

    Ok(GrinderLogParserArgs {
        filename,
        gzip,
        quiet: app.is_present("quiet"),
    })
}
