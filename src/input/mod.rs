use std::fs::File;
use std::io::{self, Read};

use failure::{err_msg, Error};
use flate2::read::GzDecoder;

/// Opens the log named on the command line; `-` is stdin.
pub fn open_input(filename: &str, gzip: bool) -> Result<Box<dyn Read>, Error> {
    let reader: Box<dyn Read> = match filename {
        "-" => Box::new(io::stdin()),
        _ => match File::open(filename) {
            Ok(file) => Box::new(file),
            Err(err) => return Err(err_msg(format!("Could not open {} ({})", filename, err))),
        },
    };

    if gzip {
        debug!("Decompressing {}", filename);
        return Ok(Box::new(GzDecoder::new(reader)));
    }

    Ok(reader)
}

#[cfg(test)]
mod tests {
    use std::io::Read;

    use super::*;

    #[test]
    fn test_open_plain() {
        let mut content = String::new();
        open_input("src/test/out_host-0.log", false)
            .unwrap()
            .read_to_string(&mut content)
            .unwrap();

        assert!(content.contains("Totals       450"));
    }

    #[test]
    fn test_open_gzip() {
        let mut content = String::new();
        open_input("src/test/out_host-1.log.gz", true)
            .unwrap()
            .read_to_string(&mut content)
            .unwrap();

        assert!(content.contains("Totals       450"));
    }

    #[test]
    fn test_open_missing_file() {
        let error_message = match open_input("src/test/does-not-exist.log", false) {
            Err(fail) => format!("{}", fail),
            Ok(_) => unreachable!(),
        };

        assert!(error_message.contains("Could not open src/test/does-not-exist.log"));
    }
}
