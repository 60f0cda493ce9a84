use std::fmt;

/// Separator rules used to read the numeric columns of a log.
///
/// Parsing never consults the process locale. The Grinder writes its
/// numbers with the conventions of `ENGLISH`, whatever the locale of the
/// machine the parser runs on.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct NumberFormat {
    pub decimal_separator: char,
    pub grouping_separator: Option<char>,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum NumberError {
    Empty,
    Invalid(String),
    Negative(String),
}

impl fmt::Display for NumberError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            NumberError::Empty => write!(f, "empty number"),
            NumberError::Invalid(token) => write!(f, "{:?} is not a valid number", token),
            NumberError::Negative(token) => write!(f, "{:?} must not be negative", token),
        }
    }
}

impl NumberFormat {
    pub const ENGLISH: NumberFormat = NumberFormat {
        decimal_separator: '.',
        grouping_separator: Some(','),
    };

    pub fn parse_integer(&self, token: &str) -> Result<u64, NumberError> {
        let (negative, digits) = self.normalize(token, false)?;
        if negative {
            return Err(NumberError::Negative(token.to_string()));
        }

        digits
            .parse()
            .map_err(|_| NumberError::Invalid(token.to_string()))
    }

    pub fn parse_decimal(&self, token: &str) -> Result<f64, NumberError> {
        if token == "NaN" {
            return Ok(std::f64::NAN);
        }

        let (negative, digits) = self.normalize(token, true)?;
        if negative {
            return Err(NumberError::Negative(token.to_string()));
        }

        digits
            .parse()
            .map_err(|_| NumberError::Invalid(token.to_string()))
    }

    /// Strips the sign and grouping separators and swaps in `.` as
    /// decimal point, so the remainder can go through `str::parse`.
    fn normalize(&self, token: &str, allow_fraction: bool) -> Result<(bool, String), NumberError> {
        if token.is_empty() {
            return Err(NumberError::Empty);
        }
        let invalid = || NumberError::Invalid(token.to_string());

        let (negative, unsigned) = match token.strip_prefix('-') {
            Some(rest) => (true, rest),
            None => (false, token),
        };

        let (integer_part, fraction) = match unsigned.find(self.decimal_separator) {
            Some(_) if !allow_fraction => return Err(invalid()),
            Some(position) => (
                &unsigned[..position],
                Some(&unsigned[position + self.decimal_separator.len_utf8()..]),
            ),
            None => (unsigned, None),
        };

        let integer_digits = match self.grouping_separator {
            Some(separator) if integer_part.contains(separator) => {
                ungroup(integer_part, separator).ok_or_else(invalid)?
            }
            _ => integer_part.to_string(),
        };

        if integer_digits.is_empty() || !integer_digits.chars().all(|c| c.is_ascii_digit()) {
            return Err(invalid());
        }

        match fraction {
            Some(fraction) => {
                if fraction.is_empty() || !fraction.chars().all(|c| c.is_ascii_digit()) {
                    return Err(invalid());
                }
                Ok((negative, format!("{}.{}", integer_digits, fraction)))
            }
            None => Ok((negative, integer_digits)),
        }
    }
}

impl Default for NumberFormat {
    fn default() -> NumberFormat {
        NumberFormat::ENGLISH
    }
}

/// `1,234,567` -> `1234567`. The leading group holds one to three
/// digits, every following group exactly three.
fn ungroup(integer_part: &str, separator: char) -> Option<String> {
    let mut groups = integer_part.split(separator);

    let first = groups.next()?;
    if first.is_empty() || first.len() > 3 {
        return None;
    }

    let mut digits = first.to_string();
    for group in groups {
        if group.len() != 3 {
            return None;
        }
        digits.push_str(group);
    }

    Some(digits)
}
