use once_cell::sync::Lazy;
use regex::Regex;

static TEST_LINE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?m)^Test \d[^\r\n]*").expect("valid test line pattern"));

static TOTALS_LINE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?m)^Totals[ \t][^\r\n]*").expect("valid totals line pattern"));

/// The two kinds of report lines the parser picks out of a log.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LineShape {
    /// `Test 1  ...  "name"`
    Test,
    /// `Totals  ...`, same columns without the name
    Totals,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct LineMatch<'t> {
    pub text: &'t str,
    pub start: usize,
    pub end: usize,
}

/// Lazily yields the lines of one shape, left to right. Each search
/// resumes where the previous match ended.
pub struct LineMatches<'t> {
    shape: LineShape,
    haystack: &'t str,
    position: usize,
}

impl LineShape {
    /// Leading word of the line, which also heads its first column.
    pub fn keyword(self) -> &'static str {
        match self {
            LineShape::Test => "Test",
            LineShape::Totals => "Totals",
        }
    }

    pub fn has_name(self) -> bool {
        self == LineShape::Test
    }

    fn pattern(self) -> &'static Regex {
        match self {
            LineShape::Test => &TEST_LINE,
            LineShape::Totals => &TOTALS_LINE,
        }
    }

    pub fn matches(self, haystack: &str) -> LineMatches {
        LineMatches {
            shape: self,
            haystack,
            position: 0,
        }
    }

    /// First line of this shape starting at or after `offset`.
    pub fn find_from(self, haystack: &str, offset: usize) -> Option<LineMatch> {
        LineMatches {
            shape: self,
            haystack,
            position: offset,
        }
        .next()
    }
}

impl<'t> Iterator for LineMatches<'t> {
    type Item = LineMatch<'t>;

    fn next(&mut self) -> Option<LineMatch<'t>> {
        if self.position > self.haystack.len() {
            return None;
        }

        let found = self.shape.pattern().find_at(self.haystack, self.position)?;
        self.position = found.end();

        Some(LineMatch {
            text: found.as_str(),
            start: found.start(),
            end: found.end(),
        })
    }
}
