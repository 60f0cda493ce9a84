use crate::log_parser::test_record::Record;

/// Everything read from one log: the per-test records in file order and
/// the totals record.
#[derive(PartialEq, Clone, Debug)]
pub struct ParseResult {
    tests: Vec<Record>,
    totals: Record,
}

impl ParseResult {
    pub fn new(tests: Vec<Record>, totals: Record) -> ParseResult {
        ParseResult { tests, totals }
    }

    pub fn tests(&self) -> &[Record] {
        &self.tests
    }

    pub fn totals(&self) -> &Record {
        &self.totals
    }

    pub fn len(&self) -> usize {
        self.tests.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tests.is_empty()
    }

    /// First test with this identifier, e.g. `"1"` for `Test 1`.
    pub fn test(&self, identifier: &str) -> Option<&Record> {
        self.tests.iter().find(|test| test.identifier == identifier)
    }

    pub fn into_parts(self) -> (Vec<Record>, Record) {
        (self.tests, self.totals)
    }
}
