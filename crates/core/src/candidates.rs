use regex::{Regex, RegexBuilder};

/// Markers `systemctl` may print ahead of a failed or not-found unit.
const STATUS_MARKERS: [&str; 2] = ["●", "*"];

/// Ordered list of unit names offered for selection.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CandidateSet {
    names: Vec<String>,
}

impl CandidateSet {
    #[must_use]
    pub fn new(names: Vec<String>) -> Self {
        Self { names }
    }

    /// Builds a set from enumerator records, keeping the first
    /// whitespace-delimited token of each non-blank line.
    #[must_use]
    pub fn from_records<S: AsRef<str>>(records: &[S]) -> Self {
        let names = records
            .iter()
            .filter_map(|record| {
                record
                    .as_ref()
                    .split_whitespace()
                    .find(|token| !STATUS_MARKERS.contains(token))
                    .map(str::to_string)
            })
            .collect();

        Self { names }
    }

    /// Keeps the names matching `pattern`, ignoring case.
    ///
    /// The pattern is tried as a regex first. If it does not compile it is
    /// matched as a literal substring. An empty pattern keeps everything.
    #[must_use]
    pub fn filter(self, pattern: &str) -> Self {
        if pattern.is_empty() {
            return self;
        }

        let matcher = compile_pattern(pattern);
        let names = self
            .names
            .into_iter()
            .filter(|name| matcher.is_match(name))
            .collect();

        Self { names }
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.names.len()
    }

    #[must_use]
    pub fn names(&self) -> &[String] {
        &self.names
    }
}

fn compile_pattern(pattern: &str) -> Regex {
    RegexBuilder::new(pattern)
        .case_insensitive(true)
        .build()
        .unwrap_or_else(|e| {
            log::debug!("Pattern `{pattern}` is not a regex ({e}), matching literally");
            RegexBuilder::new(&regex::escape(pattern))
                .case_insensitive(true)
                .build()
                .unwrap_or_else(|_| unreachable!("escaped literal always compiles"))
        })
}
