//! Detect when a README on disk no longer matches its rendering.

use std::fmt;

/// Outcome of comparing a freshly rendered README against an existing one.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Drift {
    UpToDate,
    /// The first differing line (1-based). `None` means the line is absent
    /// on that side.
    Changed {
        line: usize,
        expected: Option<String>,
        actual: Option<String>,
    },
}

impl Drift {
    pub fn is_up_to_date(&self) -> bool {
        matches!(self, Drift::UpToDate)
    }
}

impl fmt::Display for Drift {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Drift::UpToDate => write!(f, "up to date"),
            Drift::Changed {
                line,
                expected,
                actual,
            } => {
                writeln!(f, "first difference at line {line}")?;
                writeln!(f, "  expected: {}", show_line(expected.as_deref()))?;
                write!(f, "  actual:   {}", show_line(actual.as_deref()))
            }
        }
    }
}

fn show_line(line: Option<&str>) -> String {
    match line {
        Some(line) => format!("{line:?}"),
        None => "<end of file>".to_string(),
    }
}

/// Compare the expected rendering with the actual file contents.
///
/// `\r\n` and `\n` line endings compare equal, as does the presence or
/// absence of a final newline; any other difference, including trailing
/// blank lines, is drift.
///
/// # Example
///
/// ```rust
/// use eqvis_index::drift::{Drift, compare};
///
/// assert_eq!(compare("# a\n", "# a\r\n"), Drift::UpToDate);
/// assert!(!compare("# a\n## Media\n", "# a\n").is_up_to_date());
/// ```
pub fn compare(expected: &str, actual: &str) -> Drift {
    let mut expected_lines = expected.lines();
    let mut actual_lines = actual.lines();
    let mut line = 0;

    loop {
        line += 1;
        match (expected_lines.next(), actual_lines.next()) {
            (None, None) => return Drift::UpToDate,
            (Some(e), Some(a)) if e == a => continue,
            (e, a) => {
                return Drift::Changed {
                    line,
                    expected: e.map(str::to_string),
                    actual: a.map(str::to_string),
                };
            }
        }
    }
}

// ============================================================================
// Tests
// ============================================================================
