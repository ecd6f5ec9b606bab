// Copyright (c) 2018 Fabian Schuiki

//! Error reporting for the grammar front end.

use std::process;

/// Collects and prints the syntax errors encountered while processing one
/// input file.
///
/// Diagnostics are printed to stderr as they occur. A production that hits a
/// syntax error reports it here and returns no node; the caller checks the
/// accumulated count to decide whether the parse as a whole failed.
#[derive(Debug)]
pub struct Reporter {
    file: String,
    diagnostics: Vec<String>,
}

impl Reporter {
    /// Create a reporter for the given input file.
    pub fn new<S: Into<String>>(file: S) -> Reporter {
        Reporter {
            file: file.into(),
            diagnostics: Vec::new(),
        }
    }

    /// Report a syntax error at a line of the input file.
    pub fn syntax_error(&mut self, line: u32, message: &str) {
        let text = format!("ERROR: {}: {}: {}", self.file, line, message);
        eprintln!("{}", text);
        self.diagnostics.push(text);
    }

    /// The number of errors reported so far.
    pub fn error_count(&self) -> usize {
        self.diagnostics.len()
    }

    /// The diagnostics reported so far, in order of occurrence.
    pub fn diagnostics(&self) -> &[String] {
        &self.diagnostics
    }

    /// The name of the input file this reporter was created for.
    pub fn file_name(&self) -> &str {
        &self.file
    }
}

/// Print a `FATAL:`-prefixed message to stderr and terminate the process.
///
/// Reserved for unrecoverable conditions such as an unusable input file.
pub fn fatal(message: &str) -> ! {
    eprintln!("FATAL: {}", message);
    process::exit(1);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn counts_and_formats() {
        let mut reporter = Reporter::new("test.g");
        assert_eq!(reporter.error_count(), 0);
        reporter.syntax_error(3, "expected a \"}\" but got \"end of input\"");
        assert_eq!(reporter.error_count(), 1);
        assert_eq!(
            reporter.diagnostics()[0],
            "ERROR: test.g: 3: expected a \"}\" but got \"end of input\""
        );
    }
}
