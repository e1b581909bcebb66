//! Findings of the report-producing checks in [`crate::checks`].

use std::fmt::Write as _;

use serde::Serialize;

/// How bad a finding is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    /// Nothing wrong.
    Pass,
    /// Suspicious, but the ontology is still usable.
    Warning,
    /// The ontology is inconsistent or malformed.
    Failure,
}

impl Severity {
    fn tag(self) -> &'static str {
        match self {
            Severity::Pass => "PASS",
            Severity::Warning => "WARN",
            Severity::Failure => "FAIL",
        }
    }
}

/// One finding.
#[derive(Debug, Clone, Serialize)]
pub struct CheckResult {
    /// Check name, e.g. `consistency` or `restrictions/<ontology>`.
    pub check: String,
    /// One-line summary.
    pub message: String,
    /// How bad it is.
    pub severity: Severity,
    /// Offending axioms or nodes, possibly multi-line.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub details: Vec<String>,
}

impl CheckResult {
    /// A passing finding.
    pub fn pass(check: impl Into<String>, message: impl Into<String>) -> Self {
        Self::with_severity(check, message, Severity::Pass, Vec::new())
    }

    /// A failing finding without details.
    pub fn fail(check: impl Into<String>, message: impl Into<String>) -> Self {
        Self::with_severity(check, message, Severity::Failure, Vec::new())
    }

    /// A failing finding listing what is wrong.
    pub fn fail_with_details(
        check: impl Into<String>,
        message: impl Into<String>,
        details: Vec<String>,
    ) -> Self {
        Self::with_severity(check, message, Severity::Failure, details)
    }

    /// A warning listing what looks wrong.
    pub fn warn_with_details(
        check: impl Into<String>,
        message: impl Into<String>,
        details: Vec<String>,
    ) -> Self {
        Self::with_severity(check, message, Severity::Warning, details)
    }

    fn with_severity(
        check: impl Into<String>,
        message: impl Into<String>,
        severity: Severity,
        details: Vec<String>,
    ) -> Self {
        Self {
            check: check.into(),
            message: message.into(),
            severity,
            details,
        }
    }

    /// Whether this finding counts against the ontology.
    #[must_use]
    pub fn is_failure(&self) -> bool {
        self.severity == Severity::Failure
    }
}

/// Findings of one or more checks, in the order they were made.
#[derive(Debug, Default, Serialize)]
pub struct Report {
    /// The findings.
    pub results: Vec<CheckResult>,
}

impl Report {
    /// An empty report.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds one finding.
    pub fn push(&mut self, result: CheckResult) {
        self.results.push(result);
    }

    /// Appends the findings of another report.
    pub fn extend(&mut self, other: Report) {
        self.results.extend(other.results);
    }

    /// Number of failing findings.
    #[must_use]
    pub fn failure_count(&self) -> usize {
        self.results.iter().filter(|r| r.is_failure()).count()
    }

    /// True if nothing failed; warnings do not count.
    #[must_use]
    pub fn all_passed(&self) -> bool {
        self.failure_count() == 0
    }

    /// Renders one `[PASS]`, `[WARN]` or `[FAIL]` line per finding, with its
    /// details indented below.
    #[must_use]
    pub fn render(&self) -> String {
        let mut out = String::new();
        for result in &self.results {
            let _ = writeln!(
                out,
                "[{}] {}: {}",
                result.severity.tag(),
                result.check,
                result.message
            );
            for line in result.details.iter().flat_map(|d| d.lines()) {
                let _ = writeln!(out, "       {line}");
            }
        }
        out
    }

    /// Writes [`render`](Self::render) to stdout.
    pub fn print(&self) {
        print!("{}", self.render());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn warnings_do_not_fail_a_report() {
        let mut report = Report::new();
        report.push(CheckResult::pass("a", "ok"));
        report.push(CheckResult::warn_with_details("b", "hmm", vec!["x".into()]));
        assert!(report.all_passed());
        let mut other = Report::new();
        other.push(CheckResult::fail("c", "broken"));
        report.extend(other);
        assert_eq!(report.failure_count(), 1);
        assert!(!report.all_passed());
    }

    #[test]
    fn details_are_indented_under_their_finding() {
        let mut report = Report::new();
        report.push(CheckResult::fail_with_details(
            "restrictions/ex",
            "1 of 2 restriction(s) malformed",
            vec!["_:b0 a owl:Restriction\n\towl:someValuesFrom ex:Cat".into()],
        ));
        let text = report.render();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines[0], "[FAIL] restrictions/ex: 1 of 2 restriction(s) malformed");
        assert_eq!(lines[1], "       _:b0 a owl:Restriction");
        assert_eq!(lines.len(), 3);
    }
}
