//! Overall risk classification

use shared_types::{Risk, Severity};

/// Highest severity present, or [`Severity::Low`] when there is none
pub fn overall<I>(severities: I) -> Severity
where
    I: IntoIterator<Item = Severity>,
{
    severities.into_iter().max().unwrap_or_default()
}

/// Overall severity of a list of risk findings
pub fn overall_severity(risks: &[Risk]) -> Severity {
    overall(risks.iter().map(|r| r.severity))
}
