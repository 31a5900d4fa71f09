//! Aggregated verification output.

use fabula_core::ImportErrorLine;
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet};

/// Every defect found by a pipeline run, in verifier registration order.
#[derive(
    Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize, derive_getters::Getters,
)]
pub struct VerificationReport {
    /// Reported defects
    errors: Vec<ImportErrorLine>,
}

impl VerificationReport {
    /// Creates a report from defect lines.
    pub fn new(errors: Vec<ImportErrorLine>) -> Self {
        Self { errors }
    }

    /// Whether the story may be published.
    pub fn is_publishable(&self) -> bool {
        self.errors.is_empty()
    }

    /// Number of defects.
    pub fn len(&self) -> usize {
        self.errors.len()
    }

    /// Whether no defects were found.
    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    /// Distinct error names.
    pub fn error_names(&self) -> BTreeSet<&str> {
        self.errors
            .iter()
            .map(|line| line.error_name().as_str())
            .collect()
    }

    /// Defects grouped by error name, keeping report order inside each group.
    pub fn by_error_name(&self) -> BTreeMap<&str, Vec<&ImportErrorLine>> {
        let mut groups: BTreeMap<&str, Vec<&ImportErrorLine>> = BTreeMap::new();
        for line in &self.errors {
            groups.entry(line.error_name().as_str()).or_default().push(line);
        }
        groups
    }

    /// Consumes the report, returning the defect lines.
    pub fn into_errors(self) -> Vec<ImportErrorLine> {
        self.errors
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_grouping_keeps_order() {
        let report = VerificationReport::new(vec![
            ImportErrorLine::new(4, "UnreachableScene", "a"),
            ImportErrorLine::unattributed("MissingScene", "b"),
            ImportErrorLine::new(9, "UnreachableScene", "c"),
        ]);

        assert!(!report.is_publishable());
        assert_eq!(report.len(), 3);
        assert_eq!(
            report.error_names().into_iter().collect::<Vec<_>>(),
            vec!["MissingScene", "UnreachableScene"]
        );

        let groups = report.by_error_name();
        let unreachable: Vec<u32> = groups["UnreachableScene"]
            .iter()
            .map(|line| *line.line_number())
            .collect();
        assert_eq!(unreachable, vec![4, 9]);
    }

    #[test]
    fn test_empty_report_is_publishable() {
        let report = VerificationReport::default();
        assert!(report.is_publishable());
        assert!(report.into_errors().is_empty());
    }
}
