//! Completed-quiz history, newest first and capped.

use crate::model::TestResult;

/// Most results kept in history.
pub const HISTORY_LIMIT: usize = 10;

#[derive(Debug, Clone, PartialEq, Default)]
pub struct TestHistory {
    entries: Vec<TestResult>,
}

impl TestHistory {
    /// Build from persisted entries, assumed newest first. Anything past
    /// the cap is dropped.
    pub fn from_entries(mut entries: Vec<TestResult>) -> Self {
        entries.truncate(HISTORY_LIMIT);
        Self { entries }
    }

    pub fn entries(&self) -> &[TestResult] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Prepend a result, evicting the oldest beyond the cap.
    pub fn record(&mut self, result: TestResult) {
        self.entries.insert(0, result);
        self.entries.truncate(HISTORY_LIMIT);
    }

    pub fn average_score(&self) -> u32 {
        average_score(&self.entries)
    }
}

/// Mean percentage across results, rounded. Empty history averages 0.
pub fn average_score(results: &[TestResult]) -> u32 {
    if results.is_empty() {
        return 0;
    }
    let sum: f64 = results.iter().map(TestResult::ratio).sum();
    // Ratios are within [0, 1], so the percentage fits comfortably.
    ((sum / results.len() as f64) * 100.0).round() as u32
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    fn result(id: &str, score: u32, total: u32) -> TestResult {
        TestResult {
            id: id.into(),
            date: Utc::now().into(),
            score,
            total,
            test_type: "Vocabulary Challenge".into(),
        }
    }

    #[test]
    fn empty_average_is_zero() {
        assert_eq!(average_score(&[]), 0);
        assert_eq!(TestHistory::default().average_score(), 0);
    }

    #[test]
    fn average_of_four_and_five_out_of_five() {
        assert_eq!(average_score(&[result("a", 4, 5), result("b", 5, 5)]), 90);
    }

    #[test]
    fn average_rounds_half_up() {
        // 6.25% -> 6
        assert_eq!(average_score(&[result("a", 1, 8), result("b", 0, 8)]), 6);
        // 12.5% -> 13
        assert_eq!(average_score(&[result("a", 1, 8)]), 13);
    }

    #[test]
    fn zero_total_counts_as_zero_percent() {
        assert_eq!(average_score(&[result("a", 0, 0), result("b", 5, 5)]), 50);
    }

    #[test]
    fn record_prepends_and_caps() {
        let mut history = TestHistory::default();
        for i in 0..13 {
            history.record(result(&i.to_string(), 1, 5));
        }
        assert_eq!(history.len(), HISTORY_LIMIT);
        let ids: Vec<&str> = history.entries().iter().map(|r| r.id.as_str()).collect();
        assert_eq!(ids, ["12", "11", "10", "9", "8", "7", "6", "5", "4", "3"]);
    }

    #[test]
    fn from_entries_truncates() {
        let entries = (0..15).map(|i| result(&i.to_string(), 0, 5)).collect();
        let history = TestHistory::from_entries(entries);
        assert_eq!(history.len(), HISTORY_LIMIT);
        assert_eq!(history.entries()[0].id, "0");
    }
}
