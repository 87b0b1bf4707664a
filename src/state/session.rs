// src/state/session.rs
use serde::{Serialize, Deserialize};

use crate::analysis::{AgeBracket, AnalysisResult, Gender};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct SessionRecord {
    pub filename: String,
    pub age_bracket: AgeBracket,
    pub gender: Gender,
    pub has_person: bool,
}

impl SessionRecord {
    pub fn from_result(filename: &str, result: &AnalysisResult) -> Self {
        Self {
            filename: filename.to_string(),
            age_bracket: result.estimated_age_bracket,
            gender: result.estimated_gender,
            has_person: result.has_person,
        }
    }
}

/// Analyses accumulated during one session, one record per filename.
///
/// Re-recording a filename drops the old entry and appends the new one, so
/// the most recently analyzed file is always last.
#[derive(Debug, Default)]
pub struct SessionAggregator {
    records: Vec<SessionRecord>,
}

impl SessionAggregator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record(&mut self, filename: &str, result: &AnalysisResult) {
        self.records.retain(|r| r.filename != filename);
        self.records.push(SessionRecord::from_result(filename, result));
    }

    pub fn snapshot(&self) -> Vec<SessionRecord> {
        self.records.clone()
    }

    pub fn records(&self) -> &[SessionRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

/// Record count per gender, in order of first appearance.
pub fn gender_distribution(records: &[SessionRecord]) -> Vec<(Gender, usize)> {
    let mut counts: Vec<(Gender, usize)> = Vec::new();
    for record in records {
        match counts.iter_mut().find(|(gender, _)| *gender == record.gender) {
            Some((_, count)) => *count += 1,
            None => counts.push((record.gender, 1)),
        }
    }
    counts
}

/// Record count per age bracket over all six brackets, in canonical order.
pub fn age_distribution(records: &[SessionRecord]) -> Vec<(AgeBracket, usize)> {
    AgeBracket::ALL
        .iter()
        .map(|bracket| {
            let count = records.iter().filter(|r| r.age_bracket == *bracket).count();
            (*bracket, count)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::overrides::default_rules;
    use crate::analysis::{Detection, FakeAnalyzer};

    fn result(age: AgeBracket, gender: Gender, has_person: bool) -> AnalysisResult {
        AnalysisResult {
            has_person,
            estimated_age_bracket: age,
            estimated_gender: gender,
            detections: vec![Detection { label: "cat".to_string(), score: 0.8 }],
        }
    }

    #[test]
    fn test_rerecord_replaces_and_moves_to_end() {
        let mut session = SessionAggregator::new();
        session.record("x.jpg", &result(AgeBracket::UpTo10, Gender::Female, false));
        session.record("y.jpg", &result(AgeBracket::Over50, Gender::Male, true));
        session.record("x.jpg", &result(AgeBracket::From41To50, Gender::Undetermined, true));

        let snapshot = session.snapshot();
        assert_eq!(snapshot.len(), 2);
        assert_eq!(snapshot[0].filename, "y.jpg");
        assert_eq!(snapshot[1], SessionRecord {
            filename: "x.jpg".to_string(),
            age_bracket: AgeBracket::From41To50,
            gender: Gender::Undetermined,
            has_person: true,
        });
    }

    #[test]
    fn test_snapshot_is_a_copy() {
        let mut session = SessionAggregator::new();
        session.record("a.png", &result(AgeBracket::UpTo10, Gender::Male, false));

        let mut snapshot = session.snapshot();
        snapshot.clear();

        assert_eq!(session.len(), 1);
        assert!(!session.is_empty());
    }

    #[test]
    fn test_empty_age_distribution_has_all_buckets() {
        let distribution = age_distribution(&[]);
        let labels: Vec<&str> = distribution.iter().map(|(b, _)| b.as_str()).collect();
        assert_eq!(labels, ["0-10", "11-20", "21-30", "31-40", "41-50", "51+"]);
        assert!(distribution.iter().all(|(_, count)| *count == 0));
    }

    #[test]
    fn test_age_distribution_zero_fills() {
        let mut session = SessionAggregator::new();
        session.record("a.png", &result(AgeBracket::Over50, Gender::Male, false));
        session.record("b.png", &result(AgeBracket::Over50, Gender::Female, false));
        session.record("c.png", &result(AgeBracket::From11To20, Gender::Male, false));

        let distribution = age_distribution(session.records());
        assert_eq!(distribution[1], (AgeBracket::From11To20, 1));
        assert_eq!(distribution[5], (AgeBracket::Over50, 2));
        assert_eq!(distribution.iter().map(|(_, c)| c).sum::<usize>(), 3);
    }

    #[test]
    fn test_gender_distribution_first_occurrence_order() {
        let mut session = SessionAggregator::new();
        session.record("a.png", &result(AgeBracket::UpTo10, Gender::Undetermined, false));
        session.record("b.png", &result(AgeBracket::UpTo10, Gender::Male, false));
        session.record("c.png", &result(AgeBracket::UpTo10, Gender::Undetermined, false));

        assert_eq!(
            gender_distribution(session.records()),
            vec![(Gender::Undetermined, 2), (Gender::Male, 1)]
        );
        assert!(gender_distribution(&[]).is_empty());
    }

    #[test]
    fn test_actor_upload_end_to_end() {
        let mut analyzer = FakeAnalyzer::from_seed(Some(2024), default_rules());
        let mut session = SessionAggregator::new();

        let analysis = analyzer.analyze("actor02.jpeg");
        session.record("actor02.jpeg", &analysis);

        assert_eq!(session.snapshot(), vec![SessionRecord {
            filename: "actor02.jpeg".to_string(),
            age_bracket: AgeBracket::From31To40,
            gender: Gender::Male,
            has_person: true,
        }]);
    }
}
