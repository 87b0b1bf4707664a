// src/analysis/overrides.rs

// Demo exceptions: filenames that should always produce the same "analysis".
// This is a known limitation of the simulator, not detection logic. Rules are
// evaluated in order against the lower-cased base name; every matching rule
// applies, so a later rule wins when two force the same field.

use rand::Rng;

use super::fake::sample_score;
use super::{AgeBracket, AnalysisResult, Detection, Gender};

#[derive(Debug, Clone, PartialEq)]
pub struct SyntheticDetection {
    pub label: String,
    pub min_score: f64,
    pub max_score: f64,
}

#[derive(Debug, Clone, PartialEq)]
pub struct OverrideRule {
    pub name: String,
    /// Lower-case substring searched for in the file's base name.
    pub pattern: String,
    pub has_person: Option<bool>,
    pub age_bracket: Option<AgeBracket>,
    pub gender: Option<Gender>,
    /// Appended when no detection with the same label exists yet.
    pub ensure_detection: Option<SyntheticDetection>,
}

impl OverrideRule {
    pub fn new(name: &str, pattern: &str) -> Self {
        Self {
            name: name.to_string(),
            pattern: pattern.to_lowercase(),
            has_person: None,
            age_bracket: None,
            gender: None,
            ensure_detection: None,
        }
    }

    pub fn has_person(mut self, has_person: bool) -> Self {
        self.has_person = Some(has_person);
        self
    }

    pub fn age_bracket(mut self, age_bracket: AgeBracket) -> Self {
        self.age_bracket = Some(age_bracket);
        self
    }

    pub fn gender(mut self, gender: Gender) -> Self {
        self.gender = Some(gender);
        self
    }

    pub fn ensure_detection(mut self, label: &str, min_score: f64, max_score: f64) -> Self {
        self.ensure_detection = Some(SyntheticDetection {
            label: label.to_string(),
            min_score,
            max_score,
        });
        self
    }

    /// `base_name` must already be lower-cased.
    pub fn matches(&self, base_name: &str) -> bool {
        base_name.contains(&self.pattern)
    }

    pub fn apply<R: Rng + ?Sized>(&self, result: &mut AnalysisResult, rng: &mut R) {
        if let Some(has_person) = self.has_person {
            result.has_person = has_person;
        }
        if let Some(age_bracket) = self.age_bracket {
            result.estimated_age_bracket = age_bracket;
        }
        if let Some(gender) = self.gender {
            result.estimated_gender = gender;
        }
        if let Some(synthetic) = &self.ensure_detection {
            if !result.has_detection(&synthetic.label) {
                result.detections.push(Detection {
                    label: synthetic.label.clone(),
                    score: sample_score(synthetic.min_score, synthetic.max_score, rng),
                });
            }
        }
    }
}

/// Built-in override table.
pub fn default_rules() -> Vec<OverrideRule> {
    vec![
        // Makes the bundled actor sample look plausible.
        OverrideRule::new("actor", "actor")
            .has_person(true)
            .age_bracket(AgeBracket::From31To40)
            .gender(Gender::Male)
            .ensure_detection("person", 0.90, 0.99),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn tree_only() -> AnalysisResult {
        AnalysisResult {
            has_person: false,
            estimated_age_bracket: AgeBracket::UpTo10,
            estimated_gender: Gender::Female,
            detections: vec![Detection { label: "tree".to_string(), score: 0.71 }],
        }
    }

    #[test]
    fn test_actor_rule_appends_person() {
        let rule = &default_rules()[0];
        let mut rng = StdRng::seed_from_u64(9);
        for _ in 0..200 {
            let mut result = tree_only();
            rule.apply(&mut result, &mut rng);

            assert!(result.has_person);
            assert_eq!(result.estimated_age_bracket, AgeBracket::From31To40);
            assert_eq!(result.estimated_gender, Gender::Male);
            assert_eq!(result.detections.len(), 2);

            let person = &result.detections[1];
            assert_eq!(person.label, "person");
            assert!(person.score >= 0.90 && person.score <= 0.99);
        }
    }

    #[test]
    fn test_existing_person_is_kept() {
        let rule = &default_rules()[0];
        let mut rng = StdRng::seed_from_u64(1);
        let mut result = tree_only();
        result.detections.push(Detection { label: "person".to_string(), score: 0.62 });

        rule.apply(&mut result, &mut rng);

        assert_eq!(result.detections.len(), 2);
        assert_eq!(result.detections[1].score, 0.62);
    }

    #[test]
    fn test_matching_is_substring_on_lowercase_pattern() {
        let rule = OverrideRule::new("demo", "DEMO");
        assert!(rule.matches("my_demo_shot.png"));
        assert!(!rule.matches("dem.png"));
    }

    #[test]
    fn test_later_rule_wins() {
        let rules = vec![
            OverrideRule::new("first", "cat").gender(Gender::Female),
            OverrideRule::new("second", "cat").gender(Gender::Undetermined),
        ];
        let mut rng = StdRng::seed_from_u64(0);
        let mut result = tree_only();
        for rule in rules.iter().filter(|r| r.matches("cat.png")) {
            rule.apply(&mut result, &mut rng);
        }
        assert_eq!(result.estimated_gender, Gender::Undetermined);
        assert!(!result.has_person);
    }
}
