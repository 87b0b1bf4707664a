// src/analysis/fake.rs

use std::fmt;
use serde::{Serialize, Deserialize};
use rand::prelude::*;
use rand_distr::{Distribution, Uniform};

use crate::analysis::OverrideRule;
use crate::utils::file_base_name;

/// Labels the simulated detector can emit.
pub const DETECTION_LABELS: [&str; 5] = ["person", "cat", "dog", "car", "tree"];

pub const MIN_DETECTIONS: usize = 1;
pub const MAX_DETECTIONS: usize = 4;

pub const SCORE_MIN: f64 = 0.60;
pub const SCORE_MAX: f64 = 0.99;

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum AgeBracket {
    #[serde(rename = "0-10")]
    UpTo10,
    #[serde(rename = "11-20")]
    From11To20,
    #[serde(rename = "21-30")]
    From21To30,
    #[serde(rename = "31-40")]
    From31To40,
    #[serde(rename = "41-50")]
    From41To50,
    #[serde(rename = "51+")]
    Over50,
}

impl AgeBracket {
    /// Canonical display order, also used to reindex the age chart.
    pub const ALL: [AgeBracket; 6] = [
        AgeBracket::UpTo10,
        AgeBracket::From11To20,
        AgeBracket::From21To30,
        AgeBracket::From31To40,
        AgeBracket::From41To50,
        AgeBracket::Over50,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            AgeBracket::UpTo10 => "0-10",
            AgeBracket::From11To20 => "11-20",
            AgeBracket::From21To30 => "21-30",
            AgeBracket::From31To40 => "31-40",
            AgeBracket::From41To50 => "41-50",
            AgeBracket::Over50 => "51+",
        }
    }
}

impl fmt::Display for AgeBracket {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum Gender {
    Male,
    Female,
    Undetermined,
}

impl Gender {
    pub const ALL: [Gender; 3] = [Gender::Male, Gender::Female, Gender::Undetermined];

    pub fn as_str(&self) -> &'static str {
        match self {
            Gender::Male => "male",
            Gender::Female => "female",
            Gender::Undetermined => "undetermined",
        }
    }
}

impl fmt::Display for Gender {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Detection {
    pub label: String,
    pub score: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct AnalysisResult {
    pub has_person: bool,
    pub estimated_age_bracket: AgeBracket,
    pub estimated_gender: Gender,
    pub detections: Vec<Detection>,
}

impl AnalysisResult {
    pub fn has_detection(&self, label: &str) -> bool {
        self.detections.iter().any(|d| d.label == label)
    }
}

/// Rounds a score to two decimal places.
pub fn round_score(score: f64) -> f64 {
    (score * 100.0).round() / 100.0
}

/// Draws a score uniformly from `[min, max]`, rounded to 2dp.
pub fn sample_score<R: Rng + ?Sized>(min: f64, max: f64, rng: &mut R) -> f64 {
    let uniform = Uniform::new_inclusive(min, max);
    round_score(uniform.sample(rng))
}

/// Simulated image analyzer.
///
/// Produces random results that look like the output of a vision model.
/// Filenames matching one of the override rules get fixed values instead,
/// so that specific demo images come out "correctly classified".
pub struct FakeAnalyzer<R: Rng> {
    rng: R,
    rules: Vec<OverrideRule>,
}

impl FakeAnalyzer<StdRng> {
    /// Seeded analyzer when `seed` is given, entropy-seeded otherwise.
    pub fn from_seed(seed: Option<u64>, rules: Vec<OverrideRule>) -> Self {
        let rng = if let Some(seed) = seed {
            StdRng::seed_from_u64(seed)
        } else {
            StdRng::from_entropy()
        };
        Self::with_rules(rng, rules)
    }
}

impl<R: Rng> FakeAnalyzer<R> {
    pub fn with_rules(rng: R, rules: Vec<OverrideRule>) -> Self {
        Self { rng, rules }
    }

    pub fn analyze(&mut self, filename: &str) -> AnalysisResult {
        let mut result = Self::random_result(&mut self.rng);

        let base_name = file_base_name(filename).to_lowercase();
        for rule in &self.rules {
            if rule.matches(&base_name) {
                log::debug!("Override rule '{}' applies to {}", rule.name, filename);
                rule.apply(&mut result, &mut self.rng);
            }
        }

        result
    }

    fn random_result(rng: &mut R) -> AnalysisResult {
        let has_person = rng.gen_bool(0.5);
        let estimated_age_bracket = AgeBracket::ALL[rng.gen_range(0..AgeBracket::ALL.len())];
        let estimated_gender = Gender::ALL[rng.gen_range(0..Gender::ALL.len())];

        let count = rng.gen_range(MIN_DETECTIONS..=MAX_DETECTIONS);
        let detections = (0..count)
            .map(|_| Detection {
                label: DETECTION_LABELS[rng.gen_range(0..DETECTION_LABELS.len())].to_string(),
                score: sample_score(SCORE_MIN, SCORE_MAX, rng),
            })
            .collect();

        AnalysisResult {
            has_person,
            estimated_age_bracket,
            estimated_gender,
            detections,
        }
    }
}
