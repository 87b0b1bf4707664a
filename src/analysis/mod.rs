pub mod fake;
pub mod overrides;

// Re-export commonly used types
pub use fake::{
    AgeBracket,
    AnalysisResult,
    Detection,
    FakeAnalyzer,
    Gender,
};
pub use overrides::OverrideRule;
