/**
 * Generator configuration, from the command line or from a JSON file.
 */

use std::fs;
use std::path::Path;
use std::sync::Arc;
use anyhow::Context;
use serde::{Deserialize, Serialize};
use vg_alphabet::{AlphabetError, CharsetGenerator, CodeGenerator, DigitGenerator, LetterCase,
    LetterGenerator, WordGenerator};
use vg_pattern::PatternGenerator;
use vg_random::RandomSource;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CaseConfig {
    Upper,
    Lower,
    #[default]
    Mixed,
}

impl From<CaseConfig> for LetterCase {
    fn from(case: CaseConfig) -> Self {
        match case {
            CaseConfig::Upper => LetterCase::Upper,
            CaseConfig::Lower => LetterCase::Lower,
            CaseConfig::Mixed => LetterCase::Mixed,
        }
    }
}

impl From<LetterCase> for CaseConfig {
    fn from(case: LetterCase) -> Self {
        match case {
            LetterCase::Upper => CaseConfig::Upper,
            LetterCase::Lower => CaseConfig::Lower,
            LetterCase::Mixed => CaseConfig::Mixed,
        }
    }
}

/// Which generator to build, and its parameters.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case", deny_unknown_fields)]
pub enum GeneratorConfig {
    Digits {
        length: usize,
        #[serde(default)]
        no_leading_zero: bool,
    },
    Letters {
        length: usize,
        #[serde(default)]
        case: CaseConfig,
    },
    Word {
        length: usize,
    },
    Charset {
        length: usize,
        charset: String,
    },
    Pattern {
        pattern: String,
    },
}

impl GeneratorConfig {
    pub fn from_json(text: &str) -> serde_json::Result<Self> {
        serde_json::from_str(text)
    }

    pub fn load(path: &Path) -> anyhow::Result<Self> {
        let text = fs::read_to_string(path)
            .with_context(|| format!("failed to read {}", path.display()))?;
        Self::from_json(&text)
            .with_context(|| format!("invalid generator configuration in {}", path.display()))
    }

    pub fn build(&self, rng: Arc<dyn RandomSource>) -> Result<Box<dyn CodeGenerator>, AlphabetError> {
        let generator: Box<dyn CodeGenerator> = match self {
            GeneratorConfig::Digits{ length, no_leading_zero } =>
                Box::new(DigitGenerator::with_rng(*length, *no_leading_zero, rng)),

            GeneratorConfig::Letters{ length, case } =>
                Box::new(LetterGenerator::with_rng(*length, (*case).into(), rng)),

            GeneratorConfig::Word{ length } =>
                Box::new(WordGenerator::with_rng(*length, rng)),

            GeneratorConfig::Charset{ length, charset } =>
                Box::new(CharsetGenerator::with_rng(*length, charset, rng)?),

            GeneratorConfig::Pattern{ pattern } =>
                Box::new(PatternGenerator::with_rng(pattern.as_str(), rng)),
        };
        Ok(generator)
    }
}

// Tests ///////////////////////////////////////////////////////////////////////

#[cfg(test)]
mod config_tests {
    use super::*;
    use std::io::Write;
    use vg_random::SharedRandom;

    fn rng() -> Arc<dyn RandomSource> {
        Arc::new(SharedRandom::with_seed(1))
    }

    #[test]
    fn parse_every_kind() {
        assert_eq!(
            GeneratorConfig::from_json(r#"{"kind":"digits","length":6,"no_leading_zero":true}"#).unwrap(),
            GeneratorConfig::Digits{ length: 6, no_leading_zero: true });
        assert_eq!(
            GeneratorConfig::from_json(r#"{"kind":"letters","length":8,"case":"upper"}"#).unwrap(),
            GeneratorConfig::Letters{ length: 8, case: CaseConfig::Upper });
        assert_eq!(
            GeneratorConfig::from_json(r#"{"kind":"word","length":6}"#).unwrap(),
            GeneratorConfig::Word{ length: 6 });
        assert_eq!(
            GeneratorConfig::from_json(r#"{"kind":"charset","length":4,"charset":"AB12"}"#).unwrap(),
            GeneratorConfig::Charset{ length: 4, charset: "AB12".into() });
        assert_eq!(
            GeneratorConfig::from_json(r#"{"kind":"pattern","pattern":"^[A-Z]{3}-\\d{4}$"}"#).unwrap(),
            GeneratorConfig::Pattern{ pattern: r"^[A-Z]{3}-\d{4}$".into() });
    }

    #[test]
    fn defaults() {
        assert_eq!(
            GeneratorConfig::from_json(r#"{"kind":"digits","length":4}"#).unwrap(),
            GeneratorConfig::Digits{ length: 4, no_leading_zero: false });
        assert_eq!(
            GeneratorConfig::from_json(r#"{"kind":"letters","length":4}"#).unwrap(),
            GeneratorConfig::Letters{ length: 4, case: CaseConfig::Mixed });
    }

    #[test]
    fn rejects_unknown_kind_and_fields() {
        assert!(GeneratorConfig::from_json(r#"{"kind":"emoji","length":4}"#).is_err());
        assert!(GeneratorConfig::from_json(r#"{"kind":"word","length":4,"extra":1}"#).is_err());
        assert!(GeneratorConfig::from_json(r#"{"kind":"word"}"#).is_err());
    }

    #[test]
    fn build_generators() {
        let digits = GeneratorConfig::Digits{ length: 6, no_leading_zero: true }.build(rng()).unwrap();
        let code = digits.generate();
        assert_eq!(code.len(), 6);
        assert!(!code.starts_with('0'));

        let letters = GeneratorConfig::Letters{ length: 5, case: CaseConfig::Lower }.build(rng()).unwrap();
        assert!(letters.generate().chars().all(|c| c.is_ascii_lowercase()));

        let pattern = GeneratorConfig::Pattern{ pattern: "(yes|no)".into() }.build(rng()).unwrap();
        let answer = pattern.generate();
        assert!(answer == "yes" || answer == "no");
    }

    #[test]
    fn empty_charset_fails_to_build() {
        let err = GeneratorConfig::Charset{ length: 3, charset: String::new() }.build(rng()).err();
        assert_eq!(err, Some(AlphabetError::EmptyAlphabet));
    }

    #[test]
    fn load_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"{{"kind":"word","length":10}}"#).unwrap();
        assert_eq!(GeneratorConfig::load(file.path()).unwrap(), GeneratorConfig::Word{ length: 10 });
    }

    #[test]
    fn load_reports_path() {
        let err = GeneratorConfig::load(Path::new("/nonexistent/vgen.json")).unwrap_err();
        assert!(format!("{:#}", err).contains("/nonexistent/vgen.json"));
    }

    #[test]
    fn round_trips_through_json() {
        let config = GeneratorConfig::Letters{ length: 3, case: CaseConfig::Upper };
        let text = serde_json::to_string(&config).unwrap();
        assert_eq!(text, r#"{"kind":"letters","length":3,"case":"upper"}"#);
    }
}
