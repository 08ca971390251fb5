//! Declarative rule sets stored as TOML.
//!
//! A rule file is an ordered `[[rules]]` array; each entry names a `when`
//! condition and a `then` action, both tagged by `type`. See
//! `rules/standard.toml` for the built-in set in this format.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result, bail};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::core::{
    Action, AdjustQualityBy, AdjustSellInBy, And, Condition, NameContains, NameMatchesPattern,
    NoOp, Not, RemainedLessThanNDays, RemainedMoreThanNDays, Rule, RuleError, SellDatePassed,
    SetQualityTo,
};
use crate::rule_set::standard_rules;

/// The built-in rule set in file form.
pub const STANDARD_RULES_TOML: &str =
    include_str!(concat!(env!("CARGO_MANIFEST_DIR"), "/rules/standard.toml"));

/// A parsed rule file.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct RuleSetFile {
    #[serde(default)]
    pub rules: Vec<RuleSpec>,
}

/// One rule entry: evaluated in file order.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct RuleSpec {
    pub name: String,
    pub when: ConditionSpec,
    pub then: ActionSpec,
}

/// Condition tree as written in a rule file.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ConditionSpec {
    /// Case-insensitive substring of the item name.
    NameContains { value: String },
    /// Case-insensitive regular expression searched in the item name.
    NameMatches { pattern: String },
    /// `sell_in > days`.
    RemainedMoreThan { days: i32 },
    /// `sell_in < days`.
    RemainedLessThan { days: i32 },
    /// `sell_in < 0`.
    SellDatePassed,
    /// Every sub-condition holds (empty list holds).
    All {
        #[serde(default)]
        conditions: Vec<ConditionSpec>,
    },
    Not { condition: Box<ConditionSpec> },
}

/// Action as written in a rule file.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ActionSpec {
    /// Add `delta` to quality, clamped to `[min, max]` (open-ended when omitted).
    AdjustQuality {
        delta: i32,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        min: Option<i32>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        max: Option<i32>,
    },
    AdjustSellIn { delta: i32 },
    SetQuality { value: i32 },
    NoOp,
}

impl ConditionSpec {
    pub fn build(&self) -> Result<Box<dyn Condition>, RuleError> {
        let condition: Box<dyn Condition> = match self {
            Self::NameContains { value } => Box::new(NameContains::new(value.as_str())),
            Self::NameMatches { pattern } => Box::new(NameMatchesPattern::new(pattern)?),
            Self::RemainedMoreThan { days } => Box::new(RemainedMoreThanNDays::new(*days)),
            Self::RemainedLessThan { days } => Box::new(RemainedLessThanNDays::new(*days)),
            Self::SellDatePassed => Box::new(SellDatePassed),
            Self::All { conditions } => {
                let built = conditions
                    .iter()
                    .map(Self::build)
                    .collect::<Result<Vec<_>, _>>()?;
                Box::new(And::new(built))
            }
            Self::Not { condition } => Box::new(Not::new(condition.build()?)),
        };
        Ok(condition)
    }
}

impl ActionSpec {
    pub fn build(&self) -> Result<Box<dyn Action>, RuleError> {
        let action: Box<dyn Action> = match self {
            Self::AdjustQuality { delta, min, max } => Box::new(AdjustQualityBy::new(
                *delta,
                min.unwrap_or(i32::MIN),
                max.unwrap_or(i32::MAX),
            )?),
            Self::AdjustSellIn { delta } => Box::new(AdjustSellInBy::new(*delta)),
            Self::SetQuality { value } => Box::new(SetQualityTo::new(*value)),
            Self::NoOp => Box::new(NoOp),
        };
        Ok(action)
    }
}

impl RuleSpec {
    pub fn build(&self) -> Result<Rule, RuleError> {
        Ok(Rule::new(
            self.name.as_str(),
            self.when.build()?,
            self.then.build()?,
        ))
    }
}

impl RuleSetFile {
    /// Load and validate a rule file from the given path.
    pub fn load(path: &Path) -> Result<Self> {
        let contents =
            fs::read_to_string(path).with_context(|| format!("read rules {}", path.display()))?;
        Self::parse_str(&contents).with_context(|| format!("parse rules {}", path.display()))
    }

    pub fn parse_str(contents: &str) -> Result<Self> {
        let file: RuleSetFile = toml::from_str(contents).context("parse rule set toml")?;
        file.validate()?;
        Ok(file)
    }

    fn validate(&self) -> Result<()> {
        for (index, rule) in self.rules.iter().enumerate() {
            if rule.name.trim().is_empty() {
                bail!("rules[{}].name must be non-empty", index);
            }
        }
        Ok(())
    }

    /// Compile every entry into a [`Rule`], preserving file order.
    pub fn build_rules(&self) -> Result<Vec<Rule>> {
        self.rules
            .iter()
            .enumerate()
            .map(|(index, spec)| {
                spec.build()
                    .with_context(|| format!("rules[{}] ({}) invalid", index, spec.name))
            })
            .collect()
    }
}

/// Load rules from `path`, or the built-in set if the file is missing.
pub fn load_rules(path: &Path) -> Result<Vec<Rule>> {
    if !path.exists() {
        debug!(path = %path.display(), "rule file missing, using standard rules");
        return standard_rules().context("build standard rules");
    }
    let file = RuleSetFile::load(path)?;
    let rules = file
        .build_rules()
        .with_context(|| format!("compile rules {}", path.display()))?;
    debug!(path = %path.display(), count = rules.len(), "loaded rule file");
    Ok(rules)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::item;

    #[test]
    fn standard_file_parses_and_compiles() {
        let file = RuleSetFile::parse_str(STANDARD_RULES_TOML).expect("parse");
        let rules = file.build_rules().expect("compile");
        let from_file: Vec<&str> = rules.iter().map(Rule::name).collect();
        let built_in = standard_rules().expect("rules");
        let from_code: Vec<&str> = built_in.iter().map(Rule::name).collect();
        assert_eq!(from_file, from_code);
    }

    #[test]
    fn parses_nested_conditions() {
        let file = RuleSetFile::parse_str(
            r#"
[[rules]]
name = "not expired brie"
then = { type = "adjust_quality", delta = 1, max = 50 }

[rules.when]
type = "all"
conditions = [
  { type = "name_contains", value = "brie" },
  { type = "not", condition = { type = "sell_date_passed" } },
]
"#,
        )
        .expect("parse");
        assert_eq!(
            file.rules[0].then,
            ActionSpec::AdjustQuality {
                delta: 1,
                min: None,
                max: Some(50)
            }
        );

        let rule = file.rules[0].build().expect("build");
        assert!(rule.matches(&item("Aged Brie", 0, 10)));
        assert!(!rule.matches(&item("Aged Brie", -1, 10)));

        let mut target = item("Aged Brie", 0, 50);
        rule.apply(&mut target);
        assert_eq!(target.quality, 50);
    }

    #[test]
    fn empty_all_always_matches() {
        let spec = ConditionSpec::All {
            conditions: Vec::new(),
        };
        let condition = spec.build().expect("build");
        assert!(condition.is_satisfied_by(&item("anything", -10, 0)));
    }

    #[test]
    fn rejects_blank_rule_name() {
        let err = RuleSetFile::parse_str(
            r#"
[[rules]]
name = "  "
when = { type = "sell_date_passed" }
then = { type = "no_op" }
"#,
        )
        .expect_err("must fail");
        assert!(err.to_string().contains("rules[0].name"));
    }

    #[test]
    fn rejects_unknown_condition_type() {
        let result = RuleSetFile::parse_str(
            r#"
[[rules]]
name = "bad"
when = { type = "name_sounds_like", value = "brie" }
then = { type = "no_op" }
"#,
        );
        assert!(result.is_err());
    }

    #[test]
    fn compile_error_keeps_rule_context_and_cause() {
        let file = RuleSetFile::parse_str(
            r#"
[[rules]]
name = "ok"
when = { type = "sell_date_passed" }
then = { type = "no_op" }

[[rules]]
name = "look-around"
when = { type = "name_matches", pattern = "^(?!.*Sulfuras).*$" }
then = { type = "no_op" }
"#,
        )
        .expect("parse");
        let err = file.build_rules().expect_err("must fail");
        let chain = format!("{:#}", err);
        assert!(chain.contains("rules[1] (look-around)"), "{chain}");
        assert!(chain.contains("invalid name pattern"), "{chain}");
        assert!(err.downcast_ref::<RuleError>().is_some());
    }

    #[test]
    fn inverted_bounds_fail_to_compile() {
        let spec = ActionSpec::AdjustQuality {
            delta: 1,
            min: Some(10),
            max: Some(0),
        };
        assert!(matches!(
            spec.build(),
            Err(RuleError::InvalidBounds { min: 10, max: 0 })
        ));
    }

    #[test]
    fn missing_file_falls_back_to_standard_rules() {
        let temp = tempfile::tempdir().expect("tempdir");
        let rules = load_rules(&temp.path().join("missing.toml")).expect("load");
        assert_eq!(rules.len(), standard_rules().expect("rules").len());
    }

    #[test]
    fn load_reports_path_on_parse_failure() {
        let temp = tempfile::tempdir().expect("tempdir");
        let path = temp.path().join("rules.toml");
        fs::write(&path, "rules = 3\n").expect("write");
        let err = load_rules(&path).expect_err("must fail");
        assert!(format!("{:#}", err).contains("rules.toml"));
    }
}
