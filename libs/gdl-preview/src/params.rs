//! # Parameters
//!
//! Caller-supplied parameter values and how they seed the variable
//! environment.
//!
//! Only values that convert to a number are seeded; everything else is
//! dropped without a warning.
//!
//! | Value | Seeded as |
//! |-------|-----------|
//! | number | itself |
//! | `true` / `false` | `1` / `0` |
//! | text | parsed after trimming, dropped if not numeric |
//! | list, `null` | dropped |
//!
//! ## Example
//!
//! ```rust
//! use gdl_preview::params::{parse_parameters, seed_environment};
//!
//! let params = parse_parameters(r#"{"a": 1.5, "flag": true, "mat": "Oak", "n": " 4 "}"#).unwrap();
//! let env = seed_environment(&params);
//! assert_eq!(env.get("A"), Some(1.5));
//! assert_eq!(env.get("FLAG"), Some(1.0));
//! assert_eq!(env.get("N"), Some(4.0));
//! assert!(!env.contains("MAT"));
//! ```

use crate::error::PreviewError;
use gdl_script::Environment;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Parameter name to value, ordered so seeding is deterministic.
pub type Parameters = BTreeMap<String, ParamValue>;

/// A parameter value of any type an editor may send.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ParamValue {
    Null,
    Bool(bool),
    Number(f64),
    Text(String),
    List(Vec<ParamValue>),
}

impl ParamValue {
    /// Numeric value used for seeding, if the value has one.
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Self::Number(n) => Some(*n),
            Self::Bool(b) => Some(if *b { 1.0 } else { 0.0 }),
            Self::Text(text) => text.trim().parse().ok(),
            Self::Null | Self::List(_) => None,
        }
    }
}

impl From<f64> for ParamValue {
    fn from(value: f64) -> Self {
        Self::Number(value)
    }
}

impl From<bool> for ParamValue {
    fn from(value: bool) -> Self {
        Self::Bool(value)
    }
}

impl From<&str> for ParamValue {
    fn from(value: &str) -> Self {
        Self::Text(value.to_string())
    }
}

/// Builds the initial environment of a run.
///
/// Names are case-insensitive; when two names differ only in case, the one
/// sorting last wins.
pub fn seed_environment(parameters: &Parameters) -> Environment {
    let mut env = Environment::new();
    for (name, value) in parameters {
        if let Some(number) = value.as_f64() {
            env.set(name, number);
        }
    }
    env
}

/// Parses a JSON object of parameters. Blank input means no parameters.
pub fn parse_parameters(json: &str) -> Result<Parameters, PreviewError> {
    if json.trim().is_empty() {
        return Ok(Parameters::new());
    }
    Ok(serde_json::from_str(json)?)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_as_f64() {
        assert_eq!(ParamValue::from(2.5).as_f64(), Some(2.5));
        assert_eq!(ParamValue::from(false).as_f64(), Some(0.0));
        assert_eq!(ParamValue::from("1e2").as_f64(), Some(100.0));
        assert_eq!(ParamValue::from("wood").as_f64(), None);
        assert_eq!(ParamValue::Null.as_f64(), None);
        assert_eq!(ParamValue::List(vec![1.0.into()]).as_f64(), None);
    }

    #[test]
    fn test_seed_uppercases_names() {
        let mut params = Parameters::new();
        params.insert("width".to_string(), 1.2.into());
        params.insert("label".to_string(), "front".into());
        let env = seed_environment(&params);
        assert_eq!(env.len(), 1);
        assert_eq!(env.get("WIDTH"), Some(1.2));
    }

    #[test]
    fn test_parse_parameters_mixed_json() {
        let params = parse_parameters(r#"{"a": null, "b": [1, 2], "c": 3}"#).unwrap();
        assert_eq!(params["a"], ParamValue::Null);
        assert_eq!(params["b"], ParamValue::List(vec![1.0.into(), 2.0.into()]));
        assert_eq!(params["c"], ParamValue::Number(3.0));
    }

    #[test]
    fn test_parse_parameters_blank() {
        assert!(parse_parameters("  ").unwrap().is_empty());
    }

    #[test]
    fn test_parse_parameters_rejects_non_object() {
        assert!(matches!(
            parse_parameters("[1, 2]"),
            Err(PreviewError::Parameters(_))
        ));
        assert!(parse_parameters(r#"{"a": {"nested": 1}}"#).is_err());
    }
}
