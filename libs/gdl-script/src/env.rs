//! Variable environment for expression evaluation.
//!
//! Names are case-insensitive; they are stored and looked up uppercase.

use std::collections::HashMap;

/// Mapping from uppercase variable name to value.
///
/// # Examples
/// ```
/// use gdl_script::Environment;
/// let mut env = Environment::new();
/// env.set("width", 1.5);
/// assert_eq!(env.get("WIDTH"), Some(1.5));
/// assert_eq!(env.get("Width"), Some(1.5));
/// assert_eq!(env.get("depth"), None);
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Environment {
    variables: HashMap<String, f64>,
}

impl Environment {
    /// Creates an empty environment.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets a variable, replacing any previous value.
    pub fn set(&mut self, name: &str, value: f64) {
        self.variables.insert(name.to_ascii_uppercase(), value);
    }

    /// Returns the value of a variable.
    pub fn get(&self, name: &str) -> Option<f64> {
        self.variables.get(&name.to_ascii_uppercase()).copied()
    }

    /// Returns true if the variable is defined.
    pub fn contains(&self, name: &str) -> bool {
        self.get(name).is_some()
    }

    /// Number of defined variables.
    pub fn len(&self) -> usize {
        self.variables.len()
    }

    /// Returns true if no variable is defined.
    pub fn is_empty(&self) -> bool {
        self.variables.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_set_overwrites_regardless_of_case() {
        let mut env = Environment::new();
        env.set("a", 1.0);
        env.set("A", 2.0);
        assert_eq!(env.len(), 1);
        assert_eq!(env.get("a"), Some(2.0));
    }

    #[test]
    fn test_empty_environment() {
        let env = Environment::new();
        assert!(env.is_empty());
        assert!(!env.contains("X"));
    }
}
