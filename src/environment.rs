use log::debug;
use std::collections::HashMap;

/// Environment keeps track of every variable declared during an interpreter
/// session. There is one flat namespace; redeclaring a name overwrites it.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Environment(HashMap<String, String>);

impl Environment {
    #[allow(missing_docs)]
    pub fn new() -> Self {
        Self::default()
    }

    /// Stores `value` under `name`, returning the value it replaced.
    pub fn declare<N, V>(&mut self, name: N, value: V) -> Option<String>
    where
        N: Into<String>,
        V: Into<String>,
    {
        let (name, value) = (name.into(), value.into());
        debug!(r#"Declaring "{}" = "{}""#, name, value);
        self.0.insert(name, value)
    }

    #[allow(missing_docs)]
    pub fn get(&self, name: &str) -> Option<&str> {
        self.0.get(name).map(String::as_str)
    }

    /// Looks up `key`, falling back to `key` itself when nothing is declared
    /// under that name.
    pub fn resolve<'a>(&'a self, key: &'a str) -> &'a str {
        self.get(key).unwrap_or(key)
    }

    #[allow(missing_docs)]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[allow(missing_docs)]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Declared variables, sorted by name.
    pub fn variables(&self) -> Vec<(&str, &str)> {
        let mut variables: Vec<(&str, &str)> = self
            .0
            .iter()
            .map(|(k, v)| (k.as_str(), v.as_str()))
            .collect();

        variables.sort_unstable();
        variables
    }
}
