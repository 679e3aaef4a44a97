//! Values bound by a successful match.
//!
//! The bag is rebuilt for every interpreted command by walking from the
//! executed node back to the root, so the grammar itself never stores any
//! per-call state.

use std::collections::{BTreeMap, BTreeSet};
use std::str::FromStr;

use super::template_parser::Term;
use super::{ArgumentError, Grammar, NodeId};

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Arguments {
    values: BTreeMap<String, String>,
    words: BTreeSet<String>,
}

impl Arguments {
    /// Collect the arguments of the path ending at `leaf`.
    ///
    /// `consumed` lists the nodes that matched an input word, with that word.
    /// Variables that were skipped fall back to their default, if any. When a
    /// name appears more than once on the path, the position nearest to
    /// `leaf` wins.
    pub fn collect<A>(grammar: &Grammar<A>, leaf: NodeId, consumed: &[(NodeId, String)]) -> Self {
        let mut arguments = Self::default();
        let mut current = Some(leaf);

        while let Some(id) = current {
            let word = consumed
                .iter()
                .find(|(node, _)| *node == id)
                .map(|(_, word)| word.as_str());

            match (grammar.step(id).map(|s| &s.term), word) {
                (Some(Term::Variable { name, .. }), Some(word)) => {
                    arguments.bind(name, word);
                }
                (
                    Some(Term::Variable {
                        name,
                        default: Some(default),
                    }),
                    None,
                ) => {
                    arguments.bind(name, default);
                }
                (Some(Term::Literal(_) | Term::Alternation(_)), Some(word)) => {
                    arguments.words.insert(word.to_string());
                }
                _ => {}
            }

            current = grammar.parent(id);
        }

        arguments
    }

    fn bind(&mut self, name: &str, value: &str) {
        self.values
            .entry(name.to_string())
            .or_insert_with(|| value.to_string());
    }

    /// Whether `name` is a bound variable or a literal word typed by the user.
    pub fn contains(&self, name: &str) -> bool {
        self.values.contains_key(name) || self.words.contains(name)
    }

    pub fn get_string(&self, name: &str) -> Result<&str, ArgumentError> {
        self.values
            .get(name)
            .map(String::as_str)
            .ok_or_else(|| ArgumentError::Missing(name.to_string()))
    }

    pub fn get_uint(&self, name: &str) -> Result<u32, ArgumentError> {
        self.parse(name, "an unsigned integer")
    }

    pub fn get_int(&self, name: &str) -> Result<i32, ArgumentError> {
        self.parse(name, "an integer")
    }

    pub fn get_double(&self, name: &str) -> Result<f64, ArgumentError> {
        self.parse(name, "a number")
    }

    pub fn get_bool(&self, name: &str) -> Result<bool, ArgumentError> {
        let value = self.get_string(name)?;
        match value {
            "1" | "true" | "on" | "yes" => Ok(true),
            "0" | "false" | "off" | "no" => Ok(false),
            _ => Err(invalid(name, value, "a boolean")),
        }
    }

    /// Comma-separated list of unsigned integers, e.g. `3,1,2`.
    pub fn get_uint_array(&self, name: &str) -> Result<Vec<u32>, ArgumentError> {
        let value = self.get_string(name)?;
        if value.is_empty() {
            return Ok(Vec::new());
        }
        value
            .split(',')
            .map(|item| {
                item.trim()
                    .parse()
                    .map_err(|_| invalid(name, value, "a comma-separated list of unsigned integers"))
            })
            .collect()
    }

    fn parse<T: FromStr>(&self, name: &str, expected: &'static str) -> Result<T, ArgumentError> {
        let value = self.get_string(name)?;
        value.parse().map_err(|_| invalid(name, value, expected))
    }
}

fn invalid(name: &str, value: &str, expected: &'static str) -> ArgumentError {
    ArgumentError::Invalid {
        name: name.to_string(),
        value: value.to_string(),
        expected,
    }
}
