//! Command template AST and the parser that builds it.
//!
//! A template such as `create layer <layerid> [<width=1920> <height=1080>]`
//! is parsed once at registration time. The grammar trie never looks at
//! bracket characters again; it works on the flattened [`Step`] chain.

use std::fmt;

use super::TemplateParseError;
use super::template_lexer::{LexToken, tokenize};

/// A parsed command template.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Template {
    pub tokens: Vec<TemplateToken>,
}

/// Individual tokens within a template.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TemplateToken {
    /// Fixed word (e.g., "get", "scene")
    Literal(String),
    /// Any one of several words (e.g., keyboard|pointer)
    Alternation(Vec<String>),
    /// Captures one input word under `name` (e.g., <layerid>, <width=1920>)
    Variable {
        name: String,
        default: Option<String>,
    },
    /// Group that may be skipped entirely (e.g., [tree|list])
    Optional(Vec<TemplateToken>),
}

/// The matchable part of a single template position.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Term {
    Literal(String),
    Alternation(Vec<String>),
    Variable {
        name: String,
        default: Option<String>,
    },
}

/// One position of a flattened template.
///
/// `opens` counts the optional groups that start at this position and
/// `closes` the ones that end here, so `[<w=1920>` has `opens == 1` and
/// `<h=1080>]` has `closes == 1`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Step {
    pub term: Term,
    pub opens: usize,
    pub closes: usize,
}

/// Parse a template string. The text is case-folded before lexing.
pub fn parse(template: &str) -> Result<Template, TemplateParseError> {
    let folded = template.to_lowercase();
    let lexed = tokenize(&folded)?;
    if lexed.is_empty() {
        return Err(TemplateParseError::EmptyTemplate);
    }

    let mut iter = lexed.into_iter();
    let tokens = build_group(&mut iter)?;

    if matches!(tokens.first(), Some(TemplateToken::Optional(_))) {
        return Err(TemplateParseError::LeadingOptional);
    }

    Ok(Template { tokens })
}

/// Collect tokens until the matching `]` (or the end of input at top level).
/// Bracket balance has already been checked by the lexer.
fn build_group(
    iter: &mut impl Iterator<Item = LexToken>,
) -> Result<Vec<TemplateToken>, TemplateParseError> {
    let mut group = Vec::new();

    while let Some(token) = iter.next() {
        match token {
            LexToken::Literal(word) => group.push(TemplateToken::Literal(word)),
            LexToken::Alternation(words) => group.push(TemplateToken::Alternation(words)),
            LexToken::Variable { name, default } => {
                group.push(TemplateToken::Variable { name, default })
            }
            LexToken::OpenBracket => {
                let inner = build_group(iter)?;
                if inner.is_empty() {
                    return Err(TemplateParseError::EmptyOptional);
                }
                group.push(TemplateToken::Optional(inner));
            }
            LexToken::CloseBracket => return Ok(group),
        }
    }

    Ok(group)
}

impl Template {
    /// Flatten the template into the chain of trie positions.
    pub fn steps(&self) -> Vec<Step> {
        let mut steps = Vec::new();
        flatten(&self.tokens, &mut steps);
        steps
    }
}

fn flatten(tokens: &[TemplateToken], steps: &mut Vec<Step>) {
    for token in tokens {
        let term = match token {
            TemplateToken::Optional(inner) => {
                let first = steps.len();
                flatten(inner, steps);
                if let Some(step) = steps.get_mut(first) {
                    step.opens += 1;
                }
                if let Some(step) = steps.last_mut() {
                    step.closes += 1;
                }
                continue;
            }
            TemplateToken::Literal(word) => Term::Literal(word.clone()),
            TemplateToken::Alternation(words) => Term::Alternation(words.clone()),
            TemplateToken::Variable { name, default } => Term::Variable {
                name: name.clone(),
                default: default.clone(),
            },
        };
        steps.push(Step {
            term,
            opens: 0,
            closes: 0,
        });
    }
}

impl Term {
    /// Whether `word` is accepted by this literal or alternation.
    /// Variables are handled separately by the matcher.
    pub fn matches_word(&self, word: &str) -> bool {
        match self {
            Term::Literal(literal) => literal == word,
            Term::Alternation(words) => words.iter().any(|w| w == word),
            Term::Variable { .. } => false,
        }
    }

    pub fn is_variable(&self) -> bool {
        matches!(self, Term::Variable { .. })
    }
}

impl fmt::Display for Term {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Term::Literal(word) => f.write_str(word),
            Term::Alternation(words) => f.write_str(&words.join("|")),
            Term::Variable {
                name,
                default: None,
            } => write!(f, "<{name}>"),
            Term::Variable {
                name,
                default: Some(default),
            } => write!(f, "<{name}={default}>"),
        }
    }
}

impl fmt::Display for Step {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}{}{}",
            "[".repeat(self.opens),
            self.term,
            "]".repeat(self.closes)
        )
    }
}
