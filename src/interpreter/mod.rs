//! Matches command lines against a [`Grammar`] and runs the selected action.
//!
//! Matching keeps a set of candidate positions, advancing all of them by
//! one word at a time. Each candidate remembers which positions consumed
//! which words, so captured arguments live only for the duration of one
//! call and the grammar can be shared freely.

mod action;
mod error;

use std::io::Write;

use log::{debug, error, trace};

use crate::grammar::{Arguments, Grammar, NodeId};
use crate::session::{Connector, Session};

pub use action::*;
pub use error::*;

/// Value of [`Interpreter::last_error`] when nothing has failed since it was
/// last read.
pub const NO_ERROR: &str = "no error";

/// Outcome of [`Interpreter::interpret_command`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CommandResult {
    /// Exactly one action ran.
    Success,
    /// A word matched nothing.
    Invalid,
    /// Input stopped before any command was complete.
    Incomplete,
    /// Input fits more than one command.
    Ambiguous,
    /// The session could not be opened; the action did not run.
    ExecutionFailed,
}

/// A uniquely matched command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Resolved {
    pub node: NodeId,
    /// Canonical text of the matched template.
    pub template: String,
    pub arguments: Arguments,
}

struct Candidate {
    node: NodeId,
    consumed: Vec<(NodeId, String)>,
    /// One entry per word: whether it matched a literal or alternation.
    literals: Vec<bool>,
}

/// Resolve `input` against `grammar` without running anything.
///
/// Every position that accepts a word stays a candidate. Once input ends,
/// candidates that cannot finish a command are dropped and, of the rest,
/// those that matched a literal at the earliest differing word win. Two
/// paths that reach the same position with different captures are
/// ambiguous.
pub fn resolve<A>(grammar: &Grammar<A>, input: &str) -> Result<Resolved, InterpretError> {
    let folded = input.to_lowercase();
    let words: Vec<&str> = folded.split_whitespace().collect();
    let command = words.join(" ");

    let mut state = vec![Candidate {
        node: grammar.root(),
        consumed: Vec::new(),
        literals: Vec::new(),
    }];

    for &word in &words {
        let mut next: Vec<Candidate> = Vec::new();
        for candidate in &state {
            for node in grammar.next_closure(candidate.node, word) {
                let mut consumed = candidate.consumed.clone();
                consumed.push((node, word.to_string()));
                if next.iter().any(|c| c.node == node && c.consumed == consumed) {
                    continue;
                }
                let mut literals = candidate.literals.clone();
                literals.push(!grammar.is_variable(node));
                next.push(Candidate {
                    node,
                    consumed,
                    literals,
                });
            }
        }

        if next.is_empty() {
            return Err(InterpretError::NotRecognized(word.to_string()));
        }
        trace!("'{word}' leaves {} candidate(s)", next.len());
        state = next;
    }

    state.retain(|c| {
        grammar.may_end_here(c.node) && !grammar.closure_executables(c.node).is_empty()
    });
    let Some(best) = state.iter().map(|c| c.literals.clone()).max() else {
        return Err(InterpretError::Incomplete(command));
    };
    state.retain(|c| c.literals == best);

    let [candidate] = state.as_slice() else {
        return Err(InterpretError::Ambiguous(command));
    };

    let leaf = match grammar.closure_executables(candidate.node).as_slice() {
        [leaf] => *leaf,
        _ => return Err(InterpretError::Ambiguous(command)),
    };
    if grammar.is_strict_prefix(leaf) {
        return Err(InterpretError::Ambiguous(command));
    }

    Ok(Resolved {
        node: leaf,
        template: grammar.template_of(leaf),
        arguments: Arguments::collect(grammar, leaf, &candidate.consumed),
    })
}

pub struct Interpreter<'g> {
    grammar: &'g CommandGrammar,
    connector: Box<dyn Connector>,
    last_error: String,
}

impl<'g> Interpreter<'g> {
    pub fn new(grammar: &'g CommandGrammar, connector: Box<dyn Connector>) -> Self {
        Self {
            grammar,
            connector,
            last_error: NO_ERROR.to_string(),
        }
    }

    pub fn grammar(&self) -> &'g CommandGrammar {
        self.grammar
    }

    pub fn resolve(&self, input: &str) -> Result<Resolved, InterpretError> {
        resolve(self.grammar, input)
    }

    /// Resolve `input` and run its action, writing command output to `out`.
    ///
    /// A session is opened first when the action needs one and is closed
    /// once the action returns. Errors raised by the action itself are
    /// logged, not returned.
    pub fn execute(&self, input: &str, out: &mut dyn Write) -> Result<(), InterpretError> {
        let resolved = self.resolve(input)?;
        let Some(action) = self.grammar.action(resolved.node) else {
            return Err(InterpretError::Incomplete(resolved.template));
        };

        let mut opened = if action.requires_session() {
            Some(self.connector.connect()?)
        } else {
            None
        };
        let session = opened.as_mut().map(|s| &mut **s as &mut dyn Session);

        debug!("running '{}'", resolved.template);
        let mut ctx = ActionContext::new(resolved.arguments, self.grammar, out, session);
        if let Err(e) = action.run(&mut ctx) {
            error!("'{}' failed: {e:#}", resolved.template);
        }
        Ok(())
    }

    /// Interpret `input`, printing command output to stdout.
    pub fn interpret_command(&mut self, input: &str) -> CommandResult {
        let stdout = std::io::stdout();
        let mut out = stdout.lock();
        self.interpret_command_to(input, &mut out)
    }

    pub fn interpret_command_to(&mut self, input: &str, out: &mut dyn Write) -> CommandResult {
        match self.execute(input, out) {
            Ok(()) => CommandResult::Success,
            Err(e) => {
                let result = CommandResult::from(&e);
                debug!("'{}' -> {result:?}: {e}", input.trim());
                self.last_error = e.to_string();
                result
            }
        }
    }

    /// The message of the most recent failure. Reading it resets it to
    /// [`NO_ERROR`].
    pub fn last_error(&mut self) -> String {
        std::mem::replace(&mut self.last_error, NO_ERROR.to_string())
    }

    pub fn print_tree(&self, out: &mut dyn Write) -> std::io::Result<()> {
        self.grammar.write_tree(out)
    }

    pub fn print_list(&self, out: &mut dyn Write) -> std::io::Result<()> {
        self.grammar.write_list(out)
    }
}
