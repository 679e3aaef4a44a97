//! The grammar trie shared by every registered command template.
//!
//! Each node is one template position. Templates that start with the same
//! positions share nodes; a node carries an action only when some template
//! ends there. Optional groups are never expanded into extra branches.
//! Instead the closure functions below compute, on demand, which nodes are
//! reachable when optional groups are skipped.

use std::io::{self, Write};

use log::{debug, warn};

use super::GrammarError;
use super::template_parser::{Step, parse};

/// Index of a node inside a [`Grammar`].
pub type NodeId = usize;

const ROOT: NodeId = 0;
const ROOT_KEY: &str = "[root]";

/// Outcome of [`Grammar::register`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Registration {
    Added,
    /// The template was already registered; its action has been replaced.
    Replaced,
}

#[derive(Debug)]
struct GrammarNode<A> {
    /// Canonical token text, used as the lookup key among siblings.
    key: String,
    /// `None` only for the root.
    step: Option<Step>,
    parent: Option<NodeId>,
    /// Kept sorted by `key`.
    children: Vec<NodeId>,
    action: Option<A>,
}

impl<A> GrammarNode<A> {
    fn opens(&self) -> usize {
        self.step.as_ref().map_or(0, |s| s.opens)
    }

    fn closes(&self) -> usize {
        self.step.as_ref().map_or(0, |s| s.closes)
    }
}

/// A trie of command templates, generic over the action bound to each
/// complete template.
#[derive(Debug)]
pub struct Grammar<A> {
    nodes: Vec<GrammarNode<A>>,
}

impl<A> Default for Grammar<A> {
    fn default() -> Self {
        Self::new()
    }
}

impl<A> Grammar<A> {
    pub fn new() -> Self {
        Self {
            nodes: vec![GrammarNode {
                key: ROOT_KEY.to_string(),
                step: None,
                parent: None,
                children: Vec::new(),
                action: None,
            }],
        }
    }

    pub fn root(&self) -> NodeId {
        ROOT
    }

    /// Register `template` and bind `action` to its final position.
    ///
    /// Registering the same template text twice keeps the last action.
    pub fn register(&mut self, template: &str, action: A) -> Result<Registration, GrammarError> {
        let parsed = parse(template).map_err(|source| GrammarError::Template {
            template: template.to_string(),
            source,
        })?;

        let mut current = ROOT;
        for step in parsed.steps() {
            current = self.child_or_insert(current, step);
        }

        let node = &mut self.nodes[current];
        if node.action.replace(action).is_some() {
            warn!("command '{}' registered twice; keeping the last action", template.trim());
            Ok(Registration::Replaced)
        } else {
            debug!("registered command '{}'", template.trim());
            Ok(Registration::Added)
        }
    }

    fn child_or_insert(&mut self, parent: NodeId, step: Step) -> NodeId {
        let key = step.to_string();
        let position = self.nodes[parent]
            .children
            .binary_search_by(|&child| self.nodes[child].key.as_str().cmp(key.as_str()));

        match position {
            Ok(index) => self.nodes[parent].children[index],
            Err(index) => {
                let id = self.nodes.len();
                self.nodes.push(GrammarNode {
                    key,
                    step: Some(step),
                    parent: Some(parent),
                    children: Vec::new(),
                    action: None,
                });
                self.nodes[parent].children.insert(index, id);
                id
            }
        }
    }

    pub fn key(&self, id: NodeId) -> &str {
        &self.nodes[id].key
    }

    pub fn step(&self, id: NodeId) -> Option<&Step> {
        self.nodes[id].step.as_ref()
    }

    pub fn parent(&self, id: NodeId) -> Option<NodeId> {
        self.nodes[id].parent
    }

    pub fn children(&self, id: NodeId) -> &[NodeId] {
        &self.nodes[id].children
    }

    pub fn action(&self, id: NodeId) -> Option<&A> {
        self.nodes[id].action.as_ref()
    }

    pub fn is_executable(&self, id: NodeId) -> bool {
        self.nodes[id].action.is_some()
    }

    /// Nodes really reachable at `id`'s position: the node itself plus,
    /// when optional groups start here, every position found by skipping them.
    pub fn closure(&self, id: NodeId) -> Vec<NodeId> {
        let mut reached = vec![id];
        for depth in 1..=self.nodes[id].opens() {
            self.bypass(id, depth, &mut reached);
        }
        reached
    }

    /// Skip `id`, which sits inside `depth` optional groups that are being
    /// skipped, and collect where matching resumes.
    fn bypass(&self, id: NodeId, depth: usize, reached: &mut Vec<NodeId>) {
        let node = &self.nodes[id];
        let remaining = depth.saturating_sub(node.closes());
        for &child in &node.children {
            if remaining == 0 {
                for next in self.closure(child) {
                    push_unique(reached, next);
                }
            } else {
                self.bypass(child, remaining + self.nodes[child].opens(), reached);
            }
        }
    }

    /// Positions after `id` that accept `word`. Variables accept any word;
    /// preferring literals is left to the caller once input has ended.
    pub fn next_closure(&self, id: NodeId, word: &str) -> Vec<NodeId> {
        let mut matched = Vec::new();
        for &child in &self.nodes[id].children {
            for candidate in self.closure(child) {
                let Some(step) = &self.nodes[candidate].step else {
                    continue;
                };
                if step.term.is_variable() || step.term.matches_word(word) {
                    push_unique(&mut matched, candidate);
                }
            }
        }
        matched
    }

    /// Whether `id` captures the word typed at its position.
    pub fn is_variable(&self, id: NodeId) -> bool {
        self.nodes[id]
            .step
            .as_ref()
            .is_some_and(|s| s.term.is_variable())
    }

    /// Whether input may legitimately stop at `id`: it completes a template,
    /// is a leaf, or can be followed by an optional group.
    pub fn may_end_here(&self, id: NodeId) -> bool {
        let node = &self.nodes[id];
        node.action.is_some()
            || node.children.is_empty()
            || node.children.iter().any(|&c| self.nodes[c].opens() > 0)
    }

    /// Executable nodes that finish the command when input stops at `id`,
    /// skipping any trailing optional groups.
    pub fn closure_executables(&self, id: NodeId) -> Vec<NodeId> {
        let mut found = Vec::new();
        if self.is_executable(id) {
            found.push(id);
        }
        self.optional_tail_executables(id, &mut found);
        found
    }

    fn optional_tail_executables(&self, id: NodeId, found: &mut Vec<NodeId>) {
        for &child in &self.nodes[id].children {
            let opens = self.nodes[child].opens();
            if opens > 0 {
                self.skipped_executables(child, opens, found);
            }
        }
    }

    fn skipped_executables(&self, id: NodeId, depth: usize, found: &mut Vec<NodeId>) {
        let node = &self.nodes[id];
        let remaining = depth.saturating_sub(node.closes());
        if remaining == 0 {
            if node.action.is_some() {
                push_unique(found, id);
            }
            self.optional_tail_executables(id, found);
        } else {
            for &child in &node.children {
                self.skipped_executables(child, remaining + self.nodes[child].opens(), found);
            }
        }
    }

    /// An executable node that another template continues with a
    /// mandatory word (e.g. `show` next to `show all`).
    pub fn is_strict_prefix(&self, id: NodeId) -> bool {
        let node = &self.nodes[id];
        node.action.is_some() && node.children.iter().any(|&c| self.nodes[c].opens() == 0)
    }

    /// Canonical template text of the path ending at `id`.
    pub fn template_of(&self, id: NodeId) -> String {
        let mut keys = Vec::new();
        let mut current = Some(id);
        while let Some(node) = current.filter(|&n| n != ROOT) {
            keys.push(self.nodes[node].key.as_str());
            current = self.nodes[node].parent;
        }
        keys.reverse();
        keys.join(" ")
    }

    /// Every registered template, in sorted pre-order.
    pub fn templates(&self) -> Vec<String> {
        let mut out = Vec::new();
        self.visit(ROOT, 0, &mut |id, _| {
            if self.is_executable(id) {
                out.push(self.template_of(id));
            }
        });
        out
    }

    /// Write one registered template per line.
    pub fn write_list(&self, out: &mut dyn Write) -> io::Result<()> {
        for template in self.templates() {
            writeln!(out, "{template}")?;
        }
        Ok(())
    }

    /// Write the trie with two spaces of indentation per level. Executable
    /// nodes are marked with `*`.
    pub fn write_tree(&self, out: &mut dyn Write) -> io::Result<()> {
        let mut lines = Vec::new();
        self.visit(ROOT, 0, &mut |id, depth| {
            let marker = if self.is_executable(id) { " *" } else { "" };
            lines.push(format!("{}{}{}", "  ".repeat(depth), self.nodes[id].key, marker));
        });
        for line in lines {
            writeln!(out, "{line}")?;
        }
        Ok(())
    }

    fn visit(&self, id: NodeId, depth: usize, f: &mut dyn FnMut(NodeId, usize)) {
        f(id, depth);
        for &child in &self.nodes[id].children {
            self.visit(child, depth + 1, f);
        }
    }
}

fn push_unique(nodes: &mut Vec<NodeId>, id: NodeId) {
    if !nodes.contains(&id) {
        nodes.push(id);
    }
}
