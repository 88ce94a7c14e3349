// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Aho-Corasick automaton over Unicode code points.
//!
//! Construction is split in two phases:
//! - [`TrieBuilder`] inserts patterns into a trie.
//! - [`TrieBuilder::build`] consumes the builder, computes failure links in
//!   breadth-first order and returns an immutable [`Automaton`].
//!
//! Only an [`Automaton`] can be scanned, so querying a trie whose failure
//! links were never computed cannot be expressed.
//!
//! Nodes live in a single arena and refer to each other by [`StateId`].
//! Forward edges (`children`) are the trie structure; `fail` and `output`
//! are plain indices into the same arena.

mod builder;
mod scan;

use std::collections::HashMap;

pub use builder::TrieBuilder;
pub use scan::{Match, Matches};

/// Index of a node in the automaton arena.
pub type StateId = u32;

/// The node for the empty prefix.
pub const ROOT: StateId = 0;

/// Error raised while inserting a pattern.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PatternError {
    /// The empty pattern would match at every position.
    #[error("invalid pattern: empty pattern")]
    Empty,

    /// The trie outgrew the `StateId` index space.
    #[error("invalid pattern: automaton exceeds {max} states")]
    TooManyStates { max: usize },
}

/// One trie node, addressed by its position in the arena.
#[derive(Debug, Clone, Default)]
pub(crate) struct Node {
    pub(crate) children: HashMap<char, StateId>,
    /// Length in code points of the pattern ending here, if any.
    pub(crate) pattern_len: Option<u32>,
    /// Longest proper suffix that is also a pattern prefix.
    pub(crate) fail: StateId,
    /// Nearest terminal node strictly further along the fail chain.
    pub(crate) output: Option<StateId>,
    pub(crate) depth: u32,
}

impl Node {
    pub(crate) fn is_terminal(&self) -> bool {
        self.pattern_len.is_some()
    }
}

/// Immutable multi-pattern matcher.
///
/// Built once with [`TrieBuilder`] (or [`Automaton::new`]) and then shared
/// by reference; scanning never mutates it, so any number of threads can
/// scan the same instance concurrently.
#[derive(Debug, Clone)]
pub struct Automaton {
    nodes: Vec<Node>,
    patterns: usize,
}

impl Automaton {
    /// Build an automaton from a list of patterns.
    ///
    /// Fails on the first empty pattern; no partial automaton is returned.
    pub fn new<I, P>(patterns: I) -> Result<Self, PatternError>
    where
        I: IntoIterator<Item = P>,
        P: AsRef<str>,
    {
        let mut builder = TrieBuilder::new();
        builder.extend(patterns)?;
        Ok(builder.build())
    }

    /// Number of distinct patterns in the dictionary.
    pub fn pattern_count(&self) -> usize {
        self.patterns
    }

    /// Number of trie nodes, root included.
    pub fn state_count(&self) -> usize {
        self.nodes.len()
    }

    /// Scan `text` and lazily yield every dictionary occurrence.
    ///
    /// Matches are ordered by end position. Matches sharing an end position
    /// follow the failure chain of the current state, longest first.
    pub fn find_iter<'a, 't>(&'a self, text: &'t str) -> Matches<'a, 't> {
        Matches::new(self, text)
    }

    /// Collect every match in `text`.
    pub fn find_all<'t>(&self, text: &'t str) -> Vec<Match<'t>> {
        self.find_iter(text).collect()
    }

    /// Whether any pattern occurs in `text`. Stops at the first match.
    pub fn is_match(&self, text: &str) -> bool {
        self.find_iter(text).next().is_some()
    }

    /// Matched substrings in scan order, one entry per occurrence.
    pub fn matched_keywords(&self, text: &str) -> Vec<String> {
        self.find_iter(text)
            .map(|m| m.as_str().to_string())
            .collect()
    }

    /// Follow one code point from `state`, falling back along failure links.
    ///
    /// A miss at the root stays at the root.
    #[inline]
    pub(crate) fn next_state(&self, state: StateId, c: char) -> StateId {
        transition(&self.nodes, state, c)
    }

    /// First terminal node on the fail chain starting at `state` itself.
    #[inline]
    pub(crate) fn first_output(&self, state: StateId) -> Option<StateId> {
        let node = self.node(state);
        if node.is_terminal() {
            Some(state)
        } else {
            node.output
        }
    }

    #[inline]
    pub(crate) fn node(&self, id: StateId) -> &Node {
        &self.nodes[id as usize]
    }

    #[cfg(test)]
    pub(crate) fn nodes(&self) -> &[Node] {
        &self.nodes
    }
}

/// Shared by construction and scanning: the goto function with failure
/// fallback.
fn transition(nodes: &[Node], mut state: StateId, c: char) -> StateId {
    loop {
        let node = &nodes[state as usize];
        if let Some(&next) = node.children.get(&c) {
            return next;
        }
        if state == ROOT {
            return ROOT;
        }
        state = node.fail;
    }
}

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;
