// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Trie construction and failure-link computation.

use std::collections::VecDeque;

use super::{Automaton, Node, PatternError, ROOT, StateId, transition};

/// Mutable trie under construction.
///
/// Patterns are inserted with [`insert`](Self::insert); [`build`](Self::build)
/// consumes the builder, so failure links are computed exactly once.
#[derive(Debug, Clone)]
pub struct TrieBuilder {
    nodes: Vec<Node>,
    patterns: usize,
}

impl Default for TrieBuilder {
    fn default() -> Self {
        Self {
            nodes: vec![Node::default()],
            patterns: 0,
        }
    }
}

impl TrieBuilder {
    /// Create a builder holding only the root.
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert one pattern.
    ///
    /// Returns `Ok(false)` when the pattern was already present; reinsertion
    /// does not change the trie.
    pub fn insert(&mut self, pattern: &str) -> Result<bool, PatternError> {
        if pattern.is_empty() {
            return Err(PatternError::Empty);
        }

        let mut state = ROOT;
        let mut len: u32 = 0;
        for c in pattern.chars() {
            len += 1;
            state = match self.nodes[state as usize].children.get(&c) {
                Some(&next) => next,
                None => self.add_child(state, c, len)?,
            };
        }

        let node = &mut self.nodes[state as usize];
        if node.is_terminal() {
            return Ok(false);
        }
        node.pattern_len = Some(len);
        self.patterns += 1;
        Ok(true)
    }

    /// Insert every pattern, stopping at the first invalid one.
    pub fn extend<I, P>(&mut self, patterns: I) -> Result<(), PatternError>
    where
        I: IntoIterator<Item = P>,
        P: AsRef<str>,
    {
        for pattern in patterns {
            self.insert(pattern.as_ref())?;
        }
        Ok(())
    }

    /// Number of distinct patterns inserted so far.
    pub fn pattern_count(&self) -> usize {
        self.patterns
    }

    fn add_child(&mut self, parent: StateId, c: char, depth: u32) -> Result<StateId, PatternError> {
        let id = StateId::try_from(self.nodes.len()).map_err(|_| PatternError::TooManyStates {
            max: StateId::MAX as usize,
        })?;
        self.nodes.push(Node {
            depth,
            ..Node::default()
        });
        self.nodes[parent as usize].children.insert(c, id);
        Ok(id)
    }

    /// Compute failure and output links and freeze the trie.
    ///
    /// Nodes are visited breadth-first so every node's failure link is final
    /// before any deeper node consults it.
    pub fn build(mut self) -> Automaton {
        let mut queue: VecDeque<StateId> = VecDeque::with_capacity(self.nodes.len());

        let root_children: Vec<StateId> = self.nodes[ROOT as usize]
            .children
            .values()
            .copied()
            .collect();
        for child in root_children {
            let node = &mut self.nodes[child as usize];
            node.fail = ROOT;
            node.output = None;
            queue.push_back(child);
        }

        let mut edges: Vec<(char, StateId)> = Vec::new();
        while let Some(current) = queue.pop_front() {
            edges.clear();
            edges.extend(
                self.nodes[current as usize]
                    .children
                    .iter()
                    .map(|(&c, &child)| (c, child)),
            );
            let current_fail = self.nodes[current as usize].fail;

            for &(c, child) in &edges {
                // Starting from current's fail state never revisits `child`,
                // so the link always points strictly shallower.
                let fail = transition(&self.nodes, current_fail, c);
                let fail_node = &self.nodes[fail as usize];
                let output = if fail_node.is_terminal() {
                    Some(fail)
                } else {
                    fail_node.output
                };

                let node = &mut self.nodes[child as usize];
                node.fail = fail;
                node.output = output;
                queue.push_back(child);
            }
        }

        tracing::debug!(
            patterns = self.patterns,
            states = self.nodes.len(),
            "built automaton"
        );

        Automaton {
            nodes: self.nodes,
            patterns: self.patterns,
        }
    }
}

#[cfg(test)]
#[path = "builder_tests.rs"]
mod tests;
