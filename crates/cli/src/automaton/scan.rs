// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Streaming match procedure.

use std::iter::FusedIterator;
use std::str::CharIndices;

use serde::Serialize;

use super::{Automaton, ROOT, StateId};

/// One dictionary occurrence.
///
/// `start` and `end` are code-point indices into the scanned text
/// (`end` exclusive).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Match<'t> {
    start: usize,
    end: usize,
    text: &'t str,
}

impl<'t> Match<'t> {
    /// Code-point index of the first matched character.
    pub fn start(&self) -> usize {
        self.start
    }

    /// Code-point index one past the last matched character.
    pub fn end(&self) -> usize {
        self.end
    }

    /// `(start, end)` in code points.
    pub fn span(&self) -> (usize, usize) {
        (self.start, self.end)
    }

    /// The matched substring, borrowed from the scanned text.
    pub fn as_str(&self) -> &'t str {
        self.text
    }
}

/// Lazy iterator over the matches of one scan.
///
/// Created by [`Automaton::find_iter`]. Holds its own cursor state; the
/// automaton is only read.
#[derive(Debug, Clone)]
pub struct Matches<'a, 't> {
    automaton: &'a Automaton,
    text: &'t str,
    chars: CharIndices<'t>,
    state: StateId,
    /// Next terminal node to report at the current position.
    pending: Option<StateId>,
    /// Code points consumed so far.
    end: usize,
    /// Byte offset just past the last consumed code point.
    byte_end: usize,
}

impl<'a, 't> Matches<'a, 't> {
    pub(super) fn new(automaton: &'a Automaton, text: &'t str) -> Self {
        Self {
            automaton,
            text,
            chars: text.char_indices(),
            state: ROOT,
            pending: None,
            end: 0,
            byte_end: 0,
        }
    }

    fn emit(&self, len: usize) -> Match<'t> {
        // len >= 1 and at most `self.end` code points have been consumed.
        let byte_start = self.text[..self.byte_end]
            .char_indices()
            .rev()
            .nth(len - 1)
            .map_or(0, |(b, _)| b);
        Match {
            start: self.end - len,
            end: self.end,
            text: &self.text[byte_start..self.byte_end],
        }
    }
}

impl<'t> Iterator for Matches<'_, 't> {
    type Item = Match<'t>;

    fn next(&mut self) -> Option<Match<'t>> {
        loop {
            if let Some(id) = self.pending {
                let node = self.automaton.node(id);
                self.pending = node.output;
                if let Some(len) = node.pattern_len {
                    return Some(self.emit(len as usize));
                }
                continue;
            }

            let (offset, c) = self.chars.next()?;
            self.state = self.automaton.next_state(self.state, c);
            self.end += 1;
            self.byte_end = offset + c.len_utf8();
            self.pending = self.automaton.first_output(self.state);
        }
    }
}

impl FusedIterator for Matches<'_, '_> {}

#[cfg(test)]
#[path = "scan_tests.rs"]
mod tests;
