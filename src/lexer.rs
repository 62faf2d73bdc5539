//! Report tokenization
//!
//! Splits a raw report into whitespace-delimited tokens and exposes them as a
//! consumable stream with single-token lookahead.

use std::collections::VecDeque;

/// Split a raw report into its non-empty whitespace-delimited tokens
pub fn tokenize(raw: &str) -> Vec<&str> {
    raw.split_whitespace().collect()
}

/// Ordered token stream consumed left to right by the assembler
#[derive(Debug, Clone)]
pub struct TokenStream<'a> {
    tokens: VecDeque<&'a str>,
}

impl<'a> TokenStream<'a> {
    pub fn new(raw: &'a str) -> Self {
        Self {
            tokens: tokenize(raw).into(),
        }
    }

    /// Look at the next token without consuming it
    pub fn peek(&self) -> Option<&'a str> {
        self.tokens.front().copied()
    }

    /// Consume the next token only if it equals `literal`
    pub fn next_if_eq(&mut self, literal: &str) -> bool {
        if self.peek() == Some(literal) {
            self.tokens.pop_front();
            true
        } else {
            false
        }
    }

    /// Consume every remaining token
    pub fn drain_rest(&mut self) -> Vec<&'a str> {
        self.tokens.drain(..).collect()
    }

    /// Owned copy of the unconsumed tokens, for diagnostics
    pub fn remaining(&self) -> Vec<String> {
        self.tokens.iter().map(|t| t.to_string()).collect()
    }

    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }
}

impl<'a> Iterator for TokenStream<'a> {
    type Item = &'a str;

    fn next(&mut self) -> Option<Self::Item> {
        self.tokens.pop_front()
    }
}
