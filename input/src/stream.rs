//! Ordered view over the tokens a parse has not consumed yet.

use std::collections::VecDeque;

use crate::error::{InputError, Result};

/// Remaining input tokens, consumed from the front.
///
/// [`push_front`](TokenStream::push_front) only exists to undo a rejected
/// one-token look-ahead, so a push followed by a pop returns the same token.
#[derive(Debug, Clone, Default)]
pub struct TokenStream {
    tokens: VecDeque<String>,
}

impl TokenStream {
    pub fn new<I, S>(tokens: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            tokens: tokens.into_iter().map(Into::into).collect(),
        }
    }

    pub fn has_next(&self) -> bool {
        !self.tokens.is_empty()
    }

    /// Removes and returns the next token.
    ///
    /// # Errors
    ///
    /// Returns [`InputError::EmptyStream`] when no tokens remain.
    pub fn pop_front(&mut self) -> Result<String> {
        self.tokens.pop_front().ok_or(InputError::EmptyStream)
    }

    /// Restores a token to the front of the stream.
    pub fn push_front(&mut self, token: String) {
        self.tokens.push_front(token);
    }

    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }
}
