//! Ordered sequence forms: lists and vectors

use std::sync::Arc;

use super::Form;
use crate::lexer::Token;

/// The members of a list or vector, plus the delimiter tokens it was read
/// from.
///
/// Every "mutating" operation consumes `self` and returns the updated value.
/// Clones share members until one of them is changed, so a holder of an
/// earlier value never observes a later append.
#[derive(Debug, Clone, Default)]
pub struct SeqForm {
    members: Arc<Vec<Form>>,
    open: Option<Token>,
    close: Option<Token>,
}

impl SeqForm {
    /// Create an empty sequence.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a sequence from its members.
    pub fn from_members(members: Vec<Form>) -> Self {
        Self {
            members: Arc::new(members),
            open: None,
            close: None,
        }
    }

    /// Return the sequence with `form` added at the end.
    pub fn append(mut self, form: Form) -> Self {
        Arc::make_mut(&mut self.members).push(form);
        self
    }

    /// Return the sequence with its opening delimiter recorded.
    pub fn begin(mut self, token: Token) -> Self {
        self.open = Some(token);
        self
    }

    /// Return the sequence with its closing delimiter recorded.
    pub fn end(mut self, token: Token) -> Self {
        self.close = Some(token);
        self
    }

    /// Apply `f` to every member in order, keeping the delimiters.
    ///
    /// Stops at the first error.
    pub fn try_map<E>(&self, f: impl FnMut(&Form) -> Result<Form, E>) -> Result<Self, E> {
        let members = self.members.iter().map(f).collect::<Result<Vec<_>, E>>()?;
        Ok(Self {
            members: Arc::new(members),
            open: self.open.clone(),
            close: self.close.clone(),
        })
    }

    /// All members.
    pub fn members(&self) -> &[Form] {
        &self.members
    }

    /// Iterate over the members.
    pub fn iter(&self) -> std::slice::Iter<'_, Form> {
        self.members.iter()
    }

    /// Number of members.
    pub fn len(&self) -> usize {
        self.members.len()
    }

    /// Whether there are no members.
    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }

    /// The first member, if any.
    pub fn first(&self) -> Option<&Form> {
        self.members.first()
    }

    /// Everything after the first member.
    pub fn rest(&self) -> &[Form] {
        self.members.get(1..).unwrap_or(&[])
    }

    /// The opening delimiter token, if read from source.
    pub fn open_token(&self) -> Option<&Token> {
        self.open.as_ref()
    }

    /// The closing delimiter token, if read from source.
    pub fn close_token(&self) -> Option<&Token> {
        self.close.as_ref()
    }
}

impl PartialEq for SeqForm {
    fn eq(&self, other: &Self) -> bool {
        self.members == other.members
    }
}
