//! Hash-map forms

use std::sync::Arc;

use indexmap::IndexMap;

use super::{Form, MapKey};
use crate::error::ReadError;
use crate::lexer::Token;

/// A hash-map form: the alternating key/value members as written, plus an
/// index from key to value.
///
/// The index uses `IndexMap` so keys iterate in first-insertion order. A
/// repeated key keeps its original position and takes the newest value.
///
/// ```
/// use sprig::{Form, MapForm};
///
/// let map = MapForm::new()
///     .assoc(Form::keyword("a"), Form::int(1))
///     .and_then(|m| m.assoc(Form::keyword("b"), Form::int(2)))
///     .unwrap();
/// assert_eq!(map.get(&Form::keyword("a")), Some(&Form::int(1)));
/// assert_eq!(map.get(&Form::keyword("b")), Some(&Form::int(2)));
/// ```
#[derive(Debug, Clone, Default)]
pub struct MapForm {
    members: Arc<Vec<Form>>,
    index: Arc<IndexMap<MapKey, (Form, Form)>>,
    open: Option<Token>,
    close: Option<Token>,
}

impl MapForm {
    /// Create an empty map.
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a map from alternating keys and values.
    pub fn from_members(members: Vec<Form>) -> Result<Self, ReadError> {
        members
            .into_iter()
            .try_fold(Self::new(), |map, form| map.append(form))?
            .complete()
    }

    /// Return the map with one more member appended.
    ///
    /// At an even position the member is a key and must be a string or
    /// keyword; at an odd position it is the value for the preceding key.
    /// Only the reader grows a map one member at a time, and it calls
    /// [`MapForm::complete`] before handing the map out.
    pub(crate) fn append(mut self, form: Form) -> Result<Self, ReadError> {
        if self.members.len() % 2 == 0 {
            MapKey::from_form(&form)?;
            Arc::make_mut(&mut self.members).push(form);
            return Ok(self);
        }

        let key = self.members[self.members.len() - 1].clone();
        let index_key = MapKey::from_form(&key)?;
        Arc::make_mut(&mut self.index)
            .entry(index_key)
            .and_modify(|entry| entry.1 = form.clone())
            .or_insert_with(|| (key, form.clone()));
        Arc::make_mut(&mut self.members).push(form);
        Ok(self)
    }

    /// Return the map with `key` bound to `value`.
    ///
    /// Maps outside the reader only grow in pairs, so the member count
    /// stays even.
    pub fn assoc(self, key: Form, value: Form) -> Result<Self, ReadError> {
        self.complete()?.append(key)?.append(value)
    }

    /// Check that every key has a value.
    pub(crate) fn complete(self) -> Result<Self, ReadError> {
        if let Some(dangling) = self.dangling_key() {
            return Err(ReadError::UnpairedMapKey {
                key: format!("{:?}", dangling),
            });
        }
        Ok(self)
    }

    /// The key still waiting for its value, if the member count is odd.
    pub(crate) fn dangling_key(&self) -> Option<&Form> {
        if self.members.len() % 2 == 1 {
            self.members.last()
        } else {
            None
        }
    }

    /// Return the map with its opening delimiter recorded.
    pub fn begin(mut self, token: Token) -> Self {
        self.open = Some(token);
        self
    }

    /// Return the map with its closing delimiter recorded.
    pub fn end(mut self, token: Token) -> Self {
        self.close = Some(token);
        self
    }

    /// Look up the value for `key`.
    ///
    /// Keys that could never be map keys simply find nothing.
    pub fn get(&self, key: &Form) -> Option<&Form> {
        let index_key = MapKey::from_form(key).ok()?;
        self.index.get(&index_key).map(|(_, value)| value)
    }

    /// Whether `key` is bound.
    pub fn contains_key(&self, key: &Form) -> bool {
        self.get(key).is_some()
    }

    /// Keys in first-insertion order.
    pub fn keys(&self) -> impl Iterator<Item = &Form> {
        self.index.values().map(|(key, _)| key)
    }

    /// Key/value pairs in first-insertion order, with each key's latest value.
    pub fn entries(&self) -> impl Iterator<Item = (&Form, &Form)> {
        self.index.values().map(|(key, value)| (key, value))
    }

    /// Number of distinct keys.
    pub fn len(&self) -> usize {
        self.index.len()
    }

    /// Whether the map has no keys.
    pub fn is_empty(&self) -> bool {
        self.index.is_empty()
    }

    /// The members in the order they were appended.
    pub fn members(&self) -> &[Form] {
        &self.members
    }

    /// Apply `f` to every value in member order, keeping keys and delimiters.
    pub fn try_map_values<E>(
        &self,
        mut f: impl FnMut(&Form) -> Result<Form, E>,
    ) -> Result<Self, E> {
        let mut members = Vec::with_capacity(self.members.len());
        let mut index: IndexMap<MapKey, (Form, Form)> = IndexMap::with_capacity(self.index.len());
        for pair in self.members.chunks(2) {
            let key = pair[0].clone();
            members.push(key.clone());
            if let Some(value) = pair.get(1) {
                let value = f(value)?;
                members.push(value.clone());
                // Keys were validated on the way in
                if let Ok(index_key) = MapKey::from_form(&key) {
                    index
                        .entry(index_key)
                        .and_modify(|entry| entry.1 = value.clone())
                        .or_insert((key, value));
                }
            }
        }
        Ok(Self {
            members: Arc::new(members),
            index: Arc::new(index),
            open: self.open.clone(),
            close: self.close.clone(),
        })
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

impl PartialEq for MapForm {
    /// Maps are equal when they bind the same keys to equal values.
    fn eq(&self, other: &Self) -> bool {
        self.len() == other.len()
            && self
                .index
                .iter()
                .all(|(key, (_, value))| other.index.get(key).is_some_and(|(_, v)| v == value))
    }
}
