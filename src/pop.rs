//! Label-directed retrieval over a path.
//!
//! A label may be bound at several steps of one path, because each extension
//! may reuse it. [`Pop`] picks which binding a labeled lookup resolves to:
//! the earliest, the most recent, or every binding in chronological order.

use crate::errors::PathError;
use crate::path::Path;

/// Retrieval policy for a labeled lookup.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Pop {
    /// The earliest binding of the label.
    First,
    /// The most recent binding of the label.
    Last,
    /// Every binding of the label, oldest to newest.
    All,
}

/// Result of a labeled lookup: one object under [`Pop::First`] or
/// [`Pop::Last`], the full binding list under [`Pop::All`].
#[derive(Debug, Clone, PartialEq)]
pub enum Popped<'a, T> {
    Single(&'a T),
    All(Vec<&'a T>),
}

impl<'a, T> Popped<'a, T> {
    /// The single bound object, or `None` for an `All` result.
    pub fn single(&self) -> Option<&'a T> {
        match self {
            Popped::Single(object) => Some(*object),
            Popped::All(_) => None,
        }
    }

    /// The bindings as a list; a `Single` result becomes a one-element list.
    pub fn into_all(self) -> Vec<&'a T> {
        match self {
            Popped::Single(object) => vec![object],
            Popped::All(objects) => objects,
        }
    }
}

impl<T> Path<T> {
    /// True iff any step of the path carries `label`. Short-circuits on the
    /// first match.
    pub fn has_label(&self, label: &str) -> bool {
        let mut cursor = self.head.as_deref();
        while let Some(segment) = cursor {
            if segment.labels.contains(label) {
                return true;
            }
            cursor = segment.previous.as_deref();
        }
        false
    }

    /// Resolves `label` on this path under `pop`.
    ///
    /// `First` and `Last` fail with [`PathError::LabelNotFound`] when no step
    /// carries the label; `All` yields an empty list instead.
    pub fn select(&self, pop: Pop, label: &str) -> Result<Popped<'_, T>, PathError> {
        match pop {
            Pop::All => Ok(Popped::All(self.bindings(label))),
            Pop::First => self
                .earliest(label)
                .map(Popped::Single)
                .ok_or_else(|| PathError::LabelNotFound(label.to_owned())),
            Pop::Last => self
                .most_recent(label)
                .map(Popped::Single)
                .ok_or_else(|| PathError::LabelNotFound(label.to_owned())),
        }
    }

    /// Directional bookkeeping comparison under `pop`.
    ///
    /// Every label bound anywhere on the receiver must also be bound on
    /// `other`, and [`select`](Self::select) under `pop` must agree for it on
    /// both paths. Labels present only on `other` are never inspected, so
    /// the relation is asymmetric; callers that need symmetry must check
    /// both directions themselves.
    pub fn pop_equals(&self, pop: Pop, other: &Path<T>) -> bool
    where
        T: PartialEq,
    {
        let mut cursor = self.head.as_deref();
        while let Some(segment) = cursor {
            for label in &segment.labels {
                if !other.has_label(label) {
                    return false;
                }
                match (self.select(pop, label), other.select(pop, label)) {
                    (Ok(mine), Ok(theirs)) if mine == theirs => {}
                    _ => return false,
                }
            }
            cursor = segment.previous.as_deref();
        }
        true
    }

    // Earliest binding: walk most-recent to oldest and keep overwriting the
    // running match, so the oldest one is left standing.
    fn earliest(&self, label: &str) -> Option<&T> {
        let mut found = None;
        let mut cursor = self.head.as_deref();
        while let Some(segment) = cursor {
            if segment.labels.contains(label) {
                found = Some(&segment.object);
            }
            cursor = segment.previous.as_deref();
        }
        found
    }

    // Most recent binding: first match on the walk back wins.
    fn most_recent(&self, label: &str) -> Option<&T> {
        let mut cursor = self.head.as_deref();
        while let Some(segment) = cursor {
            if segment.labels.contains(label) {
                return Some(&segment.object);
            }
            cursor = segment.previous.as_deref();
        }
        None
    }

    // Every binding, oldest to newest.
    fn bindings(&self, label: &str) -> Vec<&T> {
        let mut objects: Vec<&T> = Vec::new();
        let mut cursor = self.head.as_deref();
        while let Some(segment) = cursor {
            if segment.labels.contains(label) {
                objects.push(&segment.object);
            }
            cursor = segment.previous.as_deref();
        }
        objects.reverse();
        objects
    }
}
