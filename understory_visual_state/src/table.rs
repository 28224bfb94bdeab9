// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Per-instance transition tables.
//!
//! A [`TransitionTable`] maps every [`StateName`] to an optional transition
//! handle. It is built once, when a control's template is bound, and is
//! read-only afterwards. Each control owns its own table; tables are never
//! shared between instances, even when their templates look identical.
//!
//! ## Binding from a template
//!
//! ```
//! use understory_visual_state::{StateName, TransitionTable};
//!
//! // A template that only defines two states, keyed by name.
//! let resources = [("Normal State", 10_u32), ("Pressed State", 11)];
//! let table = TransitionTable::bind(|key| {
//!     resources.iter().find(|(k, _)| *k == key).map(|(_, v)| *v)
//! });
//!
//! assert_eq!(table.get(StateName::Normal), Some(&10));
//! assert_eq!(table.get(StateName::MouseOver), None);
//! assert_eq!(table.len(), 2);
//! ```

use crate::names::StateName;

/// An immutable lookup from state names to transition handles.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TransitionTable<T> {
    slots: [Option<T>; StateName::COUNT],
}

impl<T> Default for TransitionTable<T> {
    fn default() -> Self {
        Self::empty()
    }
}

impl<T> TransitionTable<T> {
    /// A table with no transitions.
    pub fn empty() -> Self {
        Self {
            slots: core::array::from_fn(|_| None),
        }
    }

    /// Resolve every name in the vocabulary through `lookup` once.
    ///
    /// `lookup` receives template keys (see [`StateName::as_str`]) and returns
    /// the transition published under that key, if any.
    pub fn bind(mut lookup: impl FnMut(&str) -> Option<T>) -> Self {
        Self {
            slots: core::array::from_fn(|i| lookup(StateName::ALL[i].as_str())),
        }
    }

    /// The transition bound to `name`, if any.
    #[inline]
    pub fn get(&self, name: StateName) -> Option<&T> {
        self.slots[name.index()].as_ref()
    }

    /// Returns `true` if a transition is bound to `name`.
    #[inline]
    pub fn contains(&self, name: StateName) -> bool {
        self.slots[name.index()].is_some()
    }

    /// Number of bound transitions.
    pub fn len(&self) -> usize {
        self.slots.iter().filter(|s| s.is_some()).count()
    }

    /// Returns `true` if no transition is bound.
    pub fn is_empty(&self) -> bool {
        self.slots.iter().all(Option::is_none)
    }

    /// Iterate bound transitions in vocabulary order.
    pub fn iter(&self) -> impl Iterator<Item = (StateName, &T)> + '_ {
        StateName::ALL
            .into_iter()
            .zip(self.slots.iter())
            .filter_map(|(name, slot)| slot.as_ref().map(|t| (name, t)))
    }

    /// Walk `chain` left to right and return the first bound entry.
    pub fn first_of(&self, chain: &[StateName]) -> Option<(StateName, &T)> {
        chain
            .iter()
            .find_map(|&name| self.get(name).map(|t| (name, t)))
    }
}

/// Incremental builder for a [`TransitionTable`].
///
/// Useful when a template's transitions are discovered one by one rather
/// than through a keyed lookup.
///
/// ```
/// use understory_visual_state::{StateName, TransitionTableBuilder};
///
/// let table = TransitionTableBuilder::new()
///     .with(StateName::Normal, "n")
///     .with(StateName::Checked, "c")
///     .build();
/// assert!(table.contains(StateName::Checked));
/// assert!(!table.contains(StateName::Indeterminate));
/// ```
#[derive(Clone, Debug)]
pub struct TransitionTableBuilder<T> {
    table: TransitionTable<T>,
}

impl<T> Default for TransitionTableBuilder<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> TransitionTableBuilder<T> {
    /// Start from an empty table.
    pub fn new() -> Self {
        Self {
            table: TransitionTable::empty(),
        }
    }

    /// Bind `transition` to `name`, replacing any earlier binding.
    #[must_use]
    pub fn with(mut self, name: StateName, transition: T) -> Self {
        self.table.slots[name.index()] = Some(transition);
        self
    }

    /// Finish the table. It cannot be changed afterwards.
    pub fn build(self) -> TransitionTable<T> {
        self.table
    }
}
