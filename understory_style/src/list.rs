// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Per-widget list of attached styles.

use smallvec::SmallVec;

use crate::selector::StyleSelector;

/// An ordered list of styles attached to one widget.
///
/// `S` is whatever non-owning reference the host uses for a style, usually a
/// small copyable handle. Attaching the same `(style, selector)` pair twice
/// keeps a single entry, so themes can be re-applied freely.
///
/// Entries keep insertion order; later entries take precedence when a
/// renderer resolves properties.
///
/// # Example
///
/// ```rust
/// use understory_style::{StyleList, StyleSelector};
///
/// let mut list = StyleList::new();
/// assert!(list.add(7_u32, StyleSelector::MAIN_DEFAULT));
/// assert!(!list.add(7_u32, StyleSelector::MAIN_DEFAULT));
/// assert_eq!(list.len(), 1);
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct StyleList<S> {
    entries: SmallVec<[(S, StyleSelector); 4]>,
}

impl<S> Default for StyleList<S> {
    fn default() -> Self {
        Self {
            entries: SmallVec::new(),
        }
    }
}

impl<S> StyleList<S>
where
    S: Copy + PartialEq,
{
    /// Creates an empty list.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Attaches `style` at `selector`.
    ///
    /// Returns `false` if the exact pair was already attached.
    pub fn add(&mut self, style: S, selector: StyleSelector) -> bool {
        if self.contains(style, selector) {
            return false;
        }
        self.entries.push((style, selector));
        true
    }

    /// Detaches `style` at `selector`. Returns `true` if it was attached.
    pub fn remove(&mut self, style: S, selector: StyleSelector) -> bool {
        let before = self.entries.len();
        self.entries.retain(|e| *e != (style, selector));
        self.entries.len() != before
    }

    /// Detaches `style` from every selector. Returns how many were removed.
    pub fn remove_all(&mut self, style: S) -> usize {
        let before = self.entries.len();
        self.entries.retain(|(s, _)| *s != style);
        before - self.entries.len()
    }

    /// Detaches everything.
    pub fn clear(&mut self) {
        self.entries.clear();
    }

    /// Returns `true` if `style` is attached at `selector`.
    #[must_use]
    pub fn contains(&self, style: S, selector: StyleSelector) -> bool {
        self.entries.contains(&(style, selector))
    }

    /// Returns the number of attached entries.
    #[must_use]
    #[inline]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` if nothing is attached.
    #[must_use]
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterates entries in attachment order.
    pub fn iter(&self) -> impl Iterator<Item = (S, StyleSelector)> + '_ {
        self.entries.iter().copied()
    }
}
