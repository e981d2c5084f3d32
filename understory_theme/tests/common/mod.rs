// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Shared helpers for theme integration tests: an in-memory widget tree
//! and an allocator that counts and can fail.

#![allow(
    missing_docs,
    dead_code,
    reason = "Integration-test helper module; not every test uses every helper."
)]

use understory_style::{Style, StyleList, StyleSelector};
use understory_theme::{
    AllocError, StyleAllocator, StyleHandle, StyleRole, SystemAllocator, ThemeId, WidgetClasses,
    WidgetHost,
};

#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub(crate) struct WidgetId(usize);

#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub(crate) struct DisplayId(pub(crate) u8);

#[derive(Debug)]
struct Node {
    parent: Option<WidgetId>,
    classes: WidgetClasses,
    styles: StyleList<StyleHandle>,
}

/// A flat widget arena that records everything the theme asks of it.
#[derive(Debug, Default)]
pub(crate) struct MockHost {
    nodes: Vec<Node>,
    display_themes: Vec<(DisplayId, ThemeId)>,
    /// Every `report_style_change` scope, in call order.
    pub(crate) invalidations: Vec<Option<WidgetId>>,
    /// Number of `add_style` calls, including duplicates.
    pub(crate) add_calls: usize,
}

impl MockHost {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    pub(crate) fn add_screen(&mut self) -> WidgetId {
        self.insert(None, WidgetClasses::CONTAINER)
    }

    pub(crate) fn add_child(&mut self, parent: WidgetId, classes: WidgetClasses) -> WidgetId {
        self.insert(Some(parent), classes)
    }

    fn insert(&mut self, parent: Option<WidgetId>, classes: WidgetClasses) -> WidgetId {
        self.nodes.push(Node {
            parent,
            classes,
            styles: StyleList::new(),
        });
        WidgetId(self.nodes.len() - 1)
    }

    pub(crate) fn styles(&self, widget: WidgetId) -> &StyleList<StyleHandle> {
        &self.nodes[widget.0].styles
    }

    /// Roles attached to `widget`, in attachment order.
    pub(crate) fn roles(&self, widget: WidgetId) -> Vec<StyleRole> {
        self.styles(widget).iter().map(|(h, _)| h.role()).collect()
    }

    pub(crate) fn set_display_theme(&mut self, display: DisplayId, theme: ThemeId) {
        self.display_themes.retain(|(d, _)| *d != display);
        self.display_themes.push((display, theme));
    }
}

impl WidgetHost for MockHost {
    type Widget = WidgetId;
    type Display = DisplayId;

    fn parent(&self, widget: WidgetId) -> Option<WidgetId> {
        self.nodes[widget.0].parent
    }

    fn classes(&self, widget: WidgetId) -> WidgetClasses {
        self.nodes[widget.0].classes
    }

    fn add_style(&mut self, widget: WidgetId, style: StyleHandle, selector: StyleSelector) {
        self.add_calls += 1;
        self.nodes[widget.0].styles.add(style, selector);
    }

    fn display_theme(&self, display: DisplayId) -> Option<ThemeId> {
        self.display_themes
            .iter()
            .find(|(d, _)| *d == display)
            .map(|(_, t)| *t)
    }

    fn report_style_change(&mut self, scope: Option<WidgetId>) {
        self.invalidations.push(scope);
    }
}

/// Counts allocation requests and fails them on demand.
#[derive(Debug, Default)]
pub(crate) struct CountingAllocator {
    pub(crate) calls: usize,
    pub(crate) fail: bool,
}

impl StyleAllocator for CountingAllocator {
    fn allocate(&mut self, slots: usize) -> Result<Vec<Style>, AllocError> {
        self.calls += 1;
        if self.fail {
            return Err(AllocError::new(slots));
        }
        SystemAllocator.allocate(slots)
    }
}
