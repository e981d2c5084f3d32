// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The widget framework seam.
//!
//! The theme never owns widgets. It reads parent links and categories
//! through [`WidgetHost`], attaches styles through it, and asks it to
//! invalidate cached styles after a (re)initialization.

use core::fmt;

use understory_style::StyleSelector;

use crate::registry::StyleHandle;
use crate::theme::ThemeId;

bitflags::bitflags! {
    /// Widget categories a theme dispatches on.
    ///
    /// A widget may belong to several categories at once, e.g. a host whose
    /// label type derives from its container type can report both. The empty
    /// set means "other": no category this theme styles.
    #[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
    pub struct WidgetClasses: u32 {
        /// The generic container/base widget type.
        const CONTAINER = 0b0000_0001;
        /// The text label type.
        const LABEL     = 0b0000_0010;
    }
}

/// The interface a widget framework exposes to a theme.
///
/// Implementations are expected to be cheap; the dispatcher calls
/// [`parent`](Self::parent) and [`classes`](Self::classes) once per widget.
pub trait WidgetHost {
    /// Non-owning widget reference.
    type Widget: Copy + fmt::Debug;
    /// Display (screen/output) reference.
    type Display: Copy + PartialEq + fmt::Debug;

    /// Returns the widget's parent, or `None` for a root/screen.
    fn parent(&self, widget: Self::Widget) -> Option<Self::Widget>;

    /// Returns every category the widget belongs to.
    fn classes(&self, widget: Self::Widget) -> WidgetClasses;

    /// Attaches a style to the widget at `selector`.
    ///
    /// Attaching the same handle at the same selector twice must not stack;
    /// [`understory_style::StyleList`] provides that behavior.
    fn add_style(&mut self, widget: Self::Widget, style: StyleHandle, selector: StyleSelector);

    /// Returns the theme currently active on `display`, if any.
    fn display_theme(&self, display: Self::Display) -> Option<ThemeId>;

    /// Marks widgets as needing style re-resolution.
    ///
    /// `None` means every widget. This is a notification only; the host
    /// re-resolves on its own schedule.
    fn report_style_change(&mut self, scope: Option<Self::Widget>);
}

/// A widget's position and categories, resolved once per dispatch.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum WidgetRole {
    /// A widget without a parent.
    Root,
    /// A widget with a parent, carrying its categories.
    Nested(WidgetClasses),
}

impl WidgetRole {
    /// Classifies `widget` through `host`.
    ///
    /// Categories are not queried for roots since the theme never uses them.
    pub fn resolve<H: WidgetHost + ?Sized>(host: &H, widget: H::Widget) -> Self {
        if host.parent(widget).is_none() {
            Self::Root
        } else {
            Self::Nested(host.classes(widget))
        }
    }
}
