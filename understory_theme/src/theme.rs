// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The theme descriptor and its identity and font types.

use core::fmt;
use core::sync::atomic::{AtomicU32, Ordering};

use crate::apply::ApplyFn;
use crate::host::WidgetHost;

static NEXT_THEME_ID: AtomicU32 = AtomicU32::new(1);

/// Identity of one theme manager and the descriptor it installs.
///
/// Hosts store this per display to record which theme is active there.
/// Every [`ThemeManager`](crate::ThemeManager) gets a distinct id.
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ThemeId(u32);

impl ThemeId {
    pub(crate) fn next() -> Self {
        Self(NEXT_THEME_ID.fetch_add(1, Ordering::Relaxed))
    }

    /// Returns the raw id.
    #[must_use]
    #[inline]
    pub const fn get(self) -> u32 {
        self.0
    }
}

impl fmt::Debug for ThemeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("ThemeId").field(&self.0).finish()
    }
}

/// An opaque handle to a font owned by the host's font system.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct FontId(pub u32);

/// The font used for every role unless configured otherwise.
pub const DEFAULT_FONT: FontId = FontId(0);

/// Font selections for the small, normal, and large text roles.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct FontRoles {
    /// Font for small text.
    pub small: FontId,
    /// Font for body text.
    pub normal: FontId,
    /// Font for large text such as titles.
    pub large: FontId,
}

impl FontRoles {
    /// [`DEFAULT_FONT`] in all three roles.
    pub const DEFAULT: Self = Self::uniform(DEFAULT_FONT);

    /// Uses `font` for every role.
    #[must_use]
    pub const fn uniform(font: FontId) -> Self {
        Self {
            small: font,
            normal: font,
            large: font,
        }
    }
}

impl Default for FontRoles {
    fn default() -> Self {
        Self::DEFAULT
    }
}

/// An installed theme: display binding, fonts, and the dispatch callback.
///
/// Descriptors are produced by
/// [`ThemeManager::init_theme`](crate::ThemeManager::init_theme) and replaced
/// wholesale on every re-initialization.
pub struct Theme<H: WidgetHost> {
    pub(crate) id: ThemeId,
    pub(crate) display: Option<H::Display>,
    pub(crate) fonts: FontRoles,
    pub(crate) apply: ApplyFn<H>,
}

impl<H: WidgetHost> Theme<H> {
    /// Returns the theme's identity.
    #[must_use]
    pub fn id(&self) -> ThemeId {
        self.id
    }

    /// Returns the display this theme is bound to, or `None` for the default.
    #[must_use]
    pub fn display(&self) -> Option<H::Display> {
        self.display
    }

    /// Returns all three font roles.
    #[must_use]
    pub fn fonts(&self) -> FontRoles {
        self.fonts
    }

    /// Returns the small-text font.
    #[must_use]
    pub fn font_small(&self) -> FontId {
        self.fonts.small
    }

    /// Returns the body-text font.
    #[must_use]
    pub fn font_normal(&self) -> FontId {
        self.fonts.normal
    }

    /// Returns the large-text font.
    #[must_use]
    pub fn font_large(&self) -> FontId {
        self.fonts.large
    }

    /// Returns the dispatch callback the host invokes per widget.
    #[must_use]
    pub fn apply_fn(&self) -> ApplyFn<H> {
        self.apply
    }
}

impl<H: WidgetHost> fmt::Debug for Theme<H> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Theme")
            .field("id", &self.id)
            .field("display", &self.display)
            .field("fonts", &self.fonts)
            .finish_non_exhaustive()
    }
}
