// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Theme configuration: palette and font selections.

use peniko::Color;

use crate::theme::FontRoles;

/// Colors used by the basic theme's styles.
#[derive(Copy, Clone, Debug)]
pub struct BasicPalette {
    /// Background of root widgets (screens).
    pub screen: Color,
    /// Background of nested containers.
    pub panel: Color,
    /// Label text.
    pub text: Color,
}

impl BasicPalette {
    /// Near-black screens, grey panels, white text.
    pub const DEFAULT: Self = Self {
        screen: Color::from_rgba8(0, 4, 8, 0xFF),
        panel: Color::from_rgba8(0xA5, 0xA5, 0xA5, 0xFF),
        text: Color::WHITE,
    };
}

impl Default for BasicPalette {
    fn default() -> Self {
        Self::DEFAULT
    }
}

/// Everything a [`ThemeManager`](crate::ThemeManager) reads when it
/// (re)initializes.
///
/// # Example
///
/// ```rust
/// use understory_theme::{BasicPalette, FontId, FontRoles, ThemeConfig};
/// use peniko::Color;
///
/// let config = ThemeConfig {
///     palette: BasicPalette {
///         panel: Color::from_rgba8(0x30, 0x30, 0x30, 0xFF),
///         ..BasicPalette::DEFAULT
///     },
///     fonts: FontRoles::uniform(FontId(4)),
/// };
/// assert_eq!(config.fonts.large, FontId(4));
/// ```
#[derive(Copy, Clone, Debug, Default)]
pub struct ThemeConfig {
    /// Style colors.
    pub palette: BasicPalette,
    /// Font selections bound into the descriptor.
    pub fonts: FontRoles,
}
