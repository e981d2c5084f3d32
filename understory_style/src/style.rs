// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Mutable style objects.
//!
//! This module provides [`Style`], a container of resolved visual properties
//! for one semantic role (a screen background, a panel, a label's text).
//! Unlike a per-element property store, a style is shared: widgets hold a
//! handle to it and the owner reconfigures it in place.

use core::fmt;

use peniko::Color;
use smallvec::SmallVec;

/// Opacity in the `0..=255` range.
///
/// `0` is fully transparent and `255` fully covers what is below.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Opacity(pub u8);

impl Opacity {
    /// Fully transparent.
    pub const TRANSP: Self = Self(0);
    /// 10% opacity.
    pub const OPA_10: Self = Self(25);
    /// 20% opacity.
    pub const OPA_20: Self = Self(51);
    /// 30% opacity.
    pub const OPA_30: Self = Self(76);
    /// 40% opacity.
    pub const OPA_40: Self = Self(102);
    /// 50% opacity.
    pub const OPA_50: Self = Self(127);
    /// 60% opacity.
    pub const OPA_60: Self = Self(153);
    /// 70% opacity.
    pub const OPA_70: Self = Self(178);
    /// 80% opacity.
    pub const OPA_80: Self = Self(204);
    /// 90% opacity.
    pub const OPA_90: Self = Self(229);
    /// Fully opaque.
    pub const COVER: Self = Self(255);

    /// Returns the opacity as a fraction in `0.0..=1.0`.
    #[must_use]
    #[inline]
    pub fn fraction(self) -> f32 {
        f32::from(self.0) / 255.0
    }
}

/// The kind of a style property.
///
/// The ordering is used to keep [`Style`] entries sorted.
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum StyleProp {
    /// Background fill color.
    BgColor,
    /// Background opacity.
    BgOpa,
    /// Border color.
    BorderColor,
    /// Border opacity.
    BorderOpa,
    /// Border width in pixels.
    BorderWidth,
    /// Text color.
    TextColor,
    /// Text opacity.
    TextOpa,
}

/// A property value stored in a [`Style`].
#[derive(Copy, Clone, Debug)]
pub enum StyleValue {
    /// A color value.
    Color(Color),
    /// An opacity value.
    Opacity(Opacity),
    /// A signed pixel coordinate or length.
    Coord(i32),
}

/// A mutable collection of style properties for one semantic role.
///
/// A new style is in the initialized state: no properties set. Reconfiguring
/// an existing style must go through [`Style::reset`] first so properties
/// from an earlier pass cannot survive.
///
/// # Example
///
/// ```rust
/// use understory_style::{Opacity, Style, StyleProp};
/// use peniko::Color;
///
/// let mut style = Style::new();
/// style.set_bg_opa(Opacity::COVER);
/// style.set_bg_color(Color::from_rgba8(0xA5, 0xA5, 0xA5, 0xFF));
/// assert_eq!(style.len(), 2);
/// assert_eq!(style.opacity(StyleProp::BgOpa), Some(Opacity::COVER));
///
/// style.reset();
/// assert!(style.is_empty());
/// ```
#[derive(Clone, Default)]
pub struct Style {
    /// Sorted by `StyleProp` for binary search lookup.
    entries: SmallVec<[(StyleProp, StyleValue); 4]>,
}

impl Style {
    /// Creates an empty, initialized style.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Clears every property, returning the style to its initialized state.
    pub fn reset(&mut self) {
        self.entries.clear();
    }

    /// Returns `true` if no property is set.
    #[must_use]
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Returns the number of properties set.
    #[must_use]
    #[inline]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Sets a property, replacing any previous value for it.
    pub fn set(&mut self, prop: StyleProp, value: StyleValue) {
        match self.entries.binary_search_by_key(&prop, |(p, _)| *p) {
            Ok(idx) => self.entries[idx].1 = value,
            Err(idx) => self.entries.insert(idx, (prop, value)),
        }
    }

    /// Removes a property. Returns `true` if it was set.
    pub fn remove(&mut self, prop: StyleProp) -> bool {
        match self.entries.binary_search_by_key(&prop, |(p, _)| *p) {
            Ok(idx) => {
                self.entries.remove(idx);
                true
            }
            Err(_) => false,
        }
    }

    /// Gets the value of a property, if set.
    #[must_use]
    #[inline]
    pub fn get(&self, prop: StyleProp) -> Option<StyleValue> {
        self.entries
            .binary_search_by_key(&prop, |(p, _)| *p)
            .ok()
            .map(|idx| self.entries[idx].1)
    }

    /// Returns `true` if the property is set.
    #[must_use]
    #[inline]
    pub fn contains(&self, prop: StyleProp) -> bool {
        self.entries
            .binary_search_by_key(&prop, |(p, _)| *p)
            .is_ok()
    }

    /// Gets a color property. Returns `None` if unset or not a color.
    #[must_use]
    pub fn color(&self, prop: StyleProp) -> Option<Color> {
        match self.get(prop)? {
            StyleValue::Color(color) => Some(color),
            _ => None,
        }
    }

    /// Gets an opacity property. Returns `None` if unset or not an opacity.
    #[must_use]
    pub fn opacity(&self, prop: StyleProp) -> Option<Opacity> {
        match self.get(prop)? {
            StyleValue::Opacity(opa) => Some(opa),
            _ => None,
        }
    }

    /// Gets a coordinate property. Returns `None` if unset or not a coordinate.
    #[must_use]
    pub fn coord(&self, prop: StyleProp) -> Option<i32> {
        match self.get(prop)? {
            StyleValue::Coord(v) => Some(v),
            _ => None,
        }
    }

    /// Returns an iterator over the set properties, in property order.
    pub fn props(&self) -> impl Iterator<Item = StyleProp> + '_ {
        self.entries.iter().map(|(p, _)| *p)
    }

    /// Sets [`StyleProp::BgColor`].
    pub fn set_bg_color(&mut self, color: Color) {
        self.set(StyleProp::BgColor, StyleValue::Color(color));
    }

    /// Sets [`StyleProp::BgOpa`].
    pub fn set_bg_opa(&mut self, opa: Opacity) {
        self.set(StyleProp::BgOpa, StyleValue::Opacity(opa));
    }

    /// Sets [`StyleProp::BorderColor`].
    pub fn set_border_color(&mut self, color: Color) {
        self.set(StyleProp::BorderColor, StyleValue::Color(color));
    }

    /// Sets [`StyleProp::BorderOpa`].
    pub fn set_border_opa(&mut self, opa: Opacity) {
        self.set(StyleProp::BorderOpa, StyleValue::Opacity(opa));
    }

    /// Sets [`StyleProp::BorderWidth`].
    pub fn set_border_width(&mut self, width: i32) {
        self.set(StyleProp::BorderWidth, StyleValue::Coord(width));
    }

    /// Sets [`StyleProp::TextColor`].
    pub fn set_text_color(&mut self, color: Color) {
        self.set(StyleProp::TextColor, StyleValue::Color(color));
    }

    /// Sets [`StyleProp::TextOpa`].
    pub fn set_text_opa(&mut self, opa: Opacity) {
        self.set(StyleProp::TextOpa, StyleValue::Opacity(opa));
    }
}

impl fmt::Debug for Style {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_map()
            .entries(self.entries.iter().map(|(p, v)| (p, v)))
            .finish()
    }
}
