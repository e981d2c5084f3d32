// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Understory Style: mutable style objects for embedded themes.
//!
//! This crate holds the pieces a theme hands to a widget host:
//!
//! - [`Style`]: a mutable bundle of visual properties for one semantic role.
//!   A theme owns its styles and reconfigures them in place; widgets only
//!   reference them.
//! - [`StyleSelector`]: the `(part, state)` slot a style is attached at.
//! - [`StyleList`]: an ordered, duplicate-free list of attached styles that
//!   hosts can keep per widget.
//!
//! ## Styles
//!
//! ```rust
//! use understory_style::{Opacity, Style, StyleProp};
//! use peniko::Color;
//!
//! let mut label = Style::new();
//! label.set_text_opa(Opacity::COVER);
//! label.set_text_color(Color::WHITE);
//!
//! assert_eq!(label.opacity(StyleProp::TextOpa), Some(Opacity::COVER));
//!
//! // Reconfiguring starts from a reset so nothing stale survives.
//! label.reset();
//! label.set_text_opa(Opacity::OPA_50);
//! assert_eq!(label.len(), 1);
//! ```
//!
//! ## Attaching
//!
//! ```rust
//! use understory_style::{Part, State, StyleList, StyleSelector};
//!
//! let mut attached = StyleList::new();
//! attached.add("panel", StyleSelector::MAIN_DEFAULT);
//! attached.add("panel", StyleSelector::new(Part::Main, State::PRESSED));
//! attached.add("panel", StyleSelector::MAIN_DEFAULT);
//! assert_eq!(attached.len(), 2);
//! ```
//!
//! ## Features
//!
//! - `std` (default): forwards to `peniko/std`.
//! - `libm`: forwards to `peniko/libm` for `no_std` builds.
//!
//! ## `no_std` Support
//!
//! This crate is `no_std` and uses `alloc`. It does not depend on `std`.

#![no_std]

extern crate alloc;

mod list;
mod selector;
mod style;

pub use list::StyleList;
pub use selector::{Part, State, StyleSelector};
pub use style::{Opacity, Style, StyleProp, StyleValue};
