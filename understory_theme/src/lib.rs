// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Understory Theme: style registry, lifecycle, and widget dispatch.
//!
//! A theme decides which [`Style`](understory_style::Style)s are attached to
//! which widget. This crate provides a small "basic" theme built from three
//! pieces:
//!
//! - [`StyleRegistry`]: one style per [`StyleRole`], allocated once and
//!   reconfigured in place on every (re)initialization.
//! - [`Theme`]: the installed descriptor (display binding, fonts, dispatch
//!   callback).
//! - [`ThemeManager`]: the caller-owned handle that ties them together.
//!
//! The widget tree stays with the host; the theme talks to it only through
//! [`WidgetHost`].
//!
//! ## Example
//!
//! ```rust
//! use understory_style::{StyleList, StyleSelector};
//! use understory_theme::{
//!     StyleHandle, StyleRole, ThemeId, ThemeManager, WidgetClasses, WidgetHost,
//! };
//!
//! #[derive(Default)]
//! struct Host {
//!     // (parent, classes, attached styles)
//!     widgets: Vec<(Option<usize>, WidgetClasses, StyleList<StyleHandle>)>,
//!     invalidations: usize,
//! }
//!
//! impl WidgetHost for Host {
//!     type Widget = usize;
//!     type Display = u8;
//!
//!     fn parent(&self, w: usize) -> Option<usize> { self.widgets[w].0 }
//!     fn classes(&self, w: usize) -> WidgetClasses { self.widgets[w].1 }
//!     fn add_style(&mut self, w: usize, style: StyleHandle, sel: StyleSelector) {
//!         self.widgets[w].2.add(style, sel);
//!     }
//!     fn display_theme(&self, _display: u8) -> Option<ThemeId> { None }
//!     fn report_style_change(&mut self, _scope: Option<usize>) { self.invalidations += 1; }
//! }
//!
//! let mut host = Host::default();
//! host.widgets.push((None, WidgetClasses::CONTAINER, StyleList::new()));
//! host.widgets.push((Some(0), WidgetClasses::LABEL, StyleList::new()));
//!
//! let mut themes: ThemeManager<Host> = ThemeManager::default();
//! assert!(!themes.is_inited());
//! themes.init_theme(&mut host, None).unwrap();
//! assert_eq!(host.invalidations, 1);
//!
//! themes.apply(&mut host, 0);
//! themes.apply(&mut host, 1);
//!
//! let (handle, _) = host.widgets[1].2.iter().next().unwrap();
//! assert_eq!(handle.role(), StyleRole::Label);
//! assert!(themes.style(handle).is_some());
//! ```
//!
//! ## Features
//!
//! - `std` (default): forwards to `peniko/std`.
//! - `libm`: forwards to `peniko/libm` for `no_std` builds.
//!
//! ## Logging
//!
//! Lifecycle events are emitted through [`tracing`] (`debug` for
//! allocation, initialization and teardown, `warn` for allocation failure,
//! `trace` for each dispatch). No subscriber is installed.
//!
//! ## `no_std` Support
//!
//! This crate is `no_std` and uses `alloc`. It does not depend on `std`.

#![no_std]

extern crate alloc;

mod apply;
mod config;
mod error;
mod host;
mod manager;
mod registry;
mod theme;

pub use apply::{ApplyFn, apply_basic};
pub use config::{BasicPalette, ThemeConfig};
pub use error::{AllocError, ThemeError};
pub use host::{WidgetClasses, WidgetHost, WidgetRole};
pub use manager::ThemeManager;
pub use registry::{
    Lifecycle, StyleAllocator, StyleHandle, StyleRegistry, StyleRole, SystemAllocator,
};
pub use theme::{DEFAULT_FONT, FontId, FontRoles, Theme, ThemeId};
