// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The caller-owned theme manager.

use core::fmt;

use understory_style::Style;

use crate::apply::apply_basic;
use crate::config::ThemeConfig;
use crate::error::ThemeError;
use crate::host::WidgetHost;
use crate::registry::{StyleAllocator, StyleHandle, StyleRegistry, SystemAllocator};
use crate::theme::{Theme, ThemeId};

/// Owns one theme: its style registry, its descriptor, and its configuration.
///
/// Hosts keep only [`StyleHandle`]s and [`ThemeId`]s; every style lives here
/// until [`deinit`](Self::deinit) or drop.
///
/// The manager is not synchronized. Re-initialization mutates the styles
/// that [`apply`](Self::apply) hands out, so callers must not interleave the
/// two; `&mut self` on [`init_theme`](Self::init_theme) enforces this within
/// safe code.
///
/// `A` is the source of registry storage; see [`StyleAllocator`].
pub struct ThemeManager<H: WidgetHost, A = SystemAllocator> {
    id: ThemeId,
    config: ThemeConfig,
    registry: StyleRegistry,
    theme: Option<Theme<H>>,
    allocator: A,
}

impl<H: WidgetHost> ThemeManager<H> {
    /// Creates a manager using the global allocator.
    ///
    /// Nothing is allocated until [`init_theme`](Self::init_theme).
    #[must_use]
    pub fn new(config: ThemeConfig) -> Self {
        Self::with_allocator(config, SystemAllocator)
    }
}

impl<H: WidgetHost> Default for ThemeManager<H> {
    fn default() -> Self {
        Self::new(ThemeConfig::default())
    }
}

impl<H: WidgetHost, A: StyleAllocator> ThemeManager<H, A> {
    /// Creates a manager drawing registry storage from `allocator`.
    #[must_use]
    pub fn with_allocator(config: ThemeConfig, allocator: A) -> Self {
        let id = ThemeId::next();
        Self {
            id,
            config,
            registry: StyleRegistry::new(id),
            theme: None,
            allocator,
        }
    }

    /// Returns the identity shared by this manager and its descriptor.
    #[must_use]
    pub fn id(&self) -> ThemeId {
        self.id
    }

    /// Returns the configuration used by the next initialization.
    #[must_use]
    pub fn config(&self) -> &ThemeConfig {
        &self.config
    }

    /// Replaces the configuration.
    ///
    /// Styles and fonts change on the next [`init_theme`](Self::init_theme).
    pub fn set_config(&mut self, config: ThemeConfig) {
        self.config = config;
    }

    /// Returns `true` once registry storage exists.
    ///
    /// This is a pure probe and never allocates.
    #[must_use]
    pub fn is_inited(&self) -> bool {
        self.registry.is_allocated()
    }

    /// Installs or refreshes the theme.
    ///
    /// Allocates the registry on first use, builds (or resets and rebuilds)
    /// every style from the current configuration, and replaces the
    /// descriptor. When `display` is `None`, or the host reports this theme
    /// as active on `display`, every widget is marked for style
    /// re-resolution.
    ///
    /// Repeated calls converge to the same state.
    ///
    /// # Errors
    ///
    /// Returns [`ThemeError::Allocation`] if registry storage cannot be
    /// obtained. The previous descriptor, if any, is left untouched.
    pub fn init_theme(
        &mut self,
        host: &mut H,
        display: Option<H::Display>,
    ) -> Result<&Theme<H>, ThemeError> {
        let allocated = self
            .registry
            .ensure_allocated(&mut self.allocator)
            .inspect_err(|err| {
                tracing::warn!(theme = self.id.get(), %err, "style registry allocation failed");
            })?;
        if allocated {
            tracing::debug!(theme = self.id.get(), "style registry allocated");
        }

        let theme = Theme {
            id: self.id,
            display,
            fonts: self.config.fonts,
            apply: apply_basic::<H>,
        };

        self.registry.configure(&self.config.palette);

        let notify = match display {
            None => true,
            Some(target) => host.display_theme(target) == Some(self.id),
        };
        tracing::debug!(
            theme = self.id.get(),
            display = ?theme.display,
            notify,
            "theme initialized"
        );
        if notify {
            host.report_style_change(None);
        }

        Ok(&*self.theme.insert(theme))
    }

    /// Returns the installed descriptor, or `None` before the first
    /// successful initialization.
    #[must_use]
    pub fn get_theme(&self) -> Option<&Theme<H>> {
        self.theme
            .as_ref()
            .filter(|_| self.registry.is_allocated())
    }

    /// Runs the installed dispatch callback for `widget`.
    ///
    /// # Panics
    ///
    /// Panics if the theme has not been initialized.
    pub fn apply(&self, host: &mut H, widget: H::Widget) {
        let Some(theme) = self.get_theme() else {
            panic!("theme applied before initialization");
        };
        (theme.apply)(&self.registry, host, widget);
    }

    /// Resolves a handle previously attached by this theme.
    ///
    /// Returns `None` for handles from another manager or after
    /// [`deinit`](Self::deinit).
    #[must_use]
    pub fn style(&self, handle: StyleHandle) -> Option<&Style> {
        self.registry.resolve(handle)
    }

    /// Returns the style registry.
    #[must_use]
    pub fn registry(&self) -> &StyleRegistry {
        &self.registry
    }

    /// Returns the storage allocator.
    #[must_use]
    pub fn allocator(&self) -> &A {
        &self.allocator
    }

    /// Returns the storage allocator mutably.
    pub fn allocator_mut(&mut self) -> &mut A {
        &mut self.allocator
    }

    /// Drops the registry storage and the descriptor.
    ///
    /// Afterwards [`is_inited`](Self::is_inited) is `false`, handles stop
    /// resolving, and the next [`init_theme`](Self::init_theme) allocates
    /// again. Hosts should detach this theme's handles first.
    pub fn deinit(&mut self) {
        if self.registry.is_allocated() {
            tracing::debug!(theme = self.id.get(), "theme deinitialized");
        }
        self.registry.release();
        self.theme = None;
    }
}

impl<H: WidgetHost, A> fmt::Debug for ThemeManager<H, A> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ThemeManager")
            .field("id", &self.id)
            .field("config", &self.config)
            .field("registry", &self.registry)
            .field("theme", &self.theme)
            .finish_non_exhaustive()
    }
}
