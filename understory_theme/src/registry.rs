// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The style registry: one [`Style`] per semantic role, allocated once.
//!
//! Storage moves through an explicit lifecycle:
//!
//! - no storage: [`StyleRegistry::is_allocated`] is `false`;
//! - [`Lifecycle::Uninitialized`]: storage reserved, no style built yet;
//! - [`Lifecycle::Ready`]: every role holds a configured style.
//!
//! Configuring from `Uninitialized` builds fresh styles. Configuring from
//! `Ready` resets each style before setting its properties again.

use alloc::vec::Vec;

use peniko::Color;
use understory_style::{Opacity, Style};

use crate::config::BasicPalette;
use crate::error::AllocError;
use crate::theme::ThemeId;

/// Semantic roles the registry holds a style for.
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum StyleRole {
    /// Background of root widgets.
    Screen,
    /// Background of nested containers.
    Panel,
    /// Label text.
    Label,
}

impl StyleRole {
    /// Number of roles.
    pub const COUNT: usize = 3;

    /// Every role, in storage order.
    pub const ALL: [Self; Self::COUNT] = [Self::Screen, Self::Panel, Self::Label];

    /// Returns the storage slot of this role.
    #[must_use]
    #[inline]
    pub const fn index(self) -> usize {
        self as usize
    }
}

/// A non-owning reference to one registry style.
///
/// Hosts store handles instead of borrowing styles. A handle resolves through
/// [`ThemeManager::style`](crate::ThemeManager::style) as long as the issuing
/// manager keeps its registry allocated.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct StyleHandle {
    theme: ThemeId,
    role: StyleRole,
}

impl StyleHandle {
    /// Returns the theme that issued this handle.
    #[must_use]
    pub fn theme(self) -> ThemeId {
        self.theme
    }

    /// Returns the role this handle refers to.
    #[must_use]
    pub fn role(self) -> StyleRole {
        self.role
    }
}

/// Source of backing storage for a [`StyleRegistry`].
pub trait StyleAllocator {
    /// Returns an empty vector with room for at least `slots` styles.
    ///
    /// The registry never grows the vector past `slots`, so no further
    /// allocation happens once this succeeds.
    fn allocate(&mut self, slots: usize) -> Result<Vec<Style>, AllocError>;
}

/// Allocates from the global allocator, reporting failure instead of aborting.
#[derive(Copy, Clone, Debug, Default)]
pub struct SystemAllocator;

impl StyleAllocator for SystemAllocator {
    fn allocate(&mut self, slots: usize) -> Result<Vec<Style>, AllocError> {
        let mut storage = Vec::new();
        storage
            .try_reserve_exact(slots)
            .map_err(|_| AllocError::new(slots))?;
        Ok(storage)
    }
}

/// Lifecycle of allocated registry storage.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Lifecycle {
    /// Storage exists but no style has been built.
    Uninitialized,
    /// Every role holds a configured style.
    Ready,
}

#[derive(Debug)]
struct Storage {
    styles: Vec<Style>,
    lifecycle: Lifecycle,
}

/// The styles a theme needs, owned exclusively by one theme manager.
#[derive(Debug)]
pub struct StyleRegistry {
    owner: ThemeId,
    storage: Option<Storage>,
}

impl StyleRegistry {
    pub(crate) fn new(owner: ThemeId) -> Self {
        Self {
            owner,
            storage: None,
        }
    }

    /// Returns `true` once backing storage exists.
    ///
    /// This never allocates.
    #[must_use]
    #[inline]
    pub fn is_allocated(&self) -> bool {
        self.storage.is_some()
    }

    /// Returns the storage lifecycle, or `None` when unallocated.
    #[must_use]
    pub fn lifecycle(&self) -> Option<Lifecycle> {
        self.storage.as_ref().map(|s| s.lifecycle)
    }

    /// Allocates storage for every role if it does not exist yet.
    ///
    /// Returns `Ok(true)` when storage was allocated by this call and
    /// `Ok(false)` when it already existed. Storage that is not empty or
    /// cannot hold every role without growing is rejected. On error the
    /// registry stays unallocated.
    pub(crate) fn ensure_allocated<A: StyleAllocator + ?Sized>(
        &mut self,
        allocator: &mut A,
    ) -> Result<bool, AllocError> {
        if self.storage.is_some() {
            return Ok(false);
        }
        let styles = allocator.allocate(StyleRole::COUNT)?;
        if !styles.is_empty() || styles.capacity() < StyleRole::COUNT {
            return Err(AllocError::new(StyleRole::COUNT));
        }
        self.storage = Some(Storage {
            styles,
            lifecycle: Lifecycle::Uninitialized,
        });
        Ok(true)
    }

    /// (Re)configures every role's style from `palette`.
    ///
    /// # Panics
    ///
    /// Panics if the registry is not allocated.
    pub(crate) fn configure(&mut self, palette: &BasicPalette) {
        let Some(storage) = self.storage.as_mut() else {
            panic!("style registry configured before allocation");
        };
        match storage.lifecycle {
            Lifecycle::Uninitialized => {
                for role in StyleRole::ALL {
                    let mut style = Style::new();
                    configure_role(role, palette, &mut style);
                    storage.styles.push(style);
                }
            }
            Lifecycle::Ready => {
                for role in StyleRole::ALL {
                    let style = &mut storage.styles[role.index()];
                    style.reset();
                    configure_role(role, palette, style);
                }
            }
        }
        storage.lifecycle = Lifecycle::Ready;
    }

    /// Returns the style for `role`, if configured.
    #[must_use]
    pub fn style(&self, role: StyleRole) -> Option<&Style> {
        self.storage.as_ref()?.styles.get(role.index())
    }

    /// Returns the handle hosts use to refer to `role`.
    #[must_use]
    pub fn handle(&self, role: StyleRole) -> StyleHandle {
        StyleHandle {
            theme: self.owner,
            role,
        }
    }

    /// Resolves a handle issued by this registry.
    ///
    /// Returns `None` for handles from another theme or after teardown.
    #[must_use]
    pub fn resolve(&self, handle: StyleHandle) -> Option<&Style> {
        if handle.theme != self.owner {
            return None;
        }
        self.style(handle.role)
    }

    /// Drops the backing storage.
    pub(crate) fn release(&mut self) {
        self.storage = None;
    }
}

fn configure_role(role: StyleRole, palette: &BasicPalette, style: &mut Style) {
    match role {
        StyleRole::Screen => set_background(style, palette.screen),
        StyleRole::Panel => set_background(style, palette.panel),
        StyleRole::Label => {
            style.set_text_opa(Opacity::COVER);
            style.set_text_color(palette.text);
        }
    }
}

fn set_background(style: &mut Style, color: Color) {
    style.set_bg_opa(Opacity::COVER);
    style.set_bg_color(color);
}
