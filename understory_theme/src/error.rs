// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Error types for theme initialization.

use core::fmt;

/// Backing storage for the style registry could not be obtained.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct AllocError {
    /// Number of style slots that were requested.
    pub slots: usize,
}

impl AllocError {
    /// Creates an error for a failed request of `slots` style slots.
    #[must_use]
    pub const fn new(slots: usize) -> Self {
        Self { slots }
    }
}

impl fmt::Display for AllocError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "failed to allocate storage for {} styles", self.slots)
    }
}

impl core::error::Error for AllocError {}

/// Error returned by [`ThemeManager::init_theme`](crate::ThemeManager::init_theme).
///
/// A failed initialization leaves the previously installed theme untouched.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[non_exhaustive]
pub enum ThemeError {
    /// The style registry could not be allocated.
    Allocation(AllocError),
}

impl fmt::Display for ThemeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Allocation(err) => write!(f, "theme initialization failed: {err}"),
        }
    }
}

impl core::error::Error for ThemeError {
    fn source(&self) -> Option<&(dyn core::error::Error + 'static)> {
        match self {
            Self::Allocation(err) => Some(err),
        }
    }
}

impl From<AllocError> for ThemeError {
    fn from(err: AllocError) -> Self {
        Self::Allocation(err)
    }
}
