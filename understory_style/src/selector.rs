// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Part and state addressing for attached styles.
//!
//! A widget can carry styles for several of its sub-parts (the main body, a
//! scrollbar, a slider knob) and for several interaction states. A
//! [`StyleSelector`] names one such `(part, state)` slot.

/// A sub-part of a widget that a style can target.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Part {
    /// The background-like main body of the widget.
    #[default]
    Main,
    /// The scrollbar(s).
    Scrollbar,
    /// An indicator, e.g. a slider's filled range or a checkbox tick.
    Indicator,
    /// A grab handle, e.g. a slider knob.
    Knob,
    /// The selected item or text range.
    Selected,
    /// Repeated items, e.g. list entries.
    Items,
    /// A text cursor.
    Cursor,
    /// Widget-specific extension part.
    Custom,
}

bitflags::bitflags! {
    /// Interaction states a style can be restricted to.
    ///
    /// The empty set is [`State::DEFAULT`]: the style applies regardless of
    /// interaction state.
    #[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
    pub struct State: u16 {
        /// Toggled or checked.
        const CHECKED   = 0x0001;
        /// Focused by any input device.
        const FOCUSED   = 0x0002;
        /// Focused by keyboard or encoder.
        const FOCUS_KEY = 0x0004;
        /// Being edited.
        const EDITED    = 0x0008;
        /// Hovered by a pointer.
        const HOVERED   = 0x0010;
        /// Being pressed.
        const PRESSED   = 0x0020;
        /// Being scrolled.
        const SCROLLED  = 0x0040;
        /// Disabled.
        const DISABLED  = 0x0080;
    }
}

impl State {
    /// No specific interaction state.
    pub const DEFAULT: Self = Self::empty();
}

/// A `(part, state)` address for an attached style.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct StyleSelector {
    /// The targeted part.
    pub part: Part,
    /// The states the style is restricted to.
    pub state: State,
}

impl StyleSelector {
    /// The main part in the default state.
    pub const MAIN_DEFAULT: Self = Self::new(Part::Main, State::DEFAULT);

    /// Creates a selector for `part` in `state`.
    #[must_use]
    pub const fn new(part: Part, state: State) -> Self {
        Self { part, state }
    }

    /// Returns `true` if a widget in `current` state should use this slot.
    ///
    /// A slot matches when every state it requires is active.
    #[must_use]
    pub fn matches(self, part: Part, current: State) -> bool {
        self.part == part && current.contains(self.state)
    }
}
