// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Per-widget style dispatch.

use understory_style::StyleSelector;

use crate::host::{WidgetClasses, WidgetHost, WidgetRole};
use crate::registry::{StyleRegistry, StyleRole};

/// Signature of a theme's dispatch callback.
///
/// The host calls it (through
/// [`ThemeManager::apply`](crate::ThemeManager::apply)) whenever a widget's
/// styles need resolving.
pub type ApplyFn<H> = fn(&StyleRegistry, &mut H, <H as WidgetHost>::Widget);

/// The basic theme's dispatcher.
///
/// - Roots get the screen style and nothing else.
/// - Nested containers get the panel style.
/// - Nested labels get the label style.
///
/// The container and label checks are independent, so a widget reported as
/// both receives the panel style followed by the label style. Everything is
/// attached to the main part in the default state.
pub fn apply_basic<H: WidgetHost>(registry: &StyleRegistry, host: &mut H, widget: H::Widget) {
    let role = WidgetRole::resolve(&*host, widget);
    tracing::trace!(?widget, ?role, "applying basic theme");

    let classes = match role {
        WidgetRole::Root => {
            host.add_style(
                widget,
                registry.handle(StyleRole::Screen),
                StyleSelector::MAIN_DEFAULT,
            );
            return;
        }
        WidgetRole::Nested(classes) => classes,
    };

    if classes.contains(WidgetClasses::CONTAINER) {
        host.add_style(
            widget,
            registry.handle(StyleRole::Panel),
            StyleSelector::MAIN_DEFAULT,
        );
    }

    if classes.contains(WidgetClasses::LABEL) {
        host.add_style(
            widget,
            registry.handle(StyleRole::Label),
            StyleSelector::MAIN_DEFAULT,
        );
    }
}
