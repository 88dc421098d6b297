// SPDX-License-Identifier: MPL-2.0
//! Internationalization (i18n) support for the plugin.
//!
//! Localization uses the Fluent system. Translation files live under
//! `assets/i18n/`: one `.ftl` file per locale, discovered at compile time.
//! `en.ftl` carries the base strings; `ja.ftl` is the bundled sample
//! translation. Adding a locale means adding a file, nothing else.
//!
//! Unlike a desktop application, the locale preference comes from the host's
//! user configuration, not the operating system, and it is read once per
//! activation after a short settling delay.

pub mod fluent;
