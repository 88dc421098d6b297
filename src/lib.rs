// SPDX-License-Identifier: MPL-2.0
//! `notegraph-starter` is a starter template for note-graph application
//! plugins.
//!
//! It demonstrates the pieces every plugin for a note-graph host needs:
//! detecting which storage model and graph variant the host is running,
//! loading localized strings with Fluent, registering a settings schema, and
//! greeting the user on activation. The host itself sits behind the
//! [`host::HostApi`] trait, so the whole crate runs against an in-process
//! test double; see `src/main.rs` for a runnable demo harness.
//!
//! Activation flow: [`plugin::run`] detects the [`model::ModelVariant`],
//! loads an [`i18n::fluent::Translator`], builds and registers the settings
//! schema from [`settings`], schedules the first-run settings panel, and
//! emits a localized greeting.

pub mod error;
pub mod host;
pub mod i18n;
pub mod model;
pub mod notify;
pub mod plugin;
pub mod settings;
pub mod test_utils;
