// SPDX-License-Identifier: MPL-2.0
//! Host capability port.
//!
//! Everything the plugin needs from the surrounding note-graph application
//! is expressed as the [`HostApi`] trait. The real host implements it in its
//! plugin runtime; tests use [`crate::test_utils::MockHost`] and the demo
//! binary supplies a stdout-backed stub. The plugin never reaches for an
//! ambient global.
//!
//! # Contract
//!
//! - Queries (`model_info`, `user_config`, `persisted_settings`) may fail;
//!   failures abort activation via the single top-level catch.
//! - Registrations and UI calls are fire-and-forget from the plugin's point
//!   of view; the host owns rendering and persistence.
//! - The plugin only ever *reads* persisted settings. Writes happen in the
//!   host's settings UI when the user interacts with it.

use crate::error::Result;
use crate::model::ModelFlags;
use crate::notify::Notification;
use crate::settings::{SettingField, SettingValue};
use async_trait::async_trait;
use std::collections::HashMap;

/// Host-owned flat key-value settings store, as reported to the plugin.
///
/// An empty map means the user has never saved any settings for this plugin
/// (the first-run condition).
pub type SettingsMap = HashMap<String, SettingValue>;

/// User configuration reported by the host.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UserConfig {
    /// BCP 47 locale code, or empty when the user has no preference.
    pub preferred_language: String,
    /// Date format string, passed through untouched.
    pub preferred_date_format: String,
}

/// Port for the host plugin runtime.
///
/// Implementations must be `Send + Sync`: the first-run panel timer runs on
/// a spawned task holding its own `Arc<dyn HostApi>` clone.
#[async_trait]
pub trait HostApi: Send + Sync {
    /// Queries which storage model and graph variant the host is running.
    async fn model_info(&self) -> Result<ModelFlags>;

    /// Queries the user's preferred locale and date format.
    async fn user_config(&self) -> Result<UserConfig>;

    /// Returns the current persisted settings for this plugin.
    async fn persisted_settings(&self) -> Result<SettingsMap>;

    /// Registers the settings schema the host should render.
    ///
    /// Field order is display order.
    async fn register_settings_schema(&self, fields: Vec<SettingField>) -> Result<()>;

    /// Opens the plugin's settings panel in the host UI.
    async fn open_settings_panel(&self);

    /// Shows a transient notification.
    async fn notify(&self, notification: Notification);
}
