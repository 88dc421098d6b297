// SPDX-License-Identifier: MPL-2.0
//! Test support: an in-process [`HostApi`] double.
//!
//! [`MockHost`] answers the plugin's queries from configured values and
//! records everything the plugin pushes back (schema registrations,
//! notifications, panel opens), so integration tests can assert on the full
//! activation sequence without a live host.

use crate::error::{Error, Result};
use crate::host::{HostApi, SettingsMap, UserConfig};
use crate::model::ModelFlags;
use crate::notify::Notification;
use crate::settings::{SettingField, SettingValue};
use async_trait::async_trait;
use std::sync::Mutex;

/// Recording host double. Construct with [`MockHost::new`], shape it with
/// the `with_*` builders, then hand it to the code under test as
/// `Arc<dyn HostApi>`.
pub struct MockHost {
    flags: ModelFlags,
    config: UserConfig,
    fail_model_query: bool,
    settings: Mutex<SettingsMap>,
    registered: Mutex<Vec<Vec<SettingField>>>,
    notifications: Mutex<Vec<Notification>>,
    panel_opens: Mutex<usize>,
}

impl Default for MockHost {
    fn default() -> Self {
        Self::new()
    }
}

impl MockHost {
    /// A markdown-model host with no locale preference and nothing persisted.
    #[must_use]
    pub fn new() -> Self {
        Self {
            flags: ModelFlags {
                is_markdown_model: true,
                is_db_graph: false,
            },
            config: UserConfig::default(),
            fail_model_query: false,
            settings: Mutex::new(SettingsMap::new()),
            registered: Mutex::new(Vec::new()),
            notifications: Mutex::new(Vec::new()),
            panel_opens: Mutex::new(0),
        }
    }

    #[must_use]
    pub fn with_flags(mut self, is_markdown_model: bool, is_db_graph: bool) -> Self {
        self.flags = ModelFlags {
            is_markdown_model,
            is_db_graph,
        };
        self
    }

    #[must_use]
    pub fn with_locale(mut self, locale: &str) -> Self {
        self.config.preferred_language = locale.to_string();
        self
    }

    #[must_use]
    pub fn with_date_format(mut self, format: &str) -> Self {
        self.config.preferred_date_format = format.to_string();
        self
    }

    /// Seeds one persisted setting, as if the user had saved it earlier.
    #[must_use]
    pub fn with_setting(self, key: &str, value: SettingValue) -> Self {
        self.settings
            .lock()
            .expect("settings lock poisoned")
            .insert(key.to_string(), value);
        self
    }

    /// Makes the environment query fail, to exercise the fatal-startup path.
    #[must_use]
    pub fn with_failing_model_query(mut self) -> Self {
        self.fail_model_query = true;
        self
    }

    /// Every schema registration received, in call order.
    #[must_use]
    pub fn registered_schemas(&self) -> Vec<Vec<SettingField>> {
        self.registered
            .lock()
            .expect("registered lock poisoned")
            .clone()
    }

    /// Every notification received, in call order.
    #[must_use]
    pub fn notifications(&self) -> Vec<Notification> {
        self.notifications
            .lock()
            .expect("notifications lock poisoned")
            .clone()
    }

    /// How many times the settings panel was opened.
    #[must_use]
    pub fn panel_open_count(&self) -> usize {
        *self.panel_opens.lock().expect("panel lock poisoned")
    }
}

#[async_trait]
impl HostApi for MockHost {
    async fn model_info(&self) -> Result<ModelFlags> {
        if self.fail_model_query {
            return Err(Error::Host("environment query failed".to_string()));
        }
        Ok(self.flags)
    }

    async fn user_config(&self) -> Result<UserConfig> {
        Ok(self.config.clone())
    }

    async fn persisted_settings(&self) -> Result<SettingsMap> {
        Ok(self.settings.lock().expect("settings lock poisoned").clone())
    }

    async fn register_settings_schema(&self, fields: Vec<SettingField>) -> Result<()> {
        self.registered
            .lock()
            .expect("registered lock poisoned")
            .push(fields);
        Ok(())
    }

    async fn open_settings_panel(&self) {
        *self.panel_opens.lock().expect("panel lock poisoned") += 1;
    }

    async fn notify(&self, notification: Notification) {
        self.notifications
            .lock()
            .expect("notifications lock poisoned")
            .push(notification);
    }
}
