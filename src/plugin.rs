// SPDX-License-Identifier: MPL-2.0
//! Plugin entry point and activation context.
//!
//! The host invokes [`run`] exactly once per activation, after its ready
//! signal. Activation is strictly sequential: detect the variant, load
//! localization, register the settings schema, schedule the first-run panel,
//! greet. The only concurrency is the detached panel timer; nothing is
//! cancellable and a delay always elapses in full.

use crate::error::Result;
use crate::host::HostApi;
use crate::i18n::fluent::{LocalePrefs, Translator};
use crate::model::{self, ModelVariant};
use crate::notify::Notification;
use crate::settings;
use std::sync::Arc;
use std::time::Duration;

/// Delay before the settings panel opens on a first run, giving the host UI
/// time to finish rendering the freshly registered schema.
pub const FIRST_RUN_PANEL_DELAY: Duration = Duration::from_millis(300);

const GREETING_DISPLAY: Duration = Duration::from_secs(6);

/// Everything activation produced, assembled once and passed by reference.
///
/// Replaces the module-level globals of earlier revisions of this template:
/// the variant and translator are immutable for the activation's lifetime
/// and are dropped with the context on deactivation.
pub struct PluginContext {
    pub variant: ModelVariant,
    pub translator: Translator,
    pub prefs: LocalePrefs,
}

impl PluginContext {
    /// Shorthand for [`Translator::tr`].
    #[must_use]
    pub fn tr(&self, key: &str) -> String {
        self.translator.tr(key)
    }
}

/// Runs one activation, catching every failure at this single point.
///
/// Errors are logged and swallowed: the plugin stays partially initialized,
/// with no retry and no user-visible error surface.
pub async fn run(host: Arc<dyn HostApi>) {
    if let Err(err) = activate(host).await {
        tracing::error!(%err, "plugin activation failed");
    }
}

async fn activate(host: Arc<dyn HostApi>) -> Result<()> {
    let variant = model::detect(host.as_ref()).await?;
    let (translator, prefs) = Translator::load(host.as_ref()).await?;
    let ctx = PluginContext {
        variant,
        translator,
        prefs,
    };
    tracing::debug!(locale = %ctx.prefs.locale, date_format = %ctx.prefs.date_format, "localization loaded");

    let schema = settings::build_schema(ctx.variant, &ctx.translator, host.as_ref()).await?;
    host.register_settings_schema(schema).await?;

    // First-time setup: nothing persisted yet means the user has never seen
    // the settings panel, so open it for them shortly after activation.
    if host.persisted_settings().await?.is_empty() {
        let host = Arc::clone(&host);
        tokio::spawn(async move {
            tokio::time::sleep(FIRST_RUN_PANEL_DELAY).await;
            host.open_settings_panel().await;
        });
    }

    let hello = ctx.tr("greeting-hello");
    tracing::info!("{hello}");
    host.notify(Notification::success(hello).display_for(GREETING_DISPLAY))
        .await;

    Ok(())
}
