// SPDX-License-Identifier: MPL-2.0
//! Demo harness: runs one plugin activation against a stdout-backed host.
//!
//! ```text
//! cargo run -- [--lang ja] [--db-model] [--db-graph]
//! ```
//!
//! `--db-model` switches the simulated host off the markdown model;
//! `--db-graph` additionally makes its graph database-backed.

use async_trait::async_trait;
use notegraph_starter::error::Result;
use notegraph_starter::host::{HostApi, SettingsMap, UserConfig};
use notegraph_starter::model::ModelFlags;
use notegraph_starter::notify::Notification;
use notegraph_starter::plugin::{self, FIRST_RUN_PANEL_DELAY};
use notegraph_starter::settings::SettingField;
use std::sync::Arc;
use std::time::Duration;
use tracing_subscriber::EnvFilter;

/// A host that renders every outbound call to stdout.
struct DemoHost {
    flags: ModelFlags,
    config: UserConfig,
}

#[async_trait]
impl HostApi for DemoHost {
    async fn model_info(&self) -> Result<ModelFlags> {
        Ok(self.flags)
    }

    async fn user_config(&self) -> Result<UserConfig> {
        Ok(self.config.clone())
    }

    async fn persisted_settings(&self) -> Result<SettingsMap> {
        // The demo host has no storage, so every run is a first run.
        Ok(SettingsMap::new())
    }

    async fn register_settings_schema(&self, fields: Vec<SettingField>) -> Result<()> {
        println!("registered settings schema ({} fields):", fields.len());
        for field in &fields {
            println!("  [{:?}] {}: {}", field.kind, field.key, field.title);
        }
        Ok(())
    }

    async fn open_settings_panel(&self) {
        println!("settings panel opened");
    }

    async fn notify(&self, notification: Notification) {
        let duration = notification
            .display_duration()
            .map_or("until dismissed".to_string(), |d| format!("{}s", d.as_secs()));
        println!(
            "notification [{:?}, {}]: {}",
            notification.severity(),
            duration,
            notification.text()
        );
    }
}

#[tokio::main(flavor = "current_thread")]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let mut args = pico_args::Arguments::from_env();
    let lang: Option<String> = args.opt_value_from_str("--lang").unwrap_or(None);
    let db_model = args.contains("--db-model");
    let db_graph = args.contains("--db-graph");

    let host = Arc::new(DemoHost {
        flags: ModelFlags {
            is_markdown_model: !db_model,
            is_db_graph: db_graph,
        },
        config: UserConfig {
            preferred_language: lang.unwrap_or_default(),
            preferred_date_format: "yyyy-MM-dd".to_string(),
        },
    });

    plugin::run(host).await;

    // Let the detached first-run panel timer fire before the runtime drops.
    tokio::time::sleep(FIRST_RUN_PANEL_DELAY + Duration::from_millis(100)).await;
}
