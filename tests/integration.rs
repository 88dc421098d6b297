// SPDX-License-Identifier: MPL-2.0
//! End-to-end tests of schema construction and the activation sequence,
//! driven through the recording mock host. Timers run under tokio's paused
//! clock, so the fixed delays cost no wall-clock time.

use notegraph_starter::i18n::fluent::Translator;
use notegraph_starter::model::ModelVariant;
use notegraph_starter::notify::Severity;
use notegraph_starter::plugin;
use notegraph_starter::settings::{
    self, SettingField, SettingKind, SettingValue, KEY_TOGGLE, KEY_TOGGLE_TRUE_SPACE,
};
use notegraph_starter::test_utils::MockHost;
use std::collections::HashSet;
use std::sync::Arc;
use std::time::Duration;

const RECOGNIZED_KEYS: [&str; 5] = [
    "heading000",
    "heading001",
    "toggle001",
    "toggle001True",
    "toggle001TrueSpace",
];

fn assert_keys_recognized_and_unique(fields: &[SettingField]) {
    let mut seen = HashSet::new();
    for field in fields {
        assert!(
            RECOGNIZED_KEYS.contains(&field.key.as_str()),
            "unrecognized key {}",
            field.key
        );
        assert!(seen.insert(field.key.clone()), "duplicate key {}", field.key);
    }
}

async fn build(variant: ModelVariant, host: &MockHost) -> Vec<SettingField> {
    let translator = Translator::for_preference("").expect("translator load failed");
    settings::build_schema(variant, &translator, host)
        .await
        .expect("schema build failed")
}

#[tokio::test]
async fn every_variant_starts_with_a_heading() {
    let host = MockHost::new();
    for variant in [
        ModelVariant::MarkdownModel,
        ModelVariant::DbModelFileGraph,
        ModelVariant::DbModelDbGraph,
    ] {
        let fields = build(variant, &host).await;
        assert!(!fields.is_empty());
        assert_eq!(fields[0].kind, SettingKind::Heading);
        assert_keys_recognized_and_unique(&fields);
    }
}

#[tokio::test]
async fn scenario_a_markdown_model_heading_title() {
    let host = MockHost::new().with_flags(true, false);
    let fields = build(ModelVariant::MarkdownModel, &host).await;
    assert_eq!(fields[0].title, "File-based Model Settings");
}

#[tokio::test]
async fn scenario_b_file_graph_under_db_model() {
    let host = MockHost::new().with_flags(false, false);
    let fields = build(ModelVariant::DbModelFileGraph, &host).await;
    assert_eq!(fields[0].title, "File-based Graph Settings (DB Model)");
    // Toggle never persisted: heading, heading, toggle only.
    assert_eq!(fields.len(), 3);
}

#[tokio::test]
async fn scenario_c_db_graph_with_toggle_on() {
    let host = MockHost::new()
        .with_flags(false, true)
        .with_setting(KEY_TOGGLE, SettingValue::Bool(true));
    let fields = build(ModelVariant::DbModelDbGraph, &host).await;
    assert_eq!(fields[0].title, "DB Graph Settings");
    assert_eq!(fields.len(), 5);
    assert_eq!(fields.last().expect("empty schema").key, KEY_TOGGLE_TRUE_SPACE);
    assert_keys_recognized_and_unique(&fields);
}

#[tokio::test]
async fn persisted_toggle_false_excludes_extra_fields() {
    let host = MockHost::new().with_setting(KEY_TOGGLE, SettingValue::Bool(false));
    let fields = build(ModelVariant::MarkdownModel, &host).await;
    assert_eq!(fields.len(), 3);
}

#[tokio::test]
async fn build_is_idempotent_under_identical_state() {
    let host = MockHost::new().with_setting(KEY_TOGGLE, SettingValue::Bool(true));
    let first = build(ModelVariant::DbModelFileGraph, &host).await;
    let second = build(ModelVariant::DbModelFileGraph, &host).await;
    assert_eq!(first, second);
}

#[tokio::test]
async fn build_tracks_live_settings_between_invocations() {
    // Same flags, different host state: the builder reads the toggle live.
    let off = MockHost::new();
    let on = MockHost::new().with_setting(KEY_TOGGLE, SettingValue::Bool(true));
    let short = build(ModelVariant::MarkdownModel, &off).await;
    let long = build(ModelVariant::MarkdownModel, &on).await;
    assert_eq!(short.len(), 3);
    assert_eq!(long.len(), 5);
}

#[tokio::test]
async fn build_emits_one_variant_notification() {
    let host = MockHost::new();
    build(ModelVariant::MarkdownModel, &host).await;
    let notifications = host.notifications();
    assert_eq!(notifications.len(), 1);
    assert_eq!(notifications[0].severity(), Severity::Info);
    assert_eq!(notifications[0].text(), "Markdown model detected");
}

#[tokio::test(start_paused = true)]
async fn run_registers_schema_and_opens_panel_on_first_run() {
    let host = Arc::new(MockHost::new());
    plugin::run(host.clone()).await;

    let schemas = host.registered_schemas();
    assert_eq!(schemas.len(), 1);
    assert_eq!(schemas[0][0].title, "File-based Model Settings");

    // Panel timer is detached; let it elapse.
    assert_eq!(host.panel_open_count(), 0);
    tokio::time::sleep(plugin::FIRST_RUN_PANEL_DELAY + Duration::from_millis(50)).await;
    assert_eq!(host.panel_open_count(), 1);

    let notifications = host.notifications();
    let greeting = notifications.last().expect("no greeting emitted");
    assert_eq!(greeting.severity(), Severity::Success);
    assert_eq!(greeting.text(), "Hello!!");
    assert_eq!(greeting.display_duration(), Some(Duration::from_secs(6)));
}

#[tokio::test(start_paused = true)]
async fn run_skips_panel_when_settings_exist() {
    let host = Arc::new(
        MockHost::new()
            .with_flags(false, true)
            .with_setting(KEY_TOGGLE, SettingValue::Bool(true)),
    );
    plugin::run(host.clone()).await;
    tokio::time::sleep(Duration::from_secs(1)).await;

    assert_eq!(host.panel_open_count(), 0);
    let schemas = host.registered_schemas();
    assert_eq!(schemas.len(), 1);
    assert_eq!(schemas[0].len(), 5);
}

#[tokio::test(start_paused = true)]
async fn run_greets_in_the_preferred_locale() {
    let host = Arc::new(MockHost::new().with_locale("ja"));
    plugin::run(host.clone()).await;

    let notifications = host.notifications();
    let greeting = notifications.last().expect("no greeting emitted");
    assert_eq!(greeting.text(), "こんにちは!!");
}

#[tokio::test(start_paused = true)]
async fn run_with_unknown_locale_falls_back_to_message_keys() {
    let host = Arc::new(MockHost::new().with_locale("xx"));
    plugin::run(host.clone()).await;

    let schemas = host.registered_schemas();
    assert_eq!(schemas.len(), 1);
    // No usable bundle: titles surface as raw message keys.
    assert_eq!(schemas[0][0].title, "variant-markdown-heading");
    let greeting = host.notifications().last().cloned().expect("no greeting");
    assert_eq!(greeting.text(), "greeting-hello");
}

#[tokio::test(start_paused = true)]
async fn run_stops_silently_when_detection_fails() {
    let host = Arc::new(MockHost::new().with_failing_model_query());
    plugin::run(host.clone()).await;
    tokio::time::sleep(Duration::from_secs(2)).await;

    assert!(host.registered_schemas().is_empty());
    assert!(host.notifications().is_empty());
    assert_eq!(host.panel_open_count(), 0);
}
