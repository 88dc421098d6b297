// SPDX-License-Identifier: MPL-2.0
//! Settings schema construction.
//!
//! The host renders a settings panel from an ordered list of
//! [`SettingField`] descriptors. The list depends on the detected
//! [`ModelVariant`] (one heading per variant) and on the *live* persisted
//! value of the `toggle001` key: while the toggle is on, two extra fields
//! are appended. The toggle is read from the host at build time rather than
//! taken as a parameter, so two builds with identical flags can differ.
//! That coupling is part of the contract: the builder is not a pure function
//! of its declared inputs.

use crate::error::Result;
use crate::host::{HostApi, SettingsMap};
use crate::i18n::fluent::Translator;
use crate::model::ModelVariant;
use crate::notify::Notification;
use serde::{Deserialize, Serialize};

/// Key of the per-variant heading field.
pub const KEY_VARIANT_HEADING: &str = "heading000";
/// Key of the heading above the common fields.
pub const KEY_COMMON_HEADING: &str = "heading001";
/// Key of the boolean toggle that gates the extra fields.
pub const KEY_TOGGLE: &str = "toggle001";
/// Key of the extra boolean, present only while the toggle is on.
pub const KEY_TOGGLE_TRUE: &str = "toggle001True";
/// Key of the extra free-text field, present only while the toggle is on.
pub const KEY_TOGGLE_TRUE_SPACE: &str = "toggle001TrueSpace";

/// Field kinds the host knows how to render.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SettingKind {
    Heading,
    Boolean,
    String,
}

/// A value stored in, or defaulted into, the host's settings map.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum SettingValue {
    Bool(bool),
    Text(String),
}

/// Rendering hint for `String` fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum InputHint {
    Textarea,
}

/// One entry of the settings schema the host renders.
///
/// Keys are unique within a produced list and the list order is the display
/// order. The serialized form matches the host's registration payload
/// (`type` / `inputAs` naming).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SettingField {
    pub key: String,
    #[serde(rename = "type")]
    pub kind: SettingKind,
    pub title: String,
    pub default: SettingValue,
    pub description: String,
    #[serde(rename = "inputAs", skip_serializing_if = "Option::is_none")]
    pub input_as: Option<InputHint>,
}

impl SettingField {
    fn heading(key: &str, title: String, description: String) -> Self {
        Self {
            key: key.to_string(),
            kind: SettingKind::Heading,
            title,
            default: SettingValue::Text(String::new()),
            description,
            input_as: None,
        }
    }

    fn boolean(key: &str, title: String, description: String, default: bool) -> Self {
        Self {
            key: key.to_string(),
            kind: SettingKind::Boolean,
            title,
            default: SettingValue::Bool(default),
            description,
            input_as: None,
        }
    }

    fn textarea(key: &str, title: String, description: String) -> Self {
        Self {
            key: key.to_string(),
            kind: SettingKind::String,
            title,
            default: SettingValue::Text(String::new()),
            description,
            input_as: Some(InputHint::Textarea),
        }
    }
}

impl ModelVariant {
    /// Message key of this variant's settings heading title.
    #[must_use]
    pub fn heading_title_key(&self) -> &'static str {
        match self {
            ModelVariant::MarkdownModel => "variant-markdown-heading",
            ModelVariant::DbModelFileGraph => "variant-file-graph-heading",
            ModelVariant::DbModelDbGraph => "variant-db-graph-heading",
        }
    }

    /// Message key of the "variant detected" notification text.
    #[must_use]
    pub fn detected_message_key(&self) -> &'static str {
        match self {
            ModelVariant::MarkdownModel => "variant-markdown-detected",
            ModelVariant::DbModelFileGraph => "variant-file-graph-detected",
            ModelVariant::DbModelDbGraph => "variant-db-graph-detected",
        }
    }
}

/// Builds the ordered settings schema for the detected variant.
///
/// Emits one diagnostic log line and one transient info notification naming
/// the variant, then assembles the field list: variant heading, common
/// heading, the gating toggle (default on), and, only while the persisted
/// toggle value is currently `true`, the extra boolean and textarea fields.
///
/// # Errors
///
/// Fails when the live settings read fails; nothing is registered in that
/// case.
pub async fn build_schema(
    variant: ModelVariant,
    translator: &Translator,
    host: &dyn HostApi,
) -> Result<Vec<SettingField>> {
    let detected = translator.tr(variant.detected_message_key());
    tracing::info!(?variant, "building settings schema for detected variant");
    host.notify(Notification::info(detected)).await;

    let mut fields = vec![
        SettingField::heading(
            KEY_VARIANT_HEADING,
            translator.tr(variant.heading_title_key()),
            translator.tr("variant-heading-description"),
        ),
        SettingField::heading(
            KEY_COMMON_HEADING,
            translator.tr("settings-general-heading"),
            translator.tr("settings-general-description"),
        ),
        SettingField::boolean(
            KEY_TOGGLE,
            translator.tr("settings-toggle-title"),
            translator.tr("settings-toggle-description"),
            true,
        ),
    ];

    if toggle_enabled(&host.persisted_settings().await?) {
        fields.push(SettingField::boolean(
            KEY_TOGGLE_TRUE,
            translator.tr("settings-extra-flag-title"),
            translator.tr("settings-extra-flag-description"),
            false,
        ));
        fields.push(SettingField::textarea(
            KEY_TOGGLE_TRUE_SPACE,
            translator.tr("settings-extra-space-title"),
            translator.tr("settings-extra-space-description"),
        ));
    }

    Ok(fields)
}

/// An absent key counts as off: before the first save nothing is persisted,
/// even though the field's declared default is `true`.
fn toggle_enabled(settings: &SettingsMap) -> bool {
    matches!(settings.get(KEY_TOGGLE), Some(SettingValue::Bool(true)))
}
