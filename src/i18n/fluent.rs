// SPDX-License-Identifier: MPL-2.0
use crate::error::{Error, Result};
use crate::host::HostApi;
use fluent_bundle::concurrent::FluentBundle;
use fluent_bundle::FluentResource;
use rust_embed::RustEmbed;
use std::collections::HashMap;
use std::time::Duration;
use unic_langid::LanguageIdentifier;

#[derive(RustEmbed)]
#[folder = "assets/i18n/"]
struct Asset;

/// Locale used when the user expressed no preference.
pub const DEFAULT_LOCALE: &str = "en";

/// The host needs a moment after the ready signal before its user
/// configuration is reliably readable.
pub const CONFIG_SETTLE_DELAY: Duration = Duration::from_secs(1);

/// Locale preferences as reported by the host, carried in the plugin
/// context for anything that later needs to format dates.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LocalePrefs {
    pub locale: String,
    pub date_format: String,
}

/// Translator over the bundled Fluent resources, filtered to the user's
/// preferred locale.
///
/// When the preference names a locale with no bundled translation, the
/// translator simply has no usable bundle and [`Translator::tr`] returns
/// message keys verbatim. That is the explicit guard replacing the silent
/// empty-bucket behavior of earlier revisions of this template.
pub struct Translator {
    bundles: HashMap<LanguageIdentifier, FluentBundle<FluentResource>>,
    current: Option<LanguageIdentifier>,
}

impl Translator {
    /// Loads the translator from the host's user configuration.
    ///
    /// Waits out [`CONFIG_SETTLE_DELAY`], queries the host for the preferred
    /// locale and date format, then filters the embedded bundles: an empty
    /// preference keeps every bundled locale (current locale falls back to
    /// [`DEFAULT_LOCALE`]), a concrete preference keeps only that locale's
    /// bundle, which may not exist.
    ///
    /// # Errors
    ///
    /// Propagates host query failures and malformed `.ftl` assets.
    pub async fn load(host: &dyn HostApi) -> Result<(Self, LocalePrefs)> {
        tokio::time::sleep(CONFIG_SETTLE_DELAY).await;
        let config = host.user_config().await?;
        let translator = Self::for_preference(&config.preferred_language)?;
        let prefs = LocalePrefs {
            locale: config.preferred_language,
            date_format: config.preferred_date_format,
        };
        Ok((translator, prefs))
    }

    /// Builds a translator for the given locale preference without touching
    /// the host. `load` delegates here; tests use it directly.
    pub fn for_preference(preferred: &str) -> Result<Self> {
        let mut bundles = HashMap::new();
        for file in Asset::iter() {
            let filename = file.as_ref();
            let Some(locale_str) = filename.strip_suffix(".ftl") else {
                continue;
            };
            let Ok(locale) = locale_str.parse::<LanguageIdentifier>() else {
                continue;
            };
            if !preferred.is_empty() && locale_str != preferred {
                continue;
            }
            let Some(content) = Asset::get(filename) else {
                continue;
            };
            let source = String::from_utf8_lossy(content.data.as_ref()).to_string();
            let resource = FluentResource::try_new(source)
                .map_err(|(_, errors)| Error::Locale(format!("{}: {:?}", filename, errors)))?;
            let mut bundle = FluentBundle::new_concurrent(vec![locale.clone()]);
            bundle
                .add_resource(resource)
                .map_err(|errors| Error::Locale(format!("{}: {:?}", filename, errors)))?;
            bundles.insert(locale, bundle);
        }

        let current: Option<LanguageIdentifier> = if preferred.is_empty() {
            DEFAULT_LOCALE.parse().ok()
        } else {
            preferred.parse().ok()
        }
        .filter(|locale| bundles.contains_key(locale));

        Ok(Self { bundles, current })
    }

    /// Resolves a message key against the current locale's bundle.
    ///
    /// Falls back to the key verbatim when the bundle, the message, or its
    /// value is missing, or when formatting reports errors.
    #[must_use]
    pub fn tr(&self, key: &str) -> String {
        if let Some(bundle) = self.current.as_ref().and_then(|l| self.bundles.get(l)) {
            if let Some(pattern) = bundle.get_message(key).and_then(|msg| msg.value()) {
                let mut errors = vec![];
                let value = bundle.format_pattern(pattern, None, &mut errors);
                if errors.is_empty() {
                    return value.to_string();
                }
            }
        }
        key.to_string()
    }

    /// Locales retained after filtering, in no particular order.
    #[must_use]
    pub fn available_locales(&self) -> Vec<LanguageIdentifier> {
        self.bundles.keys().cloned().collect()
    }

    /// The locale `tr` resolves against, when one is usable.
    #[must_use]
    pub fn current_locale(&self) -> Option<&LanguageIdentifier> {
        self.current.as_ref()
    }
}
