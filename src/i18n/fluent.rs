use crate::config::Config;
use fluent_bundle::{FluentArgs, FluentBundle, FluentResource};
use rust_embed::RustEmbed;
use std::collections::HashMap;
use unic_langid::LanguageIdentifier;

#[derive(RustEmbed)]
#[folder = "assets/i18n/"]
struct Asset;

const FALLBACK_LOCALE: &str = "en-US";

pub struct I18n {
    bundles: HashMap<LanguageIdentifier, FluentBundle<FluentResource>>,
    pub available_locales: Vec<LanguageIdentifier>,
    current_locale: LanguageIdentifier,
}

impl Default for I18n {
    fn default() -> Self {
        Self::new(None, &Config::default())
    }
}

impl I18n {
    pub fn new(cli_lang: Option<String>, config: &Config) -> Self {
        let mut bundles = HashMap::new();
        let mut available_locales = Vec::new();

        for file in Asset::iter() {
            let Some(locale) = file
                .as_ref()
                .strip_suffix(".ftl")
                .and_then(|stem| stem.parse::<LanguageIdentifier>().ok())
            else {
                continue;
            };
            let Some(content) = Asset::get(file.as_ref()) else {
                continue;
            };

            let source = String::from_utf8_lossy(content.data.as_ref()).to_string();
            let resource =
                FluentResource::try_new(source).expect("Failed to parse FTL file.");
            let mut bundle = FluentBundle::new(vec![locale.clone()]);
            bundle.add_resource(resource).expect("Failed to add resource.");

            bundles.insert(locale.clone(), bundle);
            available_locales.push(locale);
        }

        let current_locale = resolve_locale(cli_lang, config, &available_locales)
            .unwrap_or_else(|| FALLBACK_LOCALE.parse().unwrap());

        Self {
            bundles,
            available_locales,
            current_locale,
        }
    }

    pub fn current_locale(&self) -> &LanguageIdentifier {
        &self.current_locale
    }

    pub fn set_locale(&mut self, locale: LanguageIdentifier) {
        if self.bundles.contains_key(&locale) {
            self.current_locale = locale;
        }
    }

    pub fn tr(&self, key: &str) -> String {
        self.format(key, None)
    }

    pub fn tr_with_args(&self, key: &str, args: &[(&str, &str)]) -> String {
        let mut fluent_args = FluentArgs::new();
        for (name, value) in args {
            fluent_args.set(*name, *value);
        }
        self.format(key, Some(&fluent_args))
    }

    fn format(&self, key: &str, args: Option<&FluentArgs<'_>>) -> String {
        let Some(bundle) = self.bundles.get(&self.current_locale) else {
            return format!("MISSING: {}", key);
        };
        let Some(pattern) = bundle.get_message(key).and_then(|msg| msg.value()) else {
            return format!("MISSING: {}", key);
        };

        let mut errors = vec![];
        let value = bundle.format_pattern(pattern, args, &mut errors);
        if errors.is_empty() {
            value.to_string()
        } else {
            format!("MISSING: {}", key)
        }
    }
}

/// CLI flag > settings file > OS locale; `None` when nothing matches an
/// available bundle.
fn resolve_locale(
    cli_lang: Option<String>,
    config: &Config,
    available: &[LanguageIdentifier],
) -> Option<LanguageIdentifier> {
    let candidates = [
        cli_lang,
        config.language.clone(),
        sys_locale::get_locale(),
    ];

    candidates
        .into_iter()
        .flatten()
        .filter_map(|lang| lang.parse::<LanguageIdentifier>().ok())
        .find(|lang| available.contains(lang))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;
    use unic_langid::LanguageIdentifier;

    fn available() -> Vec<LanguageIdentifier> {
        vec!["en-US".parse().unwrap(), "fr".parse().unwrap()]
    }

    #[test]
    fn cli_flag_wins_over_config() {
        let mut config = Config::default();
        config.language = Some("en-US".to_string());
        let lang = resolve_locale(Some("fr".to_string()), &config, &available());
        assert_eq!(lang, Some("fr".parse().unwrap()));
    }

    #[test]
    fn config_language_is_used_without_cli_flag() {
        let mut config = Config::default();
        config.language = Some("fr".to_string());
        let lang = resolve_locale(None, &config, &available());
        assert_eq!(lang, Some("fr".parse().unwrap()));
    }

    #[test]
    fn unknown_languages_are_skipped() {
        let config = Config::default();
        let lang = resolve_locale(Some("zz-ZZ".to_string()), &config, &available());
        // Falls through to the OS locale, which may or may not match.
        if let Some(lang) = lang {
            assert!(available().contains(&lang));
        }
    }

    #[test]
    fn unknown_key_reports_missing() {
        let i18n = I18n::default();
        assert_eq!(i18n.tr("no-such-key"), "MISSING: no-such-key");
    }

    #[test]
    fn bundled_locales_include_english() {
        let i18n = I18n::default();
        let en: LanguageIdentifier = "en-US".parse().unwrap();
        assert!(i18n.available_locales.contains(&en));
    }

    #[test]
    fn nav_labels_resolve() {
        let i18n = I18n::default();
        for key in [
            "nav-home",
            "nav-skills",
            "nav-projects",
            "nav-experience",
            "nav-contact",
        ] {
            assert!(!i18n.tr(key).starts_with("MISSING:"), "{key} missing");
        }
    }

    #[test]
    fn arguments_are_interpolated() {
        let mut i18n = I18n::default();
        i18n.set_locale("en-US".parse().unwrap());
        let text = i18n.tr_with_args("projects-domain", &[("domain", "Machine Learning")]);
        assert!(text.contains("Machine Learning"));
    }
}
