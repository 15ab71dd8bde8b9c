//! Locale fallback resolution.

use std::sync::OnceLock;

use thiserror::Error;

use crate::locale_data::{DataKind, LocaleData};

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("no locale data for '{requested}' (tried {})", tried.join(", "))]
pub struct LocaleError {
    pub requested: String,
    pub tried: Vec<String>,
}

/// Canonicalizes separators and subtag casing: `zh_hant_tw` becomes
/// `zh-Hant-TW`. POSIX suffixes such as `.UTF-8` or `@euro` are dropped.
pub fn normalize_locale(id: &str) -> String {
    let id = id.split(['.', '@']).next().unwrap_or(id).trim();
    let mut normalized = String::with_capacity(id.len());
    for (index, subtag) in id.split(['-', '_']).filter(|s| !s.is_empty()).enumerate() {
        if index > 0 {
            normalized.push('-');
        }
        let is_script = index > 0 && subtag.len() == 4 && subtag.bytes().all(|b| b.is_ascii_alphabetic());
        let is_region = index > 0
            && ((subtag.len() == 2 && subtag.bytes().all(|b| b.is_ascii_alphabetic()))
                || (subtag.len() == 3 && subtag.bytes().all(|b| b.is_ascii_digit())));
        if is_script {
            let (head, tail) = subtag.split_at(1);
            normalized.push_str(&head.to_ascii_uppercase());
            normalized.push_str(&tail.to_ascii_lowercase());
        } else if is_region {
            normalized.push_str(&subtag.to_ascii_uppercase());
        } else {
            normalized.push_str(&subtag.to_ascii_lowercase());
        }
    }
    normalized
}

/// Candidate locales, most specific first, ending with the fallback.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LocaleChain {
    candidates: Vec<String>,
}

impl LocaleChain {
    pub fn build(requested: &str, fallback: &str) -> Self {
        let mut candidates: Vec<String> = Vec::new();
        let mut push = |candidate: String| {
            if !candidate.is_empty() && !candidates.contains(&candidate) {
                candidates.push(candidate);
            }
        };
        let mut current = normalize_locale(requested);
        loop {
            let next = current.rfind('-').map(|index| current[..index].to_string());
            push(current);
            match next {
                Some(shorter) => current = shorter,
                None => break,
            }
        }
        push(normalize_locale(fallback));
        Self { candidates }
    }

    pub fn candidates(&self) -> &[String] {
        &self.candidates
    }

    /// First candidate for which `data` has data of `kind`.
    pub fn first_with(&self, data: &dyn LocaleData, kind: DataKind) -> Option<&str> {
        self.candidates
            .iter()
            .map(String::as_str)
            .find(|candidate| data.has_data(candidate, kind))
    }
}

/// Resolves a single data kind for `requested`.
pub fn resolve(
    requested: &str,
    data: &dyn LocaleData,
    fallback: &str,
    kind: DataKind,
) -> Result<String, LocaleError> {
    let chain = LocaleChain::build(requested, fallback);
    chain
        .first_with(data, kind)
        .map(str::to_string)
        .ok_or_else(|| LocaleError {
            requested: requested.to_string(),
            tried: chain.candidates.clone(),
        })
}

/// A locale chain whose per-kind resolutions are computed on first use.
#[derive(Debug)]
pub struct ResolvedLocale {
    requested: String,
    chain: LocaleChain,
    /// First candidate with data of any kind.
    primary: String,
    resolved: [OnceLock<Option<String>>; DataKind::ALL.len()],
}

impl ResolvedLocale {
    /// Builds the chain, failing when no candidate has data of any kind.
    pub fn new(requested: &str, fallback: &str, data: &dyn LocaleData) -> Result<Self, LocaleError> {
        let chain = LocaleChain::build(requested, fallback);
        let primary = chain
            .candidates
            .iter()
            .find(|candidate| DataKind::ALL.iter().any(|kind| data.has_data(candidate, *kind)))
            .cloned()
            .ok_or_else(|| LocaleError {
                requested: requested.to_string(),
                tried: chain.candidates.clone(),
            })?;
        tracing::debug!(requested, primary = %primary, chain = ?chain.candidates, "locale chain built");
        Ok(Self {
            requested: requested.to_string(),
            chain,
            primary,
            resolved: Default::default(),
        })
    }

    pub fn requested(&self) -> &str {
        &self.requested
    }

    pub fn chain(&self) -> &LocaleChain {
        &self.chain
    }

    pub fn primary(&self) -> &str {
        &self.primary
    }

    /// The locale to query for `kind`. When no candidate has that kind the
    /// primary locale is returned and lookups degrade individually.
    pub fn for_kind(&self, data: &dyn LocaleData, kind: DataKind) -> &str {
        let resolved = self.resolved[kind.index()].get_or_init(|| {
            let found = self.chain.first_with(data, kind).map(str::to_string);
            match &found {
                Some(locale) => tracing::debug!(requested = %self.requested, ?kind, locale = %locale, "locale resolved"),
                None => tracing::warn!(requested = %self.requested, ?kind, "no locale in chain has data"),
            }
            found
        });
        resolved.as_deref().unwrap_or(&self.primary)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::operands::PluralOperands;
    use crate::types::PluralCategory;

    /// Backend that only knows the listed `(locale, kind)` pairs.
    struct Sparse(Vec<(&'static str, DataKind)>);

    impl LocaleData for Sparse {
        fn has_data(&self, locale: &str, kind: DataKind) -> bool {
            self.0.iter().any(|(code, k)| *code == locale && *k == kind)
        }

        fn plural_category(&self, _: &str, _: &PluralOperands, _: bool) -> Option<PluralCategory> {
            None
        }
    }

    #[test]
    fn test_normalizes_separators_and_case() {
        assert_eq!(normalize_locale("en_us"), "en-US");
        assert_eq!(normalize_locale("ZH_hant_tw"), "zh-Hant-TW");
        assert_eq!(normalize_locale("es-419"), "es-419");
        assert_eq!(normalize_locale("de_DE.UTF-8"), "de-DE");
        assert_eq!(normalize_locale("sr-Latn--RS"), "sr-Latn-RS");
    }

    #[test]
    fn test_chain_strips_subtags_then_falls_back() {
        let chain = LocaleChain::build("zh_Hant_TW", "en");
        assert_eq!(chain.candidates(), ["zh-Hant-TW", "zh-Hant", "zh", "en"]);
        let deduped = LocaleChain::build("en-GB", "en");
        assert_eq!(deduped.candidates(), ["en-GB", "en"]);
        let empty = LocaleChain::build("", "en");
        assert_eq!(empty.candidates(), ["en"]);
    }

    #[test]
    fn test_resolution_is_per_kind() {
        let data = Sparse(vec![
            ("fr-CA", DataKind::Plurals),
            ("fr", DataKind::Currencies),
            ("en", DataKind::Dates),
        ]);
        let locale = ResolvedLocale::new("fr_CA", "en", &data).expect("resolvable");
        assert_eq!(locale.primary(), "fr-CA");
        assert_eq!(locale.for_kind(&data, DataKind::Plurals), "fr-CA");
        assert_eq!(locale.for_kind(&data, DataKind::Currencies), "fr");
        assert_eq!(locale.for_kind(&data, DataKind::Dates), "en");
        assert_eq!(locale.for_kind(&data, DataKind::Lists), "fr-CA");
    }

    #[test]
    fn test_unknown_locale_uses_fallback() {
        let data = Sparse(vec![("en", DataKind::Plurals)]);
        assert_eq!(resolve("xx-YY", &data, "en", DataKind::Plurals).as_deref(), Ok("en"));
        let locale = ResolvedLocale::new("xx-YY", "en", &data).expect("fallback has data");
        assert_eq!(locale.for_kind(&data, DataKind::Plurals), "en");
    }

    #[test]
    fn test_no_data_anywhere_is_an_error() {
        let data = Sparse(Vec::new());
        let err = ResolvedLocale::new("xx-YY", "zz", &data).expect_err("nothing resolvable");
        assert_eq!(err.tried, ["xx-YY", "xx", "zz"]);
        assert!(err.to_string().contains("xx-YY"));
    }
}
