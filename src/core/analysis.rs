//! Set reconciliation between defined and used translation keys.

use std::{collections::BTreeSet, fmt};

/// Ordered set of translation keys. Iteration order is the sorted order
/// used by every listing.
pub type KeySet = BTreeSet<String>;

/// The two locales compared by the analysis.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Locale {
    English,
    Turkish,
}

impl Locale {
    /// Short uppercase tag used in key listings.
    pub fn tag(self) -> &'static str {
        match self {
            Locale::English => "EN",
            Locale::Turkish => "TR",
        }
    }
}

impl fmt::Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Locale::English => write!(f, "English"),
            Locale::Turkish => write!(f, "Turkish"),
        }
    }
}

/// Which locale files define a given key.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LocalePresence {
    pub en: bool,
    pub tr: bool,
}

impl LocalePresence {
    /// Render as `[EN] [TR]`, substituting `missing` for absent locales.
    ///
    /// `missing` should be two columns wide to keep listings aligned.
    pub fn label(self, missing: &str) -> String {
        format!(
            "[{}] [{}]",
            if self.en { Locale::English.tag() } else { missing },
            if self.tr { Locale::Turkish.tag() } else { missing }
        )
    }
}

/// Outcome of comparing both locales against the keys referenced in code.
#[derive(Debug, Clone, PartialEq)]
pub struct AnalysisResult {
    pub en_keys: KeySet,
    pub tr_keys: KeySet,
    /// `en_keys ∪ tr_keys`
    pub all_keys: KeySet,
    /// `en_keys − tr_keys`
    pub en_only: KeySet,
    /// `tr_keys − en_keys`
    pub tr_only: KeySet,
    pub used_keys: KeySet,
    /// `all_keys − used_keys`
    pub unused_keys: KeySet,
    /// Share of defined keys referenced in code, `None` when nothing is defined.
    pub usage_rate: Option<f64>,
}

impl AnalysisResult {
    pub fn new(en_keys: KeySet, tr_keys: KeySet, used_keys: KeySet) -> Self {
        let all_keys: KeySet = en_keys.union(&tr_keys).cloned().collect();
        let en_only: KeySet = en_keys.difference(&tr_keys).cloned().collect();
        let tr_only: KeySet = tr_keys.difference(&en_keys).cloned().collect();
        let unused_keys: KeySet = all_keys.difference(&used_keys).cloned().collect();

        // Undefined keys found in code are excluded so the rate stays in [0, 1].
        let usage_rate = if all_keys.is_empty() {
            None
        } else {
            let used_defined = all_keys.len() - unused_keys.len();
            Some(used_defined as f64 / all_keys.len() as f64)
        };

        Self {
            en_keys,
            tr_keys,
            all_keys,
            en_only,
            tr_only,
            used_keys,
            unused_keys,
            usage_rate,
        }
    }

    pub fn presence(&self, key: &str) -> LocalePresence {
        LocalePresence {
            en: self.en_keys.contains(key),
            tr: self.tr_keys.contains(key),
        }
    }
}

/// Format a usage rate as a percentage with one decimal, or `n/a`.
pub fn format_usage_rate(rate: Option<f64>) -> String {
    match rate {
        Some(rate) => format!("{:.1}%", rate * 100.0),
        None => "n/a".to_string(),
    }
}
