//! Notation classification for semantic identifiers.
//!
//! Every identifier belongs to exactly one notation family, decided by its
//! prefix. Classification runs in a fixed priority order so that the ECLASS
//! CDP URL form is never mistaken for a generic IRI.

use serde::{Deserialize, Serialize};
use std::fmt;

/// IEC Common Data Dictionary IRDI prefix, e.g. `0112/2///61987#ABN590#002`.
pub const IEC_CDD_PREFIX: &str = "0112/";
/// ECLASS IRDI in hash notation, e.g. `0173-1#01-AHF578#001`.
pub const ECLASS_HASH_PREFIX: &str = "0173-1#";
/// ECLASS IRDI in slash notation, e.g. `0173/1///01#AHF578#001`.
pub const ECLASS_SLASH_PREFIX: &str = "0173/1///";
/// Host part of ECLASS CDP URLs.
pub const ECLASS_CDP_HOST: &str = "https://api.eclass-cdp.com/";
/// ECLASS CDP URL prefix, e.g. `https://api.eclass-cdp.com/0173-1-01-AHF578-001`.
pub const ECLASS_URL_PREFIX: &str = "https://api.eclass-cdp.com/0173-1";

/// The textual notation a semantic identifier is written in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Notation {
    /// IEC CDD IRDI (`0112/...`)
    IecCdd,
    /// ECLASS IRDI with `#` delimiters (`0173-1#...`)
    EclassHash,
    /// ECLASS IRDI with slash delimiters (`0173/1///...`)
    EclassSlash,
    /// ECLASS CDP URL (`https://api.eclass-cdp.com/0173-1...`)
    EclassUrl,
    /// Generic `http://` or `https://` IRI
    Iri,
    /// Anything else, compared literally
    Unknown,
}

impl Notation {
    /// Classify an identifier by its prefix.
    ///
    /// Total: any string that matches no known prefix is `Unknown`.
    #[must_use]
    pub fn classify(id: &str) -> Self {
        if id.starts_with(IEC_CDD_PREFIX) {
            Self::IecCdd
        } else if id.starts_with(ECLASS_HASH_PREFIX) {
            Self::EclassHash
        } else if id.starts_with(ECLASS_SLASH_PREFIX) {
            Self::EclassSlash
        } else if id.starts_with(ECLASS_URL_PREFIX) {
            Self::EclassUrl
        } else if is_iri(id) {
            Self::Iri
        } else {
            Self::Unknown
        }
    }

    /// Whether this is one of the three interchangeable ECLASS notations.
    #[must_use]
    pub const fn is_eclass(&self) -> bool {
        matches!(self, Self::EclassHash | Self::EclassSlash | Self::EclassUrl)
    }

    /// Short, stable name used in CLI and JSON output.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::IecCdd => "iec-cdd",
            Self::EclassHash => "eclass-hash",
            Self::EclassSlash => "eclass-slash",
            Self::EclassUrl => "eclass-url",
            Self::Iri => "iri",
            Self::Unknown => "unknown",
        }
    }
}

impl fmt::Display for Notation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// `http://` or `https://` prefixed.
#[must_use]
pub fn is_iri(id: &str) -> bool {
    id.starts_with("http://") || id.starts_with("https://")
}

/// Any of the ECLASS IRDI prefixes (hash, slash or CDP URL).
#[must_use]
pub fn is_eclass(id: &str) -> bool {
    Notation::classify(id).is_eclass()
}
