//! SKU decomposition.
//!
//! A SKU is a list of hyphen-separated tokens. The trailing token is the
//! length token (millimetres, or a deprecated tap marker); everything
//! before it is the base profile key shared by all length variants.

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Sku<'a> {
    pub base:   &'a str,
    pub length: &'a str,
}

impl<'a> Sku<'a> {
    /// Split a raw SKU field. Surrounding whitespace is ignored.
    /// A SKU with no hyphen has an empty base.
    pub fn parse(raw: &'a str) -> Self {
        let sku = raw.trim();
        match sku.rsplit_once('-') {
            Some((base, length)) => Sku { base, length },
            None => Sku { base: "", length: sku },
        }
    }

    pub fn is_length(&self, length: &str) -> bool {
        self.length == length
    }

    /// Rebuild a sibling SKU for the same base at another length.
    pub fn with_length(&self, length: &str) -> String {
        format!("{}-{}", self.base, length)
    }
}

/// True when the SKU carries any of the deprecated tap markers.
pub fn has_tap_marker<S: AsRef<str>>(raw: &str, markers: &[S]) -> bool {
    let sku = raw.trim();
    markers.iter().any(|m| sku.contains(m.as_ref()))
}
