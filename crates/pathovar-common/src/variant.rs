//! Shape check for user-supplied variant identifiers.
//!
//! This is not an HGVS parser. It only rejects input that cannot
//! possibly be a `<reference>:<type>.<change>` expression, so that obviously
//! malformed input gets a readable message instead of two failed lookups.

use std::sync::OnceLock;

use regex::Regex;

use crate::error::{PathovarError, Result};

fn hgvs_shape() -> &'static Regex {
    static HGVS_SHAPE: OnceLock<Regex> = OnceLock::new();
    HGVS_SHAPE.get_or_init(|| {
        Regex::new(r"^[A-Za-z0-9_.()\-]+:[cgmnopr]\.\S+$").expect("HGVS shape pattern is valid")
    })
}

/// Trim and validate a variant identifier, returning the cleaned form.
pub fn validate_variant_id(raw: &str) -> Result<String> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(PathovarError::InvalidVariant(
            "no variant entered".to_string(),
        ));
    }
    if trimmed.chars().any(char::is_whitespace) {
        return Err(PathovarError::InvalidVariant(format!(
            "'{}' contains whitespace",
            trimmed
        )));
    }
    if !hgvs_shape().is_match(trimmed) {
        return Err(PathovarError::InvalidVariant(format!(
            "'{}' is not in <reference>:<type>.<change> form (e.g. NM_007294.4:c.5137_5138insA)",
            trimmed
        )));
    }
    Ok(trimmed.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_accepts_common_forms() {
        for v in [
            "NM_007294.4:c.5137_5138insA",
            "NM_007294.4:c.5123C>G",
            "NC_000017.11:g.43057051del",
            "ENST00000357654.9:c.68_69del",
            "NP_009225.1:p.Gln1756ProfsTer74",
            "NM_000059.4(BRCA2):c.5946del",
        ] {
            assert!(validate_variant_id(v).is_ok(), "{v} should be accepted");
        }
    }

    #[test]
    fn test_trims_surrounding_whitespace() {
        assert_eq!(
            validate_variant_id("  NM_007294.4:c.5123C>G \n").unwrap(),
            "NM_007294.4:c.5123C>G"
        );
    }

    #[test]
    fn test_rejects_malformed() {
        for v in ["", "   ", "BRCA1", "NM_007294.4 c.5123C>G", "NM_007294.4:5123C>G", "rs80357906"] {
            let err = validate_variant_id(v).unwrap_err();
            assert!(matches!(err, PathovarError::InvalidVariant(_)), "{v} should be rejected");
        }
    }
}
