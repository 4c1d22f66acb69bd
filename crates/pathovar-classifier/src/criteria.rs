//! Thresholds and consequence sets for the evaluated ACMG criteria.

use serde::{Deserialize, Serialize};

use pathovar_common::{PathovarError, Result};

/// PM2 cut-off: allele frequencies strictly below this count as rare.
pub const PM2_THRESHOLD: f64 = 0.0001;

/// VEP consequence terms treated as loss-of-function for PVS1.
pub const LOF_CONSEQUENCES: [&str; 4] = [
    "stop_gained",
    "frameshift_variant",
    "splice_acceptor_variant",
    "splice_donor_variant",
];

/// Immutable classifier settings, passed into every analysis.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClassifierConfig {
    #[serde(default = "default_pm2_threshold")]
    pub pm2_threshold: f64,
    #[serde(default = "default_lof_consequences")]
    pub lof_consequences: Vec<String>,
}

fn default_pm2_threshold() -> f64 { PM2_THRESHOLD }
fn default_lof_consequences() -> Vec<String> {
    LOF_CONSEQUENCES.iter().map(|c| c.to_string()).collect()
}

impl Default for ClassifierConfig {
    fn default() -> Self {
        Self {
            pm2_threshold: default_pm2_threshold(),
            lof_consequences: default_lof_consequences(),
        }
    }
}

impl ClassifierConfig {
    pub fn validate(&self) -> Result<()> {
        if !(self.pm2_threshold > 0.0 && self.pm2_threshold <= 1.0) {
            return Err(PathovarError::Config(format!(
                "classifier.pm2_threshold must be in (0, 1], got {}",
                self.pm2_threshold
            )));
        }
        if self.lof_consequences.iter().all(|c| c.trim().is_empty()) {
            return Err(PathovarError::Config(
                "classifier.lof_consequences must name at least one consequence".into(),
            ));
        }
        Ok(())
    }

    pub fn is_loss_of_function(&self, consequence: &str) -> bool {
        self.lof_consequences.iter().any(|c| c == consequence)
    }

    pub fn is_rare(&self, frequency: f64) -> bool {
        frequency < self.pm2_threshold
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_match_reference_constants() {
        let cfg = ClassifierConfig::default();
        assert_eq!(cfg.pm2_threshold, 0.0001);
        assert_eq!(cfg.lof_consequences.len(), 4);
        assert!(cfg.validate().is_ok());
    }

    #[test]
    fn test_lof_membership_is_exact() {
        let cfg = ClassifierConfig::default();
        assert!(cfg.is_loss_of_function("stop_gained"));
        assert!(cfg.is_loss_of_function("splice_donor_variant"));
        assert!(!cfg.is_loss_of_function("missense_variant"));
        assert!(!cfg.is_loss_of_function("Stop_Gained"));
        assert!(!cfg.is_loss_of_function(""));
    }

    #[test]
    fn test_rarity_is_strict() {
        let cfg = ClassifierConfig::default();
        assert!(cfg.is_rare(0.0));
        assert!(cfg.is_rare(0.00009));
        assert!(!cfg.is_rare(0.0001));
        assert!(!cfg.is_rare(1.0));
    }

    #[test]
    fn test_validate_rejects_bad_threshold_and_empty_set() {
        for t in [0.0, -0.1, 1.5, f64::NAN] {
            let cfg = ClassifierConfig { pm2_threshold: t, ..Default::default() };
            assert!(cfg.validate().is_err(), "threshold {t} should be rejected");
        }
        let cfg = ClassifierConfig { lof_consequences: vec![], ..Default::default() };
        assert!(cfg.validate().is_err());
    }
}
