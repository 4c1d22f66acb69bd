//! Verdict synthesis: predicted label reconciled with the ClinVar status.
//!
//! Conflict detection uses case-sensitive substring matching on the ClinVar
//! text ("Pathogenic", "Benign"). This is fragile: for instance
//! "Conflicting classifications of pathogenicity" matches neither.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::clinical::ClinicalStatus;
use crate::evidence::EvidenceTally;

/// Label predicted from the evidence tally alone.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Prediction {
    Pathogenic,
    #[serde(rename = "LIKELY PATHOGENIC")]
    LikelyPathogenic,
    Vus,
}

impl Prediction {
    /// First matching rule wins.
    pub fn from_tally(tally: &EvidenceTally) -> Self {
        if tally.pvs >= 1 && tally.pm >= 1 {
            Prediction::Pathogenic
        } else if tally.pvs >= 1 {
            Prediction::LikelyPathogenic
        } else {
            Prediction::Vus
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Prediction::Pathogenic => "PATHOGENIC",
            Prediction::LikelyPathogenic => "LIKELY PATHOGENIC",
            Prediction::Vus => "VUS",
        }
    }
}

impl fmt::Display for Prediction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Final classification.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Verdict {
    /// Prediction agrees with a ClinVar pathogenic call.
    Confirmed { predicted: Prediction },
    /// Prediction is pathogenic but ClinVar reports benign.
    Conflicting { predicted: Prediction, reported: String },
    /// No agreement rule applied; prediction shown next to the ClinVar status.
    Predicted { predicted: Prediction, status: ClinicalStatus },
}

impl Verdict {
    pub fn predicted(&self) -> Prediction {
        match self {
            Verdict::Confirmed { predicted }
            | Verdict::Conflicting { predicted, .. }
            | Verdict::Predicted { predicted, .. } => *predicted,
        }
    }

    pub fn is_conflict(&self) -> bool {
        matches!(self, Verdict::Conflicting { .. })
    }

    pub fn label(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for Verdict {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Verdict::Confirmed { predicted } => write!(f, "CONFIRMED {predicted}"),
            Verdict::Conflicting { predicted, reported } => {
                write!(f, "CONFLICTING: predicted {predicted}, ClinVar reports {reported}")
            }
            Verdict::Predicted { predicted, status } => {
                write!(f, "{predicted} (clinical database: {status})")
            }
        }
    }
}

/// Combine the evidence tally with the ClinVar status.
pub fn synthesize(tally: &EvidenceTally, status: &ClinicalStatus) -> Verdict {
    let predicted = Prediction::from_tally(tally);
    let text = status.as_str();

    if predicted == Prediction::Pathogenic && text.contains("Pathogenic") {
        Verdict::Confirmed { predicted }
    } else if predicted == Prediction::Pathogenic && text.contains("Benign") {
        Verdict::Conflicting { predicted, reported: text.to_string() }
    } else {
        Verdict::Predicted { predicted, status: status.clone() }
    }
}
