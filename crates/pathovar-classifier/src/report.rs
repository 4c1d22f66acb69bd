//! Display helpers shared by the terminal and web front ends.

pub const DISCLAIMER: &str =
    "Educational tool only: not for clinical use or diagnostic decisions.";

pub const FREQUENCY_NOT_AVAILABLE: &str = "Not available";

/// `stop_gained` → `Stop Gained`.
pub fn display_consequence(consequence: &str) -> String {
    consequence
        .split('_')
        .filter(|w| !w.is_empty())
        .map(|w| {
            let mut chars = w.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().chain(chars.flat_map(char::to_lowercase)).collect(),
                None => String::new(),
            }
        })
        .collect::<Vec<String>>()
        .join(" ")
}

/// Six decimal places, or "Not available" when the frequency was not reported.
pub fn display_frequency(frequency: Option<f64>) -> String {
    match frequency {
        Some(f) => format!("{f:.6}"),
        None => FREQUENCY_NOT_AVAILABLE.to_string(),
    }
}

/// "PVS1 (Very Strong) and PM2 (Moderate)", or `None` when nothing fired.
pub fn display_criteria(criteria: &[&str]) -> Option<String> {
    if criteria.is_empty() {
        None
    } else {
        Some(criteria.join(" and "))
    }
}
