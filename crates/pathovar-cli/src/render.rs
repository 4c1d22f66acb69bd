//! Plain-text report for the terminal.

use std::fmt::Write;

use pathovar_classifier::report::{display_consequence, display_criteria, display_frequency, DISCLAIMER};
use pathovar_classifier::VariantAnalysis;

const RULE: &str = "--------------------------------------------------";

pub fn render_text(analysis: &VariantAnalysis, show_raw: bool) -> String {
    let mut out = String::new();
    let ev = &analysis.evidence;

    // Writing into a String cannot fail.
    let _ = writeln!(out, "{RULE}");
    let _ = writeln!(out, "ANALYSIS FOR:  {}", analysis.variant);
    let _ = writeln!(out, "CONSEQUENCE:   {}", display_consequence(&ev.consequence));
    let _ = writeln!(out, "FREQUENCY:     {}", display_frequency(ev.frequency));
    let _ = writeln!(out, "CLINVAR SAYS:  {}", analysis.clinical_status);
    let _ = writeln!(out, "VERDICT:       {}", analysis.verdict_label);
    if let Some(criteria) = display_criteria(&analysis.criteria_met) {
        let _ = writeln!(out, "CRITERIA MET:  {criteria}");
    }
    let _ = writeln!(out, "{RULE}");

    if show_raw {
        let status = analysis
            .vep_trace
            .http_status
            .map(|s| s.to_string())
            .unwrap_or_else(|| "no response".to_string());
        let body = serde_json::to_string_pretty(&analysis.vep_trace.body)
            .unwrap_or_else(|_| analysis.vep_trace.body.to_string());
        let _ = writeln!(out, "VEP STATUS:    {status}");
        let _ = writeln!(out, "VEP RESPONSE:\n{body}");
        let _ = writeln!(out, "{RULE}");
    }

    let _ = writeln!(out, "{DISCLAIMER}");
    out
}
