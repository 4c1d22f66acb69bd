//! Variant analysis: HTML form, result page, and JSON API.

use axum::{
    extract::{rejection::QueryRejection, Query, State},
    http::StatusCode,
    response::{Html, IntoResponse, Response},
    Form, Json,
};
use serde::Deserialize;
use serde_json::json;
use tracing::info;

use pathovar_classifier::report::{display_consequence, display_criteria, display_frequency};
use pathovar_classifier::{Prediction, VariantAnalysis, Verdict};
use pathovar_common::validate_variant_id;

use crate::handlers::layout::{escape_html, page};
use crate::state::SharedState;

#[derive(Debug, Deserialize)]
pub struct AnalyzeForm {
    #[serde(default)]
    pub variant: String,
}

#[derive(Debug, Deserialize)]
pub struct AnalyzeQuery {
    #[serde(default)]
    pub variant: String,
}

pub async fn analyze_page(State(state): State<SharedState>) -> Html<String> {
    Html(render_analyze_page(&state.example_variant, None))
}

pub async fn analyze_submit(
    State(state): State<SharedState>,
    Form(form): Form<AnalyzeForm>,
) -> Html<String> {
    let outcome = match validate_variant_id(&form.variant) {
        Ok(variant) => {
            info!(variant = %variant, "Web analysis requested");
            Outcome::Analysed(Box::new(state.pipeline.analyze(&variant).await))
        }
        Err(e) => Outcome::Rejected(e.to_string()),
    };
    Html(render_analyze_page(&form.variant, Some(outcome)))
}

/// `GET /api/analyze?variant=...` — full report as JSON, 400 on a bad identifier
/// or an unparseable query string.
pub async fn api_analyze(
    State(state): State<SharedState>,
    query: Result<Query<AnalyzeQuery>, QueryRejection>,
) -> Response {
    let q = match query {
        Ok(Query(q)) => q,
        Err(rejection) => return bad_request(rejection.body_text()),
    };
    match validate_variant_id(&q.variant) {
        Ok(variant) => Json(state.pipeline.analyze(&variant).await).into_response(),
        Err(e) => bad_request(e.to_string()),
    }
}

fn bad_request(message: String) -> Response {
    (
        StatusCode::BAD_REQUEST,
        Json(json!({ "error": message })),
    )
        .into_response()
}

enum Outcome {
    Analysed(Box<VariantAnalysis>),
    Rejected(String),
}

fn verdict_badge_class(verdict: &Verdict) -> &'static str {
    match verdict {
        Verdict::Confirmed { .. } => "bg-danger",
        Verdict::Conflicting { .. } => "bg-warning",
        Verdict::Predicted { predicted, .. } => match predicted {
            Prediction::Pathogenic | Prediction::LikelyPathogenic => "bg-danger",
            Prediction::Vus => "bg-secondary",
        },
    }
}

fn render_result_card(a: &VariantAnalysis) -> String {
    let ev = &a.evidence;
    let criteria = display_criteria(&a.criteria_met)
        .unwrap_or_else(|| "None".to_string());
    let conflict_note = if a.verdict.is_conflict() {
        r#"<div class="alert alert-warning">The predicted classification disagrees with ClinVar. Review the submissions before drawing conclusions.</div>"#
    } else {
        ""
    };

    format!(r#"
    <div class="card">
        <h2>Results for <code>{}</code></h2>
        <p><span class="badge {}">{}</span></p>
        {}
        <dl>
            <dt>Consequence</dt><dd>{}</dd>
            <dt>gnomAD frequency</dt><dd>{}</dd>
            <dt>ClinVar</dt><dd>{}</dd>
            <dt>Criteria met</dt><dd>{}</dd>
            <dt>Analysis id</dt><dd><code>{}</code></dd>
        </dl>
    </div>"#,
        escape_html(&a.variant),
        verdict_badge_class(&a.verdict),
        escape_html(&a.verdict_label),
        conflict_note,
        escape_html(&display_consequence(&ev.consequence)),
        display_frequency(ev.frequency),
        escape_html(a.clinical_status.as_str()),
        escape_html(&criteria),
        a.analysis_id,
    )
}

fn render_analyze_page(variant: &str, outcome: Option<Outcome>) -> String {
    let result_html = match outcome {
        None => String::new(),
        Some(Outcome::Rejected(message)) => format!(
            r#"<div class="alert alert-warning">{}</div>"#,
            escape_html(&message)
        ),
        Some(Outcome::Analysed(analysis)) => render_result_card(&analysis),
    };

    let body = format!(r#"
    <div class="card">
        <form method="POST" action="/analyze">
            <label for="variant">HGVS variant</label>
            <input type="text" id="variant" name="variant" value="{}" required>
            <p><small>e.g. NM_007294.4:c.5137_5138insA (transcript, colon, change)</small></p>
            <button type="submit">Analyze</button>
        </form>
    </div>
    {}"#, escape_html(variant), result_html);

    page("Variant Analysis", &body)
}
