use std::sync::Arc;

use axum::body::{to_bytes, Body};
use axum::http::{header, Request, StatusCode};
use axum::Router;
use pretty_assertions::assert_eq;
use serde_json::Value;
use tower::ServiceExt;

use pathovar_classifier::report::DISCLAIMER;
use pathovar_classifier::{AnalysisPipeline, ClassifierConfig};
use pathovar_sources::{MockClinicalSource, MockVariantEffectSource};
use pathovar_test_utils::fixtures::{self, BRCA1_INSERTION};
use pathovar_web::router::build_router;
use pathovar_web::state::AppState;

fn app(vep: MockVariantEffectSource, clinvar: MockClinicalSource) -> Router {
    let pipeline = AnalysisPipeline::new(Arc::new(vep), Arc::new(clinvar), ClassifierConfig::default());
    build_router(AppState::new(Arc::new(pipeline), BRCA1_INSERTION.to_string()))
}

fn pathogenic_app() -> Router {
    let vep = MockVariantEffectSource::new()
        .with(BRCA1_INSERTION, fixtures::vep_response("frameshift_variant", Some(0.000004)));
    let clinvar = MockClinicalSource::new()
        .with_hits(BRCA1_INSERTION, &["55601"])
        .with_summary("55601", fixtures::esummary_response("55601", "Pathogenic"));
    app(vep, clinvar)
}

async fn body_text(resp: axum::response::Response) -> String {
    let bytes = to_bytes(resp.into_body(), usize::MAX).await.unwrap();
    String::from_utf8(bytes.to_vec()).unwrap()
}

#[tokio::test]
async fn test_index_prefills_example_variant() {
    let resp = pathogenic_app()
        .oneshot(Request::builder().uri("/").body(Body::empty()).unwrap())
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::OK);

    let html = body_text(resp).await;
    assert!(html.contains(r#"value="NM_007294.4:c.5137_5138insA""#));
    assert!(html.contains(DISCLAIMER));
}

#[tokio::test]
async fn test_form_submission_renders_verdict() {
    let resp = pathogenic_app()
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/analyze")
                .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded")
                .body(Body::from("variant=NM_007294.4%3Ac.5137_5138insA"))
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::OK);

    let html = body_text(resp).await;
    assert!(html.contains("CONFIRMED PATHOGENIC"));
    assert!(html.contains("Frameshift Variant"));
    assert!(html.contains("0.000004"));
    assert!(html.contains("PVS1 (Very Strong) and PM2 (Moderate)"));
    assert!(html.contains(DISCLAIMER));
}

#[tokio::test]
async fn test_form_rejects_invalid_variant_without_analysis() {
    let resp = pathogenic_app()
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/analyze")
                .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded")
                .body(Body::from("variant=%3Cscript%3E"))
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::OK);

    let html = body_text(resp).await;
    assert!(html.contains("alert-warning"));
    assert!(!html.contains("<script>"));
    assert!(html.contains("&lt;script&gt;"));
    assert!(!html.contains("Results for"));
}

#[tokio::test]
async fn test_api_returns_json_report() {
    let resp = pathogenic_app()
        .oneshot(
            Request::builder()
                .uri("/api/analyze?variant=NM_007294.4:c.5137_5138insA")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::OK);

    let json: Value = serde_json::from_str(&body_text(resp).await).unwrap();
    assert_eq!(json["variant"], BRCA1_INSERTION);
    assert_eq!(json["verdict_label"], "CONFIRMED PATHOGENIC");
    assert_eq!(json["verdict"]["kind"], "confirmed");
    assert_eq!(json["clinical_status"]["description"], "Pathogenic");
}

#[tokio::test]
async fn test_api_degrades_when_services_are_down() {
    let resp = app(MockVariantEffectSource::unavailable(), MockClinicalSource::unavailable())
        .oneshot(
            Request::builder()
                .uri("/api/analyze?variant=NM_007294.4:c.5137_5138insA")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::OK);

    let json: Value = serde_json::from_str(&body_text(resp).await).unwrap();
    assert_eq!(json["evidence"]["consequence"], "unknown");
    assert_eq!(json["evidence"]["frequency"], Value::Null);
    assert_eq!(json["verdict_label"], "VUS (clinical database: ClinVar Search Failed)");
}

#[tokio::test]
async fn test_api_rejects_bad_identifier() {
    for uri in ["/api/analyze", "/api/analyze?variant=BRCA1", "/api/analyze?variant=%20%20"] {
        let resp = pathogenic_app()
            .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST, "{uri}");

        let json: Value = serde_json::from_str(&body_text(resp).await).unwrap();
        assert!(json["error"].is_string(), "{uri}");
    }
}

#[tokio::test]
async fn test_api_unparseable_query_is_json_400() {
    for uri in [
        "/api/analyze?variant=NM_007294.4:c.1A%3EG&variant=NM_007294.4:c.2A%3EG",
        "/api/analyze?variant=%ZZ&variant=x",
    ] {
        let resp = pathogenic_app()
            .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST, "{uri}");
        assert_eq!(
            resp.headers()[header::CONTENT_TYPE].to_str().unwrap(),
            "application/json",
            "{uri}"
        );

        let json: Value = serde_json::from_str(&body_text(resp).await).unwrap();
        assert!(json["error"].as_str().unwrap().contains("query string"), "{uri}");
    }
}

#[tokio::test]
async fn test_health() {
    let resp = pathogenic_app()
        .oneshot(Request::builder().uri("/health").body(Body::empty()).unwrap())
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::OK);

    let json: Value = serde_json::from_str(&body_text(resp).await).unwrap();
    assert_eq!(json["status"], "ok");
}
