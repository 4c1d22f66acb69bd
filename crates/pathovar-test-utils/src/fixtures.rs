//! JSON payloads shaped like real Ensembl VEP and NCBI E-utilities responses.

use serde_json::{json, Value};

/// BRCA1 frameshift seen in the reference runs.
pub const BRCA1_INSERTION: &str = "NM_007294.4:c.5137_5138insA";
/// BRCA1 missense used by the command-line reference run.
pub const BRCA1_MISSENSE: &str = "NM_007294.4:c.5123C>G";

/// A one-element VEP response with the given consequence and gnomAD frequency.
pub fn vep_response(consequence: &str, gnomad_af: Option<f64>) -> Value {
    let mut colocated = json!({
        "id": "rs80357906",
        "allele_string": "C/G",
        "start": 43057063,
        "end": 43057063,
        "strand": 1
    });
    if let Some(af) = gnomad_af {
        colocated["gnomad_af"] = json!(af);
    }

    json!([{
        "input": BRCA1_INSERTION,
        "assembly_name": "GRCh38",
        "seq_region_name": "17",
        "start": 43057062,
        "end": 43057063,
        "strand": 1,
        "allele_string": "-/T",
        "most_severe_consequence": consequence,
        "colocated_variants": [colocated],
        "transcript_consequences": [{
            "gene_symbol": "BRCA1",
            "transcript_id": "ENST00000357654",
            "consequence_terms": [consequence],
            "impact": "HIGH"
        }]
    }])
}

/// A VEP response element with no colocated variants at all.
pub fn vep_response_without_colocated(consequence: &str) -> Value {
    json!([{
        "input": BRCA1_INSERTION,
        "most_severe_consequence": consequence,
        "transcript_consequences": []
    }])
}

/// An esearch response listing `ids` in order.
pub fn esearch_response(ids: &[&str]) -> Value {
    json!({
        "header": { "type": "esearch", "version": "0.3" },
        "esearchresult": {
            "count": ids.len().to_string(),
            "retmax": ids.len().to_string(),
            "retstart": "0",
            "idlist": ids,
            "translationset": [],
            "querytranslation": BRCA1_INSERTION
        }
    })
}

/// An esummary response using the legacy `clinical_significance` block.
pub fn esummary_response(id: &str, description: &str) -> Value {
    json!({
        "header": { "type": "esummary", "version": "0.3" },
        "result": {
            "uids": [id],
            id: {
                "uid": id,
                "obj_type": "single nucleotide variant",
                "accession": format!("VCV{:0>9}", id),
                "title": "NM_007294.4(BRCA1):c.5123C>G (p.Ala1708Gly)",
                "clinical_significance": {
                    "description": description,
                    "last_evaluated": "2024/01/12 00:00",
                    "review_status": "reviewed by expert panel"
                },
                "genes": [{ "symbol": "BRCA1", "geneid": "672" }]
            }
        }
    })
}

/// An esummary response in the current layout: `clinical_significance` is
/// blank and the call lives under `germline_classification`.
pub fn esummary_germline_response(id: &str, description: &str) -> Value {
    json!({
        "header": { "type": "esummary", "version": "0.3" },
        "result": {
            "uids": [id],
            id: {
                "uid": id,
                "accession": format!("VCV{:0>9}", id),
                "clinical_significance": { "description": "", "review_status": "" },
                "germline_classification": {
                    "description": description,
                    "review_status": "criteria provided, multiple submitters, no conflicts"
                }
            }
        }
    })
}
