use crate::types::report::{ResultRecord, RiskLabel};
use chrono::{DateTime, Utc};
use serde::Serialize;

#[derive(Debug, Serialize)]
struct JsonReport<'a> {
    generated_at: DateTime<Utc>,
    results: Vec<JsonRow<'a>>,
}

#[derive(Debug, Serialize)]
struct JsonRow<'a> {
    repo_name: &'a str,
    final_score: RiskLabel,
}

pub fn to_json(results: &[ResultRecord]) -> Result<String, serde_json::Error> {
    let report = JsonReport {
        generated_at: Utc::now(),
        results: results
            .iter()
            .filter_map(|result| {
                result.final_score.map(|final_score| JsonRow {
                    repo_name: &result.repo_name,
                    final_score,
                })
            })
            .collect(),
    };
    serde_json::to_string_pretty(&report)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn json_report_lists_scored_records_only() {
        let rendered = to_json(&[
            ResultRecord::scored("psf/requests", RiskLabel::Medium),
            ResultRecord::unscored("broken/repo"),
        ])
        .expect("json should serialize");

        let value: serde_json::Value = serde_json::from_str(&rendered).expect("valid json");
        let results = value["results"].as_array().expect("results array");
        assert_eq!(results.len(), 1);
        assert_eq!(results[0]["repo_name"], "psf/requests");
        assert_eq!(results[0]["final_score"], "Medium");
        assert!(value["generated_at"].is_string());
    }

    #[test]
    fn json_report_for_no_results_is_empty_array() {
        let rendered = to_json(&[]).expect("json should serialize");
        assert!(rendered.contains("\"results\": []"));
    }
}
