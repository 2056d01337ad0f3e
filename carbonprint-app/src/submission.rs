//! Optional forwarding of a flattened result to a remote tabular store.

use crate::session::Snapshot;
use anyhow::{bail, Context, Result};
use carbonprint_schemas::{category::Category, user::UserProfile};
use serde::Serialize;
use std::time::Duration;
use tracing::{info, warn};

const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// One spreadsheet row; field names match the sheet's column headers.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SubmissionRecord {
    #[serde(rename = "Timestamp")]
    pub timestamp: String,
    #[serde(rename = "Name")]
    pub name: String,
    #[serde(rename = "Age")]
    pub age: u32,
    #[serde(rename = "Total (Tonnes)")]
    pub total_tonnes: f64,
    #[serde(rename = "Transport")]
    pub transport: f64,
    #[serde(rename = "Flights")]
    pub flights: f64,
    #[serde(rename = "Electricity")]
    pub electricity: f64,
    #[serde(rename = "Diet")]
    pub diet: f64,
    #[serde(rename = "Clothing")]
    pub clothing: f64,
    #[serde(rename = "Plastic")]
    pub plastic: f64,
    #[serde(rename = "Waste")]
    pub waste: f64,
}

impl SubmissionRecord {
    pub fn new(snapshot: &Snapshot, user: &UserProfile) -> Self {
        let breakdown = &snapshot.result.breakdown;
        let tonnes = |c: Category| round2(breakdown.get(c));
        Self {
            timestamp: snapshot.computed_at.to_rfc3339(),
            name: user.name.clone(),
            age: user.age,
            total_tonnes: snapshot.result.total_tonnes,
            transport: tonnes(Category::Transportation),
            flights: tonnes(Category::Flights),
            electricity: tonnes(Category::Electricity),
            diet: tonnes(Category::Diet),
            clothing: tonnes(Category::Clothing),
            plastic: tonnes(Category::Plastic),
            waste: tonnes(Category::Waste),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum SubmissionOutcome {
    Submitted,
    /// No name and age to attach the row to.
    Skipped,
    Failed(String),
}

pub fn post_record(url: &str, record: &SubmissionRecord) -> Result<()> {
    let client = reqwest::blocking::Client::builder()
        .timeout(REQUEST_TIMEOUT)
        .build()
        .context("Failed to build HTTP client")?;
    let response = client
        .post(url)
        .json(record)
        .send()
        .with_context(|| format!("Failed to reach {}", url))?;
    if !response.status().is_success() {
        bail!("submission rejected with status {}", response.status());
    }
    Ok(())
}

/// Sends the snapshot to `url`. Never fails the run: problems come back as an outcome.
pub fn submit(url: &str, snapshot: &Snapshot) -> SubmissionOutcome {
    let Some(user) = snapshot.user.as_ref() else {
        return SubmissionOutcome::Skipped;
    };
    let record = SubmissionRecord::new(snapshot, user);
    match post_record(url, &record) {
        Ok(()) => {
            info!(url, generation = snapshot.generation, "result submitted");
            SubmissionOutcome::Submitted
        }
        Err(e) => {
            warn!(url, error = %format!("{e:#}"), "result submission failed");
            SubmissionOutcome::Failed(format!("{e:#}"))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::session::ResultSlot;
    use carbonprint_core::CalculatorBuilder;
    use carbonprint_schemas::lifestyle::LifestyleInput;
    use chrono::Local;

    fn snapshot(user: Option<UserProfile>) -> Snapshot {
        let result = CalculatorBuilder::new()
            .build()
            .unwrap()
            .calculate(&LifestyleInput::default())
            .unwrap();
        ResultSlot::new().store(result, user, Local::now())
    }

    fn budi() -> UserProfile {
        UserProfile {
            name: "Budi".to_string(),
            age: 40,
            country: "Indonesia".to_string(),
            photo: None,
        }
    }

    #[test]
    fn record_rounds_each_category() {
        let snap = snapshot(Some(budi()));
        let record = SubmissionRecord::new(&snap, &budi());
        assert_eq!(record.total_tonnes, 6.88);
        assert_eq!(record.transport, 0.77);
        assert_eq!(record.electricity, 3.94);
        assert_eq!(record.diet, 1.64);
        assert_eq!(record.waste, 0.03);
        assert_eq!(record.flights, 0.0);
    }

    #[test]
    fn record_uses_sheet_column_names() {
        let snap = snapshot(Some(budi()));
        let json = serde_json::to_value(SubmissionRecord::new(&snap, &budi())).unwrap();
        let object = json.as_object().unwrap();
        for column in [
            "Timestamp", "Name", "Age", "Total (Tonnes)", "Transport", "Flights",
            "Electricity", "Diet", "Clothing", "Plastic", "Waste",
        ] {
            assert!(object.contains_key(column), "missing {column}");
        }
        assert_eq!(object.len(), 11);
    }

    #[test]
    fn anonymous_result_is_not_submitted() {
        let snap = snapshot(None);
        assert_eq!(submit("http://127.0.0.1:9/never", &snap), SubmissionOutcome::Skipped);
    }

    #[test]
    fn unreachable_endpoint_is_reported_not_raised() {
        let snap = snapshot(Some(budi()));
        let total_before = snap.result.total_tonnes;
        let outcome = submit("http://127.0.0.1:9/sheet", &snap);
        assert!(matches!(outcome, SubmissionOutcome::Failed(_)));
        assert_eq!(snap.result.total_tonnes, total_before);
    }
}
