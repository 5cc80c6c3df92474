//! Slugify many inputs at once.
//!
//! A failing item never aborts the batch; each input gets its own outcome
//! and the summary counts both sides.

use serde::Serialize;

use crate::slug::Slug;
use crate::slugify::Slugifier;

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BatchItem {
    pub input: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub slug: Option<Slug>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<BatchItemError>,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BatchItemError {
    pub code: String,
    pub message: String,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BatchSummary {
    pub total: usize,
    pub succeeded: usize,
    pub failed: usize,
}

#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BatchOutcome {
    pub items: Vec<BatchItem>,
    pub summary: BatchSummary,
}

impl BatchOutcome {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record_slug(&mut self, input: String, slug: Slug) {
        self.summary.total += 1;
        self.summary.succeeded += 1;
        self.items.push(BatchItem {
            input,
            slug: Some(slug),
            error: None,
        });
    }

    pub fn record_error(&mut self, input: String, err: &crate::Error) {
        self.summary.total += 1;
        self.summary.failed += 1;
        self.items.push(BatchItem {
            input,
            slug: None,
            error: Some(BatchItemError {
                code: err.code.as_str().to_string(),
                message: err.message.clone(),
            }),
        });
    }

    pub fn all_succeeded(&self) -> bool {
        self.summary.failed == 0
    }
}

pub fn slugify_batch<I, S>(slugifier: &Slugifier, inputs: I) -> BatchOutcome
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    let mut outcome = BatchOutcome::new();
    for input in inputs {
        let input = input.into();
        match slugifier.slugify(&input) {
            Ok(slug) => outcome.record_slug(input, slug),
            Err(err) => outcome.record_error(input, &err),
        }
    }
    outcome
}
