//! Annotator - the processing pipeline
//!
//! text → tagger → extractor → classifier/builder → context shift →
//! hypothesis substitution → response + guidance → record store.

use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tracing::{debug, info, warn};

use crate::error::Result;
use crate::graph::{Record, Schema};
use crate::memory::RecordStore;
use crate::nlp::{LexiconTagger, Tagger};
use crate::orchestrator::abduction::{substitute_hypothesis, Mode};
use crate::orchestrator::aggregation::{refine, Refinement};
use crate::orchestrator::builder::RecordBuilder;
use crate::orchestrator::classifier::generate_response;
use crate::orchestrator::context::{needs_shift, shift_context};
use crate::orchestrator::extractor::{extract, Extraction};
use crate::orchestrator::guidance::compose_guidance;

/// Everything computed for one utterance, before persistence
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Annotation {
    pub extraction: Extraction,
    /// Record as first built, before any context shift or substitution
    pub initial: Record,
    pub record: Record,
    pub response: String,
    pub guidance: String,
    pub context_shifted: bool,
    pub hypothesis_applied: bool,
}

/// Result of `Annotator::process`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProcessOutcome {
    pub response: String,
    pub guidance: String,
    /// Sheet / first cut / double cut handed back as the next turn's prior
    pub summary: Record,
    pub record: Record,
    /// Whether the store write succeeded
    pub persisted: bool,
}

pub struct Annotator {
    schema: Schema,
    tagger: Arc<dyn Tagger>,
    store: Arc<dyn RecordStore>,
}

impl Annotator {
    pub fn new(schema: Schema, store: Arc<dyn RecordStore>) -> Self {
        Self {
            schema,
            tagger: Arc::new(LexiconTagger::new()),
            store,
        }
    }

    pub fn with_tagger(mut self, tagger: Arc<dyn Tagger>) -> Self {
        self.tagger = tagger;
        self
    }

    pub fn schema(&self) -> &Schema {
        &self.schema
    }

    pub fn store(&self) -> Arc<dyn RecordStore> {
        self.store.clone()
    }

    /// Run the pipeline without touching the store
    pub fn annotate(&self, text: &str, prior: Option<&Record>, mode: Mode) -> Result<Annotation> {
        let tokens = self.tagger.tag(text);
        debug!(
            "Tagged: {}",
            tokens
                .iter()
                .map(|t| format!("{}/{}", t.text, t.pos))
                .collect::<Vec<_>>()
                .join(" ")
        );
        let extraction = extract(&tokens);
        debug!(
            "Extracted immediate='{}' dynamic='{}' context='{}'",
            extraction.immediate_object, extraction.dynamic_object, extraction.context
        );

        let builder = RecordBuilder::new(&self.schema);
        let initial = builder.build(
            &extraction.immediate_object,
            &extraction.dynamic_object,
            &extraction.context,
        );
        // Response and abduction both key off the turn's first interpretant.
        let dynamic_interpretant = initial.double_cut.value.dynamic.clone();

        let context_shifted = needs_shift(prior, &initial);
        let mut record = if context_shifted {
            shift_context(&builder, &extraction)
        } else {
            initial.clone()
        };

        let mut hypothesis_applied = false;
        if mode == Mode::Abduction {
            if let Some(substituted) = substitute_hypothesis(
                &record,
                &dynamic_interpretant,
                &extraction.immediate_object,
                &extraction.context,
            ) {
                record = substituted;
                hypothesis_applied = true;
            }
        }

        let response = generate_response(&dynamic_interpretant).to_string();
        let guidance = compose_guidance(&record)?;

        info!(
            "Annotated '{}' as '{}' (mode={}, shifted={}, abduced={})",
            text, record.first_cut.value, mode, context_shifted, hypothesis_applied
        );

        Ok(Annotation {
            extraction,
            initial,
            record,
            response,
            guidance,
            context_shifted,
            hypothesis_applied,
        })
    }

    /// Annotate and persist. A failed write is logged and reported through
    /// `persisted`; it does not fail the call.
    pub async fn process(&self, text: &str, prior: Option<&Record>, mode: Mode) -> Result<ProcessOutcome> {
        let annotation = self.annotate(text, prior, mode)?;

        let persisted = match self.store.put(text, &annotation.record).await {
            Ok(()) => true,
            Err(e) => {
                warn!("Record for '{}' not persisted: {}", text, e);
                false
            }
        };

        Ok(ProcessOutcome {
            response: annotation.response,
            guidance: annotation.guidance,
            summary: annotation.record.clone(),
            record: annotation.record,
            persisted,
        })
    }

    /// First stored record for `text`; `None` when never processed
    pub async fn get_record(&self, text: &str) -> Result<Option<Record>> {
        self.store.get(text).await
    }

    /// Merged or latest interpretant pair across all stored records
    pub async fn refine(&self) -> Result<Refinement> {
        let rows = self.store.all().await?;
        let refinement = refine(rows.iter().map(|r| &r.record));
        info!(
            "Refined {} records -> dynamic={:?} final={:?}",
            rows.len(),
            refinement.dynamic,
            refinement.final_
        );
        Ok(refinement)
    }
}
