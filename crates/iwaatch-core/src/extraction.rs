//! Outcome of a public scraper operation
//!
//! Operations never surface an error. They return either what was extracted
//! or a fixed fallback payload, and the caller reads an empty or placeholder
//! payload as the failure signal.

use serde::Serialize;

use crate::error::Result;
use crate::json::encode;
use crate::types::{DetailRecord, Episode, SearchResult, StreamBundle};

/// Payload substituted when an operation fails
pub trait Fallback {
    fn fallback() -> Self;
}

impl Fallback for Vec<SearchResult> {
    fn fallback() -> Self {
        Vec::new()
    }
}

impl Fallback for Vec<DetailRecord> {
    fn fallback() -> Self {
        vec![DetailRecord::unavailable()]
    }
}

impl Fallback for Vec<Episode> {
    fn fallback() -> Self {
        Vec::new()
    }
}

impl Fallback for StreamBundle {
    fn fallback() -> Self {
        StreamBundle::default()
    }
}

/// Extracted payload or its fallback
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Extraction<T> {
    Extracted(T),
    Fallback(T),
}

impl<T: Fallback> Extraction<T> {
    /// Converts an internal result, logging and replacing any error
    pub fn from_result(operation: &str, result: Result<T>) -> Self {
        match result {
            Ok(payload) => Extraction::Extracted(payload),
            Err(e) => {
                tracing::warn!(operation, error = %e, "extraction failed, using fallback");
                Extraction::Fallback(T::fallback())
            }
        }
    }
}

impl<T> Extraction<T> {
    pub fn payload(&self) -> &T {
        match self {
            Extraction::Extracted(payload) | Extraction::Fallback(payload) => payload,
        }
    }

    pub fn into_payload(self) -> T {
        match self {
            Extraction::Extracted(payload) | Extraction::Fallback(payload) => payload,
        }
    }

    pub fn is_fallback(&self) -> bool {
        matches!(self, Extraction::Fallback(_))
    }
}

impl<T: Serialize + Fallback> Extraction<T> {
    /// Encodes the payload as JSON text
    ///
    /// Encoding these record types cannot fail in practice; if it ever does,
    /// the fallback payload is encoded instead.
    pub fn to_json(&self) -> String {
        match encode(self.payload()) {
            Ok(json) => json,
            Err(e) => {
                tracing::warn!(error = %e, "payload encoding failed, using fallback");
                encode(&T::fallback()).unwrap_or_default()
            }
        }
    }
}
