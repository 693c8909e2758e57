use serde::{Deserialize, Serialize};

/// One parsed input record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RouteRow {
    pub site_code: String,
    pub site_name: String,
    pub terminal_code: String,
    /// `"lat,lng"`, passed to the API as-is.
    pub origin: String,
    pub destination: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LookupResult {
    pub distance_km: f64,
    pub duration: String,
}

impl LookupResult {
    pub const UNAVAILABLE_DURATION: &'static str = "N/A";

    pub fn new(distance_km: f64, duration: impl Into<String>) -> Self {
        Self {
            distance_km,
            duration: duration.into(),
        }
    }

    /// Sentinel recorded when no route could be resolved: 0 km and "N/A".
    pub fn unavailable() -> Self {
        Self::new(0.0, Self::UNAVAILABLE_DURATION)
    }

    pub fn is_unavailable(&self) -> bool {
        self.duration == Self::UNAVAILABLE_DURATION
    }
}

/// Output columns kept as parallel sequences, index-aligned with the input rows.
///
/// Rows are only appended through [`RouteReport::record`] and
/// [`RouteReport::record_failure`], which push to every sequence at once.
#[derive(Debug, Clone, Default)]
pub struct RouteReport {
    pub site_codes: Vec<String>,
    pub site_names: Vec<String>,
    pub terminal_codes: Vec<String>,
    pub distances: Vec<f64>,
    pub durations: Vec<String>,
    pub failed: usize,
}

impl RouteReport {
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            site_codes: Vec::with_capacity(capacity),
            site_names: Vec::with_capacity(capacity),
            terminal_codes: Vec::with_capacity(capacity),
            distances: Vec::with_capacity(capacity),
            durations: Vec::with_capacity(capacity),
            failed: 0,
        }
    }

    pub fn record(&mut self, row: &RouteRow, result: LookupResult) {
        self.site_codes.push(row.site_code.clone());
        self.site_names.push(row.site_name.clone());
        self.terminal_codes.push(row.terminal_code.clone());
        self.distances.push(result.distance_km);
        self.durations.push(result.duration);
    }

    pub fn record_failure(&mut self, row: &RouteRow) {
        self.record(row, LookupResult::unavailable());
        self.failed += 1;
    }

    pub fn len(&self) -> usize {
        self.site_codes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.site_codes.is_empty()
    }

    pub fn resolved(&self) -> usize {
        self.len().saturating_sub(self.failed)
    }

    pub fn is_aligned(&self) -> bool {
        let len = self.site_codes.len();
        self.site_names.len() == len
            && self.terminal_codes.len() == len
            && self.distances.len() == len
            && self.durations.len() == len
    }
}
