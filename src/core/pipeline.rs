use crate::core::lookup::DistanceMatrixClient;
use crate::core::{reader, writer};
use crate::core::{ConfigProvider, DistanceLookup, Pipeline, RouteReport, RouteRow, Storage};
use crate::utils::error::Result;

/// Reads route rows, resolves each through a [`DistanceLookup`] and writes the
/// distance report back through [`Storage`].
pub struct RoutePipeline<S: Storage, C: ConfigProvider, L: DistanceLookup> {
    storage: S,
    config: C,
    lookup: L,
}

impl<S: Storage, C: ConfigProvider, L: DistanceLookup> RoutePipeline<S, C, L> {
    pub fn new(storage: S, config: C, lookup: L) -> Self {
        Self {
            storage,
            config,
            lookup,
        }
    }
}

impl<S: Storage, C: ConfigProvider> RoutePipeline<S, C, DistanceMatrixClient> {
    pub fn with_http_client(storage: S, config: C) -> Self {
        let lookup = DistanceMatrixClient::new(config.api_endpoint(), config.api_key());
        Self::new(storage, config, lookup)
    }
}

#[async_trait::async_trait]
impl<S: Storage, C: ConfigProvider, L: DistanceLookup> Pipeline for RoutePipeline<S, C, L> {
    async fn extract(&self) -> Result<Vec<RouteRow>> {
        tracing::debug!("Reading routes from: {}", self.config.input_path());
        let data = self.storage.read_file(self.config.input_path()).await?;
        reader::parse_routes(&data)
    }

    async fn transform(&self, rows: Vec<RouteRow>) -> Result<RouteReport> {
        let mut report = RouteReport::with_capacity(rows.len());

        // 逐列查詢，單列失敗不影響其他列
        for (i, row) in rows.iter().enumerate() {
            match self.lookup.lookup(&row.origin, &row.destination).await {
                Ok(result) if result.is_unavailable() => {
                    tracing::debug!("Row {} ({}): no route available", i + 1, row.site_code);
                    report.record(row, result);
                }
                Ok(result) => {
                    tracing::debug!(
                        "Row {} ({}): {:.2} km, {}",
                        i + 1,
                        row.site_code,
                        result.distance_km,
                        result.duration
                    );
                    report.record(row, result);
                }
                Err(e) => {
                    tracing::warn!(
                        "Error fetching distance matrix for origin {} and destination {}: {}",
                        row.origin,
                        row.destination,
                        e
                    );
                    report.record_failure(row);
                }
            }
        }

        Ok(report)
    }

    async fn load(&self, report: RouteReport) -> Result<String> {
        let data = writer::render_report(&report)?;

        tracing::debug!(
            "Writing {} result rows ({} bytes) to {}",
            report.len(),
            data.len(),
            self.config.output_path()
        );
        self.storage
            .write_file(self.config.output_path(), &data)
            .await?;

        Ok(self.config.output_path().to_string())
    }
}
