use crate::core::Pipeline;
use crate::utils::error::Result;

pub struct EtlEngine<P: Pipeline> {
    pipeline: P,
}

impl<P: Pipeline> EtlEngine<P> {
    pub fn new(pipeline: P) -> Self {
        Self { pipeline }
    }

    /// Returns the path the report was written to.
    pub async fn run(&self) -> Result<String> {
        tracing::info!("Starting route distance run...");

        let rows = self.pipeline.extract().await?;
        tracing::info!("Extracted {} route rows", rows.len());

        let report = self.pipeline.transform(rows).await?;
        if report.is_empty() {
            tracing::warn!("No routes to report; writing header only");
        } else if report.failed > 0 {
            tracing::warn!(
                "Resolved {} of {} routes, {} recorded as N/A",
                report.resolved(),
                report.len(),
                report.failed
            );
        } else {
            tracing::info!("Resolved {} of {} routes", report.resolved(), report.len());
        }

        let output_path = self.pipeline.load(report).await?;
        tracing::info!("Results have been written to {}", output_path);

        Ok(output_path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{LookupResult, RouteReport, RouteRow};
    use crate::utils::error::EtlError;
    use std::sync::Arc;
    use tokio::sync::Mutex;

    /// Records which stages ran.
    struct ScriptedPipeline {
        rows: Vec<RouteRow>,
        fail_extract: bool,
        stages: Arc<Mutex<Vec<&'static str>>>,
    }

    #[async_trait::async_trait]
    impl Pipeline for ScriptedPipeline {
        async fn extract(&self) -> Result<Vec<RouteRow>> {
            self.stages.lock().await.push("extract");
            if self.fail_extract {
                return Err(EtlError::MalformedInput {
                    row: None,
                    reason: "header only".to_string(),
                });
            }
            Ok(self.rows.clone())
        }

        async fn transform(&self, rows: Vec<RouteRow>) -> Result<RouteReport> {
            self.stages.lock().await.push("transform");
            let mut report = RouteReport::default();
            for row in &rows {
                report.record(row, LookupResult::new(1.0, "2 mins"));
            }
            Ok(report)
        }

        async fn load(&self, report: RouteReport) -> Result<String> {
            self.stages.lock().await.push("load");
            Ok(format!("output-{}.csv", report.len()))
        }
    }

    fn row() -> RouteRow {
        RouteRow {
            site_code: "S1".to_string(),
            site_name: "Site One".to_string(),
            terminal_code: "T1".to_string(),
            origin: "10.0,20.0".to_string(),
            destination: "11.0,21.0".to_string(),
        }
    }

    #[tokio::test]
    async fn test_run_executes_all_stages() {
        let stages = Arc::new(Mutex::new(Vec::new()));
        let engine = EtlEngine::new(ScriptedPipeline {
            rows: vec![row(), row()],
            fail_extract: false,
            stages: stages.clone(),
        });

        let output_path = engine.run().await.unwrap();

        assert_eq!(output_path, "output-2.csv");
        assert_eq!(*stages.lock().await, vec!["extract", "transform", "load"]);
    }

    #[tokio::test]
    async fn test_run_with_no_rows_still_loads() {
        let stages = Arc::new(Mutex::new(Vec::new()));
        let engine = EtlEngine::new(ScriptedPipeline {
            rows: vec![],
            fail_extract: false,
            stages: stages.clone(),
        });

        let output_path = engine.run().await.unwrap();

        assert_eq!(output_path, "output-0.csv");
        assert_eq!(*stages.lock().await, vec!["extract", "transform", "load"]);
    }

    #[tokio::test]
    async fn test_run_stops_on_extract_failure() {
        let stages = Arc::new(Mutex::new(Vec::new()));
        let engine = EtlEngine::new(ScriptedPipeline {
            rows: vec![],
            fail_extract: true,
            stages: stages.clone(),
        });

        let result = engine.run().await;

        assert!(matches!(result, Err(EtlError::MalformedInput { .. })));
        assert_eq!(*stages.lock().await, vec!["extract"]);
    }
}
