use crate::domain::model::{LookupResult, RouteReport, RouteRow};
use crate::utils::error::Result;
use async_trait::async_trait;

pub trait Storage: Send + Sync {
    fn read_file(&self, path: &str) -> impl std::future::Future<Output = Result<Vec<u8>>> + Send;
    fn write_file(
        &self,
        path: &str,
        data: &[u8],
    ) -> impl std::future::Future<Output = Result<()>> + Send;
}

pub trait ConfigProvider: Send + Sync {
    fn api_endpoint(&self) -> &str;
    fn api_key(&self) -> &str;
    fn input_path(&self) -> &str;
    fn output_path(&self) -> &str;
}

/// Resolves the driving distance and duration for one origin/destination pair.
#[async_trait]
pub trait DistanceLookup: Send + Sync {
    async fn lookup(&self, origin: &str, destination: &str) -> Result<LookupResult>;
}

#[async_trait]
pub trait Pipeline: Send + Sync {
    async fn extract(&self) -> Result<Vec<RouteRow>>;
    async fn transform(&self, rows: Vec<RouteRow>) -> Result<RouteReport>;
    async fn load(&self, report: RouteReport) -> Result<String>;
}
