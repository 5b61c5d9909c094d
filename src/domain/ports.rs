use crate::domain::model::{Airport, Country};
use crate::utils::error::Result;
use async_trait::async_trait;

pub trait Storage: Send + Sync {
    fn write_file(
        &self,
        path: &str,
        data: &[u8],
    ) -> impl std::future::Future<Output = Result<String>> + Send;
}

pub trait ConfigProvider: Send + Sync {
    fn countries_endpoint(&self) -> Option<&str>;
    fn airports_endpoint(&self) -> Option<&str>;
    fn reference_enabled(&self) -> bool;
    fn output_path(&self) -> &str;
}

/// Source of the reference lists that feed the destination and airport choices.
#[async_trait]
pub trait ReferenceSource: Send + Sync {
    async fn fetch_countries(&self) -> Result<Vec<Country>>;
    async fn fetch_airports(&self) -> Result<Vec<Airport>>;
}
