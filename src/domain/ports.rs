use crate::core::holidays::AllowanceTable;
use crate::domain::model::{OutputFormat, ReportInput, ReportOutput};
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
    fn base_path(&self) -> &str;
    fn input_file(&self) -> &str;
    fn output_file(&self) -> &str;
    fn output_formats(&self) -> Vec<OutputFormat>;
    fn allowances(&self) -> AllowanceTable;
}

#[async_trait]
pub trait Pipeline: Send + Sync {
    async fn extract(&self) -> Result<ReportInput>;
    async fn transform(&self, input: ReportInput) -> Result<ReportOutput>;
    async fn load(&self, output: ReportOutput) -> Result<String>;
}
