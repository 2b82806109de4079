use crate::domain::model::{Content, GenerationConfig};
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
    fn base_url(&self) -> &str;
    fn api_key(&self) -> Option<&str>;
    fn model(&self) -> &str;
    fn timeout_seconds(&self) -> u64;
    fn generation(&self) -> &GenerationConfig;
    fn output_dir(&self) -> &str;
}

/// 遠端文字生成服務
#[async_trait]
pub trait TextGenerator: Send + Sync {
    async fn generate(&self, contents: &[Content], config: &GenerationConfig) -> Result<String>;
}
