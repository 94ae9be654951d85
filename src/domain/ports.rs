use crate::domain::model::ValidatorSettings;
use crate::utils::error::Result;

pub trait Storage: Send + Sync {
    fn read_file(&self, path: &str) -> impl std::future::Future<Output = Result<Vec<u8>>> + Send;
    fn write_file(
        &self,
        path: &str,
        data: &[u8],
    ) -> impl std::future::Future<Output = Result<()>> + Send;
}

/// 任何設定來源 (CLI、TOML、Lambda 環境變數) 都要能產生驗證器設定
pub trait SettingsProvider: Send + Sync {
    fn validator_settings(&self) -> ValidatorSettings;
}
