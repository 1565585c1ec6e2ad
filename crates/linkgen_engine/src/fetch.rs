use std::time::Duration;

use linkgen_core::ParametersModel;

use crate::dto::CatalogueDto;
use crate::types::{FailureKind, FetchError};

/// Where the externally maintained catalogue document lives.
pub const DEFAULT_CATALOGUE_URL: &str =
    "https://raw.githubusercontent.com/bllizard22/link-generator/main/Identificators/parameters.json";

#[derive(Debug, Clone)]
pub struct FetchSettings {
    pub catalogue_url: String,
    pub connect_timeout: Duration,
    pub request_timeout: Duration,
}

impl Default for FetchSettings {
    fn default() -> Self {
        Self {
            catalogue_url: DEFAULT_CATALOGUE_URL.to_string(),
            connect_timeout: Duration::from_secs(10),
            request_timeout: Duration::from_secs(30),
        }
    }
}

/// Fetches the remote parameter catalogue. Knows nothing about selection
/// state; every returned entry is unselected.
#[async_trait::async_trait]
pub trait CatalogueFetcher: Send + Sync {
    async fn fetch_catalogue(&self) -> Result<ParametersModel, FetchError>;
}

#[derive(Debug, Clone)]
pub struct ReqwestCatalogueFetcher {
    settings: FetchSettings,
}

impl ReqwestCatalogueFetcher {
    pub fn new(settings: FetchSettings) -> Self {
        Self { settings }
    }

    fn build_client(&self) -> Result<reqwest::Client, FetchError> {
        reqwest::Client::builder()
            .connect_timeout(self.settings.connect_timeout)
            .timeout(self.settings.request_timeout)
            .build()
            .map_err(|err| FetchError::new(FailureKind::Network, err.to_string()))
    }
}

#[async_trait::async_trait]
impl CatalogueFetcher for ReqwestCatalogueFetcher {
    async fn fetch_catalogue(&self) -> Result<ParametersModel, FetchError> {
        let url = reqwest::Url::parse(&self.settings.catalogue_url)
            .map_err(|err| FetchError::new(FailureKind::InvalidUrl, err.to_string()))?;
        let client = self.build_client()?;

        let response = client.get(url).send().await.map_err(map_reqwest_error)?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::new(
                FailureKind::HttpStatus(status.as_u16()),
                status.to_string(),
            ));
        }

        let bytes = response.bytes().await.map_err(map_reqwest_error)?;
        let dto: CatalogueDto = serde_json::from_slice(&bytes)
            .map_err(|err| FetchError::new(FailureKind::Decode, err.to_string()))?;

        Ok(dto.into_parameters())
    }
}

fn map_reqwest_error(err: reqwest::Error) -> FetchError {
    if err.is_timeout() {
        return FetchError::new(FailureKind::Timeout, err.to_string());
    }
    FetchError::new(FailureKind::Network, err.to_string())
}
