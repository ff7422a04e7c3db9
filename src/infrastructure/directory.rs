//! HTTP client for the IBGE localities API.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::Url;
use serde::de::DeserializeOwned;
use tracing::debug;

use crate::domain::{
    city_options, state_options, CityRecord, Directory, DirectoryError, DirectoryResult,
    SelectOption, StateRecord,
};

pub const DEFAULT_API_URL: &str = "https://servicodados.ibge.gov.br/api/v1/localidades";

/// [`Directory`] backed by the IBGE REST service.
#[derive(Debug, Clone)]
pub struct IbgeDirectory {
    client: reqwest::Client,
    base_url: Url,
    timeout: Duration,
}

impl IbgeDirectory {
    /// Builds a client for `base_url` whose requests give up after `timeout`.
    pub fn new(base_url: &str, timeout: Duration) -> DirectoryResult<Self> {
        let raw = base_url.trim().trim_end_matches('/');
        let base_url = Url::parse(raw).map_err(|err| DirectoryError::InvalidUrl {
            url: raw.to_string(),
            reason: err.to_string(),
        })?;
        if base_url.cannot_be_a_base() {
            return Err(DirectoryError::InvalidUrl {
                url: raw.to_string(),
                reason: "not a hierarchical URL".to_string(),
            });
        }
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|source| DirectoryError::Http {
                url: raw.to_string(),
                source,
            })?;
        Ok(Self {
            client,
            base_url,
            timeout,
        })
    }

    pub fn base_url(&self) -> &str {
        self.base_url.as_str()
    }

    /// Appends `segments` to the base URL, percent-encoding each one.
    fn endpoint(&self, segments: &[&str]) -> DirectoryResult<Url> {
        let mut url = self.base_url.clone();
        url.path_segments_mut()
            .map_err(|()| DirectoryError::InvalidUrl {
                url: self.base_url.to_string(),
                reason: "not a hierarchical URL".to_string(),
            })?
            .pop_if_empty()
            .extend(segments);
        Ok(url)
    }

    async fn get_json<T: DeserializeOwned>(&self, segments: &[&str]) -> DirectoryResult<T> {
        let endpoint = self.endpoint(segments)?;
        let url = endpoint.to_string();
        debug!(%url, "GET");

        let response = self
            .client
            .get(endpoint)
            .send()
            .await
            .map_err(|err| self.transport_error(&url, err))?;

        let status = response.status();
        if !status.is_success() {
            return Err(DirectoryError::Status {
                url,
                status: status.as_u16(),
            });
        }

        let body = response
            .bytes()
            .await
            .map_err(|err| self.transport_error(&url, err))?;
        serde_json::from_slice(&body).map_err(|err| DirectoryError::Decode {
            url,
            reason: err.to_string(),
        })
    }

    fn transport_error(&self, url: &str, err: reqwest::Error) -> DirectoryError {
        if err.is_timeout() {
            DirectoryError::Timeout {
                url: url.to_string(),
                after: self.timeout,
            }
        } else {
            DirectoryError::Http {
                url: url.to_string(),
                source: err,
            }
        }
    }
}

#[async_trait]
impl Directory for IbgeDirectory {
    async fn states(&self) -> DirectoryResult<Vec<SelectOption>> {
        let records: Vec<StateRecord> = self.get_json(&["estados"]).await?;
        Ok(state_options(records))
    }

    async fn cities(&self, uf: &str) -> DirectoryResult<Vec<SelectOption>> {
        let records: Vec<CityRecord> = self.get_json(&["estados", uf, "municipios"]).await?;
        Ok(city_options(records))
    }
}
