//! Asset href signing.
//!
//! Planetary Computer gates its blob storage behind SAS tokens; every
//! asset href must be signed before the raster reader can fetch it.
//! Catalogs with public assets use [`NoopSigner`].

use std::time::Duration;

use async_trait::async_trait;
use serde::Deserialize;

use crate::error::{RasterError, Result};
use crate::ports::AssetSigner;

/// Planetary Computer SAS signing endpoint.
pub const PC_SIGN_ENDPOINT: &str = "https://planetarycomputer.microsoft.com/api/sas/v1/sign";

const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

#[derive(Debug, Deserialize)]
struct SignResponse {
    href: String,
}

/// Signer for the Planetary Computer `/sign` endpoint.
pub struct PlanetaryComputerSigner {
    client: reqwest::Client,
    endpoint: String,
}

impl PlanetaryComputerSigner {
    /// Create a signer against the public Planetary Computer endpoint.
    pub fn new() -> Result<Self> {
        Self::with_endpoint(PC_SIGN_ENDPOINT)
    }

    /// Create a signer against a custom endpoint (tests, proxies).
    pub fn with_endpoint(endpoint: &str) -> Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(DEFAULT_TIMEOUT)
            .build()
            .map_err(|e| RasterError::Signing(format!("failed to build HTTP client: {e}")))?;

        Ok(Self { client, endpoint: endpoint.to_string() })
    }
}

#[async_trait]
impl AssetSigner for PlanetaryComputerSigner {
    async fn sign(&self, href: &str) -> Result<String> {
        let resp = self
            .client
            .get(&self.endpoint)
            .query(&[("href", href)])
            .send()
            .await
            .map_err(|e| RasterError::Signing(format!("sign request failed: {e}")))?;

        if !resp.status().is_success() {
            let status = resp.status();
            let body = resp.text().await.unwrap_or_default();
            return Err(RasterError::Signing(format!(
                "sign endpoint returned HTTP {}: {}",
                status,
                body.chars().take(300).collect::<String>()
            )));
        }

        let signed: SignResponse = resp
            .json()
            .await
            .map_err(|e| RasterError::Signing(format!("parsing sign response: {e}")))?;

        tracing::debug!(href, "signed asset href");
        Ok(signed.href)
    }
}

/// Identity signer for catalogs whose assets need no authorization.
pub struct NoopSigner;

#[async_trait]
impl AssetSigner for NoopSigner {
    async fn sign(&self, href: &str) -> Result<String> {
        Ok(href.to_string())
    }
}
