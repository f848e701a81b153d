//! # HTTP Gateways
//!
//! reqwest implementations of the remote-capability ports. All gateways share
//! one [`ApiClient`], so they share its connection pool and timeout.
//!
//! Failure mapping:
//!
//! | Condition | Result |
//! |-----------|--------|
//! | client timeout | `TransportError::Timeout` |
//! | connect / send failure | `TransportError::Connection` |
//! | 401, 403 | `TransportError::Unauthorized` |
//! | 408, 429 on validate | `TransportError::ServerError`, never a rejection |
//! | other non-2xx (unless the endpoint gives it meaning) | `TransportError::ServerError` |
//! | undecodable body | `TransportError::Decode` |

use async_trait::async_trait;
use reqwest::{Client, RequestBuilder, Response, StatusCode};
use serde::de::DeserializeOwned;
use std::sync::Arc;
use std::time::Duration;
use tracing::{debug, warn};

use gl_01_address_search::AddressSearchGateway;
use gl_02_address_validation::{
    StandardizationError, StandardizationGateway, StandardizationRequest, StandardizationResponse,
};
use gl_03_zone_matching::{ZoneLookupGateway, ZoneLookupResponse};
use gl_05_location_sync::{AccountAddress, AccountAddressGateway};
use shared_types::{AddressSuggestion, Coordinates, DeliveryAddress, TransportError};

use super::dto::{
    AccountAddressDto, ErrorBodyDto, SuggestionDto, ValidateRequestDto, ValidateResponseDto,
    ZoneCheckDto,
};
use crate::config::ApiConfig;

/// Shared HTTP client for the remote API.
pub struct ApiClient {
    client: Client,
    base_url: String,
    timeout_ms: u64,
    auth_token: Option<String>,
}

impl ApiClient {
    /// Build the client.
    pub fn new(config: &ApiConfig) -> Result<Self, TransportError> {
        let client = Client::builder()
            .timeout(Duration::from_millis(config.timeout_ms))
            .connect_timeout(Duration::from_millis(config.timeout_ms.min(5_000)))
            .build()
            .map_err(|e| TransportError::Connection(format!("failed to build HTTP client: {e}")))?;

        Ok(Self {
            client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            timeout_ms: config.timeout_ms,
            auth_token: config.auth_token.clone(),
        })
    }

    /// Whether account calls can be authenticated.
    pub fn has_credentials(&self) -> bool {
        self.auth_token.is_some()
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    fn authorized(&self, request: RequestBuilder) -> Result<RequestBuilder, TransportError> {
        match &self.auth_token {
            Some(token) => Ok(request.bearer_auth(token)),
            None => Err(TransportError::Unauthorized),
        }
    }

    /// Send, mapping only network-level failures. Status handling is the
    /// caller's.
    async fn send(
        &self,
        request: RequestBuilder,
        operation: &str,
    ) -> Result<Response, TransportError> {
        request.send().await.map_err(|e| {
            let error = self.transport_error(&e);
            warn!("[runtime] {} failed: {}", operation, error);
            error
        })
    }

    fn transport_error(&self, e: &reqwest::Error) -> TransportError {
        if e.is_timeout() {
            TransportError::Timeout {
                timeout_ms: self.timeout_ms,
            }
        } else if e.is_decode() {
            TransportError::Decode(e.to_string())
        } else {
            TransportError::Connection(e.to_string())
        }
    }

    async fn decode<T: DeserializeOwned>(&self, response: Response) -> Result<T, TransportError> {
        response.json::<T>().await.map_err(|e| {
            if e.is_timeout() {
                TransportError::Timeout {
                    timeout_ms: self.timeout_ms,
                }
            } else {
                TransportError::Decode(e.to_string())
            }
        })
    }

    /// Decode a 2xx body; map any other status.
    async fn expect_success<T: DeserializeOwned>(
        &self,
        response: Response,
    ) -> Result<T, TransportError> {
        let status = response.status();
        if !status.is_success() {
            return Err(status_error(status));
        }
        self.decode(response).await
    }
}

/// Failure for a status the endpoint gives no special meaning.
pub fn status_error(status: StatusCode) -> TransportError {
    match status {
        StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN => TransportError::Unauthorized,
        other => TransportError::ServerError {
            status: other.as_u16(),
        },
    }
}

/// Whether a validate answer with `status` is the provider refusing the
/// address. Auth, timeout and throttling statuses are transport failures.
pub fn is_rejection(status: StatusCode) -> bool {
    status.is_client_error()
        && !matches!(
            status,
            StatusCode::UNAUTHORIZED
                | StatusCode::FORBIDDEN
                | StatusCode::REQUEST_TIMEOUT
                | StatusCode::TOO_MANY_REQUESTS
        )
}

// =============================================================================
// Address search (01)
// =============================================================================

/// `POST /address/search?q=`, `GET /address/reverse?lat=&lon=`.
pub struct HttpAddressGateway {
    api: Arc<ApiClient>,
}

impl HttpAddressGateway {
    /// Create over a shared client.
    pub fn new(api: Arc<ApiClient>) -> Self {
        Self { api }
    }
}

#[async_trait]
impl AddressSearchGateway for HttpAddressGateway {
    async fn search_addresses(
        &self,
        query: &str,
    ) -> Result<Vec<AddressSuggestion>, TransportError> {
        let request = self
            .api
            .client
            .post(self.api.url("/address/search"))
            .query(&[("q", query)]);
        let response = self.api.send(request, "address search").await?;
        let results: Vec<SuggestionDto> = self.api.expect_success(response).await?;
        debug!("[runtime] address search returned {} results", results.len());
        Ok(results.into_iter().map(AddressSuggestion::from).collect())
    }

    async fn reverse_geocode(
        &self,
        coordinates: Coordinates,
    ) -> Result<Option<AddressSuggestion>, TransportError> {
        let request = self.api.client.get(self.api.url("/address/reverse")).query(&[
            ("lat", coordinates.latitude),
            ("lon", coordinates.longitude),
        ]);
        let response = self.api.send(request, "reverse geocode").await?;
        if response.status() == StatusCode::NOT_FOUND {
            return Ok(None);
        }
        let result: SuggestionDto = self.api.expect_success(response).await?;
        Ok(Some(result.into()))
    }
}

// =============================================================================
// Address validation (02)
// =============================================================================

/// `POST /address/validate`. A 4xx other than 401, 403, 408 and 429 is a
/// rejection.
pub struct HttpValidationGateway {
    api: Arc<ApiClient>,
}

impl HttpValidationGateway {
    /// Create over a shared client.
    pub fn new(api: Arc<ApiClient>) -> Self {
        Self { api }
    }
}

#[async_trait]
impl StandardizationGateway for HttpValidationGateway {
    async fn standardize(
        &self,
        request: &StandardizationRequest,
    ) -> Result<StandardizationResponse, StandardizationError> {
        let http = self
            .api
            .client
            .post(self.api.url("/address/validate"))
            .json(&ValidateRequestDto::from(request));
        let response = self.api.send(http, "address validation").await?;

        let status = response.status();
        if is_rejection(status) {
            let body: ErrorBodyDto = self.api.decode(response).await.unwrap_or_default();
            let message = body
                .message
                .filter(|m| !m.trim().is_empty())
                .unwrap_or_else(|| format!("Address rejected (HTTP {})", status.as_u16()));
            return Err(StandardizationError::Rejected(message));
        }

        let dto: ValidateResponseDto = self.api.expect_success(response).await?;
        Ok(dto.into())
    }
}

// =============================================================================
// Zone matching (03)
// =============================================================================

/// `GET /zones/check?lat=&lon=`. A 404 means out of zone.
pub struct HttpZoneGateway {
    api: Arc<ApiClient>,
}

impl HttpZoneGateway {
    /// Create over a shared client.
    pub fn new(api: Arc<ApiClient>) -> Self {
        Self { api }
    }
}

#[async_trait]
impl ZoneLookupGateway for HttpZoneGateway {
    async fn check_zone(
        &self,
        coordinates: Coordinates,
    ) -> Result<ZoneLookupResponse, TransportError> {
        let request = self.api.client.get(self.api.url("/zones/check")).query(&[
            ("lat", coordinates.latitude),
            ("lon", coordinates.longitude),
        ]);
        let response = self.api.send(request, "zone check").await?;
        if response.status() == StatusCode::NOT_FOUND {
            return Ok(ZoneLookupResponse::outside());
        }
        let dto: ZoneCheckDto = self.api.expect_success(response).await?;
        Ok(ZoneLookupResponse {
            in_service_area: dto.in_service_area,
            zone: dto.zone.map(Into::into),
        })
    }
}

// =============================================================================
// Account addresses (05)
// =============================================================================

/// `GET`/`POST /account/addresses` with bearer auth.
pub struct HttpAccountGateway {
    api: Arc<ApiClient>,
}

impl HttpAccountGateway {
    /// Create over a shared client.
    pub fn new(api: Arc<ApiClient>) -> Self {
        Self { api }
    }
}

#[async_trait]
impl AccountAddressGateway for HttpAccountGateway {
    async fn fetch_saved_addresses(&self) -> Result<Vec<AccountAddress>, TransportError> {
        let request = self
            .api
            .authorized(self.api.client.get(self.api.url("/account/addresses")))?;
        let response = self.api.send(request, "fetch account addresses").await?;
        let dtos: Vec<AccountAddressDto> = self.api.expect_success(response).await?;
        Ok(dtos
            .into_iter()
            .map(AccountAddressDto::into_account_address)
            .collect())
    }

    async fn save_address(
        &self,
        address: &DeliveryAddress,
    ) -> Result<DeliveryAddress, TransportError> {
        let request = self.api.authorized(
            self.api
                .client
                .post(self.api.url("/account/addresses"))
                .json(&AccountAddressDto::from_address(address)),
        )?;
        let response = self.api.send(request, "save account address").await?;
        let dto: AccountAddressDto = self.api.expect_success(response).await?;
        if dto.id.is_none() {
            return Err(TransportError::Decode("saved address without id".into()));
        }
        Ok(dto.into_account_address().address)
    }
}
