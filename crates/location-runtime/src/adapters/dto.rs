//! Wire shapes of the remote API (camelCase JSON) and their conversion into
//! domain types.

use serde::{Deserialize, Serialize};

use gl_02_address_validation::{
    Confidence, StandardizationRequest, StandardizationResponse, StandardizedAddress,
};
use gl_05_location_sync::AccountAddress;
use shared_types::{AddressLabel, AddressSuggestion, DeliveryAddress, ZoneInfo};

/// One search or reverse geocode result.
#[derive(Clone, Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SuggestionDto {
    pub id: String,
    pub street: String,
    pub city: String,
    pub state: String,
    pub zip_code: String,
    pub latitude: f64,
    pub longitude: f64,
}

impl From<SuggestionDto> for AddressSuggestion {
    fn from(dto: SuggestionDto) -> Self {
        AddressSuggestion {
            id: dto.id,
            street: dto.street,
            city: dto.city,
            state: dto.state,
            postal_code: dto.zip_code,
            latitude: dto.latitude,
            longitude: dto.longitude,
        }
    }
}

/// `POST /address/validate` body.
#[derive(Clone, Debug, Serialize)]
pub struct ValidateRequestDto<'a> {
    pub street: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub secondary: Option<&'a str>,
    pub city: &'a str,
    pub state: &'a str,
    pub zip: &'a str,
}

impl<'a> From<&'a StandardizationRequest> for ValidateRequestDto<'a> {
    fn from(request: &'a StandardizationRequest) -> Self {
        Self {
            street: &request.street,
            secondary: request.secondary.as_deref(),
            city: &request.city,
            state: &request.state,
            zip: &request.zip,
        }
    }
}

#[derive(Clone, Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GeocodedAddressDto {
    pub street: String,
    #[serde(default)]
    pub secondary: Option<String>,
    pub city: String,
    pub state: String,
    pub zip_code: String,
    #[serde(default)]
    pub latitude: Option<f64>,
    #[serde(default)]
    pub longitude: Option<f64>,
}

/// `POST /address/validate` answer.
#[derive(Clone, Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ValidateResponseDto {
    pub is_valid: bool,
    pub confidence: String,
    #[serde(default)]
    pub geocoded_address: Option<GeocodedAddressDto>,
    #[serde(default)]
    pub warnings: Vec<String>,
}

impl From<ValidateResponseDto> for StandardizationResponse {
    fn from(dto: ValidateResponseDto) -> Self {
        StandardizationResponse {
            is_valid: dto.is_valid,
            confidence: Confidence::parse(&dto.confidence),
            standardized: dto.geocoded_address.map(|g| StandardizedAddress {
                street: g.street,
                secondary: g.secondary,
                city: g.city,
                state: g.state,
                postal_code: g.zip_code,
                latitude: g.latitude,
                longitude: g.longitude,
            }),
            warnings: dto.warnings,
        }
    }
}

/// Error body of a 4xx answer.
#[derive(Clone, Debug, Default, Deserialize)]
pub struct ErrorBodyDto {
    #[serde(default)]
    pub message: Option<String>,
}

#[derive(Clone, Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ZoneDto {
    pub id: String,
    pub name: String,
    pub delivery_time_minutes: u32,
    pub delivery_fee: f64,
    #[serde(default)]
    pub free_delivery_threshold: f64,
    #[serde(default)]
    pub minimum_order: f64,
}

impl From<ZoneDto> for ZoneInfo {
    fn from(dto: ZoneDto) -> Self {
        ZoneInfo {
            zone_id: dto.id,
            name: dto.name,
            delivery_time_minutes: dto.delivery_time_minutes,
            delivery_fee: dto.delivery_fee,
            free_delivery_threshold: dto.free_delivery_threshold,
            minimum_order: dto.minimum_order,
        }
    }
}

/// `GET /zones/check` answer.
#[derive(Clone, Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ZoneCheckDto {
    pub in_service_area: bool,
    #[serde(default)]
    pub zone: Option<ZoneDto>,
}

/// Saved account address, both directions.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AccountAddressDto {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    pub street: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub secondary: Option<String>,
    pub city: String,
    pub state: String,
    pub zip_code: String,
    pub latitude: f64,
    pub longitude: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub delivery_instructions: Option<String>,
    #[serde(default)]
    pub is_default: bool,
}

impl AccountAddressDto {
    /// Outgoing body for `address`.
    pub fn from_address(address: &DeliveryAddress) -> Self {
        Self {
            id: address.remote_id.clone(),
            street: address.street.clone(),
            secondary: address.secondary.clone(),
            city: address.city.clone(),
            state: address.state.clone(),
            zip_code: address.postal_code.clone(),
            latitude: address.latitude,
            longitude: address.longitude,
            label: address.label.map(|l| l.as_str().to_string()),
            delivery_instructions: address.delivery_instructions.clone(),
            is_default: false,
        }
    }

    /// Domain form. The state is normalized to its 2-letter code.
    pub fn into_account_address(self) -> AccountAddress {
        let state = shared_types::normalize_state(&self.state)
            .map(str::to_string)
            .unwrap_or(self.state);
        AccountAddress {
            address: DeliveryAddress {
                street: self.street,
                secondary: self.secondary,
                city: self.city,
                state,
                postal_code: self.zip_code,
                latitude: self.latitude,
                longitude: self.longitude,
                label: self.label.as_deref().map(AddressLabel::parse),
                delivery_instructions: self.delivery_instructions,
                remote_id: self.id,
            },
            is_default: self.is_default,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_response_decodes() {
        let dto: ValidateResponseDto = serde_json::from_str(
            r#"{
                "isValid": true,
                "confidence": "MEDIUM",
                "geocodedAddress": {
                    "street": "123 MARKET ST",
                    "city": "SAN FRANCISCO",
                    "state": "CA",
                    "zipCode": "94102",
                    "latitude": 37.7793,
                    "longitude": -122.4193
                },
                "warnings": ["Multi-unit building"]
            }"#,
        )
        .unwrap();

        let response = StandardizationResponse::from(dto);
        assert_eq!(response.confidence, Confidence::Medium);
        assert_eq!(response.warnings.len(), 1);
        let standardized = response.standardized.unwrap();
        assert_eq!(standardized.postal_code, "94102");
        assert!(standardized.coordinates().is_some());
    }

    #[test]
    fn test_validate_request_omits_missing_secondary() {
        let request = StandardizationRequest {
            street: "123 Market St".into(),
            secondary: None,
            city: "San Francisco".into(),
            state: "CA".into(),
            zip: "94102".into(),
        };
        let json = serde_json::to_value(ValidateRequestDto::from(&request)).unwrap();
        assert_eq!(json["zip"], "94102");
        assert!(json.get("secondary").is_none());
    }

    #[test]
    fn test_zone_check_decodes() {
        let dto: ZoneCheckDto = serde_json::from_str(
            r#"{"inServiceArea": true, "zone": {"id": "sf-downtown", "name": "SF Downtown",
                "deliveryTimeMinutes": 30, "deliveryFee": 3.99,
                "freeDeliveryThreshold": 35.0, "minimumOrder": 10.0}}"#,
        )
        .unwrap();
        let zone = ZoneInfo::from(dto.zone.unwrap());
        assert_eq!(zone.zone_id, "sf-downtown");
        assert_eq!(zone.delivery_time_minutes, 30);
    }

    #[test]
    fn test_account_address_normalizes_state() {
        let dto: AccountAddressDto = serde_json::from_str(
            r#"{"id": "addr-7", "street": "1 Ferry Building", "city": "San Francisco",
                "state": "California", "zipCode": "94111", "latitude": 37.7955,
                "longitude": -122.3937, "label": "work", "isDefault": true}"#,
        )
        .unwrap();

        let account = dto.into_account_address();
        assert!(account.is_default);
        assert_eq!(account.address.state, "CA");
        assert_eq!(account.address.label, Some(AddressLabel::Work));
        assert_eq!(account.address.remote_id.as_deref(), Some("addr-7"));
    }
}
