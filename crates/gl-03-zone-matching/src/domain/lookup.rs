//! # Zone Lookup Response

use serde::{Deserialize, Serialize};
use shared_types::ZoneInfo;

use super::errors::ZoneError;

/// Raw service area answer.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ZoneLookupResponse {
    /// Whether the point is inside any delivery zone.
    pub in_service_area: bool,
    /// Zone details; required when `in_service_area` is set.
    pub zone: Option<ZoneInfo>,
}

impl ZoneLookupResponse {
    /// Answer for a point inside `zone`.
    pub fn inside(zone: ZoneInfo) -> Self {
        Self {
            in_service_area: true,
            zone: Some(zone),
        }
    }

    /// Answer for a point outside every zone.
    pub fn outside() -> Self {
        Self {
            in_service_area: false,
            zone: None,
        }
    }

    /// Collapse into the three-way result.
    ///
    /// `in_service_area` wins over a stray zone payload; claiming service
    /// without zone details is malformed, not out of zone.
    pub fn interpret(self) -> Result<Option<ZoneInfo>, ZoneError> {
        match (self.in_service_area, self.zone) {
            (true, Some(zone)) => {
                if zone.zone_id.trim().is_empty() {
                    return Err(ZoneError::MalformedResponse("zone without id".into()));
                }
                Ok(Some(zone))
            }
            (true, None) => Err(ZoneError::MalformedResponse(
                "in service area without zone details".into(),
            )),
            (false, _) => Ok(None),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn downtown() -> ZoneInfo {
        ZoneInfo {
            zone_id: "sf-downtown".into(),
            name: "SF Downtown".into(),
            delivery_time_minutes: 30,
            delivery_fee: 3.99,
            free_delivery_threshold: 35.0,
            minimum_order: 10.0,
        }
    }

    #[test]
    fn test_inside() {
        assert_eq!(ZoneLookupResponse::inside(downtown()).interpret(), Ok(Some(downtown())));
    }

    #[test]
    fn test_outside() {
        assert_eq!(ZoneLookupResponse::outside().interpret(), Ok(None));
    }

    #[test]
    fn test_zone_payload_outside_service_area_is_out_of_zone() {
        let response = ZoneLookupResponse {
            in_service_area: false,
            zone: Some(downtown()),
        };
        assert_eq!(response.interpret(), Ok(None));
    }

    #[test]
    fn test_in_service_area_without_zone_is_malformed() {
        let response = ZoneLookupResponse {
            in_service_area: true,
            zone: None,
        };
        assert!(matches!(
            response.interpret(),
            Err(ZoneError::MalformedResponse(_))
        ));
    }
}
