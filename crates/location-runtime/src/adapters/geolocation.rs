//! Device position from configuration.

use async_trait::async_trait;
use shared_types::Coordinates;

use gl_06_address_entry::{GeolocationError, GeolocationProvider, LocationPermission};

/// [`GeolocationProvider`] reporting a configured position.
///
/// Permission is always granted; without a configured position every read
/// fails as unavailable.
#[derive(Clone, Debug, Default)]
pub struct FixedGeolocation {
    position: Option<Coordinates>,
}

impl FixedGeolocation {
    /// Provider at `position`, or without a fix when `None`.
    pub fn new(position: Option<Coordinates>) -> Self {
        Self { position }
    }
}

#[async_trait]
impl GeolocationProvider for FixedGeolocation {
    async fn request_permission(&self) -> LocationPermission {
        LocationPermission::Granted
    }

    async fn current_position(&self) -> Result<Coordinates, GeolocationError> {
        self.position.ok_or_else(|| {
            GeolocationError::Unavailable("no device position configured".to_string())
        })
    }
}
