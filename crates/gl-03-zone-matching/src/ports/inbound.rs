//! # Inbound Ports
//!
//! API trait defining what Zone Matching can do.

use async_trait::async_trait;
use shared_types::{Coordinates, ZoneInfo};

use crate::domain::ZoneError;

/// Zone matcher - inbound port.
#[async_trait]
pub trait ZoneMatcherApi: Send + Sync {
    /// Resolve the zone serving `coordinates`.
    ///
    /// `Ok(None)` is a confirmed out-of-zone answer. `Err` means the answer
    /// is unknown and must not be treated as out of zone.
    async fn resolve(&self, coordinates: Coordinates) -> Result<Option<ZoneInfo>, ZoneError>;

    /// Delivery window label for a zone.
    fn delivery_time_label(&self, zone: &ZoneInfo) -> String;
}
