//! Event — an immutable lifecycle record for a device.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ValidationError;
use crate::id::{DeviceId, EventId};
use crate::time::{self, Timestamp};

/// Closed set of device lifecycle events.
///
/// The string encoding below is the persistence and wire format; treat it
/// as versioned and keep `as_str`/`from_str` in sync when extending.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EventType {
    PoweredOn,
    PoweredOff,
    Motion,
    SignalLoss,
}

impl EventType {
    /// Stable string encoding used in storage and on the wire.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::PoweredOn => "powered_on",
            Self::PoweredOff => "powered_off",
            Self::Motion => "motion",
            Self::SignalLoss => "signal_loss",
        }
    }

    /// All variants, in declaration order.
    #[must_use]
    pub fn all() -> [Self; 4] {
        [Self::PoweredOn, Self::PoweredOff, Self::Motion, Self::SignalLoss]
    }
}

impl fmt::Display for EventType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for EventType {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "powered_on" => Ok(Self::PoweredOn),
            "powered_off" => Ok(Self::PoweredOff),
            "motion" => Ok(Self::Motion),
            "signal_loss" => Ok(Self::SignalLoss),
            _ => Err(ValidationError::InvalidEventType),
        }
    }
}

/// A recorded device event. Immutable after construction — there are no
/// update or delete operations anywhere in the system.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Event {
    pub id: EventId,
    pub device_id: DeviceId,
    pub event_type: EventType,
    /// Fixed at construction; callers cannot supply it.
    pub created_at: Timestamp,
}

impl Event {
    /// Record a new event for the given device, timestamped now.
    #[must_use]
    pub fn new(device_id: DeviceId, event_type: EventType) -> Self {
        Self {
            id: EventId::new(),
            device_id,
            event_type,
            created_at: time::now(),
        }
    }
}
