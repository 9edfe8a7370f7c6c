//! Request and TLD status models
//!
//! The portal reuses the same words for two different things: the lifecycle
//! of a single zone request, and whether a TLD can be requested right now.
//! They are kept as separate types so one can never be passed for the other.

use serde_with::{DeserializeFromStr, SerializeDisplay};

/// Lifecycle state of a zone request.
///
/// `Unset` is only meaningful as a listing filter value ("any status") and
/// encodes as the empty string.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Default, SerializeDisplay, DeserializeFromStr,
)]
pub enum RequestStatus {
    #[default]
    Unset,
    Submitted,
    Pending,
    Approved,
    Denied,
    Revoked,
    Expired,
}

crate::impl_domain_status_conversions!(RequestStatus {
    Unset => "",
    Submitted => "Submitted",
    Pending => "Pending",
    Approved => "Approved",
    Denied => "Denied",
    Revoked => "Revoked",
    Expired => "Expired",
});

impl RequestStatus {
    /// Whether this value narrows a listing query.
    pub const fn is_filter(&self) -> bool {
        !matches!(self, Self::Unset)
    }
}

/// Whether a TLD can currently be requested.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, SerializeDisplay, DeserializeFromStr)]
pub enum AvailabilityStatus {
    Available,
    Submitted,
    Pending,
    Approved,
    Denied,
    Expired,
    Revoked,
}

crate::impl_domain_status_conversions!(AvailabilityStatus {
    Available => "available",
    Submitted => "submitted",
    Pending => "pending",
    Approved => "approved",
    Denied => "denied",
    Expired => "expired",
    Revoked => "revoked",
});

impl AvailabilityStatus {
    /// Statuses from which a fresh request is accepted.
    ///
    /// `Revoked` has not been observed from the portal; its inclusion is
    /// assumed, not confirmed.
    pub const REQUESTABLE: [Self; 4] = [Self::Available, Self::Expired, Self::Denied, Self::Revoked];

    /// True when a new request for the TLD makes sense. TLDs that are
    /// submitted, pending or approved already have an active request.
    pub const fn is_requestable(&self) -> bool {
        matches!(self, Self::Available | Self::Expired | Self::Denied | Self::Revoked)
    }
}
