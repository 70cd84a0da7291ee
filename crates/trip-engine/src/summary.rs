//! The terminal artifact of a trip: one row per stop, active and skipped.

use std::collections::BTreeMap;

use trip_core::GeoPoint;
use trip_otp::OtpStatus;

/// One line of the delivery summary.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SummaryRow {
    pub title: String,
    pub position: GeoPoint,
    pub metadata: BTreeMap<String, String>,
    /// `true` only when the stop was both reached and verified.
    pub delivered: bool,
    pub otp_status: OtpStatus,
}

/// Ordered projection of the whole trip: active stops in sequence order,
/// then skipped stops in skip order.
///
/// Building a summary never mutates trip state; two builds with no
/// intervening mutation are structurally identical.
#[derive(Clone, Debug, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DeliverySummary {
    pub rows: Vec<SummaryRow>,
}

impl DeliverySummary {
    pub fn delivered_count(&self) -> usize {
        self.rows.iter().filter(|r| r.delivered).count()
    }

    pub fn skipped_count(&self) -> usize {
        self.rows
            .iter()
            .filter(|r| r.otp_status == OtpStatus::Skipped)
            .count()
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}
