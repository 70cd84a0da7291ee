//! The pending-verification gate: single-slot admission control.

use std::collections::VecDeque;

use trip_core::StopId;
use trip_nav::ArrivalEvent;
use trip_otp::OtpSession;

/// The verification flow currently holding the gate open.
pub struct OpenVerification {
    /// Stable id of the stop being verified.
    pub stop: StopId,
    /// The waypoint index the collaborator reported at arrival time, passed
    /// through to the backend for order correlation.
    pub waypoint_index: usize,
    /// Whether this stop was the final destination of the active route.
    pub is_final: bool,
    /// The OTP flow itself.
    pub session: OtpSession,
}

/// At most one verification flow is open at any time; arrivals that land
/// while it is open wait in a FIFO queue and are re-admitted strictly in
/// arrival order once the open flow resolves.
///
/// Queued arrivals carry the [`StopId`] resolved at receipt time, not just
/// the raw waypoint index — a dispatch mutation while the gate is open can
/// shift the index space before the queue drains.
#[derive(Default)]
pub struct PendingGate {
    open: Option<OpenVerification>,
    queue: VecDeque<(StopId, ArrivalEvent)>,
}

impl PendingGate {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_open(&self) -> bool {
        self.open.is_some()
    }

    /// Open the gate.  Panics in debug builds if it is already open — the
    /// admission algorithm must queue instead.
    pub fn open(&mut self, verification: OpenVerification) {
        debug_assert!(self.open.is_none(), "gate already open");
        self.open = Some(verification);
    }

    /// Close the gate, returning the flow that held it.
    pub fn close(&mut self) -> Option<OpenVerification> {
        self.open.take()
    }

    pub fn open_ref(&self) -> Option<&OpenVerification> {
        self.open.as_ref()
    }

    pub fn open_mut(&mut self) -> Option<&mut OpenVerification> {
        self.open.as_mut()
    }

    /// Queue an arrival that landed while the gate was open.
    pub fn enqueue(&mut self, stop: StopId, event: ArrivalEvent) {
        self.queue.push_back((stop, event));
    }

    /// Pop the oldest queued arrival.
    pub fn pop_queued(&mut self) -> Option<(StopId, ArrivalEvent)> {
        self.queue.pop_front()
    }

    pub fn queued_len(&self) -> usize {
        self.queue.len()
    }

    /// Drop every queued arrival (trip teardown).
    pub fn clear_queue(&mut self) {
        self.queue.clear();
    }
}
