//! The `TripEngine` — aggregate owning one delivery trip.

use std::collections::{HashMap, HashSet};

use trip_core::{RoutingOptions, Stop, StopId, StopPatch, Timestamp};
use trip_nav::{ArrivalEvent, NavEvent, NavState, Navigator, WaypointEta};
use trip_otp::{OtpConfig, OtpRng, OtpSession, OtpStatus, VerificationBackend};
use trip_store::{Rebuild, StoreError, WaypointStore};

use crate::{
    DeliverySummary, EngineError, EngineResult, OpenVerification, PendingGate, SummaryRow,
    TripObserver,
};

/// What the engine did with an arrival event.
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub enum ArrivalOutcome {
    /// The trip had already ended; the event was absorbed.
    Ignored,
    /// The stop already carried a terminal verification record; no flow was
    /// reopened.
    AlreadyResolved,
    /// A verification flow was already open; the event now waits in the
    /// gate's FIFO queue.
    Queued,
    /// The gate opened a verification flow for this stop.
    VerificationOpened,
    /// The arrival completed the trip (final stop, already resolved).
    TripEnded,
}

/// Orchestrates one multi-stop trip against a navigation collaborator `N`
/// and a verification backend `V`.
///
/// All externally triggered transitions — arrivals, verification entries,
/// dispatch mutations — are methods here and run to completion before the
/// next event.  Auxiliary state (verification records, arrived set, ETA
/// table) is keyed by stable [`StopId`], so mid-trip insertions and removals
/// never require re-keying.
pub struct TripEngine<N: Navigator, V: VerificationBackend> {
    /// The navigation collaborator.
    pub navigator: N,

    backend: V,
    rng: OtpRng,
    otp_config: OtpConfig,

    store: WaypointStore,
    gate: PendingGate,

    /// Terminal verification outcome per stop.  Absent means pending.
    records: HashMap<StopId, OtpStatus>,
    /// Stops the collaborator has reported reaching.
    arrived: HashSet<StopId>,
    /// Latest per-stop ETA reports.
    etas: HashMap<StopId, WaypointEta>,

    guidance_active: bool,
    simulation_active: bool,
    /// Simulation was suspended when the gate opened; resume it on close.
    was_simulating: bool,
    /// Guidance stayed running while the gate was open; re-engage camera
    /// follow on close.
    was_guiding: bool,
    /// An intermediate arrival happened; the route must be rebuilt (minus
    /// delivered waypoints) before movement resumes.
    route_dirty: bool,

    ended: bool,
    reroute_count: u32,
    last_speeding_pct: Option<f64>,
}

impl<N: Navigator, V: VerificationBackend> TripEngine<N, V> {
    pub fn new(navigator: N, backend: V, otp_config: OtpConfig, rng: OtpRng) -> Self {
        Self {
            navigator,
            backend,
            rng,
            otp_config,
            store: WaypointStore::new(),
            gate: PendingGate::new(),
            records: HashMap::new(),
            arrived: HashSet::new(),
            etas: HashMap::new(),
            guidance_active: false,
            simulation_active: false,
            was_simulating: false,
            was_guiding: false,
            route_dirty: false,
            ended: false,
            reroute_count: 0,
            last_speeding_pct: None,
        }
    }

    // ── Trip setup and movement controls ──────────────────────────────────

    /// Replace the stop sequence and start a fresh trip.
    ///
    /// Resets every per-trip flag and auxiliary map, then hands the full
    /// sequence to the collaborator for an initial route build.
    pub fn set_stops<O: TripObserver>(
        &mut self,
        stops: Vec<Stop>,
        options: RoutingOptions,
        observer: &mut O,
    ) {
        let effect = self.store.set_all(stops, options);
        self.gate = PendingGate::new();
        self.records.clear();
        self.arrived.clear();
        self.etas.clear();
        self.route_dirty = false;
        self.was_simulating = false;
        self.was_guiding = false;
        self.ended = false;
        self.reroute_count = 0;
        self.last_speeding_pct = None;
        self.apply_effect(effect, observer);
    }

    pub fn start_guidance(&mut self) {
        self.navigator.start_guidance();
        self.guidance_active = true;
    }

    pub fn stop_guidance(&mut self) {
        self.navigator.stop_guidance();
        self.guidance_active = false;
        self.was_guiding = false;
    }

    /// Start (or resume) simulated movement along the route.
    ///
    /// Applies any deferred post-arrival rebuild first so the simulator
    /// follows a route that excludes delivered waypoints.
    pub fn start_simulation<O: TripObserver>(&mut self, observer: &mut O) {
        if self.route_dirty && self.store.current_index() < self.store.len() {
            self.rebuild_route(observer);
            self.route_dirty = false;
        }
        self.navigator.start_simulation();
        self.simulation_active = true;
    }

    pub fn stop_simulation(&mut self) {
        self.navigator.stop_simulation();
        self.simulation_active = false;
        self.was_simulating = false;
    }

    // ── Arrival admission (the gate algorithm) ────────────────────────────

    /// Consume an arrival event from the collaborator.
    ///
    /// Implements the admission algorithm: absorb post-end duplicates, skip
    /// already-resolved stops (finalizing the trip if the stop was final),
    /// queue behind an open flow, otherwise suspend simulated movement and
    /// open a verification flow.
    pub fn handle_arrival<O: TripObserver>(
        &mut self,
        event: ArrivalEvent,
        now: Timestamp,
        observer: &mut O,
    ) -> EngineResult<ArrivalOutcome> {
        if self.ended {
            log::debug!(
                "trip already ended; ignoring arrival at index {}",
                event.waypoint_index
            );
            return Ok(ArrivalOutcome::Ignored);
        }

        let id = self
            .store
            .id_at(event.waypoint_index)
            .ok_or(EngineError::StaleArrival {
                index: event.waypoint_index,
            })?;

        self.arrived.insert(id);
        self.store.advance_past(event.waypoint_index);
        if !event.is_final {
            // Completed legs must drop out of the route before movement
            // resumes; deferred until the verification flow closes.
            self.route_dirty = true;
        }

        self.admit(id, event, now, observer)
    }

    /// Admission for an arrival whose stop identity is already resolved.
    ///
    /// Also the re-entry point for queued arrivals: the index space may have
    /// shifted while the event waited, so the current index is re-derived
    /// from the stable id, and arrivals whose stop has since been removed
    /// are dropped.
    fn admit<O: TripObserver>(
        &mut self,
        id: StopId,
        event: ArrivalEvent,
        now: Timestamp,
        observer: &mut O,
    ) -> EngineResult<ArrivalOutcome> {
        let Some(index) = self.store.index_of(id) else {
            log::debug!("arrival for removed stop {id}; dropping");
            return Ok(ArrivalOutcome::Ignored);
        };

        if let Some(status) = self.records.get(&id).copied() {
            if status.is_terminal() {
                log::debug!("stop {id} already resolved as {status}; not reopening verification");
                if event.is_final {
                    self.finish_trip(observer);
                    return Ok(ArrivalOutcome::TripEnded);
                }
                return Ok(ArrivalOutcome::AlreadyResolved);
            }
        }

        if self.gate.is_open() {
            log::debug!("verification open; queueing arrival for stop {id}");
            self.gate.enqueue(id, event);
            return Ok(ArrivalOutcome::Queued);
        }

        // Open the gate.  Only the simulated-movement driver is paused;
        // stopping guidance would reset the collaborator's waypoint-visited
        // bookkeeping.
        if self.simulation_active {
            self.was_simulating = true;
            self.navigator.stop_simulation();
            self.simulation_active = false;
        } else if self.guidance_active {
            self.was_guiding = true;
        }

        let mut session = OtpSession::new(self.otp_config);
        if let Err(e) = session.generate(index, &mut self.backend, &mut self.rng, now) {
            // The flow still opens in the failed state; the driver can
            // regenerate or cancel from there.
            log::warn!("OTP delivery failed for waypoint {index}: {e}");
        }
        self.gate.open(OpenVerification {
            stop: id,
            waypoint_index: index,
            is_final: event.is_final,
            session,
        });
        observer.on_verification_opened(index, event.is_final);
        Ok(ArrivalOutcome::VerificationOpened)
    }

    // ── Verification flow ─────────────────────────────────────────────────

    /// Check a driver-entered code against the open flow.
    ///
    /// A correct entry resolves the flow as verified, resumes movement, and
    /// drains the arrival queue (or ends the trip if the stop was final).
    pub fn submit_code<O: TripObserver>(
        &mut self,
        entered: &str,
        now: Timestamp,
        observer: &mut O,
    ) -> EngineResult<bool> {
        let open = self
            .gate
            .open_mut()
            .ok_or(EngineError::NoOpenVerification)?;
        let index = open.waypoint_index;
        let ok = open
            .session
            .verify(index, entered, &mut self.backend, now)?;
        if ok {
            self.resolve(OtpStatus::Verified, now, observer)?;
        }
        Ok(ok)
    }

    /// Dismiss the open flow without a code.
    pub fn cancel_verification<O: TripObserver>(
        &mut self,
        now: Timestamp,
        observer: &mut O,
    ) -> EngineResult<()> {
        self.resolve(OtpStatus::Cancelled, now, observer)
    }

    /// Record the open flow's stop as skipped without verifying.
    pub fn skip_verification<O: TripObserver>(
        &mut self,
        now: Timestamp,
        observer: &mut O,
    ) -> EngineResult<()> {
        self.resolve(OtpStatus::Skipped, now, observer)
    }

    /// Reset a failed or expired flow and deliver a fresh code.
    pub fn regenerate_code(&mut self, now: Timestamp) -> EngineResult<()> {
        let open = self
            .gate
            .open_mut()
            .ok_or(EngineError::NoOpenVerification)?;
        open.session.reset();
        open.session
            .generate(open.waypoint_index, &mut self.backend, &mut self.rng, now)?;
        Ok(())
    }

    /// Advance the OTP expiry countdown.
    pub fn tick<O: TripObserver>(&mut self, now: Timestamp, observer: &mut O) {
        if self.ended {
            return;
        }
        if let Some(open) = self.gate.open_mut() {
            if open.session.tick(now) {
                observer.on_verification_expired(open.waypoint_index);
            }
        }
    }

    /// Close the gate with `status`, resume movement, and re-admit queued
    /// arrivals in FIFO order.
    fn resolve<O: TripObserver>(
        &mut self,
        status: OtpStatus,
        now: Timestamp,
        observer: &mut O,
    ) -> EngineResult<()> {
        let open = self.gate.close().ok_or(EngineError::NoOpenVerification)?;
        self.records.insert(open.stop, status);
        observer.on_verification_closed(open.waypoint_index, status);

        if open.is_final {
            self.finish_trip(observer);
            return Ok(());
        }

        if self.was_simulating {
            self.was_simulating = false;
            if self.route_dirty {
                self.rebuild_route(observer);
                self.route_dirty = false;
            }
            self.navigator.start_simulation();
            self.simulation_active = true;
        } else if self.was_guiding {
            self.was_guiding = false;
            // Guidance was never stopped; just re-engage camera follow.
            self.navigator.recenter_camera();
        }

        while let Some((id, queued)) = self.gate.pop_queued() {
            match self.admit(id, queued, now, observer)? {
                ArrivalOutcome::VerificationOpened | ArrivalOutcome::TripEnded => break,
                _ => {}
            }
        }
        Ok(())
    }

    // ── Dispatch mutations ────────────────────────────────────────────────

    /// Add a stop (append, or insert at `at`).
    pub fn add_stop<O: TripObserver>(
        &mut self,
        stop: Stop,
        at: Option<usize>,
        observer: &mut O,
    ) -> EngineResult<StopId> {
        if self.ended {
            return Err(EngineError::TripEnded);
        }
        let (id, effect) = self.store.insert(stop, at);
        self.apply_effect(effect, observer);
        Ok(id)
    }

    /// Cancel an undelivered stop: log it as skipped, drop its auxiliary
    /// state, and remove it from the sequence.
    ///
    /// Auxiliary entries are dropped *before* the store mutation because the
    /// collaborator may synchronously report a new arrival as a side effect
    /// of the rebuild; that event must see consistent state.
    ///
    /// Ends the trip (returning the summary) if no undelivered stops remain.
    pub fn skip_stop<O: TripObserver>(
        &mut self,
        index: usize,
        observer: &mut O,
    ) -> EngineResult<Option<DeliverySummary>> {
        if self.ended {
            return Err(EngineError::TripEnded);
        }
        let id = self.store.id_at(index).ok_or(StoreError::IndexOutOfRange {
            index,
            len: self.store.len(),
        })?;

        self.records.remove(&id);
        self.arrived.remove(&id);
        self.etas.remove(&id);

        let (_, effect) = self.store.skip_at(index)?;
        self.apply_effect(effect, observer);

        if self.undelivered_count() == 0 {
            return Ok(self.finish_trip(observer));
        }
        Ok(None)
    }

    /// Patch a stop's details.  Metadata-only edits never re-route; a real
    /// position change on an unreached stop does.
    pub fn update_stop<O: TripObserver>(
        &mut self,
        index: usize,
        patch: &StopPatch,
        observer: &mut O,
    ) -> EngineResult<()> {
        if self.ended {
            return Err(EngineError::TripEnded);
        }
        let effect = self.store.update_at(index, patch)?;
        self.apply_effect(effect, observer);
        Ok(())
    }

    // ── Trip termination ──────────────────────────────────────────────────

    /// End the trip explicitly.
    ///
    /// Idempotent: the first call stops movement, emits the summary through
    /// the observer, and returns it; later calls return `None` and emit
    /// nothing.  `reason` is recorded in the log only.
    pub fn end_trip<O: TripObserver>(
        &mut self,
        reason: &str,
        observer: &mut O,
    ) -> Option<DeliverySummary> {
        if !self.ended {
            log::info!("ending trip: {reason}");
        }
        self.finish_trip(observer)
    }

    fn finish_trip<O: TripObserver>(&mut self, observer: &mut O) -> Option<DeliverySummary> {
        if self.ended {
            log::debug!("duplicate end-trip trigger absorbed");
            return None;
        }
        self.ended = true;
        self.navigator.stop_guidance();
        self.navigator.stop_simulation();
        self.guidance_active = false;
        self.simulation_active = false;
        self.was_guiding = false;
        self.was_simulating = false;
        // Any open countdown dies with the trip; late verification results
        // find the gate closed.
        self.gate.close();
        self.gate.clear_queue();

        let summary = self.build_summary();
        observer.on_trip_ended(&summary);
        Some(summary)
    }

    /// Deterministic projection of the whole trip: one row per active stop,
    /// then one per skipped stop.  Never mutates trip state.
    pub fn build_summary(&self) -> DeliverySummary {
        let mut rows: Vec<SummaryRow> = self
            .store
            .iter()
            .map(|(id, stop)| {
                let status = self.records.get(&id).copied().unwrap_or_default();
                SummaryRow {
                    title: stop.title.clone(),
                    position: stop.position,
                    metadata: stop.metadata.clone(),
                    delivered: self.arrived.contains(&id) && status == OtpStatus::Verified,
                    otp_status: status,
                }
            })
            .collect();
        rows.extend(self.store.skipped().iter().map(|stop| SummaryRow {
            title: stop.title.clone(),
            position: stop.position,
            metadata: stop.metadata.clone(),
            delivered: false,
            otp_status: OtpStatus::Skipped,
        }));
        DeliverySummary { rows }
    }

    // ── Collaborator telemetry ────────────────────────────────────────────

    /// Consume a non-arrival collaborator event.
    pub fn handle_nav_event<O: TripObserver>(&mut self, event: NavEvent, observer: &mut O) {
        match event {
            NavEvent::RouteReady {
                total_time_secs,
                total_distance_m,
            } => observer.on_route_ready(total_time_secs, total_distance_m),
            NavEvent::StateChanged(state) => {
                match state {
                    NavState::Navigating => self.guidance_active = true,
                    NavState::Idle | NavState::Arrived => self.guidance_active = false,
                    _ => {}
                }
                observer.on_state_changed(state);
            }
            NavEvent::Rerouting => {
                self.reroute_count += 1;
                log::debug!("off-route; recalculation #{}", self.reroute_count);
            }
            NavEvent::Speeding {
                percent_above_limit,
            } => self.last_speeding_pct = Some(percent_above_limit),
            NavEvent::WaypointEtas(etas) => {
                self.etas.clear();
                for eta in etas {
                    match self.store.id_at(eta.waypoint_index) {
                        Some(id) => {
                            self.etas.insert(id, eta);
                        }
                        None => log::debug!(
                            "dropping ETA for stale waypoint index {}",
                            eta.waypoint_index
                        ),
                    }
                }
            }
        }
    }

    // ── Internals ─────────────────────────────────────────────────────────

    fn apply_effect<O: TripObserver>(&mut self, effect: Rebuild, observer: &mut O) {
        match effect {
            Rebuild::None => {}
            Rebuild::Clear => self.navigator.clear_destinations(),
            Rebuild::FromCurrent => self.rebuild_route(observer),
        }
    }

    /// Recompute the route for the remaining stops with the last-applied
    /// options, restarting guidance and simulation if they were running.
    fn rebuild_route<O: TripObserver>(&mut self, observer: &mut O) {
        let remaining = self.store.remaining_stops();
        if remaining.is_empty() {
            self.navigator.clear_destinations();
            return;
        }
        observer.on_state_changed(NavState::RouteRequested);

        let was_guiding = self.guidance_active;
        let was_simulating = self.simulation_active;
        self.navigator.stop_guidance();
        self.guidance_active = false;

        let status = self
            .navigator
            .set_destinations(&remaining, self.store.routing_options());
        if status.is_ok() {
            observer.on_state_changed(NavState::RouteReady);
            if was_guiding || was_simulating {
                self.navigator.start_guidance();
                self.guidance_active = true;
            }
            if was_simulating {
                self.navigator.start_simulation();
                self.simulation_active = true;
            }
        } else {
            log::warn!("route rebuild failed: {status}");
            observer.on_state_changed(NavState::Error(status));
        }
    }

    /// Active stops with no terminal verification record.
    fn undelivered_count(&self) -> usize {
        self.store
            .iter()
            .filter(|(id, _)| {
                self.records
                    .get(id)
                    .map(|s| !s.is_terminal())
                    .unwrap_or(true)
            })
            .count()
    }

    // ── Accessors ─────────────────────────────────────────────────────────

    pub fn store(&self) -> &WaypointStore {
        &self.store
    }

    pub fn is_ended(&self) -> bool {
        self.ended
    }

    pub fn gate_is_open(&self) -> bool {
        self.gate.is_open()
    }

    pub fn queued_arrivals(&self) -> usize {
        self.gate.queued_len()
    }

    /// The open verification flow, if any.
    pub fn open_verification(&self) -> Option<&OpenVerification> {
        self.gate.open_ref()
    }

    /// Latest reported ETA for the stop with `id`.
    pub fn eta_for(&self, id: StopId) -> Option<&WaypointEta> {
        self.etas.get(&id)
    }

    pub fn reroute_count(&self) -> u32 {
        self.reroute_count
    }

    pub fn last_speeding_pct(&self) -> Option<f64> {
        self.last_speeding_pct
    }

    /// The active route's polyline, straight from the collaborator.
    pub fn route_polyline(&mut self) -> Vec<trip_core::GeoPoint> {
        self.navigator.current_route_polyline()
    }

    pub fn is_simulating(&self) -> bool {
        self.simulation_active
    }

    pub fn is_guiding(&self) -> bool {
        self.guidance_active
    }
}
