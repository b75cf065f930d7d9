use std::sync::Arc;

use imds_model::Env;
use time::{Duration, OffsetDateTime, macros::datetime};

use super::*;
use crate::{
    clock::ManualClock,
    gate::TokenMode,
    service::{MetadataHandler, MetadataRequest, MetadataService},
};

const START: OffsetDateTime = datetime!(2026-10-16 12:00:00 UTC);

fn service(env: Env) -> (MetadataService<Env, Arc<ManualClock>>, Arc<ManualClock>) {
    let clock = Arc::new(ManualClock::new(START));
    let svc = MetadataService::start(env, clock.clone()).unwrap();
    (svc, clock)
}

fn outcome(svc: &impl MetadataHandler, req: MetadataRequest<'_>) -> Outcome {
    svc.handle(&req).outcome
}

fn v2() -> Env {
    Env::new().with("ENABLE_IMDS_V2", "true")
}

#[test]
fn unknown_path_falls_back_to_empty_json() {
    let (svc, _) = service(Env::new());
    assert_eq!(outcome(&svc, MetadataRequest::get("/unknown/path")), Outcome::EmptyJson);
    assert_eq!(outcome(&svc, MetadataRequest::get("/latest/meta-data/")), Outcome::EmptyJson);
}

#[test]
fn static_paths_serve_fixed_values() {
    let (svc, _) = service(Env::new());
    for (path, value) in STATIC_PATHS {
        let first = outcome(&svc, MetadataRequest::get(path));
        let second = outcome(&svc, MetadataRequest::get(path));
        assert_eq!(first, Outcome::Text(value));
        assert_eq!(first, second);
    }
}

#[test]
fn token_path_without_v2_is_plain_fallback() {
    let (svc, _) = service(Env::new());
    let reply = svc.handle(&MetadataRequest::put(paths::TOKEN));
    assert_eq!(reply.token_mode, TokenMode::V2Disabled);
    assert_eq!(reply.outcome, Outcome::EmptyJson);
}

#[test]
fn token_path_with_v2_requires_put() {
    let (svc, _) = service(v2());
    assert_eq!(outcome(&svc, MetadataRequest::put(paths::TOKEN)), Outcome::TokenIssued);
    assert_eq!(
        outcome(&svc, MetadataRequest::get(paths::TOKEN)),
        Outcome::MethodNotAllowed
    );
    let post = MetadataRequest {
        method: "POST",
        path: paths::TOKEN,
        token: None,
    };
    assert_eq!(outcome(&svc, post), Outcome::MethodNotAllowed);
}

#[test]
fn unprotected_paths_ignore_token_gate() {
    let (svc, _) = service(v2());
    let reply = svc.handle(&MetadataRequest::get(paths::INSTANCE_ID));
    assert_eq!(reply.token_mode, TokenMode::V2Enabled);
    assert_eq!(reply.outcome, Outcome::Text("i-1234567890abcdef0"));
}

#[test]
fn spot_action_reports_fixed_reclaim_time() {
    let (svc, clock) = service(Env::new());
    let expected = Outcome::InstanceAction(InstanceAction::terminate("2026-10-16T12:02:00Z"));

    assert_eq!(outcome(&svc, MetadataRequest::get(paths::SPOT_INSTANCE_ACTION)), expected);
    clock.advance(Duration::minutes(10));
    assert_eq!(outcome(&svc, MetadataRequest::get(paths::SPOT_INSTANCE_ACTION)), expected);
}

#[test]
fn scheduled_events_window_tracks_request_time() {
    let (svc, clock) = service(Env::new());

    let Outcome::ScheduledEvents(first) =
        outcome(&svc, MetadataRequest::get(paths::SCHEDULED_MAINTENANCE_EVENTS))
    else {
        panic!("expected scheduled events");
    };
    clock.advance(Duration::minutes(1));
    let Outcome::ScheduledEvents(second) =
        outcome(&svc, MetadataRequest::get(paths::SCHEDULED_MAINTENANCE_EVENTS))
    else {
        panic!("expected scheduled events");
    };

    assert_eq!(first.len(), 1);
    assert_eq!(first[0].not_before, "16 Oct 2026 12:02:00 GMT");
    assert_eq!(first[0].not_after, "16 Oct 2026 12:04:00 GMT");
    assert_eq!(first[0].state, "active");
    assert_eq!(second[0].not_before, "16 Oct 2026 12:03:00 GMT");
    assert_eq!(second[0].not_after, "16 Oct 2026 12:05:00 GMT");
}

#[test]
fn scheduled_event_state_is_read_per_request() {
    let (svc, _) = service(Env::new().with("SCHEDULED_EVENT_STATUS", "completed"));
    let Outcome::ScheduledEvents(events) =
        outcome(&svc, MetadataRequest::get(paths::SCHEDULED_MAINTENANCE_EVENTS))
    else {
        panic!("expected scheduled events");
    };
    assert_eq!(events[0].state, "completed");
}

#[test]
fn delay_hides_gated_paths_regardless_of_flags_and_token() {
    let env = v2()
        .with("INTERRUPTION_NOTICE_DELAY", "60")
        .with("ENABLE_SPOT_ITN", "false")
        .with("ENABLE_SCHEDULED_MAINTENANCE_EVENTS", "garbage");
    let (svc, clock) = service(env);

    for path in [paths::SPOT_INSTANCE_ACTION, paths::SCHEDULED_MAINTENANCE_EVENTS] {
        assert_eq!(outcome(&svc, MetadataRequest::get(path)), Outcome::NotYetVisible);
        assert_eq!(
            outcome(&svc, MetadataRequest::get(path).with_token("token")),
            Outcome::NotYetVisible
        );
    }

    clock.advance(Duration::seconds(59));
    assert_eq!(
        outcome(&svc, MetadataRequest::get(paths::SPOT_INSTANCE_ACTION)),
        Outcome::NotYetVisible
    );

    clock.advance(Duration::seconds(1));
    assert_eq!(
        outcome(&svc, MetadataRequest::get(paths::SPOT_INSTANCE_ACTION)),
        Outcome::FeatureDisabled
    );
}

#[test]
fn zero_delay_passes_at_process_start() {
    let (svc, _) = service(Env::new());
    assert!(matches!(
        outcome(&svc, MetadataRequest::get(paths::SPOT_INSTANCE_ACTION)),
        Outcome::InstanceAction(_)
    ));
}

#[test]
fn malformed_delay_falls_back_to_zero() {
    let (svc, _) = service(Env::new().with("INTERRUPTION_NOTICE_DELAY", "soon"));
    assert!(matches!(
        outcome(&svc, MetadataRequest::get(paths::SPOT_INSTANCE_ACTION)),
        Outcome::InstanceAction(_)
    ));
}

#[test]
fn disabled_flag_reports_feature_disabled() {
    let env = Env::new()
        .with("ENABLE_SPOT_ITN", "0")
        .with("ENABLE_SCHEDULED_MAINTENANCE_EVENTS", "not-a-bool");
    let (svc, _) = service(env);

    for path in [paths::SPOT_INSTANCE_ACTION, paths::SCHEDULED_MAINTENANCE_EVENTS] {
        assert_eq!(outcome(&svc, MetadataRequest::get(path)), Outcome::FeatureDisabled);
    }
}

#[test]
fn empty_flag_counts_as_enabled() {
    let (svc, _) = service(Env::new().with("ENABLE_SPOT_ITN", ""));
    assert!(matches!(
        outcome(&svc, MetadataRequest::get(paths::SPOT_INSTANCE_ACTION)),
        Outcome::InstanceAction(_)
    ));
}

#[test]
fn flag_is_checked_before_token() {
    let (svc, _) = service(v2().with("ENABLE_SPOT_ITN", "false"));
    assert_eq!(
        outcome(&svc, MetadataRequest::get(paths::SPOT_INSTANCE_ACTION)),
        Outcome::FeatureDisabled
    );
}

#[test]
fn v2_rejects_missing_or_wrong_token_on_gated_paths() {
    let (svc, _) = service(v2());

    for path in [paths::SPOT_INSTANCE_ACTION, paths::SCHEDULED_MAINTENANCE_EVENTS] {
        assert_eq!(outcome(&svc, MetadataRequest::get(path)), Outcome::Forbidden);
        assert_eq!(
            outcome(&svc, MetadataRequest::get(path).with_token("stale")),
            Outcome::Forbidden
        );
    }
}

#[test]
fn v2_accepts_issued_token_indefinitely() {
    let (svc, clock) = service(v2());
    assert_eq!(outcome(&svc, MetadataRequest::put(paths::TOKEN)), Outcome::TokenIssued);

    clock.advance(Duration::hours(6));
    let reply = svc.handle(&MetadataRequest::get(paths::SPOT_INSTANCE_ACTION).with_token("token"));
    assert_eq!(
        reply.outcome,
        Outcome::InstanceAction(InstanceAction::terminate("2026-10-16T12:02:00Z"))
    );
}

#[test]
fn configuration_changes_apply_without_restart() {
    let start = START;
    let times = ProcessTimes::starting_at(start).unwrap();
    let env = Arc::new(std::sync::RwLock::new(Env::new()));

    struct Shared(Arc<std::sync::RwLock<Env>>);
    impl ConfigSource for Shared {
        fn lookup(&self, key: &str) -> Option<String> {
            self.0.read().ok()?.get(key).map(str::to_owned)
        }
    }

    let svc = MetadataService::new(Shared(env.clone()), ManualClock::new(start), times);
    assert!(matches!(
        outcome(&svc, MetadataRequest::get(paths::SPOT_INSTANCE_ACTION)),
        Outcome::InstanceAction(_)
    ));

    env.write().unwrap().push("ENABLE_SPOT_ITN", "false");
    assert_eq!(
        outcome(&svc, MetadataRequest::get(paths::SPOT_INSTANCE_ACTION)),
        Outcome::FeatureDisabled
    );
}

#[test]
fn gated_path_lookup() {
    assert_eq!(
        GatedPath::from_path(paths::SPOT_INSTANCE_ACTION),
        Some(GatedPath::SpotInterruption)
    );
    assert_eq!(
        GatedPath::ScheduledMaintenance.flag_key(),
        "ENABLE_SCHEDULED_MAINTENANCE_EVENTS"
    );
    assert_eq!(GatedPath::from_path(paths::INSTANCE_ID), None);
}
