//! Loading indicator timing: the table appears once both the fetch and the
//! progress simulator are done, with paused tokio time.

use std::sync::Arc;
use std::time::Duration;

use rstest::rstest;
use tokio::time::Instant;

use fleetadmin::{
    core::msg::{nav::NavMsg, Msg},
    infrastructure::clipboard::MemoryClipboard,
    integration::runtime::Runtime,
    test_helpers::{default_state, sample_drivers, StaticDriverSource},
};

/// Mounts the drivers screen, runs until loading ends, and returns how long
/// the indicator was visible plus every progress value observed.
async fn mount_and_wait(source: Arc<StaticDriverSource>) -> (Duration, Vec<u32>, Runtime) {
    let mut runtime = Runtime::new_with_executor(
        default_state(),
        source,
        Arc::new(MemoryClipboard::new()),
    );
    let start = Instant::now();
    runtime.send_msg(Msg::Nav(NavMsg::ShowDrivers));
    runtime.run_update_cycle().unwrap();

    let mut observed = vec![runtime.state().loading.progress().value()];
    while runtime.state().is_loading() {
        tokio::time::timeout(Duration::from_secs(30), runtime.recv_external())
            .await
            .expect("loading should finish");
        runtime.run_update_cycle().unwrap();
        observed.push(runtime.state().loading.progress().value());
    }
    (start.elapsed(), observed, runtime)
}

#[rstest]
#[case::fast_fetch(0, 2000)]
#[case::fetch_within_simulation(1500, 2000)]
#[case::slow_fetch(3500, 3500)]
#[tokio::test(start_paused = true)]
async fn test_visible_for_the_longer_of_fetch_and_simulation(
    #[case] latency_ms: u64,
    #[case] expected_ms: u64,
) {
    let source = Arc::new(
        StaticDriverSource::new(sample_drivers()).latency(Duration::from_millis(latency_ms)),
    );
    let (elapsed, _, runtime) = mount_and_wait(source).await;

    assert!(
        elapsed >= Duration::from_millis(expected_ms),
        "finished after {elapsed:?}"
    );
    assert!(
        elapsed < Duration::from_millis(expected_ms + 100),
        "finished after {elapsed:?}"
    );
    assert_eq!(runtime.state().table.record_count(), 5);
}

#[tokio::test(start_paused = true)]
async fn test_progress_is_monotonic_and_capped() {
    let source = Arc::new(
        StaticDriverSource::new(sample_drivers()).latency(Duration::from_millis(3000)),
    );
    let (_, observed, _) = mount_and_wait(source).await;

    assert_eq!(observed.first(), Some(&0));
    assert_eq!(observed.last(), Some(&100));
    assert!(observed.windows(2).all(|w| w[0] <= w[1]));
    assert!(observed.iter().all(|value| *value <= 100));
}

#[tokio::test(start_paused = true)]
async fn test_failed_fetch_still_waits_for_simulation() {
    let source = Arc::new(StaticDriverSource::new(sample_drivers()).failing_with(500));
    let (elapsed, _, runtime) = mount_and_wait(source).await;

    assert!(elapsed >= Duration::from_millis(2000));
    assert_eq!(runtime.state().table.record_count(), 0);
    assert!(!runtime.state().session.expired);
}

#[tokio::test(start_paused = true)]
async fn test_unauthorized_fetch_expires_session() {
    let source = Arc::new(StaticDriverSource::new(sample_drivers()).failing_with(401));
    let (_, _, runtime) = mount_and_wait(source).await;

    assert!(runtime.state().session.expired);
    assert_eq!(runtime.state().session.label(), "session expired");
}

#[tokio::test(start_paused = true)]
async fn test_remount_restarts_loading_and_refetches() {
    let source = Arc::new(StaticDriverSource::new(sample_drivers()));
    let (_, _, mut runtime) = mount_and_wait(Arc::clone(&source)).await;
    assert_eq!(source.fetch_count(), 1);

    let first_generation = runtime.state().loading.generation();
    runtime.send_msg(Msg::Nav(NavMsg::ShowDriverDetail("d-1".to_string())));
    runtime.send_msg(Msg::Nav(NavMsg::Back));
    runtime.run_update_cycle().unwrap();

    assert!(runtime.state().is_loading());
    assert_eq!(runtime.state().loading.progress().value(), 0);
    assert!(runtime.state().loading.generation() > first_generation);

    while runtime.state().is_loading() {
        tokio::time::timeout(Duration::from_secs(30), runtime.recv_external())
            .await
            .expect("reload should finish");
        runtime.run_update_cycle().unwrap();
    }
    assert_eq!(source.fetch_count(), 2);
}
