//! Integration tests for the supervisor drain contract.
//!
//! Each test builds a fresh supervisor, drives real tokio tasks through it,
//! and asserts on the observable contract: counter balance, drain blocking
//! behavior, panic containment, and the event stream.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use std::time::Duration;

use rand::Rng;
use tokio::sync::{oneshot, watch};
use tokio::time::timeout;

use taskdrain::{Config, DrainError, EventKind, Supervisor};

/// Maximum time any drain in these tests is allowed to take before we
/// consider it hung.
const TEST_TIMEOUT: Duration = Duration::from_secs(5);

#[tokio::test]
async fn trivial_drain_returns_immediately() {
    let sup = Supervisor::default();
    timeout(TEST_TIMEOUT, sup.drain())
        .await
        .expect("drain on an empty supervisor must not block");
    assert_eq!(sup.outstanding(), 0);
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn single_task_runs_to_completion() {
    let sup = Supervisor::default();
    let value = Arc::new(AtomicUsize::new(0));

    let v = Arc::clone(&value);
    sup.submit(async move {
        v.fetch_add(1, Ordering::Relaxed);
    });

    timeout(TEST_TIMEOUT, sup.drain()).await.unwrap();
    assert_eq!(value.load(Ordering::Relaxed), 1);
    assert_eq!(sup.outstanding(), 0);
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn thousand_tasks_all_complete() {
    let sup = Supervisor::default();
    let counter = Arc::new(AtomicUsize::new(0));

    for _ in 0..1000 {
        let c = Arc::clone(&counter);
        sup.submit(async move {
            c.fetch_add(1, Ordering::Relaxed);
        });
        // The count can never exceed the number of completed submits.
        assert!(sup.outstanding() <= 1000);
    }

    timeout(TEST_TIMEOUT, sup.drain()).await.unwrap();
    assert_eq!(counter.load(Ordering::Relaxed), 1000);
    assert_eq!(sup.outstanding(), 0);
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn drain_waits_for_blocked_task() {
    let sup = Supervisor::default();
    let (gate_tx, gate_rx) = oneshot::channel::<()>();

    sup.submit(async move {
        let _ = gate_rx.await;
    });

    let drainer = sup.clone();
    let mut handle = tokio::spawn(async move { drainer.drain().await });

    // The gate is still closed, so drain must still be parked.
    tokio::time::sleep(Duration::from_millis(50)).await;
    assert!(!handle.is_finished(), "drain returned before the task finished");
    assert_eq!(sup.outstanding(), 1);

    gate_tx.send(()).unwrap();
    timeout(TEST_TIMEOUT, &mut handle).await.unwrap().unwrap();
    assert_eq!(sup.outstanding(), 0);
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn panicking_task_still_releases_its_slot() {
    let sup = Supervisor::default();

    sup.submit(async {
        panic!("work unit blew up");
    });

    // The panic stays inside the spawned task; drain sees the decrement.
    timeout(TEST_TIMEOUT, sup.drain()).await.unwrap();
    assert_eq!(sup.outstanding(), 0);
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn panicking_blocking_task_still_releases_its_slot() {
    let sup = Supervisor::default();

    sup.submit_blocking(|| {
        panic!("blocking work unit blew up");
    });

    timeout(TEST_TIMEOUT, sup.drain()).await.unwrap();
    assert_eq!(sup.outstanding(), 0);
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn blocking_tasks_are_counted() {
    let sup = Supervisor::default();
    let counter = Arc::new(AtomicUsize::new(0));

    for _ in 0..16 {
        let c = Arc::clone(&counter);
        sup.submit_blocking(move || {
            c.fetch_add(1, Ordering::Relaxed);
        });
    }

    timeout(TEST_TIMEOUT, sup.drain()).await.unwrap();
    assert_eq!(counter.load(Ordering::Relaxed), 16);
    assert_eq!(sup.outstanding(), 0);
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn mixed_workload_drains_exactly_once() {
    let sup = Supervisor::default();
    let counter = Arc::new(AtomicUsize::new(0));

    // Sleep intervals are drawn up front; ThreadRng does not cross awaits.
    let delays: Vec<u64> = {
        let mut rng = rand::thread_rng();
        (0..10).map(|_| rng.gen_range(1..20)).collect()
    };

    for _ in 0..500 {
        let c = Arc::clone(&counter);
        sup.submit(async move {
            c.fetch_add(1, Ordering::Relaxed);
        });
    }
    for ms in delays {
        let c = Arc::clone(&counter);
        sup.submit(async move {
            tokio::time::sleep(Duration::from_millis(ms)).await;
            c.fetch_add(1, Ordering::Relaxed);
        });
    }

    timeout(TEST_TIMEOUT, sup.drain()).await.unwrap();
    assert_eq!(counter.load(Ordering::Relaxed), 510);
    assert_eq!(sup.outstanding(), 0);
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn burst_completions_coalesce_wakeups() {
    // 100 tasks all finish at once while a drainer is parked. The wake
    // channel holds at most one token, so the burst must coalesce without
    // deadlocking the drainer.
    let sup = Supervisor::default();
    let (gate_tx, gate_rx) = watch::channel(false);

    for _ in 0..100 {
        let mut gate = gate_rx.clone();
        sup.submit(async move {
            let _ = gate.wait_for(|open| *open).await;
        });
    }
    drop(gate_rx);

    let drainer = sup.clone();
    let mut handle = tokio::spawn(async move { drainer.drain().await });
    tokio::time::sleep(Duration::from_millis(50)).await;
    assert!(!handle.is_finished());

    gate_tx.send(true).unwrap();
    timeout(TEST_TIMEOUT, &mut handle).await.unwrap().unwrap();
    assert_eq!(sup.outstanding(), 0);
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn serialized_drainers_both_return() {
    let sup = Supervisor::default();
    let (gate_tx, gate_rx) = oneshot::channel::<()>();

    sup.submit(async move {
        let _ = gate_rx.await;
    });

    let a = sup.clone();
    let b = sup.clone();
    let ha = tokio::spawn(async move { a.drain().await });
    let hb = tokio::spawn(async move { b.drain().await });

    tokio::time::sleep(Duration::from_millis(50)).await;
    gate_tx.send(()).unwrap();

    timeout(TEST_TIMEOUT, ha).await.unwrap().unwrap();
    timeout(TEST_TIMEOUT, hb).await.unwrap().unwrap();
    assert_eq!(sup.outstanding(), 0);
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn drain_within_times_out_and_leaves_work_running() {
    let sup = Supervisor::default();
    let (gate_tx, gate_rx) = oneshot::channel::<()>();

    sup.submit(async move {
        let _ = gate_rx.await;
    });

    let err = sup
        .drain_within(Duration::from_millis(50))
        .await
        .expect_err("drain must time out while the gate is closed");
    assert_eq!(err.as_label(), "drain_grace_exceeded");
    match &err {
        DrainError::GraceExceeded { outstanding, .. } => assert_eq!(*outstanding, 1),
        other => panic!("unexpected drain error: {other}"),
    }

    // The supervisor is still usable: release the gate and drain cleanly.
    gate_tx.send(()).unwrap();
    timeout(TEST_TIMEOUT, sup.drain()).await.unwrap();
    assert_eq!(sup.outstanding(), 0);
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn drain_graceful_uses_configured_grace() {
    let sup = Supervisor::new(Config {
        grace: Duration::from_secs(5),
        ..Config::default()
    });

    sup.submit(async {
        tokio::time::sleep(Duration::from_millis(10)).await;
    });

    sup.drain_graceful().await.unwrap();
    assert_eq!(sup.outstanding(), 0);
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn event_stream_is_balanced() {
    let sup = Supervisor::default();
    let mut rx = sup.subscribe();

    for _ in 0..3 {
        sup.submit(async {});
    }
    timeout(TEST_TIMEOUT, sup.drain()).await.unwrap();

    let mut submitted = 0;
    let mut finished = 0;
    let mut drained = false;
    while let Ok(ev) = rx.try_recv() {
        match ev.kind {
            EventKind::WorkSubmitted => submitted += 1,
            EventKind::WorkFinished => finished += 1,
            EventKind::Drained => {
                assert_eq!(ev.outstanding, 0);
                drained = true;
            }
            _ => {}
        }
    }
    assert_eq!(submitted, 3);
    assert_eq!(finished, 3);
    assert!(drained, "drain must publish a Drained event");
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn independent_supervisors_do_not_interfere() {
    let a = Supervisor::default();
    let b = Supervisor::default();
    let (gate_tx, gate_rx) = oneshot::channel::<()>();

    a.submit(async move {
        let _ = gate_rx.await;
    });

    // b has no work; its drain returns even though a is busy.
    timeout(TEST_TIMEOUT, b.drain()).await.unwrap();
    assert_eq!(a.outstanding(), 1);

    gate_tx.send(()).unwrap();
    timeout(TEST_TIMEOUT, a.drain()).await.unwrap();
    assert_eq!(a.outstanding(), 0);
}
