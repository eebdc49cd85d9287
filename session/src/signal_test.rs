use super::*;
use futures::executor::block_on;
use futures::task::noop_waker_ref;
use std::pin::pin;
use std::task::{Context, Poll};

#[test]
fn idle_signal_is_settled() {
    let signal = LoginSignal::new();
    assert!(!signal.is_pending());
    block_on(signal.settled());
}

#[test]
fn settled_waits_for_finish() {
    let signal = LoginSignal::new();
    let login = signal.begin();
    assert!(signal.is_pending());

    let mut cx = Context::from_waker(noop_waker_ref());
    let waiter = signal.clone();
    let mut wait = pin!(waiter.settled());
    assert!(wait.as_mut().poll(&mut cx).is_pending());

    login.finish();
    assert!(matches!(wait.as_mut().poll(&mut cx), Poll::Ready(())));
    assert!(!signal.is_pending());
}

#[test]
fn dropped_login_releases_waiters() {
    let signal = LoginSignal::new();
    let login = signal.begin();
    drop(login);
    assert!(!signal.is_pending());
    block_on(signal.settled());
}

#[test]
fn newer_login_supersedes_older() {
    let signal = LoginSignal::new();
    let first = signal.begin();
    let second = signal.begin();
    first.finish();
    assert!(signal.is_pending());
    second.finish();
    assert!(!signal.is_pending());
}

#[test]
fn clones_share_state() {
    let signal = LoginSignal::new();
    let other = signal.clone();
    let login = other.begin();
    assert!(signal.is_pending());
    login.finish();
    block_on(signal.settled());
}

#[test]
fn debug_reports_pending() {
    let signal = LoginSignal::new();
    assert_eq!(format!("{signal:?}"), "LoginSignal { pending: false }");
}
