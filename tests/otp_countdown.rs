//! Countdown behavior under tokio's paused clock.

use std::time::Duration;

use nossocloset_client::auth::{OtpCountdown, RESEND_COOLDOWN_SECS};

/// Let the countdown task observe elapsed (test) time.
async fn settle(duration: Duration) {
    tokio::time::sleep(duration).await;
    for _ in 0..4 {
        tokio::task::yield_now().await;
    }
}

#[tokio::test(start_paused = true)]
async fn starts_at_thirty_with_resend_disabled() {
    let mut countdown = OtpCountdown::new();
    assert!(!countdown.resend_disabled());

    countdown.start();
    assert_eq!(countdown.remaining_secs(), RESEND_COOLDOWN_SECS);
    assert!(countdown.is_active());
    assert!(countdown.resend_disabled());
}

#[tokio::test(start_paused = true)]
async fn ticks_down_one_second_at_a_time() {
    let mut countdown = OtpCountdown::new();
    countdown.start();

    settle(Duration::from_secs(1)).await;
    assert_eq!(countdown.remaining_secs(), 29);

    settle(Duration::from_secs(4)).await;
    assert_eq!(countdown.remaining_secs(), 25);
    assert!(countdown.is_active());
}

#[tokio::test(start_paused = true)]
async fn expiry_resets_to_thirty_and_reenables_resend() {
    let mut countdown = OtpCountdown::new();
    countdown.start();

    settle(Duration::from_secs(RESEND_COOLDOWN_SECS + 1)).await;
    assert!(!countdown.is_active());
    assert!(!countdown.resend_disabled());
    assert_eq!(countdown.remaining_secs(), RESEND_COOLDOWN_SECS);
}

#[tokio::test(start_paused = true)]
async fn restart_resets_the_cycle() {
    let mut countdown = OtpCountdown::new();
    countdown.start();
    settle(Duration::from_secs(10)).await;
    assert_eq!(countdown.remaining_secs(), 20);

    countdown.start();
    assert_eq!(countdown.remaining_secs(), RESEND_COOLDOWN_SECS);
    settle(Duration::from_secs(1)).await;
    assert_eq!(countdown.remaining_secs(), 29);
}

#[tokio::test(start_paused = true)]
async fn cancel_stops_ticking() {
    let mut countdown = OtpCountdown::new();
    countdown.start();
    settle(Duration::from_secs(3)).await;
    countdown.cancel();

    assert!(!countdown.is_active());
    assert_eq!(countdown.remaining_secs(), RESEND_COOLDOWN_SECS);

    // No orphaned timer keeps decrementing after cancellation.
    settle(Duration::from_secs(5)).await;
    assert_eq!(countdown.remaining_secs(), RESEND_COOLDOWN_SECS);
}

#[tokio::test(start_paused = true)]
async fn drop_aborts_the_task() {
    let mut countdown = OtpCountdown::new();
    countdown.start();
    settle(Duration::from_secs(2)).await;
    drop(countdown);

    // Nothing to assert directly; time advancing after the drop must not
    // panic or leak a ticking task.
    settle(Duration::from_secs(5)).await;
}
