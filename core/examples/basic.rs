//! Basic rolling window usage example

use breaker_window::{ManualClock, RollingWindow, RotationPolicy};
use std::sync::Arc;
use std::time::Duration;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::TRACE)
        .init();

    println!("=== Rolling Window Basic Example ===\n");

    let clock = Arc::new(ManualClock::new());
    let window = RollingWindow::builder()
        .name("payment_api")
        .window_secs(10)
        .buckets(10)
        .clock(clock.clone())
        .build()?;

    println!("--- Recording outcomes ---");
    for i in 1..=6 {
        if i % 3 == 0 {
            window.record_failure();
        } else {
            window.record_success();
        }
    }
    print_totals(&window);

    println!("--- Idle for 11s, then one write (single-step rotation) ---");
    clock.advance(Duration::from_secs(11));
    window.record_success();
    print_totals(&window);

    println!("--- Same idle period with catch-up rotation ---");
    let catch_up = RollingWindow::builder()
        .name("payment_api_catch_up")
        .rotation(RotationPolicy::CatchUp)
        .clock(clock.clone())
        .build()?;
    catch_up.record_failure();
    catch_up.record_failure();
    clock.advance(Duration::from_secs(11));
    catch_up.record_success();
    print_totals(&catch_up);

    println!("--- Reset ---");
    window.reset();
    print_totals(&window);

    Ok(())
}

fn print_totals(window: &RollingWindow) {
    let snapshot = window.snapshot();
    println!(
        "failures={} successes={} error_rate={:.2}",
        snapshot.failures,
        snapshot.successes,
        snapshot.error_rate()
    );
    for (i, bucket) in window.buckets().iter().enumerate() {
        if !bucket.is_empty() {
            println!("  bucket[{}] f={} s={}", i, bucket.failures(), bucket.successes());
        }
    }
    println!();
}
