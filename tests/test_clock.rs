use std::thread;
use std::time::{Duration, Instant};

use space_explorer::clock::FrameLimiter;
use space_explorer::constants::FPS;

#[test]
fn period_matches_rate() {
    let limiter = FrameLimiter::new(FPS);
    assert_eq!(limiter.period(), Duration::from_secs(1) / 60);
    assert_eq!(FrameLimiter::new(0).period(), Duration::from_secs(1));
}

#[test]
fn wait_sleeps_out_the_rest_of_the_period() {
    let mut limiter = FrameLimiter::new(50);
    let start = Instant::now();
    let slept = limiter.wait();
    assert!(slept <= limiter.period());
    assert!(start.elapsed() >= slept);
}

#[test]
fn slow_frame_does_not_sleep() {
    let mut limiter = FrameLimiter::new(1000);
    thread::sleep(Duration::from_millis(5));
    assert_eq!(limiter.wait(), Duration::ZERO);
}
