extern crate lumen;

use std::time::{Duration, Instant};

use lumen::application::{FpsCounter, FrameTimer};

#[test]
fn fps_title() {
    let start = Instant::now();
    let mut counter = FpsCounter::with_start("Advanced OpenGL - Demo", 0.25, start);

    // 10 frames within the first interval.
    for i in 0..10 {
        assert_eq!(counter.tick(start + Duration::from_millis(i * 20)), None);
    }

    // Refreshes once more than 0.25 s elapsed.
    let title = counter.tick(start + Duration::from_millis(500)).unwrap();
    assert_eq!(title, "Advanced OpenGL - Demo    FPS: 20.000    Frame Time: 50.000 (ms)");

    // The frame that triggered the refresh starts the next interval.
    assert_eq!(counter.tick(start + Duration::from_millis(600)), None);
    let title = counter.tick(start + Duration::from_millis(1000)).unwrap();
    assert_eq!(title, "Advanced OpenGL - Demo    FPS: 4.000    Frame Time: 250.000 (ms)");
}

#[test]
fn exact_interval_does_not_refresh() {
    let start = Instant::now();
    let mut counter = FpsCounter::with_start("Demo", 0.25, start);
    assert_eq!(counter.tick(start + Duration::from_millis(250)), None);
}

#[test]
fn frame_timer() {
    let start = Instant::now();
    let mut timer = FrameTimer::with_start(start);

    timer.step(start + Duration::from_millis(16));
    timer.step(start + Duration::from_millis(48));
    assert!((timer.delta() - 0.032).abs() < 1e-5);
    assert!((timer.elapsed() - 0.048).abs() < 1e-5);
}
