//! Frame Scheduler
//!
//! Frame-rate bookkeeping for the render loop. The scheduler never sleeps
//! itself; it tells the loop how long to wait and records what the frame
//! actually cost.
//!
//! # Frame Budget
//!
//! ```text
//! |<------------------- 1 / target_fps ------------------->|
//! |  compose+flush+step  |  input poll  |   pacing delay    |
//! |<----- compute ------>|<- timeout -->|                   |
//! ```

use std::time::Duration;

/// Initial target frame rate
pub const DEFAULT_TARGET_FPS: f64 = 2.0;

/// Lowest target frame rate (inclusive)
pub const MIN_TARGET_FPS: f64 = 1.0;

/// Highest target frame rate (exclusive)
pub const MAX_TARGET_FPS: f64 = 500.0;

/// Longest the loop waits for a keystroke in one frame
pub const POLL_TIMEOUT: Duration = Duration::from_millis(50);

/// Target and measured frame rates
#[derive(Clone, Debug, PartialEq)]
pub struct FrameScheduler {
    /// Frames per second the loop aims for, in `[MIN_TARGET_FPS, MAX_TARGET_FPS)`
    target_fps: f64,
    /// Rate implied by the last full frame
    current_fps: f64,
    /// Best rate implied by compute time alone
    max_fps: f64,
}

impl FrameScheduler {
    /// Create a scheduler aiming at `target_fps`
    ///
    /// Out-of-range targets are pulled into `[MIN_TARGET_FPS, MAX_TARGET_FPS)`.
    pub fn new(target_fps: f64) -> Self {
        let target_fps = if target_fps >= MAX_TARGET_FPS {
            MAX_TARGET_FPS / 2.0
        } else if target_fps.is_nan() {
            DEFAULT_TARGET_FPS
        } else {
            target_fps.max(MIN_TARGET_FPS)
        };

        Self {
            target_fps,
            current_fps: 0.0,
            max_fps: 0.0,
        }
    }

    /// Frames per second the loop aims for
    pub fn target_fps(&self) -> f64 {
        self.target_fps
    }

    /// Rate implied by the last full frame
    pub fn current_fps(&self) -> f64 {
        self.current_fps
    }

    /// Best rate implied by compute time alone
    pub fn max_fps(&self) -> f64 {
        self.max_fps
    }

    /// Double the target rate
    pub fn speed_up(&mut self) {
        self.rescale(2.0);
    }

    /// Halve the target rate
    pub fn slow_down(&mut self) {
        self.rescale(0.5);
    }

    /// Multiply the target by `factor`, staying inside the allowed range
    ///
    /// Dropping below the minimum saturates at the minimum. Reaching the
    /// exclusive maximum leaves the target unchanged.
    fn rescale(&mut self, factor: f64) {
        let scaled = self.target_fps * factor;
        if scaled >= MAX_TARGET_FPS {
            return;
        }
        self.target_fps = scaled.max(MIN_TARGET_FPS);
    }

    /// Wall-clock time one frame should take
    pub fn frame_budget(&self) -> Duration {
        Duration::from_secs_f64(1.0 / self.target_fps)
    }

    /// How long the input poll may wait this frame
    pub fn poll_timeout(&self) -> Duration {
        POLL_TIMEOUT.min(self.frame_budget())
    }

    /// Sleep needed after a frame whose compose+flush+step took `compute`
    ///
    /// The input poll is assumed to use its whole timeout.
    pub fn pacing_delay(&self, compute: Duration) -> Duration {
        self.frame_budget()
            .saturating_sub(compute.saturating_add(self.poll_timeout()))
    }

    /// Record the cost of a finished frame
    ///
    /// `compute` covers compose+flush+step, `total` the whole frame
    /// including the poll and the pacing delay. Zero durations are ignored.
    pub fn record_frame(&mut self, compute: Duration, total: Duration) {
        if !total.is_zero() {
            self.current_fps = 1.0 / total.as_secs_f64();
        }
        if !compute.is_zero() {
            self.max_fps = self.max_fps.max(1.0 / compute.as_secs_f64());
        }
    }
}

impl Default for FrameScheduler {
    fn default() -> Self {
        Self::new(DEFAULT_TARGET_FPS)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_in_range(scheduler: &FrameScheduler) {
        let fps = scheduler.target_fps();
        assert!(
            (MIN_TARGET_FPS..MAX_TARGET_FPS).contains(&fps),
            "target {fps} escaped [{MIN_TARGET_FPS}, {MAX_TARGET_FPS})"
        );
    }

    #[test]
    fn test_default_target() {
        let scheduler = FrameScheduler::default();
        assert!((scheduler.target_fps() - 2.0).abs() < f64::EPSILON);
        assert_eq!(scheduler.current_fps(), 0.0);
        assert_eq!(scheduler.max_fps(), 0.0);
    }

    #[test]
    fn test_speed_up_then_slow_down_restores() {
        for start in [1.0, 2.0, 3.0, 10.0, 123.0, 249.0] {
            let mut scheduler = FrameScheduler::new(start);
            scheduler.speed_up();
            scheduler.slow_down();
            assert!((scheduler.target_fps() - start).abs() < 1e-9, "start {start}");
        }
    }

    #[test]
    fn test_target_stays_in_range() {
        let mut scheduler = FrameScheduler::default();
        for _ in 0..20 {
            scheduler.speed_up();
            assert_in_range(&scheduler);
        }
        assert!((scheduler.target_fps() - 256.0).abs() < f64::EPSILON);

        for _ in 0..20 {
            scheduler.slow_down();
            assert_in_range(&scheduler);
        }
        assert!((scheduler.target_fps() - MIN_TARGET_FPS).abs() < f64::EPSILON);

        // mixed sequence
        for i in 0..100 {
            if i % 3 == 0 {
                scheduler.slow_down();
            } else {
                scheduler.speed_up();
            }
            assert_in_range(&scheduler);
        }
    }

    #[test]
    fn test_slow_down_saturates_at_minimum() {
        let mut scheduler = FrameScheduler::new(1.5);
        scheduler.slow_down();
        assert!((scheduler.target_fps() - MIN_TARGET_FPS).abs() < f64::EPSILON);
    }

    #[test]
    fn test_new_pulls_target_into_range() {
        assert_in_range(&FrameScheduler::new(0.0));
        assert_in_range(&FrameScheduler::new(-4.0));
        assert_in_range(&FrameScheduler::new(500.0));
        assert_in_range(&FrameScheduler::new(f64::NAN));
        assert!((FrameScheduler::new(499.0).target_fps() - 499.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_pacing_delay() {
        let scheduler = FrameScheduler::new(2.0);
        assert_eq!(scheduler.frame_budget(), Duration::from_millis(500));
        assert_eq!(scheduler.poll_timeout(), POLL_TIMEOUT);
        assert_eq!(
            scheduler.pacing_delay(Duration::from_millis(100)),
            Duration::from_millis(350)
        );
        // over budget never goes negative
        assert_eq!(scheduler.pacing_delay(Duration::from_secs(1)), Duration::ZERO);
    }

    #[test]
    fn test_poll_timeout_shrinks_with_budget() {
        let scheduler = FrameScheduler::new(256.0);
        assert!(scheduler.poll_timeout() < POLL_TIMEOUT);
        assert_eq!(scheduler.poll_timeout(), scheduler.frame_budget());
        assert_eq!(scheduler.pacing_delay(Duration::ZERO), Duration::ZERO);
    }

    #[test]
    fn test_record_frame() {
        let mut scheduler = FrameScheduler::default();
        scheduler.record_frame(Duration::from_millis(10), Duration::from_millis(500));
        assert!((scheduler.current_fps() - 2.0).abs() < 1e-9);
        assert!((scheduler.max_fps() - 100.0).abs() < 1e-9);

        // a slower frame lowers current but not max
        scheduler.record_frame(Duration::from_millis(20), Duration::from_secs(1));
        assert!((scheduler.current_fps() - 1.0).abs() < 1e-9);
        assert!((scheduler.max_fps() - 100.0).abs() < 1e-9);

        scheduler.record_frame(Duration::ZERO, Duration::ZERO);
        assert!(scheduler.max_fps().is_finite());
    }
}
