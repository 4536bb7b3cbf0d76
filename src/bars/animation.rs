//! Repeating path morph for a single bar
//!
//! Each running bar carries one [`PathAnimation`]: a three-keyframe loop
//! (resting, full, resting) sampled as a pure function of elapsed time.
//! Sampling is piecewise-linear between keyframes and wraps forever, so the
//! animation needs no per-frame mutation; the frame tick merely supplies a
//! fresh `now`.

use iced::time::{Duration, Instant};

use super::geometry::BarPath;

/// Duration scale for one full cycle, in seconds.
pub const BASE_DURATION: f32 = 1.0;

/// Normalized keyframe times within a cycle: resting, full, resting.
pub const KEY_TIMES: [f32; 3] = [0.0, 0.5, 1.0];

/// Cycle length for a bar with the given initial height fraction.
///
/// Taller resting bars travel a shorter distance and get a shorter cycle,
/// which keeps the three bars from pulsing in lockstep.
pub fn cycle_duration(initial_height: f32) -> Duration {
    Duration::from_secs_f32(((1.0 - initial_height) * BASE_DURATION).max(0.0))
}

/// A repeating resting -> full -> resting morph attached to one bar shape.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PathAnimation {
    keyframes: [BarPath; 3],
    duration: Duration,
    started_at: Instant,
}

impl PathAnimation {
    /// Start a new cycle at `started_at`, morphing between the two extremes.
    pub fn new(resting: BarPath, full: BarPath, duration: Duration, started_at: Instant) -> Self {
        Self {
            keyframes: [resting, full, resting],
            duration,
            started_at,
        }
    }

    pub fn duration(&self) -> Duration {
        self.duration
    }

    pub fn started_at(&self) -> Instant {
        self.started_at
    }

    /// The outline to draw at `now`.
    ///
    /// Instants before the start clamp to the first keyframe; later instants
    /// wrap modulo the cycle duration, so the loop repeats indefinitely.
    pub fn sample(&self, now: Instant) -> BarPath {
        if self.duration.is_zero() {
            return self.keyframes[0];
        }

        let elapsed = now.saturating_duration_since(self.started_at);
        let phase = (elapsed.as_secs_f32() / self.duration.as_secs_f32()).fract();

        if phase < KEY_TIMES[1] {
            let t = (phase - KEY_TIMES[0]) / (KEY_TIMES[1] - KEY_TIMES[0]);
            self.keyframes[0].lerp(self.keyframes[1], t)
        } else {
            let t = (phase - KEY_TIMES[1]) / (KEY_TIMES[2] - KEY_TIMES[1]);
            self.keyframes[1].lerp(self.keyframes[2], t)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f32 = 1e-3;

    fn assert_close(a: f32, b: f32) {
        assert!((a - b).abs() < EPS, "expected {b}, got {a}");
    }

    fn resting() -> BarPath {
        BarPath {
            y: 32.0,
            width: 29.0,
            height: 8.0,
        }
    }

    fn full() -> BarPath {
        BarPath {
            y: 0.0,
            width: 29.0,
            height: 40.0,
        }
    }

    fn animation(started_at: Instant) -> PathAnimation {
        // Initial height 0.2 -> 0.8 s cycle
        PathAnimation::new(resting(), full(), cycle_duration(0.2), started_at)
    }

    #[test]
    fn duration_shrinks_as_initial_height_grows() {
        assert_close(cycle_duration(0.2).as_secs_f32(), 0.8);
        assert!(cycle_duration(0.1) > cycle_duration(0.3));
        assert!(cycle_duration(0.0) > cycle_duration(0.49));
        assert_close(cycle_duration(0.0).as_secs_f32(), BASE_DURATION);
    }

    #[test]
    fn cycle_starts_and_ends_at_resting() {
        let t0 = Instant::now();
        let anim = animation(t0);

        let start = anim.sample(t0);
        assert_close(start.y, 32.0);
        assert_close(start.height, 8.0);

        // One full cycle later the phase wraps back to the first keyframe
        let wrapped = anim.sample(t0 + Duration::from_millis(800));
        assert_close(wrapped.y, 32.0);
        assert_close(wrapped.height, 8.0);
    }

    #[test]
    fn midpoint_reaches_full_height() {
        let t0 = Instant::now();
        let anim = animation(t0);

        let mid = anim.sample(t0 + Duration::from_millis(400));
        assert_close(mid.y, 0.0);
        assert_close(mid.height, 40.0);
        assert_close(mid.width, 29.0);
    }

    #[test]
    fn quarter_points_sit_halfway_between_extremes() {
        let t0 = Instant::now();
        let anim = animation(t0);

        let rising = anim.sample(t0 + Duration::from_millis(200));
        assert_close(rising.y, 16.0);
        assert_close(rising.height, 24.0);

        let falling = anim.sample(t0 + Duration::from_millis(600));
        assert_close(falling.y, 16.0);
        assert_close(falling.height, 24.0);
    }

    #[test]
    fn phase_wraps_across_cycles() {
        let t0 = Instant::now();
        let anim = animation(t0);

        // 1.25 cycles in is the same pose as 0.25 cycles in
        let late = anim.sample(t0 + Duration::from_millis(1000));
        let early = anim.sample(t0 + Duration::from_millis(200));
        assert_close(late.y, early.y);
        assert_close(late.height, early.height);
    }

    #[test]
    fn sampling_before_start_clamps_to_resting() {
        let now = Instant::now();
        let anim = animation(now + Duration::from_secs(1));

        let pose = anim.sample(now);
        assert_close(pose.y, 32.0);
        assert_close(pose.height, 8.0);
    }

    #[test]
    fn zero_duration_is_total() {
        let t0 = Instant::now();
        let anim = PathAnimation::new(resting(), full(), Duration::ZERO, t0);
        let pose = anim.sample(t0 + Duration::from_secs(3));
        assert_close(pose.height, 8.0);
    }
}
