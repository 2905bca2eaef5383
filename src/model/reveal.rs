use std::time::{Duration, Instant};

pub const REVEAL_DURATION: Duration = Duration::from_millis(600);
pub const REVEAL_STAGGER: Duration = Duration::from_millis(80);

/// How far along a single item is in its entrance.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stage {
    Hidden,
    Entering,
    Shown,
}

/// One-shot entrance animation for a block of staggered items.
///
/// Items enter one after another, each offset by the stagger, and each
/// eases out over the duration. Nothing moves until [`Reveal::start`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Reveal {
    started_at: Option<Instant>,
    duration: Duration,
    stagger: Duration,
}

impl Default for Reveal {
    fn default() -> Self {
        Self::new(REVEAL_DURATION, REVEAL_STAGGER)
    }
}

impl Reveal {
    pub fn new(duration: Duration, stagger: Duration) -> Self {
        Self {
            started_at: None,
            duration,
            stagger,
        }
    }

    /// Starts once. Later calls keep the first start time.
    pub fn start(&mut self, now: Instant) {
        if self.started_at.is_none() {
            self.started_at = Some(now);
        }
    }

    /// Starts over from `now`.
    pub fn restart(&mut self, now: Instant) {
        self.started_at = Some(now);
    }

    pub fn is_started(&self) -> bool {
        self.started_at.is_some()
    }

    /// Eased progress of item `index` in `0.0..=1.0`.
    pub fn progress(&self, index: usize, now: Instant) -> f64 {
        let Some(started_at) = self.started_at else {
            return 0.0;
        };
        let delay = self.stagger.saturating_mul(index as u32);
        let elapsed = now.saturating_duration_since(started_at);
        let Some(active) = elapsed.checked_sub(delay) else {
            return 0.0;
        };
        if self.duration.is_zero() {
            return 1.0;
        }
        ease_out(active.as_secs_f64() / self.duration.as_secs_f64())
    }

    pub fn stage(&self, index: usize, now: Instant) -> Stage {
        match self.progress(index, now) {
            p if p <= 0.0 => Stage::Hidden,
            p if p >= 1.0 => Stage::Shown,
            _ => Stage::Entering,
        }
    }

    /// True once every one of `items` is fully shown.
    pub fn is_complete(&self, items: usize, now: Instant) -> bool {
        self.progress(items.saturating_sub(1), now) >= 1.0
    }
}

/// Cubic ease-out, clamped to `0.0..=1.0`.
pub fn ease_out(t: f64) -> f64 {
    let t = t.clamp(0.0, 1.0);
    1.0 - (1.0 - t).powi(3)
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    use super::*;

    fn ms(millis: u64) -> Duration {
        Duration::from_millis(millis)
    }

    #[rstest]
    #[case(-1.0, 0.0)]
    #[case(0.0, 0.0)]
    #[case(0.5, 0.875)]
    #[case(1.0, 1.0)]
    #[case(3.0, 1.0)]
    fn test_ease_out(#[case] t: f64, #[case] expected: f64) {
        assert_eq!(ease_out(t), expected);
    }

    #[test]
    fn test_not_started_is_hidden() {
        let reveal = Reveal::default();
        let now = Instant::now();
        assert!(!reveal.is_started());
        assert_eq!(reveal.stage(0, now), Stage::Hidden);
        assert_eq!(reveal.progress(0, now + ms(10_000)), 0.0);
    }

    #[test]
    fn test_items_are_staggered() {
        let mut reveal = Reveal::new(ms(600), ms(100));
        let t0 = Instant::now();
        reveal.start(t0);

        assert_eq!(reveal.stage(0, t0 + ms(50)), Stage::Entering);
        assert_eq!(reveal.stage(1, t0 + ms(50)), Stage::Hidden);
        assert_eq!(reveal.stage(1, t0 + ms(150)), Stage::Entering);
        assert_eq!(reveal.stage(0, t0 + ms(600)), Stage::Shown);
        assert_eq!(reveal.stage(1, t0 + ms(600)), Stage::Entering);
        assert_eq!(reveal.stage(1, t0 + ms(700)), Stage::Shown);
    }

    #[test]
    fn test_start_is_idempotent() {
        let mut reveal = Reveal::new(ms(600), ms(100));
        let t0 = Instant::now();
        reveal.start(t0);
        reveal.start(t0 + ms(500));
        assert!(reveal.is_complete(1, t0 + ms(600)));
    }

    #[test]
    fn test_restart_hides_again() {
        let mut reveal = Reveal::new(ms(600), ms(100));
        let t0 = Instant::now();
        reveal.start(t0);
        reveal.restart(t0 + ms(1000));
        assert_eq!(reveal.stage(0, t0 + ms(1000)), Stage::Hidden);
        assert_eq!(reveal.stage(0, t0 + ms(1600)), Stage::Shown);
    }

    #[test]
    fn test_complete_waits_for_last_item() {
        let mut reveal = Reveal::new(ms(600), ms(100));
        let t0 = Instant::now();
        reveal.start(t0);
        assert!(!reveal.is_complete(3, t0 + ms(700)));
        assert!(reveal.is_complete(3, t0 + ms(800)));
    }

    #[test]
    fn test_zero_duration_shows_immediately() {
        let mut reveal = Reveal::new(Duration::ZERO, Duration::ZERO);
        let t0 = Instant::now();
        reveal.start(t0);
        assert_eq!(reveal.stage(5, t0), Stage::Shown);
    }
}
