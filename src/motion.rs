//! Animation math for the home page.
//!
//! Everything here is plain data and arithmetic so it can be exercised without a browser. The
//! components in `app` turn these values into inline styles and drive them from DOM events.

use std::ops::{Add, Mul, Sub};
use std::time::Duration;

pub const DEFAULT_DURATION: Duration = Duration::from_millis(500);
pub const HEADING_DURATION: Duration = Duration::from_millis(600);
pub const BLOCK_DURATION: Duration = Duration::from_millis(800);

pub const CARD_STAGGER: Stagger = Stagger::new(Duration::from_millis(200));
pub const SKILL_STAGGER: Stagger = Stagger::new(Duration::from_millis(100));

/// Distance in px an element travels while revealing.
pub const REVEAL_DISTANCE: f64 = 20.0;

/// Root margin handed to the intersection observer. Elements reveal once they are
/// 80px inside the bottom edge of the viewport.
pub const VIEWPORT_MARGIN: &str = "0px 0px -80px 0px";

/// Per-item delay proportional to an item's position in a list.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Stagger {
    interval: Duration,
}

impl Stagger {
    pub const NONE: Stagger = Stagger::new(Duration::ZERO);

    pub const fn new(interval: Duration) -> Self {
        Self { interval }
    }

    pub fn delay_for(self, index: usize) -> Duration {
        let index = u32::try_from(index).unwrap_or(u32::MAX);
        self.interval.saturating_mul(index)
    }
}

/// Where an element sits before it reveals, relative to its resting position.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Offset {
    None,
    Rise(f64),
    FromLeft(f64),
    FromRight(f64),
}

impl Offset {
    /// Translation (x, y) in px of the hidden state.
    pub fn translate(self) -> (f64, f64) {
        match self {
            Self::None => (0.0, 0.0),
            Self::Rise(d) => (0.0, d),
            Self::FromLeft(d) => (-d, 0.0),
            Self::FromRight(d) => (d, 0.0),
        }
    }
}

impl Default for Offset {
    fn default() -> Self {
        Self::Rise(REVEAL_DISTANCE)
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RevealSpec {
    pub offset: Offset,
    pub duration: Duration,
    pub delay: Duration,
}

impl RevealSpec {
    pub const fn new(offset: Offset, duration: Duration) -> Self {
        Self {
            offset,
            duration,
            delay: Duration::ZERO,
        }
    }

    pub fn delayed(self, delay: Duration) -> Self {
        Self { delay, ..self }
    }

    /// Inline style for the hidden or revealed state. The transition is part of both so the
    /// browser interpolates when the state flips.
    pub fn style(&self, revealed: bool) -> String {
        let (x, y) = if revealed {
            (0.0, 0.0)
        } else {
            self.offset.translate()
        };
        let opacity = if revealed { 1 } else { 0 };
        let duration = self.duration.as_millis();
        let delay = self.delay.as_millis();
        format!(
            "opacity: {opacity}; transform: translate({x}px, {y}px); \
             transition: opacity {duration}ms ease-out {delay}ms, transform {duration}ms ease-out {delay}ms"
        )
    }
}

/// One-shot trigger for a reveal animation. Once it has fired it ignores every later
/// observation, so scrolling back over an element never replays its entrance.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RevealLatch {
    revealed: bool,
}

impl RevealLatch {
    /// Feed one visibility observation. Returns true only for the observation that fires.
    pub fn observe(&mut self, intersecting: bool) -> bool {
        if self.revealed || !intersecting {
            return false;
        }
        self.revealed = true;
        true
    }

    pub fn is_revealed(&self) -> bool {
        self.revealed
    }
}

/// Fraction of the page scrolled, in [0, 1].
///
/// A page shorter than the viewport has nothing to scroll and reports 0.
pub fn scroll_progress(offset: f64, document_height: f64, viewport_height: f64) -> f64 {
    let scrollable = document_height - viewport_height;
    if scrollable.is_nan() || scrollable <= 0.0 || !offset.is_finite() {
        return 0.0;
    }
    (offset / scrollable).clamp(0.0, 1.0)
}

#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Vec2 {
    pub x: f64,
    pub y: f64,
}

impl Vec2 {
    pub const ZERO: Vec2 = Vec2 { x: 0.0, y: 0.0 };

    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    pub fn length(self) -> f64 {
        self.x.hypot(self.y)
    }
}

impl Add for Vec2 {
    type Output = Vec2;

    fn add(self, rhs: Vec2) -> Vec2 {
        Vec2::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl Sub for Vec2 {
    type Output = Vec2;

    fn sub(self, rhs: Vec2) -> Vec2 {
        Vec2::new(self.x - rhs.x, self.y - rhs.y)
    }
}

impl Mul<f64> for Vec2 {
    type Output = Vec2;

    fn mul(self, rhs: f64) -> Vec2 {
        Vec2::new(self.x * rhs, self.y * rhs)
    }
}

/// Where a shape wants to sit given the pointer position inside its box.
///
/// `pointer` is relative to the box's top-left corner. The pull is measured from the box center,
/// so a pointer resting on the center leaves the shape where it is.
pub fn pointer_pull(pointer: Vec2, size: Vec2, pull: f64) -> Vec2 {
    (pointer - size * 0.5) * pull
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SpringConfig {
    pub stiffness: f64,
    pub damping: f64,
    pub mass: f64,
}

impl SpringConfig {
    pub const GENTLE: SpringConfig = SpringConfig {
        stiffness: 120.0,
        damping: 14.0,
        mass: 1.0,
    };
}

// Longest frame the spring will integrate. Anything beyond (a backgrounded tab) is dropped.
const MAX_FRAME_SECS: f64 = 0.064;
const SUBSTEP_SECS: f64 = 1.0 / 120.0;
const REST_DELTA: f64 = 0.01;

/// Damped spring in two dimensions, integrated with semi-implicit Euler.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Spring {
    config: SpringConfig,
    position: Vec2,
    velocity: Vec2,
}

impl Spring {
    pub fn new(config: SpringConfig) -> Self {
        Self {
            config,
            position: Vec2::ZERO,
            velocity: Vec2::ZERO,
        }
    }

    pub fn position(&self) -> Vec2 {
        self.position
    }

    pub fn is_settled(&self, target: Vec2) -> bool {
        (self.position - target).length() < REST_DELTA && self.velocity.length() < REST_DELTA
    }

    /// Advance by `dt_secs` toward `target` and return the new position.
    pub fn step(&mut self, target: Vec2, dt_secs: f64) -> Vec2 {
        if self.is_settled(target) {
            self.position = target;
            self.velocity = Vec2::ZERO;
            return self.position;
        }
        let mut remaining = if dt_secs.is_finite() {
            dt_secs.clamp(0.0, MAX_FRAME_SECS)
        } else {
            0.0
        };
        let SpringConfig {
            stiffness,
            damping,
            mass,
        } = self.config;
        while remaining > 0.0 {
            let h = remaining.min(SUBSTEP_SECS);
            let displacement = self.position - target;
            let accel = (displacement * -stiffness - self.velocity * damping) * (1.0 / mass);
            self.velocity = self.velocity + accel * h;
            self.position = self.position + self.velocity * h;
            remaining -= h;
        }
        self.position
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const FRAME: f64 = 1.0 / 60.0;

    #[test]
    fn test_stagger_delay() {
        for index in 0..4 {
            assert_eq!(
                CARD_STAGGER.delay_for(index),
                Duration::from_millis(200 * index as u64)
            );
        }
        assert_eq!(SKILL_STAGGER.delay_for(3), Duration::from_millis(300));
        assert_eq!(Stagger::NONE.delay_for(7), Duration::ZERO);
    }

    #[test]
    fn test_reveal_style() {
        let spec = RevealSpec::new(Offset::Rise(20.0), HEADING_DURATION)
            .delayed(CARD_STAGGER.delay_for(2));
        let hidden = spec.style(false);
        assert!(hidden.contains("opacity: 0;"));
        assert!(hidden.contains("translate(0px, 20px)"));
        assert!(hidden.contains("opacity 600ms ease-out 400ms"));

        let shown = spec.style(true);
        assert!(shown.contains("opacity: 1;"));
        assert!(shown.contains("translate(0px, 0px)"));
        assert!(shown.ends_with("transform 600ms ease-out 400ms"));
    }

    #[test]
    fn test_offset_direction() {
        assert_eq!(Offset::FromLeft(20.0).translate(), (-20.0, 0.0));
        assert_eq!(Offset::FromRight(20.0).translate(), (20.0, 0.0));
        assert_eq!(Offset::default().translate(), (0.0, REVEAL_DISTANCE));
        assert_eq!(Offset::None.translate(), (0.0, 0.0));
    }

    #[test]
    fn test_reveal_latch_is_one_shot() {
        let mut latch = RevealLatch::default();
        assert!(!latch.observe(false));
        assert!(!latch.is_revealed());

        assert!(latch.observe(true));
        assert!(latch.is_revealed());

        // leaving and re-entering the viewport never fires again
        for visible in [false, true, false, true] {
            assert!(!latch.observe(visible));
            assert!(latch.is_revealed());
        }
    }

    #[test]
    fn test_scroll_progress_bounds() {
        assert_eq!(scroll_progress(0.0, 3000.0, 1000.0), 0.0);
        assert_eq!(scroll_progress(2000.0, 3000.0, 1000.0), 1.0);
        assert_eq!(scroll_progress(500.0, 3000.0, 1000.0), 0.25);
        // overscroll (elastic scrolling) stays clamped
        assert_eq!(scroll_progress(-40.0, 3000.0, 1000.0), 0.0);
        assert_eq!(scroll_progress(2100.0, 3000.0, 1000.0), 1.0);
    }

    #[test]
    fn test_scroll_progress_unscrollable_page() {
        assert_eq!(scroll_progress(0.0, 800.0, 800.0), 0.0);
        assert_eq!(scroll_progress(10.0, 600.0, 800.0), 0.0);
        assert_eq!(scroll_progress(f64::NAN, 3000.0, 800.0), 0.0);
        assert_eq!(scroll_progress(100.0, f64::NAN, 800.0), 0.0);
    }

    #[test]
    fn test_pointer_pull() {
        let size = Vec2::new(100.0, 60.0);
        assert_eq!(pointer_pull(Vec2::new(50.0, 30.0), size, 0.3), Vec2::ZERO);
        assert_eq!(
            pointer_pull(Vec2::new(100.0, 0.0), size, 0.5),
            Vec2::new(25.0, -15.0)
        );
    }

    #[test]
    fn test_spring_converges() {
        let mut spring = Spring::new(SpringConfig::GENTLE);
        let target = Vec2::new(30.0, -12.0);
        for _ in 0..600 {
            spring.step(target, FRAME);
        }
        assert!(spring.is_settled(target));
        assert_eq!(spring.step(target, FRAME), target);
    }

    #[test]
    fn test_spring_wakes_when_target_moves() {
        let mut spring = Spring::new(SpringConfig::GENTLE);
        let resting = Vec2::new(5.0, 5.0);
        let mut frames = 0;
        while !spring.is_settled(resting) {
            spring.step(resting, FRAME);
            frames += 1;
            assert!(frames < 600, "spring never came to rest");
        }
        // settled springs hold still, so the frame loop can stop
        assert_eq!(spring.step(resting, FRAME), resting);
        assert!(spring.is_settled(resting));

        let moved = Vec2::new(-5.0, 5.0);
        assert!(!spring.is_settled(moved));
        assert_ne!(spring.step(moved, FRAME), resting);
    }

    #[test]
    fn test_spring_moves_toward_target() {
        let mut spring = Spring::new(SpringConfig::GENTLE);
        let target = Vec2::new(10.0, 0.0);
        let first = spring.step(target, FRAME);
        assert!(first.x > 0.0 && first.x < 10.0);
        assert_eq!(first.y, 0.0);
    }

    #[test]
    fn test_spring_at_rest_stays_put() {
        let mut spring = Spring::new(SpringConfig::GENTLE);
        for _ in 0..10 {
            assert_eq!(spring.step(Vec2::ZERO, FRAME), Vec2::ZERO);
        }
    }

    #[test]
    fn test_spring_large_frame_is_stable() {
        let mut spring = Spring::new(SpringConfig::GENTLE);
        let target = Vec2::new(100.0, 100.0);
        for _ in 0..50 {
            let pos = spring.step(target, 5.0);
            assert!(pos.x.is_finite() && pos.y.is_finite());
            assert!(pos.length() < 400.0);
        }
        assert!(spring.step(target, f64::INFINITY).x.is_finite());
    }
}
