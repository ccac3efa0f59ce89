use rand::Rng;

use crate::motion::Vec2;

pub const SHAPE_COUNT: usize = 8;

/// How strongly a shape leans toward the pointer, as a fraction of the pointer's distance from
/// the shape's center.
pub const POINTER_PULL: f64 = 0.35;

pub const PALETTE: [&str; 5] = ["#64FFDA", "#52E0C4", "#7F5AF0", "#F25F4C", "#FFD166"];

const SIZE_PX: (f64, f64) = (40.0, 160.0);
const DRIFT_PX: f64 = 30.0;
const DRIFT_SECS: (f64, f64) = (6.0, 14.0);
const OPACITY: (f64, f64) = (0.12, 0.3);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShapeKind {
    Circle,
    Square,
    Ring,
}

impl ShapeKind {
    const ALL: [ShapeKind; 3] = [ShapeKind::Circle, ShapeKind::Square, ShapeKind::Ring];

    fn fill(self, color: &str) -> String {
        match self {
            Self::Circle => format!("background-color: {color}; border-radius: 9999px;"),
            Self::Square => format!("background-color: {color}; border-radius: 18%;"),
            Self::Ring => format!("border: 6px solid {color}; border-radius: 9999px;"),
        }
    }
}

/// Randomized look of one decorative shape. Drawn once, never mutated.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ShapeSpec {
    pub kind: ShapeKind,
    pub size_px: f64,
    pub color: &'static str,
    pub rotation_deg: f64,
    /// Starting position as a percentage of the hero's width and height.
    pub left_pct: f64,
    pub top_pct: f64,
    pub opacity: f64,
    /// Furthest point of the looping drift, relative to the starting position.
    pub drift: Vec2,
    pub drift_secs: f64,
}

impl ShapeSpec {
    pub fn random<R: Rng + ?Sized>(rng: &mut R) -> Self {
        let kind = ShapeKind::ALL[rng.random_range(0..ShapeKind::ALL.len())];
        let color = PALETTE[rng.random_range(0..PALETTE.len())];
        Self {
            kind,
            size_px: rng.random_range(SIZE_PX.0..SIZE_PX.1),
            color,
            rotation_deg: rng.random_range(0.0..360.0),
            left_pct: rng.random_range(0.0..100.0),
            top_pct: rng.random_range(0.0..100.0),
            opacity: rng.random_range(OPACITY.0..OPACITY.1),
            drift: Vec2::new(
                rng.random_range(-DRIFT_PX..DRIFT_PX),
                rng.random_range(-DRIFT_PX..DRIFT_PX),
            ),
            drift_secs: rng.random_range(DRIFT_SECS.0..DRIFT_SECS.1),
        }
    }

    pub fn scatter<R: Rng + ?Sized>(rng: &mut R, count: usize) -> Vec<Self> {
        (0..count).map(|_| Self::random(rng)).collect()
    }

    /// Style of the positioned box the pointer is measured against.
    pub fn frame_style(&self) -> String {
        format!(
            "left: {:.2}%; top: {:.2}%; width: {:.1}px; height: {:.1}px",
            self.left_pct, self.top_pct, self.size_px, self.size_px
        )
    }

    /// Style of the painted body. `offset` is the spring's current displacement.
    pub fn body_style(&self, offset: Vec2) -> String {
        format!(
            "{} opacity: {:.2}; transform: translate({:.2}px, {:.2}px) rotate({:.1}deg)",
            self.kind.fill(self.color),
            self.opacity,
            offset.x,
            offset.y,
            self.rotation_deg
        )
    }

    /// Custom properties consumed by the `drift` keyframes in `input.css`.
    pub fn drift_style(&self) -> String {
        format!(
            "--drift-x: {:.1}px; --drift-y: {:.1}px; animation-duration: {:.2}s",
            self.drift.x, self.drift.y, self.drift_secs
        )
    }
}

#[cfg(test)]
mod tests {
    use rand::{rngs::StdRng, SeedableRng};

    use super::*;

    #[test]
    fn test_same_seed_same_shapes() {
        let a = ShapeSpec::scatter(&mut StdRng::seed_from_u64(42), SHAPE_COUNT);
        let b = ShapeSpec::scatter(&mut StdRng::seed_from_u64(42), SHAPE_COUNT);
        assert_eq!(a.len(), SHAPE_COUNT);
        assert_eq!(a, b);

        let c = ShapeSpec::scatter(&mut StdRng::seed_from_u64(43), SHAPE_COUNT);
        assert_ne!(a, c);
    }

    #[test]
    fn test_shapes_within_ranges() {
        let mut rng = StdRng::seed_from_u64(7);
        for spec in ShapeSpec::scatter(&mut rng, 500) {
            assert!((SIZE_PX.0..SIZE_PX.1).contains(&spec.size_px));
            assert!((0.0..360.0).contains(&spec.rotation_deg));
            assert!((0.0..100.0).contains(&spec.left_pct));
            assert!((0.0..100.0).contains(&spec.top_pct));
            assert!((OPACITY.0..OPACITY.1).contains(&spec.opacity));
            assert!(spec.drift.x.abs() <= DRIFT_PX && spec.drift.y.abs() <= DRIFT_PX);
            assert!((DRIFT_SECS.0..DRIFT_SECS.1).contains(&spec.drift_secs));
            assert!(PALETTE.contains(&spec.color));
        }
    }

    #[test]
    fn test_shape_styles() {
        let spec = ShapeSpec {
            kind: ShapeKind::Ring,
            size_px: 80.0,
            color: PALETTE[0],
            rotation_deg: 45.0,
            left_pct: 10.0,
            top_pct: 20.5,
            opacity: 0.2,
            drift: Vec2::new(12.0, -8.0),
            drift_secs: 9.0,
        };
        assert_eq!(
            spec.frame_style(),
            "left: 10.00%; top: 20.50%; width: 80.0px; height: 80.0px"
        );
        let body = spec.body_style(Vec2::new(3.0, -1.5));
        assert!(body.starts_with("border: 6px solid #64FFDA;"));
        assert!(body.ends_with("translate(3.00px, -1.50px) rotate(45.0deg)"));
        for style in [spec.frame_style(), body, spec.drift_style()] {
            assert!(!style.ends_with(';'), "{style}");
        }
        assert_eq!(
            spec.drift_style(),
            "--drift-x: 12.0px; --drift-y: -8.0px; animation-duration: 9.00s"
        );
    }
}
