use crate::domain::model::{Axis, Cuboid, OverlapRule, Span};

/// Pairwise collision and overlap-volume test under a fixed [`OverlapRule`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CollisionTest {
    rule: OverlapRule,
}

impl CollisionTest {
    pub const fn new(rule: OverlapRule) -> Self {
        Self { rule }
    }

    pub fn axis_overlaps(&self, a: &Span, b: &Span) -> bool {
        match self.rule {
            OverlapRule::Endpoint => b.contains(a.start()) || b.contains(a.end()),
            OverlapRule::Interval => a.start() <= b.end() && b.start() <= a.end(),
        }
    }

    /// True when no axis separates `a` from `b`. A cube always collides
    /// with itself.
    pub fn collides(&self, a: &Cuboid, b: &Cuboid) -> bool {
        Axis::ALL
            .iter()
            .all(|&axis| self.axis_overlaps(&a.axis_span(axis), &b.axis_span(axis)))
    }

    /// Volume shared by `a` and `b`, or `0.0` when they do not collide.
    ///
    /// Touching faces collide but share no volume, so they yield exactly
    /// `0.0`. The result is never negative.
    pub fn intersection_volume(&self, a: &Cuboid, b: &Cuboid) -> f64 {
        if !self.collides(a, b) {
            return 0.0;
        }

        let overlaps = Axis::ALL.map(|axis| {
            let sa = a.axis_span(axis);
            let sb = b.axis_span(axis);
            (sa.end().min(sb.end()) - sa.start().max(sb.start())).abs()
        });
        // a flat axis wins even if another one overflowed
        if overlaps.contains(&0.0) {
            return 0.0;
        }
        overlaps.iter().product()
    }
}

pub fn collides(a: &Cuboid, b: &Cuboid) -> bool {
    CollisionTest::default().collides(a, b)
}

pub fn intersection_volume(a: &Cuboid, b: &Cuboid) -> f64 {
    CollisionTest::default().intersection_volume(a, b)
}
