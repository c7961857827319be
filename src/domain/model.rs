use crate::utils::error::Result;
use crate::utils::validation::{validate_finite, validate_non_empty_string, validate_positive_dimension};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Point3 {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

impl Point3 {
    pub const fn new(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }

    pub fn coord(&self, axis: Axis) -> f64 {
        match axis {
            Axis::X => self.x,
            Axis::Y => self.y,
            Axis::Z => self.z,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Axis {
    X,
    Y,
    Z,
}

impl Axis {
    pub const ALL: [Axis; 3] = [Axis::X, Axis::Y, Axis::Z];
}

/// How two spans on the same axis are judged to overlap.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
#[cfg_attr(feature = "cli", derive(clap::ValueEnum))]
pub enum OverlapRule {
    /// `b` must contain one of `a`'s endpoints. Misses the case where `a`
    /// strictly encloses `b` on that axis, so it is not symmetric.
    #[default]
    Endpoint,
    /// Standard closed-interval overlap, symmetric in its arguments.
    Interval,
}

/// Closed interval `[start, end]` on one axis.
///
/// Only produced by [`Cuboid::axis_span`], so `start <= end` always holds.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Span {
    start: f64,
    end: f64,
}

impl Span {
    pub(crate) fn new(start: f64, end: f64) -> Self {
        debug_assert!(start <= end, "span start {} is past end {}", start, end);
        Self { start, end }
    }

    pub fn start(&self) -> f64 {
        self.start
    }

    pub fn end(&self) -> f64 {
        self.end
    }

    pub fn length(&self) -> f64 {
        self.end - self.start
    }

    /// Inclusive at both ends: a point on the boundary is contained.
    pub fn contains(&self, point: f64) -> bool {
        point >= self.start && point <= self.end
    }
}

/// An axis-aligned box, immutable once built.
///
/// Extents map to axes as X = `length`, Y = `height`, Z = `width`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Cuboid {
    id: String,
    length: f64,
    width: f64,
    height: f64,
    center: Point3,
}

impl Cuboid {
    pub fn new(
        id: impl Into<String>,
        length: f64,
        width: f64,
        height: f64,
        center: Point3,
    ) -> Result<Self> {
        let id = id.into();
        validate_non_empty_string("id", &id)?;
        validate_positive_dimension("length", length)?;
        validate_positive_dimension("width", width)?;
        validate_positive_dimension("height", height)?;
        validate_finite("center.x", center.x)?;
        validate_finite("center.y", center.y)?;
        validate_finite("center.z", center.z)?;

        let cube = Self {
            id,
            length,
            width,
            height,
            center,
        };
        // finite inputs can still overflow once the half extent is added
        for axis in Axis::ALL {
            let span = cube.axis_span(axis);
            validate_finite(&format!("{:?} span start", axis), span.start())?;
            validate_finite(&format!("{:?} span end", axis), span.end())?;
        }
        Ok(cube)
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn length(&self) -> f64 {
        self.length
    }

    pub fn width(&self) -> f64 {
        self.width
    }

    pub fn height(&self) -> f64 {
        self.height
    }

    pub fn center(&self) -> Point3 {
        self.center
    }

    pub fn volume(&self) -> f64 {
        self.length * self.width * self.height
    }

    fn extent(&self, axis: Axis) -> f64 {
        match axis {
            Axis::X => self.length,
            Axis::Y => self.height,
            Axis::Z => self.width,
        }
    }

    pub fn axis_span(&self, axis: Axis) -> Span {
        let center = self.center.coord(axis);
        let half = self.extent(axis) / 2.0;
        Span::new(center - half, center + half)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Collision {
    pub cube_id: String,
    pub other_cube_id: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Intersection {
    pub cube_id: String,
    pub other_cube_id: String,
    pub volume: f64,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::error::CubeError;

    fn origin() -> Point3 {
        Point3::new(0.0, 0.0, 0.0)
    }

    #[test]
    fn test_create_cuboid_success() {
        let cube = Cuboid::new("1", 2.0, 3.0, 4.0, Point3::new(1.0, 1.0, 1.0)).unwrap();

        assert_eq!(cube.id(), "1");
        assert_eq!(cube.length(), 2.0);
        assert_eq!(cube.width(), 3.0);
        assert_eq!(cube.height(), 4.0);
        assert_eq!(cube.center(), Point3::new(1.0, 1.0, 1.0));
        assert_eq!(cube.volume(), 24.0);
    }

    #[test]
    fn test_create_cuboid_rejects_empty_id() {
        let result = Cuboid::new("", 1.0, 1.0, 1.0, origin());
        assert!(matches!(result, Err(CubeError::ValidationError { .. })));

        let result = Cuboid::new("  ", 1.0, 1.0, 1.0, origin());
        assert!(matches!(result, Err(CubeError::ValidationError { .. })));
    }

    #[test]
    fn test_create_cuboid_rejects_non_positive_dimensions() {
        for bad in [0.0, -1.0, f64::NAN] {
            assert!(Cuboid::new("1", bad, 1.0, 1.0, origin()).is_err());
            assert!(Cuboid::new("1", 1.0, bad, 1.0, origin()).is_err());
            assert!(Cuboid::new("1", 1.0, 1.0, bad, origin()).is_err());
        }
    }

    #[test]
    fn test_create_cuboid_accepts_negative_center() {
        let cube = Cuboid::new("neg", 1.0, 1.0, 1.0, Point3::new(-5.0, -0.5, -100.0));
        assert!(cube.is_ok());
    }

    #[test]
    fn test_create_cuboid_rejects_non_finite_center() {
        let result = Cuboid::new("1", 1.0, 1.0, 1.0, Point3::new(0.0, f64::NAN, 0.0));
        assert!(result.is_err());
    }

    #[test]
    fn test_create_cuboid_rejects_overflowing_span() {
        let result = Cuboid::new("a", 1.7e308, 1.0, 1.0, Point3::new(1.7e308, 0.0, 0.0));
        assert!(matches!(result, Err(CubeError::ValidationError { .. })));

        let result = Cuboid::new("b", 1.0, 1.7e308, 1.0, Point3::new(0.0, 0.0, -1.7e308));
        assert!(matches!(result, Err(CubeError::ValidationError { .. })));

        // large but representable boxes are still fine
        let cube = Cuboid::new("c", 1.0e308, 1.0, 1.0, Point3::new(1.0e307, 0.0, 0.0)).unwrap();
        assert!(cube.axis_span(Axis::X).end().is_finite());
    }

    #[test]
    fn test_axis_span_uses_length_height_width() {
        // length 2 on X, width 6 on Z, height 4 on Y
        let cube = Cuboid::new("1", 2.0, 6.0, 4.0, Point3::new(10.0, 20.0, 30.0)).unwrap();

        let x = cube.axis_span(Axis::X);
        assert_eq!((x.start(), x.end()), (9.0, 11.0));

        let y = cube.axis_span(Axis::Y);
        assert_eq!((y.start(), y.end()), (18.0, 22.0));

        let z = cube.axis_span(Axis::Z);
        assert_eq!((z.start(), z.end()), (27.0, 33.0));
    }

    #[test]
    fn test_span_contains_is_inclusive() {
        let span = Span::new(-1.0, 2.0);
        assert!(span.contains(-1.0));
        assert!(span.contains(2.0));
        assert!(span.contains(0.5));
        assert!(!span.contains(2.000001));
        assert!(!span.contains(-1.5));
        assert_eq!(span.length(), 3.0);
    }
}
