//! Spawn placement rules.

use std::f64::consts::PI;
use std::fmt;

use super::random::RandomSource;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Length {
    Px(f64),
    Percent(f64),
}

impl fmt::Display for Length {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Length::Px(v) => write!(f, "{}px", v),
            Length::Percent(v) => write!(f, "{}%", v),
        }
    }
}

/// Top-left position of a spawned node.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Placement {
    pub left: Length,
    pub top: Length,
}

impl Placement {
    pub fn at(point: Point) -> Self {
        Self {
            left: Length::Px(point.x),
            top: Length::Px(point.y),
        }
    }
}

/// The `index`-th slot on a ring around `center`, `step_deg` apart.
pub fn radial(center: Point, index: usize, step_deg: f64, distance: f64) -> Placement {
    let angle = (index as f64 * step_deg) * (PI / 180.0);
    Placement::at(Point::new(
        center.x + angle.cos() * distance,
        center.y + angle.sin() * distance,
    ))
}

/// Horizontal jitter of `spread` pixels centred on `origin`.
pub fn scatter(origin: Point, spread: f64, rng: &mut dyn RandomSource) -> Placement {
    Placement::at(Point::new(origin.x + (rng.unit() - 0.5) * spread, origin.y))
}

/// Anywhere in the viewport, in percent so it survives resizes.
pub fn viewport(rng: &mut dyn RandomSource) -> Placement {
    let left = rng.unit() * 100.0;
    let top = rng.unit() * 100.0;
    Placement {
        left: Length::Percent(left),
        top: Length::Percent(top),
    }
}
