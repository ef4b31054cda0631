use std::fmt::Write;

use super::geometry::Placement;

/// What a spawned node looks like. Determines its CSS class.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParticleKind {
    FloatingHeart,
    LovePopup,
    CutePopup,
    Confetti,
    HeartBurst,
    Firework,
    TapHeart,
}

impl ParticleKind {
    pub fn class(self) -> &'static str {
        match self {
            ParticleKind::FloatingHeart => "heart",
            ParticleKind::LovePopup => "love-popup",
            ParticleKind::CutePopup => "cute-popup",
            ParticleKind::Confetti => "confetti-particle",
            ParticleKind::HeartBurst => "heart-burst",
            ParticleKind::Firework => "firework",
            ParticleKind::TapHeart => "tap-heart",
        }
    }
}

/// Where a node is inserted. Background hearts live inside the
/// `.hearts-container`, everything else floats above the page.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Layer {
    Background,
    Overlay,
}

/// Render instruction for one self-removing DOM node.
#[derive(Debug, Clone, PartialEq)]
pub struct Particle {
    pub kind: ParticleKind,
    /// Extra animation class (`bounce`, `sparkle`).
    pub variant: Option<&'static str>,
    pub text: String,
    pub placement: Placement,
    pub style: Vec<(&'static str, String)>,
    pub layer: Layer,
    pub lifetime_ms: u32,
}

impl Particle {
    pub fn new(kind: ParticleKind, placement: Placement, lifetime_ms: u32) -> Self {
        let layer = match kind {
            ParticleKind::FloatingHeart => Layer::Background,
            _ => Layer::Overlay,
        };
        Self {
            kind,
            variant: None,
            text: String::new(),
            placement,
            style: Vec::new(),
            layer,
            lifetime_ms,
        }
    }

    pub fn text(mut self, text: impl Into<String>) -> Self {
        self.text = text.into();
        self
    }

    pub fn variant(mut self, variant: Option<&'static str>) -> Self {
        self.variant = variant;
        self
    }

    pub fn style(mut self, property: &'static str, value: impl Into<String>) -> Self {
        self.style.push((property, value.into()));
        self
    }

    /// Time at which a node spawned at `now` must be gone.
    pub fn expiry(&self, now: f64) -> f64 {
        now + self.lifetime_ms as f64
    }

    pub fn classes(&self) -> String {
        match self.variant {
            Some(variant) => format!("{} {}", self.kind.class(), variant),
            None => self.kind.class().to_string(),
        }
    }

    pub fn inline_style(&self) -> String {
        let mut css = format!("left: {}; top: {};", self.placement.left, self.placement.top);
        for (property, value) in &self.style {
            let _ = write!(css, " {}: {};", property, value);
        }
        css
    }
}
