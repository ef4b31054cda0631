//! The page's fixed effect batches. All randomness is drawn when the batch
//! is built, so a batch is a plain value that can be inspected before it
//! is played.

use crate::audio::melody;
use crate::content::{
    self, BURST_HEARTS, CONFETTI_COLORS, FIREWORK_SYMBOLS, FLOATING_HEARTS, LOVE_EMOJI,
    POPUP_STYLES, TAP_HEART,
};

use super::event::{EffectAction, EffectBatch};
use super::geometry::{self, Length, Placement, Point};
use super::particle::{Particle, ParticleKind};
use super::random::{pick, RandomSource};

pub const CONFETTI_COUNT: usize = 20;
pub const HEART_BURST_COUNT: usize = 12;
pub const LOVE_POPUP_COUNT: usize = 8;
pub const FIREWORK_COUNT: usize = 40;

pub const FLOATING_HEART_INTERVAL_MS: u32 = 300;

const ENVELOPE_SPEECH_DELAY_MS: u32 = 800;
const YES_SPEECH_DELAY_MS: u32 = 1000;
const CUTE_MESSAGE_DELAY_MS: u32 = 400;

pub fn confetti(origin: Point, rng: &mut dyn RandomSource) -> EffectBatch {
    let mut batch = EffectBatch::new();
    for i in 0..CONFETTI_COUNT {
        let color = *pick(rng, &CONFETTI_COLORS);
        let placement = geometry::scatter(origin, 120.0, rng);
        let width = rng.between(5.0, 13.0);
        let height = rng.between(5.0, 13.0);
        let radius = if rng.chance(0.5) { "2px" } else { "50%" };
        let delay = rng.between(0.0, 0.3);
        let particle = Particle::new(ParticleKind::Confetti, placement, 3000)
            .style("background-color", color)
            .style("width", format!("{:.1}px", width))
            .style("height", format!("{:.1}px", height))
            .style("border-radius", radius)
            .style("animation-delay", format!("{:.2}s", delay));
        batch.spawn(i as u32 * 25, particle);
    }
    batch
}

pub fn heart_burst(origin: Point, rng: &mut dyn RandomSource) -> EffectBatch {
    let mut batch = EffectBatch::new();
    for i in 0..HEART_BURST_COUNT {
        let heart = *pick(rng, &BURST_HEARTS);
        let distance = rng.between(40.0, 70.0);
        let particle = Particle::new(
            ParticleKind::HeartBurst,
            geometry::radial(origin, i, 30.0, distance),
            1500,
        )
        .text(heart)
        .style("animation-delay", format!("{:.2}s", i as f64 * 0.05));
        batch.spawn(i as u32 * 40, particle);
    }
    batch
}

pub fn love_popups(origin: Point, rng: &mut dyn RandomSource) -> EffectBatch {
    let mut batch = EffectBatch::new();
    for i in 0..LOVE_POPUP_COUNT {
        let variant = *pick(rng, &POPUP_STYLES);
        let emoji = *pick(rng, &LOVE_EMOJI);
        let particle = Particle::new(
            ParticleKind::LovePopup,
            geometry::radial(origin, i, 45.0, 50.0),
            2000,
        )
        .variant(variant)
        .text(emoji);
        batch.spawn(i as u32 * 50, particle);
    }
    batch
}

pub fn cute_message(origin: Point, nickname: &str, rng: &mut dyn RandomSource) -> EffectBatch {
    let messages = content::cute_messages(nickname);
    let message = pick(rng, &messages).clone();
    let placement = Placement::at(Point::new(
        (origin.x - 80.0).max(10.0),
        (origin.y - 100.0).max(10.0),
    ));
    let mut batch = EffectBatch::new();
    batch.spawn(
        CUTE_MESSAGE_DELAY_MS,
        Particle::new(ParticleKind::CutePopup, placement, 3000).text(message),
    );
    batch
}

pub fn fireworks(rng: &mut dyn RandomSource) -> EffectBatch {
    let mut batch = EffectBatch::new();
    for i in 0..FIREWORK_COUNT {
        let symbol = *pick(rng, &FIREWORK_SYMBOLS);
        let placement = geometry::viewport(rng);
        let size = rng.between(20.0, 40.0);
        let particle = Particle::new(ParticleKind::Firework, placement, 3000)
            .text(symbol)
            .style("font-size", format!("{:.0}px", size));
        batch.spawn(i as u32 * 80, particle);
    }
    batch
}

/// A heart where the page was tapped.
pub fn tap_heart(at: Point) -> EffectBatch {
    let mut batch = EffectBatch::new();
    batch.spawn(
        0,
        Particle::new(ParticleKind::TapHeart, Placement::at(at), 2000).text(TAP_HEART),
    );
    batch
}

/// One background heart rising from the bottom of the page.
pub fn floating_heart(rng: &mut dyn RandomSource) -> EffectBatch {
    let symbol = *pick(rng, &FLOATING_HEARTS);
    let placement = Placement {
        left: Length::Percent(rng.unit() * 100.0),
        top: Length::Percent(100.0),
    };
    let duration = rng.between(5.0, 8.0);
    let size = rng.between(15.0, 35.0);
    let mut batch = EffectBatch::new();
    batch.spawn(
        0,
        Particle::new(ParticleKind::FloatingHeart, placement, 10_000)
            .text(symbol)
            .style("animation-duration", format!("{:.2}s", duration))
            .style("font-size", format!("{:.0}px", size)),
    );
    batch
}

fn speech(delay_ms: u32, nickname: &str, rng: &mut dyn RandomSource) -> EffectBatch {
    let phrases = content::love_phrases(nickname);
    let mut batch = EffectBatch::new();
    batch.push(delay_ms, EffectAction::Speak(pick(rng, &phrases).clone()));
    batch
}

/// Everything that happens when an envelope opens for the first time.
pub fn envelope_reveal(center: Point, nickname: &str, rng: &mut dyn RandomSource) -> EffectBatch {
    let mut batch = EffectBatch::new();
    batch.melody(0, melody::envelope_sparkle());
    batch.merge(speech(ENVELOPE_SPEECH_DELAY_MS, nickname, rng));
    batch.merge(love_popups(center, rng));
    batch.merge(cute_message(center, nickname, rng));
    batch.merge(confetti(center, rng));
    batch.merge(heart_burst(center, rng));
    batch
}

/// The answer to the question.
pub fn yes_celebration(nickname: &str, rng: &mut dyn RandomSource) -> EffectBatch {
    let mut batch = EffectBatch::new();
    batch.melody(0, melody::celebration());
    batch.merge(speech(YES_SPEECH_DELAY_MS, nickname, rng));
    batch.merge(fireworks(rng));
    batch
}

pub fn card_flip() -> EffectBatch {
    let mut batch = EffectBatch::new();
    batch.melody(0, melody::flip());
    batch
}

pub fn dodge() -> EffectBatch {
    let mut batch = EffectBatch::new();
    batch.melody(0, melody::dodge());
    batch
}

pub fn page_turn() -> EffectBatch {
    let mut batch = EffectBatch::new();
    batch.melody(0, melody::page_turn());
    batch
}
