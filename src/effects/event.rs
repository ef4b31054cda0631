use crate::audio::melody::Cue;
use crate::audio::tone::Sound;

use super::particle::Particle;

#[derive(Debug, Clone, PartialEq)]
pub enum EffectAction {
    Sound(Sound),
    Speak(String),
    Spawn(Particle),
}

/// One action, fired `delay_ms` after its batch starts.
#[derive(Debug, Clone, PartialEq)]
pub struct EffectEvent {
    pub delay_ms: u32,
    pub action: EffectAction,
}

/// A fixed set of events sharing the same t=0. Delays are not cumulative.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct EffectBatch {
    pub events: Vec<EffectEvent>,
}

impl EffectBatch {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, delay_ms: u32, action: EffectAction) {
        self.events.push(EffectEvent { delay_ms, action });
    }

    pub fn spawn(&mut self, delay_ms: u32, particle: Particle) {
        self.push(delay_ms, EffectAction::Spawn(particle));
    }

    /// Adds a melody, shifting every cue by `offset_ms`.
    pub fn melody(&mut self, offset_ms: u32, cues: Vec<Cue>) {
        for (delay, sound) in cues {
            self.push(offset_ms + delay, EffectAction::Sound(sound));
        }
    }

    /// Appends another batch that starts at the same t=0.
    pub fn merge(&mut self, other: EffectBatch) {
        self.events.extend(other.events);
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    pub fn len(&self) -> usize {
        self.events.len()
    }

    pub fn max_delay(&self) -> u32 {
        self.events.iter().map(|e| e.delay_ms).max().unwrap_or(0)
    }

    /// Time after which every node spawned by this batch has removed itself.
    pub fn settle_time(&self) -> u32 {
        self.events
            .iter()
            .map(|e| match &e.action {
                EffectAction::Spawn(p) => e.delay_ms + p.lifetime_ms,
                _ => e.delay_ms,
            })
            .max()
            .unwrap_or(0)
    }

    pub fn particles(&self) -> impl Iterator<Item = &Particle> {
        self.events.iter().filter_map(|e| match &e.action {
            EffectAction::Spawn(p) => Some(p),
            _ => None,
        })
    }

    pub fn sounds(&self) -> impl Iterator<Item = &Sound> {
        self.events.iter().filter_map(|e| match &e.action {
            EffectAction::Sound(s) => Some(s),
            _ => None,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::audio::melody;
    use crate::effects::geometry::{Placement, Point};
    use crate::effects::particle::ParticleKind;

    #[test]
    fn settle_time_covers_longest_lived_spawn() {
        let mut batch = EffectBatch::new();
        let at = Placement::at(Point::new(0.0, 0.0));
        batch.spawn(0, Particle::new(ParticleKind::Confetti, at, 3000));
        batch.spawn(500, Particle::new(ParticleKind::HeartBurst, at, 1500));
        batch.push(4000, EffectAction::Speak("hi".into()));
        assert_eq!(batch.max_delay(), 4000);
        assert_eq!(batch.settle_time(), 4000);

        batch.spawn(3000, Particle::new(ParticleKind::CutePopup, at, 3000));
        assert_eq!(batch.settle_time(), 6000);
    }

    #[test]
    fn melody_offsets_cues() {
        let mut batch = EffectBatch::new();
        batch.melody(50, melody::flip());
        let delays: Vec<u32> = batch.events.iter().map(|e| e.delay_ms).collect();
        assert_eq!(delays, vec![50, 130]);
        assert_eq!(batch.sounds().count(), 2);
        assert_eq!(batch.particles().count(), 0);
    }

    #[test]
    fn empty_batch_settles_immediately() {
        let batch = EffectBatch::new();
        assert!(batch.is_empty());
        assert_eq!(batch.settle_time(), 0);
    }
}
