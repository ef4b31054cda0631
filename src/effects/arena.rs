//! Ownership of spawned nodes. Every node enters with an expiry and is
//! dropped by its own expire action; nothing else removes it.

use std::collections::BTreeMap;
use std::rc::Rc;

use yew::Reducible;

use super::particle::{Layer, Particle};

pub type ParticleId = u64;

#[derive(Debug, Clone, PartialEq)]
pub struct LiveParticle {
    pub id: ParticleId,
    pub particle: Particle,
    pub expires_at: f64,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct ParticleArena {
    live: BTreeMap<ParticleId, LiveParticle>,
}

impl ParticleArena {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a node spawned at `now` and returns its expiry time.
    pub fn insert(&mut self, id: ParticleId, particle: Particle, now: f64) -> f64 {
        let expires_at = particle.expiry(now);
        self.live.insert(
            id,
            LiveParticle {
                id,
                particle,
                expires_at,
            },
        );
        expires_at
    }

    /// Removes a node. Returns false if it was already gone.
    pub fn expire(&mut self, id: ParticleId) -> bool {
        self.live.remove(&id).is_some()
    }

    pub fn contains(&self, id: ParticleId) -> bool {
        self.live.contains_key(&id)
    }

    pub fn len(&self) -> usize {
        self.live.len()
    }

    pub fn is_empty(&self) -> bool {
        self.live.is_empty()
    }

    /// Live nodes in spawn order.
    pub fn iter(&self) -> impl Iterator<Item = &LiveParticle> {
        self.live.values()
    }

    pub fn in_layer(&self, layer: Layer) -> impl Iterator<Item = &LiveParticle> {
        self.iter().filter(move |p| p.particle.layer == layer)
    }
}

pub enum ArenaAction {
    Spawn {
        id: ParticleId,
        particle: Particle,
        now: f64,
    },
    Expire(ParticleId),
}

impl Reducible for ParticleArena {
    type Action = ArenaAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        match action {
            ArenaAction::Spawn { id, particle, now } => {
                let mut next = (*self).clone();
                next.insert(id, particle, now);
                Rc::new(next)
            }
            ArenaAction::Expire(id) => {
                if !self.contains(id) {
                    return self;
                }
                let mut next = (*self).clone();
                next.expire(id);
                Rc::new(next)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::effects::geometry::{Placement, Point};
    use crate::effects::particle::ParticleKind;

    fn confetti() -> Particle {
        Particle::new(ParticleKind::Confetti, Placement::at(Point::new(0.0, 0.0)), 3000)
    }

    #[test]
    fn insert_records_expiry() {
        let mut arena = ParticleArena::new();
        assert_eq!(arena.insert(1, confetti(), 250.0), 3250.0);
        assert!(arena.contains(1));
        assert_eq!(arena.iter().next().map(|p| p.expires_at), Some(3250.0));
    }

    #[test]
    fn expire_is_idempotent() {
        let mut arena = ParticleArena::new();
        arena.insert(7, confetti(), 0.0);
        assert!(arena.expire(7));
        assert!(!arena.expire(7));
        assert!(arena.is_empty());
    }

    #[test]
    fn reducer_skips_unknown_expire() {
        let arena = Rc::new(ParticleArena::new());
        let same = arena.clone().reduce(ArenaAction::Expire(42));
        assert!(Rc::ptr_eq(&arena, &same));

        let spawned = arena.reduce(ArenaAction::Spawn {
            id: 1,
            particle: confetti(),
            now: 0.0,
        });
        assert_eq!(spawned.len(), 1);
        let cleared = spawned.reduce(ArenaAction::Expire(1));
        assert!(cleared.is_empty());
    }

    #[test]
    fn layers_are_separated() {
        let mut arena = ParticleArena::new();
        arena.insert(1, confetti(), 0.0);
        let heart = Particle::new(
            ParticleKind::FloatingHeart,
            Placement::at(Point::new(0.0, 0.0)),
            10_000,
        );
        arena.insert(2, heart, 0.0);
        assert_eq!(arena.in_layer(Layer::Background).count(), 1);
        assert_eq!(arena.in_layer(Layer::Overlay).map(|p| p.id).collect::<Vec<_>>(), vec![1]);
    }
}
