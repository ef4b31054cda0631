//! Property tests for effect playback: every spawned node removes itself,
//! and delays are measured from the start of the batch.

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use proptest::prelude::*;
use rand::rngs::StdRng;
use rand::SeedableRng;
use sweetheart::audio::board::SoundOutput;
use sweetheart::audio::speech::SpeechOutput;
use sweetheart::audio::tone::Sound;
use sweetheart::effects::arena::{ArenaAction, ParticleArena, ParticleId};
use sweetheart::effects::event::EffectBatch;
use sweetheart::effects::geometry::{Placement, Point};
use sweetheart::effects::particle::{Particle, ParticleKind};
use sweetheart::effects::presets;
use sweetheart::effects::runtime::PageSink;
use sweetheart::effects::sequencer::{EffectSink, ManualTimer, Sequencer};
use sweetheart::error::EffectError;

struct PageModel {
    clock: Rc<ManualTimer>,
    arena: RefCell<ParticleArena>,
    spawned: RefCell<Vec<(ParticleId, u64)>>,
    sounds: RefCell<usize>,
}

impl EffectSink for PageModel {
    fn sound(&self, _sound: &Sound) {
        *self.sounds.borrow_mut() += 1;
    }

    fn speak(&self, _phrase: &str) {}

    fn spawn(&self, id: ParticleId, particle: Particle) {
        self.spawned.borrow_mut().push((id, self.clock.now()));
        self.arena
            .borrow_mut()
            .insert(id, particle, self.clock.now() as f64);
    }

    fn expire(&self, id: ParticleId) {
        assert!(self.arena.borrow_mut().expire(id), "node {} expired twice", id);
    }
}

fn page() -> (Rc<ManualTimer>, Rc<PageModel>, Sequencer) {
    let clock = Rc::new(ManualTimer::new());
    let model = Rc::new(PageModel {
        clock: clock.clone(),
        arena: RefCell::new(ParticleArena::new()),
        spawned: RefCell::new(Vec::new()),
        sounds: RefCell::new(0),
    });
    let sequencer = Sequencer::new(clock.clone(), model.clone());
    (clock, model, sequencer)
}

/// A browser with neither Web Audio nor speech synthesis.
#[derive(Default)]
struct NoAudio {
    tones: Cell<usize>,
    phrases: Cell<usize>,
}

impl SoundOutput for NoAudio {
    fn try_play(&self, _sound: &Sound) -> Result<(), EffectError> {
        self.tones.set(self.tones.get() + 1);
        Err(EffectError::AudioUnavailable("AudioContext is not defined".into()))
    }
}

impl SpeechOutput for NoAudio {
    fn try_say(&self, _phrase: &str) -> Result<(), EffectError> {
        self.phrases.set(self.phrases.get() + 1);
        Err(EffectError::SpeechUnavailable)
    }
}

struct SilentPage {
    clock: Rc<ManualTimer>,
    outputs: Rc<NoAudio>,
    arena: Rc<RefCell<ParticleArena>>,
    spawned: Rc<Cell<usize>>,
    sequencer: Sequencer,
}

fn silent_page() -> SilentPage {
    let clock = Rc::new(ManualTimer::new());
    let outputs = Rc::new(NoAudio::default());
    let arena = Rc::new(RefCell::new(ParticleArena::new()));
    let spawned = Rc::new(Cell::new(0));
    let sink = PageSink::new(
        outputs.clone(),
        outputs.clone(),
        {
            let arena = arena.clone();
            let spawned = spawned.clone();
            move |action| match action {
                ArenaAction::Spawn { id, particle, now } => {
                    spawned.set(spawned.get() + 1);
                    arena.borrow_mut().insert(id, particle, now);
                }
                ArenaAction::Expire(id) => {
                    assert!(arena.borrow_mut().expire(id), "node {} expired twice", id);
                }
            }
        },
        {
            let clock = clock.clone();
            move || clock.now() as f64
        },
    );
    let sequencer = Sequencer::new(clock.clone(), Rc::new(sink));
    SilentPage {
        clock,
        outputs,
        arena,
        spawned,
        sequencer,
    }
}

fn batch_strategy() -> impl Strategy<Value = Vec<(u32, u32)>> {
    prop::collection::vec((0u32..5_000, 1u32..10_000), 1..40)
}

proptest! {
    /// Nothing spawned by a batch outlives max(delay) + lifetime.
    #[test]
    fn every_node_is_gone_after_settle_time(events in batch_strategy()) {
        let (clock, model, sequencer) = page();
        let mut batch = EffectBatch::new();
        for (delay, lifetime) in &events {
            batch.spawn(*delay, Particle::new(
                ParticleKind::Confetti,
                Placement::at(Point::new(0.0, 0.0)),
                *lifetime,
            ));
        }
        let settle = batch.settle_time() as u64;
        prop_assert_eq!(sequencer.run(batch), events.len());

        clock.advance_to(settle);
        prop_assert!(model.arena.borrow().is_empty());
        prop_assert_eq!(model.spawned.borrow().len(), events.len());
        prop_assert_eq!(clock.pending(), 0);
    }

    /// Each node appears at exactly its own delay, whatever the others do.
    #[test]
    fn spawn_times_match_delays(events in batch_strategy()) {
        let (clock, model, sequencer) = page();
        let mut batch = EffectBatch::new();
        for (delay, lifetime) in &events {
            batch.spawn(*delay, Particle::new(
                ParticleKind::HeartBurst,
                Placement::at(Point::new(0.0, 0.0)),
                *lifetime,
            ));
        }
        sequencer.run(batch);
        clock.advance_to(20_000);

        let mut expected: Vec<u64> = events.iter().map(|(d, _)| *d as u64).collect();
        let mut actual: Vec<u64> = model.spawned.borrow().iter().map(|(_, t)| *t).collect();
        expected.sort_unstable();
        actual.sort_unstable();
        prop_assert_eq!(actual, expected);
    }

    /// The real envelope reveal cleans up completely, for any seed.
    #[test]
    fn envelope_reveal_cleans_up(seed in any::<u64>(), x in 0.0f64..1920.0, y in 0.0f64..1080.0) {
        let (clock, model, sequencer) = page();
        let mut rng = StdRng::seed_from_u64(seed);
        let batch = presets::envelope_reveal(Point::new(x, y), "janu", &mut rng);
        let settle = batch.settle_time() as u64;
        sequencer.run(batch);

        clock.advance_to(settle.saturating_sub(1));
        prop_assert!(!model.arena.borrow().is_empty());
        clock.advance_to(settle);
        prop_assert!(model.arena.borrow().is_empty());
        prop_assert_eq!(*model.sounds.borrow(), 4);
    }

    /// Without audio or speech, the visual side of a celebration still
    /// plays out in full and nothing escapes to the caller.
    #[test]
    fn celebrations_survive_missing_audio(seed in any::<u64>(), x in 0.0f64..1920.0, y in 0.0f64..1080.0) {
        let mut rng = StdRng::seed_from_u64(seed);
        let batches = [
            presets::yes_celebration("janu", &mut rng),
            presets::envelope_reveal(Point::new(x, y), "janu", &mut rng),
        ];
        for batch in batches {
            let page = silent_page();
            let nodes = batch.particles().count();
            let tones = batch.sounds().count();
            let settle = batch.settle_time() as u64;

            prop_assert_eq!(page.sequencer.run(batch), nodes);
            page.clock.advance_to(settle);

            prop_assert_eq!(page.spawned.get(), nodes);
            prop_assert!(page.arena.borrow().is_empty());
            prop_assert_eq!(page.outputs.tones.get(), tones);
            prop_assert_eq!(page.outputs.phrases.get(), 1);
            prop_assert_eq!(page.clock.pending(), 0);
        }
    }
}

#[test]
fn fireworks_overlap_and_drain() {
    let (clock, model, sequencer) = page();
    let mut rng = StdRng::seed_from_u64(11);
    sequencer.run(presets::fireworks(&mut rng));

    // 3000ms lifetime at 80ms spacing: 38 nodes spawned by t=2960, none gone yet.
    clock.advance_to(2_960);
    assert_eq!(model.arena.borrow().len(), 38);

    clock.advance_to(39 * 80 + 3_000);
    assert!(model.arena.borrow().is_empty());
}
