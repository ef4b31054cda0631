//! Browser side of the effects: wires the sequencer to the real timer, the
//! sound board, the speaker and the particle reducer, and hands the result
//! to components through a Yew context.

use std::cell::RefCell;
use std::rc::Rc;

use rand::rngs::StdRng;
use rand::SeedableRng;
use web_sys::js_sys;
use yew::prelude::*;

use crate::audio::board::{SoundBoard, SoundOutput};
use crate::audio::speech::{Speaker, SpeechOutput};
use crate::audio::tone::Sound;
use crate::config::AppConfig;

use super::arena::{ArenaAction, ParticleArena, ParticleId};
use super::event::EffectBatch;
use super::particle::Particle;
use super::random::RandomSource;
use super::sequencer::{BrowserTimer, EffectSink, Sequencer};

/// Routes fired events to the page: sounds and phrases to their outputs,
/// nodes to the particle store stamped with the current time.
pub struct PageSink {
    sound: Rc<dyn SoundOutput>,
    speech: Rc<dyn SpeechOutput>,
    particles: Box<dyn Fn(ArenaAction)>,
    clock: Box<dyn Fn() -> f64>,
}

impl PageSink {
    pub fn new(
        sound: Rc<dyn SoundOutput>,
        speech: Rc<dyn SpeechOutput>,
        particles: impl Fn(ArenaAction) + 'static,
        clock: impl Fn() -> f64 + 'static,
    ) -> Self {
        Self {
            sound,
            speech,
            particles: Box::new(particles),
            clock: Box::new(clock),
        }
    }
}

impl EffectSink for PageSink {
    fn sound(&self, sound: &Sound) {
        self.sound.play(sound);
    }

    fn speak(&self, phrase: &str) {
        self.speech.say(phrase);
    }

    fn spawn(&self, id: ParticleId, particle: Particle) {
        (self.particles)(ArenaAction::Spawn {
            id,
            particle,
            now: (self.clock)(),
        });
    }

    fn expire(&self, id: ParticleId) {
        (self.particles)(ArenaAction::Expire(id));
    }
}

struct Inner {
    sequencer: Sequencer,
    rng: RefCell<StdRng>,
    sound: Rc<SoundBoard>,
    speech: Rc<Speaker>,
    nickname: String,
}

/// Handle components use to fire effects.
#[derive(Clone)]
pub struct Effects {
    inner: Rc<Inner>,
}

impl PartialEq for Effects {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.inner, &other.inner)
    }
}

impl Effects {
    pub fn new(config: &AppConfig, particles: UseReducerDispatcher<ParticleArena>) -> Self {
        let sound = Rc::new(SoundBoard::new(config.muted));
        let speech = Rc::new(Speaker::new(config.voice && !config.muted));
        let sink = Rc::new(PageSink::new(
            sound.clone(),
            speech.clone(),
            move |action| particles.dispatch(action),
            js_sys::Date::now,
        ));
        Self {
            inner: Rc::new(Inner {
                sequencer: Sequencer::new(Rc::new(BrowserTimer), sink),
                rng: RefCell::new(StdRng::from_entropy()),
                sound,
                speech,
                nickname: config.nickname.clone(),
            }),
        }
    }

    pub fn nickname(&self) -> &str {
        &self.inner.nickname
    }

    pub fn play(&self, batch: EffectBatch) {
        let events = batch.len();
        let spawned = self.inner.sequencer.run(batch);
        log::debug!("Scheduled {} effect events ({} nodes)", events, spawned);
    }

    /// Builds a batch with the shared random source, then plays it.
    pub fn play_with<F>(&self, build: F)
    where
        F: FnOnce(&mut dyn RandomSource) -> EffectBatch,
    {
        let batch = self.with_rng(build);
        self.play(batch);
    }

    pub fn with_rng<T, F>(&self, f: F) -> T
    where
        F: FnOnce(&mut dyn RandomSource) -> T,
    {
        let mut rng = self.inner.rng.borrow_mut();
        f(&mut *rng)
    }

    /// Must run inside a user gesture for browsers to allow sound.
    pub fn wake_audio(&self) {
        self.inner.sound.wake();
    }

    pub fn preload_voices(&self) {
        self.inner.speech.preload_voices();
    }
}

#[hook]
pub fn use_effects() -> Effects {
    use_context::<Effects>().expect("Effects context is provided by App")
}
