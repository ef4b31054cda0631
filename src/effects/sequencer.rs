//! Plays an [`EffectBatch`] back in time.
//!
//! Every event is scheduled independently, relative to the moment the
//! batch is run. Spawned nodes schedule their own removal after their
//! lifetime. There is no cancellation: once run, a batch always plays out
//! and always cleans up after itself.

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;

use crate::audio::tone::Sound;

use super::arena::ParticleId;
use super::event::{EffectAction, EffectBatch};
use super::particle::Particle;

/// One-shot delayed callbacks.
pub trait Timer {
    fn after(&self, delay_ms: u32, task: Box<dyn FnOnce()>);
}

/// `setTimeout` backed timer for the browser. Each callback is handed to
/// JS as a one-shot function, so it is freed once it has run.
pub struct BrowserTimer;

impl Timer for BrowserTimer {
    fn after(&self, delay_ms: u32, task: Box<dyn FnOnce()>) {
        let Some(window) = web_sys::window() else {
            log::warn!("No window to schedule an effect on");
            return;
        };
        let callback = Closure::once_into_js(move || task());
        if let Err(e) = window.set_timeout_with_callback_and_timeout_and_arguments_0(
            callback.unchecked_ref(),
            timeout_ms(delay_ms),
        ) {
            log::warn!("Failed to schedule effect: {:?}", e);
        }
    }
}

/// `setTimeout` takes a signed delay.
fn timeout_ms(delay_ms: u32) -> i32 {
    i32::try_from(delay_ms).unwrap_or(i32::MAX)
}

struct Pending {
    due: u64,
    seq: u64,
    task: Box<dyn FnOnce()>,
}

/// Virtual clock timer. Nothing fires until the clock is advanced, which
/// makes whole sequences replayable without a browser.
#[derive(Default)]
pub struct ManualTimer {
    now: Cell<u64>,
    seq: Cell<u64>,
    queue: RefCell<Vec<Pending>>,
}

impl ManualTimer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn now(&self) -> u64 {
        self.now.get()
    }

    pub fn pending(&self) -> usize {
        self.queue.borrow().len()
    }

    /// Fires every task due at or before `t`, in due order, including tasks
    /// scheduled by tasks fired along the way.
    pub fn advance_to(&self, t: u64) {
        loop {
            let next = {
                let mut queue = self.queue.borrow_mut();
                let earliest = queue
                    .iter()
                    .enumerate()
                    .filter(|(_, p)| p.due <= t)
                    .min_by_key(|(_, p)| (p.due, p.seq))
                    .map(|(i, _)| i);
                earliest.map(|i| queue.swap_remove(i))
            };
            match next {
                Some(pending) => {
                    self.now.set(pending.due);
                    (pending.task)();
                }
                None => break,
            }
        }
        if t > self.now.get() {
            self.now.set(t);
        }
    }

    pub fn advance(&self, ms: u64) {
        self.advance_to(self.now.get() + ms);
    }
}

impl Timer for ManualTimer {
    fn after(&self, delay_ms: u32, task: Box<dyn FnOnce()>) {
        let seq = self.seq.get();
        self.seq.set(seq + 1);
        self.queue.borrow_mut().push(Pending {
            due: self.now.get() + delay_ms as u64,
            seq,
            task,
        });
    }
}

/// Receives events as they fire.
pub trait EffectSink {
    fn sound(&self, sound: &Sound);
    fn speak(&self, phrase: &str);
    fn spawn(&self, id: ParticleId, particle: Particle);
    fn expire(&self, id: ParticleId);
}

#[derive(Clone)]
pub struct Sequencer {
    timer: Rc<dyn Timer>,
    sink: Rc<dyn EffectSink>,
    next_id: Rc<Cell<ParticleId>>,
}

impl Sequencer {
    pub fn new(timer: Rc<dyn Timer>, sink: Rc<dyn EffectSink>) -> Self {
        Self {
            timer,
            sink,
            next_id: Rc::new(Cell::new(0)),
        }
    }

    fn allocate(&self) -> ParticleId {
        let id = self.next_id.get();
        self.next_id.set(id + 1);
        id
    }

    /// Schedules every event of `batch`. Returns the number of nodes the
    /// batch will spawn.
    pub fn run(&self, batch: EffectBatch) -> usize {
        let mut spawned = 0;
        for event in batch.events {
            let sink = self.sink.clone();
            match event.action {
                EffectAction::Sound(sound) => {
                    self.timer
                        .after(event.delay_ms, Box::new(move || sink.sound(&sound)));
                }
                EffectAction::Speak(phrase) => {
                    self.timer
                        .after(event.delay_ms, Box::new(move || sink.speak(&phrase)));
                }
                EffectAction::Spawn(particle) => {
                    spawned += 1;
                    let id = self.allocate();
                    let timer = self.timer.clone();
                    let lifetime = particle.lifetime_ms;
                    self.timer.after(
                        event.delay_ms,
                        Box::new(move || {
                            sink.spawn(id, particle);
                            timer.after(lifetime, Box::new(move || sink.expire(id)));
                        }),
                    );
                }
            }
        }
        spawned
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::audio::melody;
    use crate::effects::arena::ParticleArena;
    use crate::effects::geometry::{Placement, Point};
    use crate::effects::particle::ParticleKind;

    #[test]
    fn browser_delays_fit_set_timeout() {
        assert_eq!(timeout_ms(0), 0);
        assert_eq!(timeout_ms(3_000), 3_000);
        assert_eq!(timeout_ms(u32::MAX), i32::MAX);
    }

    struct Recorder {
        clock: Rc<ManualTimer>,
        arena: RefCell<ParticleArena>,
        sounds: RefCell<Vec<u64>>,
        spoken: RefCell<Vec<(u64, String)>>,
    }

    impl EffectSink for Recorder {
        fn sound(&self, _sound: &Sound) {
            self.sounds.borrow_mut().push(self.clock.now());
        }
        fn speak(&self, phrase: &str) {
            self.spoken
                .borrow_mut()
                .push((self.clock.now(), phrase.to_string()));
        }
        fn spawn(&self, id: ParticleId, particle: Particle) {
            self.arena
                .borrow_mut()
                .insert(id, particle, self.clock.now() as f64);
        }
        fn expire(&self, id: ParticleId) {
            self.arena.borrow_mut().expire(id);
        }
    }

    fn setup() -> (Rc<ManualTimer>, Rc<Recorder>, Sequencer) {
        let clock = Rc::new(ManualTimer::new());
        let recorder = Rc::new(Recorder {
            clock: clock.clone(),
            arena: RefCell::new(ParticleArena::new()),
            sounds: RefCell::new(Vec::new()),
            spoken: RefCell::new(Vec::new()),
        });
        let sequencer = Sequencer::new(clock.clone(), recorder.clone());
        (clock, recorder, sequencer)
    }

    fn dot(lifetime_ms: u32) -> Particle {
        Particle::new(ParticleKind::Confetti, Placement::at(Point::new(0.0, 0.0)), lifetime_ms)
    }

    #[test]
    fn delays_are_relative_to_batch_start() {
        let (clock, recorder, sequencer) = setup();
        let mut batch = EffectBatch::new();
        batch.melody(0, melody::envelope_sparkle());
        sequencer.run(batch);

        clock.advance(1000);
        assert_eq!(*recorder.sounds.borrow(), vec![0, 100, 200, 300]);
    }

    #[test]
    fn nodes_live_exactly_their_lifetime() {
        let (clock, recorder, sequencer) = setup();
        let mut batch = EffectBatch::new();
        batch.spawn(100, dot(500));
        batch.spawn(200, dot(1000));
        assert_eq!(sequencer.run(batch), 2);

        clock.advance_to(99);
        assert!(recorder.arena.borrow().is_empty());
        clock.advance_to(200);
        assert_eq!(recorder.arena.borrow().len(), 2);
        clock.advance_to(599);
        assert_eq!(recorder.arena.borrow().len(), 2);
        clock.advance_to(600);
        assert_eq!(recorder.arena.borrow().len(), 1);
        clock.advance_to(1200);
        assert!(recorder.arena.borrow().is_empty());
        assert_eq!(clock.pending(), 0);
    }

    #[test]
    fn overlapping_batches_do_not_interfere() {
        let (clock, recorder, sequencer) = setup();
        let mut first = EffectBatch::new();
        first.spawn(0, dot(300));
        sequencer.run(first);

        clock.advance(100);
        let mut second = EffectBatch::new();
        second.spawn(0, dot(300));
        second.push(50, EffectAction::Speak("again".into()));
        sequencer.run(second);

        clock.advance_to(150);
        assert_eq!(recorder.arena.borrow().len(), 2);
        assert_eq!(*recorder.spoken.borrow(), vec![(150, "again".to_string())]);
        clock.advance_to(300);
        assert_eq!(recorder.arena.borrow().len(), 1);
        clock.advance_to(400);
        assert!(recorder.arena.borrow().is_empty());
    }

    #[test]
    fn ids_are_unique_across_batches() {
        let (clock, recorder, sequencer) = setup();
        for _ in 0..3 {
            let mut batch = EffectBatch::new();
            batch.spawn(0, dot(1000));
            batch.spawn(0, dot(1000));
            sequencer.run(batch);
        }
        clock.advance(1);
        assert_eq!(recorder.arena.borrow().len(), 6);
    }
}
