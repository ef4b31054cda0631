//! A small romantic greeting page: floating hearts, flip cards, envelopes
//! that burst into confetti, and a yes/no question that will not take no
//! for an answer.
//!
//! The visual and audio effects are described as plain data (`effects`,
//! `audio::melody`) and played back by a timer driven sequencer, so the
//! timing and cleanup rules can be exercised natively without a browser.

pub mod config;
pub mod content;
pub mod error;

pub mod audio {
    pub mod board;
    pub mod melody;
    pub mod speech;
    pub mod tone;
}
pub mod effects {
    pub mod arena;
    pub mod event;
    pub mod geometry;
    pub mod particle;
    pub mod presets;
    pub mod random;
    pub mod runtime;
    pub mod sequencer;
}
pub mod state {
    pub mod envelope;
    pub mod flip;
    pub mod navigation;
    pub mod question;
}
pub mod utils {
    pub mod dom;
}
pub mod components {
    pub mod envelope_card;
    pub mod hearts_background;
    pub mod particle_layer;
    pub mod progress_dots;
    pub mod question_box;
    pub mod reason_card;
    pub mod section_body;
    pub mod song_card;
}
pub mod pages {
    pub mod scroll;
    pub mod tabbed;
}

mod app;

pub use app::{App, AppProps, Route};
