//! The yes/no question.
//!
//! Answering yes is a one-way transition. Clicking no never changes the
//! answer: the button just runs somewhere else inside the question box and,
//! on the third try, changes its label.

use crate::content::{NO_FINAL_NUDGE, NO_LABEL};
use crate::effects::random::RandomSource;

/// Clicks after which the "no" button starts begging.
pub const NUDGE_AFTER: u32 = 3;

/// Gap kept between the dodging button and the box edges.
pub const EDGE_MARGIN: f64 = 20.0;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Answer {
    #[default]
    Pending,
    Answered,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Question {
    answer: Answer,
}

impl Question {
    pub fn answer(&self) -> Answer {
        self.answer
    }

    pub fn is_answered(&self) -> bool {
        self.answer == Answer::Answered
    }

    /// Moves to `Answered`. Returns true only for the call that made the
    /// transition, so callers can fire their side effects exactly once.
    pub fn accept(&mut self) -> bool {
        match self.answer {
            Answer::Pending => {
                self.answer = Answer::Answered;
                true
            }
            Answer::Answered => false,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Size {
    pub width: f64,
    pub height: f64,
}

impl Size {
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }
}

/// Where the button went, relative to the question box.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Dodge {
    pub left: f64,
    pub top: f64,
    pub attempts: u32,
    /// True on the single click that switched the label.
    pub label_changed: bool,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct NoButton {
    attempts: u32,
    position: Option<(f64, f64)>,
}

impl NoButton {
    pub fn attempts(&self) -> u32 {
        self.attempts
    }

    pub fn position(&self) -> Option<(f64, f64)> {
        self.position
    }

    pub fn label(&self) -> &'static str {
        if self.attempts >= NUDGE_AFTER {
            NO_FINAL_NUDGE
        } else {
            NO_LABEL
        }
    }

    /// Registers a click and picks a new spot inside `container`.
    pub fn dodge(&mut self, container: Size, button: Size, rng: &mut dyn RandomSource) -> Dodge {
        let max_x = (container.width - button.width - 2.0 * EDGE_MARGIN).max(0.0);
        let max_y = (container.height - button.height - 2.0 * EDGE_MARGIN).max(0.0);
        let left = (rng.unit() * max_x).floor() + EDGE_MARGIN;
        let top = (rng.unit() * max_y).floor() + EDGE_MARGIN;

        self.attempts = self.attempts.saturating_add(1);
        self.position = Some((left, top));

        Dodge {
            left,
            top,
            attempts: self.attempts,
            label_changed: self.attempts == NUDGE_AFTER,
        }
    }
}
