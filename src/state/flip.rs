/// A reason card. Every click flips it, front or back.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FlipCard {
    flipped: bool,
}

impl FlipCard {
    pub fn is_flipped(&self) -> bool {
        self.flipped
    }

    pub fn flip(&mut self) -> bool {
        self.flipped = !self.flipped;
        self.flipped
    }
}
