/// Open/closed state of one envelope. The reveal sequence belongs to the
/// first opening only; later toggles just flip the flap.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Envelope {
    open: bool,
    revealed: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EnvelopeToggle {
    pub open: bool,
    pub reveal: bool,
}

impl Envelope {
    pub fn is_open(&self) -> bool {
        self.open
    }

    pub fn toggle(&mut self) -> EnvelopeToggle {
        let was_open = self.open;
        self.open = !was_open;
        let reveal = !was_open && !self.revealed;
        if reveal {
            self.revealed = true;
        }
        EnvelopeToggle {
            open: self.open,
            reveal,
        }
    }
}
