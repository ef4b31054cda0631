//! The fixed note sets the page plays. Each entry is `(delay_ms, sound)`
//! measured from the moment the melody starts.

use super::tone::{Glide, Sound, Tone, Waveform};

pub type Cue = (u32, Sound);

pub const C5: f32 = 523.0;
pub const E5: f32 = 659.0;
pub const G5: f32 = 784.0;
pub const C6: f32 = 1047.0;
pub const E6: f32 = 1318.0;

fn sine(frequency_hz: f32, duration_s: f64) -> Sound {
    Sound::Chime(Tone::chime(frequency_hz, duration_s, Waveform::Sine))
}

/// Rising C major arpeggio played when an envelope opens.
pub fn envelope_sparkle() -> Vec<Cue> {
    [C5, E5, G5, C6]
        .iter()
        .enumerate()
        .map(|(i, &freq)| (i as u32 * 100, sine(freq, 0.4)))
        .collect()
}

/// Fanfare for the "yes" answer.
pub fn celebration() -> Vec<Cue> {
    [
        (0, C5),
        (100, E5),
        (200, G5),
        (300, C6),
        (450, G5),
        (550, C6),
        (700, E6),
    ]
    .into_iter()
    .map(|(delay, freq)| (delay, sine(freq, 0.6)))
    .collect()
}

/// Two quick high blips for a card flip.
pub fn flip() -> Vec<Cue> {
    vec![(0, sine(880.0, 0.15)), (80, sine(1100.0, 0.15))]
}

/// Descending square wave blips when the "no" button runs away.
pub fn dodge() -> Vec<Cue> {
    vec![
        (0, Sound::Chime(Tone::chime(500.0, 0.1, Waveform::Square))),
        (100, Sound::Chime(Tone::chime(400.0, 0.1, Waveform::Square))),
    ]
}

/// Page transition whoosh.
pub fn page_turn() -> Vec<Cue> {
    vec![(
        0,
        Sound::Glide(Glide {
            from_hz: 300.0,
            peak_hz: 600.0,
            to_hz: 400.0,
            peak_at_s: 0.15,
            duration_s: 0.3,
            gain: 0.15,
        }),
    )]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn celebration_ends_on_high_e() {
        let notes = celebration();
        assert_eq!(notes.len(), 7);
        let (delay, last) = notes.last().copied().unwrap();
        assert_eq!(delay, 700);
        assert_eq!(last, sine(E6, 0.6));
    }

    #[test]
    fn envelope_notes_are_spaced_by_100ms() {
        let delays: Vec<u32> = envelope_sparkle().iter().map(|(d, _)| *d).collect();
        assert_eq!(delays, vec![0, 100, 200, 300]);
    }

    #[test]
    fn dodge_uses_square_wave() {
        for (_, sound) in dodge() {
            match sound {
                Sound::Chime(tone) => assert_eq!(tone.waveform, Waveform::Square),
                other => panic!("unexpected sound {:?}", other),
            }
        }
    }
}
