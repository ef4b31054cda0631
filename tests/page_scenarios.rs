//! The question and envelope flows as a visitor would click through them.

use proptest::prelude::*;
use sweetheart::content::{NO_FINAL_NUDGE, NO_LABEL};
use sweetheart::effects::random::Scripted;
use sweetheart::state::envelope::Envelope;
use sweetheart::state::question::{Answer, NoButton, Question, Size, EDGE_MARGIN};

#[test]
fn three_noes_switch_the_label_after_the_third() {
    let mut button = NoButton::default();
    let mut rng = Scripted::new([0.2, 0.7, 0.9, 0.1]);
    let container = Size::new(500.0, 350.0);
    let size = Size::new(90.0, 44.0);

    button.dodge(container, size, &mut rng);
    assert_eq!(button.label(), NO_LABEL);
    button.dodge(container, size, &mut rng);
    assert_eq!(button.label(), NO_LABEL);
    button.dodge(container, size, &mut rng);
    assert_eq!(button.label(), NO_FINAL_NUDGE);
}

#[test]
fn yes_is_terminal() {
    let mut question = Question::default();
    let fired = (0..5).filter(|_| question.accept()).count();
    assert_eq!(fired, 1);
    assert_eq!(question.answer(), Answer::Answered);
}

proptest! {
    #[test]
    fn attempts_count_every_click(
        clicks in 1usize..50,
        values in prop::collection::vec(0.0f64..1.0, 2..20),
        width in 0.0f64..1200.0,
        height in 0.0f64..900.0,
    ) {
        let mut button = NoButton::default();
        let mut rng = Scripted::new(values);
        let container = Size::new(width, height);
        let size = Size::new(90.0, 44.0);
        let mut label_changes = 0;
        let mut last_label = button.label();

        for click in 1..=clicks {
            let dodge = button.dodge(container, size, &mut rng);
            prop_assert_eq!(dodge.attempts as usize, click);
            prop_assert_eq!(button.attempts() as usize, click);
            prop_assert!(dodge.left >= EDGE_MARGIN && dodge.top >= EDGE_MARGIN);
            prop_assert!(dodge.left <= (width - size.width - EDGE_MARGIN).max(EDGE_MARGIN));
            prop_assert!(dodge.top <= (height - size.height - EDGE_MARGIN).max(EDGE_MARGIN));
            if button.label() != last_label {
                label_changes += 1;
                prop_assert_eq!(click, 3);
                last_label = button.label();
            }
        }
        prop_assert_eq!(label_changes, usize::from(clicks >= 3));
    }

    #[test]
    fn envelope_reveals_once(toggles in 1usize..40) {
        let mut envelope = Envelope::default();
        let reveals = (0..toggles).filter(|_| envelope.toggle().reveal).count();
        prop_assert_eq!(reveals, 1);
        prop_assert_eq!(envelope.is_open(), toggles % 2 == 1);
    }
}
