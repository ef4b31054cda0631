use yew::prelude::*;

use crate::content::Letter;
use crate::effects::geometry::Point;
use crate::effects::presets;
use crate::effects::runtime::use_effects;
use crate::state::envelope::Envelope;
use crate::utils::dom;

const ENVELOPE_CSS: &str = r#"
    .envelopes {
        display: flex;
        flex-wrap: wrap;
        justify-content: center;
        gap: 1.5rem;
        margin-top: 1.5rem;
    }
    .envelope {
        position: relative;
        width: 220px;
        min-height: 150px;
        border-radius: 0.75rem;
        background: #ffd6e0;
        cursor: pointer;
        overflow: hidden;
        box-shadow: 0 8px 24px rgba(214, 51, 108, 0.25);
        transition: transform 0.3s ease;
    }
    .envelope:hover { transform: translateY(-4px); }
    .envelope .flap {
        position: absolute;
        inset: 0 0 auto 0;
        height: 75px;
        background: #ff8fab;
        clip-path: polygon(0 0, 100% 0, 50% 100%);
        transform-origin: top;
        transition: transform 0.5s ease;
        z-index: 2;
    }
    .envelope.opened .flap { transform: rotateX(180deg); }
    .envelope .label {
        position: absolute;
        bottom: 0.75rem;
        width: 100%;
        text-align: center;
        color: #a61e4d;
        font-weight: 600;
    }
    .envelope .letter {
        padding: 1rem;
        color: #5c2a3d;
        opacity: 0;
        transition: opacity 0.4s ease 0.3s;
    }
    .envelope.opened .letter { opacity: 1; }
    .envelope.opened .label { display: none; }
"#;

pub fn envelopes_css() -> Html {
    html! { <style>{ENVELOPE_CSS}</style> }
}

#[derive(Properties, PartialEq)]
pub struct EnvelopeCardProps {
    pub letter: Letter,
}

#[function_component(EnvelopeCard)]
pub fn envelope_card(props: &EnvelopeCardProps) -> Html {
    let effects = use_effects();
    let envelope = use_state(Envelope::default);
    let node = use_node_ref();

    let onclick = {
        let envelope = envelope.clone();
        let node = node.clone();
        let label = props.letter.label;
        Callback::from(move |_: MouseEvent| {
            let mut next = *envelope;
            let toggle = next.toggle();
            envelope.set(next);
            if !toggle.reveal {
                return;
            }
            log::info!("Envelope opened: {}", label);
            let center = dom::element_center(&node).unwrap_or(Point::new(0.0, 0.0));
            let nickname = effects.nickname().to_string();
            effects.play_with(|rng| presets::envelope_reveal(center, &nickname, rng));
        })
    };

    html! {
        <div
            ref={node}
            class={classes!("envelope", envelope.is_open().then_some("opened"))}
            {onclick}
        >
            <div class="flap"></div>
            <div class="letter">{ props.letter.body.clone() }</div>
            <div class="label">{ props.letter.label }</div>
        </div>
    }
}
