use yew::prelude::*;

use crate::content::Reason;
use crate::effects::presets;
use crate::effects::runtime::use_effects;
use crate::state::flip::FlipCard;

const CARD_CSS: &str = r#"
    .reasons-grid {
        display: grid;
        grid-template-columns: repeat(auto-fit, minmax(150px, 1fr));
        gap: 1rem;
        max-width: 720px;
        margin: 1.5rem auto 0;
    }
    .reason-card {
        perspective: 800px;
        height: 160px;
        cursor: pointer;
    }
    .reason-card .card-inner {
        position: relative;
        width: 100%;
        height: 100%;
        transition: transform 0.6s;
        transform-style: preserve-3d;
    }
    .reason-card.flipped .card-inner { transform: rotateY(180deg); }
    .reason-card .card-face {
        position: absolute;
        inset: 0;
        display: flex;
        align-items: center;
        justify-content: center;
        padding: 1rem;
        border-radius: 1rem;
        backface-visibility: hidden;
        box-shadow: 0 8px 24px rgba(214, 51, 108, 0.2);
    }
    .reason-card .card-front {
        background: linear-gradient(135deg, #ff9a9e, #fecfef);
        font-size: 3rem;
    }
    .reason-card .card-back {
        background: #fff;
        color: #d6336c;
        transform: rotateY(180deg);
        font-size: 1rem;
    }
"#;

pub fn reasons_css() -> Html {
    html! { <style>{CARD_CSS}</style> }
}

#[derive(Properties, PartialEq)]
pub struct ReasonCardProps {
    pub reason: Reason,
}

#[function_component(ReasonCard)]
pub fn reason_card(props: &ReasonCardProps) -> Html {
    let effects = use_effects();
    let card = use_state(FlipCard::default);

    let onclick = {
        let card = card.clone();
        Callback::from(move |_: MouseEvent| {
            let mut next = *card;
            next.flip();
            card.set(next);
            effects.play(presets::card_flip());
        })
    };

    html! {
        <div class={classes!("reason-card", card.is_flipped().then_some("flipped"))} {onclick}>
            <div class="card-inner">
                <div class="card-face card-front">{ props.reason.front }</div>
                <div class="card-face card-back">{ props.reason.back }</div>
            </div>
        </div>
    }
}
