use yew::prelude::*;

use crate::effects::arena::{LiveParticle, ParticleArena};
use crate::effects::particle::Layer;

const PARTICLE_CSS: &str = r#"
    .particle-overlay {
        position: fixed;
        inset: 0;
        pointer-events: none;
        z-index: 9999;
        overflow: hidden;
    }
    .love-popup, .cute-popup, .confetti-particle, .heart-burst, .firework, .tap-heart {
        position: fixed;
        pointer-events: none;
    }
    .love-popup {
        font-size: 1.8rem;
        animation: popup-float 2s ease-out forwards;
    }
    .love-popup.bounce { animation: popup-bounce 2s ease-out forwards; }
    .love-popup.sparkle { animation: popup-sparkle 2s ease-out forwards; }
    .cute-popup {
        padding: 0.6rem 1rem;
        border-radius: 1.5rem;
        background: rgba(255, 255, 255, 0.95);
        color: #d6336c;
        font-weight: 600;
        box-shadow: 0 6px 20px rgba(255, 105, 180, 0.35);
        white-space: nowrap;
        animation: cute-pop 3s ease-out forwards;
    }
    .confetti-particle { animation: confetti-fall 3s ease-in forwards; }
    .heart-burst {
        font-size: 1.4rem;
        opacity: 0;
        animation: burst 1.5s ease-out forwards;
    }
    .firework { animation: float-up 3s ease-out forwards; }
    .tap-heart {
        font-size: 25px;
        transform: translate(-50%, -50%);
        animation: float-up 2s ease-out forwards;
    }
    @keyframes float-up {
        0% { opacity: 1; transform: translateY(0) scale(1); }
        100% { opacity: 0; transform: translateY(-120px) scale(1.4); }
    }
    @keyframes popup-float {
        0% { opacity: 0; transform: scale(0.3); }
        20% { opacity: 1; transform: scale(1.1); }
        100% { opacity: 0; transform: translateY(-90px) scale(1); }
    }
    @keyframes popup-bounce {
        0% { opacity: 0; transform: translateY(0); }
        30% { opacity: 1; transform: translateY(-40px); }
        60% { transform: translateY(-20px); }
        100% { opacity: 0; transform: translateY(-80px); }
    }
    @keyframes popup-sparkle {
        0% { opacity: 0; transform: rotate(0deg) scale(0.5); }
        30% { opacity: 1; transform: rotate(20deg) scale(1.3); }
        100% { opacity: 0; transform: rotate(-20deg) scale(0.8) translateY(-70px); }
    }
    @keyframes cute-pop {
        0% { opacity: 0; transform: scale(0.5); }
        15% { opacity: 1; transform: scale(1.05); }
        80% { opacity: 1; transform: scale(1); }
        100% { opacity: 0; transform: translateY(-30px); }
    }
    @keyframes confetti-fall {
        0% { opacity: 1; transform: translateY(0) rotate(0deg); }
        100% { opacity: 0; transform: translateY(260px) rotate(720deg); }
    }
    @keyframes burst {
        0% { opacity: 0; transform: scale(0); }
        40% { opacity: 1; transform: scale(1.3); }
        100% { opacity: 0; transform: scale(0.8) translateY(-40px); }
    }
"#;

pub fn render_particle(live: &LiveParticle) -> Html {
    let particle = &live.particle;
    html! {
        <div
            key={live.id.to_string()}
            class={particle.classes()}
            style={particle.inline_style()}
        >
            { particle.text.clone() }
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct ParticleLayerProps {
    pub arena: UseReducerHandle<ParticleArena>,
}

/// Everything spawned above the page: popups, confetti, fireworks.
#[function_component(ParticleLayer)]
pub fn particle_layer(props: &ParticleLayerProps) -> Html {
    html! {
        <div class="particle-overlay">
            <style>{PARTICLE_CSS}</style>
            { for props.arena.in_layer(Layer::Overlay).map(render_particle) }
        </div>
    }
}
