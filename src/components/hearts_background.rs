use gloo_timers::callback::Interval;
use yew::prelude::*;

use super::particle_layer::render_particle;
use crate::effects::arena::ParticleArena;
use crate::effects::particle::Layer;
use crate::effects::presets::{self, FLOATING_HEART_INTERVAL_MS};
use crate::effects::runtime::use_effects;

const HEARTS_CSS: &str = r#"
    .hearts-container {
        position: fixed;
        inset: 0;
        pointer-events: none;
        overflow: hidden;
        z-index: 0;
    }
    .heart {
        position: absolute;
        opacity: 0.7;
        animation-name: rise;
        animation-timing-function: linear;
        animation-fill-mode: forwards;
    }
    @keyframes rise {
        0% { transform: translateY(0) rotate(0deg); opacity: 0.8; }
        100% { transform: translateY(-110vh) rotate(360deg); opacity: 0; }
    }
"#;

#[derive(Properties, PartialEq)]
pub struct HeartsBackgroundProps {
    pub arena: UseReducerHandle<ParticleArena>,
}

/// Keeps a gentle stream of hearts rising behind the page for as long as it
/// is mounted.
#[function_component(HeartsBackground)]
pub fn hearts_background(props: &HeartsBackgroundProps) -> Html {
    let effects = use_effects();
    {
        use_effect_with_deps(
            move |_| {
                let interval = Interval::new(FLOATING_HEART_INTERVAL_MS, move || {
                    effects.play_with(|rng| presets::floating_heart(rng));
                });
                move || drop(interval)
            },
            (),
        );
    }

    html! {
        <div class="hearts-container">
            <style>{HEARTS_CSS}</style>
            { for props.arena.in_layer(Layer::Background).map(render_particle) }
        </div>
    }
}
