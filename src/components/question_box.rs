use yew::prelude::*;

use crate::content::{self, QUESTION, YES_LABEL};
use crate::effects::presets;
use crate::effects::runtime::use_effects;
use crate::state::question::{NoButton, Question, Size};
use crate::utils::dom;

const QUESTION_CSS: &str = r#"
    .question-box {
        position: relative;
        max-width: 560px;
        min-height: 320px;
        margin: 1.5rem auto 0;
        padding: 2rem;
        border-radius: 1.5rem;
        background: rgba(255, 255, 255, 0.92);
        box-shadow: 0 12px 32px rgba(214, 51, 108, 0.25);
        text-align: center;
    }
    .the-question {
        color: #d6336c;
        font-size: 2rem;
        margin-bottom: 2rem;
    }
    .answer-buttons {
        display: flex;
        justify-content: center;
        gap: 1.5rem;
    }
    .answer-buttons button {
        padding: 0.8rem 2rem;
        border: none;
        border-radius: 2rem;
        font-size: 1.1rem;
        cursor: pointer;
        transition: left 0.25s ease, top 0.25s ease, transform 0.2s ease;
    }
    .yes-btn {
        background: linear-gradient(135deg, #ff69b4, #ff1493);
        color: #fff;
    }
    .yes-btn:hover { transform: scale(1.1); }
    .no-btn {
        background: #e9ecef;
        color: #495057;
    }
    .yes-response {
        font-size: 1.4rem;
        color: #d6336c;
        animation: popup-float 0.8s ease-out;
    }
    .hidden { display: none; }
"#;

#[function_component(QuestionBox)]
pub fn question_box() -> Html {
    let effects = use_effects();
    let question = use_state(Question::default);
    let no_button = use_state(NoButton::default);
    let box_ref = use_node_ref();
    let no_ref = use_node_ref();

    let on_yes = {
        let question = question.clone();
        let effects = effects.clone();
        Callback::from(move |_: MouseEvent| {
            let mut next = *question;
            if !next.accept() {
                return;
            }
            log::info!("Question answered: yes");
            question.set(next);
            let nickname = effects.nickname().to_string();
            effects.play_with(|rng| presets::yes_celebration(&nickname, rng));
        })
    };

    let on_no = {
        let no_button = no_button.clone();
        let box_ref = box_ref.clone();
        let no_ref = no_ref.clone();
        let effects = effects.clone();
        Callback::from(move |_: MouseEvent| {
            effects.play(presets::dodge());
            let container = dom::client_size(&box_ref).unwrap_or(Size::new(0.0, 0.0));
            let button = dom::offset_size(&no_ref).unwrap_or(Size::new(0.0, 0.0));
            let mut next = (*no_button).clone();
            let dodge = effects.with_rng(|rng| next.dodge(container, button, rng));
            if dodge.label_changed {
                log::info!("No button gave up after {} attempts", dodge.attempts);
            }
            no_button.set(next);
        })
    };

    let no_style = no_button
        .position()
        .map(|(left, top)| format!("position: absolute; left: {}px; top: {}px;", left, top));
    let answered = question.is_answered();

    html! {
        <div class="question-box" ref={box_ref}>
            <style>{QUESTION_CSS}</style>
            if !answered {
                <>
                    <h2 class="the-question">{ QUESTION }</h2>
                    <div class="answer-buttons">
                        <button class="yes-btn" onclick={on_yes}>{ YES_LABEL }</button>
                        <button class="no-btn" ref={no_ref} style={no_style} onclick={on_no}>
                            { no_button.label() }
                        </button>
                    </div>
                </>
            }
            <div id="yes-response" class={classes!("yes-response", (!answered).then_some("hidden"))}>
                <p>{ content::yes_response(effects.nickname()) }</p>
            </div>
        </div>
    }
}
