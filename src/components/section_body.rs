use yew::prelude::*;

use super::envelope_card::{envelopes_css, EnvelopeCard};
use super::question_box::QuestionBox;
use super::reason_card::{reasons_css, ReasonCard};
use super::song_card::SongCard;
use crate::config::AppConfig;
use crate::content::{self, Section, REASONS};

#[derive(Properties, PartialEq)]
pub struct SectionBodyProps {
    pub section: Section,
    #[prop_or_default]
    pub on_next: Option<Callback<MouseEvent>>,
}

/// The content of one screen, shared by both layouts.
#[function_component(SectionBody)]
pub fn section_body(props: &SectionBodyProps) -> Html {
    let config = use_context::<AppConfig>().unwrap_or_default();
    let section = props.section;

    let body = match section.id {
        "reasons" => html! {
            <>
                { reasons_css() }
                <div class="reasons-grid">
                    { for REASONS.iter().enumerate().map(|(i, reason)| html! {
                        <ReasonCard key={i} reason={*reason} />
                    }) }
                </div>
            </>
        },
        "letters" => html! {
            <>
                { envelopes_css() }
                <div class="envelopes">
                    { for content::letters(&config.nickname).into_iter().map(|letter| {
                        let label = letter.label;
                        html! { <EnvelopeCard key={label} {letter} /> }
                    }) }
                </div>
            </>
        },
        "song" => html! { <SongCard url={config.song_url.clone()} /> },
        "question" => html! { <QuestionBox /> },
        _ => html! {},
    };

    html! {
        <div class="section-body">
            <h1 class="section-title">{ section.title }</h1>
            if !section.subtitle.is_empty() {
                <p class="section-subtitle">{ section.subtitle }</p>
            }
            { body }
            if let Some(on_next) = props.on_next.clone() {
                <button class="next-btn" onclick={on_next}>{ "Next 💌" }</button>
            }
        </div>
    }
}
