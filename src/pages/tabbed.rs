use yew::prelude::*;

use crate::components::progress_dots::ProgressDots;
use crate::components::section_body::SectionBody;
use crate::content::SECTIONS;
use crate::effects::presets;
use crate::effects::runtime::use_effects;
use crate::state::navigation::{PageChange, Pager};

const TABBED_CSS: &str = r#"
    .pages {
        position: relative;
        min-height: 100vh;
        perspective: 1200px;
    }
    .page {
        position: absolute;
        inset: 0;
        display: flex;
        align-items: center;
        justify-content: center;
        padding: 2rem 1rem 4rem;
        overflow-y: auto;
        opacity: 0;
        pointer-events: none;
        transform: scale(1.15);
        transition: opacity 0.6s ease, transform 0.6s ease;
    }
    .page.active {
        opacity: 1;
        pointer-events: auto;
        transform: scale(1);
    }
    .page.prev {
        opacity: 0;
        transform: scale(0.85);
    }
"#;

/// One page at a time, zooming between them, with progress dots.
#[function_component(TabbedPage)]
pub fn tabbed_page() -> Html {
    let effects = use_effects();
    let pager = use_state(|| Pager::new(SECTIONS.len()));

    let turn = {
        let pager = pager.clone();
        move |step: &dyn Fn(&mut Pager) -> Option<PageChange>| {
            let mut next = *pager;
            if let Some(change) = step(&mut next) {
                log::info!("Page {} -> {}", change.from, change.to);
                effects.play(presets::page_turn());
                pager.set(next);
            }
        }
    };

    let go_to = {
        let turn = turn.clone();
        Callback::from(move |page: usize| turn(&|p: &mut Pager| p.go_to(page)))
    };
    let on_next = Callback::from(move |_: MouseEvent| turn(&Pager::next));

    let total = pager.total();
    html! {
        <div class="pages">
            <style>{TABBED_CSS}</style>
            { for SECTIONS.iter().enumerate().map(|(i, section)| {
                let page = i + 1;
                let on_next = (page < total).then(|| on_next.clone());
                html! {
                    <div key={page} id={format!("page-{}", page)} class={pager.page_class(page)}>
                        <SectionBody section={*section} {on_next} />
                    </div>
                }
            }) }
            <ProgressDots {total} current={pager.current()} on_select={go_to.clone()} />
        </div>
    }
}
