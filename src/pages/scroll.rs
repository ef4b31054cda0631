use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::KeyboardEvent;
use yew::prelude::*;

use crate::components::section_body::SectionBody;
use crate::content::SECTIONS;
use crate::state::navigation::{key_direction, section_at, SectionNav, SECTION_THRESHOLD_PX};
use crate::utils::dom;

const SCROLL_CSS: &str = r#"
    .scroll-page section {
        min-height: 100vh;
        display: flex;
        align-items: center;
        justify-content: center;
        padding: 3rem 1rem;
        scroll-snap-align: start;
    }
    html { scroll-snap-type: y proximity; }
"#;

/// Every section stacked vertically; arrow keys jump between them.
#[function_component(ScrollPage)]
pub fn scroll_page() -> Html {
    let nav = SectionNav::new(SECTIONS.len());

    use_effect_with_deps(
        move |_| {
            let listener = Closure::<dyn Fn(KeyboardEvent)>::new(move |e: KeyboardEvent| {
                on_key(&nav, &e);
            });
            let window = web_sys::window();
            if let Some(window) = &window {
                if let Err(e) = window.add_event_listener_with_callback(
                    "keydown",
                    listener.as_ref().unchecked_ref(),
                ) {
                    log::warn!("Failed to install arrow key navigation: {:?}", e);
                }
            }
            move || {
                if let Some(window) = window {
                    let _ = window.remove_event_listener_with_callback(
                        "keydown",
                        listener.as_ref().unchecked_ref(),
                    );
                }
            }
        },
        (),
    );

    html! {
        <div class="scroll-page">
            <style>{SCROLL_CSS}</style>
            { for SECTIONS.iter().enumerate().map(|(i, section)| {
                let on_next = (i + 1 < SECTIONS.len()).then(|| {
                    Callback::from(move |_: MouseEvent| {
                        if let Some(target) = nav.jump(i + 1) {
                            dom::scroll_to_section(SECTIONS[target].id);
                        }
                    })
                });
                html! {
                    <section key={section.id} id={section.id}>
                        <SectionBody section={*section} {on_next} />
                    </section>
                }
            }) }
        </div>
    }
}

fn on_key(nav: &SectionNav, event: &KeyboardEvent) {
    let Some(direction) = key_direction(&event.key()) else {
        return;
    };
    event.prevent_default();
    let tops = dom::section_tops(SECTIONS.iter().map(|s| s.id));
    let current = section_at(&tops, SECTION_THRESHOLD_PX);
    if let Some(target) = nav.step_from(current, direction) {
        log::debug!("Scrolling to section {}", SECTIONS[target].id);
        dom::scroll_to_section(SECTIONS[target].id);
    }
}
