use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::{Element, MouseEvent};
use yew::prelude::*;
use yew_router::prelude::*;

use crate::components::hearts_background::HeartsBackground;
use crate::components::particle_layer::ParticleLayer;
use crate::config::AppConfig;
use crate::effects::arena::ParticleArena;
use crate::effects::geometry::Point;
use crate::effects::presets;
use crate::effects::runtime::Effects;
use crate::pages::scroll::ScrollPage;
use crate::pages::tabbed::TabbedPage;
use crate::utils::dom;

#[derive(Clone, Routable, PartialEq, Debug)]
pub enum Route {
    #[at("/")]
    Tabbed,
    #[at("/scroll")]
    Scroll,
    #[not_found]
    #[at("/404")]
    NotFound,
}

fn switch(route: Route) -> Html {
    match route {
        Route::Tabbed => html! { <TabbedPage /> },
        Route::Scroll => html! { <ScrollPage /> },
        Route::NotFound => html! { <Redirect<Route> to={Route::Tabbed} /> },
    }
}

const APP_CSS: &str = r#"
    * { box-sizing: border-box; }
    body {
        margin: 0;
        min-height: 100vh;
        font-family: 'Poppins', 'Segoe UI', sans-serif;
        background: linear-gradient(135deg, #ffdde1 0%, #ee9ca7 100%);
        color: #5c2a3d;
        overflow-x: hidden;
    }
    .section-body {
        position: relative;
        z-index: 1;
        width: 100%;
        max-width: 900px;
        margin: 0 auto;
        text-align: center;
    }
    .section-title {
        font-size: 2.6rem;
        color: #d6336c;
        margin-bottom: 0.5rem;
    }
    .section-subtitle {
        font-size: 1.1rem;
        opacity: 0.8;
    }
    .next-btn {
        margin-top: 2rem;
        padding: 0.7rem 1.8rem;
        border: none;
        border-radius: 2rem;
        background: #ff69b4;
        color: #fff;
        font-size: 1rem;
        cursor: pointer;
    }
"#;

#[derive(Properties, PartialEq)]
pub struct AppProps {
    pub config: AppConfig,
}

#[function_component(App)]
pub fn app(props: &AppProps) -> Html {
    let particles = use_reducer(ParticleArena::new);
    let effects = {
        let dispatcher = particles.dispatcher();
        let config = props.config.clone();
        use_memo(move |_| Effects::new(&config, dispatcher), ())
    };
    let effects = (*effects).clone();

    // Voice preload, plus taps anywhere: unlock audio and leave a heart.
    {
        let effects = effects.clone();
        use_effect_with_deps(
            move |_| {
                effects.preload_voices();
                let listener = Closure::<dyn Fn(MouseEvent)>::new(move |e: MouseEvent| {
                    effects.wake_audio();
                    let target = e.target().and_then(|t| t.dyn_into::<Element>().ok());
                    if target.map_or(false, |t| dom::is_interactive(&t)) {
                        return;
                    }
                    let at = Point::new(e.client_x() as f64, e.client_y() as f64);
                    effects.play(presets::tap_heart(at));
                });
                let document = web_sys::window().and_then(|w| w.document());
                if let Some(document) = &document {
                    if let Err(e) = document
                        .add_event_listener_with_callback("click", listener.as_ref().unchecked_ref())
                    {
                        log::warn!("Failed to install tap handler: {:?}", e);
                    }
                }
                move || {
                    if let Some(document) = document {
                        let _ = document.remove_event_listener_with_callback(
                            "click",
                            listener.as_ref().unchecked_ref(),
                        );
                    }
                }
            },
            (),
        );
    }

    html! {
        <ContextProvider<AppConfig> context={props.config.clone()}>
            <ContextProvider<Effects> context={effects}>
                <style>{APP_CSS}</style>
                <HeartsBackground arena={particles.clone()} />
                <BrowserRouter>
                    <Switch<Route> render={switch} />
                </BrowserRouter>
                <ParticleLayer arena={particles} />
            </ContextProvider<Effects>>
        </ContextProvider<AppConfig>>
    }
}
