use yew::prelude::*;

const SONG_CSS: &str = r#"
    .song-card {
        max-width: 480px;
        margin: 1.5rem auto 0;
        padding: 1rem;
        border-radius: 1rem;
        background: rgba(255, 255, 255, 0.9);
        box-shadow: 0 8px 24px rgba(214, 51, 108, 0.2);
    }
    .song-card iframe {
        width: 100%;
        height: 152px;
        border: none;
        border-radius: 0.75rem;
    }
    .song-card .song-placeholder {
        color: #a61e4d;
        text-align: center;
    }
"#;

#[derive(Properties, PartialEq)]
pub struct SongCardProps {
    pub url: Option<String>,
}

#[function_component(SongCard)]
pub fn song_card(props: &SongCardProps) -> Html {
    let body = match &props.url {
        Some(url) => html! {
            <iframe
                src={url.clone()}
                allow="autoplay; clipboard-write; encrypted-media; fullscreen"
                loading="lazy"
            />
        },
        None => html! {
            <p class="song-placeholder">{"🎵 Hum our song for me, I'll wait 💕"}</p>
        },
    };
    html! {
        <div class="song-card">
            <style>{SONG_CSS}</style>
            { body }
        </div>
    }
}
