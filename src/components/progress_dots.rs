use yew::prelude::*;

const DOTS_CSS: &str = r#"
    .progress-dots {
        position: fixed;
        bottom: 1.5rem;
        left: 50%;
        transform: translateX(-50%);
        display: flex;
        gap: 0.6rem;
        z-index: 10;
    }
    .progress-dot {
        width: 10px;
        height: 10px;
        border-radius: 50%;
        border: none;
        padding: 0;
        background: rgba(255, 255, 255, 0.5);
        cursor: pointer;
        transition: all 0.3s ease;
    }
    .progress-dot.active {
        width: 28px;
        border-radius: 5px;
        background: #ff69b4;
    }
"#;

#[derive(Properties, PartialEq)]
pub struct ProgressDotsProps {
    pub total: usize,
    pub current: usize,
    pub on_select: Callback<usize>,
}

#[function_component(ProgressDots)]
pub fn progress_dots(props: &ProgressDotsProps) -> Html {
    html! {
        <div class="progress-dots">
            <style>{DOTS_CSS}</style>
            { for (1..=props.total).map(|page| {
                let on_select = props.on_select.clone();
                let onclick = Callback::from(move |_: MouseEvent| on_select.emit(page));
                html! {
                    <button
                        key={page}
                        class={classes!("progress-dot", (page == props.current).then_some("active"))}
                        aria-label={format!("Go to page {}", page)}
                        {onclick}
                    />
                }
            }) }
        </div>
    }
}
