use crate::state::is_new_record;
use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct GameOverOverlayProps {
    pub show: bool,
    pub score: u32,
    pub level: u32,
    pub high_score: u32,
    pub previous_best: u32,
    pub restart: Callback<()>,
}

#[function_component]
pub fn GameOverOverlay(props: &GameOverOverlayProps) -> Html {
    if !props.show {
        return html! {};
    }
    let restart_cb = props.restart.clone();
    let restart_btn = Callback::from(move |_| restart_cb.emit(()));
    let new_best = is_new_record(props.score, props.previous_best);
    html! {
        <div style="position:absolute; top:50%; left:50%; transform:translate(-50%, -50%); background:rgba(0,0,0,0.85); border:2px solid #f85149; padding:24px 32px; border-radius:12px; text-align:center; min-width:320px;">
            <h2 style="margin:0 0 12px 0; color:#f85149;">{"Game Over"}</h2>
            <p style="margin:4px 0;">{ format!("Score: {}", props.score) }</p>
            <p style="margin:4px 0;">{ format!("Level Reached: {}", props.level) }</p>
            if new_best {
                <p style="margin:4px 0; color:#d4af37;">{"New high score!"}</p>
            } else {
                <p style="margin:4px 0;">{ format!("Best: {}", props.high_score) }</p>
            }
            <div style="margin-top:16px; display:flex; gap:12px; justify-content:center;">
                <button onclick={restart_btn}>{"Play Again (Enter)"}</button>
            </div>
        </div>
    }
}
