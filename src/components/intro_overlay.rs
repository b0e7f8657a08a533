use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct IntroOverlayProps {
    pub show: bool,
    pub high_score: u32,
    pub start: Callback<()>,
}

#[function_component(IntroOverlay)]
pub fn intro_overlay(props: &IntroOverlayProps) -> Html {
    if !props.show {
        return html! {};
    }
    let start_cb = props.start.clone();
    let start_btn = Callback::from(move |_| start_cb.emit(()));
    html! {
        <div style="position:absolute; top:50%; left:50%; transform:translate(-50%, -50%); background:rgba(0,0,0,0.87); border:2px solid #30363d; padding:28px 36px; border-radius:14px; max-width:480px; width:90%; box-shadow:0 0 0 1px #1a1f24, 0 6px 18px rgba(0,0,0,0.6); font-size:14px; line-height:1.4;">
            <h2 style="margin:0 0 12px 0; font-size:22px; color:#7ee787; text-align:center;">{"Iso Snake"}</h2>
            <p style="margin:4px 0 10px 0; text-align:center; opacity:0.85;">{"Eat, grow, and keep clear of the walls and your own tail."}</p>
            <ul style="margin:0 0 12px 18px; padding:0; list-style:disc; display:flex; flex-direction:column; gap:4px;">
                <li>{"Steer with the arrow keys or WASD."}</li>
                <li>{"Every 5 foods the board grows and the snake speeds up."}</li>
                <li>{"Q / E rotate the board; R / F change the perspective."}</li>
                <li>{"Space pauses and resumes."}</li>
            </ul>
            if props.high_score > 0 {
                <p style="margin:4px 0; text-align:center; color:#d4af37;">{ format!("Best: {}", props.high_score) }</p>
            }
            <div style="display:flex; gap:12px; justify-content:center; margin-top:8px;">
                <button onclick={start_btn}>{"Start (Enter)"}</button>
            </div>
        </div>
    }
}
