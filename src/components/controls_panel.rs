use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct ControlsPanelProps {
    pub pause_label: String,
    pub paused: bool,
    pub on_toggle_pause: Callback<()>,
    pub on_restart: Callback<()>,
}

#[function_component]
pub fn ControlsPanel(props: &ControlsPanelProps) -> Html {
    let pause_cb = {
        let cb = props.on_toggle_pause.clone();
        Callback::from(move |_| cb.emit(()))
    };
    let restart_cb = {
        let cb = props.on_restart.clone();
        Callback::from(move |_| cb.emit(()))
    };
    html! {<div style="position:absolute; top:12px; right:12px; background:rgba(22,27,34,0.9); border:1px solid #30363d; border-radius:8px; padding:8px; min-width:200px; display:flex; flex-direction:column; gap:6px;">
        <button onclick={pause_cb}>{ props.pause_label.clone() }</button>
        <button onclick={restart_cb}>{"Restart"}</button>
        if props.paused {
            <div style="font-size:12px; color:#d29922;">{"Paused"}</div>
        }
        <div style="font-size:11px; opacity:0.7; line-height:1.4;">
            {"Arrows / WASD: steer"}<br/>
            {"Q / E: rotate camera"}<br/>
            {"R / F: perspective"}
        </div>
    </div>}
}
