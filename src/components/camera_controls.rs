use crate::util::format_degrees;
use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct CameraControlsProps {
    pub rotation: f64,
    pub perspective: f64,
    pub on_rotate_left: Callback<()>,
    pub on_rotate_right: Callback<()>,
    pub on_perspective_up: Callback<()>,
    pub on_perspective_down: Callback<()>,
}

#[function_component(CameraControls)]
pub fn camera_controls(props: &CameraControlsProps) -> Html {
    let rl = {
        let cb = props.on_rotate_left.clone();
        Callback::from(move |_| cb.emit(()))
    };
    let rr = {
        let cb = props.on_rotate_right.clone();
        Callback::from(move |_| cb.emit(()))
    };
    let pu = {
        let cb = props.on_perspective_up.clone();
        Callback::from(move |_| cb.emit(()))
    };
    let pd = {
        let cb = props.on_perspective_down.clone();
        Callback::from(move |_| cb.emit(()))
    };
    let value_style = "min-width:52px; text-align:center; font-variant-numeric:tabular-nums;";
    html! {<div style="position:absolute; left:12px; bottom:12px; background:rgba(22,27,34,0.9); border:1px solid #30363d; border-radius:8px; padding:8px; display:flex; gap:6px; align-items:center; font-size:13px;">
        <button onclick={rl} title="Rotate left (Q)"> {"⟲"} </button>
        <span style={value_style}>{ format_degrees(props.rotation) }</span>
        <button onclick={rr} title="Rotate right (E)"> {"⟳"} </button>
        <span style="width:8px;"></span>
        <button onclick={pd} title="Less perspective (F)"> {"-"} </button>
        <span style={value_style}>{ format!("{:.1}", props.perspective) }</span>
        <button onclick={pu} title="More perspective (R)"> {"+"} </button>
    </div>}
}
