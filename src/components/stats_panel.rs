use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct StatsPanelProps {
    pub score: u32,
    pub level: u32,
    pub high_score: u32,
    pub grid_size: u32,
    pub tick_ms: u32,
}

#[function_component]
pub fn StatsPanel(props: &StatsPanelProps) -> Html {
    let row_style = "display:flex; align-items:center; gap:8px;";
    let label_style = "flex:1; font-weight:500;";
    let value_style =
        "min-width:70px; text-align:right; font-variant-numeric:tabular-nums; font-weight:600;";
    html! {
        <div style="position:absolute; top:12px; left:12px; background:rgba(22,27,34,0.9); border:1px solid #30363d; border-radius:8px; padding:10px 14px; min-width:200px; display:flex; flex-direction:column; gap:8px; font-size:14px;">
            <div style={row_style}>
                <span style={format!("{} color:#7ee787;", label_style)}>{"Score"}</span>
                <span style={format!("{} color:#7ee787;", value_style)}>{ props.score }</span>
            </div>
            <div style={row_style}>
                <span style={format!("{} color:#d4af37;", label_style)}>{"Best"}</span>
                <span style={format!("{} color:#d4af37;", value_style)}>{ props.high_score }</span>
            </div>
            <div style={row_style}>
                <span style={format!("{} color:#58a6ff;", label_style)}>{"Level"}</span>
                <span style={format!("{} color:#58a6ff;", value_style)}>{ props.level }</span>
            </div>
            <div style={row_style}>
                <span style={label_style}>{"Grid"}</span>
                <span style={value_style}>{ format!("{0}×{0}", props.grid_size) }</span>
            </div>
            <div style={row_style}>
                <span style={label_style}>{"Tick"}</span>
                <span style={value_style}>{ format!("{} ms", props.tick_ms) }</span>
            </div>
        </div>
    }
}
