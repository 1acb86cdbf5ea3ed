use crate::model::{GridCell, GridDimensions};
use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct HeaderPanelProps {
    pub dimensions: GridDimensions,
    pub hovered: Option<GridCell>,
    /// Service opened by the last double click.
    pub activated: Option<String>,
}

#[function_component]
pub fn HeaderPanel(props: &HeaderPanelProps) -> Html {
    let d = props.dimensions;
    let hint = match &props.hovered {
        Some(c) => format!("{} · {}", c.display_label(), c.service_name()),
        None => "Click a tile to select it, double-click to open, Esc to clear".to_string(),
    };
    html! {
        <div style="position:absolute; top:12px; left:12px; background:rgba(22,27,34,0.9); border:1px solid #30363d; border-radius:8px; padding:8px 14px; min-width:250px; display:flex; flex-direction:column; gap:4px;">
            <div style="font-size:16px; font-weight:600;">{"DAS Platform Monitor"}</div>
            <div style="font-size:11px; color:#8b949e;">
                { format!("{} environments × {} tiers · {} cells", d.rows, d.cols, d.total_cells) }
            </div>
            <div style="font-size:12px;">{ hint }</div>
            { if let Some(s) = &props.activated { html!{ <div style="font-size:11px; color:#58a6ff;">{ format!("Opened {}", s) }</div> } } else { html!{} } }
        </div>
    }
}
