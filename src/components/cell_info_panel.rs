use crate::model::{Grid, GridCell};
use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct CellInfoPanelProps {
    pub grid: Grid,
    pub cell: Option<GridCell>,
}

#[function_component]
pub fn CellInfoPanel(props: &CellInfoPanelProps) -> Html {
    let Some(cell) = &props.cell else {
        return html! {};
    };

    let panel_style = "position:absolute; left:12px; top:96px; \
        background:rgba(0,0,0,0.8); border:2px solid #800080; border-radius:8px; \
        padding:10px 14px; min-width:250px; max-width:300px; font-size:12px; color:#ffffff;";
    let header_style = "font-weight:600; font-size:14px; margin-bottom:6px; display:flex; align-items:center; gap:8px;";
    let section_style = "margin-top:8px; padding-top:6px; border-top:1px solid #30363d;";
    let detail_style = "color:#cccccc; margin:3px 0;";

    let siblings: Vec<&GridCell> = props
        .grid
        .column(&cell.tier)
        .into_iter()
        .filter(|c| c.environment != cell.environment)
        .collect();

    html! {
        <div style={panel_style}>
            <div style={header_style}>
                <span style={format!("display:inline-block; width:12px; height:12px; background:{}; border-radius:2px;", cell.color())}></span>
                <span>{ cell.display_label() }</span>
                <span style="color:#8b949e; font-size:11px; font-weight:400;">
                    { format!("({}, {})", cell.grid_x, cell.grid_y) }
                </span>
            </div>
            <div style={detail_style}>{ cell.tier_description().to_string() }</div>
            <div style={detail_style}>{ format!("Service: {}", cell.service_name()) }</div>
            { if siblings.is_empty() { html!{} } else { html!{
                <div style={section_style}>
                    <div style="color:#8b949e; margin-bottom:3px;">{"Same tier elsewhere"}</div>
                    { for siblings.iter().map(|c| html!{ <div style={detail_style}>{ c.service_name().to_string() }</div> }) }
                </div>
            } } }
        </div>
    }
}
