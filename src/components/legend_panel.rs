use super::legend::LegendRow;
use crate::config::{EnvironmentSpec, TierSpec};
use crate::model::{Grid, GridCell};
use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct LegendPanelProps {
    pub grid: Grid,
    pub tiers: Vec<TierSpec>,
    pub environments: Vec<EnvironmentSpec>,
    /// Highlights the hovered cell's tier and environment rows.
    pub hovered: Option<GridCell>,
}

#[function_component]
pub fn LegendPanel(props: &LegendPanelProps) -> Html {
    let hovered_tier = props.hovered.as_ref().map(|c| c.tier.as_str());
    let hovered_env = props.hovered.as_ref().map(|c| c.environment.as_str());
    let section_title = "font-weight:600; margin:6px 0 4px 0;";
    html! {<div style="position:absolute; right:12px; bottom:12px; background:rgba(22,27,34,0.9); border:1px solid #30363d; border-radius:8px; padding:8px; min-width:200px; font-size:12px;">
        <div style={section_title}>{"Tiers"}</div>
        { for props.tiers.iter().map(|t| html!{
            <LegendRow
                color={t.color.clone()}
                label={t.id.to_uppercase()}
                detail={Some(AttrValue::from(t.description.clone()))}
                highlight={hovered_tier == Some(t.id.as_str())}
            />
        }) }
        <div style={section_title}>{"Environments"}</div>
        { for props.environments.iter().map(|e| {
            let services: Vec<&str> = props.grid.row(&e.id).iter().map(|c| c.service_name()).collect();
            html!{
                <LegendRow
                    color={e.tint.clone()}
                    label={e.id.to_uppercase()}
                    title={Some(AttrValue::from(services.join("\n")))}
                    highlight={hovered_env == Some(e.id.as_str())}
                />
            }
        }) }
    </div>}
}
