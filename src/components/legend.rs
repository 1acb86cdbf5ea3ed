use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct LegendRowProps {
    pub color: AttrValue,
    pub label: AttrValue,
    #[prop_or_default]
    pub detail: Option<AttrValue>,
    #[prop_or_default]
    pub title: Option<AttrValue>,
    #[prop_or(false)]
    pub highlight: bool,
}

#[function_component(LegendRow)]
pub fn legend_row(props: &LegendRowProps) -> Html {
    let weight = if props.highlight { "font-weight:700; color:#ffffff;" } else { "" };
    html! { <div title={props.title.clone()} style={format!("display:flex; align-items:center; gap:8px; margin:3px 0; {}", weight)}>
        <span style={format!("display:inline-block; width:12px; height:12px; background:{}; border:1px solid #30363d; border-radius:2px;", props.color)}></span>
        <span>{ props.label.to_string() }</span>
        { if let Some(d) = &props.detail { html!{ <span style="color:#8b949e; font-size:11px;">{ d.to_string() }</span> } } else { html!{} } }
    </div> }
}
