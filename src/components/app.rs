use super::{
    cell_info_panel::CellInfoPanel, error_screen::ErrorScreen, grid_view::GridView,
    header_panel::HeaderPanel, legend_panel::LegendPanel,
};
use crate::config::GridConfig;
use crate::model::{Grid, GridCell};
use tracing::{error, info};
use yew::prelude::*;

/// Composition root: config, grid, and the panels fed by the canvas view.
#[function_component(App)]
pub fn app() -> Html {
    let config = use_memo((), |_| GridConfig::load());
    let built = {
        let config = config.clone();
        use_memo((), move |_| {
            let built = Grid::from_config(&config);
            match &built {
                Ok(grid) => {
                    if let Ok(stats) = serde_json::to_string(&grid.stats()) {
                        info!(%stats, "grid ready");
                    }
                }
                Err(err) => error!(%err, "grid configuration rejected"),
            }
            built
        })
    };
    let hovered = use_state(|| None::<GridCell>);
    let selected = use_state(|| None::<GridCell>);
    let activated = use_state(|| None::<String>);

    let grid = match &*built {
        Ok(grid) => grid.clone(),
        Err(err) => return html! { <ErrorScreen message={err.to_string()} /> },
    };

    let on_hover = {
        let hovered = hovered.clone();
        Callback::from(move |cell: Option<GridCell>| hovered.set(cell))
    };
    let on_select = {
        let selected = selected.clone();
        Callback::from(move |cell: Option<GridCell>| selected.set(cell))
    };
    let on_activate = {
        let activated = activated.clone();
        Callback::from(move |cell: GridCell| activated.set(Some(cell.service_name().to_string())))
    };

    let root_style = format!(
        "position:relative; width:100vw; height:100vh; overflow:hidden; background:{}; color:#c9d1d9; font-family:'Courier New', monospace;",
        config.background
    );
    html! {
        <div id="root" style={root_style}>
            <GridView
                grid={grid.clone()}
                config={config.clone()}
                {on_hover}
                {on_select}
                {on_activate}
            />
            <HeaderPanel
                dimensions={grid.dimensions()}
                hovered={(*hovered).clone()}
                activated={(*activated).clone()}
            />
            <CellInfoPanel grid={grid.clone()} cell={(*selected).clone()} />
            <LegendPanel
                grid={grid}
                tiers={config.tiers.clone()}
                environments={config.environments.clone()}
                hovered={(*hovered).clone()}
            />
        </div>
    }
}
