pub mod app;
pub mod cell_info_panel;
pub mod error_screen;
pub mod grid_view;
pub mod header_panel;
pub mod legend;
pub mod legend_panel;
