//! Isometric 4×3 platform-tier grid: coordinate math, grid model, hover and
//! selection tracking, and the yew front end that draws it on a canvas.

pub mod components;
pub mod config;
pub mod coords;
pub mod error;
pub mod model;
pub mod render;
pub mod state;
