pub mod selection;

pub use selection::{
    ListenerId, LogListener, Phase, PointerInput, SelectionController, SelectionListener,
    SelectionState,
};
