pub mod panel;
pub mod pointer;

pub use panel::wire_param_panel;
pub use pointer::wire_click_ripples;
