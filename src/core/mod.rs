pub mod driver;
pub mod params;
pub mod ripples;

pub use driver::*;
pub use params::*;
pub use ripples::*;
