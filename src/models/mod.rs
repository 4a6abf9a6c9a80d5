pub mod trip;
pub mod units;
pub mod wind;

pub use trip::*;
pub use units::*;
pub use wind::*;
