pub mod chart;
pub mod dashboard;
pub mod figure;
pub mod indicators;
pub mod ticker;

pub use chart::*;
pub use dashboard::*;
pub use figure::*;
pub use indicators::*;
pub use ticker::*;
