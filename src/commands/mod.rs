pub mod analysis;
pub mod timer;
pub mod transfer;

pub use analysis::{progress, report, warmup};
pub use timer::rest_timer;
pub use transfer::{export, new_workout};
