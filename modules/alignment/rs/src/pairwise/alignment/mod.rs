pub use alignment::Alignment;
pub use cigar::Cigar;
pub use offset::Offset;
pub use op::Op;
pub use step::{Step, StepWithOffset};

#[allow(clippy::module_inception)]
mod alignment;
mod cigar;
mod offset;
mod op;
pub mod step;
pub mod utils;
