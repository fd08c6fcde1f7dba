//! Serializable reports describing what the assembler did.

pub mod assembly;
pub mod timing;

pub use assembly::AssemblyReport;
pub use timing::{StageTiming, TimingBreakdown};
