pub mod driver;
pub mod io;
pub mod process;
pub mod workload;

pub use driver::Sim;
pub use process::ProcessDescriptor;
pub use workload::{WorkloadSpec, bernoulli_jobs};
