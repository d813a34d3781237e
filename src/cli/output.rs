// `ValueEnum` for OutputFormat is implemented in marginalia-core (feature "clap")
// because the orphan rule forbids implementing it here.
pub use marginalia_core::format::OutputFormat;
