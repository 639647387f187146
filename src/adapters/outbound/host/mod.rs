/// Host platform adapters
mod standalone_host;

pub use standalone_host::StandaloneHost;
