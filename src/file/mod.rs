pub mod session;

pub use session::SessionExporter;
