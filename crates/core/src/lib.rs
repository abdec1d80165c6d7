pub mod access;
pub mod config;
pub mod error;
pub mod host;
pub mod models;
pub mod navigation;
pub mod router;
pub mod shell;

pub use access::*;
pub use config::*;
pub use error::*;
pub use host::*;
pub use models::*;
pub use navigation::*;
pub use router::*;
pub use shell::*;
