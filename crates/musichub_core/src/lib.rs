pub mod access;
pub mod config;
pub mod error;
pub mod filter;
pub mod library;
pub mod seed;
pub mod session;
pub mod stats;
pub mod storage;
pub mod token;

pub use access::*;
pub use config::*;
pub use error::*;
pub use filter::*;
pub use library::*;
pub use seed::*;
pub use session::*;
pub use stats::*;
pub use storage::*;
pub use token::*;
