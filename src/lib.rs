pub mod aliases;
pub mod error;
pub mod index;
pub mod logging;
pub mod model;
pub mod resolver;
pub mod source;
pub mod store;

pub use self::error::LookupError;
pub use self::resolver::Resolver;
