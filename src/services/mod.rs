// Service exports
pub mod overpass;
pub mod session;

pub use overpass::{OverpassClient, OverpassError};
pub use session::{InMemorySessionStore, SessionStore};
