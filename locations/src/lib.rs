pub mod command;
pub mod error;
pub mod location;
pub mod store;

pub use command::{Command, Reply};
pub use error::{CommandError, NotFound, StoreError};
pub use location::{Axis, Location};
pub use store::LocationStore;
