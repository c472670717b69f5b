pub mod directory;
pub mod error;
pub mod shared;

pub use directory::{ContactUpdate, Directory};
pub use error::{DirectoryError, DirectoryErrorKind, Operation};
pub use shared::SharedDirectory;
