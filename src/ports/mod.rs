//! Ports - trait seams between the application layer and the outside world.

mod auth_directory;
mod entry_repository;
mod profile_repository;
mod session_validator;

pub use auth_directory::AuthDirectory;
pub use entry_repository::{EntryRepository, RawEntryRow};
pub use profile_repository::ProfileRepository;
pub use session_validator::SessionValidator;
