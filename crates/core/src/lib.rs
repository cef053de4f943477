#![forbid(unsafe_code)]

pub mod access;
pub mod model;
pub mod profile;

pub use access::{Access, decide};
pub use profile::{PROFILE_TASKS, ProfileChecklist, ProfileTask};
