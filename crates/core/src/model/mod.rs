mod auth;
mod ids;
mod lab;
mod module;

pub use auth::{AuthState, User};
pub use ids::{LabId, ModuleId, TrackId};
pub use lab::{Difficulty, InstanceStatus, Lab, LabInstanceStatus, ParseDifficultyError};
pub use module::Module;
