pub mod config;
pub mod error;
pub mod links;
pub mod module;
pub mod types;

pub use config::ServiceConfig;
pub use error::{FieldError, ServiceError};
pub use links::{Link, PagedResult, Resource};
pub use module::Module;
pub use types::{PageParams, new_id};
