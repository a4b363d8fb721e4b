pub mod moto;
pub mod tag;
pub mod yard;

pub use moto::{CreateMoto, Moto, MotoStatus, UpdateMoto};
pub use tag::{CreateTag, Tag, TagType, UpdateTag};
pub use yard::{Yard, YardInput};
