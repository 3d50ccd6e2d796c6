pub mod carousel;
pub mod composer;
pub mod handoff;
pub mod message;

pub use crate::domain::model::{Draft, DraftField, FieldUpdate, ServiceCatalog, Testimonial};
pub use crate::domain::ports::Navigator;
pub use crate::utils::error::Result;
