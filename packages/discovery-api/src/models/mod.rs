pub mod error;
pub mod requests;

pub use error::ApiError;
pub use requests::{EventParams, SearchParams, SearchRequest, VenueParams};
