//! Domain types for the departure delay service.
//!
//! These types are provider-neutral. Construction validates input, so code
//! holding a `ProductFilter` or `StationId` can pass it straight to a
//! provider.

mod journey;
mod products;
mod station;

pub use journey::Journey;
pub use products::{FILTER_WIDTH, InvalidCategory, InvalidMask, ProductFilter};
pub use station::{StationId, UnknownStation};
