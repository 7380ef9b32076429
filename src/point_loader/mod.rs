mod factory;
mod loader;
mod serialized_point_set;

pub use factory::{MalformedDataError, from_json, from_value};
pub use loader::{LoaderError, load_point_set_from};
