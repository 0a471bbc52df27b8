pub mod schema;
pub mod validator;

pub use schema::{itinerary_schema, SchemaHandle};
pub use validator::{StrictValidator, Validator};
