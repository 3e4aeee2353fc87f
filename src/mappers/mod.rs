pub mod aggregate;
pub mod forecast;
pub(crate) mod lookup;
pub mod sensor;
pub mod station;
