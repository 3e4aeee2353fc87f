pub mod device;
pub mod forecast;
pub mod icon;
pub mod sensor;
pub mod station;
