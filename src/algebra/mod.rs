pub mod family;
pub mod group;
pub mod reflection;
