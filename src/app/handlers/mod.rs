//! Feature-Handler fuer mutierende App-Commands.

pub mod fetch;
pub mod roads;
pub mod selection;
pub mod tables;
pub mod view;
