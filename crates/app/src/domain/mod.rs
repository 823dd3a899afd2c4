//! Domain services.

pub mod prices;
