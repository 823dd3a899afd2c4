//! Tariff application layer: price stores, the prices service and its wiring.

pub mod context;
pub mod database;
pub mod domain;

#[cfg(test)]
mod test;
