#[cfg(feature = "docs")]
pub mod openapi;

pub mod assistant;

pub mod bills;

pub mod health;
