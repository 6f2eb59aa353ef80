pub mod config;
pub mod modules;
pub mod shared;

pub use modules::relation;
pub use modules::user;

#[cfg(test)]
mod tests;
