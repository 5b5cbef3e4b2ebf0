pub mod controllers;
pub mod dto;
mod error;
pub mod repositories;
pub mod state;

#[cfg(test)]
pub mod test_support;
