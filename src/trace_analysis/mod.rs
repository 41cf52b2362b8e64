pub mod domain;
pub mod policies;
pub mod services;
