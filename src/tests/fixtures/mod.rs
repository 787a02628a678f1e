pub mod http;
pub mod identities;
pub mod restaurants;
pub mod state;
