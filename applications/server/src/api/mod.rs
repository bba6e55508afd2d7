/// API route modules
pub mod health;
pub mod media;
pub mod tracks;
