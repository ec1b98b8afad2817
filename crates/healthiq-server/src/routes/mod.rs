pub mod assessment;
pub mod health;
pub mod mood;
