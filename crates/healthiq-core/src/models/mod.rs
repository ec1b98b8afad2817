pub mod checkin;
pub mod mood;
pub mod question;
