pub mod answer;
pub mod genre;
pub mod health;
pub mod question;
