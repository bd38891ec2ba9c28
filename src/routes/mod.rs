pub mod check;
pub mod health;
