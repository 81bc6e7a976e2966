pub mod forms;
pub mod health;
