pub mod health;
pub mod hello;
pub mod recipe;
pub mod tags;
