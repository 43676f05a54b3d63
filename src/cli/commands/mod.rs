pub mod watch;
pub mod verify;
pub mod health;
pub mod queue;
