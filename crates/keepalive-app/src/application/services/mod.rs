pub mod keepalive_runner;
pub mod login_attempter;

pub use keepalive_runner::KeepAliveRunner;
pub use login_attempter::LoginAttempter;
