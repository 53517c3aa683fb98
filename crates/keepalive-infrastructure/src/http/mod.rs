mod client;

pub use client::{HttpLoginPortal, PortalConfig, DEFAULT_LOGIN_URL};
