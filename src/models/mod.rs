pub mod ip_usage;
pub mod streamer_link;

pub use ip_usage::IpUsage;
pub use streamer_link::{CheckResponse, StreamerLink};
