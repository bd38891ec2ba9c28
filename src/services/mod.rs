pub mod quota;
pub mod resolver;
pub mod streamer_link;

pub use quota::{Admission, QuotaService};
pub use resolver::{parse_channel_ref, resolve_channel_id, ChannelRef};
pub use streamer_link::StreamerLinkService;
