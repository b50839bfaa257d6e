pub mod album;
pub mod contact;
pub mod embed_config;
pub mod identifiers;
pub mod ids;
pub mod media_item;
pub mod platform;
pub mod press;
pub mod profile;
pub mod release_type;

pub use album::{Album, AlbumFilter, DiscographyStats};
pub use contact::{Acknowledgment, ContactError, ContactForm, FaqEntry, InquiryType};
pub use embed_config::{EmbedConfig, Theme};
pub use identifiers::{IdentifierKind, PlatformIdentifiers};
pub use ids::InquiryId;
pub use media_item::MediaItem;
pub use platform::{Platform, UnknownPlatform};
pub use press::{PressClipping, PressResource, PressResourceGroup, PressResourceKind};
pub use profile::{Award, TimelineEntry};
pub use release_type::ReleaseType;
