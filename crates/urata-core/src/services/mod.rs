pub mod contact_service;
pub mod selector;
pub mod site_service;

pub use contact_service::ContactService;
pub use selector::{ActionRow, LinkAction, PlatformSelector, PlatformTab, PlayerHeader, PlayerOptions, PlayerView, available_platforms};
pub use site_service::SiteService;
