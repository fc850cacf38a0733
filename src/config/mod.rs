//! Configuration module

mod site;

pub use site::DevConfig;
pub use site::SiteConfig;
pub use site::WatchConfig;
