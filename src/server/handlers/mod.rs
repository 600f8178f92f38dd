//! Audit endpoint handlers, one module per capability.

mod backlinks;
mod headings;
mod health;
mod https;
mod meta;
mod pagespeed;
mod whois;

pub use backlinks::backlink_analysis_handler;
pub use headings::heading_structure_handler;
pub use health::health_handler;
pub use https::https_check_handler;
pub use meta::meta_tag_analysis_handler;
pub use pagespeed::seo_audit_handler;
pub use whois::whois_handler;
