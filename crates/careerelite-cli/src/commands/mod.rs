//! Command implementations.

pub mod apply;
pub mod contacts;
pub mod jobs;
pub mod keywords;
pub mod scrape;
pub mod stats;
pub mod watch;

pub use self::apply::execute_apply;
pub use self::contacts::execute_contacts;
pub use self::jobs::execute_jobs;
pub use self::keywords::execute_keywords;
pub use self::scrape::execute_scrape;
pub use self::stats::execute_stats;
pub use self::watch::execute_watch;
