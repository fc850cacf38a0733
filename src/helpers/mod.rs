//! Collection helpers
//!
//! Native counterparts of the accessor functions emitted into the generated
//! modules: lookup by slug, category filters, search, aggregations, date
//! formatting and slug generation.

mod date;
mod list;
mod search;
mod slug;

pub use date::*;
pub use list::*;
pub use search::*;
pub use self::slug::slugify;
