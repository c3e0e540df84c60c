//! Country label resolution against the target population.
//!
//! Raw labels are normalized, handed to a pluggable [`NameResolver`], and the
//! resulting code is accepted only if it is one of the 54 entries in
//! [`TARGET_COUNTRIES`].

mod aliases;
mod allowlist;
mod normalize;
mod resolver;

pub use aliases::AliasResolver;
pub use allowlist::{TARGET_COUNTRIES, canonical_name, is_target, target_entry};
pub use normalize::normalize_text;
pub use resolver::{CountryMatch, CountryResolver, NameResolver, StaticResolver};
