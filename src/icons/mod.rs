//! Resolution of ability icon filenames on the CommunityDragon asset host.
//!
//! The work is split into focused submodules so that guess generation, scoring, the exception
//! table and URL rendering can be tested independently. [`resolver`] ties them together: exact
//! exception hits first, then the best fuzzy guess, then the CDN fallback URL.

pub mod exceptions;
pub mod guesses;
mod listing;
pub mod resolver;
mod similarity;
mod urls;

pub use exceptions::{EXCEPTION_TABLE, exception_patterns, match_exception};
pub use guesses::{GUESS_FLAGS, Guess, GuessFlags, generate_guesses, normalise_ability_name};
pub use listing::{fetch_icon_listing, parse_directory_listing};
pub use resolver::{FuzzyMatch, IconResolver, best_fuzzy_match, resolve};
pub use similarity::ratio;
pub use urls::{asset_icon_url, basename, cdn_fallback_url, icon_listing_url};
