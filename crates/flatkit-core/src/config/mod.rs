//! Options files
//!
//! An options file carries the root options and any extra fragments to
//! append after the generated ones:
//!
//! ```jsonc
//! {
//!   "options": {
//!     "type": "lib",
//!     "typescript": true,
//!     "unicorn": { "overrides": { "unicorn/no-null": "off" } }
//!   },
//!   "configs": [
//!     { "files": ["src/**/*.ts"], "rules": { "perfectionist/sort-objects": "error" } }
//!   ]
//! }
//! ```
//!
//! JSON files may contain comments and trailing commas. YAML and TOML are
//! accepted as well.

mod loader;
mod project_file;

pub use loader::ConfigLoader;
pub use project_file::{ProjectFile, options_schema};
