//! # Router Module
//!
//! Convention-over-configuration path routing: a request path is turned into
//! a controller identifier with zero route declarations for the common case.
//!
//! ## Algorithm
//!
//! 1. Extract the path component (absolute URLs are parsed with the `url`
//!    crate; a parse failure is a routing failure).
//! 2. Consult the static route table on the exact path; a hit is used
//!    verbatim as the identifier, no transformation.
//! 3. Otherwise split the path into `/`-delimited segments of word
//!    characters and hyphens; zero matchable segments is a routing failure.
//! 4. PascalCase each segment (`yo-dawg` → `YoDawg`), join with `::` and
//!    prefix the configured namespace: `/hello/world` → `Hello::World`.
//!
//! The static table is the escape hatch for paths the convention cannot
//! express; everything else needs no registration. Path parameters and
//! wildcards are deliberately unsupported.
//!
//! Whether the resulting identifier is actually dispatchable is checked at
//! the [`ControllerRegistry`](crate::controller::ControllerRegistry)
//! boundary, which raises the same routing failure kind.

mod core;

pub use core::Router;
