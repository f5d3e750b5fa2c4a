//! Multi-tag search over a catalog
//!
//! Ties the [`Selection`](crate::selection::Selection) state machine to a
//! [`TagCatalog`](crate::catalog::TagCatalog) through a [`SearchSession`],
//! which owns the selection, issues ticketed searches and keeps the latest
//! applied [`MatchResult`](crate::matching::MatchResult).
//!
//! # Examples
//!
//! ```
//! use tagsieve::catalog::MemoryCatalog;
//! use tagsieve::search::SearchSession;
//! use tagsieve::{Game, Tag, TagColor};
//!
//! let catalog = MemoryCatalog::new(
//!     vec![Tag::new(1, "Action", TagColor::Green), Tag::new(2, "Horror", TagColor::Red)],
//!     vec![Game::new(1, "Doom").with_tags(["Action", "Horror"])],
//! );
//! let mut session = SearchSession::load(&catalog).unwrap();
//! session.seed(&["Action", "Horror"], &[]).unwrap();
//!
//! let result = session.search(&catalog).unwrap();
//! assert_eq!(result.perfect_matches()[0].name, "Doom");
//! ```

pub mod error;
pub mod session;

pub use error::SearchError;
pub use session::{Completion, SearchSession, SearchTicket};
