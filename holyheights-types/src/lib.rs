//! # holyheights-types
//!
//! Plain data types shared by the HolyHeights engine and its collaborators.
//!
//! - **Rows**: `RawRow`, the string-valued shape a tabular feed produces
//! - **Records**: `BuildingRecord`, one building at one sampled year
//! - **Timeline**: `TimelineEvent`, `EventKind`
//! - **Markers**: `Placement`, `IconKey`, `Highlight`
//!
//! All types are serializable with Serde; coordinates use the `geo` crate's
//! `Point` with x = longitude and y = latitude.
//!
//! ## Examples
//!
//! ```rust
//! use holyheights_types::record::{BuildingRecord, RawRow};
//!
//! let row: RawRow = [
//!     ("name", "Lincoln Cathedral"),
//!     ("year", "1311"),
//!     ("height_at_year", "160"),
//!     ("latitude", "53.234"),
//!     ("longitude", "-0.536"),
//!     ("destruction_flag", "NA"),
//! ]
//! .into_iter()
//! .collect();
//!
//! let record = BuildingRecord::from_row(&row);
//! assert_eq!(record.year, Some(1311));
//! assert!(record.is_standing());
//! assert!(!record.destruction_flag);
//! ```

pub mod event;
pub mod placement;
pub mod record;

pub use event::{EventKind, TimelineEvent};
pub use placement::{Highlight, IconKey, Placement};
pub use record::{BuildingRecord, RawRow, SourceLinks};
