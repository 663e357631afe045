//! Presentation layer for the CLI.
//!
//! Data flows one way:
//!
//! ```text
//! [ Handler ] --> [ Presenter ] --> [ ViewModel ] ==(json)==> serde_json --> output
//!                                              \==(plain)==> [ View (Display) ] --> output
//! ```
//!
//! Presenters turn domain records into serializable view models (raw
//! data, no formatted strings) and attach status badges and guidance.
//! Views own layout, colors, and string formatting. JSON output always
//! dumps the complete view model envelope.

pub mod formatters;
pub mod presenters;
pub mod view_models;
pub mod views;
