//! Record types for the community survey forms.
//!
//! Both survey records keep a fixed shape at every nesting level: the
//! option lists come from [`catalog`], checkbox groups and per-wing tables
//! are [`keyed_map::KeyedMap`]s over those lists, and numeric answers are
//! [`count::Count`]s that keep "never touched", "left blank" and "zero" apart.

pub mod area;
pub mod catalog;
pub mod count;
pub mod error;
pub mod hierarchy;
pub mod keyed_map;
pub mod stats;
pub mod text_list;
pub mod unit;
pub mod wire;

pub use area::{AreaPart, AreaSurvey, MeetingStatus};
pub use count::Count;
pub use error::ModelError;
pub use unit::UnitSurvey;
