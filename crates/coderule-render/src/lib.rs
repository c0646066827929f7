//! Length accounting and preview rendering for code rules.
//!
//! Everything here is a pure view over a rule. The only ambient input is the
//! evaluation date of calendar segments, which comes from the [`Clock`] the
//! [`Renderer`] is built with.
//!
//! ```
//! use chrono::NaiveDate;
//! use coderule_model::{Segment, SegmentKind};
//! use coderule_render::{FixedClock, PreviewOptions, Renderer, total_length};
//!
//! let rule = vec![
//!     Segment::new(SegmentKind::Literal).with_setting("content", "LOT"),
//!     Segment::new(SegmentKind::Year).with_setting("length", "2"),
//! ];
//! let date = NaiveDate::from_ymd_opt(2024, 6, 1).unwrap();
//! let renderer = Renderer::with_clock(FixedClock::new(date));
//! assert_eq!(renderer.preview_sequence(&rule, &PreviewOptions::default()), "LOT24");
//! assert_eq!(total_length(&rule), 5);
//! ```

pub mod checksum;
pub mod clock;
pub mod content;
pub mod counter;
pub mod length;
pub mod options;
pub mod renderer;
mod sequence;
pub mod text;

pub use checksum::checksum_digits;
pub use clock::{Clock, FixedClock, SystemClock};
pub use content::{parameter_placeholder, render_form};
pub use counter::{CounterValue, add_offset, effective_start, render_counter};
pub use length::{code_length, forms_total_length, segment_code_length, total_length};
pub use options::PreviewOptions;
pub use renderer::Renderer;
