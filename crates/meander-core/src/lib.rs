//! Construction and display of self-similar meander sequences.
//!
//! A meander is grown from `[0]` by repeatedly appending a negated, lifted
//! mirror of the current cell and then the reverse of the result. The crate
//! provides the sequence type, the builder, and two ways of looking at the
//! outcome:
//!
//! - **Grid rendering**: a bordered ASCII plot, one column per element
//! - **Scrolling**: one offset marker per line at a fixed rate, forever
//!
//! Configuration can be assembled in code or read from YAML.

pub mod config;
pub mod errors;
pub mod grid;
pub mod pattern;
pub mod scroll;
pub mod sequence;
pub mod signal;

pub use config::*;
pub use errors::{MeanderError, Result};
pub use grid::{Grid, GridRenderer};
pub use pattern::PatternBuilder;
pub use scroll::ScrollAnimator;
pub use sequence::Sequence;
pub use signal::shutdown_signal;
