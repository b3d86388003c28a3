//! Label/value field pair generator
//!
//! `pairgen` renders the `<dt>`/`<dd>` rows a page uses to show or edit the
//! attributes of some backing object. One [`PairGenerator`] wraps one object;
//! each mode method takes a typed options struct and returns a [`FieldPair`].
//!
//! # Modes
//!
//! - `plain_text`, `link`: read-only content
//! - `date`, `text_field`, `text_area`: single inputs
//! - `select`, `radio`: choice over a [`Collection`]
//! - `checkbox`: hidden unchecked value plus the checkbox itself
//!
//! # Naming
//!
//! With a prefix, a field named `date` is submitted as `prefix[date]` and
//! gets the DOM id `prefix_date`. Without one, both are plain `date`. The
//! label never shows the prefix.

pub mod config;
pub mod error;
pub mod generator;
pub mod helpers;
pub mod markup;
pub mod source;
pub mod types;
pub mod value;

pub use config::GeneratorConfig;
pub use error::{PairError, Result};
pub use generator::{FieldPair, PairGenerator};
pub use markup::{Attributes, Markup};
pub use source::{AttributeSource, Record};
pub use types::{
    CheckboxOptions, Choice, Collection, FieldSpec, InputOptions, LinkOptions, PairOptions,
    PlainTextOptions, RadioOptions, SelectOptions, WithPairOptions,
};
pub use value::Value;
