//! Style records and their CSS declaration form.
//!
//! - [`StyleValue`]: one declaration value (text or number)
//! - [`StyleRecord`]: an ordered camelCase property map
//! - [`stringify_style`]: record to `prop:value; prop:value` text
//! - [`inline_style`]: record to a `style` attribute value

mod stringify;
mod value;

pub use stringify::{inline_style, stringify_style, to_kebab_case};
pub use value::{StyleRecord, StyleValue};
