//! Rule annotations
//!
//! Parsing ([`grammar`]), the kind table ([`applicability`]), compilation into
//! typed checks ([`compile`]) and message resolution ([`messages`]).

pub mod applicability;
pub mod compile;
pub mod grammar;
pub mod messages;

pub use applicability::RuleKind;
pub use compile::{Bound, Check, Choices, CompiledRule, Format};
pub use grammar::{Rule, parse_rules};
pub use messages::{EMPTY_ITEM_MESSAGE, Messages, default_message};
