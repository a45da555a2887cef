//! Effect text parsing.
//!
//! An equipment effect line is free-form text such as
//! `"8.00 ~ 12.50% to Strike & Blast Defense per 'Tag: Son Family' battle member."`.
//! [`parse_effect`] resolves the active OR branch, runs the ordered
//! [`MatchRule`] pipeline over it and returns typed stat contributions together
//! with whatever text no rule recognized.
mod branch;
mod parser;
mod rules;

pub use branch::{branch_count, split_branches};
pub use parser::{ParseContext, ParsedLine, parse_effect};
pub use rules::{Contribution, MatchRule, mentions_battle_members};
pub(crate) use rules::preceded_by_base;
