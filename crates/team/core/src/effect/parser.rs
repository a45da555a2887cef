//! Line-level parsing: branch resolution, the rule pipeline and residual cleanup.

use tracing::trace;

use crate::config::BuilderConfig;
use crate::model::Character;
use crate::stats::StatKind;

use super::branch::split_branches;
use super::rules::{Contribution, MatchRule};

/// Inputs that influence parsing besides the text itself.
#[derive(Clone, Copy, Debug, Default)]
pub struct ParseContext<'a> {
    /// Selected character, consulted by `if this character is "..."` clauses.
    pub character: Option<&'a Character>,
    /// Battle-member multiplier of the owning equipped item (0..=3).
    pub multiplier: u8,
}

impl<'a> ParseContext<'a> {
    pub const fn new(character: Option<&'a Character>, multiplier: u8) -> Self {
        Self {
            character,
            multiplier,
        }
    }

    #[must_use]
    pub const fn with_character(mut self, character: &'a Character) -> Self {
        self.character = Some(character);
        self
    }

    #[must_use]
    pub const fn with_multiplier(mut self, multiplier: u8) -> Self {
        self.multiplier = multiplier;
        self
    }
}

/// Result of parsing one effect line.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ParsedLine {
    /// Trimmed OR options; empty for a line without a marker.
    pub options: Vec<String>,
    /// Branch that was evaluated.
    pub selected: usize,
    /// Numeric bonuses of the evaluated branch.
    pub contributions: Vec<Contribution>,
    /// Text no rule recognized, if worth surfacing.
    pub residual: Option<String>,
    /// Number of rule matches consumed.
    pub matched: usize,
}

impl ParsedLine {
    /// True when the line offers OR options.
    pub fn is_conditional(&self) -> bool {
        self.options.len() > 1
    }

    /// Stats the evaluated branch touches, including zero-valued ones.
    pub fn touched(&self) -> impl Iterator<Item = StatKind> + '_ {
        self.contributions.iter().map(|c| c.stat)
    }
}

/// Parses one effect line.
///
/// For a line carrying the OR marker only the `branch`-th option is evaluated;
/// an index beyond the option count falls back to the first option. The
/// residual of a conditional line is dropped once its branch matched anything,
/// since the option text itself is surfaced through [`ParsedLine::options`].
pub fn parse_effect(text: &str, branch: usize, ctx: &ParseContext<'_>) -> ParsedLine {
    let branches = split_branches(text);
    let conditional = branches.len() > 1;
    let selected = if branch < branches.len() { branch } else { 0 };
    let segment = branches.get(selected).copied().unwrap_or_default();

    let mut contributions = Vec::new();
    let mut buffer = segment.to_owned();
    let mut matched = 0;

    for rule in MatchRule::pipeline() {
        let (rest, consumed) = rule.apply(&buffer, ctx, &mut contributions);
        if consumed > 0 {
            trace!(?rule, consumed, "effect rule matched");
            buffer = rest;
            matched += consumed;
        }
    }

    let residual = clean_residual(&buffer).filter(|_| !(conditional && matched > 0));

    ParsedLine {
        options: if conditional {
            branches.iter().map(|b| b.trim().to_owned()).collect()
        } else {
            Vec::new()
        },
        selected,
        contributions,
        residual,
        matched,
    }
}

/// Collapses whitespace and strips a leading sign. Fragments with at most
/// [`BuilderConfig::RESIDUAL_MIN_CHARS`] characters left once whitespace and
/// punctuation are ignored are noise, such as separators between consumed matches.
fn clean_residual(text: &str) -> Option<String> {
    let collapsed = text.split_whitespace().collect::<Vec<_>>().join(" ");
    let stripped = collapsed
        .strip_prefix(['-', '+'])
        .map(str::trim_start)
        .unwrap_or(collapsed.as_str());

    let meaningful = stripped
        .chars()
        .filter(|c| !c.is_whitespace() && !c.is_ascii_punctuation())
        .count();
    if meaningful <= BuilderConfig::RESIDUAL_MIN_CHARS {
        return None;
    }
    Some(stripped.to_owned())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn plain(text: &str) -> ParsedLine {
        parse_effect(text, 0, &ParseContext::default())
    }

    fn deltas(line: &ParsedLine) -> Vec<(StatKind, f64)> {
        line.contributions.iter().map(|c| (c.stat, c.delta)).collect()
    }

    #[test]
    fn base_compound_splits_full_value() {
        let line = plain("Base Strike & Blast Attack+10.00%");
        assert_eq!(
            deltas(&line),
            vec![
                (StatKind::BaseStrikeAttack, 10.0),
                (StatKind::BaseBlastAttack, 10.0),
            ]
        );
        assert_eq!(line.residual, None);
    }

    #[test]
    fn base_and_plain_stats_stay_apart() {
        assert_eq!(deltas(&plain("Strike Attack+8.00%")), vec![(StatKind::StrikeAttack, 8.0)]);
        assert_eq!(
            deltas(&plain("Base Strike Attack+8.00%")),
            vec![(StatKind::BaseStrikeAttack, 8.0)]
        );
    }

    #[test]
    fn unrecognized_text_becomes_residual() {
        let line = plain("Critical+3.00%. Reduces Ki cost of Rising Rush by 10 counts.");
        assert_eq!(deltas(&line), vec![(StatKind::Critical, 3.0)]);
        assert_eq!(
            line.residual.as_deref(),
            Some(". Reduces Ki cost of Rising Rush by 10 counts.")
        );
    }

    #[test]
    fn noise_is_not_residual() {
        assert_eq!(plain("Damage Guard+5% -").residual, None);
        assert_eq!(plain("Critical+1% ...").residual, None);
        assert_eq!(plain("").residual, None);
    }

    #[test]
    fn separators_between_matches_are_not_residual() {
        let line = plain("Strike Attack+10.00%. Blast Attack+10.00%.");
        assert_eq!(
            deltas(&line),
            vec![(StatKind::StrikeAttack, 10.0), (StatKind::BlastAttack, 10.0)]
        );
        assert_eq!(line.residual, None);

        let line = plain("Critical+5.00%, Strike Attack+3.00%, Damage Guard+2.00%");
        assert_eq!(line.contributions.len(), 3);
        assert_eq!(line.residual, None);

        assert_eq!(plain("Critical+1% ; - .").residual, None);
    }

    #[test]
    fn selected_branch_only() {
        let text = "5.00% to Blast Defense - OR - 5.00% to Strike Defense";
        let first = plain(text);
        assert!(first.is_conditional());
        assert_eq!(first.options, vec!["5.00% to Blast Defense", "5.00% to Strike Defense"]);
        assert_eq!(deltas(&first), vec![(StatKind::BlastDefense, 5.0)]);

        let second = parse_effect(text, 1, &ParseContext::default());
        assert_eq!(second.selected, 1);
        assert_eq!(deltas(&second), vec![(StatKind::StrikeDefense, 5.0)]);

        let fallback = parse_effect(text, 7, &ParseContext::default());
        assert_eq!(fallback.selected, 0);
    }

    #[test]
    fn conditional_residual_survives_when_nothing_matched() {
        let line = plain("Ki +20 at battle start - OR - Revives once");
        assert_eq!(line.matched, 0);
        assert_eq!(line.residual.as_deref(), Some("Ki +20 at battle start"));
    }

    #[test]
    fn parsing_is_deterministic() {
        let text = "8.00 ~ 12.50% to Strike & Blast Defense per 'Tag: Son Family' battle member.";
        let ctx = ParseContext::default().with_multiplier(3);
        assert_eq!(parse_effect(text, 0, &ctx), parse_effect(text, 0, &ctx));
    }
}
