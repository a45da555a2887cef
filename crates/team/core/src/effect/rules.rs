//! Ordered matchers over effect text.
//!
//! Each [`MatchRule`] owns one pattern and one distribution rule. Rules run in
//! [`MatchRule::pipeline`] order over a residual buffer; a consumed match is cut
//! out of the buffer so later rules never see it twice.

use std::sync::LazyLock;

use regex_lite::{Captures, Regex};

use crate::model::Character;
use crate::stats::StatKind;

use super::parser::ParseContext;

/// `<value>[~<value>]`; the upper bound wins when present.
macro_rules! number {
    () => {
        r"(?P<low>[+]?\d+(?:\.\d+)?)(?:\s*~\s*(?P<high>[+]?\d+(?:\.\d+)?))?"
    };
}

static CHARACTER_GATED: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(concat!(
        "(?i)",
        number!(),
        r#"\s*%\s*to\s*(?P<phrase>[^.]+?)\s*if\s*this character is\s*"(?P<tag>[^"]+)""#
    ))
    .expect("valid character-gated pattern")
});

static PER_MEMBER: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(concat!(
        "(?i)",
        number!(),
        r"\s*%\s*to\s*(?P<phrase>[^.]+?)\s*\b(?:per|for each)\b.*?member"
    ))
    .expect("valid per-member pattern")
});

static THRESHOLD: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(concat!(
        "(?i)",
        number!(),
        r"\s*%\s*to\s*(?P<phrase>[^.]+?)\s*\bwhen\b.*?is a battle member"
    ))
    .expect("valid threshold pattern")
});

static DIRECTED: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(concat!(
        "(?i)",
        number!(),
        r"\s*%\s*to\s*(?P<phrase>(?:Base|Strike|Blast|Attack|Defense|Health|Ki|Recovery|Damage|Critical|Restoration|Inflicted|Special|Move|Ultimate|Guard|&|\s)+?)\s*(?:[.,;]|$)"
    ))
    .expect("valid directed pattern")
});

static BASE_COMPOUND: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(concat!(
        r"(?i)Base Strike & Blast (?P<kind>Attack|Defense)\s*",
        number!(),
        r"\s*%"
    ))
    .expect("valid base compound pattern")
});

static COMPOUND: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(concat!(
        r"(?i)Strike & Blast (?P<kind>Attack|Defense)\s*",
        number!(),
        r"\s*%"
    ))
    .expect("valid compound pattern")
});

/// One pattern per registry stat, indexed by [`StatKind::as_index`].
static EXACT: LazyLock<Vec<Regex>> = LazyLock::new(|| {
    StatKind::all()
        .into_iter()
        .map(|stat| {
            let pattern = format!(
                r"(?i){}\s*{}\s*%",
                regex_lite::escape(stat.name()),
                number!()
            );
            Regex::new(&pattern).expect("valid exact stat pattern")
        })
        .collect()
});

static BATTLE_MEMBERS: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)\b(?:per|for each)\b.*\bmember|\bwhen\b.*\bis a battle member")
        .expect("valid battle member pattern")
});

/// Prefixes stripped from a quoted `if this character is "..."` token.
const CONDITION_PREFIXES: [&str; 4] = ["Tag: ", "Episode: ", "Element: ", "Character: "];

/// Words a stat phrase must name explicitly before a scaled bonus reaches a
/// stat carrying them ("Strike Attack" never swallows "Strike Defense").
const SCOPE_WORDS: [&str; 3] = ["Attack", "Defense", "Guard"];

/// True when the text scales with, or is gated by, battle members.
pub fn mentions_battle_members(text: &str) -> bool {
    BATTLE_MEMBERS.is_match(text)
}

/// A numeric bonus for one stat.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Contribution {
    pub stat: StatKind,
    pub delta: f64,
}

impl Contribution {
    pub const fn new(stat: StatKind, delta: f64) -> Self {
        Self { stat, delta }
    }
}

/// A typed effect-text matcher.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MatchRule {
    /// `N% to <stat> if this character is "<token>"`, only for a matching character.
    CharacterGated,
    /// `N% to <stat> per|for each ... member`, scaled by the multiplier.
    PerMember,
    /// `N% to <stat> when ... is a battle member`, on when the multiplier is non-zero.
    Threshold,
    /// `N% to <stat>` with nothing but stat words before the terminator.
    Directed,
    /// `Base Strike & Blast Attack|Defense N%`, full value to both base stats.
    BaseCompound,
    /// `Strike & Blast Attack|Defense N%` not preceded by `Base`.
    Compound,
    /// `<Stat Name> N%` for one registry stat.
    Exact(StatKind),
}

impl MatchRule {
    /// Rules in evaluation order. Exact matchers follow registry order, so
    /// every `Base` stat is tried before its plain counterpart.
    pub fn pipeline() -> impl Iterator<Item = MatchRule> {
        [
            MatchRule::CharacterGated,
            MatchRule::PerMember,
            MatchRule::Threshold,
            MatchRule::Directed,
            MatchRule::BaseCompound,
            MatchRule::Compound,
        ]
        .into_iter()
        .chain(StatKind::all().into_iter().map(MatchRule::Exact))
    }

    fn pattern(self) -> &'static Regex {
        match self {
            MatchRule::CharacterGated => &*CHARACTER_GATED,
            MatchRule::PerMember => &*PER_MEMBER,
            MatchRule::Threshold => &*THRESHOLD,
            MatchRule::Directed => &*DIRECTED,
            MatchRule::BaseCompound => &*BASE_COMPOUND,
            MatchRule::Compound => &*COMPOUND,
            MatchRule::Exact(stat) => &EXACT[stat.as_index()],
        }
    }

    /// Runs the rule over `buffer`.
    ///
    /// Returns the buffer with every consumed match removed and the number of
    /// matches consumed. Contributions are appended to `out`.
    pub fn apply(
        self,
        buffer: &str,
        ctx: &ParseContext<'_>,
        out: &mut Vec<Contribution>,
    ) -> (String, usize) {
        let mut rest = String::with_capacity(buffer.len());
        let mut last = 0;
        let mut consumed = 0;

        for caps in self.pattern().captures_iter(buffer) {
            let Some(whole) = caps.get(0) else {
                continue;
            };
            if let Some(found) = self.resolve(&caps, &buffer[..whole.start()], ctx) {
                rest.push_str(&buffer[last..whole.start()]);
                last = whole.end();
                out.extend(found);
                consumed += 1;
            }
        }
        rest.push_str(&buffer[last..]);

        (rest, consumed)
    }

    /// Contributions for one match, or `None` to leave the text in place.
    fn resolve(
        self,
        caps: &Captures<'_>,
        prefix: &str,
        ctx: &ParseContext<'_>,
    ) -> Option<Vec<Contribution>> {
        let value = magnitude(caps)?;

        match self {
            MatchRule::CharacterGated => {
                let token = caps.name("tag")?.as_str();
                if !condition_holds(ctx.character, token) {
                    return None;
                }
                Some(distribute(phrase(caps)?, value, false))
            }
            MatchRule::PerMember => Some(distribute(
                phrase(caps)?,
                value * f64::from(ctx.multiplier),
                true,
            )),
            MatchRule::Threshold => {
                let value = if ctx.multiplier > 0 { value } else { 0.0 };
                Some(distribute(phrase(caps)?, value, true))
            }
            MatchRule::Directed => {
                let found = distribute(phrase(caps)?, value, true);
                (!found.is_empty()).then_some(found)
            }
            MatchRule::BaseCompound => Some(compound(caps, value, true)),
            MatchRule::Compound => {
                if preceded_by_base(prefix) {
                    return None;
                }
                Some(compound(caps, value, false))
            }
            MatchRule::Exact(stat) => Some(vec![Contribution::new(stat, value)]),
        }
    }
}

fn magnitude(caps: &Captures<'_>) -> Option<f64> {
    let low = caps.name("low")?.as_str().parse::<f64>().ok()?;
    let high = caps
        .name("high")
        .and_then(|m| m.as_str().parse::<f64>().ok());
    Some(high.unwrap_or(low))
}

fn phrase<'t>(caps: &Captures<'t>) -> Option<&'t str> {
    caps.name("phrase").map(|m| m.as_str().trim())
}

/// Spreads `value` over every registry stat the phrase selects.
fn distribute(phrase: &str, value: f64, scoped: bool) -> Vec<Contribution> {
    StatKind::all()
        .into_iter()
        .filter(|stat| stat.matches_phrase(phrase))
        .filter(|stat| {
            !scoped
                || SCOPE_WORDS
                    .iter()
                    .all(|word| !stat.name().contains(word) || phrase.contains(word))
        })
        .map(|stat| Contribution::new(stat, value))
        .collect()
}

fn compound(caps: &Captures<'_>, value: f64, base: bool) -> Vec<Contribution> {
    let attack = caps
        .name("kind")
        .is_some_and(|kind| kind.as_str().eq_ignore_ascii_case("attack"));
    let pair = match (base, attack) {
        (true, true) => [StatKind::BaseStrikeAttack, StatKind::BaseBlastAttack],
        (true, false) => [StatKind::BaseStrikeDefense, StatKind::BaseBlastDefense],
        (false, true) => [StatKind::StrikeAttack, StatKind::BlastAttack],
        (false, false) => [StatKind::StrikeDefense, StatKind::BlastDefense],
    };
    pair.into_iter()
        .map(|stat| Contribution::new(stat, value))
        .collect()
}

/// `Base` followed by at least one whitespace character at the end of `prefix`.
pub(crate) fn preceded_by_base(prefix: &str) -> bool {
    let trimmed = prefix.trim_end();
    if trimmed.len() == prefix.len() {
        return false;
    }
    trimmed
        .len()
        .checked_sub(4)
        .and_then(|start| trimmed.get(start..))
        .is_some_and(|tail| tail.eq_ignore_ascii_case("base"))
}

fn condition_holds(character: Option<&Character>, token: &str) -> bool {
    let Some(character) = character else {
        return false;
    };
    let token = CONDITION_PREFIXES
        .iter()
        .find_map(|prefix| token.strip_prefix(prefix))
        .unwrap_or(token);
    character.has_tag(token) || character.name.contains(token)
}
