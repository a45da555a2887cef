//! Stat registry - the fixed vocabulary of recognized stat names.
//!
//! Effect text is only ever mapped onto these keys. The declaration order is the
//! canonical display order, and it also drives exact-name matching in the effect
//! parser: every `Base` variant is declared before its non-base counterpart.

/// Keywords that identify the components of a stat name.
///
/// A stat phrase such as "Strike & Blast Defense" selects every registry key whose
/// keywords all appear in the phrase (see [`StatKind::matches_phrase`]).
pub const STAT_KEYWORDS: [&str; 13] = [
    "Strike",
    "Blast",
    "Attack",
    "Defense",
    "Health",
    "Ki",
    "Damage",
    "Critical",
    "Restoration",
    "Inflicted",
    "Special",
    "Ultimate",
    "Move",
];

/// One of the recognized stats.
#[derive(
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    strum::Display,
    strum::EnumString,
    strum::AsRefStr,
    strum::IntoStaticStr,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[repr(u8)]
pub enum StatKind {
    // ========================================================================
    // Offense
    // ========================================================================
    #[strum(serialize = "Base Strike Attack")]
    #[cfg_attr(feature = "serde", serde(rename = "Base Strike Attack"))]
    BaseStrikeAttack = 0,

    #[strum(serialize = "Base Blast Attack")]
    #[cfg_attr(feature = "serde", serde(rename = "Base Blast Attack"))]
    BaseBlastAttack = 1,

    #[strum(serialize = "Strike Attack")]
    #[cfg_attr(feature = "serde", serde(rename = "Strike Attack"))]
    StrikeAttack = 2,

    #[strum(serialize = "Blast Attack")]
    #[cfg_attr(feature = "serde", serde(rename = "Blast Attack"))]
    BlastAttack = 3,

    #[strum(serialize = "Inflicted Damage")]
    #[cfg_attr(feature = "serde", serde(rename = "Inflicted Damage"))]
    InflictedDamage = 4,

    #[strum(serialize = "Special Move Damage")]
    #[cfg_attr(feature = "serde", serde(rename = "Special Move Damage"))]
    SpecialMoveDamage = 5,

    #[strum(serialize = "Ultimate Damage")]
    #[cfg_attr(feature = "serde", serde(rename = "Ultimate Damage"))]
    UltimateDamage = 6,

    // ========================================================================
    // Defense
    // ========================================================================
    #[strum(serialize = "Base Strike Defense")]
    #[cfg_attr(feature = "serde", serde(rename = "Base Strike Defense"))]
    BaseStrikeDefense = 7,

    #[strum(serialize = "Base Blast Defense")]
    #[cfg_attr(feature = "serde", serde(rename = "Base Blast Defense"))]
    BaseBlastDefense = 8,

    #[strum(serialize = "Strike Defense")]
    #[cfg_attr(feature = "serde", serde(rename = "Strike Defense"))]
    StrikeDefense = 9,

    #[strum(serialize = "Blast Defense")]
    #[cfg_attr(feature = "serde", serde(rename = "Blast Defense"))]
    BlastDefense = 10,

    // ========================================================================
    // Utility
    // ========================================================================
    #[strum(serialize = "Health Restoration")]
    #[cfg_attr(feature = "serde", serde(rename = "Health Restoration"))]
    HealthRestoration = 11,

    #[strum(serialize = "Base Health")]
    #[cfg_attr(feature = "serde", serde(rename = "Base Health"))]
    BaseHealth = 12,

    #[strum(serialize = "Damage Guard")]
    #[cfg_attr(feature = "serde", serde(rename = "Damage Guard"))]
    DamageGuard = 13,

    #[strum(serialize = "Base Ki Recovery")]
    #[cfg_attr(feature = "serde", serde(rename = "Base Ki Recovery"))]
    BaseKiRecovery = 14,

    #[strum(serialize = "Base Critical")]
    #[cfg_attr(feature = "serde", serde(rename = "Base Critical"))]
    BaseCritical = 15,

    #[strum(serialize = "Critical")]
    #[cfg_attr(feature = "serde", serde(rename = "Critical"))]
    Critical = 16,
}

impl StatKind {
    /// Total number of registry stats.
    pub const COUNT: usize = 17;

    /// Returns all stats in canonical order.
    pub const fn all() -> [StatKind; Self::COUNT] {
        [
            StatKind::BaseStrikeAttack,
            StatKind::BaseBlastAttack,
            StatKind::StrikeAttack,
            StatKind::BlastAttack,
            StatKind::InflictedDamage,
            StatKind::SpecialMoveDamage,
            StatKind::UltimateDamage,
            StatKind::BaseStrikeDefense,
            StatKind::BaseBlastDefense,
            StatKind::StrikeDefense,
            StatKind::BlastDefense,
            StatKind::HealthRestoration,
            StatKind::BaseHealth,
            StatKind::DamageGuard,
            StatKind::BaseKiRecovery,
            StatKind::BaseCritical,
            StatKind::Critical,
        ]
    }

    /// Returns the stat as an array index.
    #[inline]
    pub const fn as_index(self) -> usize {
        self as usize
    }

    /// Display name, identical to the phrase used in effect text.
    #[inline]
    pub fn name(self) -> &'static str {
        self.into()
    }

    /// True for the `Base ...` stats.
    #[inline]
    pub fn is_base(self) -> bool {
        self.name().starts_with("Base ")
    }

    /// Registry keywords present in this stat's name.
    pub fn keywords(self) -> impl Iterator<Item = &'static str> {
        let name = self.name();
        STAT_KEYWORDS
            .into_iter()
            .filter(move |word| name.contains(word))
    }

    /// Whether a free-form stat phrase selects this stat.
    ///
    /// The phrase and the stat must agree on base-ness (the literal `"Base "`), and
    /// every keyword of the stat must occur in the phrase. Keyword tests are
    /// case-sensitive, so `"Strike"` never satisfies `"Ki"`.
    pub fn matches_phrase(self, phrase: &str) -> bool {
        if phrase.contains("Base ") != self.is_base() {
            return false;
        }
        self.keywords().all(|word| phrase.contains(word))
    }

    /// Compound phrase that also names this stat ("Strike & Blast Attack").
    pub fn compound_phrase(self) -> Option<&'static str> {
        use StatKind::*;
        match self {
            BaseStrikeAttack | BaseBlastAttack => Some("Base Strike & Blast Attack"),
            BaseStrikeDefense | BaseBlastDefense => Some("Base Strike & Blast Defense"),
            StrikeAttack | BlastAttack => Some("Strike & Blast Attack"),
            StrikeDefense | BlastDefense => Some("Strike & Blast Defense"),
            _ => None,
        }
    }

    /// The non-base counterpart phrase ("Base Strike Attack" -> "Strike Attack").
    pub fn without_base(self) -> &'static str {
        let name = self.name();
        name.strip_prefix("Base ").unwrap_or(name)
    }
}
