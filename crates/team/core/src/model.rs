//! Catalog records: characters and equipment.
//!
//! Records are created by a loader and read-only afterwards. Run-time state
//! (multipliers, branch selections) lives in [`crate::build`].

use std::collections::BTreeSet;

use crate::effect;

/// Character element (card color).
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
#[strum(serialize_all = "UPPERCASE")]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "UPPERCASE"))]
pub enum Element {
    Red,
    Yel,
    Pur,
    Grn,
    Blu,
    Lgt,
    Drk,
}

impl Element {
    /// Element code as it appears in condition groups (`"RED"`, `"LGT"`, ...).
    #[inline]
    pub fn code(self) -> &'static str {
        self.into()
    }
}

/// A playable character.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Character {
    #[cfg_attr(
        feature = "serde",
        serde(default, deserialize_with = "scalar::optional")
    )]
    pub id: Option<String>,
    #[cfg_attr(
        feature = "serde",
        serde(default, deserialize_with = "scalar::optional")
    )]
    pub code: Option<String>,
    pub name: String,
    #[cfg_attr(feature = "serde", serde(default))]
    pub element: Option<Element>,
    #[cfg_attr(feature = "serde", serde(default))]
    pub rarity: Option<String>,
    #[cfg_attr(feature = "serde", serde(default))]
    pub image: Option<String>,
    #[cfg_attr(feature = "serde", serde(default))]
    pub visual_tags: Vec<String>,
}

impl Character {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    #[must_use]
    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }

    #[must_use]
    pub fn with_code(mut self, code: impl Into<String>) -> Self {
        self.code = Some(code.into());
        self
    }

    #[must_use]
    pub fn with_element(mut self, element: Element) -> Self {
        self.element = Some(element);
        self
    }

    #[must_use]
    pub fn with_rarity(mut self, rarity: impl Into<String>) -> Self {
        self.rarity = Some(rarity.into());
        self
    }

    #[must_use]
    pub fn with_tags<I, S>(mut self, tags: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.visual_tags = tags.into_iter().map(Into::into).collect();
        self
    }

    pub fn has_tag(&self, tag: &str) -> bool {
        self.visual_tags.iter().any(|t| t == tag)
    }

    /// Every token a condition group may reference: name, element code, rarity,
    /// id, code and visual tags.
    pub fn attributes(&self) -> BTreeSet<&str> {
        let mut attrs: BTreeSet<&str> = self.visual_tags.iter().map(String::as_str).collect();
        attrs.insert(self.name.as_str());
        if let Some(element) = self.element {
            attrs.insert(element.code());
        }
        attrs.extend(self.rarity.as_deref());
        attrs.extend(self.id.as_deref());
        attrs.extend(self.code.as_deref());
        attrs
    }

    /// Matches a user-supplied reference against id, code or name.
    pub fn is_referenced_by(&self, reference: &str) -> bool {
        self.id.as_deref() == Some(reference)
            || self.code.as_deref() == Some(reference)
            || self.name.eq_ignore_ascii_case(reference)
    }
}

/// One free-text effect line of an equipment item.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct EquipmentSlotEffect {
    #[cfg_attr(feature = "serde", serde(default))]
    pub effect: String,
}

impl EquipmentSlotEffect {
    pub fn new(effect: impl Into<String>) -> Self {
        Self {
            effect: effect.into(),
        }
    }
}

/// How condition groups combine.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, strum::Display, strum::EnumString)]
#[strum(serialize_all = "UPPERCASE")]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "UPPERCASE"))]
pub enum ConditionLogic {
    #[default]
    And,
    Or,
}

/// A set of requirement tokens that must all hold for one character.
///
/// Accepts both stored forms: a raw token sequence, or `{ "tags": [...] }`.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ConditionGroup {
    tokens: Vec<String>,
}

impl ConditionGroup {
    pub fn new<I, S>(tokens: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            tokens: tokens.into_iter().map(Into::into).collect(),
        }
    }

    pub fn tokens(&self) -> &[String] {
        &self.tokens
    }

    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    /// True when every token is in `attributes`. An empty group is satisfied.
    pub fn is_satisfied_by(&self, attributes: &BTreeSet<&str>) -> bool {
        self.tokens.iter().all(|t| attributes.contains(t.as_str()))
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for ConditionGroup {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        #[derive(serde::Deserialize)]
        #[serde(untagged)]
        enum Stored {
            Raw(Vec<String>),
            Wrapped { tags: Vec<String> },
        }

        let tokens = match <Stored as serde::Deserialize>::deserialize(deserializer)? {
            Stored::Raw(tokens) | Stored::Wrapped { tags: tokens } => tokens,
        };
        Ok(Self { tokens })
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for ConditionGroup {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serde::Serialize::serialize(&self.tokens, serializer)
    }
}

/// An equipment catalog record.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Equipment {
    #[cfg_attr(
        feature = "serde",
        serde(default, deserialize_with = "scalar::optional")
    )]
    pub id: Option<String>,
    pub name: String,
    #[cfg_attr(feature = "serde", serde(default))]
    pub image: Option<String>,
    #[cfg_attr(feature = "serde", serde(default))]
    pub url: Option<String>,
    #[cfg_attr(feature = "serde", serde(default))]
    pub slots: Vec<EquipmentSlotEffect>,
    #[cfg_attr(feature = "serde", serde(default))]
    pub conditions_data: Vec<ConditionGroup>,
    #[cfg_attr(feature = "serde", serde(default))]
    pub condition_logic: ConditionLogic,
}

impl Equipment {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    #[must_use]
    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }

    /// Appends one effect line.
    #[must_use]
    pub fn with_effect(mut self, effect: impl Into<String>) -> Self {
        self.slots.push(EquipmentSlotEffect::new(effect));
        self
    }

    #[must_use]
    pub fn with_conditions(mut self, groups: Vec<ConditionGroup>, logic: ConditionLogic) -> Self {
        self.conditions_data = groups;
        self.condition_logic = logic;
        self
    }

    /// Whether two records denote the same catalog item.
    pub fn same_item(&self, other: &Equipment) -> bool {
        match (self.id.as_deref(), other.id.as_deref()) {
            (Some(a), Some(b)) => a == b,
            _ => self.name == other.name,
        }
    }

    pub fn effects(&self) -> impl Iterator<Item = &str> {
        self.slots.iter().map(|slot| slot.effect.as_str())
    }

    /// Every condition token across all groups, de-duplicated.
    pub fn condition_tokens(&self) -> BTreeSet<&str> {
        self.conditions_data
            .iter()
            .flat_map(|group| group.tokens().iter().map(String::as_str))
            .collect()
    }

    /// True when any effect line scales with (or is gated by) battle members.
    pub fn scales_with_members(&self) -> bool {
        self.effects().any(effect::mentions_battle_members)
    }

    pub fn is_referenced_by(&self, reference: &str) -> bool {
        self.id.as_deref() == Some(reference) || self.name.eq_ignore_ascii_case(reference)
    }
}

#[cfg(feature = "serde")]
mod scalar {
    use serde::Deserialize;

    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Scalar {
        Text(String),
        Int(i64),
        Float(f64),
    }

    /// Accepts a JSON string or number and normalizes it to a string.
    pub(super) fn optional<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        Ok(Option::<Scalar>::deserialize(deserializer)?.map(|scalar| match scalar {
            Scalar::Text(text) => text,
            Scalar::Int(int) => int.to_string(),
            Scalar::Float(float) => float.to_string(),
        }))
    }
}
