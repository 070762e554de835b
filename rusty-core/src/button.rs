//! Navigation button roles, their presentation, and caller overrides.

use serde::Serialize;
use twilight_model::channel::message::{EmojiReactionType, component::ButtonStyle};

/// Custom id prefix shared by every pager button.
pub const CUSTOM_ID_PREFIX: &str = "pager:";

/// The four fixed navigation controls of a pager.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum ButtonRole {
    PreviousPage,
    NextPage,
    JumpToFirstPage,
    JumpToLastPage,
}

impl ButtonRole {
    /// Every role, in the order the buttons are laid out.
    pub const ALL: [ButtonRole; 4] = [
        ButtonRole::JumpToFirstPage,
        ButtonRole::PreviousPage,
        ButtonRole::NextPage,
        ButtonRole::JumpToLastPage,
    ];

    /// Fixed component custom id for this role.
    pub const fn custom_id(self) -> &'static str {
        match self {
            Self::PreviousPage => "pager:prev",
            Self::NextPage => "pager:next",
            Self::JumpToFirstPage => "pager:first",
            Self::JumpToLastPage => "pager:last",
        }
    }

    /// Resolve a clicked component's custom id back to its role.
    pub fn from_custom_id(custom_id: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|role| role.custom_id() == custom_id)
    }

    const fn default_label(self) -> &'static str {
        match self {
            Self::PreviousPage => "<",
            Self::NextPage => ">",
            Self::JumpToFirstPage => "<<",
            Self::JumpToLastPage => ">>",
        }
    }
}

/// Presentation of one navigation button.
///
/// The custom id is assigned from the role at construction and has no setter.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ButtonSpec {
    custom_id: String,
    pub style: Option<ButtonStyle>,
    pub label: Option<String>,
    pub emoji: Option<EmojiReactionType>,
}

impl ButtonSpec {
    /// Default presentation for `role`: its arrow label in the success style.
    pub fn for_role(role: ButtonRole) -> Self {
        Self {
            custom_id: role.custom_id().to_owned(),
            style: Some(ButtonStyle::Success),
            label: Some(role.default_label().to_owned()),
            emoji: None,
        }
    }

    pub fn custom_id(&self) -> &str {
        &self.custom_id
    }

    fn apply(&mut self, changes: ButtonOverride) {
        if let Some(style) = changes.style {
            self.style = Some(style);
        }
        if let Some(label) = changes.label {
            self.label = Some(label);
        }
        if let Some(emoji) = changes.emoji {
            self.emoji = Some(emoji);
        }
    }
}

/// The four button specs owned by one pager.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PagerButtons {
    previous_page: ButtonSpec,
    next_page: ButtonSpec,
    jump_to_first_page: ButtonSpec,
    jump_to_last_page: ButtonSpec,
}

impl Default for PagerButtons {
    fn default() -> Self {
        Self {
            previous_page: ButtonSpec::for_role(ButtonRole::PreviousPage),
            next_page: ButtonSpec::for_role(ButtonRole::NextPage),
            jump_to_first_page: ButtonSpec::for_role(ButtonRole::JumpToFirstPage),
            jump_to_last_page: ButtonSpec::for_role(ButtonRole::JumpToLastPage),
        }
    }
}

impl PagerButtons {
    pub fn get(&self, role: ButtonRole) -> &ButtonSpec {
        match role {
            ButtonRole::PreviousPage => &self.previous_page,
            ButtonRole::NextPage => &self.next_page,
            ButtonRole::JumpToFirstPage => &self.jump_to_first_page,
            ButtonRole::JumpToLastPage => &self.jump_to_last_page,
        }
    }

    /// Iterate `(role, spec)` pairs in layout order.
    pub fn iter(&self) -> impl Iterator<Item = (ButtonRole, &ButtonSpec)> {
        ButtonRole::ALL.into_iter().map(|role| (role, self.get(role)))
    }

    fn get_mut(&mut self, role: ButtonRole) -> &mut ButtonSpec {
        match role {
            ButtonRole::PreviousPage => &mut self.previous_page,
            ButtonRole::NextPage => &mut self.next_page,
            ButtonRole::JumpToFirstPage => &mut self.jump_to_first_page,
            ButtonRole::JumpToLastPage => &mut self.jump_to_last_page,
        }
    }

    /// Apply overrides, returning how many roles were touched.
    pub(crate) fn configure(&mut self, mut overrides: ButtonOverrides) -> usize {
        let mut touched = 0;
        for role in ButtonRole::ALL {
            if let Some(changes) = overrides.take(role) {
                self.get_mut(role).apply(changes);
                touched += 1;
            }
        }
        touched
    }
}

/// Partial presentation change for one button. `None` fields keep the stored value.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ButtonOverride {
    pub style: Option<ButtonStyle>,
    pub label: Option<String>,
    pub emoji: Option<EmojiReactionType>,
}

impl ButtonOverride {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn style(mut self, style: ButtonStyle) -> Self {
        self.style = Some(style);
        self
    }

    pub fn label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    pub fn emoji(mut self, emoji: EmojiReactionType) -> Self {
        self.emoji = Some(emoji);
        self
    }
}

/// Overrides keyed by role. Roles left as `None` are not touched.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ButtonOverrides {
    pub previous_page: Option<ButtonOverride>,
    pub next_page: Option<ButtonOverride>,
    pub jump_to_first_page: Option<ButtonOverride>,
    pub jump_to_last_page: Option<ButtonOverride>,
}

impl ButtonOverrides {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the override for `role`, replacing any earlier one for the same role.
    pub fn with(mut self, role: ButtonRole, changes: ButtonOverride) -> Self {
        *self.slot(role) = Some(changes);
        self
    }

    pub fn is_empty(&self) -> bool {
        ButtonRole::ALL
            .into_iter()
            .all(|role| self.get(role).is_none())
    }

    pub fn get(&self, role: ButtonRole) -> Option<&ButtonOverride> {
        match role {
            ButtonRole::PreviousPage => self.previous_page.as_ref(),
            ButtonRole::NextPage => self.next_page.as_ref(),
            ButtonRole::JumpToFirstPage => self.jump_to_first_page.as_ref(),
            ButtonRole::JumpToLastPage => self.jump_to_last_page.as_ref(),
        }
    }

    fn slot(&mut self, role: ButtonRole) -> &mut Option<ButtonOverride> {
        match role {
            ButtonRole::PreviousPage => &mut self.previous_page,
            ButtonRole::NextPage => &mut self.next_page,
            ButtonRole::JumpToFirstPage => &mut self.jump_to_first_page,
            ButtonRole::JumpToLastPage => &mut self.jump_to_last_page,
        }
    }

    fn take(&mut self, role: ButtonRole) -> Option<ButtonOverride> {
        self.slot(role).take()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn custom_ids_are_distinct_and_prefixed() {
        let ids: Vec<&str> = ButtonRole::ALL.iter().map(|role| role.custom_id()).collect();

        for (index, id) in ids.iter().enumerate() {
            assert!(id.starts_with(CUSTOM_ID_PREFIX));
            assert!(!ids[index + 1..].contains(id), "duplicate id {id}");
        }
    }

    #[test]
    fn from_custom_id_round_trips_every_role() {
        for role in ButtonRole::ALL {
            assert_eq!(ButtonRole::from_custom_id(role.custom_id()), Some(role));
        }
        assert_eq!(ButtonRole::from_custom_id("pg:help:next"), None);
    }

    #[test]
    fn defaults_use_arrow_labels_and_success_style() {
        let buttons = PagerButtons::default();
        let labels: Vec<_> = buttons
            .iter()
            .map(|(_, spec)| spec.label.as_deref().unwrap_or_default())
            .collect();

        assert_eq!(labels, ["<<", "<", ">", ">>"]);
        assert!(
            buttons
                .iter()
                .all(|(_, spec)| spec.style == Some(ButtonStyle::Success) && spec.emoji.is_none())
        );
    }

    #[test]
    fn override_keeps_fields_left_unset() {
        let mut spec = ButtonSpec::for_role(ButtonRole::NextPage);
        spec.apply(ButtonOverride::new().label("Next"));

        assert_eq!(spec.label.as_deref(), Some("Next"));
        assert_eq!(spec.style, Some(ButtonStyle::Success));
        assert_eq!(spec.custom_id(), "pager:next");
    }

    #[test]
    fn with_replaces_earlier_override_for_same_role() {
        let overrides = ButtonOverrides::new()
            .with(ButtonRole::NextPage, ButtonOverride::new().label("a"))
            .with(ButtonRole::NextPage, ButtonOverride::new().label("b"));

        assert_eq!(
            overrides.get(ButtonRole::NextPage),
            Some(&ButtonOverride::new().label("b"))
        );
        assert!(overrides.get(ButtonRole::PreviousPage).is_none());
        assert!(!overrides.is_empty());
    }

    #[test]
    fn buttons_serialize_keyed_by_role() {
        let json = serde_json::to_value(PagerButtons::default()).unwrap();

        assert_eq!(json["nextPage"]["custom_id"], "pager:next");
        assert_eq!(json["jumpToFirstPage"]["label"], "<<");
    }
}
