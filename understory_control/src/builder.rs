// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use alloc::string::String;

use kurbo::Size;
use understory_visual_state::CheckState;

use crate::behavior::CommitBehavior;
use crate::click_mode::ClickMode;
use crate::control::Control;
use crate::repeat::AutoRepeat;
use crate::state::LogicalState;

/// Configures a [`Control`].
///
/// Defaults: plain, enabled, [`ClickMode::Release`], Enter accepted (except
/// for radio controls), unchecked, no auto-repeat.
///
/// ```
/// use understory_control::{ClickMode, ControlBuilder};
/// use understory_visual_state::CheckState;
///
/// let check_box = ControlBuilder::new("agree")
///     .toggle(true)
///     .click_mode(ClickMode::Press)
///     .build::<u32>();
/// assert_eq!(check_box.checked(), Some(CheckState::Unchecked));
/// assert!(check_box.is_three_state());
///
/// let radio = ControlBuilder::new("small").radio("size").build::<u32>();
/// assert!(!radio.accepts_return());
/// assert_eq!(radio.radio_group(), Some("size"));
/// ```
#[derive(Clone, Debug)]
pub struct ControlBuilder<K> {
    id: K,
    click_mode: ClickMode,
    enabled: bool,
    accepts_return: Option<bool>,
    behavior: CommitBehavior,
    checked: CheckState,
    has_content: bool,
    render_size: Size,
    auto_repeat: Option<AutoRepeat>,
}

impl<K> ControlBuilder<K> {
    /// Start configuring the control identified by `id`.
    pub fn new(id: K) -> Self {
        Self {
            id,
            click_mode: ClickMode::Release,
            enabled: true,
            accepts_return: None,
            behavior: CommitBehavior::Plain,
            checked: CheckState::Unchecked,
            has_content: false,
            render_size: Size::ZERO,
            auto_repeat: None,
        }
    }

    /// When the control commits.
    #[must_use]
    pub fn click_mode(mut self, mode: ClickMode) -> Self {
        self.click_mode = mode;
        self
    }

    /// Initial enabled state.
    #[must_use]
    pub fn enabled(mut self, enabled: bool) -> Self {
        self.enabled = enabled;
        self
    }

    /// Whether Enter forces a commit.
    #[must_use]
    pub fn accepts_return(mut self, accepts: bool) -> Self {
        self.accepts_return = Some(accepts);
        self
    }

    /// A plain button.
    #[must_use]
    pub fn plain(mut self) -> Self {
        self.behavior = CommitBehavior::Plain;
        self
    }

    /// A toggle whose commits cycle its check state.
    #[must_use]
    pub fn toggle(mut self, three_state: bool) -> Self {
        self.behavior = CommitBehavior::Toggle {
            checked: CheckState::Unchecked,
            three_state,
        };
        self
    }

    /// A radio button in `group`.
    #[must_use]
    pub fn radio(mut self, group: impl Into<String>) -> Self {
        self.behavior = CommitBehavior::Radio {
            checked: CheckState::Unchecked,
            group: group.into(),
        };
        self
    }

    /// Initial check state. Ignored for plain controls.
    #[must_use]
    pub fn checked(mut self, checked: CheckState) -> Self {
        self.checked = checked;
        self
    }

    /// Whether the control has content.
    #[must_use]
    pub fn has_content(mut self, has_content: bool) -> Self {
        self.has_content = has_content;
        self
    }

    /// Initial rendered size.
    #[must_use]
    pub fn render_size(mut self, size: Size) -> Self {
        self.render_size = size;
        self
    }

    /// Keep committing while held pressed. The click mode is left alone;
    /// repeat buttons usually pair this with [`ClickMode::Press`].
    #[must_use]
    pub fn auto_repeat(mut self, schedule: AutoRepeat) -> Self {
        self.auto_repeat = Some(schedule);
        self
    }

    /// Finish the control.
    pub fn build<T>(self) -> Control<K, T> {
        let mut behavior = self.behavior;
        let is_radio = matches!(behavior, CommitBehavior::Radio { .. });
        match &mut behavior {
            CommitBehavior::Plain => {}
            CommitBehavior::Toggle { checked, .. } | CommitBehavior::Radio { checked, .. } => {
                *checked = self.checked;
            }
        }
        let mut state = LogicalState::default();
        state.set(LogicalState::ENABLED | LogicalState::TAB_STOP, self.enabled);
        Control::from_builder(
            self.id,
            state,
            self.click_mode,
            behavior,
            self.accepts_return.unwrap_or(!is_radio),
            self.has_content,
            self.render_size,
            self.auto_repeat,
        )
    }
}
