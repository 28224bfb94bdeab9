// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Focus visual visibility.
//!
//! A template may carry two focus adorners: a plain focus visual drawn around
//! the whole control, and a content focus visual drawn around its content.
//! At most one of them is ever shown.

/// Visibility of an optional template part.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Visibility {
    /// Shown.
    Visible,
    /// Hidden and not taking part in layout.
    Collapsed,
}

impl Visibility {
    /// `Visible` if `shown`, otherwise `Collapsed`.
    #[inline]
    pub const fn from_bool(shown: bool) -> Self {
        if shown { Self::Visible } else { Self::Collapsed }
    }
}

/// Which focus adorners a bound template provides.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct FocusParts {
    /// The template has a plain focus visual.
    pub focus_visual: bool,
    /// The template has a content focus visual.
    pub content_focus_visual: bool,
}

/// Computed visibility for each focus adorner. `None` means the part does not
/// exist and must not be touched.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct FocusVisuals {
    /// Visibility of the plain focus visual.
    pub focus_visual: Option<Visibility>,
    /// Visibility of the content focus visual.
    pub content_focus_visual: Option<Visibility>,
}

/// Decide focus adorner visibility.
///
/// `show` is whether focus should be displayed at all (focused and enabled).
/// The content focus visual carries the focus when the control has content;
/// otherwise the plain focus visual does.
///
/// ```
/// use understory_visual_state::{resolve_focus_visuals, FocusParts, Visibility};
///
/// let parts = FocusParts { focus_visual: true, content_focus_visual: true };
/// let v = resolve_focus_visuals(parts, true, true);
/// assert_eq!(v.content_focus_visual, Some(Visibility::Visible));
/// assert_eq!(v.focus_visual, Some(Visibility::Collapsed));
/// ```
pub const fn resolve_focus_visuals(parts: FocusParts, show: bool, has_content: bool) -> FocusVisuals {
    let shown = Visibility::from_bool(show);
    if has_content && parts.content_focus_visual {
        FocusVisuals {
            focus_visual: if parts.focus_visual {
                Some(Visibility::Collapsed)
            } else {
                None
            },
            content_focus_visual: Some(shown),
        }
    } else if parts.focus_visual {
        FocusVisuals {
            focus_visual: Some(shown),
            content_focus_visual: if parts.content_focus_visual {
                Some(Visibility::Collapsed)
            } else {
                None
            },
        }
    } else if parts.content_focus_visual {
        FocusVisuals {
            focus_visual: None,
            content_focus_visual: Some(Visibility::Collapsed),
        }
    } else {
        FocusVisuals {
            focus_visual: None,
            content_focus_visual: None,
        }
    }
}
