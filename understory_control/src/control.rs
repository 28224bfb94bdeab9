// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The control: logical state, batching, and the resolve pass.

use core::fmt;

use kurbo::Size;
use smallvec::SmallVec;
use understory_visual_state::{
    FocusParts, FocusVisuals, Liveness, StateName, TransitionTable, VisualInputs,
    VisualStateDriver, resolve, resolve_focus_visuals,
};

use crate::behavior::CommitBehavior;
use crate::builder::ControlBuilder;
use crate::click_mode::ClickMode;
use crate::error::ControlError;
use crate::event::{ControlEvent, ControlEventKind};
use crate::host::ControlHost;
use crate::repeat::{AutoRepeat, RepeatClock};
use crate::state::{InputSession, LogicalState};

/// An interactive control.
///
/// `K` identifies the control in the events it raises. `T` is the transition
/// handle type produced by the template and understood by the host.
///
/// Input arrives through the `on_*` handlers (see the crate docs). Every
/// handler that changes more than one thing runs inside a [`batch`], so a
/// single gesture produces at most one resolve pass.
///
/// [`batch`]: Self::batch
#[derive(Clone, Debug)]
pub struct Control<K, T> {
    pub(crate) id: K,
    pub(crate) state: LogicalState,
    pub(crate) click_mode: ClickMode,
    pub(crate) session: InputSession,
    pub(crate) behavior: CommitBehavior,
    pub(crate) accepts_return: bool,
    pub(crate) has_content: bool,
    pub(crate) render_size: Size,
    pub(crate) repeat: Option<RepeatClock>,
    loaded: bool,
    has_visual_parent: bool,
    template: Option<(TransitionTable<T>, FocusParts)>,
    driver: VisualStateDriver<T>,
    focus_visuals: Option<FocusVisuals>,
    suspend_depth: u32,
    visual_revision: u64,
    events: SmallVec<[ControlEvent<K>; 2]>,
}

impl<K, T> Control<K, T> {
    /// A plain, enabled control with default settings.
    ///
    /// Use [`ControlBuilder`] for anything else.
    pub fn new(id: K) -> Self {
        ControlBuilder::new(id).build()
    }

    pub(crate) fn from_builder(
        id: K,
        state: LogicalState,
        click_mode: ClickMode,
        behavior: CommitBehavior,
        accepts_return: bool,
        has_content: bool,
        render_size: Size,
        repeat: Option<AutoRepeat>,
    ) -> Self {
        Self {
            id,
            state,
            click_mode,
            session: InputSession::default(),
            behavior,
            accepts_return,
            has_content,
            render_size,
            repeat: repeat.map(RepeatClock::new),
            loaded: false,
            has_visual_parent: false,
            template: None,
            driver: VisualStateDriver::new(),
            focus_visuals: None,
            suspend_depth: 0,
            visual_revision: 0,
            events: SmallVec::new(),
        }
    }

    /// Identifier carried by raised events.
    pub fn id(&self) -> &K {
        &self.id
    }

    /// All logical flags.
    pub fn state(&self) -> LogicalState {
        self.state
    }

    /// Whether the control accepts input.
    pub fn is_enabled(&self) -> bool {
        self.state.contains(LogicalState::ENABLED)
    }

    /// Whether the control has keyboard focus.
    pub fn is_focused(&self) -> bool {
        self.state.contains(LogicalState::FOCUSED)
    }

    /// Whether the pointer is over the control.
    pub fn is_hovered(&self) -> bool {
        self.state.contains(LogicalState::HOVERED)
    }

    /// Whether the control is being activated.
    pub fn is_pressed(&self) -> bool {
        self.state.contains(LogicalState::PRESSED)
    }

    /// Whether the control takes part in tab navigation.
    pub fn is_tab_stop(&self) -> bool {
        self.state.contains(LogicalState::TAB_STOP)
    }

    /// When the control commits.
    pub fn click_mode(&self) -> ClickMode {
        self.click_mode
    }

    /// Transient input-device state.
    pub fn session(&self) -> &InputSession {
        &self.session
    }

    /// The commit hook and its check state.
    pub fn behavior(&self) -> &CommitBehavior {
        &self.behavior
    }

    /// Whether Enter forces a commit.
    pub fn accepts_return(&self) -> bool {
        self.accepts_return
    }

    /// Whether the control has content (selects which focus visual is used).
    pub fn has_content(&self) -> bool {
        self.has_content
    }

    /// Last known rendered size, used to decide whether the pointer is still
    /// over the control.
    pub fn render_size(&self) -> Size {
        self.render_size
    }

    /// The auto-repeat schedule, if any.
    pub fn auto_repeat(&self) -> Option<AutoRepeat> {
        self.repeat.as_ref().map(RepeatClock::schedule)
    }

    /// Whether an auto-repeat is currently counting down.
    pub fn is_repeating(&self) -> bool {
        self.repeat.as_ref().is_some_and(RepeatClock::is_armed)
    }

    /// The liveness gate as currently reported by the host.
    pub fn liveness(&self) -> Liveness {
        Liveness {
            loaded: self.loaded,
            has_visual_parent: self.has_visual_parent,
        }
    }

    /// Name of the transition that is currently playing.
    pub fn current_state(&self) -> Option<StateName> {
        self.driver.current_name()
    }

    /// Handle of the transition that is currently playing.
    pub fn current_transition(&self) -> Option<&T> {
        self.driver.current().map(|(_, t)| t)
    }

    /// Focus adorner visibility from the last resolve pass with a template.
    pub fn focus_visuals(&self) -> Option<FocusVisuals> {
        self.focus_visuals
    }

    /// The bound transition table, if a template has been applied.
    pub fn transition_table(&self) -> Option<&TransitionTable<T>> {
        self.template.as_ref().map(|(table, _)| table)
    }

    /// Number of resolve passes executed so far.
    ///
    /// Batched requests only count once, when the outermost batch ends.
    pub fn visual_revision(&self) -> u64 {
        self.visual_revision
    }

    /// Whether resolve requests are currently being deferred.
    pub fn is_batching(&self) -> bool {
        self.suspend_depth > 0
    }

    /// Events raised so far and not yet taken.
    pub fn events(&self) -> &[ControlEvent<K>] {
        &self.events
    }

    /// Take the raised events, oldest first.
    pub fn take_events(&mut self) -> SmallVec<[ControlEvent<K>; 2]> {
        core::mem::take(&mut self.events)
    }

    /// Change the click mode.
    ///
    /// The visual state is not affected until the next resolve.
    pub fn set_click_mode(&mut self, mode: ClickMode) {
        self.click_mode = mode;
    }

    /// Change the click mode from a raw value.
    ///
    /// Out-of-range values are rejected and the current mode is kept.
    pub fn set_click_mode_raw(&mut self, raw: u8) -> Result<(), ControlError> {
        self.click_mode = ClickMode::try_from(raw)?;
        Ok(())
    }

    /// Whether Enter forces a commit.
    pub fn set_accepts_return(&mut self, accepts: bool) {
        self.accepts_return = accepts;
    }

    /// Record the rendered size used by the pointer bounds test.
    pub fn set_render_size(&mut self, size: Size) {
        self.render_size = size;
    }

    /// Record whether the control is attached below a visual parent.
    ///
    /// Transitions only start while the control is loaded and attached. This
    /// does not resolve; the next resolve picks it up.
    pub fn set_visual_parent(&mut self, attached: bool) {
        self.has_visual_parent = attached;
    }

    /// Replace the auto-repeat schedule. A running repeat is stopped.
    pub fn set_auto_repeat(&mut self, schedule: Option<AutoRepeat>) {
        self.repeat = schedule.map(RepeatClock::new);
    }

    pub(crate) fn raise(&mut self, kind: ControlEventKind)
    where
        K: Clone,
    {
        self.events.push(ControlEvent {
            source: self.id.clone(),
            kind,
        });
    }

    pub(crate) fn arm_repeat(&mut self) {
        if let Some(clock) = &mut self.repeat {
            clock.arm();
        }
    }

    pub(crate) fn disarm_repeat(&mut self) {
        if let Some(clock) = &mut self.repeat {
            clock.disarm();
        }
    }

    fn visual_inputs(&self) -> VisualInputs {
        self.behavior
            .visual_inputs(self.is_enabled(), self.is_pressed(), self.is_hovered())
    }
}

impl<K: Clone + fmt::Debug, T: Clone + PartialEq> Control<K, T> {
    /// Bind a template.
    ///
    /// `table` is this instance's own transition table, typically built with
    /// [`TransitionTable::bind`]. `parts` says which focus adorners the
    /// template has. A transition still playing from a previous template is
    /// stopped. Resolves immediately.
    pub fn apply_template<H>(&mut self, table: TransitionTable<T>, parts: FocusParts, host: &mut H)
    where
        H: ControlHost<T> + ?Sized,
    {
        self.driver.clear(host);
        self.template = Some((table, parts));
        self.focus_visuals = None;
        self.update_visual_state(host);
    }

    /// The host finished loading the control.
    pub fn on_loaded<H>(&mut self, host: &mut H)
    where
        H: ControlHost<T> + ?Sized,
    {
        self.loaded = true;
        self.update_visual_state(host);
    }

    /// Change whether the control has content. Affects focus visuals only.
    pub fn set_has_content<H>(&mut self, has_content: bool, host: &mut H)
    where
        H: ControlHost<T> + ?Sized,
    {
        if self.has_content != has_content {
            self.has_content = has_content;
            self.update_visual_state(host);
        }
    }

    /// Enable or disable the control.
    ///
    /// Disabling clears focus, hover, press and the whole input session,
    /// gives up pointer capture and stops auto-repeat. Tab stop follows the
    /// enabled flag. Either way exactly one resolve pass runs.
    pub fn set_enabled<H>(&mut self, enabled: bool, host: &mut H)
    where
        H: ControlHost<T> + ?Sized,
    {
        if self.is_enabled() == enabled {
            return;
        }
        self.batch(host, |c, h| {
            c.state
                .set(LogicalState::ENABLED | LogicalState::TAB_STOP, enabled);
            if !enabled {
                c.state.remove(
                    LogicalState::FOCUSED | LogicalState::HOVERED | LogicalState::PRESSED,
                );
                if c.session.mouse_captured {
                    h.release_pointer_capture();
                }
                c.session.reset();
                c.disarm_repeat();
            }
        });
    }

    /// Run `f` with resolve requests deferred.
    ///
    /// Batches nest. When the outermost batch ends exactly one resolve pass
    /// runs, whether or not anything inside asked for one.
    pub fn batch<H, R>(&mut self, host: &mut H, f: impl FnOnce(&mut Self, &mut H) -> R) -> R
    where
        H: ControlHost<T> + ?Sized,
    {
        self.suspend_depth += 1;
        let out = f(self, host);
        self.suspend_depth -= 1;
        if self.suspend_depth == 0 {
            self.change_visual_state(host);
        }
        out
    }

    /// Request a resolve pass. Deferred while a batch is open.
    pub fn update_visual_state<H>(&mut self, host: &mut H)
    where
        H: ControlHost<T> + ?Sized,
    {
        if self.suspend_depth == 0 {
            self.change_visual_state(host);
        }
    }

    pub(crate) fn set_flag<H>(&mut self, flag: LogicalState, value: bool, host: &mut H)
    where
        H: ControlHost<T> + ?Sized,
    {
        if self.state.contains(flag) != value {
            self.state.set(flag, value);
            self.update_visual_state(host);
        }
    }

    fn change_visual_state<H>(&mut self, host: &mut H)
    where
        H: ControlHost<T> + ?Sized,
    {
        self.visual_revision += 1;
        let inputs = self.visual_inputs();
        let liveness = self.liveness();
        let show_focus = self
            .state
            .contains(LogicalState::ENABLED | LogicalState::FOCUSED);

        let Some((table, parts)) = &self.template else {
            log::trace!("{:?}: no template bound", self.id);
            return;
        };
        let next = resolve(table, inputs);
        log::trace!(
            "{:?}: {:?} resolves to {:?}",
            self.id,
            inputs,
            next.map(|(name, _)| name)
        );
        self.driver.go_to(next, liveness, host);

        let visuals = resolve_focus_visuals(*parts, show_focus, self.has_content);
        if self.focus_visuals != Some(visuals) {
            self.focus_visuals = Some(visuals);
            host.set_focus_visuals(visuals);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::vec::Vec;
    use understory_visual_state::{TransitionPlayer, TransitionTableBuilder};

    #[derive(Default)]
    struct Host {
        begun: Vec<StateName>,
        released: u32,
    }

    impl TransitionPlayer<StateName> for Host {
        type Error = ();
        fn begin(&mut self, t: &StateName) -> Result<(), ()> {
            self.begun.push(*t);
            Ok(())
        }
        fn stop(&mut self, _: &StateName) -> Result<(), ()> {
            Ok(())
        }
    }

    impl ControlHost<StateName> for Host {
        fn capture_pointer(&mut self) -> bool {
            true
        }
        fn release_pointer_capture(&mut self) {
            self.released += 1;
        }
        fn focus(&mut self) -> bool {
            true
        }
    }

    fn live_control(host: &mut Host) -> Control<u8, StateName> {
        let mut c = Control::new(1);
        let table = TransitionTableBuilder::new()
            .with(StateName::Normal, StateName::Normal)
            .with(StateName::Disabled, StateName::Disabled)
            .build();
        c.set_visual_parent(true);
        c.apply_template(table, FocusParts::default(), host);
        c.on_loaded(host);
        c
    }

    #[test]
    fn nested_batches_resolve_once() {
        let mut host = Host::default();
        let mut c = live_control(&mut host);
        let before = c.visual_revision();
        c.batch(&mut host, |c, h| {
            c.update_visual_state(h);
            c.batch(h, |c, h| c.update_visual_state(h));
            assert!(c.is_batching());
            c.update_visual_state(h);
        });
        assert!(!c.is_batching());
        assert_eq!(c.visual_revision(), before + 1);
    }

    #[test]
    fn nothing_plays_before_loaded() {
        let mut host = Host::default();
        let mut c: Control<u8, StateName> = Control::new(1);
        c.apply_template(
            TransitionTableBuilder::new()
                .with(StateName::Normal, StateName::Normal)
                .build(),
            FocusParts::default(),
            &mut host,
        );
        assert!(host.begun.is_empty());
        c.set_visual_parent(true);
        c.on_loaded(&mut host);
        assert_eq!(host.begun, [StateName::Normal]);
    }

    #[test]
    fn disabling_is_one_pass_and_clears_session() {
        let mut host = Host::default();
        let mut c = live_control(&mut host);
        c.state.insert(LogicalState::PRESSED | LogicalState::FOCUSED);
        c.session.mouse_captured = true;
        c.session.commit_key_down = true;
        c.session.primary_button_down = true;

        let before = c.visual_revision();
        c.set_enabled(false, &mut host);
        assert_eq!(c.visual_revision(), before + 1);
        assert_eq!(c.session(), &InputSession::default());
        assert!(!c.is_pressed() && !c.is_focused() && !c.is_tab_stop());
        assert_eq!(host.released, 1);
        assert_eq!(c.current_state(), Some(StateName::Disabled));

        c.set_enabled(false, &mut host);
        assert_eq!(c.visual_revision(), before + 1);
        c.set_enabled(true, &mut host);
        assert!(c.is_tab_stop());
        assert_eq!(c.current_state(), Some(StateName::Normal));
    }

    #[test]
    fn raw_click_mode_is_validated() {
        let mut c: Control<u8, StateName> = Control::new(1);
        assert_eq!(c.set_click_mode_raw(1), Ok(()));
        assert_eq!(c.click_mode(), ClickMode::Press);
        assert_eq!(c.set_click_mode_raw(5), Err(ControlError::InvalidClickMode(5)));
        assert_eq!(c.click_mode(), ClickMode::Press);
    }
}
