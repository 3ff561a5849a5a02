// SPDX-License-Identifier: MPL-2.0
//! Overlay header of the full-screen viewer.
//!
//! The header hosts up to four controls (close, delete, share and a page
//! indicator). It builds them once from a [`HeaderConfig`], recomputes their
//! frames whenever the host reports a bounds, safe-area or orientation
//! change, and forwards activations to a [`HeaderDelegate`].
//!
//! Controls are built in two phases: [`create_control`] allocates each one
//! from its configuration section, then the header routes activations for
//! every role through [`Header::activate`]. No control holds a reference
//! back to the header.

pub mod control;
pub mod delegate;
pub mod environment;
pub mod geometry;
pub mod layout;
pub mod page;

pub use control::{
    create_control, ContentMeasure, Control, ControlContent, ControlRole, GlyphMetrics,
    ResolvedTextStyle,
};
pub use delegate::{Event, HeaderDelegate};
pub use environment::{EnvironmentProvider, StaticEnvironment};
pub use geometry::{Insets, PerRole};
pub use layout::{compute_layout, resolve_visibility, HeaderState, LayoutMode, LayoutOutcome};
pub use page::PageIndicatorState;

use crate::config::{CenterConflict, HeaderConfig};
use crate::error::{Error, Result};
use iced::{Point, Rectangle, Size};
use serde::{Deserialize, Serialize};
use std::rc::{Rc, Weak};

/// Transient header state a host may carry across view recreation.
///
/// A snapshot does not include the configuration; restoring requires it.
/// The last layout inputs ride along so a restored header can lay itself
/// out before the host reports its bounds again.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct HeaderSnapshot {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub current_page: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub total_pages: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub state: Option<HeaderState>,
}

/// The header component.
#[derive(Debug)]
pub struct Header {
    controls: PerRole<Control>,
    visible: PerRole<bool>,
    mode: LayoutMode,
    center_conflict: CenterConflict,
    background_alpha: f32,
    measure: Box<dyn ContentMeasure>,
    page: Option<PageIndicatorState>,
    state: Option<HeaderState>,
    outcome: Option<LayoutOutcome>,
    delegate: Option<Weak<dyn HeaderDelegate>>,
}

impl Header {
    /// Builds a header, measuring text with [`GlyphMetrics`].
    #[must_use]
    pub fn new(config: &HeaderConfig) -> Self {
        Self::with_measure(config, Box::new(GlyphMetrics::default()))
    }

    /// Builds a header with a host-supplied content measurer.
    #[must_use]
    pub fn with_measure(config: &HeaderConfig, measure: Box<dyn ContentMeasure>) -> Self {
        let controls =
            PerRole::from_fn(|role| create_control(role, config.control(role), measure.as_ref()));
        let center_conflict = config.layout.center_conflict;
        let visible = resolve_visibility(&controls.map(|_, c| c.is_enabled()), center_conflict);

        Self {
            controls,
            visible,
            mode: LayoutMode::from_config(&config.layout),
            center_conflict,
            background_alpha: config.appearance.background_alpha.clamp(0.0, 1.0),
            measure,
            page: None,
            state: None,
            outcome: None,
            delegate: None,
        }
    }

    /// Rebuilds a header from a snapshot.
    ///
    /// # Errors
    ///
    /// Returns [`Error::MissingConfiguration`] when `config` is `None`: a
    /// header without its configuration would have no controls to show.
    pub fn restore(snapshot: &HeaderSnapshot, config: Option<&HeaderConfig>) -> Result<Self> {
        let config = config.ok_or_else(|| {
            Error::MissingConfiguration(
                "a header cannot be restored without the configuration it was built from"
                    .to_string(),
            )
        })?;

        let mut header = Self::new(config);
        if let (Some(current), Some(total)) = (snapshot.current_page, snapshot.total_pages) {
            header.update_page(current, total);
        }
        if let Some(state) = snapshot.state {
            header.layout(state);
        }
        Ok(header)
    }

    /// Captures the page and the inputs of the last layout pass.
    #[must_use]
    pub fn snapshot(&self) -> HeaderSnapshot {
        HeaderSnapshot {
            current_page: self.page.map(PageIndicatorState::current),
            total_pages: self.page.map(PageIndicatorState::total),
            state: self.state,
        }
    }

    // =========================================================================
    // Host callbacks
    // =========================================================================

    pub fn on_bounds_changed(&mut self, env: &dyn EnvironmentProvider) {
        self.layout(env.header_state());
    }

    pub fn on_safe_area_changed(&mut self, env: &dyn EnvironmentProvider) {
        self.layout(env.header_state());
    }

    pub fn on_layout_requested(&mut self, env: &dyn EnvironmentProvider) {
        self.layout(env.header_state());
    }

    /// Runs one layout pass for `state`, replacing the previous state.
    pub fn layout(&mut self, state: HeaderState) {
        let sizes = self.controls.map(|_, control| control.size());
        let outcome = compute_layout(&self.mode, &state, &sizes, &self.visible);

        for role in ControlRole::ALL {
            self.controls
                .get_mut(role)
                .set_frame(*outcome.frames.get(role));
        }

        tracing::trace!(
            "Header layout: legacy={}, width={}, top_inset={}, height={}",
            self.mode.is_legacy(),
            state.container_width,
            outcome.top_inset,
            outcome.height
        );

        self.state = Some(state);
        self.outcome = Some(outcome);
    }

    /// Re-runs layout with the last state, if any pass ran yet.
    fn relayout(&mut self) {
        if let Some(state) = self.state {
            self.layout(state);
        }
    }

    // =========================================================================
    // Page indicator
    // =========================================================================

    /// Shows `current/total` in the page indicator and resizes it.
    ///
    /// Out-of-range values are clamped: `total` to at least 1, `current` to
    /// `1..=total`. Arguments are signed so a transient `-1` from a paging
    /// transition lands on the first page.
    pub fn update_page(&mut self, current: i64, total: i64) {
        let page = PageIndicatorState::new(current, total);
        if page.differs_from(current, total) {
            tracing::debug!(
                "Clamped page {}/{} to {}/{}",
                current,
                total,
                page.current(),
                page.total()
            );
        }

        self.page = Some(page);
        self.controls
            .get_mut(ControlRole::PageIndicator)
            .set_text(page.text(), self.measure.as_ref());
        self.relayout();
    }

    #[must_use]
    pub fn page(&self) -> Option<PageIndicatorState> {
        self.page
    }

    /// Text currently shown by the page indicator.
    #[must_use]
    pub fn page_text(&self) -> &str {
        self.controls.page_indicator.content().text()
    }

    // =========================================================================
    // Controls
    // =========================================================================

    #[must_use]
    pub fn control(&self, role: ControlRole) -> &Control {
        self.controls.get(role)
    }

    pub fn controls(&self) -> impl Iterator<Item = &Control> {
        ControlRole::ALL.into_iter().map(move |role| self.controls.get(role))
    }

    /// Controls that are enabled and not displaced by the center conflict policy.
    pub fn visible_controls(&self) -> impl Iterator<Item = &Control> {
        self.controls().filter(move |control| self.is_visible(control.role()))
    }

    #[must_use]
    pub fn is_visible(&self, role: ControlRole) -> bool {
        *self.visible.get(role)
    }

    #[must_use]
    pub fn frame(&self, role: ControlRole) -> Rectangle {
        self.controls.get(role).frame()
    }

    /// Enables or disables a control and re-runs layout.
    pub fn set_enabled(&mut self, role: ControlRole, enabled: bool) {
        self.controls.get_mut(role).set_enabled(enabled);
        self.visible = resolve_visibility(
            &self.controls.map(|_, control| control.is_enabled()),
            self.center_conflict,
        );
        self.relayout();
    }

    // =========================================================================
    // Geometry
    // =========================================================================

    #[must_use]
    pub fn mode(&self) -> &LayoutMode {
        &self.mode
    }

    /// Inputs of the last layout pass.
    #[must_use]
    pub fn state(&self) -> Option<HeaderState> {
        self.state
    }

    #[must_use]
    pub fn outcome(&self) -> Option<&LayoutOutcome> {
        self.outcome.as_ref()
    }

    /// Header height; zero before the first layout pass.
    #[must_use]
    pub fn height(&self) -> f32 {
        self.outcome.map_or(0.0, |outcome| outcome.height)
    }

    /// Strip hosting the controls; empty before the first layout pass.
    #[must_use]
    pub fn band(&self) -> Rectangle {
        self.outcome
            .map_or(Rectangle::new(Point::ORIGIN, Size::ZERO), |outcome| outcome.band)
    }

    #[must_use]
    pub fn background_alpha(&self) -> f32 {
        self.background_alpha
    }

    // =========================================================================
    // Activation
    // =========================================================================

    /// Registers the delegate. Only a weak reference is kept.
    pub fn set_delegate(&mut self, delegate: &Rc<dyn HeaderDelegate>) {
        self.delegate = Some(Rc::downgrade(delegate));
    }

    pub fn clear_delegate(&mut self) {
        self.delegate = None;
    }

    /// Whether a delegate is registered and still alive.
    #[must_use]
    pub fn has_delegate(&self) -> bool {
        self.delegate().is_some()
    }

    fn delegate(&self) -> Option<Rc<dyn HeaderDelegate>> {
        self.delegate.as_ref().and_then(Weak::upgrade)
    }

    /// Handles a tap on `role`.
    ///
    /// Forwards the activation to the delegate, if any, and returns the
    /// matching event. Taps on hidden controls and on the page indicator
    /// are dropped and yield [`Event::None`].
    pub fn activate(&self, role: ControlRole) -> Event {
        if !role.is_interactive() {
            return Event::None;
        }
        if !self.is_visible(role) {
            tracing::debug!("Ignoring activation of hidden {} control", role);
            return Event::None;
        }

        let control = self.controls.get(role);
        match self.delegate() {
            Some(delegate) => match role {
                ControlRole::Close => delegate.on_close_pressed(self, control),
                ControlRole::Delete => delegate.on_delete_pressed(self, control),
                ControlRole::Share => delegate.on_share_pressed(self, control),
                ControlRole::PageIndicator => {}
            },
            None => tracing::debug!("No header delegate for {} activation", role),
        }

        Event::for_role(role)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;

    #[derive(Default)]
    struct Recorder {
        events: RefCell<Vec<(ControlRole, Rectangle)>>,
    }

    impl HeaderDelegate for Recorder {
        fn on_close_pressed(&self, _header: &Header, control: &Control) {
            self.events
                .borrow_mut()
                .push((ControlRole::Close, control.frame()));
        }

        fn on_delete_pressed(&self, _header: &Header, control: &Control) {
            self.events
                .borrow_mut()
                .push((ControlRole::Delete, control.frame()));
        }

        fn on_share_pressed(&self, _header: &Header, control: &Control) {
            self.events
                .borrow_mut()
                .push((ControlRole::Share, control.frame()));
        }
    }

    fn config_with(delete: bool, share: bool) -> HeaderConfig {
        let mut config = HeaderConfig::default();
        config.delete.enabled = Some(delete);
        config.share.enabled = Some(share);
        config
    }

    fn notched_portrait() -> StaticEnvironment {
        StaticEnvironment::new(Size::new(375.0, 812.0), Insets::top(47.0))
    }

    #[test]
    fn height_is_zero_before_first_layout() {
        let header = Header::new(&HeaderConfig::default());
        assert_eq!(header.height(), 0.0);
        assert!(header.state().is_none());
    }

    #[test]
    fn bounds_change_runs_layout() {
        let mut header = Header::new(&HeaderConfig::default());
        header.on_bounds_changed(&notched_portrait());
        assert_eq!(header.height(), 107.0);
        assert_eq!(header.frame(ControlRole::Close).center_y(), 77.0);
    }

    #[test]
    fn safe_area_change_replaces_state() {
        let mut header = Header::new(&HeaderConfig::default());
        header.on_layout_requested(&notched_portrait());
        header.on_safe_area_changed(&StaticEnvironment::new(
            Size::new(375.0, 812.0),
            Insets::top(20.0),
        ));
        assert_eq!(header.height(), 60.0);
        assert_eq!(header.frame(ControlRole::Close).center_y(), 30.0);
    }

    #[test]
    fn update_page_formats_and_recenters() {
        let mut header = Header::new(&HeaderConfig::default());
        header.on_bounds_changed(&notched_portrait());

        header.update_page(3, 10);
        assert_eq!(header.page_text(), "3/10");
        let frame = header.frame(ControlRole::PageIndicator);
        assert_eq!(frame.center_x(), 187.5);
        assert_eq!(frame.center_y(), 77.0);
        assert!(frame.width > 0.0);
    }

    #[test]
    fn update_page_clamps_out_of_range_values() {
        let mut header = Header::new(&HeaderConfig::default());
        header.update_page(0, 5);
        assert_eq!(header.page_text(), "1/5");
        header.update_page(9, 5);
        assert_eq!(header.page_text(), "5/5");
        assert_eq!(header.page(), Some(PageIndicatorState::new(5, 5)));
        header.update_page(-1, 5);
        assert_eq!(header.page_text(), "1/5");
    }

    #[test]
    fn longer_page_text_widens_indicator() {
        let mut header = Header::new(&HeaderConfig::default());
        header.on_bounds_changed(&notched_portrait());
        header.update_page(1, 9);
        let narrow = header.frame(ControlRole::PageIndicator).width;
        header.update_page(10, 100);
        let wide = header.frame(ControlRole::PageIndicator).width;
        assert!(wide > narrow);
    }

    #[test]
    fn activation_reaches_delegate_with_control() {
        let mut header = Header::new(&config_with(false, true));
        header.on_bounds_changed(&notched_portrait());
        let recorder = Rc::new(Recorder::default());
        let delegate: Rc<dyn HeaderDelegate> = recorder.clone();
        header.set_delegate(&delegate);

        assert_eq!(header.activate(ControlRole::Close), Event::ClosePressed);
        assert_eq!(header.activate(ControlRole::Share), Event::SharePressed);

        let events = recorder.events.borrow();
        assert_eq!(events.len(), 2);
        assert_eq!(events[0], (ControlRole::Close, header.frame(ControlRole::Close)));
        assert_eq!(events[1].0, ControlRole::Share);
    }

    #[test]
    fn disabled_control_never_forwards() {
        let mut header = Header::new(&config_with(false, false));
        let recorder = Rc::new(Recorder::default());
        let delegate: Rc<dyn HeaderDelegate> = recorder.clone();
        header.set_delegate(&delegate);

        assert_eq!(header.activate(ControlRole::Delete), Event::None);
        assert_eq!(header.activate(ControlRole::Share), Event::None);
        assert_eq!(header.activate(ControlRole::PageIndicator), Event::None);
        assert!(recorder.events.borrow().is_empty());
    }

    #[test]
    fn activation_without_delegate_still_reports_event() {
        let header = Header::new(&HeaderConfig::default());
        assert!(!header.has_delegate());
        assert_eq!(header.activate(ControlRole::Close), Event::ClosePressed);
    }

    #[test]
    fn dropped_delegate_is_treated_as_absent() {
        let mut header = Header::new(&HeaderConfig::default());
        {
            let delegate: Rc<dyn HeaderDelegate> = Rc::new(Recorder::default());
            header.set_delegate(&delegate);
            assert!(header.has_delegate());
        }
        assert!(!header.has_delegate());
        assert_eq!(header.activate(ControlRole::Close), Event::ClosePressed);
    }

    #[test]
    fn clear_delegate_stops_forwarding() {
        let mut header = Header::new(&HeaderConfig::default());
        let recorder = Rc::new(Recorder::default());
        let delegate: Rc<dyn HeaderDelegate> = recorder.clone();
        header.set_delegate(&delegate);
        header.clear_delegate();

        header.activate(ControlRole::Close);
        assert!(recorder.events.borrow().is_empty());
    }

    #[test]
    fn delete_is_suppressed_when_page_indicator_is_enabled() {
        let header = Header::new(&config_with(true, false));
        assert!(header.control(ControlRole::Delete).is_enabled());
        assert!(!header.is_visible(ControlRole::Delete));
        assert_eq!(header.activate(ControlRole::Delete), Event::None);
    }

    #[test]
    fn prefer_delete_policy_hides_page_indicator() {
        let mut config = config_with(true, false);
        config.layout.center_conflict = CenterConflict::PreferDelete;
        let header = Header::new(&config);
        assert!(header.is_visible(ControlRole::Delete));
        assert!(!header.is_visible(ControlRole::PageIndicator));
        assert_eq!(header.activate(ControlRole::Delete), Event::DeletePressed);
    }

    #[test]
    fn set_enabled_updates_visibility() {
        let mut header = Header::new(&HeaderConfig::default());
        header.set_enabled(ControlRole::PageIndicator, false);
        header.set_enabled(ControlRole::Delete, true);
        assert!(header.is_visible(ControlRole::Delete));
        assert_eq!(header.activate(ControlRole::Delete), Event::DeletePressed);
    }

    #[test]
    fn hidden_controls_still_get_frames() {
        let mut header = Header::new(&config_with(false, false));
        header.on_bounds_changed(&notched_portrait());
        let share = header.frame(ControlRole::Share);
        assert_eq!(share.center_y(), 77.0);
        assert_eq!(375.0 - (share.x + share.width), 17.0);
    }

    #[test]
    fn restore_requires_configuration() {
        let snapshot = HeaderSnapshot::default();
        let result = Header::restore(&snapshot, None);
        assert!(matches!(result, Err(Error::MissingConfiguration(_))));
    }

    #[test]
    fn restore_reapplies_page_and_state() {
        let config = HeaderConfig::default();
        let mut header = Header::new(&config);
        header.on_bounds_changed(&notched_portrait());
        header.update_page(4, 7);

        let restored =
            Header::restore(&header.snapshot(), Some(&config)).expect("restore should succeed");
        assert_eq!(restored.page_text(), "4/7");
        assert_eq!(restored.height(), header.height());
        assert_eq!(
            restored.frame(ControlRole::PageIndicator),
            header.frame(ControlRole::PageIndicator)
        );
    }

    #[test]
    fn background_alpha_is_clamped() {
        let mut config = HeaderConfig::default();
        config.appearance.background_alpha = 3.0;
        assert_eq!(Header::new(&config).background_alpha(), 1.0);
    }
}
