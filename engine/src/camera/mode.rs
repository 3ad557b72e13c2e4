//! Camera Modes and Mode Switching
//!
//! [`ModeSwitcher`] owns the active [`CameraMode`]. User commands select the
//! desired mode; the switcher may override it by forcing first person when the
//! zoom distance collapses, and restores the preempted mode only on an
//! explicit recovery event (hysteresis: boundary noise in `distance` never
//! flips the mode back).
//!
//! The switcher does not touch UI widgets. It queues [`CameraEvent`]s that the
//! UI layer drains and reacts to.

use super::rig::CameraRig;
use crate::frame::FrameContext;

/// Camera mode. Exactly one is active at a time.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default, Hash)]
pub enum CameraMode {
    /// Player orbits the camera with the mouse
    MouseOrbit,
    /// Camera swings behind the player on its own
    #[default]
    AutoFollow,
    /// Camera at the player's eyes, driving the player's facing
    FirstPerson,
    /// Free-fly camera, exempt from clipping and automatic switching
    Debug,
}

impl CameraMode {
    /// Modes that follow the player from behind.
    #[inline]
    pub fn is_follow(&self) -> bool {
        matches!(self, CameraMode::MouseOrbit | CameraMode::AutoFollow)
    }

    /// Every mode except [`CameraMode::Debug`].
    #[inline]
    pub fn is_gameplay(&self) -> bool {
        *self != CameraMode::Debug
    }
}

/// Notifications for whoever presents camera state (mode selector widgets,
/// HUD, telemetry).
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum CameraEvent {
    /// The active mode changed.
    ModeChanged { from: CameraMode, to: CameraMode },
    /// The selector for this mode should appear selected.
    SelectorActivated(CameraMode),
    /// Distance collapsed and first person was forced over `previous`.
    FirstPersonForced { previous: CameraMode },
    /// A forced first person ended and `restored` is active again.
    FirstPersonRecovered { restored: CameraMode },
}

/// Finite-state controller over [`CameraMode`].
#[derive(Clone, Debug)]
pub struct ModeSwitcher {
    active: CameraMode,
    /// Mode preempted by an automatic switch into first person.
    /// `None` whenever first person is not auto-forced.
    previous: Option<CameraMode>,
    threshold: f32,
    events: Vec<CameraEvent>,
}

impl Default for ModeSwitcher {
    fn default() -> Self {
        Self::new(CameraMode::default(), super::config::FIRST_PERSON_THRESHOLD)
    }
}

impl ModeSwitcher {
    /// Create a switcher starting in `mode`, forcing first person below
    /// `threshold`.
    pub fn new(mode: CameraMode, threshold: f32) -> Self {
        Self {
            active: mode,
            previous: None,
            threshold,
            events: Vec::new(),
        }
    }

    #[inline]
    pub fn mode(&self) -> CameraMode {
        self.active
    }

    /// Mode to restore on recovery, only set while first person is auto-forced.
    #[inline]
    pub fn previous_mode(&self) -> Option<CameraMode> {
        self.previous
    }

    /// Whether first person is active because the distance collapsed.
    #[inline]
    pub fn is_forced_first_person(&self) -> bool {
        self.active == CameraMode::FirstPerson && self.previous.is_some()
    }

    #[inline]
    pub fn threshold(&self) -> f32 {
        self.threshold
    }

    /// User command: make `mode` the active mode.
    ///
    /// Selecting the active mode is a no-op. An explicit selection always
    /// clears the recorded previous mode.
    pub fn select(&mut self, mode: CameraMode) {
        if mode == self.active {
            return;
        }
        let from = self.active;
        self.active = mode;
        self.previous = None;
        log::info!("[ModeSwitcher] selected {mode:?} (was {from:?})");
        self.events.push(CameraEvent::ModeChanged { from, to: mode });
        self.events.push(CameraEvent::SelectorActivated(mode));
    }

    /// Per-frame check: force first person when `distance` drops below the
    /// threshold.
    ///
    /// Only runs during active play and never in debug mode. Returns `true`
    /// when first person was forced this frame.
    pub fn update(&mut self, rig: &mut CameraRig, frame: &FrameContext) -> bool {
        if !frame.game_mode.is_active_play() || !self.active.is_gameplay() {
            return false;
        }
        if rig.distance >= self.threshold || self.active == CameraMode::FirstPerson {
            return false;
        }

        let from = self.active;
        self.previous = Some(from);
        self.active = CameraMode::FirstPerson;
        rig.target_distance = self.threshold;

        log::info!(
            "[ModeSwitcher] distance {:.3} below {:.3}, forcing first person over {from:?}",
            rig.distance,
            self.threshold
        );
        self.events.push(CameraEvent::ModeChanged {
            from,
            to: CameraMode::FirstPerson,
        });
        self.events
            .push(CameraEvent::SelectorActivated(CameraMode::FirstPerson));
        self.events
            .push(CameraEvent::FirstPersonForced { previous: from });
        true
    }

    /// External recovery event: leave a forced first person and restore the
    /// preempted mode.
    ///
    /// Snaps `distance` and `target_distance` to the threshold. Returns the
    /// restored mode, or `None` when there was nothing to recover (not in
    /// active play, or first person was selected explicitly).
    pub fn recover(&mut self, rig: &mut CameraRig, frame: &FrameContext) -> Option<CameraMode> {
        if !frame.game_mode.is_active_play() || !self.is_forced_first_person() {
            return None;
        }
        let restored = self.previous.take()?;

        rig.distance = self.threshold;
        rig.target_distance = self.threshold;
        self.active = restored;

        log::info!("[ModeSwitcher] leaving forced first person, restoring {restored:?}");
        self.events.push(CameraEvent::SelectorActivated(restored));
        self.events.push(CameraEvent::ModeChanged {
            from: CameraMode::FirstPerson,
            to: restored,
        });
        self.events
            .push(CameraEvent::FirstPersonRecovered { restored });
        Some(restored)
    }

    /// Events queued since the last drain.
    pub fn pending_events(&self) -> &[CameraEvent] {
        &self.events
    }

    /// Take all queued events, oldest first.
    pub fn drain_events(&mut self) -> std::vec::Drain<'_, CameraEvent> {
        self.events.drain(..)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rig_at(distance: f32) -> CameraRig {
        let mut rig = CameraRig::new();
        rig.distance = distance;
        rig.target_distance = distance;
        rig
    }

    #[test]
    fn test_forces_first_person_below_threshold() {
        let mut switcher = ModeSwitcher::new(CameraMode::MouseOrbit, 1.5);
        let mut rig = rig_at(1.2);

        assert!(switcher.update(&mut rig, &FrameContext::playing(0.016)));
        assert_eq!(switcher.mode(), CameraMode::FirstPerson);
        assert_eq!(switcher.previous_mode(), Some(CameraMode::MouseOrbit));
        assert_eq!(rig.target_distance, 1.5);
        assert!(
            switcher
                .pending_events()
                .contains(&CameraEvent::SelectorActivated(CameraMode::FirstPerson))
        );
    }

    #[test]
    fn test_forcing_again_is_a_no_op() {
        let mut switcher = ModeSwitcher::new(CameraMode::AutoFollow, 1.5);
        let mut rig = rig_at(1.0);
        let frame = FrameContext::playing(0.016);
        switcher.update(&mut rig, &frame);
        switcher.drain_events().for_each(drop);

        assert!(!switcher.update(&mut rig, &frame));
        assert_eq!(switcher.previous_mode(), Some(CameraMode::AutoFollow));
        assert!(switcher.pending_events().is_empty());
    }

    #[test]
    fn test_no_switch_outside_active_play() {
        let mut switcher = ModeSwitcher::new(CameraMode::AutoFollow, 1.5);
        let mut rig = rig_at(1.0);
        let paused = FrameContext::new(0.016, 0.0, crate::frame::GameMode::Paused);
        assert!(!switcher.update(&mut rig, &paused));
        assert_eq!(switcher.mode(), CameraMode::AutoFollow);
    }

    #[test]
    fn test_debug_is_exempt() {
        let mut switcher = ModeSwitcher::new(CameraMode::Debug, 1.5);
        let mut rig = rig_at(0.5);
        assert!(!switcher.update(&mut rig, &FrameContext::playing(0.016)));
        assert_eq!(switcher.mode(), CameraMode::Debug);
    }

    #[test]
    fn test_recover_restores_previous_mode() {
        let mut switcher = ModeSwitcher::new(CameraMode::MouseOrbit, 1.5);
        let mut rig = rig_at(1.0);
        let frame = FrameContext::playing(0.016);
        switcher.update(&mut rig, &frame);
        switcher.drain_events().for_each(drop);

        assert_eq!(switcher.recover(&mut rig, &frame), Some(CameraMode::MouseOrbit));
        assert_eq!(switcher.mode(), CameraMode::MouseOrbit);
        assert_eq!(switcher.previous_mode(), None);
        assert_eq!(rig.distance, 1.5);
        assert_eq!(rig.target_distance, 1.5);

        let events: Vec<_> = switcher.drain_events().collect();
        assert_eq!(events[0], CameraEvent::SelectorActivated(CameraMode::MouseOrbit));
        assert!(events.contains(&CameraEvent::FirstPersonRecovered {
            restored: CameraMode::MouseOrbit
        }));
    }

    #[test]
    fn test_explicit_first_person_cannot_be_recovered() {
        let mut switcher = ModeSwitcher::new(CameraMode::AutoFollow, 1.5);
        let mut rig = rig_at(4.0);
        switcher.select(CameraMode::FirstPerson);
        assert_eq!(switcher.previous_mode(), None);
        assert_eq!(switcher.recover(&mut rig, &FrameContext::playing(0.016)), None);
        assert_eq!(switcher.mode(), CameraMode::FirstPerson);
        assert_eq!(rig.distance, 4.0);
    }

    #[test]
    fn test_select_same_mode_emits_nothing() {
        let mut switcher = ModeSwitcher::new(CameraMode::AutoFollow, 1.5);
        switcher.select(CameraMode::AutoFollow);
        assert!(switcher.pending_events().is_empty());
    }
}
