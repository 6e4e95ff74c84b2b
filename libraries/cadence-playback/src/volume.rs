//! Volume control
//!
//! The store keeps a single integer level (0-100). Mute is a presentation
//! concern layered on top: [`MuteControl`] remembers the level in force before
//! muting and restores it on unmute, talking to anything that implements
//! [`VolumeTarget`].

/// Clamp an arbitrary requested level into 0-100
pub(crate) fn clamp_level(level: i32) -> u8 {
    level.clamp(0, 100) as u8
}

/// Something that owns a volume level
pub trait VolumeTarget {
    /// Current level (0-100)
    fn volume(&self) -> u8;

    /// Request a new level; out-of-range values are clamped
    fn set_volume(&mut self, level: i32);
}

/// Mute toggle that restores the previous level
#[derive(Debug, Clone, Default)]
pub struct MuteControl {
    /// Mute state
    muted: bool,

    /// Level in force when mute was engaged
    previous: u8,
}

impl MuteControl {
    /// Create an unmuted control
    pub fn new() -> Self {
        Self::default()
    }

    /// Flip mute on the target
    ///
    /// Muting sets the level to 0. Unmuting restores the level captured when
    /// mute was engaged.
    pub fn toggle<T: VolumeTarget + ?Sized>(&mut self, target: &mut T) {
        if self.muted {
            target.set_volume(i32::from(self.previous));
            self.muted = false;
        } else {
            self.previous = target.volume();
            target.set_volume(0);
            self.muted = true;
        }
    }

    /// Move the slider; any explicit level clears mute
    pub fn set_volume<T: VolumeTarget + ?Sized>(&mut self, target: &mut T, level: i32) {
        target.set_volume(level);
        self.muted = false;
    }

    /// Whether mute is engaged
    pub fn is_muted(&self) -> bool {
        self.muted
    }

    /// Whether a speaker icon should render as muted
    pub fn shows_muted<T: VolumeTarget + ?Sized>(&self, target: &T) -> bool {
        self.muted || target.volume() == 0
    }
}
