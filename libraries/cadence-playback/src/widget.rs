//! Embedded player widget abstraction
//!
//! The store never talks to a real player. Platforms implement
//! [`PlaybackWidget`] for whatever embeds the video (an iframe bridge, a
//! native player, a test double) and the [`PlayerBridge`](crate::PlayerBridge)
//! drives it.

use std::collections::HashMap;

use cadence_core::{Catalog, VideoId};
use tracing::trace;

use crate::error::{PlaybackError, Result};

/// What the widget reports when polled
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum WidgetPoll {
    /// Not ready yet or no media loaded
    Pending,

    /// Current position and total length in seconds
    Progress {
        /// Position in seconds
        current: f64,
        /// Total length in seconds (0 while unknown)
        total: f64,
    },

    /// Playback reached the end of the media
    Ended,
}

/// Notifications a widget pushes on its own
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum WidgetEvent {
    /// The widget finished loading and accepts commands
    Ready,

    /// Position update
    Progress {
        /// Position in seconds
        current: f64,
        /// Total length in seconds
        total: f64,
    },

    /// Playback reached the end of the media
    Ended,
}

/// Player widget trait
///
/// Commands are fallible; the bridge logs failures and leaves store state
/// untouched.
pub trait PlaybackWidget {
    /// Load a video and begin buffering it
    fn load(&mut self, video_id: &VideoId) -> Result<()>;

    /// Start or resume playback
    fn play(&mut self) -> Result<()>;

    /// Pause playback
    fn pause(&mut self) -> Result<()>;

    /// Apply a volume level (0-100)
    fn set_volume(&mut self, level: u8) -> Result<()>;

    /// Jump to a position in seconds
    fn seek(&mut self, seconds: f64) -> Result<()>;

    /// Query position and end state
    fn poll(&mut self) -> WidgetPoll;
}

/// Command received by a [`SimulatedWidget`]
#[derive(Debug, Clone, PartialEq)]
pub enum WidgetCommand {
    Load(VideoId),
    Play,
    Pause,
    SetVolume(u8),
    Seek(f64),
}

/// In-process widget with a virtual clock
///
/// Each poll while playing advances the position by `step` seconds. Media
/// lengths come from a lookup table; unknown videos report a total of 0 and
/// poll as [`WidgetPoll::Pending`]. Every command is recorded.
#[derive(Debug, Clone)]
pub struct SimulatedWidget {
    /// Known media lengths in seconds
    lengths: HashMap<VideoId, f64>,

    /// Seconds advanced per poll while playing
    step: f64,

    /// Loaded media and its length
    loaded: Option<(VideoId, f64)>,

    /// Playback position in seconds
    position: f64,

    /// Whether the virtual clock is running
    playing: bool,

    /// Last applied volume
    volume: u8,

    /// Reject every command when set
    failing: bool,

    /// Commands received, oldest first
    commands: Vec<WidgetCommand>,
}

impl SimulatedWidget {
    /// Create a widget with explicit media lengths
    pub fn new(lengths: HashMap<VideoId, f64>, step: f64) -> Self {
        Self {
            lengths,
            step: if step.is_finite() && step > 0.0 { step } else { 1.0 },
            loaded: None,
            position: 0.0,
            playing: false,
            volume: 100,
            failing: false,
            commands: Vec::new(),
        }
    }

    /// Create a widget whose media lengths match the catalog's durations
    pub fn from_catalog(catalog: &Catalog, step: f64) -> Self {
        let lengths = catalog
            .streamable()
            .filter_map(|t| {
                t.availability
                    .video_id()
                    .map(|id| (id.clone(), f64::from(t.duration_secs)))
            })
            .collect();
        Self::new(lengths, step)
    }

    /// Make every subsequent command fail (or succeed again)
    pub fn set_failing(&mut self, failing: bool) {
        self.failing = failing;
    }

    /// Commands received so far
    pub fn commands(&self) -> &[WidgetCommand] {
        &self.commands
    }

    /// Whether the virtual clock is running
    pub fn is_playing(&self) -> bool {
        self.playing
    }

    /// Last applied volume
    pub fn volume(&self) -> u8 {
        self.volume
    }

    /// Current position in seconds
    pub fn position(&self) -> f64 {
        self.position
    }

    /// Currently loaded video
    pub fn loaded(&self) -> Option<&VideoId> {
        self.loaded.as_ref().map(|(id, _)| id)
    }

    fn accept(&mut self, command: WidgetCommand) -> Result<()> {
        trace!(?command, "Widget command");
        if self.failing {
            return Err(PlaybackError::Widget(format!("rejected {:?}", command)));
        }
        self.commands.push(command);
        Ok(())
    }
}

impl PlaybackWidget for SimulatedWidget {
    fn load(&mut self, video_id: &VideoId) -> Result<()> {
        self.accept(WidgetCommand::Load(video_id.clone()))?;
        let length = self.lengths.get(video_id).copied().unwrap_or(0.0);
        self.loaded = Some((video_id.clone(), length));
        self.position = 0.0;
        self.playing = false;
        Ok(())
    }

    fn play(&mut self) -> Result<()> {
        self.accept(WidgetCommand::Play)?;
        if self.loaded.is_none() {
            return Err(PlaybackError::NoMediaLoaded);
        }
        self.playing = true;
        Ok(())
    }

    fn pause(&mut self) -> Result<()> {
        self.accept(WidgetCommand::Pause)?;
        self.playing = false;
        Ok(())
    }

    fn set_volume(&mut self, level: u8) -> Result<()> {
        self.accept(WidgetCommand::SetVolume(level))?;
        self.volume = level.min(100);
        Ok(())
    }

    fn seek(&mut self, seconds: f64) -> Result<()> {
        self.accept(WidgetCommand::Seek(seconds))?;
        let Some((_, length)) = self.loaded else {
            return Err(PlaybackError::NoMediaLoaded);
        };
        self.position = seconds.clamp(0.0, length);
        Ok(())
    }

    fn poll(&mut self) -> WidgetPoll {
        let Some((_, length)) = self.loaded else {
            return WidgetPoll::Pending;
        };
        if length <= 0.0 {
            return WidgetPoll::Pending;
        }

        if self.playing {
            self.position = (self.position + self.step).min(length);
        }
        if self.position >= length {
            self.playing = false;
            return WidgetPoll::Ended;
        }

        WidgetPoll::Progress {
            current: self.position,
            total: length,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn widget() -> SimulatedWidget {
        let mut lengths = HashMap::new();
        lengths.insert(VideoId::new("abc"), 3.0);
        SimulatedWidget::new(lengths, 1.0)
    }

    #[test]
    fn nothing_loaded_is_pending() {
        let mut widget = widget();
        assert_eq!(widget.poll(), WidgetPoll::Pending);
    }

    #[test]
    fn clock_advances_only_while_playing() {
        let mut widget = widget();
        widget.load(&VideoId::new("abc")).unwrap();
        assert_eq!(
            widget.poll(),
            WidgetPoll::Progress {
                current: 0.0,
                total: 3.0
            }
        );

        widget.play().unwrap();
        assert_eq!(
            widget.poll(),
            WidgetPoll::Progress {
                current: 1.0,
                total: 3.0
            }
        );

        widget.pause().unwrap();
        assert_eq!(
            widget.poll(),
            WidgetPoll::Progress {
                current: 1.0,
                total: 3.0
            }
        );
    }

    #[test]
    fn reaching_the_end_reports_ended() {
        let mut widget = widget();
        widget.load(&VideoId::new("abc")).unwrap();
        widget.play().unwrap();
        widget.poll();
        widget.poll();

        assert_eq!(widget.poll(), WidgetPoll::Ended);
        assert!(!widget.is_playing());
    }

    #[test]
    fn unknown_length_stays_pending() {
        let mut widget = widget();
        widget.load(&VideoId::new("zzz")).unwrap();
        widget.play().unwrap();
        assert_eq!(widget.poll(), WidgetPoll::Pending);
    }

    #[test]
    fn seek_clamps_to_media() {
        let mut widget = widget();
        assert!(matches!(widget.seek(1.0), Err(PlaybackError::NoMediaLoaded)));

        widget.load(&VideoId::new("abc")).unwrap();
        widget.seek(10.0).unwrap();
        assert_eq!(widget.position(), 3.0);
    }

    #[test]
    fn failing_widget_records_nothing() {
        let mut widget = widget();
        widget.set_failing(true);

        assert!(matches!(widget.play(), Err(PlaybackError::Widget(_))));
        assert!(widget.commands().is_empty());
    }
}
