//! Iterator: walking a playlist without exposing its storage.

use std::time::Instant;

use crate::demos::Demo;
use crate::domain::{Control, DemoInput, InputOutcome};

const CONTROLS: &[Control] = &[Control::new("p", "Prev"), Control::new("n", "Next")];

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Playlist {
    tracks: Vec<String>,
}

impl Playlist {
    pub fn new(tracks: Vec<String>) -> Self {
        Self { tracks }
    }

    pub fn tracks(&self) -> &[String] {
        &self.tracks
    }

    pub fn cursor(&self) -> PlaylistIterator {
        PlaylistIterator {
            index: 0,
            len: self.tracks.len(),
        }
    }
}

/// Cyclic cursor over a playlist.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PlaylistIterator {
    index: usize,
    len: usize,
}

impl PlaylistIterator {
    pub fn index(&self) -> usize {
        self.index
    }

    pub fn forward(&mut self) -> usize {
        if self.len > 0 {
            self.index = (self.index + 1) % self.len;
        }
        self.index
    }

    pub fn back(&mut self) -> usize {
        if self.len > 0 {
            self.index = (self.index + self.len - 1) % self.len;
        }
        self.index
    }
}

#[derive(Debug)]
pub struct IteratorDemo {
    playlist: Playlist,
    cursor: PlaylistIterator,
}

impl Default for IteratorDemo {
    fn default() -> Self {
        Self::new()
    }
}

impl IteratorDemo {
    pub fn new() -> Self {
        let playlist = Playlist::new((1..=4).map(|n| format!("Track {n}")).collect());
        let cursor = playlist.cursor();
        Self { playlist, cursor }
    }

    pub fn tracks(&self) -> &[String] {
        self.playlist.tracks()
    }

    pub fn current(&self) -> usize {
        self.cursor.index()
    }
}

impl Demo for IteratorDemo {
    fn handle(&mut self, input: DemoInput, _now: Instant) -> InputOutcome {
        match input {
            DemoInput::Key('n') => self.cursor.forward(),
            DemoInput::Key('p') => self.cursor.back(),
            _ => return InputOutcome::Ignored,
        };
        InputOutcome::Consumed
    }

    fn controls(&self) -> &'static [Control] {
        CONTROLS
    }

    fn hint(&self) -> &'static str {
        "Iterate through collection abstractly"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wraps_in_both_directions() {
        let now = Instant::now();
        let mut demo = IteratorDemo::new();
        assert_eq!(demo.tracks()[demo.current()], "Track 1");

        demo.handle(DemoInput::Key('p'), now);
        assert_eq!(demo.current(), 3);

        for _ in 0..5 {
            demo.handle(DemoInput::Key('n'), now);
        }
        assert_eq!(demo.current(), 0);
    }

    #[test]
    fn test_empty_playlist_stays_put() {
        let mut cursor = Playlist::new(Vec::new()).cursor();
        assert_eq!(cursor.forward(), 0);
        assert_eq!(cursor.back(), 0);
    }
}
