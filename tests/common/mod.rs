#![allow(dead_code)]

use myrtio_ir_light::{BlockingDelay, Duration, LedSink, OutputDriver, Rgb};

/// A frame committed to [`RecordingSink`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Commit {
    pub brightness: u8,
    pub colors: Vec<Rgb>,
}

impl Commit {
    pub fn is_black(&self) -> bool {
        self.colors.iter().all(|c| *c == Rgb::new(0, 0, 0))
    }
}

/// Sink remembering every commit
#[derive(Debug, Default)]
pub struct RecordingSink {
    pub brightness: u8,
    pub commits: Vec<Commit>,
}

impl LedSink for RecordingSink {
    fn set_brightness(&mut self, brightness: u8) {
        self.brightness = brightness;
    }

    fn write(&mut self, colors: &[Rgb]) {
        self.commits.push(Commit {
            brightness: self.brightness,
            colors: colors.to_vec(),
        });
    }
}

/// Delay that returns immediately and remembers what was requested
#[derive(Debug, Default)]
pub struct RecordingDelay {
    pub delays: Vec<Duration>,
}

impl RecordingDelay {
    pub fn total_ms(&self) -> u64 {
        self.delays.iter().map(|d| d.as_millis()).sum()
    }
}

impl BlockingDelay for RecordingDelay {
    fn delay(&mut self, duration: Duration) {
        self.delays.push(duration);
    }
}

/// Raw driver remembering every frame
#[derive(Debug, Default)]
pub struct RecordingDriver {
    pub frames: Vec<Vec<Rgb>>,
}

impl OutputDriver for RecordingDriver {
    fn write(&mut self, colors: &[Rgb]) {
        self.frames.push(colors.to_vec());
    }
}
