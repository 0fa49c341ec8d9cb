//! Tick scheduling and timing utilities.
//!
//! Provides fixed-period pacing without async/await or platform-specific
//! timers. The caller is responsible for sleeping between ticks, or can hand
//! the loop over to [`TickScheduler::run`].

use embassy_time::{Duration, Instant};

use crate::engine::{Engine, TickOutcome};
use crate::input::InputReceiver;
use crate::{BlockingDelay, LedSink};

/// Result of a tick.
#[derive(Debug, Clone, Copy)]
pub struct TickResult {
    /// The deadline for the next tick.
    pub next_deadline: Instant,
    /// How long to wait until the next tick (may be zero if behind schedule).
    pub sleep_duration: Duration,
    /// What the engine did during the tick.
    pub outcome: TickOutcome,
}

/// Drives an [`Engine`] at a fixed period.
///
/// This scheduler:
/// - Tracks tick timing with drift correction
/// - Feeds at most one queued input event per tick to the engine
/// - Owns the LED sink and the blocking delay
///
/// # Usage
///
/// ```ignore
/// static INPUTS: InputChannel<8> = InputChannel::new();
///
/// let engine = Engine::<29>::new(&config);
/// let mut scheduler = TickScheduler::new(engine, sink, EmbassyDelay, INPUTS.receiver());
/// scheduler.startup();
///
/// loop {
///     let result = scheduler.tick(Instant::now());
///     block_for(result.sleep_duration);
/// }
/// ```
pub struct TickScheduler<'a, S, D, const LEDS: usize, const QUEUE: usize>
where
    S: LedSink,
    D: BlockingDelay,
{
    engine: Engine<LEDS>,
    sink: S,
    delay: D,
    inputs: InputReceiver<'a, QUEUE>,
    next_tick: Instant,
    period: Duration,
}

impl<'a, S, D, const LEDS: usize, const QUEUE: usize> TickScheduler<'a, S, D, LEDS, QUEUE>
where
    S: LedSink,
    D: BlockingDelay,
{
    /// Create a new scheduler.
    ///
    /// Uses the tick period from the engine configuration.
    pub fn new(engine: Engine<LEDS>, sink: S, delay: D, inputs: InputReceiver<'a, QUEUE>) -> Self {
        let period = engine.config().timings.tick;
        Self {
            engine,
            sink,
            delay,
            inputs,
            next_tick: Instant::from_millis(0),
            period,
        }
    }

    /// Play the startup animation and discard input received meanwhile.
    pub fn startup(&mut self) {
        self.engine.startup(&mut self.sink, &mut self.delay);
        self.inputs.clear();
    }

    /// Process one tick and return timing information.
    ///
    /// This method:
    /// 1. Applies drift correction if we've fallen too far behind
    /// 2. Hands the oldest queued event (if any) to the engine
    /// 3. Drops input queued during a blocking transition
    /// 4. Returns the deadline for the next tick
    pub fn tick(&mut self, now: Instant) -> TickResult {
        // Re-anchor after stalls (blocking fades) instead of catching up
        let max_drift = self.period.as_millis() * 2;
        if now.as_millis() > self.next_tick.as_millis() + max_drift {
            self.next_tick = now;
        }

        let event = self.inputs.try_receive();
        let outcome = self.engine.tick(event, &mut self.sink, &mut self.delay);
        if outcome.blocked {
            self.inputs.clear();
        }

        self.next_tick += self.period;

        let sleep_duration = if self.next_tick.as_millis() > now.as_millis() {
            Duration::from_millis(self.next_tick.as_millis() - now.as_millis())
        } else {
            Duration::from_millis(0)
        };

        TickResult {
            next_deadline: self.next_tick,
            sleep_duration,
            outcome,
        }
    }

    /// Run the tick loop forever on the `embassy-time` clock.
    pub fn run(&mut self) -> ! {
        loop {
            let result = self.tick(Instant::now());
            self.delay.delay(result.sleep_duration);
        }
    }

    pub fn engine(&self) -> &Engine<LEDS> {
        &self.engine
    }

    pub fn sink(&self) -> &S {
        &self.sink
    }

    pub fn sink_mut(&mut self) -> &mut S {
        &mut self.sink
    }
}
