//! Input events
//!
//! Remote keys arrive as already decoded NEC codes. [`RemoteDecoder`] turns
//! them into [`Command`] tokens and resolves repeat frames, which carry no
//! code of their own, to the last decoded key.

use crate::channel::{Channel, Receiver, Sender};
use crate::color::PaletteColor;
use crate::effect::LightMode;

// Codes of the shipped remote
const IR_POWER: u64 = 0x20DF_10EF; // Stand-By/ON
const IR_BRIGHTNESS_UP: u64 = 0x20DF_00FF; // +
const IR_BRIGHTNESS_DOWN: u64 = 0x20DF_807F; // -
const IR_MODE: u64 = 0x20DF_AE51; // OK
const IR_PLAY: u64 = 0x20DF_0BF4;
const IR_PAUSE: u64 = 0x20DF_738C;
const IR_SLOWER: u64 = 0x20DF_5AA5; // Reverse
const IR_FASTER: u64 = 0x20DF_FD02; // Forward
const IR_LEFT: u64 = 0x20DF_04FB; // Previous
const IR_RIGHT: u64 = 0x20DF_6B94; // Next
const IR_RED: u64 = 0x20DF_4EB1;
const IR_GREEN: u64 = 0x20DF_8E71;
const IR_YELLOW: u64 = 0x20DF_C639;
const IR_BLUE: u64 = 0x20DF_8679;
const IR_WHITE: u64 = 0x20DF_55AA; // Info

/// Command tokens understood by the controller
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Command {
    PowerToggle,
    BrightnessUp,
    BrightnessDown,
    SpeedUp,
    SpeedDown,
    DirectionLeft,
    DirectionRight,
    ModeAdvance,
    Play,
    Pause,
    PickColor(PaletteColor),
}

impl Command {
    /// Look up the command bound to a remote code
    pub const fn from_code(code: u64) -> Option<Self> {
        Some(match code {
            IR_POWER => Self::PowerToggle,
            IR_BRIGHTNESS_UP => Self::BrightnessUp,
            IR_BRIGHTNESS_DOWN => Self::BrightnessDown,
            IR_MODE => Self::ModeAdvance,
            IR_PLAY => Self::Play,
            IR_PAUSE => Self::Pause,
            IR_SLOWER => Self::SpeedDown,
            IR_FASTER => Self::SpeedUp,
            IR_LEFT => Self::DirectionLeft,
            IR_RIGHT => Self::DirectionRight,
            IR_RED => Self::PickColor(PaletteColor::Red),
            IR_GREEN => Self::PickColor(PaletteColor::Green),
            IR_YELLOW => Self::PickColor(PaletteColor::Yellow),
            IR_BLUE => Self::PickColor(PaletteColor::Blue),
            IR_WHITE => Self::PickColor(PaletteColor::White),
            _ => return None,
        })
    }

    /// Remote code bound to the command
    pub const fn code(self) -> u64 {
        match self {
            Self::PowerToggle => IR_POWER,
            Self::BrightnessUp => IR_BRIGHTNESS_UP,
            Self::BrightnessDown => IR_BRIGHTNESS_DOWN,
            Self::ModeAdvance => IR_MODE,
            Self::Play => IR_PLAY,
            Self::Pause => IR_PAUSE,
            Self::SpeedDown => IR_SLOWER,
            Self::SpeedUp => IR_FASTER,
            Self::DirectionLeft => IR_LEFT,
            Self::DirectionRight => IR_RIGHT,
            Self::PickColor(PaletteColor::Red) => IR_RED,
            Self::PickColor(PaletteColor::Green) => IR_GREEN,
            Self::PickColor(PaletteColor::Yellow) => IR_YELLOW,
            Self::PickColor(PaletteColor::Blue) => IR_BLUE,
            Self::PickColor(PaletteColor::White) => IR_WHITE,
        }
    }

    /// Returns if holding the key may repeat the command
    ///
    /// Only the continuous controls repeat.
    pub const fn accepts_repeat(self) -> bool {
        matches!(
            self,
            Self::BrightnessUp | Self::BrightnessDown | Self::SpeedUp | Self::SpeedDown
        )
    }

    /// Returns if the command has an effect in `mode`
    pub const fn allowed_in(self, mode: LightMode) -> bool {
        match self {
            Self::DirectionLeft | Self::DirectionRight => matches!(mode, LightMode::Chase),
            Self::Play | Self::Pause => mode.is_animated(),
            Self::PickColor(_) => matches!(mode, LightMode::Constant),
            Self::PowerToggle
            | Self::BrightnessUp
            | Self::BrightnessDown
            | Self::SpeedUp
            | Self::SpeedDown
            | Self::ModeAdvance => true,
        }
    }
}

/// A command token received from the remote
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RemoteEvent {
    pub command: Command,
    /// The key is held and this is an automatic repetition
    pub repeat: bool,
}

impl RemoteEvent {
    pub const fn pressed(command: Command) -> Self {
        Self {
            command,
            repeat: false,
        }
    }

    pub const fn repeated(command: Command) -> Self {
        Self {
            command,
            repeat: true,
        }
    }

    /// Returns the command unless it is a repetition the command rejects
    pub const fn accepted(self) -> Option<Command> {
        if self.repeat && !self.command.accepts_repeat() {
            None
        } else {
            Some(self.command)
        }
    }
}

/// Events consumed by the controller, at most one per tick
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum InputEvent {
    /// Decoded remote key
    Remote(RemoteEvent),
    /// The device button was released
    ButtonReleased,
}

impl InputEvent {
    /// Returns if the event cycles the power state
    pub const fn is_power_toggle(self) -> bool {
        matches!(
            self,
            Self::ButtonReleased
                | Self::Remote(RemoteEvent {
                    command: Command::PowerToggle,
                    repeat: false,
                })
        )
    }
}

/// Turns raw remote frames into input events
///
/// A repeat frame refers to the last accepted key. Repeats of keys that do
/// not accept repetition are dropped and end the repeat chain.
#[derive(Debug, Clone, Default)]
pub struct RemoteDecoder {
    last: Option<Command>,
}

impl RemoteDecoder {
    pub const fn new() -> Self {
        Self { last: None }
    }

    /// Decode a frame carrying a key code
    ///
    /// Unknown codes clear the repeat chain and yield nothing.
    pub fn decode(&mut self, code: u64) -> Option<InputEvent> {
        self.last = Command::from_code(code);
        self.last
            .map(|command| InputEvent::Remote(RemoteEvent::pressed(command)))
    }

    /// Decode a repeat frame
    pub fn decode_repeat(&mut self) -> Option<InputEvent> {
        let event = RemoteEvent::repeated(self.last?);
        if event.accepted().is_none() {
            self.last = None;
            return None;
        }
        Some(InputEvent::Remote(event))
    }
}

/// Type alias for input event sender
pub type InputSender<'a, const SIZE: usize> = Sender<'a, InputEvent, SIZE>;

/// Type alias for input event receiver
pub type InputReceiver<'a, const SIZE: usize> = Receiver<'a, InputEvent, SIZE>;

/// Type alias for the input event channel
pub type InputChannel<const SIZE: usize> = Channel<InputEvent, SIZE>;
