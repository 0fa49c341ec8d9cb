//! Command interpretation
//!
//! Applies a remote command to the device and effect state. Which commands
//! repeat and which modes a command applies to are decided by the tables on
//! [`Command`]; this module only performs the mutation.

#[cfg(feature = "esp32-log")]
use esp_println::println;

use crate::config::ControllerConfig;
use crate::device::DeviceState;
use crate::effect::{ChaseDirection, EffectState};
use crate::input::Command;
use crate::math8::{add_clamped, sub_clamped};

/// Apply `command` to the state
///
/// Returns `false` if the command was ignored: power toggles (handled by the
/// device state machine), commands not allowed in the current mode, and
/// direction changes that would change nothing.
pub fn interpret(
    command: Command,
    device: &mut DeviceState,
    effects: &mut EffectState,
    config: &ControllerConfig,
) -> bool {
    if !command.allowed_in(effects.mode) {
        return false;
    }

    match command {
        Command::PowerToggle => return false,
        Command::BrightnessUp => {
            let brightness = &config.brightness;
            device.brightness = add_clamped(device.brightness, brightness.step, brightness.max);
            device.mark_dirty();
            #[cfg(feature = "esp32-log")]
            println!("[interpreter] brightness+ {}", device.brightness);
        }
        Command::BrightnessDown => {
            let brightness = &config.brightness;
            device.brightness = sub_clamped(device.brightness, brightness.step, brightness.min);
            device.mark_dirty();
            #[cfg(feature = "esp32-log")]
            println!("[interpreter] brightness- {}", device.brightness);
        }
        Command::SpeedUp => {
            let speed = &config.speed;
            effects.set_cycles_to_hold(sub_clamped(effects.cycles_to_hold, speed.step, speed.min));
            effects.paused = false;
            #[cfg(feature = "esp32-log")]
            println!("[interpreter] speed+ {} cycles", effects.cycles_to_hold);
        }
        Command::SpeedDown => {
            let speed = &config.speed;
            effects.set_cycles_to_hold(add_clamped(effects.cycles_to_hold, speed.step, speed.max));
            #[cfg(feature = "esp32-log")]
            println!("[interpreter] speed- {} cycles", effects.cycles_to_hold);
        }
        Command::DirectionLeft => return set_direction(effects, ChaseDirection::Forward),
        Command::DirectionRight => return set_direction(effects, ChaseDirection::Reverse),
        Command::ModeAdvance => {
            let next = effects.mode.next();
            effects.switch_mode(next, &config.speed);
            effects.paused = false;
            device.mark_dirty();
            #[cfg(feature = "esp32-log")]
            println!("[interpreter] light mode {}", next.as_str());
        }
        Command::Play => effects.paused = false,
        Command::Pause => effects.paused = true,
        Command::PickColor(color) => {
            effects.constant.set_color(color.rgb());
            device.mark_dirty();
            #[cfg(feature = "esp32-log")]
            println!("[interpreter] color {}", color.as_str());
        }
    }
    true
}

/// Change the chase direction and resume
///
/// Pressing the current direction again only has an effect while paused.
fn set_direction(effects: &mut EffectState, direction: ChaseDirection) -> bool {
    if effects.chase.direction() == direction && !effects.paused {
        return false;
    }

    effects.chase.set_direction(direction);
    effects.paused = false;
    effects.cycle_counter = 0;
    #[cfg(feature = "esp32-log")]
    println!("[interpreter] direction {:?}", direction);
    true
}
