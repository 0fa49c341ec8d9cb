//! Desktop preview app for myrtio-ir-light
//!
//! Runs the controller on a background thread at its real tick rate and
//! shows the strip in a window. The on-screen remote feeds key codes through
//! the same decoder and input queue the firmware uses.

use std::sync::{Arc, Mutex};
use std::time::{Duration as StdDuration, Instant as StdInstant};

use eframe::egui::{self};
use myrtio_ir_light::{
    BlockingDelay, Command, ControllerConfig, Duration, Engine, InputChannel, InputEvent,
    InputSender, Instant, LightMode, OutputDriver, PaletteColor, PowerMode, RemoteDecoder, Rgb,
    ScaledOutput, TickScheduler, config::DEFAULT_STRIP_LEN,
};

/// Size of each LED rectangle in pixels
const LED_SIZE: f32 = 22.0;

/// Gap between LEDs
const LED_GAP: f32 = 4.0;

/// Input queue size
const INPUT_CHANNEL_SIZE: usize = 16;

/// Interval of NEC repeat frames while a key is held
const REPEAT_INTERVAL: StdDuration = StdDuration::from_millis(110);

/// Static input queue between the UI and the controller thread
static INPUTS: InputChannel<INPUT_CHANNEL_SIZE> = InputChannel::<INPUT_CHANNEL_SIZE>::new();

/// Remote layout: label and command per key, one row per slice
const REMOTE_ROWS: &[&[(&str, Command)]] = &[
    &[("⏻", Command::PowerToggle), ("OK", Command::ModeAdvance)],
    &[("+", Command::BrightnessUp), ("-", Command::BrightnessDown)],
    &[("◀◀", Command::SpeedDown), ("▶▶", Command::SpeedUp)],
    &[("⏮", Command::DirectionLeft), ("⏭", Command::DirectionRight)],
    &[("▶", Command::Play), ("⏸", Command::Pause)],
    &[
        ("R", Command::PickColor(PaletteColor::Red)),
        ("G", Command::PickColor(PaletteColor::Green)),
        ("Y", Command::PickColor(PaletteColor::Yellow)),
        ("B", Command::PickColor(PaletteColor::Blue)),
        ("W", Command::PickColor(PaletteColor::White)),
    ],
];

/// What the controller thread publishes after every tick
#[derive(Debug, Clone)]
struct StripView {
    colors: Vec<Rgb>,
    status: Rgb,
    power: PowerMode,
    mode: LightMode,
    brightness: u8,
    cycles_to_hold: u8,
    paused: bool,
}

impl Default for StripView {
    fn default() -> Self {
        Self {
            colors: vec![Rgb::default(); DEFAULT_STRIP_LEN],
            status: PowerMode::Off.status_color(),
            power: PowerMode::Off,
            mode: LightMode::Sparkle,
            brightness: 0,
            cycles_to_hold: 0,
            paused: false,
        }
    }
}

type SharedView = Arc<Mutex<StripView>>;

/// Driver writing the scaled frame into the shared view
struct WindowDriver {
    view: SharedView,
}

impl OutputDriver for WindowDriver {
    fn write(&mut self, colors: &[Rgb]) {
        if let Ok(mut view) = self.view.lock() {
            view.colors.clear();
            view.colors.extend_from_slice(colors);
        }
    }
}

/// Delay sleeping the controller thread
struct ThreadDelay;

impl BlockingDelay for ThreadDelay {
    fn delay(&mut self, duration: Duration) {
        std::thread::sleep(StdDuration::from_micros(duration.as_micros()));
    }
}

fn main() -> eframe::Result<()> {
    let view = SharedView::default();
    spawn_controller(view.clone());

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([900.0, 420.0])
            .with_title("IR Light Preview"),
        ..Default::default()
    };

    eframe::run_native(
        "myrtio-ir-light-preview",
        options,
        Box::new(|_cc| Ok(Box::new(PreviewApp::new(view)))),
    )
}

/// Start the tick loop on its own thread
fn spawn_controller(view: SharedView) {
    std::thread::spawn(move || {
        let config = ControllerConfig::default();
        let engine = Engine::<DEFAULT_STRIP_LEN>::new(&config);
        let output: ScaledOutput<_, DEFAULT_STRIP_LEN> =
            ScaledOutput::new(WindowDriver { view: view.clone() });
        let status = engine.status_color();
        let mut scheduler = TickScheduler::new(engine, output, ThreadDelay, INPUTS.receiver());

        if let Ok(mut shared) = view.lock() {
            shared.status = status;
        }
        scheduler.startup();
        loop {
            let result = scheduler.tick(Instant::now());
            if let Ok(mut shared) = view.lock() {
                if let Some(status) = result.outcome.status {
                    shared.status = status;
                }
                let engine = scheduler.engine();
                shared.power = engine.device().power();
                shared.mode = engine.effects().mode();
                shared.brightness = engine.device().brightness();
                shared.cycles_to_hold = engine.effects().cycles_to_hold();
                shared.paused = engine.effects().is_paused();
            }
            std::thread::sleep(StdDuration::from_micros(result.sleep_duration.as_micros()));
        }
    });
}

struct PreviewApp {
    view: SharedView,
    sender: InputSender<'static, INPUT_CHANNEL_SIZE>,
    decoder: RemoteDecoder,
    /// Key currently held down and the time of its last frame
    held: Option<(Command, StdInstant)>,
    /// Display gain, the controller brightness range is very dim on screen
    gain: u8,
}

impl PreviewApp {
    fn new(view: SharedView) -> Self {
        Self {
            view,
            sender: INPUTS.sender(),
            decoder: RemoteDecoder::new(),
            held: None,
            gain: 5,
        }
    }

    fn send(&self, event: Option<InputEvent>) {
        if let Some(event) = event {
            // Key presses are dropped on a full queue, like on the device
            let _ = self.sender.try_send(event);
        }
    }

    /// Emit a key frame on press and repeat frames while held
    fn handle_key(&mut self, command: Command) {
        let now = StdInstant::now();
        match self.held {
            Some((held, last)) if held == command => {
                if now.duration_since(last) >= REPEAT_INTERVAL {
                    let event = self.decoder.decode_repeat();
                    self.send(event);
                    self.held = Some((command, now));
                }
            }
            _ => {
                let event = self.decoder.decode(command.code());
                self.send(event);
                self.held = Some((command, now));
            }
        }
    }

    fn boost(&self, color: Rgb) -> egui::Color32 {
        egui::Color32::from_rgb(
            color.r.saturating_mul(self.gain),
            color.g.saturating_mul(self.gain),
            color.b.saturating_mul(self.gain),
        )
    }
}

impl eframe::App for PreviewApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        let view = self
            .view
            .lock()
            .map(|view| view.clone())
            .unwrap_or_default();

        ctx.request_repaint();

        egui::CentralPanel::default().show(ctx, |ui| {
            ui.horizontal(|ui| {
                // <Remote>
                ui.vertical(|ui| {
                    let mut pressed = None;
                    for row in REMOTE_ROWS {
                        ui.horizontal(|ui| {
                            for (label, command) in *row {
                                let button = egui::Button::new(*label)
                                    .min_size(egui::vec2(36.0, 28.0));
                                if ui.add(button).is_pointer_button_down_on() {
                                    pressed = Some(*command);
                                }
                            }
                        });
                    }
                    match pressed {
                        Some(command) => self.handle_key(command),
                        None => self.held = None,
                    }

                    ui.add_space(8.0);
                    if ui.button("Device button").clicked() {
                        self.send(Some(InputEvent::ButtonReleased));
                    }
                });
                // </Remote>
                ui.add_space(24.0);
                // <Status>
                ui.vertical(|ui| {
                    ui.horizontal(|ui| {
                        let (response, painter) =
                            ui.allocate_painter(egui::vec2(16.0, 16.0), egui::Sense::hover());
                        let status = view.status;
                        painter.circle_filled(
                            response.rect.center(),
                            6.0,
                            egui::Color32::from_rgb(status.r, status.g, status.b),
                        );
                        ui.label(format!("Power: {}", view.power.as_str()));
                    });
                    ui.label(format!("Mode: {}", view.mode.as_str()));
                    ui.label(format!("Brightness: {}", view.brightness));
                    ui.label(format!(
                        "Speed: {} ticks per step{}",
                        view.cycles_to_hold,
                        if view.paused { " (paused)" } else { "" }
                    ));

                    ui.add_space(8.0);
                    ui.horizontal(|ui| {
                        ui.label("Display gain:");
                        ui.add(egui::Slider::new(&mut self.gain, 1..=12));
                    });
                });
                // </Status>
            });

            ui.add_space(24.0);

            // === LED Display ===
            let available_width = ui.available_width();
            let led_pitch = LED_SIZE + LED_GAP;

            #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
            let leds_per_row = (available_width / led_pitch).floor().max(1.0) as usize;
            let rows = view.colors.len().div_ceil(leds_per_row);
            #[allow(clippy::cast_precision_loss)]
            let height = rows as f32 * led_pitch;

            let (response, painter) =
                ui.allocate_painter(egui::vec2(available_width, height), egui::Sense::hover());
            let origin = response.rect.min;

            #[allow(clippy::cast_precision_loss)]
            for (i, pixel) in view.colors.iter().enumerate() {
                let row = i / leds_per_row;
                let col = i % leds_per_row;
                let x = origin.x + col as f32 * led_pitch;
                let y = origin.y + row as f32 * led_pitch;

                let rect = egui::Rect::from_min_size(
                    egui::pos2(x, y),
                    egui::vec2(LED_SIZE, LED_SIZE),
                );
                painter.rect_filled(rect, 3.0, self.boost(*pixel));
            }
        });
    }
}
