//! GUI example using egui.
//!
//! This example demonstrates a clickable keypad driving calc_mini.
//! Run with: cargo run --example egui_app

use std::time::{Duration, Instant};

use calc_mini::{Engine, KeyCode, KeyEvent, Modifiers, Token};
use eframe::egui;

const COPIED_FLASH: Duration = Duration::from_secs(1);
const BUTTON_SIZE: [f32; 2] = [64.0, 48.0];

const KEYPAD: [[&str; 4]; 5] = [
    ["AC", "+/-", "%", "÷"],
    ["7", "8", "9", "x"],
    ["4", "5", "6", "-"],
    ["1", "2", "3", "+"],
    ["0", ".", "del", "="],
];

#[derive(Default)]
struct CalcApp {
    engine: Engine,
    copied_at: Option<Instant>,
}

impl CalcApp {
    fn handle_key_event(&mut self, key: egui::Key, modifiers: egui::Modifiers) {
        if let Some(event) = convert_egui_event(key, modifiers) {
            self.engine.handle_key(event);
        }
    }

    fn handle_text_input(&mut self, text: &str) {
        for ch in text.chars() {
            self.engine.handle_key(KeyEvent::char(ch));
        }
    }

    fn copied(&self) -> bool {
        self.copied_at.is_some_and(|at| at.elapsed() < COPIED_FLASH)
    }
}

fn convert_egui_event(key: egui::Key, modifiers: egui::Modifiers) -> Option<KeyEvent> {
    let mut mods = Modifiers::empty();
    if modifiers.ctrl {
        mods |= Modifiers::CTRL;
    }
    if modifiers.alt {
        mods |= Modifiers::ALT;
    }
    if modifiers.mac_cmd {
        mods |= Modifiers::META;
    }

    // Printable keys arrive as `Event::Text`.
    let code = match key {
        egui::Key::Escape => KeyCode::Esc,
        egui::Key::Enter => KeyCode::Enter,
        egui::Key::Backspace => KeyCode::Backspace,
        _ => return None,
    };
    Some(KeyEvent::new(code, mods))
}

impl eframe::App for CalcApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // Keyboard input
        for event in &ctx.input(|i| i.events.clone()) {
            match event {
                egui::Event::Key {
                    key,
                    pressed: true,
                    modifiers,
                    ..
                } => self.handle_key_event(*key, *modifiers),
                egui::Event::Text(text) => self.handle_text_input(text),
                _ => {}
            }
        }

        egui::CentralPanel::default().show(ctx, |ui| {
            ui.with_layout(egui::Layout::top_down(egui::Align::Max), |ui| {
                ui.label(
                    egui::RichText::new(self.engine.previous_display())
                        .monospace()
                        .size(16.0)
                        .weak(),
                );

                let mut current = egui::RichText::new(self.engine.current_display())
                    .monospace()
                    .size(36.0);
                if self.copied() {
                    current = current.color(egui::Color32::LIGHT_GREEN);
                }
                let display = ui
                    .add(egui::Label::new(current).sense(egui::Sense::click()))
                    .on_hover_text("Click to copy");
                if display.clicked() {
                    let text = self.engine.current_display().to_string();
                    ui.output_mut(|o| o.copied_text = text);
                    self.copied_at = Some(Instant::now());
                    ctx.request_repaint_after(COPIED_FLASH);
                }
            });

            ui.separator();

            let pending = self.engine.snapshot().operator;
            egui::Grid::new("keypad")
                .spacing([6.0, 6.0])
                .show(ui, |ui| {
                    for row in KEYPAD {
                        for label in row {
                            let selected = matches!(
                                Token::classify(label),
                                Some(Token::Operator(op)) if Some(op) == pending
                            );
                            let button = egui::Button::new(
                                egui::RichText::new(label).size(20.0),
                            )
                            .selected(selected);
                            if ui.add_sized(BUTTON_SIZE, button).clicked() {
                                self.engine.process_str(label);
                            }
                        }
                        ui.end_row();
                    }
                });
        });
    }
}

fn main() -> Result<(), eframe::Error> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("calc_mini=info")),
        )
        .init();

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default().with_inner_size([300.0, 420.0]),
        ..Default::default()
    };
    eframe::run_native(
        "calc_mini",
        options,
        Box::new(|_cc| Box::<CalcApp>::default()),
    )
}
