// ui.rs - Controls, hex grid view and the stats side panel

use eframe::egui;
use egui::{Color32, Shape, Stroke, Vec2};
use std::time::{Duration, Instant};

use hexsim::{patterns, Grid, Sandbox, Tick};

use crate::hex::Layout;
use crate::HexLife;

impl eframe::App for HexLife {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        if ctx.input(|i| i.key_pressed(egui::Key::Enter)) {
            let running = !self.session.is_running();
            self.session.set_running(running);
            self.last_update = Instant::now();
        }

        // Auto-update if running
        if self.session.is_running() && self.last_update.elapsed() >= self.update_interval {
            self.advance();
            self.last_update = Instant::now();
        }

        egui::TopBottomPanel::top("controls").show(ctx, |ui| self.controls(ui));

        egui::SidePanel::right("stats_panel")
            .exact_width(self.panel_width)
            .resizable(false)
            .show(ctx, |ui| self.stats_panel(ui));

        egui::CentralPanel::default().show(ctx, |ui| {
            egui::ScrollArea::both().show(ui, |ui| self.grid_view(ui));
        });

        if self.session.is_running() {
            let remaining = self.update_interval.saturating_sub(self.last_update.elapsed());
            ctx.request_repaint_after(remaining);
        }
    }
}

impl HexLife {
    fn advance(&mut self) {
        match self.update_generation() {
            Ok(Tick::Advanced) => {}
            Ok(Tick::Cycle) => log::debug!("cycle reached at generation {}", self.session.generation()),
            Err(e) => {
                log::error!("generation step failed: {e}");
                self.session.pause();
            }
        }
    }

    fn controls(&mut self, ui: &mut egui::Ui) {
        ui.horizontal(|ui| {
            let button_text = if self.session.is_running() { "⏸ Pause" } else { "▶ Start" };
            if ui.button(button_text).clicked() {
                let running = !self.session.is_running();
                self.session.set_running(running);
                self.last_update = Instant::now();
            }

            if ui.button("⏭ Step").clicked() {
                self.session.pause();
                self.advance();
            }

            if ui.button("⏹ Clear").clicked() {
                self.session.clear_grid();
            }

            if ui.button("🎲 Random").clicked() {
                self.apply_random_pattern();
            }

            ui.separator();

            // Pattern dropdown
            ui.label("Pattern:");
            egui::ComboBox::from_id_source("pattern_selector")
                .selected_text(patterns::PATTERNS[self.selected_pattern].name)
                .show_ui(ui, |ui| {
                    for (i, pattern) in patterns::PATTERNS.iter().enumerate() {
                        ui.selectable_value(&mut self.selected_pattern, i, pattern.name);
                    }
                });

            if ui.button("Apply Pattern").clicked() {
                self.session.apply_selected_pattern(&patterns::PATTERNS[self.selected_pattern]);
            }
        });

        ui.horizontal(|ui| {
            ui.label("Speed:");
            let mut speed = 1000.0 / self.update_interval.as_millis().max(1) as f32;
            if ui.add(egui::Slider::new(&mut speed, 0.5..=60.0).suffix(" gen/sec")).changed() {
                self.update_interval = Duration::from_millis((1000.0 / speed) as u64);
            }

            ui.separator();

            ui.label("Live:");
            ui.color_edit_button_srgba(&mut self.live_color);
            ui.label("Dead:");
            ui.color_edit_button_srgba(&mut self.dead_color);

            ui.separator();
            ui.label("Click cells to toggle them. Enter starts or pauses.");
        });
    }

    fn grid_view(&mut self, ui: &mut egui::Ui) {
        let layout = self.layout;
        let (response, painter) = ui.allocate_painter(layout.extent(), egui::Sense::click());
        let origin = response.rect.min;

        // Handle clicking before drawing so the toggle shows this frame
        if response.clicked() {
            if let Some(pos) = response.interact_pointer_pos() {
                match layout.cell_at(pos - origin) {
                    Some((row, col)) => self.toggle_cell(row, col),
                    None => log::debug!("click at {pos:?} is outside the grid"),
                }
            }
        }

        let visible = painter.clip_rect().expand(layout.size);
        paint_hexes(&painter, &layout, origin, visible, self.session.grid(), |alive| {
            if alive {
                (self.live_color, self.dead_color)
            } else {
                (self.dead_color, Color32::GRAY)
            }
        });
    }

    fn stats_panel(&mut self, ui: &mut egui::Ui) {
        ui.add_space(4.0);
        ui.label(format!("Generation: {}", self.session.generation()));

        ui.add_space(8.0);
        ui.heading("Start Pattern");

        let side = self.thumbnail_size;
        let (response, painter) = ui.allocate_painter(Vec2::splat(side), egui::Sense::hover());
        match self.session.start_pattern() {
            Some(window) => {
                let layout = Layout::fitting(side, window.rows(), window.cols());
                // Inverted coloring: live cells take the dead color and vice versa
                paint_hexes(&painter, &layout, response.rect.min, response.rect, &window, |alive| {
                    if alive {
                        (self.dead_color, Color32::GRAY)
                    } else {
                        (self.live_color, self.dead_color)
                    }
                });
            }
            None => {
                painter.rect_stroke(response.rect, 0.0, Stroke::new(0.5, Color32::GRAY));
            }
        }

        ui.add_space(8.0);
        ui.heading(format!("Live cells: {}", self.session.live_cells()));

        ui.separator();

        let population = self.session.population();
        ui.label(format!("Alive now: {}", population.live));
        ui.label(format!("Dead now: {}", population.dead));
        ui.label(format!("Population: {:.1}%", population.percent));
        ui.label(if self.session.is_running() { "Running" } else { "Paused" });
    }
}

/// Draws every hexagon of `grid` whose center falls inside `visible`.
/// `colors` maps a cell state to `(fill, border)`.
fn paint_hexes(
    painter: &egui::Painter,
    layout: &Layout,
    origin: egui::Pos2,
    visible: egui::Rect,
    grid: &Grid,
    colors: impl Fn(bool) -> (Color32, Color32),
) {
    for row in 0..grid.rows() {
        let cells = grid.row(row as isize);
        for (col, &alive) in cells.iter().enumerate() {
            let center = origin + layout.center(row, col);
            if !visible.contains(center) {
                continue;
            }
            let (fill, border) = colors(alive);
            painter.add(Shape::convex_polygon(
                layout.corners(center).to_vec(),
                fill,
                Stroke::new(0.5, border),
            ));
        }
    }
}
