#![windows_subsystem = "windows"]

use collatz_viz::*;
use eframe::egui;
use egui_plot::{Line, MarkerShape, Plot, PlotPoint, PlotPoints, Points, Text};

fn main() -> eframe::Result<()> {
    init_tracing();

    let config = Config::from_env().unwrap_or_else(|e| {
        tracing::warn!(error = %e, "falling back to default config");
        Config::default()
    });

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1200.0, 800.0])
            .with_maximized(true)
            .with_title("Collatz Conjecture Visualization"),
        ..Default::default()
    };
    eframe::run_native(
        "collatz-viz",
        options,
        Box::new(move |_cc| Ok(Box::new(CollatzApp::new(&config)))),
    )
}

// ─── データ構造 ─────────────────────────────────────

struct CollatzApp {
    engine: SequenceEngine<u64>,
    start_input: String,
    end_input: String,
    number_input: String,
    /// 一覧欄の行（エラー時はメッセージ1行）
    list: Vec<String>,
    /// 直近に表示した軌道。入力エラーでは消さない
    plot: Option<SequencePlot>,
}

impl CollatzApp {
    fn new(config: &Config) -> Self {
        let mut app = Self {
            engine: SequenceEngine::from_config(config),
            start_input: config.default_start.clone(),
            end_input: config.default_end.clone(),
            number_input: config.default_number.clone(),
            list: Vec::new(),
            plot: None,
        };
        // 起動時に初期区間の一覧を埋める
        app.update_list();
        app
    }

    fn update_list(&mut self) {
        let output = run_range_query(&mut self.engine, &self.start_input, &self.end_input);
        self.list = output.lines();
        tracing::debug!(lines = self.list.len(), cached = self.engine.len(), "list updated");
    }

    fn show_sequence(&mut self) {
        match run_sequence_query(&mut self.engine, &self.number_input) {
            Ok(plot) => self.plot = Some(plot),
            Err(msg) => self.list = vec![msg],
        }
    }
}

impl eframe::App for CollatzApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        let panel_width = ctx.screen_rect().width() * 0.25;

        egui::SidePanel::left("controls")
            .resizable(false)
            .exact_width(panel_width)
            .show(ctx, |ui| self.ui_controls(ui));

        egui::CentralPanel::default().show(ctx, |ui| self.ui_plot(ui));
    }
}

impl CollatzApp {
    // ─── 左パネル: 入力欄と一覧 ──────────────────────
    fn ui_controls(&mut self, ui: &mut egui::Ui) {
        ui.horizontal_top(|ui| {
            ui.vertical(|ui| {
                egui::Grid::new("range_inputs").show(ui, |ui| {
                    ui.label("Start:");
                    ui.add(egui::TextEdit::singleline(&mut self.start_input).desired_width(80.0));
                    ui.end_row();
                    ui.label("End:");
                    ui.add(egui::TextEdit::singleline(&mut self.end_input).desired_width(80.0));
                    ui.end_row();
                });
                if ui.button("Update").clicked() {
                    self.update_list();
                }
            });

            ui.separator();

            ui.vertical(|ui| {
                ui.horizontal(|ui| {
                    ui.label("Number:");
                    ui.add(egui::TextEdit::singleline(&mut self.number_input).desired_width(80.0));
                });
                if ui.button("Show Sequence").clicked() {
                    self.show_sequence();
                }
            });
        });

        ui.add_space(10.0);
        ui.heading("Iterations List");
        ui.separator();

        let row_height = ui.text_style_height(&egui::TextStyle::Body);
        egui::ScrollArea::vertical()
            .auto_shrink([false; 2])
            .show_rows(ui, row_height, self.list.len(), |ui, rows| {
                for line in &self.list[rows] {
                    ui.label(line);
                }
            });
    }

    // ─── 中央: 軌道グラフ ──────────────────────────
    fn ui_plot(&mut self, ui: &mut egui::Ui) {
        ui.vertical_centered(|ui| {
            ui.heading(query::PLOT_TITLE);
        });

        Plot::new("collatz_path")
            .x_axis_label(query::X_AXIS_LABEL)
            .y_axis_label(query::Y_AXIS_LABEL)
            .show_grid(true)
            .show(ui, |plot_ui| {
                let Some(plot) = &self.plot else { return };
                let xy = plot.xy();
                plot_ui.line(Line::new(PlotPoints::new(xy.clone())));
                plot_ui.points(
                    Points::new(PlotPoints::new(xy))
                        .shape(MarkerShape::Circle)
                        .radius(4.0),
                );
                // 各点の上に値を表示
                for p in &plot.points {
                    plot_ui.text(
                        Text::new(PlotPoint::new(p.step as f64, p.value), p.label.clone())
                            .anchor(egui::Align2::CENTER_BOTTOM),
                    );
                }
            });
    }
}
