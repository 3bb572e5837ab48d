// src/gui/components/action_bar.rs

use eframe::egui::{self, widgets::Spinner};
use crate::{config::options::ExportFormat, gui::app::App};

pub fn draw(ui: &mut egui::Ui, app: &mut App) {
    // --- Format + output dir ---
    ui.horizontal(|ui| {
        let before = app.options.export.format;
        ui.label("Format:");
        ui.selectable_value(&mut app.options.export.format, ExportFormat::Csv, "CSV");
        ui.selectable_value(&mut app.options.export.format, ExportFormat::Tsv, "TSV");
        ui.selectable_value(&mut app.options.export.format, ExportFormat::Xlsx, "XLSX");
        if app.options.export.format != before {
            logf!("UI: Export format → {:?}", app.options.export.format);
        }

        ui.label("Output dir:");
        if ui
            .add(egui::TextEdit::singleline(&mut app.out_dir_text)
                .font(egui::TextStyle::Monospace))
            .changed()
        {
            logd!("UI: out_dir_text changed → {}", app.out_dir_text);
        }

        let mut sequential = app.options.fetch.sequential;
        if ui.checkbox(&mut sequential, "One source at a time").changed() {
            app.options.fetch.sequential = sequential;
            logf!("UI: sequential → {}", sequential);
        }
    });

    // Actions: Copy / Export / Fetch
    use crate::gui::actions;
    ui.horizontal(|ui| {
        if ui.button("Copy").on_hover_text("Copy this tab as TSV").clicked() {
            actions::copy(app, ui.ctx());
        }

        if ui.add_enabled(!app.running, egui::Button::new("Export")).clicked() {
            actions::export(app);
        }

        let fetch = ui.add_enabled(
            !app.running,
            egui::Button::new(egui::RichText::new("FETCH").strong()),
        );
        if fetch.clicked() {
            let ctx = ui.ctx().clone();
            actions::fetch(app, &ctx);
        }

        if app.running {
            ui.add(Spinner::new().size(16.0));
        }

        ui.label(app.status_text());
    });
}
