// src/gui/components/data_table.rs
//
// Draws the current tab's table. Purely a view over App::datasets.

use eframe::egui::{self, Align, Layout, RichText, TextWrapMode};
use egui_extras::{Column, TableBuilder};
use crate::gui::app::App;

const TEXT_COL_WIDTH: f32 = 140.0;
const NUM_COL_WIDTH: f32 = 90.0;

pub fn draw(ui: &mut egui::Ui, app: &mut App) {
    let tab = app.tab;
    let ds = &app.datasets[tab.index()].data;
    let cols = ds.headers.len();
    let first_numeric = tab.first_numeric_col();

    if ds.is_empty() {
        ui.label(RichText::new("No data yet. Press FETCH.").weak());
    }

    // Ensure scroll bars allocate space (not floating over content)
    {
        let s = &mut ui.style_mut().spacing.scroll;
        s.floating = false;
        s.bar_width = 10.0;
        s.handle_min_length = 48.0;
    }

    let mut table = TableBuilder::new(ui)
        .striped(true)
        .min_scrolled_height(0.0)
        .id_salt(("table_state", tab.title()));
    for ci in 0..cols {
        let w = if ci < first_numeric { TEXT_COL_WIDTH } else { NUM_COL_WIDTH };
        table = table.column(Column::initial(w).resizable(true).clip(true).at_least(20.0));
    }

    table
        .header(24.0, |mut header| {
            for (ci, text) in ds.headers.iter().enumerate() {
                header.col(|ui| {
                    ui.style_mut().wrap_mode = Some(TextWrapMode::Extend);
                    cell(ui, RichText::new(text).strong(), ci >= first_numeric);
                });
            }
        })
        .body(|body| {
            body.rows(20.0, ds.row_count(), |mut row| {
                let Some(data) = ds.rows.get(row.index()) else { return };
                for ci in 0..cols {
                    let text = data.get(ci).map(String::as_str).unwrap_or("");
                    row.col(|ui| {
                        ui.style_mut().wrap_mode = Some(TextWrapMode::Extend);
                        cell(ui, RichText::new(text), ci >= first_numeric);
                    });
                }
            });
        });
}

fn cell(ui: &mut egui::Ui, text: RichText, numeric: bool) {
    if numeric {
        ui.with_layout(Layout::right_to_left(Align::Center), |ui| { ui.label(text); });
    } else {
        ui.with_layout(Layout::left_to_right(Align::Center), |ui| { ui.label(text); });
    }
}
