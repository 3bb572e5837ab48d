// src/gui/components/tabs.rs
//
// Renders the top tabs and performs the tab switch itself.
// Every tab's table is already in memory; switching only changes which one is drawn.

use eframe::egui;
use crate::gui::app::{App, Tab};

pub fn draw(ui: &mut egui::Ui, app: &mut App) {
    ui.horizontal_wrapped(|ui| {
        ui.spacing_mut().item_spacing.x = 8.0;

        for tab in Tab::ALL {
            let selected = tab == app.tab;
            let rows = app.datasets[tab.index()].data.row_count();
            let title = if rows > 0 {
                format!("{} ({})", tab.title(), rows)
            } else {
                s!(tab.title())
            };

            if ui.selectable_label(selected, title).clicked() && !selected {
                logf!("UI: Tab switch {:?} → {:?}", app.tab, tab);
                app.tab = tab;
            }
        }
    });
}
