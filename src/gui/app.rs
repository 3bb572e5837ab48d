// src/gui/app.rs
use std::{
    error::Error,
    sync::{mpsc::Receiver, Arc, Mutex},
};

use eframe::egui;

use crate::{
    config::options::AppOptions,
    data::{self, NamedDataset},
    model::Source,
};

use super::{actions::Fetched, progress::{read_status, set_status}};

pub fn run(options: eframe::NativeOptions, app_options: AppOptions) -> Result<(), Box<dyn Error>> {
    eframe::run_native(
        "Language Ranking",
        options,
        Box::new(|_cc| Ok(Box::new(App::new(app_options)))),
    )?;
    Ok(())
}

/// One tab per output table.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Tab {
    Raw(Source),
    Average,
}

impl Tab {
    pub const ALL: [Tab; 4] = [
        Tab::Raw(Source::Tiobe),
        Tab::Raw(Source::Tecsify),
        Tab::Raw(Source::Pypl),
        Tab::Average,
    ];

    pub fn title(self) -> &'static str {
        match self {
            Tab::Raw(s) => s.label(),
            Tab::Average => "Average",
        }
    }

    pub fn index(self) -> usize {
        match self {
            Tab::Raw(Source::Tiobe) => 0,
            Tab::Raw(Source::Tecsify) => 1,
            Tab::Raw(Source::Pypl) => 2,
            Tab::Average => 3,
        }
    }

    /// Columns before this index hold text; the rest are numbers.
    pub fn first_numeric_col(self) -> usize {
        match self {
            Tab::Raw(_) => 2,
            Tab::Average => 1,
        }
    }
}

pub struct App {
    // single source of truth (UI thread only)
    pub options: AppOptions,
    pub tab: Tab,

    // one dataset per tab, in Tab::ALL order
    pub datasets: Vec<NamedDataset>,

    // output dir text field (mapped onto ExportOptions on export)
    pub out_dir_text: String,

    // status/progress (workers write here)
    pub status: Arc<Mutex<String>>,
    pub running: bool,
    pub inbox: Option<Receiver<crate::Result<Fetched>>>,
}

impl App {
    pub fn new(options: AppOptions) -> Self {
        let out_dir_text = options.export.out_dir().to_string_lossy().into_owned();
        logf!(
            "Init: languages={} out_dir={}",
            options.languages.len(),
            out_dir_text
        );

        Self {
            options,
            tab: Tab::Raw(Source::Tiobe),
            datasets: empty_datasets(),
            out_dir_text,
            status: Arc::new(Mutex::new(s!("Idle"))),
            running: false,
            inbox: None,
        }
    }

    #[inline]
    pub fn current(&self) -> &NamedDataset {
        &self.datasets[self.tab.index()]
    }

    #[inline]
    pub fn status<T: Into<String>>(&self, msg: T) {
        set_status(&self.status, msg);
    }

    #[inline]
    pub fn status_text(&self) -> String {
        read_status(&self.status)
    }

    /// Replace every tab's table with a fresh fetch.
    pub fn load(&mut self, fetched: &Fetched) {
        let mut sets = crate::pipeline::raw_datasets(&fetched.collected);
        sets.push(data::average_dataset(&fetched.averages));
        self.datasets = sets;
    }

    pub fn has_data(&self) -> bool {
        self.datasets.iter().any(|ds| !ds.data.is_empty())
    }
}

/// Headers only, so the tables show their columns before the first fetch.
fn empty_datasets() -> Vec<NamedDataset> {
    let mut sets: Vec<NamedDataset> = Source::ALL
        .into_iter()
        .map(|s| data::raw_dataset(s, &[]))
        .collect();
    sets.push(data::average_dataset(&[]));
    sets
}

impl eframe::App for App {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        super::actions::poll(self);

        egui::CentralPanel::default().show(ctx, |ui| {
            super::components::tabs::draw(ui, self);

            ui.separator();

            super::components::action_bar::draw(ui, self);

            ui.separator();

            super::components::data_table::draw(ui, self);
        });
    }
}
