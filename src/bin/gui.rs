// src/bin/gui.rs
#![cfg_attr(target_os = "windows", windows_subsystem = "windows")]
use eframe::egui::{IconData, ViewportBuilder};
use lang_rank::{
    config::file::load_options,
    gui,
    log::{self, LogTarget},
};

fn app_icon() -> IconData {
    match image::load_from_memory(include_bytes!(concat!(
        env!("CARGO_MANIFEST_DIR"),
        "/assets/icon.png"
    ))) {
        Ok(img) => {
            let rgba = img.to_rgba8();
            let (w, h) = rgba.dimensions();
            IconData { rgba: rgba.into_raw(), width: w, height: h }
        }
        Err(e) => {
            eprintln!("Icon decode failed: {}", e);
            IconData::default()
        }
    }
}

fn main() {
    if let Err(e) = log::init(LogTarget::default_file(), false) {
        eprintln!("Logging disabled: {}", e);
    }

    let app_options = match load_options(None) {
        Ok(o) => o,
        Err(e) => {
            eprintln!("Config: {}", e);
            std::process::exit(1);
        }
    };

    let options = eframe::NativeOptions {
        // eframe 0.32: icon set via viewport builder
        viewport: ViewportBuilder::default()
            .with_inner_size([760.0, 520.0])
            .with_icon(app_icon()),
        ..Default::default()
    };

    if let Err(e) = gui::run(options, app_options) {
        eprintln!("GUI failed: {}", e);
        std::process::exit(1);
    }
}
