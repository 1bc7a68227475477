use anyhow::{Context, Result};
use clap::Parser;

use emoji_picker::catalog::{Catalog, Category};
use emoji_picker::cli::{Action, CliArgs, StartupConfig};
use emoji_picker::config::PickerConfig;
use emoji_picker::config_paths::ConfigPaths;
use emoji_picker::model::PickerModel;
use emoji_picker::runtime::{HostList, Picker, ScrollError};
use emoji_picker::view::{emoji_rows, CategorySection};

/// Host list stand-in that prints scroll requests
struct ConsoleHost;

impl HostList for ConsoleHost {
    fn scroll_to_offset(&mut self, index: usize, offset: f32) -> Result<(), ScrollError> {
        if index >= Category::COUNT {
            return Err(ScrollError::OutOfRange { index });
        }
        println!("scroll to item {} at offset {}", index, offset);
        Ok(())
    }
}

fn build_model(startup: &StartupConfig) -> Result<PickerModel> {
    let capabilities = startup.platform.capabilities();
    // --dataset wins over a dataset installed in the config directory
    let dataset = startup
        .dataset
        .clone()
        .or_else(|| ConfigPaths::user().and_then(|paths| paths.dataset_file()));
    let catalog = match &dataset {
        Some(path) => Catalog::from_path(path, capabilities),
        None => Catalog::builtin(capabilities),
    }
    .context("Failed to build emoji catalog")?;

    Ok(PickerModel::new(
        catalog,
        capabilities,
        startup.config.display(),
        startup.config.labels(),
    ))
}

fn print_browse(model: &PickerModel) {
    for category in Category::ALL {
        let section = CategorySection::new(model, category);
        match model.layouts.for_category(category) {
            Some(entry) => println!(
                "{} (offset {}, length {})",
                section.label, entry.offset, entry.length
            ),
            None => println!("{}", section.label),
        }
        for row in section.rows {
            println!("  {}", row.join(" "));
        }
    }
}

fn print_layout(model: &PickerModel) {
    println!("{:<20} {:>6} {:>8} {:>8}", "category", "index", "offset", "length");
    for category in Category::ALL {
        if let Some(entry) = model.layouts.for_category(category) {
            println!(
                "{:<20} {:>6} {:>8} {:>8}",
                model.category_label(category),
                entry.index,
                entry.offset,
                entry.length
            );
        }
    }
    println!("total height: {}", model.layouts.total_length());
}

fn main() -> Result<()> {
    emoji_picker::tracing::init();

    let args = CliArgs::parse();
    let file_config = match &args.config {
        Some(path) => PickerConfig::load_from(path),
        None => PickerConfig::load(),
    };
    let startup = args
        .into_config(file_config)
        .map_err(|e| anyhow::anyhow!(e))?;

    let model = build_model(&startup)?;
    let columns = model.display().columns;
    let mut picker = Picker::new(model, ConsoleHost).on_emoji_selected(|glyph| {
        println!("selected {}", glyph);
    });

    match startup.action {
        Action::Browse => print_browse(picker.model()),
        Action::Layout => print_layout(picker.model()),
        Action::Search(query) => {
            picker.query_changed(&query);
            match &picker.model().search_results {
                Some(results) if results.has_matches() => {
                    for row in emoji_rows(results.glyphs(), columns) {
                        println!("{}", row.join(" "));
                    }
                }
                Some(_) => println!("No emoji found for '{}'", query),
                None => println!("Query '{}' is too short to search", query),
            }
        }
        Action::Jump(category) => {
            if !picker.model().capabilities.shortcuts_enabled {
                println!("Shortcuts are disabled on this platform");
            }
            picker.shortcut_pressed(category);
        }
    }

    Ok(())
}
