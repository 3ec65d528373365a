use comfy_table::modifiers::UTF8_ROUND_CORNERS;
use comfy_table::presets::UTF8_FULL;
use comfy_table::{Cell, Color as TableColor, ContentArrangement, Table};

use ginger_shared::{DatabaseConfig, ReleaserConfig, Service};

fn create_table() -> Table {
    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic);
    table
}

fn enabled_cell(enabled: bool) -> Cell {
    if enabled {
        Cell::new("enabled").fg(TableColor::Green)
    } else {
        Cell::new("disabled").fg(TableColor::DarkGrey)
    }
}

fn optional_cell(value: Option<&str>) -> Cell {
    match value {
        Some(value) => Cell::new(value),
        None => Cell::new("-").fg(TableColor::DarkGrey),
    }
}

pub fn references_table(config: &ReleaserConfig) -> Table {
    let mut table = create_table();
    table.set_header(vec!["File", "Type", "Variable", "Output", "Value"]);

    for (reference, value) in config.rendered_references() {
        table.add_row(vec![
            Cell::new(&reference.file_name),
            Cell::new(reference.file_type),
            Cell::new(&reference.variable),
            Cell::new(reference.output_type),
            Cell::new(value).fg(TableColor::Cyan),
        ]);
    }
    table
}

pub fn databases_table<'a>(databases: impl IntoIterator<Item = &'a DatabaseConfig>) -> Table {
    let mut table = create_table();
    table.set_header(vec!["Name", "Type", "Port", "Studio", "Status", "Description"]);

    for db in databases {
        table.add_row(vec![
            Cell::new(db),
            Cell::new(db.db_type),
            Cell::new(&db.port),
            optional_cell(db.studio_port.as_deref()),
            enabled_cell(db.enable),
            Cell::new(&db.description),
        ]);
    }
    table
}

pub fn services_table(services: &[Service]) -> Table {
    let mut table = create_table();
    table.set_header(vec!["Service", "Schema URL"]);

    for service in services {
        table.add_row(vec![
            Cell::new(&service.name),
            Cell::new(&service.schema_url),
        ]);
    }
    table
}
