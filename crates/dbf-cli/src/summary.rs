use comfy_table::modifiers::UTF8_ROUND_CORNERS;
use comfy_table::presets::UTF8_FULL_CONDENSED;
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};

use dbf_cli::info::TableInfo;
use dbf_core::{FieldDescriptor, FieldKind};

pub fn print_info(info: &TableInfo) {
    println!("File: {}", info.source);
    println!("{}", info_table(info));
}

pub fn print_fields(fields: &[FieldDescriptor]) {
    println!("{}", fields_table(fields));
}

fn info_table(info: &TableInfo) -> Table {
    let mut table = Table::new();
    table.set_header(vec![header_cell("Property"), header_cell("Value")]);
    apply_table_style(&mut table);

    table.add_row(vec![Cell::new("dBASE version"), Cell::new(info.version_label())]);
    table.add_row(vec![
        Cell::new("Last update"),
        match &info.last_update {
            Some(date) => Cell::new(date),
            None => dim_cell("-"),
        },
    ]);
    table.add_row(vec![
        Cell::new("Records"),
        Cell::new(format!("{} (0x{:08x})", info.records, info.records)),
    ]);
    table.add_row(vec![
        Cell::new("Header length"),
        Cell::new(format!("{} (0x{:04x})", info.header_length, info.header_length)),
    ]);
    table.add_row(vec![
        Cell::new("Record length"),
        Cell::new(format!("{} (0x{:04x})", info.record_length, info.record_length)),
    ]);
    table.add_row(vec![Cell::new("Columns"), Cell::new(info.columns)]);
    table.add_row(vec![
        Cell::new("Language driver"),
        Cell::new(format!("0x{:02X} ({})", info.language_driver, info.encoding)),
    ]);
    table.add_row(vec![Cell::new("Flags"), flags_cell(info)]);
    table.add_row(vec![
        Cell::new("Schema"),
        match info.schema_mismatch {
            Some(mismatch) => Cell::new(format!(
                "record length {} but fields span {} bytes",
                mismatch.declared, mismatch.computed
            ))
            .fg(Color::Yellow)
            .add_attribute(Attribute::Bold),
            None => Cell::new("consistent").fg(Color::Green),
        },
    ]);
    table
}

fn fields_table(fields: &[FieldDescriptor]) -> Table {
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("#"),
        header_cell("Field name"),
        header_cell("Type"),
        header_cell("Kind"),
        header_cell("Address"),
        header_cell("Length"),
        header_cell("Decimals"),
        header_cell("Offset"),
    ]);
    apply_table_style(&mut table);
    for index in [0, 4, 5, 6, 7] {
        align_column(&mut table, index, CellAlignment::Right);
    }
    align_column(&mut table, 2, CellAlignment::Center);

    for (index, field) in fields.iter().enumerate() {
        table.add_row(vec![
            dim_cell(index),
            Cell::new(&field.name).add_attribute(Attribute::Bold),
            Cell::new(field.type_char()),
            kind_cell(field.kind),
            Cell::new(format!("{:x}", field.address)),
            Cell::new(field.length),
            Cell::new(field.decimals),
            Cell::new(field.offset),
        ]);
    }
    table
}

fn flags_cell(info: &TableInfo) -> Cell {
    let flags: Vec<&str> = [
        (info.incomplete_transaction, "incomplete transaction"),
        (info.encrypted, "encrypted"),
        (info.production_mdx, "production MDX"),
    ]
    .into_iter()
    .filter_map(|(set, label)| set.then_some(label))
    .collect();
    if flags.is_empty() {
        dim_cell("-")
    } else {
        Cell::new(flags.join(", ")).fg(Color::Yellow)
    }
}

fn kind_cell(kind: FieldKind) -> Cell {
    match kind {
        FieldKind::Unsupported(_) => Cell::new(kind).fg(Color::Red),
        FieldKind::Memo => Cell::new(kind).fg(Color::Yellow),
        _ => Cell::new(kind),
    }
}

fn apply_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_width(120);
}

fn align_column(table: &mut Table, index: usize, alignment: CellAlignment) {
    if let Some(column) = table.column_mut(index) {
        column.set_cell_alignment(alignment);
    }
}

fn header_cell(label: &str) -> Cell {
    Cell::new(label)
        .fg(Color::Cyan)
        .add_attribute(Attribute::Bold)
}

fn dim_cell<T: ToString>(value: T) -> Cell {
    Cell::new(value).fg(Color::DarkGrey)
}
