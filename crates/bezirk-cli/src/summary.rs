use bezirk_cli::batch::BatchSummary;
use bezirk_core::{Parity, RangeTest, RuleSet, Session};
use bezirk_ingest::{StreetTable, TableImport};
use bezirk_model::{ResolutionResult, ResolutionSource};
use comfy_table::modifiers::UTF8_ROUND_CORNERS;
use comfy_table::presets::UTF8_FULL_CONDENSED;
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};

pub fn print_resolution(session: &Session, result: &ResolutionResult) {
    println!("Street:   {}", result.display_name);
    if result.house_number.is_empty() {
        println!("Number:   -");
    } else {
        println!("Number:   {}", result.house_number);
    }
    println!(
        "District: {} ({})",
        session.translate(&result.district),
        result.source.as_str()
    );
    if let Some(spoken) = session.announce(result) {
        println!("Speech:   \"{}\" [{}]", spoken.text, spoken.locale);
    }
    if let Some(detection) = &result.detection {
        if let Some(street_box) = detection.street_box {
            println!("Street box: {:?}", street_box.coordinates());
        }
        if let Some(number_box) = detection.number_box {
            println!("Number box: {:?}", number_box.coordinates());
        }
    }
    if result.source == ResolutionSource::Unknown && !session.has_table() {
        eprintln!("hint: no street table loaded; pass --table to resolve more streets");
    }
}

pub fn print_batch_summary(summary: &BatchSummary) {
    let mut table = Table::new();
    table.set_header(vec![header_cell("Source"), header_cell("Addresses")]);
    apply_table_style(&mut table);
    align_column(&mut table, 1, CellAlignment::Right);
    table.add_row(vec![
        Cell::new("rule"),
        count_cell(summary.by_rule, Color::Green),
    ]);
    table.add_row(vec![
        Cell::new("table"),
        count_cell(summary.by_table, Color::Green),
    ]);
    table.add_row(vec![
        Cell::new("unknown"),
        count_cell(summary.unknown, Color::Yellow),
    ]);
    table.add_row(vec![
        Cell::new("TOTAL")
            .fg(Color::Cyan)
            .add_attribute(Attribute::Bold),
        Cell::new(summary.total).add_attribute(Attribute::Bold),
    ]);
    eprintln!("{table}");
}

pub fn print_rules(rules: &RuleSet) {
    if rules.is_empty() {
        println!("No street rules.");
        return;
    }
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Street"),
        header_cell("Marker"),
        header_cell("Parity"),
        header_cell("Numbers"),
        header_cell("District"),
    ]);
    apply_table_style(&mut table);
    align_column(&mut table, 2, CellAlignment::Center);
    for street in rules.streets() {
        for (index, branch) in street.branches.iter().enumerate() {
            let (name, marker) = if index == 0 {
                (
                    Cell::new(&street.display_name)
                        .fg(Color::Blue)
                        .add_attribute(Attribute::Bold),
                    Cell::new(&street.marker),
                )
            } else {
                (dim_cell(""), dim_cell(""))
            };
            table.add_row(vec![
                name,
                marker,
                parity_cell(branch.parity),
                Cell::new(describe_ranges(&branch.ranges)),
                Cell::new(&branch.district),
            ]);
        }
    }
    println!("{table}");
}

pub fn print_table_entries(street_table: &StreetTable) {
    if street_table.is_empty() {
        println!("Street table is empty.");
        return;
    }
    let mut table = Table::new();
    table.set_header(vec![header_cell("Street key"), header_cell("District")]);
    apply_table_style(&mut table);
    for (key, district) in street_table.iter() {
        table.add_row(vec![Cell::new(key), Cell::new(district)]);
    }
    println!("{table}");
}

pub fn print_import(import: &TableImport) {
    println!("{} streets loaded.", import.table.len());
    if !import.has_diagnostics() {
        return;
    }
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Line"),
        header_cell("Issue"),
        header_cell("Detail"),
    ]);
    apply_table_style(&mut table);
    align_column(&mut table, 0, CellAlignment::Right);
    let mut rows: Vec<(usize, Cell, String)> = Vec::new();
    for skipped in &import.skipped {
        rows.push((
            skipped.line_number,
            Cell::new("SKIPPED").fg(Color::Yellow),
            skipped.reason.as_str().to_string(),
        ));
    }
    for duplicate in &import.duplicates {
        rows.push((
            duplicate.line_number,
            Cell::new("OVERRIDES").fg(Color::Yellow),
            format!(
                "{}: {} -> {}",
                duplicate.key, duplicate.previous_district, duplicate.district
            ),
        ));
    }
    rows.sort_by_key(|(line, _, _)| *line);
    for (line, issue, detail) in rows {
        table.add_row(vec![Cell::new(line), issue, Cell::new(detail)]);
    }
    println!();
    println!("Ignored lines:");
    println!("{table}");
}

fn describe_ranges(ranges: &[RangeTest]) -> String {
    if ranges.is_empty() {
        return "all".to_string();
    }
    ranges
        .iter()
        .map(|range| match range {
            RangeTest::Numbers { from, to } => format!("{from}-{to}"),
            RangeTest::Suffixed { from, to } if from == to => from.to_string(),
            RangeTest::Suffixed { from, to } => format!("{from}-{to}"),
        })
        .collect::<Vec<_>>()
        .join(", ")
}

fn parity_cell(parity: Parity) -> Cell {
    match parity {
        Parity::Any => dim_cell(parity.as_str()),
        Parity::Even | Parity::Odd => Cell::new(parity.as_str()),
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

fn count_cell(count: usize, color: Color) -> Cell {
    if count > 0 {
        Cell::new(count).fg(color).add_attribute(Attribute::Bold)
    } else {
        dim_cell(count)
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
