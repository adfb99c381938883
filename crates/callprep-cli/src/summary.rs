use anyhow::Result;
use comfy_table::modifiers::UTF8_ROUND_CORNERS;
use comfy_table::presets::UTF8_FULL_CONDENSED;
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};

use callprep_model::{FieldAliases, IdentityRecord, LookupRequest, ValidationOutcome};
use callprep_validate::normalization::DOB_FORMATS;

use crate::cli::{OutputFormatArg, ValidateArgs};
use crate::types::{BatchResult, LineResult};

pub fn print_outcome(outcome: &ValidationOutcome, args: &ValidateArgs) -> Result<()> {
    if args.output == OutputFormatArg::Json {
        match outcome.record() {
            Some(record) if args.lookup => {
                println!("{}", serde_json::to_string_pretty(&LookupRequest::from(record))?);
            }
            _ => println!("{}", serde_json::to_string_pretty(outcome)?),
        }
        return Ok(());
    }

    match (outcome.record(), outcome.error()) {
        (Some(record), _) if args.lookup => {
            print_lookup(&LookupRequest::from(record));
        }
        (Some(record), _) => print_record(record),
        (None, Some(error)) if args.guidance => eprintln!("{}", error.guidance()),
        (None, Some(error)) => eprintln!("error: {} ({})", error, error.kind()),
        (None, None) => {}
    }
    Ok(())
}

fn print_record(record: &IdentityRecord) {
    let mut table = Table::new();
    apply_table_style(&mut table);
    table.add_row(vec![label_cell("Method"), Cell::new(record.scheme())]);
    match record {
        IdentityRecord::Id(id) => {
            table.add_row(vec![label_cell("Subscriber ID"), Cell::new(id.subscriber_id())]);
            table.add_row(vec![label_cell("Member ID"), Cell::new(id.member_id())]);
            table.add_row(vec![label_cell("Full ID"), Cell::new(id.full_id())]);
        }
        IdentityRecord::NameDob(person) => {
            table.add_row(vec![label_cell("Name"), Cell::new(person.display_name())]);
            table.add_row(vec![label_cell("First name"), Cell::new(person.first_name())]);
            table.add_row(vec![label_cell("Last name"), Cell::new(person.last_name())]);
            table.add_row(vec![label_cell("DOB"), Cell::new(person.dob())]);
        }
    }
    println!("{table}");
}

fn print_lookup(request: &LookupRequest) {
    let mut table = Table::new();
    apply_table_style(&mut table);
    let fields = [
        ("subscriberId", &request.subscriber_id),
        ("memberId", &request.member_id),
        ("firstName", &request.first_name),
        ("lastName", &request.last_name),
        ("birthDate", &request.birth_date),
    ];
    for (name, value) in fields {
        let value_cell = match value {
            Some(value) => Cell::new(value),
            None => dim_cell("-"),
        };
        table.add_row(vec![label_cell(name), value_cell]);
    }
    println!("{table}");
}

pub fn print_batch(result: &BatchResult, output: OutputFormatArg) -> Result<()> {
    if output == OutputFormatArg::Json {
        for entry in &result.entries {
            let line = match &entry.result {
                LineResult::Validated(outcome) => serde_json::json!({
                    "line": entry.line,
                    "outcome": outcome,
                }),
                LineResult::Unreadable(error) => serde_json::json!({
                    "line": entry.line,
                    "unreadable": error,
                }),
            };
            println!("{}", serde_json::to_string(&line)?);
        }
        return Ok(());
    }

    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Line"),
        header_cell("Method"),
        header_cell("Result"),
        header_cell("Detail"),
    ]);
    apply_table_style(&mut table);
    if let Some(column) = table.column_mut(0) {
        column.set_cell_alignment(CellAlignment::Right);
    }
    for entry in &result.entries {
        let row = match &entry.result {
            LineResult::Validated(outcome) => match (outcome.record(), outcome.error()) {
                (Some(record), _) => vec![
                    Cell::new(entry.line),
                    Cell::new(record.scheme()),
                    status_cell("accepted", Color::Green),
                    Cell::new(record_summary(record)),
                ],
                (None, Some(error)) => vec![
                    Cell::new(entry.line),
                    dim_cell("-"),
                    status_cell(error.kind().code(), Color::Red),
                    Cell::new(error),
                ],
                (None, None) => continue,
            },
            LineResult::Unreadable(error) => vec![
                Cell::new(entry.line),
                dim_cell("-"),
                status_cell("unreadable", Color::Yellow),
                Cell::new(error),
            ],
        };
        table.add_row(row);
    }
    println!("{table}");
    println!(
        "Accepted: {}  Rejected: {}  Unreadable: {}",
        result.accepted, result.rejected, result.unreadable
    );
    Ok(())
}

pub fn print_formats(aliases: &FieldAliases) {
    println!("Free text:");
    println!("  1. 050028449/00   9 digits, '/' or '\\', 2 digits");
    println!("  2. 05002844900    11 digits, split 9/2");
    println!("  3. First Last, DOB  comma required; DOB formats: {}", DOB_FORMATS.join(", "));
    println!();
    println!("Structured fields (first non-empty alias wins):");
    let mut table = Table::new();
    table.set_header(vec![header_cell("Group"), header_cell("Aliases")]);
    apply_table_style(&mut table);
    for (group, keys) in aliases.groups() {
        table.add_row(vec![label_cell(group), Cell::new(keys.join(", "))]);
    }
    println!("{table}");
}

fn record_summary(record: &IdentityRecord) -> String {
    match record {
        IdentityRecord::Id(id) => id.full_id().to_string(),
        IdentityRecord::NameDob(person) => format!("{}, {}", person.display_name(), person.dob()),
    }
}

fn apply_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_width(100);
}

fn header_cell(label: &str) -> Cell {
    Cell::new(label)
        .add_attribute(Attribute::Bold)
        .fg(Color::Cyan)
}

fn label_cell(label: &str) -> Cell {
    Cell::new(label).add_attribute(Attribute::Bold)
}

fn status_cell(label: &str, color: Color) -> Cell {
    Cell::new(label).fg(color).add_attribute(Attribute::Bold)
}

fn dim_cell<T: ToString>(value: T) -> Cell {
    Cell::new(value).add_attribute(Attribute::Dim)
}
