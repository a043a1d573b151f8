//! Terminal rendering for document lists and detail views.

use comfy_table::modifiers::{UTF8_ROUND_CORNERS, UTF8_SOLID_INNER_BORDERS};
use comfy_table::presets::UTF8_FULL;
use comfy_table::{
    Attribute, Cell, CellAlignment, Color, ColumnConstraint, ContentArrangement, Table, Width,
};

use brief_model::{Annotation, DocumentRecord, Priority};

/// Render the filtered document list.
pub fn print_document_table(
    documents: &[&DocumentRecord],
    is_bookmarked: impl Fn(&str) -> bool,
    progress_of: impl Fn(&str) -> u8,
) {
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Title"),
        header_cell("Priority"),
        header_cell("Summary"),
        header_cell("Audience"),
        header_cell("Progress"),
        header_cell("Bookmark"),
    ]);
    apply_list_table_style(&mut table);
    align_column(&mut table, 4, CellAlignment::Right);
    align_column(&mut table, 5, CellAlignment::Center);

    for doc in documents {
        let progress = progress_of(&doc.title);
        table.add_row(vec![
            Cell::new(&doc.title).add_attribute(Attribute::Bold),
            priority_cell(doc.priority),
            Cell::new(&doc.summary),
            Cell::new(doc.audience.join(", ")),
            progress_cell(progress),
            bookmark_cell(is_bookmarked(&doc.title)),
        ]);
    }

    println!("{table}");
    println!("Documents: {}", documents.len());
}

/// Render one document in full.
pub fn print_document_detail(doc: &DocumentRecord, progress: u8, annotations: &[Annotation]) {
    println!("{}", doc.title);
    println!("Priority: {}", doc.priority);
    println!("Progress: {progress}%");
    println!();
    println!("Summary");
    println!("  {}", doc.summary);
    println!("Key Takeaway");
    println!("  {}", doc.key_takeaway);
    println!("Decision/Action Required");
    println!("  {}", doc.action_required);
    println!("Target Audience");
    println!("  {}", doc.audience.join(", "));
    println!("Dependencies");
    if doc.dependencies.is_none() {
        println!("  No dependencies");
    } else {
        println!("  {}", doc.dependencies);
    }
    if !annotations.is_empty() {
        println!();
        println!("Annotations");
        print_annotations(annotations);
    }
}

/// Render a document's annotations.
pub fn print_annotations(annotations: &[Annotation]) {
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Id"),
        header_cell("Author"),
        header_cell("When"),
        header_cell("Note"),
    ]);
    apply_list_table_style(&mut table);
    align_column(&mut table, 0, CellAlignment::Right);

    for annotation in annotations {
        table.add_row(vec![
            Cell::new(annotation.id),
            Cell::new(&annotation.author),
            dim_cell(annotation.timestamp.format("%Y-%m-%d %H:%M").to_string()),
            Cell::new(&annotation.text),
        ]);
    }

    println!("{table}");
}

fn apply_list_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .apply_modifier(UTF8_SOLID_INNER_BORDERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_width(140);
    if table.column_count() >= 6 {
        table.set_constraints(vec![
            ColumnConstraint::UpperBoundary(Width::Fixed(32)),
            ColumnConstraint::LowerBoundary(Width::Fixed(10)),
            ColumnConstraint::UpperBoundary(Width::Percentage(40)),
            ColumnConstraint::UpperBoundary(Width::Fixed(28)),
            ColumnConstraint::LowerBoundary(Width::Fixed(8)),
            ColumnConstraint::LowerBoundary(Width::Fixed(8)),
        ]);
    }
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

fn priority_cell(priority: Priority) -> Cell {
    match priority {
        Priority::Critical => Cell::new("Critical")
            .fg(Color::Red)
            .add_attribute(Attribute::Bold),
        Priority::High => Cell::new("High").fg(Color::Yellow),
        Priority::Medium => Cell::new("Medium").fg(Color::Blue),
        Priority::Low => Cell::new("Low").fg(Color::Green),
        Priority::Unspecified => dim_cell("Unspecified"),
    }
}

/// Progress styling: complete green, past half blue, started yellow.
fn progress_cell(progress: u8) -> Cell {
    match progress {
        0 => dim_cell("-"),
        100 => Cell::new("100%")
            .fg(Color::Green)
            .add_attribute(Attribute::Bold),
        p if p > 50 => Cell::new(format!("{p}%")).fg(Color::Blue),
        p => Cell::new(format!("{p}%")).fg(Color::Yellow),
    }
}

fn bookmark_cell(bookmarked: bool) -> Cell {
    if bookmarked {
        Cell::new("★").fg(Color::Yellow)
    } else {
        dim_cell("-")
    }
}
