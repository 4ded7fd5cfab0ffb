//! Terminal rendering of list views, records, forms and errors.

use comfy_table::modifiers::UTF8_ROUND_CORNERS;
use comfy_table::presets::UTF8_FULL_CONDENSED;
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};

use roster_model::{Employee, SortColumn, SortKey, SortOrder, SortState, Toast, ViewMode};
use roster_state::{EmployeeForm, ListView};
use roster_validate::{Field, ValidationResult};

/// Cards per row in grid mode.
const GRID_COLUMNS: usize = 3;

pub fn apply_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_width(160);
}

/// The list page: records as a table or grid, the page footer and any
/// visible toast.
pub fn render_list(view: &ListView, sort: SortState, toast: &Toast) -> String {
    let mut out = String::new();
    if toast.is_visible {
        out.push_str(&render_toast(toast));
        out.push('\n');
    }
    if view.employees.is_empty() {
        out.push_str("No employees found.\n");
    } else {
        let table = match view.view_mode {
            ViewMode::Table => list_table(&view.employees, sort),
            ViewMode::Grid => list_grid(&view.employees),
        };
        out.push_str(&table.to_string());
        out.push('\n');
    }
    out.push_str(&format!(
        "Page {} of {} ({} matching)\n",
        view.current_page, view.total_pages, view.match_count
    ));
    out
}

pub fn render_toast(toast: &Toast) -> String {
    format!("» {}", toast.message)
}

fn list_table(employees: &[Employee], sort: SortState) -> Table {
    let mut table = Table::new();
    table.set_header(
        SortColumn::ALL
            .iter()
            .map(|column| header_cell(*column, sort))
            .collect::<Vec<_>>(),
    );
    apply_table_style(&mut table);
    if let Some(column) = table.column_mut(0) {
        column.set_cell_alignment(CellAlignment::Right);
    }
    for employee in employees {
        table.add_row(
            SortColumn::ALL
                .iter()
                .map(|column| Cell::new(cell_text(employee, *column)))
                .collect::<Vec<_>>(),
        );
    }
    table
}

fn list_grid(employees: &[Employee]) -> Table {
    let mut table = Table::new();
    apply_table_style(&mut table);
    for row in employees.chunks(GRID_COLUMNS) {
        table.add_row(row.iter().map(card_cell).collect::<Vec<_>>());
    }
    table
}

fn card_cell(employee: &Employee) -> Cell {
    Cell::new(format!(
        "#{} {}\n{} / {}\n{}\n{}\nHired {}",
        employee.id,
        employee.full_name(),
        employee.department,
        employee.position,
        employee.email_address,
        employee.phone_number,
        employee.date_of_employment,
    ))
}

fn header_cell(column: SortColumn, sort: SortState) -> Cell {
    if column != sort.column {
        return Cell::new(column.label()).add_attribute(Attribute::Bold);
    }
    let arrow = match sort.order {
        SortOrder::Asc => "▲",
        SortOrder::Desc => "▼",
    };
    Cell::new(format!("{} {arrow}", column.label()))
        .fg(Color::Cyan)
        .add_attribute(Attribute::Bold)
}

fn cell_text(employee: &Employee, column: SortColumn) -> String {
    match employee.sort_key(column) {
        SortKey::Number(value) => value.to_string(),
        SortKey::Text(value) => value.to_string(),
    }
}

/// One record as a two-column table.
pub fn render_employee(employee: &Employee) -> String {
    let mut table = Table::new();
    apply_table_style(&mut table);
    for column in SortColumn::ALL {
        table.add_row(vec![
            Cell::new(column.label()).add_attribute(Attribute::Bold),
            Cell::new(cell_text(employee, column)),
        ]);
    }
    format!("{table}\n")
}

/// The working record of a form, with errors from the last submit.
pub fn render_form(title: &str, form: &EmployeeForm) -> String {
    let mut table = Table::new();
    table.set_header(vec![
        Cell::new("Field").add_attribute(Attribute::Bold),
        Cell::new("Value").add_attribute(Attribute::Bold),
        Cell::new("Error").add_attribute(Attribute::Bold),
    ]);
    apply_table_style(&mut table);
    for field in Field::ALL {
        let error = form.errors().get(field).unwrap_or_default();
        table.add_row(vec![
            Cell::new(field.as_str()),
            Cell::new(form.field(field)),
            Cell::new(error).fg(Color::Red),
        ]);
    }
    format!("{title}\n{table}\n[{}]\n", form.submit_label())
}

/// One `field: message` line per failed field.
pub fn render_errors(errors: &ValidationResult) -> Vec<String> {
    errors
        .iter()
        .map(|(field, message)| format!("{field}: {message}"))
        .collect()
}
