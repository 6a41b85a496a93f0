use std::fmt;

use unicode_width::UnicodeWidthStr;

use crate::api::{Field, MonitorRecord};
use crate::prompt::Prompt;
use crate::remote::Remote;

pub const DELETE_QUESTION: &str = "Are you sure you want to delete this monitor?";
pub const REMOVED: &str = "Removed!";

const DELETE_AFFORDANCE: &str = "\u{00D7}";

const COLUMNS: [Field; 5] = [Field::Name, Field::Email, Field::Skill, Field::Day, Field::Hour];

/// The values currently typed into the entry form.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct FormInputs {
    pub name: String,
    pub email: String,
    pub skill: String,
    pub day: String,
    pub hour: String,
}

impl FormInputs {
    pub fn get(&self, field: Field) -> &str {
        match field {
            Field::Name => &self.name,
            Field::Email => &self.email,
            Field::Skill => &self.skill,
            Field::Day => &self.day,
            Field::Hour => &self.hour,
        }
    }

    pub fn set(&mut self, field: Field, value: impl Into<String>) {
        let slot = match field {
            Field::Name => &mut self.name,
            Field::Email => &mut self.email,
            Field::Skill => &mut self.skill,
            Field::Day => &mut self.day,
            Field::Hour => &mut self.hour,
        };
        *slot = value.into();
    }

    pub fn clear(&mut self) {
        *self = FormInputs::default();
    }

    pub fn to_record(&self) -> MonitorRecord {
        MonitorRecord {
            name: self.name.clone(),
            email: self.email.clone(),
            skill: self.skill.clone(),
            day: self.day.clone(),
            hour: self.hour.clone(),
        }
    }
}

/// Stable identity of a row, assigned when the row is built. Positions shift
/// as rows are removed; ids do not.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct RowId(pub u64);

impl fmt::Display for RowId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Row {
    pub id: RowId,
    /// One cell per [`Field`], in column order.
    pub cells: [String; 5],
}

impl Row {
    fn new(id: RowId, record: &MonitorRecord) -> Row {
        Row {
            id,
            cells: COLUMNS.map(|field| record.get(field).to_owned()),
        }
    }

    /// The second cell, which keys the delete.
    pub fn email(&self) -> &str {
        &self.cells[1]
    }
}

/// Everything the page shows: the entry form and the roster table.
#[derive(Debug, Default)]
pub struct RosterView {
    pub inputs: FormInputs,
    rows: Vec<Row>,
    next_row_id: u64,
}

impl RosterView {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn rows(&self) -> &[Row] {
        &self.rows
    }

    pub fn load(&mut self, records: impl IntoIterator<Item = MonitorRecord>) {
        for record in records {
            self.append_row(&record);
        }
    }

    /// Appends a row for `record` and clears the entry form.
    pub fn append_row(&mut self, record: &MonitorRecord) -> RowId {
        let id = RowId(self.next_row_id);
        self.next_row_id += 1;

        self.rows.push(Row::new(id, record));
        self.inputs.clear();
        id
    }

    /// Resolves a 1-based display position, as shown by [`RosterView::render`].
    pub fn row_at(&self, position: usize) -> Option<RowId> {
        position
            .checked_sub(1)
            .and_then(|index| self.rows.get(index))
            .map(|row| row.id)
    }

    pub fn row_with_email(&self, email: &str) -> Option<RowId> {
        self.rows.iter().find(|row| row.email() == email).map(|row| row.id)
    }

    /// The delete affordance of row `id` was clicked. Asks first; on yes the
    /// row goes away and a delete for its email is sent.
    pub fn click_delete(&mut self, id: RowId, prompt: &mut dyn Prompt, remote: &Remote) -> bool {
        let Some(index) = self.rows.iter().position(|row| row.id == id) else {
            log::warn!("Delete clicked on unknown row {id}");
            return false;
        };

        if !prompt.confirm(DELETE_QUESTION) {
            return false;
        }

        let row = self.rows.remove(index);
        remote.delete_record(row.email());
        prompt.alert(REMOVED);
        true
    }

    pub fn render(&self) -> String {
        let header: Vec<String> = std::iter::once("#".to_owned())
            .chain(COLUMNS.iter().map(|f| f.to_string()))
            .collect();

        let lines: Vec<Vec<String>> = self
            .rows
            .iter()
            .enumerate()
            .map(|(index, row)| {
                std::iter::once((index + 1).to_string())
                    .chain(row.cells.iter().map(|cell| display_cell(cell)))
                    .chain(std::iter::once(DELETE_AFFORDANCE.to_owned()))
                    .collect()
            })
            .collect();

        let mut widths: Vec<usize> = header.iter().map(|h| h.width()).collect();
        for line in &lines {
            for (width, cell) in widths.iter_mut().zip(line) {
                *width = (*width).max(cell.width());
            }
        }

        let mut out = String::new();
        push_line(&mut out, &header, &widths);
        for line in &lines {
            push_line(&mut out, line, &widths);
        }
        out
    }
}

/// Control characters would break the row apart, so they are shown escaped.
fn display_cell(cell: &str) -> String {
    cell.chars()
        .map(|c| {
            if c.is_control() {
                c.escape_default().to_string()
            } else {
                c.to_string()
            }
        })
        .collect()
}

fn push_line(out: &mut String, cells: &[String], widths: &[usize]) {
    let mut line = String::new();
    for (i, cell) in cells.iter().enumerate() {
        line.push_str(cell);
        if let Some(&width) = widths.get(i) {
            // padded by display width, wide characters take two columns
            line.push_str(&" ".repeat(width.saturating_sub(cell.width()) + 2));
        }
    }
    out.push_str(line.trim_end());
    out.push('\n');
}
