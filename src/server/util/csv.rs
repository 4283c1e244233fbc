//! Minimal CSV writing for ticket exports.

/// Prefixes cells that a spreadsheet would evaluate as a formula with a single quote.
pub fn sanitize_cell(value: &str) -> String {
    match value.chars().next() {
        Some('=' | '+' | '-' | '@') => format!("'{}", value),
        _ => value.to_string(),
    }
}

/// Accumulates CSV records into a string using `\n` line endings.
#[derive(Debug, Default)]
pub struct CsvWriter {
    buffer: String,
}

impl CsvWriter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn write_record<I, S>(&mut self, fields: I)
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        for (i, field) in fields.into_iter().enumerate() {
            if i > 0 {
                self.buffer.push(',');
            }
            self.write_field(field.as_ref());
        }
        self.buffer.push('\n');
    }

    fn write_field(&mut self, field: &str) {
        if field.contains([',', '"', '\r', '\n']) {
            self.buffer.push('"');
            self.buffer.push_str(&field.replace('"', "\"\""));
            self.buffer.push('"');
        } else {
            self.buffer.push_str(field);
        }
    }

    pub fn into_string(self) -> String {
        self.buffer
    }
}
