//! Record output in every list format

use miette::{IntoDiagnostic, Result};
use tabled::builder::Builder;
use tabled::settings::Style;

use crate::cli::helpers::{escape_tsv, truncate_str};
use crate::cli::OutputFormat;
use crate::core::Entity;

/// Widest a table cell may get before it is truncated
const MAX_CELL_WIDTH: usize = 40;

/// Renders entity rows in the requested format
pub struct TableFormatter {
    format: OutputFormat,
    max_width: usize,
}

impl TableFormatter {
    pub fn new(format: OutputFormat) -> Self {
        Self {
            format,
            max_width: MAX_CELL_WIDTH,
        }
    }

    /// Render `items` to a string (empty for an empty ID list)
    pub fn render<T: Entity>(&self, items: &[T]) -> Result<String> {
        match self.format {
            OutputFormat::Json => serde_json::to_string_pretty(items).into_diagnostic(),
            OutputFormat::Yaml => serde_yml::to_string(&items).into_diagnostic(),
            OutputFormat::Id => Ok(items
                .iter()
                .map(|item| format!("{}\n", item.id()))
                .collect()),
            OutputFormat::Csv => render_csv(items),
            OutputFormat::Tsv => Ok(render_tsv(items)),
            OutputFormat::Table | OutputFormat::Auto => Ok(self.render_table(items)),
        }
    }

    pub fn output<T: Entity>(&self, items: &[T]) -> Result<()> {
        print!("{}", self.render(items)?);
        Ok(())
    }

    fn render_table<T: Entity>(&self, items: &[T]) -> String {
        let mut builder = Builder::default();
        builder.push_record(T::COLUMNS.iter().map(|c| c.to_string()));
        for item in items {
            builder.push_record(item.cells().iter().map(|c| truncate_str(c, self.max_width)));
        }
        let mut table = builder.build();
        table.with(Style::rounded());
        format!("{}\n", table)
    }
}

fn render_tsv<T: Entity>(items: &[T]) -> String {
    let mut out = T::COLUMNS.join("\t");
    out.push('\n');
    for item in items {
        let cells: Vec<String> = item.cells().iter().map(|c| escape_tsv(c)).collect();
        out.push_str(&cells.join("\t"));
        out.push('\n');
    }
    out
}

fn render_csv<T: Entity>(items: &[T]) -> Result<String> {
    let mut writer = csv::Writer::from_writer(Vec::new());
    writer.write_record(T::COLUMNS).into_diagnostic()?;
    for item in items {
        writer.write_record(item.cells()).into_diagnostic()?;
    }
    let bytes = writer
        .into_inner()
        .map_err(|e| miette::miette!("{}", e.error()))?;
    String::from_utf8(bytes).into_diagnostic()
}

/// Render one record as field/value pairs
pub fn render_record<T: Entity>(item: &T) -> String {
    let mut builder = Builder::default();
    for (column, value) in T::COLUMNS.iter().zip(item.cells()) {
        builder.push_record([column.to_string(), value]);
    }
    let mut table = builder.build();
    table.with(Style::rounded());
    format!("{}\n", table)
}
