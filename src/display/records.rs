//! Printing table records field by field.

use crate::data::{Cell, ColumnTable};
use crate::display::{wrap_text, DisplayConfig};
use crate::error::{EdaError, Result};
use std::io::Write;

/// Print every record of `table` to `out`.
///
/// # Arguments
/// * `table` - Records to print
/// * `fields` - Columns to show, in order; `None` shows all columns
/// * `config` - Layout settings
/// * `out` - Destination
///
/// Without truncation, a value longer than `wrap_width` is printed under a
/// `field:` line, wrapped to `wrap_width`; shorter values share the line
/// with the field name, which is padded to `wrap_width - len(value)`.
///
/// With truncation, each field is one line: names left-aligned, values
/// right-aligned and cut to `max_colwidth` with a trailing `...`.
///
/// Each record ends with the separator line and a blank line.
pub fn print_records<T, W>(
    table: &T,
    fields: Option<&[String]>,
    config: &DisplayConfig,
    out: &mut W,
) -> Result<()>
where
    T: ColumnTable + ?Sized,
    W: Write,
{
    config.validate()?;

    let fields: Vec<String> = match fields {
        Some(fields) => fields.to_vec(),
        None => table.column_names().into_iter().map(String::from).collect(),
    };
    if let Some(missing) = fields.iter().find(|f| !table.has_column(f)) {
        return Err(EdaError::MissingColumn(missing.clone()));
    }

    let separator = config.separator.line();
    for row in 0..table.n_rows() {
        let values: Vec<String> = fields
            .iter()
            .map(|f| table.cell(row, f).unwrap_or(&Cell::Missing).to_string())
            .collect();

        if config.truncate {
            write_truncated(&fields, &values, config.max_colwidth, out)?;
        } else {
            write_wrapped(&fields, &values, config.wrap_width, out)?;
        }

        writeln!(out, "{}", separator)?;
        writeln!(out)?;
    }

    Ok(())
}

/// Render records to a string. See [`print_records`].
pub fn render_records<T: ColumnTable + ?Sized>(
    table: &T,
    fields: Option<&[String]>,
    config: &DisplayConfig,
) -> Result<String> {
    let mut buffer = Vec::new();
    print_records(table, fields, config, &mut buffer)?;
    Ok(String::from_utf8_lossy(&buffer).into_owned())
}

fn write_wrapped<W: Write>(
    fields: &[String],
    values: &[String],
    wrap_width: usize,
    out: &mut W,
) -> Result<()> {
    for (field, value) in fields.iter().zip(values) {
        let len = value.chars().count();
        if len > wrap_width {
            writeln!(out, "{}:", field)?;
            for line in wrap_text(value, wrap_width) {
                writeln!(out, "{}", line)?;
            }
        } else {
            let label = format!("{}:", field);
            writeln!(out, "{:<width$} {}", label, value, width = wrap_width - len)?;
        }
    }
    Ok(())
}

fn write_truncated<W: Write>(
    fields: &[String],
    values: &[String],
    max_colwidth: usize,
    out: &mut W,
) -> Result<()> {
    let values: Vec<String> = values.iter().map(|v| truncate(v, max_colwidth)).collect();
    let name_width = fields.iter().map(|f| f.chars().count()).max().unwrap_or(0);
    let value_width = values.iter().map(|v| v.chars().count()).max().unwrap_or(0);

    for (field, value) in fields.iter().zip(&values) {
        writeln!(
            out,
            "{:<nw$}    {:>vw$}",
            field,
            value,
            nw = name_width,
            vw = value_width
        )?;
    }
    Ok(())
}

fn truncate(value: &str, max_chars: usize) -> String {
    if value.chars().count() <= max_chars {
        return value.to_string();
    }
    let keep = max_chars.saturating_sub(3);
    let mut cut: String = value.chars().take(keep).collect();
    cut.push_str(&"..."[..max_chars.min(3)]);
    cut
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::display::Separator;
    use indexmap::IndexMap;

    fn table() -> IndexMap<String, Vec<Cell>> {
        let mut table = IndexMap::new();
        table.insert(
            "title".to_string(),
            vec![Cell::Text("Solid".to_string()), Cell::Text("Meh".to_string())],
        );
        table.insert(
            "body".to_string(),
            vec![
                Cell::Text("works as advertised and arrived early".to_string()),
                Cell::Missing,
            ],
        );
        table
    }

    fn config(wrap_width: usize) -> DisplayConfig {
        DisplayConfig {
            wrap_width,
            separator: Separator { ch: '=', count: 5 },
            ..Default::default()
        }
    }

    #[test]
    fn test_short_values_share_the_line() {
        let out = render_records(&table(), None, &config(12)).unwrap();
        let lines: Vec<&str> = out.lines().collect();

        // "title:" padded to 12 - 5 = 7 columns, then a space and the value
        assert_eq!(lines[0], "title:  Solid");
        assert_eq!(lines[0].chars().count(), 13);
    }

    #[test]
    fn test_long_values_are_wrapped() {
        let out = render_records(&table(), None, &config(12)).unwrap();
        let lines: Vec<&str> = out.lines().collect();

        assert_eq!(
            &lines[1..6],
            &["body:", "works as", "advertised", "and arrived", "early"]
        );
        assert_eq!(lines[6], "=====");
        assert_eq!(lines[7], "");
    }

    #[test]
    fn test_every_record_is_separated() {
        let out = render_records(&table(), None, &config(100)).unwrap();
        assert_eq!(out.matches("=====\n\n").count(), 2);
        assert!(out.contains("body:"));
        assert!(out.contains(" NA\n"));
    }

    #[test]
    fn test_field_selection() {
        let fields = vec!["title".to_string()];
        let out = render_records(&table(), Some(&fields), &config(20)).unwrap();
        assert!(!out.contains("body"));
        assert_eq!(out.lines().filter(|l| l.starts_with("title:")).count(), 2);
    }

    #[test]
    fn test_unknown_field() {
        let fields = vec!["rating".to_string()];
        assert!(matches!(
            render_records(&table(), Some(&fields), &config(20)),
            Err(EdaError::MissingColumn(_))
        ));
    }

    #[test]
    fn test_truncated_layout() {
        let config = DisplayConfig {
            truncate: true,
            max_colwidth: 10,
            separator: Separator { ch: '-', count: 3 },
            ..Default::default()
        };
        let out = render_records(&table(), None, &config).unwrap();
        let lines: Vec<&str> = out.lines().collect();

        assert_eq!(lines[0], "title         Solid");
        assert_eq!(lines[1], "body     works a...");
        assert_eq!(lines[2], "---");
    }

    #[test]
    fn test_truncate_helper() {
        assert_eq!(truncate("short", 10), "short");
        assert_eq!(truncate("abcdefghijk", 6), "abc...");
        assert_eq!(truncate("abcdef", 2), "..");
    }
}
