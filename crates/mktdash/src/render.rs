use colored::Colorize;
use mktdash_warehouse::schema::econ::format_change;
use mktdash_warehouse::Frame;

const CHART_WIDTH: usize = 40;

/// Column-aligned text table under a bold title; a placeholder prints its message instead.
pub fn table(frame: &Frame) -> String {
    let mut out = format!("{}\n", frame.title.bold());

    if frame.is_placeholder() {
        if let Some(message) = frame.rows.first().and_then(|row| row.first()) {
            out.push_str(message);
            out.push('\n');
        }
        return out;
    }

    let widths: Vec<usize> = frame
        .columns
        .iter()
        .enumerate()
        .map(|(i, column)| {
            frame
                .rows
                .iter()
                .filter_map(|row| row.get(i))
                .map(|cell| cell.chars().count())
                .fold(column.chars().count(), usize::max)
        })
        .collect();

    out.push_str(&line(&frame.columns, &widths));
    out.push_str(&line(
        &widths.iter().map(|w| "-".repeat(*w)).collect::<Vec<_>>(),
        &widths,
    ));
    for row in &frame.rows {
        out.push_str(&line(row, &widths));
    }
    out
}

fn line(cells: &[String], widths: &[usize]) -> String {
    let padded: Vec<String> = widths
        .iter()
        .enumerate()
        .map(|(i, width)| {
            let cell = cells.get(i).map(String::as_str).unwrap_or_default();
            format!("{cell:<width$}")
        })
        .collect();
    format!("{}\n", padded.join("  ").trim_end())
}

/// One labelled percent change.
#[derive(Debug, Clone, PartialEq)]
pub struct Bar {
    pub label: String,
    pub change: Option<f64>,
}

/// Horizontal bars scaled to the largest magnitude; green for gains, red for losses.
pub fn chart(title: &str, bars: &[Bar]) -> String {
    let mut out = format!("{}\n", title.bold());
    let label_width = bars
        .iter()
        .map(|bar| bar.label.chars().count())
        .max()
        .unwrap_or(0);
    let largest = bars
        .iter()
        .filter_map(|bar| bar.change)
        .fold(0.0_f64, |acc, change| acc.max(change.abs()));

    for bar in bars {
        let label = format!("{:<label_width$}", bar.label);
        let drawn = match bar.change {
            Some(change) if largest > 0.0 => {
                let len = ((change.abs() / largest) * CHART_WIDTH as f64).round() as usize;
                let blocks = "█".repeat(len.max(1));
                if change < 0.0 {
                    format!("{} {}", blocks.red(), format_change(bar.change))
                } else {
                    format!("{} {}", blocks.green(), format_change(bar.change))
                }
            }
            // every change is zero
            Some(_) => format_change(bar.change),
            None => format_change(None).dimmed().to_string(),
        };
        out.push_str(&format!("{label}  {drawn}\n"));
    }
    out
}
