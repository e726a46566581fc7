// src/ui/text.rs

//! Plain-text rendering of a [`ReportView`], used by `scano --print`.

use crate::core::presenter::{DNS_COLUMNS, PanelBody, ReportView};
use std::fmt::Write;

/// Renders `view` as a deterministic, uncolored report.
pub fn render_text(view: &ReportView) -> String {
    let mut out = String::new();
    let hero = &view.hero;

    let _ = writeln!(out, "Target: {}", hero.target);
    match hero.grade {
        Some(grade) => {
            let _ = writeln!(out, "Score:  {}/100 ({grade})", hero.score);
        }
        None => {
            let _ = writeln!(out, "Score:  {}/100", hero.score);
        }
    }
    let _ = writeln!(out, "{}", hero.caption);

    for (kind, body) in view.panels() {
        let _ = writeln!(out);
        let _ = writeln!(out, "[{kind}]");
        write_body(&mut out, body);
    }
    out
}

fn write_body(out: &mut String, body: &PanelBody) {
    match body {
        PanelBody::Notice { text, .. } => {
            let _ = writeln!(out, "  {text}");
        }
        PanelBody::Fields(fields) => {
            let width = fields.iter().map(|f| f.label.len()).max().unwrap_or(0);
            for field in fields {
                let _ = writeln!(out, "  {:width$}  {}", field.label, field.value);
            }
        }
        PanelBody::Headers(rows) => {
            let width = rows.iter().map(|r| r.name.len()).max().unwrap_or(0);
            for row in rows {
                let _ = writeln!(out, "  {:width$}  {}", row.name, row.status);
            }
        }
        PanelBody::Csp { status, issues } => {
            let _ = writeln!(out, "  Status: {status}");
            if issues.is_empty() {
                let _ = writeln!(out, "  No CSP issues reported");
            }
            for issue in issues {
                let _ = writeln!(out, "  - {issue}");
            }
        }
        PanelBody::Dns { rows, primary_ip } => {
            let mut widths = DNS_COLUMNS.map(str::len);
            for row in rows {
                for (w, cell) in widths.iter_mut().zip(row_cells(row)) {
                    *w = (*w).max(cell.len());
                }
            }
            write_row(out, &widths, DNS_COLUMNS);
            for row in rows {
                write_row(out, &widths, row_cells(row));
            }
            let _ = writeln!(out, "  Primary IP: {primary_ip}");
        }
        PanelBody::Items(items) => {
            for (n, item) in items.iter().enumerate() {
                let _ = writeln!(out, "  {}. {item}", n + 1);
            }
        }
    }
}

fn row_cells(row: &crate::core::presenter::DnsRow) -> [&str; 4] {
    [
        row.resolver.as_str(),
        row.location.as_str(),
        row.provider.as_str(),
        row.ips.as_str(),
    ]
}

fn write_row(out: &mut String, widths: &[usize; 4], cells: [&str; 4]) {
    let line = cells
        .iter()
        .zip(widths)
        .map(|(cell, &w)| format!("{cell:w$}"))
        .collect::<Vec<_>>()
        .join("  ");
    let _ = writeln!(out, "  {}", line.trim_end());
}
