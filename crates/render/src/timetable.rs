//! Renders a laid-out page grid as a `tabu` table.

use crate::RenderError;
use crate::escape::{latex_title, latexify};
use progbook_layout::{Border, CellLayout, CellStatus, GridCell, GridRow, PageGrid, Shading, Strategy};
use std::fmt::Write;

fn large(text: &str) -> String {
    format!("{{\\large {}}}", text)
}

fn cell_color(shading: Shading) -> &'static str {
    match shading {
        Shading::Strong => "\\cellcolor{gray!25}",
        Shading::Light => "\\cellcolor{gray!15}",
        Shading::None => "",
    }
}

/// The LaTeX for the first row of an event cell.
pub fn render_cell(layout: &CellLayout) -> String {
    let title = latex_title(&layout.title);
    let speakers = latexify(&layout.speakers);

    match layout.strategy {
        Strategy::SingleLine => title,
        Strategy::Emphasized => format!("\\multirow{{{}}}{{\\linewidth}}{{{}}}", layout.row_span, large(&title)),
        strategy => {
            let mut body = large(&title);
            if !speakers.is_empty() {
                body.push_str(&match strategy {
                    Strategy::Ample => format!("\\\\ $ $\\\\ {{ -- {}}}", speakers),
                    Strategy::Compact | Strategy::CompactTruncated => {
                        format!("\\\\[-0.4ex] {{ -- {}}}", speakers)
                    }
                    Strategy::AuthorInline => format!("{{$ $ -- {}}}", speakers),
                    _ => format!("\\\\ {{ -- {}}}", speakers),
                });
            }
            format!(
                "\\multirow{{{}}}{{\\linewidth}}{{\\parbox{{\\linewidth}}{{\\begin{{minipage}}{{\\linewidth}}{}\\end{{minipage}}}}}}",
                layout.row_span, body
            )
        }
    }
}

fn render_row(out: &mut String, row: &GridRow) -> Result<(), RenderError> {
    if let Some(label) = &row.time_label {
        let bold = if row.shading == Shading::Strong { "\\bf" } else { "" };
        write!(out, "{}\\raisebox{{-0.4ex}}{{\\small{} {}}}", cell_color(row.shading), bold, label)?;
    }

    let mut clines = String::from("\\cline{1-1} ");
    for (i, cell) in row.cells.iter().enumerate() {
        out.push_str(" & ");
        render_grid_cell(out, cell, row.shading);
        if cell.border_below == Border::Strong {
            write!(clines, "\\cline{{{}-{}}} ", i + 2, i + 2)?;
        }
    }
    writeln!(out, "\\\\ {}%", clines)?;
    Ok(())
}

fn render_grid_cell(out: &mut String, cell: &GridCell, shading: Shading) {
    match (cell.status, &cell.layout) {
        (CellStatus::Empty, _) => out.push_str(cell_color(shading)),
        (_, Some(layout)) => out.push_str(&render_cell(layout)),
        _ => {}
    }
}

/// The whole timetable of one page.
pub fn render_page(grid: &PageGrid) -> Result<String, RenderError> {
    let mut out = String::new();
    out.push_str("\\pagebreak");
    writeln!(out, "{{\\fontsize{{10}}{{8.2}}\\selectfont \\renewcommand{{\\arraystretch}}{{0.9}}%")?;
    writeln!(out, "\\begin{{tabu}} to \\linewidth {{c{}}}%", "X".repeat(grid.rooms.len()))?;

    out.push_str("\\multicolumn{1}{c}{} ");
    for title in &grid.header_titles {
        write!(out, " & \\multicolumn{{1}}{{c}}{{\\bf {}}} ", large(&latexify(title)))?;
    }
    out.push_str("\\\\ \n");
    out.push_str("\\multicolumn{1}{c}{} ");
    for room in &grid.rooms {
        write!(out, " & \\multicolumn{{1}}{{c}}{{{}}} ", large(&latexify(room.as_str())))?;
    }
    out.push_str("\\\\ \\tabucline[1pt]- \n");

    for row in &grid.rows {
        render_row(&mut out, row)?;
    }

    out.push_str("\\tabucline[1pt]-");
    out.push_str("\\end{tabu}}%\n");
    Ok(out)
}
