#[cfg(test)]
#[path = "section_list_test.rs"]
mod tests;

use ratatui::style::Modifier;
use ratatui::style::Style;
use ratatui::text::Line;
use ratatui::text::Span;

use super::Reveal;
use crate::domain::models::Activity;
use crate::domain::models::Block;
use crate::domain::models::Guide;
use crate::domain::models::Region;
use crate::domain::models::StepView;
use crate::domain::models::TableSpec;

/// Output of a layout pass: the styled document lines plus the geometry the
/// navigator and the reveal animator track.
#[derive(Default)]
pub struct RenderedDocument {
    pub lines: Vec<Line<'static>>,
    pub sections: Vec<Region>,
    pub reveal_targets: Vec<Region>,
}

fn push_line(lines: &mut Vec<Line<'static>>, mut spans: Vec<Span<'static>>, dim: bool) {
    if dim {
        spans = spans
            .into_iter()
            .map(|span| {
                let style = span.style.add_modifier(Modifier::DIM);
                return Span::styled(span.content, style);
            })
            .collect();
    }

    lines.push(Line::from(spans));
}

fn push_text(lines: &mut Vec<Line<'static>>, text: String, style: Style, dim: bool) {
    push_line(lines, vec![Span::styled(text, style)], dim);
}

fn wrap(text: &str, width: usize) -> Vec<String> {
    let mut lines = vec![];
    let mut current = String::new();

    for word in text.split_whitespace() {
        if current.is_empty() {
            current = word.to_string();
        } else if current.chars().count() + 1 + word.chars().count() <= width {
            current.push(' ');
            current.push_str(word);
        } else {
            lines.push(current);
            current = word.to_string();
        }
    }

    if !current.is_empty() {
        lines.push(current);
    }

    return lines;
}

fn table_lines(spec: &TableSpec) -> Vec<String> {
    let mut widths: Vec<usize> = spec.header.iter().map(|e| e.chars().count()).collect();
    for row in &spec.rows {
        for (idx, cell) in row.iter().enumerate() {
            if idx >= widths.len() {
                widths.push(0);
            }
            widths[idx] = widths[idx].max(cell.chars().count());
        }
    }

    let border = |left: &str, middle: &str, right: &str| {
        let inner = widths
            .iter()
            .map(|width| "─".repeat(width + 2))
            .collect::<Vec<String>>()
            .join(middle);

        return format!("{left}{inner}{right}");
    };

    let grid_row = |cells: &[String]| {
        let inner = widths
            .iter()
            .enumerate()
            .map(|(idx, width)| {
                let cell = cells.get(idx).map(|e| e.as_str()).unwrap_or("");
                let padding = " ".repeat(width - cell.chars().count());
                return format!(" {cell}{padding} ");
            })
            .collect::<Vec<String>>()
            .join("│");

        return format!("│{inner}│");
    };

    let mut lines = vec![border("┌", "┬", "┐"), grid_row(&spec.header)];
    if !spec.rows.is_empty() {
        lines.push(border("├", "┼", "┤"));
        for row in &spec.rows {
            lines.push(grid_row(row));
        }
    }
    lines.push(border("└", "┴", "┘"));

    return lines;
}

fn push_table(lines: &mut Vec<Line<'static>>, spec: &TableSpec, dim: bool) {
    if let Some(caption) = &spec.caption {
        push_text(
            lines,
            caption.to_string(),
            Style::default().add_modifier(Modifier::BOLD),
            dim,
        );
    }

    for text in table_lines(spec) {
        push_text(lines, text, Style::default(), dim);
    }
}

fn push_activity(lines: &mut Vec<Line<'static>>, activity: &Activity, width: usize, dim: bool) {
    push_text(
        lines,
        format!("▸ {}", activity.title),
        Style::default().add_modifier(Modifier::BOLD),
        dim,
    );

    for text in wrap(&activity.body, width.saturating_sub(2)) {
        push_text(lines, format!("  {text}"), Style::default(), dim);
    }
}

fn push_step_panel(lines: &mut Vec<Line<'static>>, view: &StepView, width: usize, dim: bool) {
    push_line(
        lines,
        vec![
            Span::styled(
                format!(" {} ", view.badge),
                Style::default().add_modifier(Modifier::REVERSED),
            ),
            Span::raw("  "),
            Span::styled(
                view.title.clone(),
                Style::default().add_modifier(Modifier::BOLD),
            ),
        ],
        dim,
    );
    lines.push(Line::default());

    for text in wrap(&view.description, width) {
        push_text(lines, text, Style::default(), dim);
    }

    for table in &view.tables {
        lines.push(Line::default());
        push_table(lines, table, dim);
    }

    lines.push(Line::default());

    let control = |label: &str, enabled: bool| {
        let mut style = Style::default().add_modifier(Modifier::BOLD);
        if !enabled {
            style = Style::default().add_modifier(Modifier::DIM);
        }
        return Span::styled(label.to_string(), style);
    };

    push_line(
        lines,
        vec![
            control("[ ◀ Anterior ]", view.controls.retreat_enabled),
            Span::raw("   "),
            control("[ Siguiente ▶ ]", view.controls.advance_enabled),
        ],
        dim,
    );
}

pub struct SectionList {}

impl SectionList {
    /// Lay the whole guide out as styled terminal lines. Regions not yet
    /// tagged by the reveal animator draw dim. Section regions come back
    /// contiguous, in document order, starting at line zero.
    pub fn render(
        guide: &Guide,
        step_view: &StepView,
        reveal: &Reveal,
        width: usize,
    ) -> RenderedDocument {
        let width = width.max(20);
        let mut document = RenderedDocument::default();

        for section in &guide.sections {
            let top = document.lines.len() as i64;
            let section_dim = !reveal.is_revealed(&section.id);

            push_text(
                &mut document.lines,
                section.title.clone(),
                Style::default().add_modifier(Modifier::BOLD),
                section_dim,
            );
            push_text(
                &mut document.lines,
                "─".repeat(section.title.chars().count().min(width)),
                Style::default(),
                section_dim,
            );

            for block in &section.blocks {
                document.lines.push(Line::default());

                match block {
                    Block::Paragraph(text) => {
                        for wrapped in wrap(text, width) {
                            push_text(&mut document.lines, wrapped, Style::default(), section_dim);
                        }
                    }
                    Block::Table(spec) => {
                        push_table(&mut document.lines, spec, section_dim);
                    }
                    Block::Activity(activity) => {
                        let activity_top = document.lines.len() as i64;
                        let dim = section_dim || !reveal.is_revealed(&activity.id);
                        push_activity(&mut document.lines, activity, width, dim);
                        document.reveal_targets.push(Region::new(
                            &activity.id,
                            activity_top,
                            document.lines.len() as i64 - activity_top,
                        ));
                    }
                    Block::StepPanel => {
                        push_step_panel(&mut document.lines, step_view, width, section_dim);
                    }
                }
            }

            document.lines.push(Line::default());

            let height = document.lines.len() as i64 - top;
            document.sections.push(Region::new(&section.id, top, height));
            document
                .reveal_targets
                .push(Region::new(&section.id, top, height));
        }

        return document;
    }
}
