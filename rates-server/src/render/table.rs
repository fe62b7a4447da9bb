//! Rate table renderer
//!
//! Renders a [`RateGrid`] into a merged-cell HTML table. Room type and rate
//! type cells carry `rowspan`; season headers and room types carry their
//! details as tooltips.

use std::fmt::Write;

use shared::models::RoomRatesBlock;
use shared::rates::{GridRow, RateGrid, RoomTypeCell, format_amount};

/// Markup shown when a block has no populated room rates
pub const NO_DATA_PLACEHOLDER: &str = "<div>No room rates data available.</div>";

/// Renders rate grids to HTML
#[derive(Debug, Clone, Copy, Default)]
pub struct RateTableRenderer;

impl RateTableRenderer {
    pub fn new() -> Self {
        Self
    }

    /// Render a page block, falling back to the placeholder
    pub fn render_block(&self, block: &RoomRatesBlock) -> String {
        let doc = match block.document() {
            Ok(doc) => doc,
            Err(_) => return NO_DATA_PLACEHOLDER.to_string(),
        };

        let table = self.render(&RateGrid::for_document(doc));
        match block.anchor_id.as_deref().filter(|a| !a.is_empty()) {
            Some(anchor) => format!(
                r#"<section id="{}" class="room-rates-block">{}</section>"#,
                escape(anchor),
                table
            ),
            None => format!(r#"<section class="room-rates-block">{}</section>"#, table),
        }
    }

    /// Render the full table, including the title when the grid has one
    pub fn render(&self, grid: &RateGrid) -> String {
        let mut out = String::new();

        if let Some(title) = &grid.title {
            let _ = write!(out, r#"<h1 class="room-rates-title">{}</h1>"#, escape(title));
        }

        out.push_str(r#"<table class="room-rates">"#);
        self.render_header(&mut out, grid);

        out.push_str("<tbody>");
        let last = grid.rows.len().saturating_sub(1);
        for (index, row) in grid.rows.iter().enumerate() {
            self.render_row(&mut out, row, index == last);
        }
        out.push_str("</tbody></table>");

        out
    }

    fn render_header(&self, out: &mut String, grid: &RateGrid) {
        out.push_str("<thead><tr>");
        out.push_str(r#"<th rowspan="2">ROOM TYPE</th>"#);
        out.push_str(r#"<th rowspan="2">RATE TYPE</th>"#);
        out.push_str(r#"<th rowspan="2">ROOM</th>"#);
        let _ = write!(out, r#"<th colspan="{}">SEASONS</th>"#, grid.seasons.len());
        out.push_str("</tr><tr>");
        for season in &grid.seasons {
            let _ = write!(
                out,
                r#"<th title="{}">{}</th>"#,
                escape(&season.date_range),
                season.key.as_str().to_uppercase()
            );
        }
        out.push_str("</tr></thead>");
    }

    fn render_row(&self, out: &mut String, row: &GridRow, is_last: bool) {
        let class = if row.group_boundary {
            Some("group-boundary")
        } else if !is_last {
            Some("row-divider")
        } else {
            None
        };

        match class {
            Some(class) => {
                let _ = write!(out, r#"<tr class="{}">"#, class);
            }
            None => out.push_str("<tr>"),
        }

        if let Some(cell) = row.room_type_cell() {
            self.render_room_type(out, cell);
        }
        if let Some(cell) = row.rate_type_cell() {
            let _ = write!(
                out,
                r#"<td rowspan="{}" class="rate-type">{}</td>"#,
                cell.rowspan,
                escape(cell.rate_type.label())
            );
        }
        let _ = write!(out, "<td>{}</td>", escape(row.room_config.label()));
        for price in &row.prices {
            let _ = write!(out, r#"<td class="price">{}</td>"#, format_amount(price.amount));
        }

        out.push_str("</tr>");
    }

    fn render_room_type(&self, out: &mut String, cell: &RoomTypeCell) {
        let mut details = vec![
            ("Size", cell.size.as_str()),
            ("Bed Options", cell.bed_options.as_str()),
            ("Features", cell.features.as_str()),
        ];
        if let Some(additional) = cell.additional.as_deref().filter(|a| !a.trim().is_empty()) {
            details.push(("Additional", additional));
        }
        details.push(("Occupancy", cell.occupancy.as_str()));

        let _ = write!(
            out,
            r#"<td rowspan="{}" class="room-type"><span>{} ({} total)</span><dl class="room-details">"#,
            cell.rowspan,
            escape(&cell.room_type),
            cell.total_rooms
        );
        for (label, value) in details {
            let _ = write!(out, "<dt>{}:</dt><dd>{}</dd>", label, escape(value));
        }
        out.push_str("</dl></td>");
    }
}

/// Escape text for use in HTML content and attribute values
pub fn escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(ch),
        }
    }
    out
}
