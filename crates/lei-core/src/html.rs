//! HTML rendering: result table, dropdown selects and the search page.
//!
//! All dataset text is escaped. The page is self-contained: one GET form
//! whose parameters are the [`SearchField`] keys, followed by the results.

use crate::config::Config;
use crate::dropdown::Dropdown;
use crate::fields::SearchField;
use crate::link::deep_link;
use crate::query::Query;
use crate::table::Row;
use std::fmt::Write;
use v_htmlescape::escape;

pub const NO_RESULTS: &str = "<p>No results found.</p>";
pub const ANY_OPTION: &str = "-- Any --";
const LINK_HEADER: &str = "🔗";

const LINK_ICON: &str = concat!(
    r#"<svg xmlns="http://www.w3.org/2000/svg" width="16" height="16" fill="currentColor" "#,
    r#"class="bi bi-box-arrow-up-right" viewBox="0 0 16 16">"#,
    r#"<path fill-rule="evenodd" d="M8.636 3.5a.5.5 0 0 0-.5-.5H1.5A1.5 1.5 0 0 0 0 4.5v10A1.5 1.5 0 0 0 1.5 16h10a1.5 1.5 0 0 0 1.5-1.5V7.864a.5.5 0 0 0-1 0V14.5a.5.5 0 0 1-.5.5h-10a.5.5 0 0 1-.5-.5v-10a.5.5 0 0 1 .5-.5h6.636a.5.5 0 0 0 .5-.5"/>"#,
    r#"<path fill-rule="evenodd" d="M16 .5a.5.5 0 0 0-.5-.5h-5a.5.5 0 0 0 0 1h3.793L6.146 9.146a.5.5 0 1 0 .708.708L15 1.707V5.5a.5.5 0 0 0 1 0z"/>"#,
    "</svg>"
);

/// One `<td>`; values over `max_chars` characters collapse behind a summary.
pub fn render_cell(value: &str, max_chars: usize) -> String {
    match value.char_indices().nth(max_chars) {
        Some((cut, _)) => format!(
            "<td><details><summary>{}...</summary>{}</details></td>",
            escape(&value[..cut]),
            escape(value)
        ),
        None => format!("<td>{}</td>", escape(value)),
    }
}

/// The result table, or the "no results" notice when `rows` is empty.
pub fn render_table(rows: &[&Row], headers: &[String], config: &Config) -> String {
    tracing::debug!(rows = rows.len(), "html: rendering table");
    if rows.is_empty() {
        return NO_RESULTS.to_string();
    }

    let mut out = String::from("<table class=\"styled-table\"><thead><tr>");
    let _ = write!(out, "<th>{LINK_HEADER}</th>");
    for h in headers {
        let _ = write!(out, "<th>{}</th>", escape(h));
    }
    out.push_str("</tr></thead><tbody>\n");

    for row in rows {
        let url = deep_link(row, &config.links);
        let _ = write!(
            out,
            "<tr><td><a href=\"{}\" target=\"_blank\" title=\"Open article\">{LINK_ICON}</a></td>",
            escape(&url)
        );
        for cell in row.cells_in(headers) {
            out.push_str(&render_cell(cell, config.render.max_cell_chars));
        }
        out.push_str("</tr>\n");
    }

    out.push_str("</tbody></table>");
    out
}

/// `<select>` for a dropdown, led by the unconstrained option.
pub fn render_select(dropdown: &Dropdown, selected: &str) -> String {
    let key = dropdown.field.key();
    let mut out = format!("<select id=\"{key}\" name=\"{key}\">");
    let _ = write!(out, "<option value=\"\">{ANY_OPTION}</option>");
    for v in &dropdown.values {
        let mark = if v == selected { " selected" } else { "" };
        let _ = write!(out, "<option value=\"{0}\"{mark}>{0}</option>", escape(v));
    }
    out.push_str("</select>");
    out
}

/// The complete search page: form pre-filled from `query`, then results.
///
/// `rows` is `None` until a search has been submitted, leaving the results
/// container empty.
pub fn render_page(
    dropdowns: &[Dropdown],
    query: &Query,
    headers: &[String],
    rows: Option<&[&Row]>,
    config: &Config,
) -> String {
    let mut out = String::from(
        "<!DOCTYPE html>\n<html lang=\"it\"><head><meta charset=\"utf-8\">\
         <title>Latinismi</title></head><body>\n<form method=\"get\" action=\"/\">\n",
    );

    let title = SearchField::Title;
    let _ = writeln!(
        out,
        "<label>{} <input type=\"text\" id=\"{1}\" name=\"{1}\" value=\"{2}\"></label>",
        title.label(),
        title.key(),
        escape(query.get(title.column()))
    );
    for d in dropdowns {
        let _ = writeln!(
            out,
            "<label>{} {}</label>",
            d.label,
            render_select(d, query.get(d.column))
        );
    }
    out.push_str("<button type=\"submit\" id=\"searchBtn\">Cerca</button>\n</form>\n");

    let results = rows.map(|r| render_table(r, headers, config)).unwrap_or_default();
    let _ = writeln!(out, "<div id=\"results\">{results}</div>");
    out.push_str("</body></html>\n");
    out
}
