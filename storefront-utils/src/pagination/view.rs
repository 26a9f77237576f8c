//! Plain-text views of a product page and its control strip.

use storefront_catalog::Product;

use super::components::ControlElement;
use super::page::clamp_page;

/// Placeholder shown instead of a disabled navigation button.
const DISABLED_LABEL: &str = "·";

/// Footer text for a page; empty when everything fits on one page.
///
/// The page number shown is clamped into `1..=total_pages`.
pub fn page_footer(page: usize, total_pages: usize, footer_note: Option<&str>) -> String {
    let total_pages = total_pages.max(1);
    let page = clamp_page(page, total_pages);

    if total_pages > 1 {
        match footer_note {
            Some(note) if !note.is_empty() => format!("Page {page}/{total_pages} • {note}"),
            _ => format!("Page {page}/{total_pages}"),
        }
    } else {
        match footer_note {
            Some(note) if !note.is_empty() => note.to_owned(),
            _ => String::new(),
        }
    }
}

/// Build a titled bullet list of product names with a page footer.
pub fn build_product_page_view(
    title: &str,
    visible: &[&Product],
    page: usize,
    total_pages: usize,
    footer_note: Option<&str>,
) -> String {
    let mut out = String::from(title);

    if visible.is_empty() {
        out.push_str("\n(nothing to show)");
    } else {
        for product in visible {
            out.push_str("\n- ");
            out.push_str(&product.name);
        }
    }

    let footer = page_footer(page, total_pages, footer_note);
    if !footer.is_empty() {
        out.push('\n');
        out.push_str(&footer);
    }

    out
}

/// Render the control strip on one line, e.g. `« ‹ 1 … 3 4 [5] 6 7 … 10 › »`.
pub fn build_controls_view(controls: &[ControlElement]) -> String {
    controls
        .iter()
        .map(|control| match *control {
            ControlElement::FirstButton { disabled, .. } => nav_label("«", disabled),
            ControlElement::PrevButton { disabled, .. } => nav_label("‹", disabled),
            ControlElement::PageButton { number, active: true } => format!("[{number}]"),
            ControlElement::PageButton { number, active: false } => number.to_string(),
            ControlElement::Ellipsis => "…".to_owned(),
            ControlElement::NextButton { disabled, .. } => nav_label("›", disabled),
            ControlElement::LastButton { disabled, .. } => nav_label("»", disabled),
        })
        .collect::<Vec<_>>()
        .join(" ")
}

fn nav_label(label: &str, disabled: bool) -> String {
    let shown = if disabled { DISABLED_LABEL } else { label };
    shown.to_owned()
}
