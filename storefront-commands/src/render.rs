//! Text rendering of controller state for the terminal front end.

use storefront_catalog::Product;
use storefront_utils::pagination::{
    ControlElement, build_controls_view, build_product_page_view,
};

use crate::controller::FilterController;

/// Render the visible page, a no-results notice and the control strip.
pub fn render_page(controller: &FilterController) -> String {
    let view = controller.view();
    let query = &controller.state().query;

    if view.no_results {
        return format!("No products match \"{query}\".");
    }

    let title = if query.is_empty() {
        "All products".to_owned()
    } else {
        format!("Results for \"{query}\"")
    };
    let footer_note = match view.total_items {
        1 => "1 product".to_owned(),
        count => format!("{count} products"),
    };

    let mut out = build_product_page_view(
        &title,
        &view.visible,
        view.current_page,
        view.total_pages,
        Some(&footer_note),
    );
    if view.total_pages > 1 {
        out.push('\n');
        out.push_str(&build_controls_view(&view.controls));
    }
    out
}

/// Numbered suggestion list, `None` when there is nothing to suggest.
pub fn render_suggestions(suggestions: &[&Product]) -> Option<String> {
    if suggestions.is_empty() {
        return None;
    }

    let lines: Vec<String> = suggestions
        .iter()
        .enumerate()
        .map(|(index, product)| format!("  {}. {}", index + 1, product.name))
        .collect();
    Some(format!("Suggestions:\n{}", lines.join("\n")))
}

/// List the click ids of the current control strip.
pub fn render_control_ids(controller: &FilterController) -> String {
    let view = controller.view();
    view.controls
        .iter()
        .filter_map(|control| {
            let id = control.control_id(view.total_pages)?;
            let label = match control {
                ControlElement::FirstButton { .. } => "first".to_owned(),
                ControlElement::PrevButton { .. } => "prev".to_owned(),
                ControlElement::PageButton { number, .. } => format!("page {number}"),
                ControlElement::NextButton { .. } => "next".to_owned(),
                ControlElement::LastButton { .. } => "last".to_owned(),
                ControlElement::Ellipsis => return None,
            };
            let state = if control.is_disabled() { " (disabled)" } else { "" };
            Some(format!("{label}{state}: {id}"))
        })
        .collect::<Vec<_>>()
        .join("\n")
}
