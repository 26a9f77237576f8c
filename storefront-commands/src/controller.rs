//! Query/page state machine behind the catalog grid.

use std::sync::Arc;

use tracing::debug;

use storefront_catalog::{Product, ProductCatalog};
use storefront_core::Context;
use storefront_utils::pagination::{
    ControlElement, ControlValidationError, build_page_controls, paginate, total_pages,
    validate_control_id,
};
use storefront_utils::search::{filter_positions, normalize_query, suggest};

/// Everything the controller owns between input events.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilterState {
    /// Last applied query, trimmed but otherwise as typed.
    pub query: String,
    /// Normalized form of `query`, used to detect real changes.
    query_key: String,
    pub current_page: usize,
    /// Catalog indices of the current matches, in catalog order.
    pub matches: Vec<usize>,
    pub no_results: bool,
}

impl FilterState {
    fn unfiltered(catalog: &ProductCatalog) -> Self {
        Self {
            query: String::new(),
            query_key: String::new(),
            current_page: 1,
            matches: (0..catalog.len()).collect(),
            no_results: false,
        }
    }
}

/// Result of feeding a query into the controller.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QueryOutcome {
    /// Same query as the one already applied; nothing changed.
    Unchanged,
    Applied { matches: usize, no_results: bool },
}

/// Snapshot handed to the presentation layer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageView<'a> {
    pub visible: Vec<&'a Product>,
    pub controls: Vec<ControlElement>,
    pub current_page: usize,
    pub total_pages: usize,
    pub total_items: usize,
    pub no_results: bool,
}

/// Owns the query, the current page and the match set.
///
/// State only changes through [`on_query_change`](Self::on_query_change) and
/// [`on_page_change`](Self::on_page_change); everything else is derived.
#[derive(Debug, Clone)]
pub struct FilterController {
    catalog: Arc<ProductCatalog>,
    page_size: usize,
    suggestion_limit: usize,
    state: FilterState,
}

impl FilterController {
    pub fn new(catalog: Arc<ProductCatalog>, page_size: usize, suggestion_limit: usize) -> Self {
        let state = FilterState::unfiltered(&catalog);
        Self {
            catalog,
            page_size: page_size.max(1),
            suggestion_limit,
            state,
        }
    }

    pub fn from_context(ctx: &Context) -> Self {
        Self::new(
            Arc::clone(&ctx.catalog),
            ctx.settings.page_size,
            ctx.settings.suggestion_limit,
        )
    }

    pub fn state(&self) -> &FilterState {
        &self.state
    }

    pub fn current_page(&self) -> usize {
        self.state.current_page
    }

    pub fn total_pages(&self) -> usize {
        total_pages(self.state.matches.len(), self.page_size)
    }

    /// Re-filter when the query really changed, resetting to the first page.
    pub fn on_query_change(&mut self, new_query: &str) -> QueryOutcome {
        let query_key = normalize_query(new_query);
        if query_key == self.state.query_key {
            return QueryOutcome::Unchanged;
        }

        let matches = filter_positions(self.catalog.products(), new_query);
        let no_results = matches.is_empty() && !new_query.trim().is_empty();

        self.state = FilterState {
            query: new_query.trim().to_owned(),
            query_key,
            current_page: 1,
            matches,
            no_results,
        };

        debug!(
            query = %self.state.query,
            matches = self.state.matches.len(),
            no_results,
            "query applied"
        );

        QueryOutcome::Applied {
            matches: self.state.matches.len(),
            no_results,
        }
    }

    /// Move to `new_page` on the unchanged match set.
    ///
    /// Out-of-range pages are rejected without touching state.
    pub fn on_page_change(&mut self, new_page: usize) -> bool {
        let total = self.total_pages();
        if !(1..=total).contains(&new_page) {
            debug!(requested = new_page, total, "page change rejected");
            return false;
        }

        self.state.current_page = new_page;
        true
    }

    /// Apply a picked suggestion by filtering on its full name.
    pub fn on_suggestion_pick(&mut self, product: &Product) -> QueryOutcome {
        self.on_query_change(&product.name)
    }

    /// Interpret a click on a rendered pagination control.
    pub fn dispatch_control(&mut self, control_id: &str) -> Result<usize, ControlValidationError> {
        let token = validate_control_id(control_id, self.total_pages())?;
        if self.on_page_change(token.page) {
            Ok(token.page)
        } else {
            Err(ControlValidationError::OutOfRange)
        }
    }

    /// Ranked suggestions for live (not yet applied) input.
    pub fn suggestions(&self, raw_input: &str) -> Vec<&Product> {
        suggest(self.catalog.products(), raw_input, self.suggestion_limit)
    }

    /// Derive the visible page and its controls from current state.
    pub fn view(&self) -> PageView<'_> {
        let products = self.catalog.products();
        let page = paginate(&self.state.matches, self.state.current_page, self.page_size);

        PageView {
            visible: page.visible.iter().map(|&index| &products[index]).collect(),
            controls: build_page_controls(self.state.current_page, page.total_pages),
            current_page: self.state.current_page,
            total_pages: page.total_pages,
            total_items: self.state.matches.len(),
            no_results: self.state.no_results,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use rstest::{fixture, rstest};

    #[fixture]
    fn small() -> FilterController {
        let catalog = ProductCatalog::new(vec![
            Product::new("a", "Áo sơ mi trắng"),
            Product::new("b", "Áo thun đen"),
            Product::new("c", "Quần jean"),
        ])
        .unwrap();
        FilterController::new(Arc::new(catalog), 12, 6)
    }

    fn numbered(count: usize) -> FilterController {
        let products = (1..=count)
            .map(|i| Product::new(i.to_string(), format!("Sản phẩm {i}")))
            .collect();
        FilterController::new(Arc::new(ProductCatalog::new(products).unwrap()), 12, 6)
    }

    fn visible_ids(controller: &FilterController) -> Vec<String> {
        controller
            .view()
            .visible
            .iter()
            .map(|p| p.id.to_string())
            .collect()
    }

    #[rstest]
    fn starts_unfiltered(small: FilterController) {
        let view = small.view();
        assert_eq!(view.total_items, 3);
        assert_eq!(view.total_pages, 1);
        assert!(!view.no_results);
        assert_eq!(small.clone().on_query_change(""), QueryOutcome::Unchanged);
    }

    #[rstest]
    fn query_filters_in_catalog_order(mut small: FilterController) {
        assert_eq!(
            small.on_query_change("áo"),
            QueryOutcome::Applied {
                matches: 2,
                no_results: false
            }
        );
        assert_eq!(visible_ids(&small), ["a", "b"]);

        small.on_query_change("at");
        assert_eq!(visible_ids(&small), ["b"]);
    }

    #[rstest]
    fn equivalent_queries_are_unchanged(mut small: FilterController) {
        small.on_query_change("áo");
        assert_eq!(small.on_query_change("  ÁO "), QueryOutcome::Unchanged);
        assert_eq!(small.state().query, "áo");
    }

    #[rstest]
    fn no_results_only_for_non_blank_queries(mut small: FilterController) {
        small.on_query_change("xyz");
        let view = small.view();
        assert!(view.no_results);
        assert!(view.visible.is_empty());
        assert_eq!(view.total_pages, 1);

        small.on_query_change("   ");
        assert!(!small.view().no_results);
        assert_eq!(small.view().total_items, 3);
    }

    #[rstest]
    fn empty_catalog_degrades_to_zero_results() {
        let mut controller = FilterController::new(Arc::new(ProductCatalog::empty()), 12, 6);
        assert_eq!(controller.view().total_items, 0);
        assert_eq!(controller.total_pages(), 1);
        controller.on_query_change("áo");
        assert!(controller.view().no_results);
        assert!(!controller.on_page_change(2));
    }

    #[rstest]
    fn pages_through_twenty_five_products() {
        let mut controller = numbered(25);
        assert_eq!(controller.total_pages(), 3);
        assert_eq!(controller.view().visible.len(), 12);

        assert!(controller.on_page_change(3));
        assert_eq!(visible_ids(&controller), ["25"]);
    }

    #[rstest]
    #[case(0)]
    #[case(4)]
    #[case(usize::MAX)]
    fn out_of_range_pages_are_ignored(#[case] page: usize) {
        let mut controller = numbered(25);
        controller.on_page_change(2);
        let before = controller.state().clone();

        assert!(!controller.on_page_change(page));
        assert_eq!(controller.state(), &before);
    }

    #[rstest]
    fn same_page_is_idempotent() {
        let mut controller = numbered(40);
        controller.on_page_change(2);
        let before = (visible_ids(&controller), controller.view().controls);

        assert!(controller.on_page_change(controller.current_page()));
        assert_eq!((visible_ids(&controller), controller.view().controls), before);
    }

    #[rstest]
    fn query_change_resets_page() {
        let mut controller = numbered(30);
        controller.on_page_change(3);
        controller.on_query_change("sản phẩm 1");
        assert_eq!(controller.current_page(), 1);
    }

    #[rstest]
    fn suggestion_pick_filters_by_full_name(mut small: FilterController) {
        let picked = small.suggestions("thun")[0].clone();
        assert_eq!(picked.id.as_str(), "b");

        small.on_suggestion_pick(&picked);
        assert_eq!(small.state().query, "Áo thun đen");
        assert_eq!(visible_ids(&small), ["b"]);
    }

    #[rstest]
    fn dispatches_rendered_controls() {
        let mut controller = numbered(120);
        let total = controller.total_pages();
        assert_eq!(total, 10);

        let next = controller.view().controls[3]
            .control_id(total)
            .expect("page button has an id");
        assert_eq!(controller.dispatch_control(&next), Ok(2));
        assert_eq!(controller.current_page(), 2);

        assert_eq!(controller.dispatch_control("pg:last:10:10"), Ok(10));
        assert_eq!(
            controller.dispatch_control("pg:page:1:9"),
            Err(ControlValidationError::Stale)
        );
        assert_eq!(
            controller.dispatch_control("bogus"),
            Err(ControlValidationError::Invalid)
        );
        assert_eq!(controller.current_page(), 10);
    }

    #[derive(Debug, Clone)]
    enum Event {
        Query(String),
        Page(usize),
    }

    fn arb_event() -> impl Strategy<Value = Event> {
        prop_oneof![
            "(sản phẩm )?[0-9]{0,2}".prop_map(Event::Query),
            (0usize..15).prop_map(Event::Page),
        ]
    }

    proptest! {
        #[test]
        fn current_page_stays_in_bounds(
            count in 0usize..80,
            events in prop::collection::vec(arb_event(), 0..30),
        ) {
            let mut controller = numbered(count);
            for event in events {
                match event {
                    Event::Query(query) => { controller.on_query_change(&query); }
                    Event::Page(page) => { controller.on_page_change(page); }
                }
                let page = controller.current_page();
                prop_assert!(page >= 1 && page <= controller.total_pages().max(1));
                prop_assert!(controller.view().visible.len() <= 12);
            }
        }
    }
}
