//! Declarative pagination controls (first/prev/numbers/next/last).

use super::token::{ControlAction, build_control_id};

/// Number of page buttons shown on each side of the current page.
const WINDOW_RADIUS: usize = 2;

/// One element of the pagination control strip.
///
/// Clickable variants embed the page they lead to, so a single dispatcher can
/// interpret clicks without per-button state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ControlElement {
    FirstButton { target: usize, disabled: bool },
    PrevButton { target: usize, disabled: bool },
    PageButton { number: usize, active: bool },
    Ellipsis,
    NextButton { target: usize, disabled: bool },
    LastButton { target: usize, disabled: bool },
}

impl ControlElement {
    /// Page this element navigates to, if it is clickable.
    pub fn target_page(&self) -> Option<usize> {
        match *self {
            Self::FirstButton { target, .. }
            | Self::PrevButton { target, .. }
            | Self::NextButton { target, .. }
            | Self::LastButton { target, .. } => Some(target),
            Self::PageButton { number, .. } => Some(number),
            Self::Ellipsis => None,
        }
    }

    pub fn is_disabled(&self) -> bool {
        match *self {
            Self::FirstButton { disabled, .. }
            | Self::PrevButton { disabled, .. }
            | Self::NextButton { disabled, .. }
            | Self::LastButton { disabled, .. } => disabled,
            Self::PageButton { .. } | Self::Ellipsis => false,
        }
    }

    fn action(&self) -> Option<ControlAction> {
        match self {
            Self::FirstButton { .. } => Some(ControlAction::First),
            Self::PrevButton { .. } => Some(ControlAction::Prev),
            Self::PageButton { .. } => Some(ControlAction::Page),
            Self::NextButton { .. } => Some(ControlAction::Next),
            Self::LastButton { .. } => Some(ControlAction::Last),
            Self::Ellipsis => None,
        }
    }

    /// Compact click id for this element, `None` for ellipses.
    pub fn control_id(&self, total_pages: usize) -> Option<String> {
        let action = self.action()?;
        let target = self.target_page()?;
        Some(build_control_id(action, target, total_pages))
    }
}

/// Build the control strip for `current_page` out of `total_pages`.
///
/// The strip has a bounded width regardless of `total_pages`: at most five
/// numbered buttons around the current page, the first/last page buttons,
/// two ellipses and the four navigation buttons.
pub fn build_page_controls(current_page: usize, total_pages: usize) -> Vec<ControlElement> {
    let total_pages = total_pages.max(1);
    let mut controls = Vec::with_capacity(13);

    let at_start = current_page == 1;
    controls.push(ControlElement::FirstButton {
        target: 1,
        disabled: at_start,
    });
    controls.push(ControlElement::PrevButton {
        target: current_page.saturating_sub(1).max(1),
        disabled: at_start,
    });

    let window_start = current_page.saturating_sub(WINDOW_RADIUS).max(1);
    let window_end = current_page.saturating_add(WINDOW_RADIUS).min(total_pages);

    if current_page > WINDOW_RADIUS + 1 {
        controls.push(page_button(1, current_page));
        if current_page > WINDOW_RADIUS + 2 {
            controls.push(ControlElement::Ellipsis);
        }
    }

    controls.extend((window_start..=window_end).map(|number| page_button(number, current_page)));

    // `current < total - 2` and `current < total - 3`, written without underflow.
    if current_page + WINDOW_RADIUS < total_pages {
        if current_page + WINDOW_RADIUS + 1 < total_pages {
            controls.push(ControlElement::Ellipsis);
        }
        controls.push(page_button(total_pages, current_page));
    }

    let at_end = current_page == total_pages;
    controls.push(ControlElement::NextButton {
        target: current_page.saturating_add(1).min(total_pages),
        disabled: at_end,
    });
    controls.push(ControlElement::LastButton {
        target: total_pages,
        disabled: at_end,
    });

    controls
}

fn page_button(number: usize, current_page: usize) -> ControlElement {
    ControlElement::PageButton {
        number,
        active: number == current_page,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use rstest::rstest;

    use ControlElement::*;

    fn page_numbers(controls: &[ControlElement]) -> Vec<usize> {
        controls
            .iter()
            .filter_map(|control| match control {
                PageButton { number, .. } => Some(*number),
                _ => None,
            })
            .collect()
    }

    #[rstest]
    fn middle_of_ten_pages() {
        assert_eq!(
            build_page_controls(5, 10),
            vec![
                FirstButton { target: 1, disabled: false },
                PrevButton { target: 4, disabled: false },
                PageButton { number: 1, active: false },
                Ellipsis,
                PageButton { number: 3, active: false },
                PageButton { number: 4, active: false },
                PageButton { number: 5, active: true },
                PageButton { number: 6, active: false },
                PageButton { number: 7, active: false },
                Ellipsis,
                PageButton { number: 10, active: false },
                NextButton { target: 6, disabled: false },
                LastButton { target: 10, disabled: false },
            ]
        );
    }

    #[rstest]
    fn single_page_disables_every_nav_button() {
        assert_eq!(
            build_page_controls(1, 1),
            vec![
                FirstButton { target: 1, disabled: true },
                PrevButton { target: 1, disabled: true },
                PageButton { number: 1, active: true },
                NextButton { target: 1, disabled: true },
                LastButton { target: 1, disabled: true },
            ]
        );
    }

    #[rstest]
    #[case(1, 10, vec![1, 2, 3, 10])]
    #[case(3, 10, vec![1, 2, 3, 4, 5, 10])]
    #[case(4, 10, vec![1, 2, 3, 4, 5, 6, 10])]
    #[case(7, 10, vec![1, 5, 6, 7, 8, 9, 10])]
    #[case(10, 10, vec![1, 8, 9, 10])]
    #[case(2, 3, vec![1, 2, 3])]
    fn page_numbers_follow_the_window(
        #[case] current: usize,
        #[case] total: usize,
        #[case] expected: Vec<usize>,
    ) {
        assert_eq!(page_numbers(&build_page_controls(current, total)), expected);
    }

    #[rstest]
    #[case(4, 10, 1)]
    #[case(5, 10, 2)]
    #[case(7, 10, 1)]
    #[case(1, 4, 0)]
    #[case(1, 5, 1)]
    fn ellipsis_counts(#[case] current: usize, #[case] total: usize, #[case] expected: usize) {
        let controls = build_page_controls(current, total);
        assert_eq!(controls.iter().filter(|c| **c == Ellipsis).count(), expected);
    }

    #[rstest]
    fn last_page_disables_forward_navigation() {
        let controls = build_page_controls(10, 10);
        assert!(controls[controls.len() - 1].is_disabled());
        assert!(controls[controls.len() - 2].is_disabled());
        assert!(!controls[0].is_disabled());
    }

    #[rstest]
    fn control_ids_embed_targets() {
        let controls = build_page_controls(5, 10);
        assert_eq!(controls[1].control_id(10).as_deref(), Some("pg:prev:4:10"));
        assert_eq!(controls[3].control_id(10), None);
        assert_eq!(controls[6].control_id(10).as_deref(), Some("pg:page:5:10"));
    }

    proptest! {
        #[test]
        fn control_strip_is_bounded(total in 1usize..=1000, seed in 0usize..1000) {
            let current = seed % total + 1;
            let controls = build_page_controls(current, total);

            let numbers = page_numbers(&controls);
            let window = numbers
                .iter()
                .filter(|n| n.abs_diff(current) <= WINDOW_RADIUS)
                .count();
            let ellipses = controls.iter().filter(|c| **c == Ellipsis).count();

            prop_assert!(window <= 5);
            prop_assert!(numbers.len() <= 7);
            prop_assert!(ellipses <= 2);
            prop_assert!(numbers.windows(2).all(|w| w[0] < w[1]));
            prop_assert_eq!(
                controls.iter().filter(|c| matches!(c, PageButton { active: true, .. })).count(),
                1
            );
            prop_assert!(controls
                .iter()
                .filter_map(ControlElement::target_page)
                .all(|page| (1..=total).contains(&page)));
        }
    }
}
