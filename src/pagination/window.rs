//! Page window computation
//!
//! Picks which page numbers are shown for a given position. Small result
//! sets list every page; larger ones collapse into a leading run, an
//! optional run around the current page, and a trailing run.

use super::types::Window;

/// Pages shown on each side of the current page
pub const ON_EACH_SIDE: u64 = 3;

/// Below this many pages the window lists every page
pub const COLLAPSE_THRESHOLD: u64 = ON_EACH_SIDE * 2 + 6;

/// Compute the window for `current_page` out of `total_pages`.
///
/// `current_page` must already be clamped into `[1, total_pages]`. Returns an
/// empty window when there is at most one page.
pub fn compute_window(total_pages: u64, current_page: u64) -> Window {
    if total_pages <= 1 {
        return Window::default();
    }

    if total_pages < COLLAPSE_THRESHOLD {
        return Window {
            first: (1..=total_pages).collect(),
            ..Window::default()
        };
    }

    let edge = ON_EACH_SIDE * 2;

    if current_page < edge {
        Window {
            first: (1..=edge + 2).collect(),
            middle: Vec::new(),
            last: tail(total_pages),
        }
    } else if current_page > total_pages - edge {
        Window {
            first: head(),
            middle: Vec::new(),
            last: (total_pages - (edge + 2)..=total_pages).collect(),
        }
    } else {
        Window {
            first: head(),
            middle: (current_page - ON_EACH_SIDE..=current_page + ON_EACH_SIDE).collect(),
            last: tail(total_pages),
        }
    }
}

fn head() -> Vec<u64> {
    vec![1, 2]
}

fn tail(total_pages: u64) -> Vec<u64> {
    vec![total_pages - 1, total_pages]
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_case::test_case;

    #[test_case(0, 1 ; "no pages")]
    #[test_case(1, 1 ; "single page")]
    fn test_trivial_windows_are_empty(total: u64, current: u64) {
        assert!(compute_window(total, current).is_empty());
    }

    #[test_case(2)]
    #[test_case(7)]
    #[test_case(11)]
    fn test_small_result_sets_list_every_page(total: u64) {
        for current in 1..=total {
            let window = compute_window(total, current);
            assert_eq!(window.first, (1..=total).collect::<Vec<_>>());
            assert!(window.middle.is_empty());
            assert!(window.last.is_empty());
        }
    }

    #[test]
    fn test_threshold_collapses() {
        let window = compute_window(12, 1);
        assert_eq!(window.first, vec![1, 2, 3, 4, 5, 6, 7, 8]);
        assert_eq!(window.last, vec![11, 12]);
    }

    #[test_case(1)]
    #[test_case(2)]
    #[test_case(5)]
    fn test_near_start(current: u64) {
        let window = compute_window(50, current);
        assert_eq!(window.first, (1..=8).collect::<Vec<_>>());
        assert!(window.middle.is_empty());
        assert_eq!(window.last, vec![49, 50]);
    }

    #[test_case(45)]
    #[test_case(48)]
    #[test_case(50)]
    fn test_near_end(current: u64) {
        let window = compute_window(50, current);
        assert_eq!(window.first, vec![1, 2]);
        assert!(window.middle.is_empty());
        assert_eq!(window.last, (42..=50).collect::<Vec<_>>());
    }

    #[test_case(6, 3..=9 ; "first interior page")]
    #[test_case(25, 22..=28 ; "middle")]
    #[test_case(44, 41..=47 ; "last interior page")]
    fn test_interior(current: u64, middle: std::ops::RangeInclusive<u64>) {
        let window = compute_window(50, current);
        assert_eq!(window.first, vec![1, 2]);
        assert_eq!(window.middle, middle.collect::<Vec<_>>());
        assert_eq!(window.last, vec![49, 50]);
    }

    #[test]
    fn test_windows_are_disjoint_and_in_range() {
        for total in 2..=60 {
            for current in 1..=total {
                let window = compute_window(total, current);
                let pages: Vec<u64> = window.pages().collect();

                let mut sorted = pages.clone();
                sorted.sort_unstable();
                sorted.dedup();
                assert_eq!(sorted, pages, "total={total} current={current}");

                assert!(pages.iter().all(|p| (1..=total).contains(p)));
                assert!(pages.contains(&current), "total={total} current={current}");
            }
        }
    }
}
