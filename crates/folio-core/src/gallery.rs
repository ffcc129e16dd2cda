//! Work gallery: scroll-triggered card reveal and category filters.

use crate::constants::{REVEAL_ROOT_MARGIN, REVEAL_THRESHOLD};

pub const CARD_SELECTOR: &str = ".wcard";
pub const FILTER_SELECTOR: &str = ".filter";
pub const CARD_HIDDEN_CLASS: &str = "wcard--hidden";
pub const CARD_VISIBLE_CLASS: &str = "wcard--visible";
pub const FILTER_ACTIVE_CLASS: &str = "is-active";
pub const SHOW_ALL: &str = "all";

/// How cards get from hidden to visible.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum RevealPlan {
    /// Reveal everything up front.
    Immediate,
    /// Reveal each card once it scrolls into view, then stop watching it.
    OnIntersect {
        threshold: f64,
        root_margin: &'static str,
    },
}

impl RevealPlan {
    pub fn for_motion(reduced_motion: bool) -> Self {
        if reduced_motion {
            RevealPlan::Immediate
        } else {
            RevealPlan::OnIntersect {
                threshold: REVEAL_THRESHOLD,
                root_margin: REVEAL_ROOT_MARGIN,
            }
        }
    }

    /// Class changes every card gets as soon as the gallery is wired.
    pub fn on_load(&self) -> Vec<CardClassOp> {
        let mut ops = vec![CardClassOp::Add(CARD_HIDDEN_CLASS)];
        if matches!(self, RevealPlan::Immediate) {
            ops.push(CardClassOp::Swap(REVEAL_SWAP));
        }
        ops
    }
}

/// What to do with a card reported by the intersection observer. Revealing is
/// one-shot: the card is swapped and no longer watched.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct IntersectAction {
    pub swap: ClassSwap,
    pub unobserve: bool,
}

pub fn on_intersect(is_intersecting: bool) -> Option<IntersectAction> {
    is_intersecting.then_some(IntersectAction {
        swap: REVEAL_SWAP,
        unobserve: true,
    })
}

/// A single class-list edit on a card.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CardClassOp {
    Add(&'static str),
    Swap(ClassSwap),
}

/// `is-active` state for each filter button after `clicked` was pressed.
pub fn active_flags(clicked: usize, count: usize) -> Vec<bool> {
    (0..count).map(|i| i == clicked).collect()
}

/// A class swap applied to a single element.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ClassSwap {
    pub remove: &'static str,
    pub add: &'static str,
}

pub const REVEAL_SWAP: ClassSwap = ClassSwap {
    remove: CARD_HIDDEN_CLASS,
    add: CARD_VISIBLE_CLASS,
};

/// The category chosen with a filter button's `data-filter`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum FilterSelection {
    All,
    Category(String),
}

impl FilterSelection {
    /// A missing or empty attribute, or `all`, selects every card.
    pub fn from_attr(value: Option<&str>) -> Self {
        match value {
            None | Some("") | Some(SHOW_ALL) => FilterSelection::All,
            Some(cat) => FilterSelection::Category(cat.to_string()),
        }
    }

    /// `categories` is a card's space-separated `data-cat` list.
    pub fn matches(&self, categories: Option<&str>) -> bool {
        match self {
            FilterSelection::All => true,
            FilterSelection::Category(sel) => categories
                .unwrap_or("")
                .split(' ')
                .any(|cat| cat == sel),
        }
    }

    /// Value for the card's inline `display`: empty restores the stylesheet.
    pub fn display_for(&self, categories: Option<&str>) -> &'static str {
        if self.matches(categories) {
            ""
        } else {
            "none"
        }
    }
}
