// Host-side tests for the page-level interactions (gallery, chrome, tilt, parallax).
// These mirror what the wasm wiring does with the DOM, using plain data instead.

use folio_core::chrome::{
    scroll_progress, transition_target, ClickModifiers, ScrollMetrics, TransitionPlan,
};
use folio_core::gallery::{active_flags, on_intersect, CardClassOp, FilterSelection, RevealPlan};
use folio_core::parallax::{layer_factors, layer_transform, ParallaxScroll};
use folio_core::tilt::CardTilt;
use folio_core::Rect;
use glam::DVec2;
use std::collections::BTreeSet;

struct Card {
    cats: Option<&'static str>,
    display: &'static str,
    classes: BTreeSet<&'static str>,
}

impl Card {
    fn apply(&mut self, op: CardClassOp) {
        match op {
            CardClassOp::Add(class) => {
                self.classes.insert(class);
            }
            CardClassOp::Swap(swap) => {
                self.classes.remove(swap.remove);
                self.classes.insert(swap.add);
            }
        }
    }
}

fn gallery() -> Vec<Card> {
    [Some("brand web"), Some("print"), None, Some("web motion")]
        .into_iter()
        .map(|cats| Card {
            cats,
            display: "",
            classes: BTreeSet::new(),
        })
        .collect()
}

fn click_filter(cards: &mut [Card], data_filter: Option<&str>) {
    let sel = FilterSelection::from_attr(data_filter);
    for card in cards.iter_mut() {
        card.display = sel.display_for(card.cats);
    }
}

fn visible(cards: &[Card]) -> Vec<usize> {
    cards
        .iter()
        .enumerate()
        .filter(|(_, c)| c.display.is_empty())
        .map(|(i, _)| i)
        .collect()
}

#[test]
fn filter_clicks_hide_and_restore_cards() {
    let mut cards = gallery();
    click_filter(&mut cards, Some("web"));
    assert_eq!(visible(&cards), vec![0, 3]);

    click_filter(&mut cards, Some("print"));
    assert_eq!(visible(&cards), vec![1]);

    click_filter(&mut cards, Some("all"));
    assert_eq!(visible(&cards), vec![0, 1, 2, 3]);

    click_filter(&mut cards, Some("motion"));
    click_filter(&mut cards, None);
    assert_eq!(visible(&cards), vec![0, 1, 2, 3]);
}

#[test]
fn filter_buttons_track_the_last_click() {
    let buttons = ["all", "web", "print"];
    for clicked in [1, 2, 0] {
        let active = active_flags(clicked, buttons.len());
        assert_eq!(active.iter().filter(|on| **on).count(), 1);
        assert!(active[clicked]);
    }
    assert_eq!(active_flags(0, buttons.len()), vec![true, false, false]);
}

#[test]
fn cards_are_hidden_then_revealed_once_in_view() {
    let mut cards = gallery();
    let plan = RevealPlan::for_motion(false);
    for card in cards.iter_mut() {
        plan.on_load().into_iter().for_each(|op| card.apply(op));
    }
    assert!(cards.iter().all(|c| c.classes.contains("wcard--hidden")));

    // Only the first card scrolls into view.
    let mut watched = vec![true; cards.len()];
    for (i, card) in cards.iter_mut().enumerate() {
        if let Some(action) = on_intersect(i == 0) {
            card.apply(CardClassOp::Swap(action.swap));
            watched[i] = !action.unobserve;
        }
    }
    assert_eq!(
        cards[0].classes.iter().copied().collect::<Vec<_>>(),
        vec!["wcard--visible"]
    );
    assert!(cards[1].classes.contains("wcard--hidden"));
    assert_eq!(watched, vec![false, true, true, true]);
}

#[test]
fn reduced_motion_reveals_every_card_up_front() {
    let mut cards = gallery();
    let plan = RevealPlan::for_motion(true);
    for card in cards.iter_mut() {
        plan.on_load().into_iter().for_each(|op| card.apply(op));
    }
    assert!(cards
        .iter()
        .all(|c| c.classes.contains("wcard--visible") && !c.classes.contains("wcard--hidden")));
}

#[test]
fn page_enter_class_is_added_even_with_reduced_motion() {
    for reduced in [false, true] {
        let plan = TransitionPlan::for_motion(reduced);
        assert_eq!(plan.body_class, "page-enter");
        assert_eq!(plan.intercept_links, !reduced);
    }
}

#[test]
fn plain_link_click_navigates_after_exit() {
    let click = ClickModifiers::default();
    assert_eq!(transition_target(click, Some("work.html")), Some("work.html"));
    let middle = ClickModifiers {
        button: 1,
        ..click
    };
    assert_eq!(transition_target(middle, Some("work.html")), None);
}

#[test]
fn progress_bar_tracks_scroll() {
    let mut m = ScrollMetrics {
        scroll_top: 0.0,
        scroll_height: 3000.0,
        viewport_height: 1000.0,
    };
    assert_eq!(scroll_progress(m, false).to_string(), "0%");
    m.scroll_top = 1000.0;
    assert_eq!(scroll_progress(m, false).to_string(), "50%");
    m.scroll_top = 2000.0;
    assert_eq!(scroll_progress(m, false).to_string(), "100%");
    assert_eq!(scroll_progress(m, true).to_string(), "0");
}

#[test]
fn contact_card_tilts_toward_pointer() {
    let rect = Rect::new(0.0, 0.0, 300.0, 200.0);
    let bottom_left = CardTilt::from_pointer(rect, DVec2::new(0.0, 200.0)).unwrap();
    assert_eq!(bottom_left.rotate_x, -3.0);
    assert_eq!(bottom_left.rotate_y, -3.0);
    assert_eq!(
        bottom_left.transform(),
        "translateY(-5px) rotateX(-3deg) rotateY(-3deg)"
    );
}

#[test]
fn home_layers_lag_behind_scroll_then_settle() {
    let mut p = ParallaxScroll::new(0.0, layer_factors(true, 2));
    assert!(p.on_scroll(500.0));

    let (first, more) = p.step();
    assert!(more);
    assert_eq!(first.len(), 3);
    // Hero moves furthest, later sections further than earlier ones.
    assert!(first[0] < first[2] && first[2] < first[1]);

    let mut last = first;
    while let (offsets, true) = p.step() {
        last = offsets;
    }
    assert!((last[0] - -80.0).abs() < 1.0);
    assert_eq!(layer_transform(-12.5), "translateY(-12.5px)");
}
