use std::{cell::RefCell, rc::Rc};

use super::*;

fn close(a: f64, b: f64) -> bool {
    (a - b).abs() < 1e-9
}

#[test]
fn parses_keyword_and_percent_offsets() {
    let o: ScrollOffset = "start 80%".parse().unwrap();
    assert_eq!(o, ScrollOffset::new(0.0, 0.8));
    let o: ScrollOffset = "end end".parse().unwrap();
    assert_eq!(o, ScrollOffset::new(1.0, 1.0));
    let o: ScrollOffset = "center 0.25".parse().unwrap();
    assert_eq!(o, ScrollOffset::new(0.5, 0.25));
}

#[test]
fn rejects_malformed_offsets() {
    assert!("start".parse::<ScrollOffset>().is_err());
    assert!("start 80% extra".parse::<ScrollOffset>().is_err());
    assert!("top 80%".parse::<ScrollOffset>().is_err());
    assert!("start abc%".parse::<ScrollOffset>().is_err());
}

#[test]
fn offsets_round_trip_through_json() {
    let range = ScrollRange::parse("start 85%", "end 60%").unwrap();
    let s = serde_json::to_string(&range).unwrap();
    let back: ScrollRange = serde_json::from_str(&s).unwrap();
    assert!(close(back.start.viewport, 0.85));
    assert!(close(back.end.viewport, 0.6));
}

#[test]
fn full_range_spans_the_scrollable_height() {
    let page = Region::new(0.0, 3000.0);
    assert_eq!(region_progress(ScrollRange::FULL, page, 1000.0, 0.0), 0.0);
    assert!(close(
        region_progress(ScrollRange::FULL, page, 1000.0, 1000.0),
        0.5
    ));
    assert_eq!(region_progress(ScrollRange::FULL, page, 1000.0, 2000.0), 1.0);
    assert_eq!(region_progress(ScrollRange::FULL, page, 1000.0, 9000.0), 1.0);
    assert_eq!(region_progress(ScrollRange::FULL, page, 1000.0, -50.0), 0.0);
}

#[test]
fn viewport_relative_offsets_shift_the_window() {
    // start when the top of the section reaches 80% of the viewport, end when
    // its bottom reaches 25%.
    let range = ScrollRange::parse("start 80%", "end 25%").unwrap();
    let section = Region::new(1000.0, 1000.0);
    let vh = 1000.0;
    assert_eq!(region_progress(range, section, vh, 200.0), 0.0);
    assert_eq!(region_progress(range, section, vh, 1750.0), 1.0);
    assert!(close(region_progress(range, section, vh, 975.0), 0.5));
}

#[test]
fn inverted_window_is_a_step() {
    let range = ScrollRange::parse("end 0%", "start 100%").unwrap();
    let r = Region::new(500.0, 100.0);
    assert_eq!(region_progress(range, r, 1000.0, -600.0), 0.0);
    assert_eq!(region_progress(range, r, 1000.0, -500.0), 1.0);
}

#[test]
fn publish_notifies_subscribers_in_order() {
    let seen = Rc::new(RefCell::new(Vec::new()));
    let mut src = ProgressSource::new();

    let a = Rc::clone(&seen);
    src.subscribe(move |p| a.borrow_mut().push(("a", p)));
    let b = Rc::clone(&seen);
    let id_b = src.subscribe(move |p| b.borrow_mut().push(("b", p)));

    src.publish(0.25);
    assert_eq!(src.get(), 0.25);
    assert_eq!(*seen.borrow(), vec![("a", 0.25), ("b", 0.25)]);

    assert!(src.unsubscribe(id_b));
    assert!(!src.unsubscribe(id_b));
    src.publish(0.5);
    assert_eq!(seen.borrow().len(), 3);
    assert_eq!(src.subscriber_count(), 1);

    src.clear();
    assert_eq!(src.subscriber_count(), 0);
}

#[test]
fn offsets_serialize_in_css_form() {
    assert_eq!(String::from(ScrollOffset::new(0.0, 0.29)), "start 29%");
    assert_eq!(String::from(ScrollOffset::new(1.0, 0.25)), "end 25%");
    assert_eq!(String::from(ScrollOffset::new(0.5, 1.0)), "center 100%");
    assert_eq!(String::from(ScrollOffset::new(0.3, 0.0)), "0.3 0%");

    let back: ScrollOffset = String::from(ScrollOffset::new(0.0, 0.29)).parse().unwrap();
    assert_eq!(back, ScrollOffset::new(0.0, 0.29));
}
