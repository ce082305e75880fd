use super::*;

#[test]
fn it_tags_regions_entering_the_viewport() {
    let mut reveal = Reveal::new(0.1);
    let regions = vec![Region::new("uno", 0, 10), Region::new("dos", 100, 10)];
    let viewport = Viewport { top: 0, height: 24 };

    assert_eq!(reveal.observe(&viewport, &regions), 1);
    assert!(reveal.is_revealed("uno"));
    assert!(!reveal.is_revealed("dos"));
}

#[test]
fn it_never_untags_a_region() {
    let mut reveal = Reveal::new(0.1);
    let regions = vec![Region::new("uno", 0, 10)];

    reveal.observe(&Viewport { top: 0, height: 24 }, &regions);
    assert!(reveal.is_revealed("uno"));

    // Scrolled far past, the region is fully out of view.
    assert_eq!(reveal.observe(&Viewport { top: 1000, height: 24 }, &regions), 0);
    assert!(reveal.is_revealed("uno"));
}

#[test]
fn it_respects_the_threshold_fraction() {
    let mut reveal = Reveal::new(0.5);
    let regions = vec![Region::new("uno", 0, 10)];

    // Two of ten rows visible.
    reveal.observe(&Viewport { top: 8, height: 24 }, &regions);
    assert!(!reveal.is_revealed("uno"));

    // Five of ten rows visible.
    reveal.observe(&Viewport { top: 5, height: 24 }, &regions);
    assert!(reveal.is_revealed("uno"));
}

#[test]
fn it_ignores_zero_height_regions() {
    let mut reveal = Reveal::new(0.1);
    let regions = vec![Region::new("vacia", 5, 0)];

    assert_eq!(reveal.observe(&Viewport { top: 0, height: 24 }, &regions), 0);
    assert!(!reveal.is_revealed("vacia"));
}

#[test]
fn it_evaluates_regions_independently() {
    let mut reveal = Reveal::new(0.1);
    let regions = vec![
        Region::new("uno", 0, 10),
        Region::new("dos", 20, 10),
        Region::new("tres", 100, 10),
    ];

    assert_eq!(reveal.observe(&Viewport { top: 0, height: 30 }, &regions), 2);
    assert!(reveal.is_revealed("uno"));
    assert!(reveal.is_revealed("dos"));
    assert!(!reveal.is_revealed("tres"));

    assert_eq!(reveal.observe(&Viewport { top: 95, height: 30 }, &regions), 1);
    assert_eq!(reveal.revealed_count(), 3);
}
