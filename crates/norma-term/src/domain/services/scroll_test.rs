use super::*;

#[test]
fn it_clamps_at_the_bottom() {
    let mut scroll = Scroll::default();
    scroll.set_state(100, 24);

    for _ in 0..500 {
        scroll.down();
    }

    assert_eq!(scroll.position, 76);
}

#[test]
fn it_clamps_at_the_top() {
    let mut scroll = Scroll::default();
    scroll.set_state(100, 24);

    scroll.up();

    assert_eq!(scroll.position, 0);
}

#[test]
fn it_pages_by_the_viewport_height() {
    let mut scroll = Scroll::default();
    scroll.set_state(100, 24);

    scroll.down_page();
    assert_eq!(scroll.position, 24);

    scroll.up_page();
    assert_eq!(scroll.position, 0);
}

#[test]
fn it_jumps_to_the_ends() {
    let mut scroll = Scroll::default();
    scroll.set_state(100, 24);

    scroll.last();
    assert_eq!(scroll.position, 76);

    scroll.first();
    assert_eq!(scroll.position, 0);
}

#[test]
fn it_reclamps_when_the_document_shrinks() {
    let mut scroll = Scroll::default();
    scroll.set_state(100, 24);
    scroll.last();

    scroll.set_state(50, 24);

    assert_eq!(scroll.position, 26);
}

#[test]
fn it_never_scrolls_a_short_document() {
    let mut scroll = Scroll::default();
    scroll.set_state(10, 24);

    scroll.down();
    scroll.down_page();
    scroll.last();

    assert_eq!(scroll.position, 0);
}
