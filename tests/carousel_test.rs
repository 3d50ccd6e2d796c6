use smile_desk::domain::catalog;
use smile_desk::{Carousel, DeskError, PracticeConfig};

#[test]
fn test_next_cycles_back_to_start_from_every_index() {
    let testimonials = catalog::default_testimonials();
    let len = testimonials.len();

    for start in 0..len {
        let mut carousel = Carousel::new(&testimonials).unwrap();
        carousel.go_to(start).unwrap();
        for _ in 0..len {
            carousel.next();
        }
        assert_eq!(carousel.current_index(), start);
    }
}

#[test]
fn test_previous_inverts_next() {
    let testimonials = catalog::default_testimonials();
    let mut carousel = Carousel::new(&testimonials).unwrap();

    for start in 0..testimonials.len() {
        carousel.go_to(start).unwrap();
        carousel.next();
        carousel.previous();
        assert_eq!(carousel.current_index(), start);

        carousel.previous();
        carousel.next();
        assert_eq!(carousel.current_index(), start);
    }
}

#[test]
fn test_three_item_wraparound() {
    let items = ["first", "second", "third"];
    let mut carousel = Carousel::new(&items).unwrap();

    assert_eq!(carousel.previous(), 2);
    assert_eq!(carousel.next(), 0);
}

#[test]
fn test_go_to_rejects_out_of_range() {
    let testimonials = catalog::default_testimonials();
    let mut carousel = Carousel::new(&testimonials).unwrap();
    carousel.go_to(3).unwrap();

    for bad in [6, 7, usize::MAX] {
        match carousel.go_to(bad) {
            Err(DeskError::IndexOutOfRange { requested, length }) => {
                assert_eq!(requested, bad);
                assert_eq!(length, 6);
            }
            other => panic!("expected IndexOutOfRange, got {:?}", other),
        }
        assert_eq!(carousel.current_index(), 3);
    }
}

#[test]
fn test_carousel_over_configured_testimonials() {
    let config = PracticeConfig::from_toml_str(
        r#"
[[testimonials]]
id = 10
name = "Ana Lima"
location = "Harbor"
rating = 5
text = "Great"
treatment = "Cleaning"
before_after = true

[[testimonials]]
id = 11
name = "Li Wei"
location = "Hills"
rating = 4
text = "Quick"
treatment = "Whitening"
"#,
    )
    .unwrap();

    let testimonials = config.testimonials();
    let mut carousel = Carousel::new(&testimonials).unwrap();
    assert_eq!(carousel.current().initials(), "AL");
    assert!(carousel.current().has_before_after_media);

    carousel.previous();
    assert_eq!(carousel.current().id, 11);
    assert_eq!(carousel.current().stars(), "★★★★☆");
    assert!(carousel.is_active(1));
}
