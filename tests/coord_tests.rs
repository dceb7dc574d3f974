use broadside::{Coordinate, Direction, ParseError};

#[test]
fn test_parse_round_trip_all_variants() {
    for c in Coordinate::all() {
        let canonical = c.to_string();
        let mut chars = canonical.chars();
        let digit = chars.next().unwrap();
        let letter = chars.next().unwrap();
        let lower = letter.to_ascii_lowercase();

        for text in [
            format!("{}{}", digit, letter),
            format!("{}{}", digit, lower),
            format!("{}{}", letter, digit),
            format!("{}{}", lower, digit),
        ] {
            assert_eq!(Coordinate::parse(&text), Ok(c), "failed on {}", text);
        }
    }
}

#[test]
fn test_canonical_rendering() {
    assert_eq!(Coordinate::new(6, 0).unwrap().to_string(), "6A");
    assert_eq!(Coordinate::new(0, 9).unwrap().to_string(), "0J");
    assert_eq!("j9".parse::<Coordinate>().unwrap().to_string(), "9J");
}

#[test]
fn test_parse_rejects_wrong_length() {
    assert_eq!(Coordinate::parse(""), Err(ParseError::WrongLength { len: 0 }));
    assert_eq!(Coordinate::parse("A"), Err(ParseError::WrongLength { len: 1 }));
    assert_eq!(Coordinate::parse("A10"), Err(ParseError::WrongLength { len: 3 }));
}

#[test]
fn test_parse_rejects_bad_characters() {
    for text in ["AA", "11", "K1", "1K", "?3", "é1", "  "] {
        assert_eq!(
            Coordinate::parse(text),
            Err(ParseError::InvalidCharacters),
            "accepted {:?}",
            text
        );
    }
}

#[test]
fn test_new_bounds() {
    assert!(Coordinate::new(9, 9).is_some());
    assert!(Coordinate::new(10, 0).is_none());
    assert!(Coordinate::new(0, 10).is_none());
}

#[test]
fn test_step_and_parity() {
    let corner = Coordinate::new(0, 0).unwrap();
    assert_eq!(corner.step(Direction::Up), None);
    assert_eq!(corner.step(Direction::Left), None);
    assert_eq!(corner.step(Direction::Down), Coordinate::new(1, 0));
    assert_eq!(corner.step(Direction::Right), Coordinate::new(0, 1));
    assert_eq!(Coordinate::new(9, 9).unwrap().step(Direction::Down), None);

    assert_eq!(corner.parity(), 0);
    assert_eq!(Coordinate::new(3, 4).unwrap().parity(), 1);
    assert_eq!(Coordinate::all().filter(|c| c.parity() == 0).count(), 50);
}
