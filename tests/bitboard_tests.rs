use broadside::{BitBoard, BitBoardError, Coordinate};

#[test]
fn test_get_set_bounds() {
    let mut bb = BitBoard::<u128, 10>::new();
    assert!(bb.is_empty());

    bb.set(9, 9).unwrap();
    assert!(bb.get(9, 9).unwrap());
    assert!(bb.contains(Coordinate::new(9, 9).unwrap()));
    assert_eq!(
        bb.set(10, 0).unwrap_err(),
        BitBoardError::IndexOutOfBounds { row: 10, col: 0 }
    );
    assert_eq!(bb.count_ones(), 1);
}

#[test]
fn test_insert_by_coordinate() {
    let mut bb = BitBoard::<u128, 10>::new();
    let cell = Coordinate::new(4, 7).unwrap();
    bb.insert(cell);
    bb.insert(cell);
    assert!(bb.contains(cell));
    assert!(bb.get(4, 7).unwrap());
    assert_eq!(bb.count_ones(), 1);

    // A smaller grid ignores coordinates outside it.
    let mut small = BitBoard::<u16, 3>::new();
    small.insert(Coordinate::new(5, 5).unwrap());
    assert!(small.is_empty());
    assert!(!small.contains(Coordinate::new(5, 5).unwrap()));
}

#[test]
fn test_from_cells_and_iter() {
    let mut bb = BitBoard::<u128, 10>::from_cells([(0, 1), (3, 3)]).unwrap();
    let bits: Vec<_> = bb.iter_set_bits().collect();
    assert_eq!(bits, vec![(0, 1), (3, 3)]);

    let other = BitBoard::<u128, 10>::from_cells([(3, 3), (5, 5)]).unwrap();
    assert_eq!((bb & other).count_ones(), 1);
    bb |= other;
    assert_eq!(bb.count_ones(), 3);
}
