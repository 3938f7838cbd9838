use itertools::Itertools;

use rack_solver::letter::{InvalidLetter, Letter, Mask};

#[test]
fn letter_from_char_normalizes_case() {
    let upper = Letter::from_char('Q').unwrap();
    let lower = Letter::from_char('q').unwrap();
    assert_eq!(upper, lower);
    assert_eq!('Q', upper.to_char());
}

#[test]
fn letter_from_char_rejects_non_letters() {
    assert_eq!(Err(InvalidLetter('3')), Letter::from_char('3'));
    assert_eq!(Err(InvalidLetter('_')), Letter::from_char('_'));
    assert_eq!(Err(InvalidLetter('é')), Letter::from_char('é'));
}

#[test]
fn letter_all_covers_alphabet() {
    let all = Letter::all().collect_vec();
    assert_eq!(26, all.len());
    assert!(all.iter().all_unique());
    assert_eq!('A', all[0].to_char());
    assert_eq!('Z', all[25].to_char());
}

#[test]
fn standard_score_values() {
    assert_eq!(1, Letter::from_char('E').unwrap().score_value());
    assert_eq!(4, Letter::from_char('F').unwrap().score_value());
    assert_eq!(10, Letter::from_char('Q').unwrap().score_value());
    assert_eq!(10, Letter::from_char('Z').unwrap().score_value());
}

#[test]
fn mask_basics() {
    let mask = Mask::from_letters("CAB").unwrap();
    assert_eq!(3, mask.count());
    assert!(mask.get(Letter::from_char('B').unwrap()));
    assert!(!mask.get(Letter::from_char('D').unwrap()));

    let letters = mask.letters().map(Letter::to_char).collect_vec();
    assert_eq!(vec!['A', 'B', 'C'], letters);
}

#[test]
fn mask_operators() {
    let ab = Mask::from_letters("AB").unwrap();
    let bc = Mask::from_letters("BC").unwrap();

    assert_eq!(Mask::from_letters("ABC").unwrap(), ab | bc);
    assert_eq!(Mask::from_letters("B").unwrap(), ab & bc);
    assert_eq!(Letter::from_char('B').unwrap().to_mask(), ab & bc);

    let mut acc = Mask::NONE;
    acc |= ab;
    acc &= bc;
    assert_eq!(Mask::from_letters("B").unwrap(), acc);
}

#[test]
fn mask_superset() {
    let ab = Mask::from_letters("AB").unwrap();
    let abc = Mask::from_letters("ABC").unwrap();

    assert!(abc.is_superset_of(ab));
    assert!(!ab.is_superset_of(abc));
    assert!(Mask::ALL_LETTERS.is_superset_of(abc));
    assert!(abc.is_superset_of(Mask::NONE));
}

#[test]
fn mask_debug() {
    let mask = Mask::from_letters("EBC").unwrap();
    assert_eq!("Mask(\"BCE\")", format!("{:?}", mask));
    assert_eq!("Mask(ALL_LETTERS)", format!("{:?}", Mask::ALL_LETTERS));
}
