use crate::scanner::Scanner;

#[test]
fn test_extremes() {
    let mut s = Scanner::new("2,3+@".chars());
    assert_eq!(s.curr(), None);
    assert_eq!(s.next(), Some('2'));
    while s.next() != Some('@') {}
    assert_eq!(s.curr(), Some('@'));
    assert_eq!(s.next(), None);
    assert_eq!(s.next(), None);
    assert_eq!(s.view().len(), 5);
}

#[test]
fn test_ignore() {
    let mut s = Scanner::new("12+3x".chars());
    for _ in 0..3 { assert!(s.next().is_some()); }
    assert_eq!(s.view(), &['1', '2', '+']);
    s.ignore();
    assert_eq!(s.offset(), 3);
    assert_eq!(s.curr(), None);
    assert_eq!(s.next(), Some('3'));
    s.ignore();
    assert_eq!(s.offset(), 4);
    s.ignore();
    assert_eq!(s.offset(), 4);
    assert_eq!(s.next(), Some('x'));
}

#[test]
fn test_accept() {
    let mut s = Scanner::new(",,1x".chars());
    assert_eq!(s.accept_any(&['1']), None);
    assert_eq!(s.pos(), -1);
    assert_eq!(s.accept_any(&[',', '1']), Some(','));
    assert_eq!(s.curr(), Some(','));
    assert!(s.skip_all(&[',', '1']));
    assert!(!s.skip_all(&[',', '1']));
    assert_eq!(s.curr(), Some('1'));
    assert_eq!(s.accept_any(&['x']), Some('x'));
    assert_eq!(s.accept_any(&['x']), None);
    assert_eq!(s.next(), None);
}

#[test]
fn test_set_pos() {
    let mut s = Scanner::new("123".chars());
    assert!(s.skip_all(&['1', '2', '3']));
    assert!(s.set_pos(0));
    assert_eq!(s.curr(), Some('1'));
    assert!(!s.set_pos(7));
    assert!(!s.set_pos(-2));
    assert_eq!(s.next(), Some('2'));
}
