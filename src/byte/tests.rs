use proptest::prelude::*;

use crate::{Bit, ByteRole, ErrorKind, TernaryByte};

fn byte(pattern: &str) -> TernaryByte {
    TernaryByte::from_pattern(pattern).unwrap()
}

fn any_bit() -> impl Strategy<Value = Bit> {
    prop_oneof![Just(Bit::Zero), Just(Bit::One), Just(Bit::Wildcard)]
}

fn any_ternary_byte() -> impl Strategy<Value = TernaryByte> {
    proptest::array::uniform8(any_bit()).prop_map(TernaryByte::new)
}

#[test]
fn from_integer() {
    assert_eq!(TernaryByte::from_integer(25).unwrap().to_string(), "00011001");
    assert_eq!(TernaryByte::from_integer(111).unwrap().to_string(), "01101111");
    assert_eq!(TernaryByte::from_integer(0).unwrap(), byte("00000000"));
    assert_eq!(TernaryByte::try_from(255i64).unwrap(), byte("11111111"));
}

#[test]
fn from_integer_out_of_range() {
    for value in [-5, -1, 256, i64::MAX] {
        let err = TernaryByte::from_integer(value).unwrap_err();
        assert!(err.is_range(), "{}", err);
        assert_eq!(err.kind(), &ErrorKind::Range { value });
        assert_eq!(err.index(), None);
    }
}

#[test]
fn from_pattern_errors() {
    let err = TernaryByte::from_pattern("0x01").unwrap_err();
    assert!(err.is_format());
    assert_eq!(err.kind(), &ErrorKind::PatternLength { len: 4 });

    let err = TernaryByte::from_pattern("0y011111").unwrap_err();
    assert!(err.is_format());
    assert_eq!(err.kind(), &ErrorKind::PatternChar { position: 1, found: 'y' });

    // length is counted in characters, not bytes
    let err = "0000000é".parse::<TernaryByte>().unwrap_err();
    assert_eq!(err.kind(), &ErrorKind::PatternChar { position: 7, found: 'é' });
    assert!(TernaryByte::from_pattern("").unwrap_err().is_format());
    assert!(TernaryByte::from_pattern("000000000").unwrap_err().is_format());
    assert!(TernaryByte::from_pattern("0000000X").unwrap_err().is_format());
}

#[test]
fn wildcard_bits() {
    let t = byte("0x010111");
    assert_eq!(t.bit(0), Bit::Zero);
    assert_eq!(t.bit(1), Bit::Wildcard);
    assert_eq!(t.bit(7), Bit::One);
    assert!(!t.is_concrete());
    assert_eq!(t.to_u8(), None);
    assert_eq!(TernaryByte::WILDCARD, byte("xxxxxxxx"));
}

#[test]
#[should_panic]
fn bit_out_of_range() {
    byte("00000000").bit(8);
}

#[test]
fn equality() {
    let t = TernaryByte::from_integer(111).unwrap().with_bit(4, Bit::Wildcard);
    let t1 = byte("0110x111");
    assert_eq!(t, t1);
    assert_eq!(t1, t);

    // a wildcard is not a concrete zero
    assert_ne!(byte("0110x111"), byte("01100111"));
    assert_ne!(byte("0110x111"), byte("01101111"));
}

#[test]
fn with_bit_leaves_original_untouched() {
    let original = byte("01101111");
    let changed = original.with_bit(0, Bit::Wildcard);
    assert_eq!(original, byte("01101111"));
    assert_eq!(changed, byte("x1101111"));
}

#[test]
fn xor() {
    assert_eq!(byte("0x0011x1") ^ byte("x0xx01x1"), byte("xxxx10x0"));
    assert_eq!(byte("10101010") ^ byte("11110000"), byte("01011010"));
    assert_eq!(Bit::One ^ Bit::One, Bit::Zero);
    assert_eq!(Bit::Zero ^ Bit::One, Bit::One);
    assert_eq!(Bit::Wildcard ^ Bit::Wildcard, Bit::Wildcard);
}

#[test]
fn is_control_byte() {
    assert!(!byte("00000000").is_control_byte().unwrap());
    assert!(byte("10000000").is_control_byte().unwrap());
    assert!(byte("1xxxxxxx").is_control_byte().unwrap());
    let err = byte("x0000000").is_control_byte().unwrap_err();
    assert!(err.is_ambiguous());
    assert_eq!(err.kind(), &ErrorKind::AmbiguousBit { position: 0 });
}

#[test]
fn classify() {
    assert_eq!(byte("0xxxxxxx").classify(), ByteRole::Ascii);
    assert_eq!(byte("10xxxxxx").classify(), ByteRole::Continuation);
    assert_eq!(byte("110xxxxx").classify(), ByteRole::LeadOfTwo);
    assert_eq!(byte("1110xxxx").classify(), ByteRole::LeadOfThree);
    assert_eq!(byte("11110xxx").classify(), ByteRole::LeadOfFour);
    assert_eq!(byte("11111000").classify(), ByteRole::Unknown);
    assert_eq!(byte("11111111").classify(), ByteRole::Unknown);
    assert_eq!(byte("x0000000").classify(), ByteRole::Unknown);
    assert_eq!(byte("1x000000").classify(), ByteRole::Unknown);
    assert_eq!(byte("1111x000").classify(), ByteRole::Unknown);
    assert_eq!(byte("110x0000").classify(), ByteRole::LeadOfTwo);
}

#[test]
fn all_integers_match_their_pattern() {
    for value in 0..=255u8 {
        let from_int = TernaryByte::from_integer(i64::from(value)).unwrap();
        let from_pattern = byte(&format!("{:08b}", value));
        assert_eq!(from_int, from_pattern);
        assert!(from_int.is_concrete());
        assert_eq!(from_int.to_u8(), Some(value));
        assert_eq!(from_int.classify(), from_pattern.classify());
        assert_eq!(from_int.classify(), ByteRole::of(value), "{}", from_int);
        assert_eq!(from_int.is_control_byte().unwrap(), value >= 0x80);
    }
}

proptest! {
    #[test]
    fn display_round_trips(t in any_ternary_byte()) {
        let rendered = t.to_string();
        prop_assert_eq!(rendered.len(), 8);
        prop_assert_eq!(byte(&rendered), t);
    }

    #[test]
    fn xor_propagates_wildcards(a in any_ternary_byte(), b in any_ternary_byte()) {
        let r = a ^ b;
        for i in 0..8 {
            let wild = a.bit(i) == Bit::Wildcard || b.bit(i) == Bit::Wildcard;
            prop_assert_eq!(r.bit(i) == Bit::Wildcard, wild);
        }
        prop_assert_eq!(r, b ^ a);
        if let (Some(x), Some(y)) = (a.to_u8(), b.to_u8()) {
            prop_assert_eq!(r.to_u8(), Some(x ^ y));
        }
    }

    #[test]
    fn classify_only_reads_the_prefix(t in any_ternary_byte(), tail in proptest::array::uniform3(any_bit())) {
        let role = t.classify();
        let mut changed = t;
        for (i, bit) in tail.into_iter().enumerate() {
            changed = changed.with_bit(5 + i, bit);
        }
        prop_assert_eq!(changed.classify(), role);
    }
}
