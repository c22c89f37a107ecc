use super::*;

#[test]
fn signed_seeds_keep_their_bits() {
    assert_eq!(Seed::from(-1i32), Seed(u32::MAX));
    assert_eq!(Seed::from(i32::MIN).0, 0x8000_0000);
    assert_eq!(Seed(u32::MAX).as_i32(), -1);
}

#[test]
fn wide_integers_wrap_modulo_2_pow_32() {
    assert_eq!(Seed::from_i64_wrapping((1i64 << 32) + 5), Seed(5));
    assert_eq!(Seed::from_i64_wrapping(-2), Seed(u32::MAX - 1));
    // A millisecond timestamp, truncated the way `ts | 0` does.
    assert_eq!(Seed::from(1_700_000_000_000i64), Seed(1_700_000_000_000u64 as u32));
}

#[test]
fn offset_wraps() {
    assert_eq!(Seed(u32::MAX).offset(1), Seed(0));
    assert_eq!(Seed(7).offset(1), Seed(8));
}

#[test]
fn parses_decimal_strings() {
    assert_eq!("12345".parse::<Seed>().unwrap(), Seed(12345));
    assert_eq!(" -1 ".parse::<Seed>().unwrap(), Seed(u32::MAX));
    assert!("abc".parse::<Seed>().is_err());
}

#[test]
fn serde_accepts_signed_and_wide_integers() {
    let s: Seed = serde_json::from_str("-1").unwrap();
    assert_eq!(s, Seed(u32::MAX));
    let s: Seed = serde_json::from_str("4294967301").unwrap();
    assert_eq!(s, Seed(5));
    assert!(serde_json::from_str::<Seed>("1.5").is_err());
    assert_eq!(serde_json::to_string(&Seed(u32::MAX)).unwrap(), "4294967295");
}
