use crate::prelude::{classify, GnssType, Prn, GLONASS_PRN_RANGE};

use rstest::*;

#[rstest]
#[case(64, GnssType::Navstar)]
#[case(65, GnssType::Glonass)]
#[case(88, GnssType::Glonass)]
#[case(89, GnssType::Navstar)]
#[case(-1, GnssType::Navstar)]
#[case(0, GnssType::Navstar)]
#[case(1, GnssType::Navstar)]
#[case(32, GnssType::Navstar)]
#[case(76, GnssType::Glonass)]
#[case(i32::MIN, GnssType::Navstar)]
#[case(i32::MAX, GnssType::Navstar)]
fn boundaries(#[case] prn: i32, #[case] expected: GnssType) {
    assert_eq!(classify(prn), expected, "prn={}", prn);
    assert_eq!(Prn::from(prn).gnss_type(), expected, "prn={}", prn);
}

#[test]
fn glonass_range() {
    for prn in GLONASS_PRN_RANGE {
        assert_eq!(classify(prn), GnssType::Glonass, "prn={}", prn);
        assert!(Prn::new(prn).is_glonass_range());
    }
}

#[test]
fn glonass_range_matches_classification() {
    for prn in -10..100 {
        assert_eq!(
            GLONASS_PRN_RANGE.contains(&prn),
            classify(prn).is_glonass(),
            "prn={}",
            prn
        );
        assert_eq!(
            Prn::new(prn).is_glonass_range(),
            GLONASS_PRN_RANGE.contains(&prn),
            "prn={}",
            prn
        );
    }
    assert_eq!(*GLONASS_PRN_RANGE.start(), 65);
    assert_eq!(*GLONASS_PRN_RANGE.end(), 88);
}

#[test]
fn navstar_fallback() {
    for prn in (-200..65).chain(89..400) {
        assert_eq!(classify(prn), GnssType::Navstar, "prn={}", prn);
        assert!(!Prn::new(prn).is_glonass_range());
    }
}

#[test]
fn idempotent() {
    for prn in [-1, 0, 64, 65, 70, 88, 89, 1000] {
        let first = classify(prn);
        for _ in 0..10 {
            assert_eq!(classify(prn), first, "prn={}", prn);
        }
    }
}

#[test]
fn prn_conversions() {
    let prn = Prn::from(66);
    assert_eq!(prn.value(), 66);
    assert_eq!(i32::from(prn), 66);
    assert_eq!(prn.to_string(), "66");
    assert_eq!(Prn::default().gnss_type(), GnssType::Navstar);
}
