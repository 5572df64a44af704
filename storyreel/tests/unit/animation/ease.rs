use super::*;

const ALL: [Ease; 7] = [
    Ease::Linear,
    Ease::InQuad,
    Ease::OutQuad,
    Ease::InOutQuad,
    Ease::InCubic,
    Ease::OutCubic,
    Ease::InOutCubic,
];

#[test]
fn endpoints_are_fixed() {
    for e in ALL {
        assert!((e.apply(0.0)).abs() < 1e-12, "{e:?}");
        assert!((e.apply(1.0) - 1.0).abs() < 1e-12, "{e:?}");
    }
}

#[test]
fn apply_clamps_input() {
    for e in ALL {
        assert_eq!(e.apply(-3.0), e.apply(0.0));
        assert_eq!(e.apply(7.0), e.apply(1.0));
    }
}

#[test]
fn out_quad_matches_reference_polynomial() {
    for t in [0.1, 0.25, 0.5, 0.9] {
        assert!((Ease::OutQuad.apply(t) - t * (2.0 - t)).abs() < 1e-12);
    }
}

#[test]
fn curve_extends_beyond_unit_interval() {
    assert_eq!(Ease::Linear.curve(1.5), 1.5);
    assert_eq!(Ease::InQuad.curve(2.0), 4.0);
}
