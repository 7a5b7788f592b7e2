use super::*;

fn palette() -> Palette {
    Palette {
        prominent: vec![
            WeightedColor {
                color: Rgb8::new(10, 20, 30),
                weight: 100,
            },
            WeightedColor {
                color: Rgb8::new(40, 50, 60),
                weight: 10,
            },
        ],
        clusters: vec![Rgb8::new(1, 1, 1), Rgb8::new(2, 2, 2)],
    }
}

#[test]
fn dominant_is_first_prominent_color() {
    assert_eq!(palette().dominant().unwrap(), Rgb8::new(10, 20, 30));
}

#[test]
fn accent_is_second_cluster() {
    assert_eq!(palette().accent().unwrap(), Rgb8::new(2, 2, 2));
}

#[test]
fn empty_ranking_is_a_palette_error() {
    let p = Palette {
        prominent: vec![],
        clusters: vec![Rgb8::new(1, 1, 1), Rgb8::new(2, 2, 2)],
    };
    assert!(matches!(
        p.dominant().unwrap_err(),
        InfographicError::Palette(_)
    ));
}

#[test]
fn short_cluster_set_is_a_palette_error() {
    let p = Palette {
        prominent: palette().prominent,
        clusters: vec![Rgb8::new(1, 1, 1)],
    };
    assert!(matches!(
        p.accent().unwrap_err(),
        InfographicError::Palette(_)
    ));
}
