//! Unit tests for cm-core primitives.

#[cfg(test)]
mod ids {
    use crate::NodeId;

    #[test]
    fn index_roundtrip() {
        let id = NodeId(42);
        assert_eq!(id.index(), 42);
        assert_eq!(NodeId::try_from(42usize).unwrap(), id);
    }

    #[test]
    fn ordering() {
        assert!(NodeId(100) > NodeId(99));
    }

    #[test]
    fn display() {
        assert_eq!(NodeId(7).to_string(), "NodeId(7)");
    }

    #[test]
    #[cfg(target_pointer_width = "64")]
    fn index_past_u32_is_rejected() {
        assert_eq!(NodeId::try_from(u32::MAX as usize).unwrap(), NodeId(u32::MAX));
        assert!(NodeId::try_from(u32::MAX as usize + 1).is_err());
    }
}

#[cfg(test)]
mod geo {
    use crate::Point;

    #[test]
    fn zero_distance() {
        let p = Point::new(120, -4);
        assert_eq!(p.distance(p), 0.0);
    }

    #[test]
    fn three_four_five() {
        let a = Point::new(0, 0);
        let b = Point::new(3, 4);
        assert_eq!(a.distance(b), 5.0);
        assert_eq!(a.distance_sq(b), 25.0);
    }

    #[test]
    fn distance_is_symmetric_and_euclidean() {
        // |dx| + dy² would give 2 + 9 = 11 one way and 3 + 4 = 7 the other.
        let a = Point::new(10, 10);
        let b = Point::new(12, 13);
        let d = a.distance(b);
        assert_eq!(d, b.distance(a));
        assert!((d - 13f64.sqrt()).abs() < 1e-12, "got {d}");
    }

    #[test]
    fn display() {
        assert_eq!(Point::new(3, -2).to_string(), "(3, -2)");
    }
}

#[cfg(test)]
mod location {
    use crate::{CoreError, Location, LocationCode, Point};

    #[test]
    fn strict_code_accepts_canonical() {
        assert_eq!(LocationCode::new("CSE").unwrap().as_str(), "CSE");
        assert_eq!(LocationCode::new("B12").unwrap().as_str(), "B12");
    }

    #[test]
    fn strict_code_rejects_malformed() {
        for bad in ["", "CS", "CSEE", "cse", "C E", "ÉCO", "C-E"] {
            assert_eq!(
                LocationCode::new(bad),
                Err(CoreError::InvalidCode(bad.to_owned())),
                "{bad:?} should be rejected"
            );
        }
    }

    #[test]
    fn normalize_trims_and_uppercases() {
        assert_eq!(LocationCode::normalize("  mgh ").unwrap().as_str(), "MGH");
        assert!(LocationCode::normalize("ab").is_err());
    }

    #[test]
    fn junction_has_no_code() {
        let j = Location::junction(Point::new(5, 6));
        assert!(j.is_junction());
        assert!(j.code().is_none());
        assert_eq!(j.name(), "");
        assert_eq!((j.x(), j.y()), (5, 6));
    }

    #[test]
    fn same_place_ignores_name_and_code() {
        let a = Location::new(LocationCode::new("AAA").unwrap(), "Alpha", Point::new(1, 2));
        let b = Location::new(LocationCode::new("BBB").unwrap(), "Beta", Point::new(1, 2));
        let c = Location::junction(Point::new(1, 3));
        assert!(a.same_place(&b));
        assert!(a.same_place(&Location::junction(Point::new(1, 2))));
        assert!(!a.same_place(&c));
        assert_ne!(a, b);
    }

    #[test]
    fn display() {
        let a = Location::new(LocationCode::new("SUZ").unwrap(), "Suzzallo", Point::new(4, 9));
        assert_eq!(a.to_string(), "SUZ \"Suzzallo\" at (4, 9)");
        assert_eq!(Location::junction(Point::new(0, 0)).to_string(), "junction at (0, 0)");
    }
}

#[cfg(test)]
mod config {
    use crate::{DisplayConfig, EditorConfig};

    #[test]
    fn defaults_are_valid() {
        assert!(DisplayConfig::default().validate().is_ok());
        assert!(EditorConfig::default().validate().is_ok());
        assert_eq!(EditorConfig::default().max_click_distance, 8.0);
    }

    #[test]
    fn clamp_ratio() {
        let cfg = DisplayConfig::default();
        assert_eq!(cfg.clamp_ratio(0.5), 1.0);
        assert_eq!(cfg.clamp_ratio(2.5), 2.5);
        assert_eq!(cfg.clamp_ratio(9.0), 4.0);
    }

    #[test]
    fn inverted_ratio_range_rejected() {
        let cfg = DisplayConfig {
            min_image_px_ratio: 3.0,
            max_image_px_ratio: 2.0,
            ..DisplayConfig::default()
        };
        assert!(cfg.validate().is_err());
    }

    #[test]
    fn zero_screen_rejected() {
        let cfg = DisplayConfig { screen_width: 0, ..DisplayConfig::default() };
        assert!(cfg.validate().is_err());
    }

    #[test]
    fn negative_click_distance_rejected() {
        assert!(EditorConfig { max_click_distance: -1.0 }.validate().is_err());
        assert!(EditorConfig { max_click_distance: f64::NAN }.validate().is_err());
    }
}
