use glam::DVec3;

/// Component-wise rounding to a fixed number of decimal places.
pub trait DVec3Ext {
    fn round_to(self, digits: u32) -> DVec3;
}

impl DVec3Ext for DVec3 {
    fn round_to(self, digits: u32) -> DVec3 {
        let scale = 10f64.powi(digits as i32);
        (self * scale).round() / scale
    }
}

#[cfg(test)]
mod tests {
    use glam::DVec3;

    use super::DVec3Ext;

    #[test]
    fn round_to_decimals() {
        let v = DVec3::new(1.00004, -2.00006, 0.12345);

        assert_eq!(v.round_to(4), DVec3::new(1.0, -2.0001, 0.1235));
        assert_eq!(v.round_to(0), DVec3::new(1.0, -2.0, 0.0));
    }

    #[test]
    fn round_trip_through_json() {
        let v = DVec3::new(0.1, -1001.0, 4.0 / 3.0);
        let json = serde_json::to_string(&v).unwrap();
        let back: DVec3 = serde_json::from_str(&json).unwrap();

        assert_eq!(v, back);
    }

    #[test]
    fn scale_add_serializes_as_triple() {
        let v = DVec3::new(1.0, 2.0, 3.0) * 2.0 + DVec3::new(0.0, 1.0, 0.0);

        assert_eq!(
            serde_json::to_value(v).unwrap(),
            serde_json::json!([2.0, 5.0, 6.0]),
        );
    }
}
