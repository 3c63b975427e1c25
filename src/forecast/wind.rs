const COMPASS_POINTS: [&str; 8] = ["N", "NE", "E", "SE", "S", "SW", "W", "NW"];

/// Eight-point compass label for a wind bearing in degrees
pub fn compass_direction(degrees: f64) -> &'static str {
    let normalized = degrees.rem_euclid(360.0);
    let index = (normalized / 45.0).round() as usize % COMPASS_POINTS.len();
    COMPASS_POINTS[index]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cardinal_points() {
        assert_eq!(compass_direction(0.0), "N");
        assert_eq!(compass_direction(90.0), "E");
        assert_eq!(compass_direction(180.0), "S");
        assert_eq!(compass_direction(270.0), "W");
    }

    #[test]
    fn test_rounds_to_nearest_point() {
        assert_eq!(compass_direction(22.4), "N");
        assert_eq!(compass_direction(22.5), "NE");
        assert_eq!(compass_direction(250.0), "W");
        assert_eq!(compass_direction(359.0), "N");
    }

    #[test]
    fn test_out_of_range_bearings() {
        assert_eq!(compass_direction(-90.0), "W");
        assert_eq!(compass_direction(405.0), "NE");
    }
}
