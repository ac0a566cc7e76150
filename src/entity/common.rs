use egui::{Color32, Pos2, Rect};

/// Entities store float geometry but hash on whole pixels.
pub(crate) fn pixel(value: f32) -> i64 {
    value.round() as i64
}

/// Integer encoding of a color: packed as 0xAARRGGBB, read as a signed 32-bit value
pub(crate) fn color_code(color: Color32) -> i64 {
    let [r, g, b, a] = color.to_array();
    i64::from(i32::from_be_bytes([a, r, g, b]))
}

/// Integer encoding of a stroke width: its IEEE-754 bit pattern
pub(crate) fn stroke_code(width: f32) -> i64 {
    i64::from(width.to_bits() as i32)
}

/// Calculate the bounding box for a set of points
pub(crate) fn calculate_bounds(points: &[Pos2]) -> Rect {
    if points.is_empty() {
        return Rect::NOTHING;
    }

    let mut min_x = f32::INFINITY;
    let mut min_y = f32::INFINITY;
    let mut max_x = f32::NEG_INFINITY;
    let mut max_y = f32::NEG_INFINITY;

    for point in points {
        min_x = min_x.min(point.x);
        min_y = min_y.min(point.y);
        max_x = max_x.max(point.x);
        max_y = max_y.max(point.y);
    }

    Rect::from_min_max(Pos2::new(min_x, min_y), Pos2::new(max_x, max_y))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_color_code_matches_argb_packing() {
        assert_eq!(color_code(Color32::BLACK), 0xFF00_0000_u32 as i32 as i64);
        assert_eq!(color_code(Color32::TRANSPARENT), 0);
        assert_eq!(
            color_code(Color32::from_rgb(0x12, 0x34, 0x56)),
            0xFF12_3456_u32 as i32 as i64
        );
    }

    #[test]
    fn test_pixel_rounds() {
        assert_eq!(pixel(1.4), 1);
        assert_eq!(pixel(1.6), 2);
        assert_eq!(pixel(-2.5), -3);
    }

    #[test]
    fn test_bounds_of_points() {
        let rect = calculate_bounds(&[Pos2::new(5.0, 1.0), Pos2::new(-1.0, 8.0)]);
        assert_eq!(rect.min, Pos2::new(-1.0, 1.0));
        assert_eq!(rect.max, Pos2::new(5.0, 8.0));
        assert_eq!(calculate_bounds(&[]), Rect::NOTHING);
    }
}
