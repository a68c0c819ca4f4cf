//! Tests for algorithm configuration constants and defaults

#[cfg(test)]
mod tests {
    use cavetown::io::configuration::{
        DEFAULT_HEIGHT, DEFAULT_OBSTACLE_COUNT, DEFAULT_OUTPUT_NAME, DEFAULT_SEED,
        DEFAULT_SMOOTH_ITERATIONS, DEFAULT_WALL_PROBABILITY, DEFAULT_WIDTH, MAX_GRID_DIMENSION,
        MIN_OBSTACLE_GRID_DIMENSION, NEIGHBOR_RANGE, OBSTACLE_MARGIN, OBSTACLE_MAX_RADIUS,
        OBSTACLE_MIN_RADIUS, OPEN_COLOR, OPEN_GLYPH, OPEN_NEIGHBOR_THRESHOLD, WALL_COLOR,
        WALL_GLYPH, WALL_NEIGHBOR_THRESHOLD,
    };

    // Tests default generation parameters
    // Verified by changing constant values
    #[test]
    fn test_generation_defaults() {
        assert_eq!(DEFAULT_SEED, 42);
        assert_eq!((DEFAULT_WIDTH, DEFAULT_HEIGHT), (50, 25));
        assert!((DEFAULT_WALL_PROBABILITY - 0.45).abs() < f64::EPSILON);
        assert_eq!(DEFAULT_SMOOTH_ITERATIONS, 5);
        assert_eq!(DEFAULT_OBSTACLE_COUNT, 8);
    }

    // Tests the majority rule leaves exactly one neutral count
    // Verified by moving the open threshold to four
    #[test]
    fn test_rule_thresholds_leave_a_gap() {
        assert_eq!(WALL_NEIGHBOR_THRESHOLD, 5);
        assert_eq!(OPEN_NEIGHBOR_THRESHOLD, 3);
        assert_eq!(WALL_NEIGHBOR_THRESHOLD - OPEN_NEIGHBOR_THRESHOLD, 2);
        assert_eq!(NEIGHBOR_RANGE, 1);
    }

    // Tests obstacle geometry constants
    // Verified by widening the margin
    #[test]
    fn test_obstacle_constants() {
        assert_eq!(OBSTACLE_MARGIN, 5);
        assert_eq!((OBSTACLE_MIN_RADIUS, OBSTACLE_MAX_RADIUS), (1, 3));
        assert_eq!(MIN_OBSTACLE_GRID_DIMENSION, 10);
    }

    // Tests maximum grid dimension value
    // Verified by reducing dimension limit
    #[test]
    fn test_max_grid_dimension() {
        assert_eq!(MAX_GRID_DIMENSION, 10_000);
    }

    // Tests wall and open cells render distinctly
    // Verified by giving both cells the same color
    #[test]
    fn test_palette_is_distinct() {
        assert_eq!((WALL_GLYPH, OPEN_GLYPH), ('#', '.'));
        assert_ne!(WALL_COLOR, OPEN_COLOR);
    }

    // Tests filesystem safety of the output stem
    // Verified by adding special character
    #[test]
    fn test_output_name_no_special_chars() {
        assert!(!DEFAULT_OUTPUT_NAME.is_empty());
        for ch in DEFAULT_OUTPUT_NAME.chars() {
            assert!(
                ch.is_alphanumeric() || ch == '_' || ch == '-',
                "Output name contains invalid character: {ch}"
            );
        }
    }
}
