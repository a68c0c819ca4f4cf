//! Tests for TOML parameter files

#[cfg(test)]
mod tests {

    use cavetown::CaveError;
    use cavetown::algorithm::pipeline::GenerationParameters;
    use cavetown::io::settings::{load_parameters, parse_parameters};
    use std::fs;
    use std::path::Path;
    use tempfile::TempDir;

    // Tests partial files keep defaults for missing fields
    // Verified by removing serde(default)
    #[test]
    fn test_parse_partial_parameters() {
        let params = parse_parameters("width = 80\nseed = 7\n", Path::new("inline.toml")).unwrap();

        assert_eq!(params.width, 80);
        assert_eq!(params.seed, 7);
        assert_eq!(params.height, GenerationParameters::default().height);
        assert_eq!(
            params.obstacle_count,
            GenerationParameters::default().obstacle_count
        );
    }

    // Tests every field can be set from a file
    // Verified by renaming a serialized field
    #[test]
    fn test_load_full_parameters() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("cave.toml");
        fs::write(
            &path,
            "width = 64\nheight = 32\nseed = 3\nwall_probability = 0.5\nsmooth_iterations = 2\nobstacle_count = 0\n",
        )
        .unwrap();

        let params = load_parameters(&path).unwrap();

        assert_eq!(
            params,
            GenerationParameters {
                width: 64,
                height: 32,
                seed: 3,
                wall_probability: 0.5,
                smooth_iterations: 2,
                obstacle_count: 0,
            }
        );
    }

    // Tests unknown keys and wrong types are rejected with the file path
    // Verified by removing deny_unknown_fields
    #[test]
    fn test_rejects_unknown_and_mistyped_fields() {
        let origin = Path::new("bad.toml");

        match parse_parameters("widht = 10\n", origin) {
            Err(CaveError::ConfigParse { path, .. }) => assert_eq!(path, origin),
            other => unreachable!("Expected ConfigParse error, got {other:?}"),
        }
        assert!(parse_parameters("width = \"wide\"\n", origin).is_err());
    }

    // Tests missing files surface as file system errors
    // Verified by returning defaults when the file is absent
    #[test]
    fn test_missing_file() {
        let temp_dir = TempDir::new().unwrap();
        let result = load_parameters(&temp_dir.path().join("absent.toml"));

        assert!(matches!(result, Err(CaveError::FileSystem { .. })));
    }
}
