//! Tests for error messages and source chaining

#[cfg(test)]
mod tests {
    use edgetile::io::error::{AlgorithmError, invalid_parameter, invalid_placement};
    use std::error::Error;
    use std::path::PathBuf;

    // Tests messages name the offending input
    // Verified by printing only the variant name
    #[test]
    fn test_display_messages() {
        assert_eq!(
            invalid_parameter("width", &0, &"must be positive").to_string(),
            "Invalid parameter 'width' = '0': must be positive"
        );
        assert_eq!(
            AlgorithmError::PrecollapsedOutOfBounds {
                x: 4,
                y: 1,
                width: 4,
                height: 4
            }
            .to_string(),
            "Pre-collapsed cell (4, 1) is outside the 4x4 grid"
        );
        assert_eq!(
            AlgorithmError::UnknownTileId {
                id: "lava_0".to_string()
            }
            .to_string(),
            "Unknown tile id 'lava_0'"
        );
        assert_eq!(
            invalid_placement("1,2", &"expected x,y,tile_id").to_string(),
            "Invalid placement '1,2': expected x,y,tile_id"
        );
    }

    // Tests wrapped errors expose their cause
    // Verified by returning None from every source
    #[test]
    fn test_source_chain() {
        let io = AlgorithmError::FileSystem {
            path: PathBuf::from("tiles.toml"),
            operation: "read tile configuration",
            source: std::io::Error::new(std::io::ErrorKind::NotFound, "missing"),
        };
        assert!(io.source().is_some());
        assert!(io.to_string().contains("read tile configuration"));
        assert!(io.to_string().contains("tiles.toml"));

        let converted = AlgorithmError::from(std::io::Error::other("broken pipe"));
        assert!(matches!(converted, AlgorithmError::FileSystem { .. }));

        assert!(
            AlgorithmError::UnknownTileId { id: String::new() }
                .source()
                .is_none()
        );
    }
}
