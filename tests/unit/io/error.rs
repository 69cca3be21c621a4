//! Tests for error types including source chaining and message formatting

#[cfg(test)]
mod tests {
    use griddy::GriddyError;
    use griddy::io::error::{computation_error, invalid_parameter};
    use std::error::Error;
    use std::path::PathBuf;

    // Tests error source chaining works correctly
    // Verified by returning None for every variant
    #[test]
    fn test_error_source_chain() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "gone");
        let err = GriddyError::FileSystem {
            path: PathBuf::from("out"),
            operation: "create directory",
            source: io_err,
        };
        assert!(err.source().is_some());

        let load = GriddyError::ImageLoad {
            path: PathBuf::from("a.png"),
            source: image::ImageError::IoError(std::io::Error::other("bad")),
        };
        assert!(load.source().is_some());
        assert!(load.to_string().contains("a.png"));

        assert!(GriddyError::NoInputs.source().is_none());
    }

    // Tests the zero-input message shown to the user
    // Verified by altering the message text
    #[test]
    fn test_no_inputs_message() {
        assert_eq!(GriddyError::NoInputs.to_string(), "No input images provided!");
    }

    // Tests messages carry the values that caused them
    // Verified by dropping fields from the Display output
    #[test]
    fn test_error_messages() {
        let too_many = GriddyError::TooManyInputs { count: 300, max: 255 };
        assert!(too_many.to_string().contains("300"));
        assert!(too_many.to_string().contains("255"));

        let blit = GriddyError::BlitOutOfBounds {
            origin: (4, 2),
            source_dimensions: (3, 3),
            canvas_dimensions: (5, 5),
        };
        assert_eq!(
            blit.to_string(),
            "Cannot place 3x3 image at x=4, y=2 on 5x5 canvas"
        );

        let param = invalid_parameter("columns", &0, &"must be at least 1");
        assert_eq!(
            param.to_string(),
            "Invalid parameter 'columns' = '0': must be at least 1"
        );

        let computation = computation_error("canvas width", &"overflow");
        assert_eq!(
            computation.to_string(),
            "Computation error in canvas width: overflow"
        );
    }

    // Tests the size limit message names the canvas, limit and output
    // Verified by omitting the limit from the Display output
    #[test]
    fn test_canvas_too_large_message() {
        let err = GriddyError::CanvasTooLarge {
            dimensions: (80_000, 10),
            limit: 65_535,
            path: PathBuf::from("grid.jpg"),
        };

        assert_eq!(
            err.to_string(),
            "Canvas of 80000x10 exceeds the 65535 pixel side limit for 'grid.jpg'"
        );
        assert!(err.source().is_none());
    }
}
