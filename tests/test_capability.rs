mod common;

use common::*;

#[test]
fn test_missing_jpeg_fails_before_drawing() -> anyhow::Result<()> {
    let (config, dir) = config_in_temp_dir();

    let err = compose_and_save(&config, &NoJpegBackend)
        .expect_err("composition should refuse to start");

    assert!(!config.output_path.exists());
    assert_eq!(std::fs::read_dir(dir.path())?.count(), 0);

    match err.downcast::<OgImageError>() {
        Ok(OgImageError::MissingCapability { capability, guidance }) => {
            assert_eq!(capability, "JPEG encoder");
            assert!(guidance.contains("cargo add jpeg-encoder"));
        }
        other => panic!("unexpected error: {:?}", other),
    }
    Ok(())
}

#[test]
fn test_linked_backend_passes_the_check() -> anyhow::Result<()> {
    let (config, _dir) = bitmap_config_in_temp_dir();
    compose_and_save(&config, &ImageBackend)?;
    assert!(config.output_path.exists());
    Ok(())
}
