use env_logger::Env;
use std::process::ExitCode;

use og_image::{ImageBackend, OgImageConfig, OgImageError, compose_and_save};

fn main() -> anyhow::Result<ExitCode> {
    env_logger::Builder::from_env(Env::default().default_filter_or("info")).init();

    let config = OgImageConfig::default();

    match compose_and_save(&config, &ImageBackend) {
        Ok(report) => {
            println!("{}", report);
            Ok(ExitCode::SUCCESS)
        }
        Err(e) => match e.downcast::<OgImageError>() {
            Ok(missing @ OgImageError::MissingCapability { .. }) => {
                println!("{}", missing);
                Ok(ExitCode::FAILURE)
            }
            Err(e) => Err(e),
        },
    }
}
