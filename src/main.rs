use std::process::ExitCode;

fn main() -> ExitCode {
    env_logger::Builder::new()
        .filter_level(log::LevelFilter::Warn)
        .format_timestamp(None)
        .init();

    match forge_icon::create_icon() {
        Ok(report) => {
            println!("QR Forge icon created successfully as {}", report.path.display());
            ExitCode::SUCCESS
        }
        Err(err) => {
            eprintln!("Failed to create icon: {err}");
            ExitCode::FAILURE
        }
    }
}
