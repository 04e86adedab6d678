use color_eyre::eyre::{self, Context};

pub fn init_eyre() -> eyre::Result<()> {
    use color_eyre::config::{HookBuilder, Theme};
    let eyre_color = if std::io::IsTerminal::is_terminal(&std::io::stderr()) {
        Theme::dark()
    } else {
        Theme::new()
    };

    HookBuilder::default()
        .theme(eyre_color)
        .display_env_section(false)
        .install()
        .wrap_err("failed to install eyre")
}

/// Logs everything at debug level and above to stdout
pub fn init_logger() -> eyre::Result<()> {
    use simplelog::*;

    let mut builder = ConfigBuilder::new();
    builder.set_thread_level(LevelFilter::Error);
    builder.set_target_level(LevelFilter::Off);
    builder.set_location_level(LevelFilter::Off);

    builder.set_level_padding(LevelPadding::Right);
    builder.set_thread_padding(ThreadPadding::Right(3));
    builder.set_thread_mode(ThreadLogMode::IDs);

    // NOTE: set_time_offset_to_local can only be run when there is only on thread active.
    let timezone_failed = builder.set_time_offset_to_local().is_err();

    let log_color = if std::io::IsTerminal::is_terminal(&std::io::stdout()) {
        ColorChoice::Auto
    } else {
        ColorChoice::Never
    };

    TermLogger::init(
        LevelFilter::Debug,
        builder.build(),
        TerminalMode::Stdout,
        log_color,
    )
    .wrap_err("failed to set the logger")?;

    if timezone_failed {
        log::warn!("Failed to set time zone for the logger, using UTC instead");
    }

    Ok(())
}
