use clap::Parser;
use color_eyre::Result;
use ratatui::DefaultTerminal;
use ratatui::crossterm::execute;
use ratatui::crossterm::terminal::{
    EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode,
};
use std::io::stdout;
use std::path::PathBuf;

use styled_toast::config::{self, ConfigResult};
use styled_toast::demo::DemoApp;

/// Styled toast notifications demo
#[derive(Parser, Debug)]
#[command(
    version,
    about = "Styled toast notifications demo: presets, custom styles, themes and loaders"
)]
struct Args {
    /// Config file (defaults to ~/.config/styled-toast/config.toml)
    #[arg(long)]
    config: Option<PathBuf>,

    /// Disable the terminal bell used for vibrating toasts
    #[arg(long)]
    no_bell: bool,
}

fn main() -> Result<()> {
    // Writes to /tmp/styled-toast-debug.log at DEBUG level
    #[cfg(debug_assertions)]
    {
        use std::io::Write;

        let log_file = std::fs::OpenOptions::new()
            .create(true)
            .append(true)
            .open("/tmp/styled-toast-debug.log")
            .expect("Failed to open /tmp/styled-toast-debug.log");

        env_logger::Builder::new()
            .filter_level(log::LevelFilter::Debug)
            .target(env_logger::Target::Pipe(Box::new(log_file)))
            .format(|buf, record| {
                use std::time::SystemTime;
                let datetime: chrono::DateTime<chrono::Local> = SystemTime::now().into();
                writeln!(
                    buf,
                    "[{}] [{}] {}",
                    datetime.format("%Y-%m-%dT%H:%M:%S%.3f"),
                    record.level(),
                    record.args()
                )
            })
            .init();

        log::debug!("=== STYLED-TOAST DEBUG SESSION STARTED ===");
    }

    color_eyre::install()?;

    let args = Args::parse();

    let mut config_result = match &args.config {
        Some(path) => config::load_config_from(path),
        None => config::load_config(),
    };
    if args.no_bell {
        config_result.config.haptics.bell = false;
    }

    let terminal = init_terminal()?;
    let result = run(terminal, config_result);
    restore_terminal()?;
    result?;

    #[cfg(debug_assertions)]
    log::debug!("=== STYLED-TOAST DEBUG SESSION ENDED ===");

    Ok(())
}

/// Initialize terminal with raw mode and alternate screen
fn init_terminal() -> Result<DefaultTerminal> {
    let hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |info| {
        let _ = execute!(stdout(), LeaveAlternateScreen);
        let _ = disable_raw_mode();
        hook(info);
    }));

    enable_raw_mode()?;

    // If any subsequent operations fail, ensure raw mode is disabled
    if let Err(e) = execute!(stdout(), EnterAlternateScreen) {
        let _ = disable_raw_mode();
        return Err(e.into());
    }

    match ratatui::Terminal::new(ratatui::backend::CrosstermBackend::new(stdout())) {
        Ok(terminal) => Ok(terminal),
        Err(e) => {
            let _ = execute!(stdout(), LeaveAlternateScreen);
            let _ = disable_raw_mode();
            Err(e.into())
        }
    }
}

/// Restore terminal to normal state
fn restore_terminal() -> Result<()> {
    let _ = execute!(stdout(), LeaveAlternateScreen);
    disable_raw_mode()?;
    Ok(())
}

fn run(mut terminal: DefaultTerminal, config_result: ConfigResult) -> Result<()> {
    let mut app = DemoApp::new(&config_result.config);

    if let Some(warning) = config_result.warning {
        app.controller.warning(&warning);
    }

    loop {
        terminal.draw(|frame| app.render(frame))?;
        app.handle_events()?;

        if app.should_quit() {
            break;
        }
    }

    Ok(())
}
