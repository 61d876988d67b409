//! Interactive mode — guided experience for bare `b64pix` invocation.
//!
//! Reproduces the original tool's screen as a menu loop: select a file
//! (validate, preview), encode to Base64, decode a pasted payload. One
//! logical thread of control; the session state is overwritten wholesale
//! on each action.

pub mod session;
pub mod theme;

use console::Style;
use dialoguer::Select;

use b64pix_core::Config;
use session::Session;

/// Convert a dialoguer result into `Ok(Some(value))` on success, `Ok(None)` on
/// interrupt (Ctrl+C / terminal disconnect), and `Err` for other I/O failures.
///
/// Use this to wrap `interact_text()` / `interact()` calls that lack an `_opt`
/// variant, so interrupts exit the current flow cleanly instead of panicking.
fn handle_interrupt<T>(result: dialoguer::Result<T>) -> anyhow::Result<Option<T>> {
    match result {
        Ok(v) => Ok(Some(v)),
        Err(dialoguer::Error::IO(e)) if e.kind() == std::io::ErrorKind::Interrupted => Ok(None),
        Err(e) => Err(e.into()),
    }
}

/// Main menu options presented to the user.
const MENU_ITEMS: &[&str] = &[
    "Select image file",
    "Encode to Base64",
    "Decode Base64",
    "Show configuration",
    "Exit",
];

/// Entry point for interactive mode. Called when `b64pix` is invoked with no subcommand.
pub fn run(config: &Config) -> anyhow::Result<()> {
    theme::print_banner();

    let theme = theme::b64pix_theme();
    let mut session = Session::new(config.clone());

    loop {
        eprintln!();
        session.print_status();
        let selection = Select::with_theme(&theme)
            .with_prompt("What would you like to do?")
            .items(MENU_ITEMS)
            .default(0)
            .interact_opt()?;

        match selection {
            Some(0) => session.select_file(&theme)?,
            Some(1) => session.encode(&theme)?,
            Some(2) => session.decode(&theme)?,
            Some(3) => show_config(config)?,
            Some(4) | None => break, // Exit or Ctrl+C / Esc
            _ => unreachable!(),
        }
    }

    Ok(())
}

/// Interactive config viewer — shows a summary of current settings.
fn show_config(config: &Config) -> anyhow::Result<()> {
    let dim = Style::new().for_stderr().dim();
    let cyan = Style::new().for_stderr().cyan();
    let label = Style::new().for_stderr().bold();

    eprintln!();
    eprintln!("  {}", cyan.apply_to("Current configuration:"));
    eprintln!();

    let config_path = Config::default_path();
    let path_note = if config_path.exists() {
        "(exists)"
    } else {
        "(using defaults)"
    };

    eprintln!(
        "    {:<20} {} {}",
        label.apply_to("Config file:"),
        config_path.display(),
        dim.apply_to(path_note)
    );
    eprintln!(
        "    {:<20} {} KiB",
        label.apply_to("Size limit:"),
        config.limits.max_file_size_kib
    );
    eprintln!(
        "    {:<20} {}px {}",
        label.apply_to("Thumbnail:"),
        config.thumbnail.max_edge,
        config.thumbnail.format
    );
    eprintln!(
        "    {:<20} {}",
        label.apply_to("Log level:"),
        config.logging.level
    );
    eprintln!();

    Ok(())
}
