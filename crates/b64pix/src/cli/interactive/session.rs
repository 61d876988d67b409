//! Interactive session state and actions.
//!
//! Holds the two pieces of mutable state the original screen had: the
//! currently selected file and the last rendered thumbnail. Both are
//! replaced wholesale on each new action.

use console::Style;
use dialoguer::theme::ColorfulTheme;
use dialoguer::{Confirm, Input};
use std::path::PathBuf;

use b64pix_core::{B64pix, Config, Thumbnail};

use super::handle_interrupt;
use crate::cli::report_pipeline_error;

/// One interactive session over the pipeline.
pub struct Session {
    pipeline: B64pix,
    selected: Option<PathBuf>,
    thumbnail: Option<Thumbnail>,
}

impl Session {
    /// Create a session with no file selected.
    pub fn new(config: Config) -> Self {
        Self {
            pipeline: B64pix::new(config),
            selected: None,
            thumbnail: None,
        }
    }

    /// Print the "selected file" label and preview state above the menu.
    pub fn print_status(&self) {
        let dim = Style::new().for_stderr().dim();
        let label = match &self.selected {
            Some(path) => path.display().to_string(),
            None => "No file selected".to_string(),
        };
        let preview = match &self.thumbnail {
            Some(t) => format!("preview {}x{}", t.width, t.height),
            None => "no preview".to_string(),
        };
        eprintln!("  {} {}", dim.apply_to(label), dim.apply_to(format!("({preview})")));
    }

    /// File-selection action: prompt for a path, validate its size, and
    /// render a preview thumbnail.
    ///
    /// As in the original tool the selection sticks even when the size
    /// check warns, so a subsequent encode still targets the chosen file.
    pub fn select_file(&mut self, theme: &ColorfulTheme) -> anyhow::Result<()> {
        let input = handle_interrupt(
            Input::<String>::with_theme(theme)
                .with_prompt("Image file path")
                .interact_text(),
        )?;
        let Some(input) = input else {
            return Ok(()); // interrupted, back to menu
        };

        let path = PathBuf::from(shellexpand::tilde(input.trim()).into_owned());
        self.selected = Some(path.clone());
        self.thumbnail = None;

        match self.pipeline.preview_file(&path) {
            Ok(thumbnail) => {
                let ok = Style::new().for_stderr().green();
                eprintln!(
                    "  {} Preview rendered: {}x{} PNG ({} Base64 chars)",
                    ok.apply_to("✓"),
                    thumbnail.width,
                    thumbnail.height,
                    thumbnail.to_base64().len()
                );
                self.thumbnail = Some(thumbnail);
            }
            Err(err) => report_pipeline_error(&err),
        }

        Ok(())
    }

    /// Encode action: Base64-encode the current selection to stdout.
    pub fn encode(&self, theme: &ColorfulTheme) -> anyhow::Result<()> {
        match self.pipeline.encode_selected(self.selected.as_deref()) {
            Ok(payload) => {
                // Payload on stdout so it can be piped or copied
                println!("{}", payload);
                let ok = Style::new().for_stderr().green();
                eprintln!(
                    "  {} Encoded {} Base64 chars",
                    ok.apply_to("✓"),
                    payload.len()
                );
                self.offer_save(theme, payload.as_bytes(), "payload.txt")?;
            }
            Err(err) => report_pipeline_error(&err),
        }
        Ok(())
    }

    /// Decode action: prompt for a Base64 payload, render the thumbnail,
    /// and offer to save it.
    pub fn decode(&mut self, theme: &ColorfulTheme) -> anyhow::Result<()> {
        let input = handle_interrupt(
            Input::<String>::with_theme(theme)
                .with_prompt("Base64 payload")
                .allow_empty(true)
                .interact_text(),
        )?;
        let Some(input) = input else {
            return Ok(());
        };

        match self.pipeline.decode_to_thumbnail(&input) {
            Ok((decoded, thumbnail)) => {
                let ok = Style::new().for_stderr().green();
                eprintln!(
                    "  {} Decoded {}x{} image ({} bytes), thumbnail {}x{}",
                    ok.apply_to("✓"),
                    decoded.width,
                    decoded.height,
                    decoded.byte_len,
                    thumbnail.width,
                    thumbnail.height
                );
                self.offer_save(theme, thumbnail.png_bytes(), "thumbnail.png")?;
                self.thumbnail = Some(thumbnail);
            }
            Err(err) => report_pipeline_error(&err),
        }
        Ok(())
    }

    /// Ask whether to write `bytes` to a file, defaulting to `default_name`.
    fn offer_save(
        &self,
        theme: &ColorfulTheme,
        bytes: &[u8],
        default_name: &str,
    ) -> anyhow::Result<()> {
        let save = handle_interrupt(
            Confirm::with_theme(theme)
                .with_prompt("Save to file?")
                .default(false)
                .interact(),
        )?;
        if save != Some(true) {
            return Ok(());
        }

        let path = handle_interrupt(
            Input::<String>::with_theme(theme)
                .with_prompt("Output path")
                .default(default_name.to_string())
                .interact_text(),
        )?;
        let Some(path) = path else {
            return Ok(());
        };

        let path = PathBuf::from(shellexpand::tilde(path.trim()).into_owned());
        match std::fs::write(&path, bytes) {
            Ok(()) => {
                let ok = Style::new().for_stderr().green();
                eprintln!("  {} Written to {}", ok.apply_to("✓"), path.display());
            }
            Err(e) => {
                let fail = Style::new().for_stderr().red();
                eprintln!(
                    "  {} Cannot write {}: {}",
                    fail.apply_to("✗"),
                    path.display(),
                    e
                );
            }
        }
        Ok(())
    }
}
