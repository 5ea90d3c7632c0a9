use std::io;

use dialoguer::theme::ColorfulTheme;
use dialoguer::Input;

use croco_core::Prompt;

/// [`Prompt`] reading free-text answers from the terminal.
pub struct DialoguerPrompt {
    theme: ColorfulTheme,
}

impl DialoguerPrompt {
    pub fn new() -> Self {
        Self {
            theme: ColorfulTheme::default(),
        }
    }

    fn ask(&self, prompt: &str, allow_empty: bool) -> io::Result<String> {
        Input::<String>::with_theme(&self.theme)
            .with_prompt(prompt)
            .allow_empty(allow_empty)
            .interact_text()
            .map_err(|e| io::Error::other(e.to_string()))
    }
}

impl Prompt for DialoguerPrompt {
    fn project_name(&self) -> io::Result<String> {
        self.ask("Enter your project name", false)
    }

    fn install_answer(&self) -> io::Result<String> {
        self.ask("Do you want to install dependencies? (y/n)", true)
    }
}
