use std::io::{self, BufRead, Write};

/// The user-facing side channel: messages the user must see and questions
/// they must answer before something destructive happens.
pub trait Prompt {
    fn alert(&mut self, message: &str);
    fn confirm(&mut self, question: &str) -> bool;
}

pub struct Terminal<R, W> {
    input: R,
    output: W,
}

impl Terminal<io::StdinLock<'static>, io::Stdout> {
    pub fn stdio() -> Self {
        Terminal::new(io::stdin().lock(), io::stdout())
    }
}

impl<R: BufRead, W: Write> Terminal<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Terminal { input, output }
    }

    pub fn say(&mut self, text: &str) -> io::Result<()> {
        writeln!(self.output, "{text}")
    }

    /// Shows `label` and reads one line, without its line ending.
    /// `None` at end of input.
    pub fn read_line(&mut self, label: &str) -> io::Result<Option<String>> {
        write!(self.output, "{label}")?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }

        Ok(Some(line.trim_end_matches(['\r', '\n']).to_owned()))
    }

    #[cfg(test)]
    pub fn into_output(self) -> W {
        self.output
    }
}

impl<R: BufRead, W: Write> Prompt for Terminal<R, W> {
    fn alert(&mut self, message: &str) {
        if let Err(err) = self.say(message) {
            log::warn!("Could not show message {message:?}: {err}");
        }
    }

    fn confirm(&mut self, question: &str) -> bool {
        match self.read_line(&format!("{question} [y/N] ")) {
            Ok(Some(answer)) => matches!(answer.trim().to_lowercase().as_str(), "y" | "yes"),
            Ok(None) => false,
            Err(err) => {
                log::warn!("Could not read confirmation: {err}");
                false
            }
        }
    }
}

/// Answers yes to every question, for `--yes` on the command line.
pub struct AssumeYes<'a>(pub &'a mut dyn Prompt);

impl Prompt for AssumeYes<'_> {
    fn alert(&mut self, message: &str) {
        self.0.alert(message);
    }

    fn confirm(&mut self, _question: &str) -> bool {
        true
    }
}

#[cfg(test)]
pub mod scripted {
    use std::collections::VecDeque;

    use super::Prompt;

    /// Replays canned confirmation answers and records everything shown.
    #[derive(Default)]
    pub struct ScriptedPrompt {
        pub answers: VecDeque<bool>,
        pub alerts: Vec<String>,
        pub questions: Vec<String>,
    }

    impl ScriptedPrompt {
        pub fn answering(answers: &[bool]) -> Self {
            ScriptedPrompt {
                answers: answers.iter().copied().collect(),
                ..Default::default()
            }
        }
    }

    impl Prompt for ScriptedPrompt {
        fn alert(&mut self, message: &str) {
            self.alerts.push(message.to_owned());
        }

        fn confirm(&mut self, question: &str) -> bool {
            self.questions.push(question.to_owned());
            self.answers.pop_front().unwrap_or(false)
        }
    }
}
