//! Console adapter - line-oriented shell around the application

use std::future::Future;
use std::io::{BufRead, Write};
use tokio::io::{AsyncBufRead, AsyncBufReadExt};
use tokio::sync::mpsc;

use crate::application::messaging::Application;
use crate::domain::traits::UserStore;
use crate::infrastructure::config::ShellConfig;

const LINE_BUFFER: usize = 16;

/// What the shell should do after a line
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Step {
    /// Blank line or a command with nothing to show
    Continue,
    /// Text to print
    Output(String),
    Exit,
}

/// Feed lines from a blocking reader through a channel.
///
/// The reader lives on its own thread, outside the runtime, so a read that
/// never returns (an idle terminal) cannot hold up shutdown.
pub fn blocking_lines<R>(reader: R) -> mpsc::Receiver<String>
where
    R: BufRead + Send + 'static,
{
    let (sender, receiver) = mpsc::channel(LINE_BUFFER);
    std::thread::spawn(move || {
        for line in reader.lines() {
            let line = match line {
                Ok(line) => line,
                Err(e) => {
                    tracing::warn!("Failed to read input: {}", e);
                    break;
                }
            };
            if sender.blocking_send(line).is_err() {
                break;
            }
        }
    });
    receiver
}

/// Lines of standard input
pub fn stdin_lines() -> mpsc::Receiver<String> {
    blocking_lines(std::io::BufReader::new(std::io::stdin()))
}

/// Feed lines from an async reader (a script file) through a channel
pub fn async_lines<R>(reader: R) -> mpsc::Receiver<String>
where
    R: AsyncBufRead + Unpin + Send + 'static,
{
    let (sender, receiver) = mpsc::channel(LINE_BUFFER);
    tokio::spawn(async move {
        let mut lines = reader.lines();
        loop {
            match lines.next_line().await {
                Ok(Some(line)) => {
                    if sender.send(line).await.is_err() {
                        break;
                    }
                }
                Ok(None) => break,
                Err(e) => {
                    tracing::warn!("Failed to read input: {}", e);
                    break;
                }
            }
        }
    });
    receiver
}

/// Console shell reading one command per line
pub struct ConsoleAdapter {
    prompt: Option<String>,
    exit_command: String,
}

impl ConsoleAdapter {
    pub fn new(config: &ShellConfig) -> Self {
        Self {
            prompt: Some(config.prompt.clone()),
            exit_command: config.exit_command.clone(),
        }
    }

    /// Don't print a prompt, for script input
    pub fn without_prompt(mut self) -> Self {
        self.prompt = None;
        self
    }

    /// Run one line through the application
    pub fn handle_line<S: UserStore>(&self, app: &mut Application<S>, line: &str) -> Step {
        let line = line.trim();
        if line.is_empty() {
            return Step::Continue;
        }
        if line == self.exit_command {
            return Step::Exit;
        }

        match app.parse_command(line) {
            Ok(Some(lines)) if !lines.is_empty() => Step::Output(lines.join("\n")),
            Ok(_) => Step::Continue,
            Err(e) => {
                tracing::debug!("Rejected {:?}: {}", line, e);
                Step::Output(e.to_string())
            }
        }
    }

    /// Read lines until end of input, the exit command or Ctrl-C.
    ///
    /// Returns the number of non-blank lines handled.
    pub async fn run<S, W>(&self, app: &mut Application<S>, lines: mpsc::Receiver<String>, writer: &mut W) -> std::io::Result<usize>
    where
        S: UserStore,
        W: Write,
    {
        let interrupt = async {
            if let Err(e) = tokio::signal::ctrl_c().await {
                tracing::warn!("Ctrl-C handler unavailable: {}", e);
                std::future::pending::<()>().await;
            }
        };
        self.run_until(app, lines, writer, interrupt).await
    }

    /// Same as [`ConsoleAdapter::run`], stopping when `interrupt` completes
    pub async fn run_until<S, W, F>(
        &self,
        app: &mut Application<S>,
        mut lines: mpsc::Receiver<String>,
        writer: &mut W,
        interrupt: F,
    ) -> std::io::Result<usize>
    where
        S: UserStore,
        W: Write,
        F: Future<Output = ()>,
    {
        tracing::info!("Console shell started");
        tokio::pin!(interrupt);
        let mut handled = 0;

        loop {
            if let Some(prompt) = &self.prompt {
                write!(writer, "{}", prompt)?;
                writer.flush()?;
            }

            let line = tokio::select! {
                biased;
                line = lines.recv() => line,
                _ = &mut interrupt => {
                    tracing::info!("Interrupted");
                    writeln!(writer)?;
                    break;
                }
            };
            let Some(line) = line else {
                break;
            };

            match self.handle_line(app, &line) {
                Step::Exit => break,
                Step::Continue => {}
                Step::Output(text) => writeln!(writer, "{}", text)?,
            }
            if !line.trim().is_empty() {
                handled += 1;
            }
        }

        tracing::info!("Console shell stopped after {} commands", handled);
        Ok(handled)
    }
}

impl Default for ConsoleAdapter {
    fn default() -> Self {
        Self::new(&ShellConfig::default())
    }
}
