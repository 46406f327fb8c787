use anyhow::{Context, Result};
use tokio::io::{AsyncBufRead, AsyncBufReadExt, AsyncWrite, AsyncWriteExt};
use tracing::{debug, info, warn};

use super::matrix_input::MatrixBuilder;
use super::menu::{render_menu, MenuChoice};
use super::report::{format_decision, format_summary};
use crate::config::Config;
use crate::error::InputError;
use crate::evaluator::{Criterion, DecisionMaker};

/// Terminal front end: collects a payoff matrix row by row, then lets the
/// user run criteria from a menu until they exit or input ends.
pub struct Session<R, W> {
    reader: R,
    writer: W,
    config: Config,
}

impl<R, W> Session<R, W>
where
    R: AsyncBufRead + Unpin,
    W: AsyncWrite + Unpin,
{
    pub fn new(reader: R, writer: W, config: Config) -> Self {
        Self {
            reader,
            writer,
            config,
        }
    }

    pub fn into_writer(self) -> W {
        self.writer
    }

    pub async fn run(&mut self) -> Result<()> {
        let rows = self.collect_matrix().await?;
        if rows.is_empty() {
            self.say("Exiting due to empty matrix.\n").await?;
            return Ok(());
        }

        let engine = match DecisionMaker::new(rows) {
            Ok(engine) => engine,
            Err(e) => {
                self.say(&format!("Error initializing DecisionMaker: {}\n", e))
                    .await?;
                return Ok(());
            }
        };

        self.menu_loop(&engine).await
    }

    /// Reads rows until `done` or end of input. Rejected rows are reported
    /// and asked for again.
    pub async fn collect_matrix(&mut self) -> Result<Vec<Vec<f64>>> {
        self.say("\n--- MATRIX INPUT ---\n").await?;
        self.say("Enter the payoff matrix row by row, with values separated by spaces.\n")
            .await?;
        self.say("Example (3 states): 3000 1500 -500\n").await?;

        let mut builder = MatrixBuilder::new();
        loop {
            let prompt = format!(
                "Enter Alternative {} values (or 'done' to finish): ",
                builder.len() + 1
            );
            let line = match self.prompt(&prompt).await? {
                Some(line) => line,
                None => {
                    debug!("Input ended during matrix collection");
                    break;
                }
            };

            if line.trim().eq_ignore_ascii_case("done") {
                if builder.is_empty() {
                    self.say("Matrix cannot be empty. Please enter values.\n").await?;
                    continue;
                }
                break;
            }

            if let Err(e) = builder.push_line(&line) {
                warn!("Rejected row for alternative {}: {}", builder.len() + 1, e);
                let retry = match e {
                    InputError::RaggedRow { .. } => {
                        format!(" Please re-enter Alternative {}.", builder.len() + 1)
                    }
                    _ => String::new(),
                };
                self.say(&format!("Error: {}{}\n", e, retry)).await?;
            }
        }

        info!("Collected {} alternatives", builder.len());
        Ok(builder.into_rows())
    }

    async fn menu_loop(&mut self, engine: &DecisionMaker) -> Result<()> {
        loop {
            self.say(&render_menu()).await?;
            let input = match self.prompt("Enter your choice (1-7): ").await? {
                Some(input) => input,
                None => break,
            };

            let criterion = match MenuChoice::parse(&input) {
                Some(MenuChoice::Exit) => {
                    self.say("Goodbye!\n").await?;
                    break;
                }
                Some(MenuChoice::ShowAll) => {
                    let evaluation = engine.evaluate_all(self.config.summary_alpha)?;
                    self.say(&format_summary(&evaluation)).await?;
                    continue;
                }
                Some(MenuChoice::Evaluate(criterion)) => criterion,
                None => {
                    self.say("Invalid choice.\n").await?;
                    continue;
                }
            };

            let alpha = if criterion == Criterion::Hurwicz {
                match self.read_alpha().await? {
                    Some(alpha) => alpha,
                    None => continue,
                }
            } else {
                self.config.hurwicz_alpha
            };

            let decision = engine.evaluate(criterion, alpha)?;
            self.say(&format!(
                "\n--- RESULT ---\n{}\n",
                format_decision(criterion, &decision)
            ))
            .await?;
        }

        Ok(())
    }

    /// Asks for the Hurwicz coefficient. `None` means the answer was rejected
    /// and the menu should be shown again.
    async fn read_alpha(&mut self) -> Result<Option<f64>> {
        let prompt = format!(
            "Enter Hurwicz Alpha (0 to 1) [Default {}]: ",
            self.config.hurwicz_alpha
        );
        let input = match self.prompt(&prompt).await? {
            Some(input) => input,
            None => return Ok(None),
        };

        let trimmed = input.trim();
        if trimmed.is_empty() {
            return Ok(Some(self.config.hurwicz_alpha));
        }

        match trimmed.parse::<f64>() {
            Ok(alpha) if (0.0..=1.0).contains(&alpha) => Ok(Some(alpha)),
            Ok(_) => {
                self.say("Alpha must be between 0 and 1.\n").await?;
                Ok(None)
            }
            Err(_) => {
                self.say("Invalid Alpha input.\n").await?;
                Ok(None)
            }
        }
    }

    async fn prompt(&mut self, text: &str) -> Result<Option<String>> {
        self.say(text).await?;

        let mut line = String::new();
        let read = self
            .reader
            .read_line(&mut line)
            .await
            .context("failed to read from input")?;
        if read == 0 {
            return Ok(None);
        }

        Ok(Some(line.trim_end_matches(['\r', '\n']).to_string()))
    }

    async fn say(&mut self, text: &str) -> Result<()> {
        self.writer
            .write_all(text.as_bytes())
            .await
            .context("failed to write to output")?;
        self.writer.flush().await.context("failed to flush output")?;
        Ok(())
    }
}
