//! Line-oriented command shell driving a session.
//!
//! Every line is one command. After each command the shell waits for the
//! session to catch up and prints the published view as one line of JSON.

use std::time::Duration;

use cv_app::{SessionCommand, ViewState};
use thiserror::Error;
use tokio::io::{AsyncBufRead, AsyncBufReadExt, AsyncWrite, AsyncWriteExt};
use tracing::{debug, warn};

use crate::bootstrap::AppRuntime;

/// Upper bound on waiting for host pushes to reach the session.
const HOST_PUSH_WAIT: Duration = Duration::from_secs(2);

pub const HELP: &str = "\
commands:
  show | list          print the current view
  select <index>       select an entry
  edit <text>          replace the selected entry's content (\\n, \\t, \\\\ escapes)
  save                 end the edit session
  validate             validate the selected entry
  format | minify      reformat the selected entry
  search [query]       filter the validated JSON tree (empty clears)
  auto on|off          toggle auto-validation
  copy <index>         copy an entry to the clipboard
  delete <index>       delete an entry
  clear                delete every entry
  refresh              reload history from the host
  seed                 push sample entries
  capture <text>       simulate a clipboard capture
  help                 show this text
  quit | exit          leave";

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ShellParseError {
    #[error("unknown command: {0} (try `help`)")]
    Unknown(String),
    #[error("`{0}` needs an argument")]
    MissingArgument(&'static str),
    #[error("not an index: {0}")]
    BadIndex(String),
    #[error("expected on or off, got: {0}")]
    BadToggle(String),
}

pub enum ShellCommand {
    Session(SessionCommand),
    /// Simulated clipboard capture on the host.
    Capture(String),
    Seed,
    Show,
    Help,
    Quit,
}

/// Parse one input line. Blank lines yield `None`.
pub fn parse_line(line: &str) -> Result<Option<ShellCommand>, ShellParseError> {
    let line = line.trim_end_matches(['\r', '\n']);
    let trimmed = line.trim_start();
    if trimmed.is_empty() {
        return Ok(None);
    }
    let (verb, rest) = match trimmed.split_once(' ') {
        Some((verb, rest)) => (verb, rest),
        None => (trimmed, ""),
    };

    let command = match verb {
        "show" | "list" => ShellCommand::Show,
        "help" => ShellCommand::Help,
        "quit" | "exit" => ShellCommand::Quit,
        "select" => ShellCommand::Session(SessionCommand::Select(index("select", rest)?)),
        "copy" => ShellCommand::Session(SessionCommand::Copy(index("copy", rest)?)),
        "delete" => ShellCommand::Session(SessionCommand::Delete(index("delete", rest)?)),
        "edit" => ShellCommand::Session(SessionCommand::Edit(unescape(rest))),
        "save" => ShellCommand::Session(SessionCommand::Save),
        "validate" => ShellCommand::Session(SessionCommand::Validate),
        "format" => ShellCommand::Session(SessionCommand::Format),
        "minify" => ShellCommand::Session(SessionCommand::Minify),
        "search" => ShellCommand::Session(SessionCommand::Search(rest.trim().to_string())),
        "auto" => ShellCommand::Session(SessionCommand::SetAutoValidate(toggle(rest)?)),
        "clear" => ShellCommand::Session(SessionCommand::ClearAll),
        "refresh" => ShellCommand::Session(SessionCommand::RefreshHistory),
        "seed" => ShellCommand::Seed,
        "capture" => {
            if rest.is_empty() {
                return Err(ShellParseError::MissingArgument("capture"));
            }
            ShellCommand::Capture(unescape(rest))
        }
        other => return Err(ShellParseError::Unknown(other.to_string())),
    };
    Ok(Some(command))
}

fn index(verb: &'static str, rest: &str) -> Result<usize, ShellParseError> {
    let arg = rest.trim();
    if arg.is_empty() {
        return Err(ShellParseError::MissingArgument(verb));
    }
    arg.parse()
        .map_err(|_| ShellParseError::BadIndex(arg.to_string()))
}

fn toggle(rest: &str) -> Result<bool, ShellParseError> {
    match rest.trim() {
        "on" | "true" => Ok(true),
        "off" | "false" => Ok(false),
        "" => Err(ShellParseError::MissingArgument("auto")),
        other => Err(ShellParseError::BadToggle(other.to_string())),
    }
}

/// `\n`, `\t` and `\\`; any other backslash is kept as is.
fn unescape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut chars = text.chars();
    while let Some(c) = chars.next() {
        if c != '\\' {
            out.push(c);
            continue;
        }
        match chars.next() {
            Some('n') => out.push('\n'),
            Some('t') => out.push('\t'),
            Some('\\') => out.push('\\'),
            Some(other) => {
                out.push('\\');
                out.push(other);
            }
            None => out.push('\\'),
        }
    }
    out
}

/// Run the shell until `quit` or end of input.
pub async fn run<R, W>(runtime: &AppRuntime, input: R, mut output: W) -> anyhow::Result<()>
where
    R: AsyncBufRead + Unpin,
    W: AsyncWrite + Unpin,
{
    // Let startup history loading publish before counting revisions.
    runtime.handle.sync().await?;

    let mut lines = input.lines();
    while let Some(line) = lines.next_line().await? {
        let command = match parse_line(&line) {
            Ok(Some(command)) => command,
            Ok(None) => continue,
            Err(err) => {
                write_line(&mut output, &format!("error: {err}")).await?;
                continue;
            }
        };

        match command {
            ShellCommand::Quit => break,
            ShellCommand::Help => write_line(&mut output, HELP).await?,
            ShellCommand::Show => print_view(&mut output, &runtime.handle.sync().await?).await?,
            ShellCommand::Session(command) => {
                runtime.handle.send(command)?;
                print_view(&mut output, &runtime.handle.sync().await?).await?;
            }
            ShellCommand::Capture(text) => {
                let view = after_host_pushes(runtime, 1, || runtime.host.capture(&text)).await?;
                print_view(&mut output, &view).await?;
            }
            ShellCommand::Seed => {
                // The seed command itself publishes once, then once per sample.
                let pushes = 1 + cv_infra::host::SAMPLE_ENTRIES.len() as u64;
                let view = after_host_pushes(runtime, pushes, || async {
                    runtime.handle.send(SessionCommand::SeedSamples)?;
                    Ok::<(), anyhow::Error>(())
                })
                .await?;
                print_view(&mut output, &view).await?;
            }
        }
    }
    debug!("shell input finished");
    Ok(())
}

/// Run `push`, then wait until the session has published `publishes` more views.
///
/// Host pushes have their own mailbox and commands are polled first, so a
/// `sync` sent right away could overtake them.
async fn after_host_pushes<F, Fut, T>(
    runtime: &AppRuntime,
    publishes: u64,
    push: F,
) -> anyhow::Result<ViewState>
where
    F: FnOnce() -> Fut,
    Fut: std::future::Future<Output = anyhow::Result<T>>,
{
    let mut views = runtime.handle.subscribe();
    let target = views.borrow().revision + publishes;
    push().await?;

    let caught_up = matches!(
        tokio::time::timeout(HOST_PUSH_WAIT, views.wait_for(|v| v.revision >= target)).await,
        Ok(Ok(_))
    );
    if !caught_up {
        warn!(target_revision = target, "host pushes not observed in time");
    }
    Ok(runtime.handle.sync().await?)
}

async fn print_view<W: AsyncWrite + Unpin>(output: &mut W, view: &ViewState) -> anyhow::Result<()> {
    let json = serde_json::to_string(view)?;
    write_line(output, &json).await
}

async fn write_line<W: AsyncWrite + Unpin>(output: &mut W, text: &str) -> anyhow::Result<()> {
    output.write_all(text.as_bytes()).await?;
    output.write_all(b"\n").await?;
    output.flush().await?;
    Ok(())
}
