//! Interactive session loop
//!
//! Reads one operator line at a time, resolves it through the command
//! registry, and sends the prepared request over the connection. The only
//! retained state is `last_command`, the most recently dispatched raw
//! line, which backs the `repeat` shortcut. It is overwritten on every
//! successful dispatch and never reset.
//!
//! Loop-level directives (`help`, `exit`/`e`/`quit`/`q`, `repeat`/`r`)
//! are handled here; every other first token goes through the registry.

use std::io::Write as _;

use jobctl_core::Result;
use tokio::io::{AsyncBufRead, AsyncBufReadExt};

use crate::commands::CommandRegistry;
use crate::connection::Connection;

const EXIT_WORDS: [&str; 4] = ["exit", "e", "quit", "q"];
const REPEAT_WORDS: [&str; 2] = ["repeat", "r"];

/// The session loop: registry, connection write side, and repeat state
pub struct Session {
    connection: Connection,
    registry: CommandRegistry,
    last_command: Option<String>,
}

impl Session {
    pub fn new(connection: Connection, registry: CommandRegistry) -> Self {
        Self {
            connection,
            registry,
            last_command: None,
        }
    }

    /// Run until the operator exits or the input stream ends
    ///
    /// Returns `Err` only for the fatal class of failures: a send that
    /// could not reach the master. Input-stream errors and EOF end the
    /// session normally, like an explicit `exit`.
    pub async fn run<R>(&mut self, input: R) -> Result<()>
    where
        R: AsyncBufRead + Unpin,
    {
        let mut lines = input.lines();
        loop {
            prompt();
            let line = match lines.next_line().await {
                Ok(Some(line)) => line,
                Ok(None) => break,
                Err(e) => {
                    println!("{e}");
                    break;
                }
            };
            let line = line.trim().to_string();
            if line.is_empty() {
                continue;
            }
            if EXIT_WORDS.contains(&line.as_str()) {
                break;
            }
            if line == "help" {
                print_help();
                continue;
            }
            let line = if REPEAT_WORDS.contains(&line.as_str()) {
                // re-validated from scratch; with no history this is a no-op
                match &self.last_command {
                    Some(last) => last.clone(),
                    None => continue,
                }
            } else {
                line
            };
            self.dispatch(&line).await?;
        }
        Ok(())
    }

    /// Resolve one line through the registry and send it if it validates
    async fn dispatch(&mut self, line: &str) -> Result<()> {
        let tokens: Vec<&str> = line.split_whitespace().collect();
        let Some((verb, args)) = tokens.split_first() else {
            return Ok(());
        };
        match self.registry.get(verb) {
            None => println!("unknown command: {verb}"),
            Some(prepare) => match prepare(args) {
                Err(e) => println!("{e}"),
                Ok(call) => {
                    self.connection.send(call.method, call.params).await?;
                    self.last_command = Some(line.to_string());
                }
            },
        }
        Ok(())
    }

    /// Hand the connection back for the shutdown path
    pub fn into_connection(self) -> Connection {
        self.connection
    }
}

/// Print the input marker without a newline
///
/// Shared with the response listener, which re-prints the marker after
/// rendering an asynchronous response. The two interleave best-effort;
/// a prompt racing an arriving response is cosmetic, not a correctness
/// problem.
pub fn prompt() {
    print!("> ");
    let _ = std::io::stdout().flush();
}

/// Static command reference for the `help` directive
pub fn print_help() {
    println!("Commands:");
    println!("  run /path/to/job/file          -- run the job described in a job file");
    println!("  stop <job_id>                  -- interrupt job execution");
    println!("  stopg <group_id>               -- interrupt execution of a group of jobs");
    println!("  stopall                        -- interrupt all job execution on all hosts");
    println!("  stoprev                        -- interrupt all jobs from previous master sessions");
    println!("  add [<hostname> <groupname>]*  -- add host(s) with given hostname and host group name");
    println!("  delete <hostname>              -- delete host(s)");
    println!("  addg /path/to/host/group/file  -- add a group of hosts described in a file");
    println!("  deleteg <groupname>            -- delete a group of hosts");
    println!("  info <job_id>                  -- show job execution statistics");
    println!("  stat                           -- show master statistics");
    println!("  repeat, r                      -- repeat last entered command");
    println!("  exit, e                        -- quit program");
}
