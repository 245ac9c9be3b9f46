//! Command registry: typed operator lines to RPC calls
//!
//! A fixed, immutable table maps each verb to a prepare function that
//! validates the line's arguments and produces the `(method, params)` pair
//! for the wire. The table is built once at startup and owned by the
//! session loop; there is no process-wide singleton.
//!
//! Validation failures are ordinary values, never panics: the session
//! prints the diagnostic and sends nothing.

use serde_json::{json, Value};
use std::collections::HashMap;
use thiserror::Error;

/// A prepared request: method name plus parameters, ready for the encoder
#[derive(Debug, Clone, PartialEq)]
pub struct RpcCall {
    pub method: &'static str,
    pub params: Value,
}

/// Argument validation failure for a known verb
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CommandError {
    #[error("no file path given")]
    MissingFilePath,

    /// The named integer argument is missing or not parseable
    #[error("invalid {0} argument")]
    InvalidInteger(&'static str),

    /// `add` takes alternating host/group pairs, so an even token count
    #[error("invalid <host, group> arguments")]
    UnpairedHostArguments,

    #[error("no group name given")]
    MissingGroupName,
}

/// Prepare function: arguments after the verb in, call or diagnostic out
pub type PrepareFn = fn(&[&str]) -> Result<RpcCall, CommandError>;

/// Immutable verb-to-handler table
pub struct CommandRegistry {
    handlers: HashMap<&'static str, PrepareFn>,
}

impl CommandRegistry {
    /// Build the full table of admin verbs
    pub fn new() -> Self {
        let mut handlers: HashMap<&'static str, PrepareFn> = HashMap::new();
        handlers.insert("run", prepare_run as PrepareFn);
        handlers.insert("stop", prepare_stop);
        handlers.insert("stopg", prepare_stop_group);
        handlers.insert("stopall", prepare_stop_all);
        handlers.insert("stoprev", prepare_stop_previous);
        handlers.insert("add", prepare_add_hosts);
        handlers.insert("delete", prepare_delete_hosts);
        handlers.insert("addg", prepare_add_group);
        handlers.insert("deleteg", prepare_delete_group);
        handlers.insert("info", prepare_info);
        handlers.insert("stat", prepare_stat);
        handlers.insert("test", prepare_test);
        Self { handlers }
    }

    /// Handler for the verb, or None for an unknown verb
    pub fn get(&self, verb: &str) -> Option<PrepareFn> {
        self.handlers.get(verb).copied()
    }
}

impl Default for CommandRegistry {
    fn default() -> Self {
        Self::new()
    }
}

fn first_token<'a>(args: &[&'a str], missing: CommandError) -> Result<&'a str, CommandError> {
    args.first().copied().ok_or(missing)
}

fn parse_integer(args: &[&str], name: &'static str) -> Result<i64, CommandError> {
    args.first()
        .and_then(|token| token.parse::<i64>().ok())
        .ok_or(CommandError::InvalidInteger(name))
}

fn prepare_run(args: &[&str]) -> Result<RpcCall, CommandError> {
    let file = first_token(args, CommandError::MissingFilePath)?;
    Ok(RpcCall {
        method: "run",
        params: json!({ "file": file }),
    })
}

fn prepare_stop(args: &[&str]) -> Result<RpcCall, CommandError> {
    let job_id = parse_integer(args, "job_id")?;
    Ok(RpcCall {
        method: "stop",
        params: json!({ "job_id": job_id }),
    })
}

fn prepare_stop_group(args: &[&str]) -> Result<RpcCall, CommandError> {
    let group_id = parse_integer(args, "group_id")?;
    Ok(RpcCall {
        method: "stop_group",
        params: json!({ "group_id": group_id }),
    })
}

fn prepare_stop_all(_args: &[&str]) -> Result<RpcCall, CommandError> {
    Ok(RpcCall {
        method: "stop_all",
        params: json!([]),
    })
}

fn prepare_stop_previous(_args: &[&str]) -> Result<RpcCall, CommandError> {
    Ok(RpcCall {
        method: "stop_prev",
        params: json!([]),
    })
}

fn prepare_add_hosts(args: &[&str]) -> Result<RpcCall, CommandError> {
    // alternating host,group tokens; order is preserved on the wire
    if args.len() % 2 != 0 {
        return Err(CommandError::UnpairedHostArguments);
    }
    Ok(RpcCall {
        method: "add_hosts",
        params: json!({ "hosts": args }),
    })
}

fn prepare_delete_hosts(args: &[&str]) -> Result<RpcCall, CommandError> {
    Ok(RpcCall {
        method: "delete_hosts",
        params: json!({ "hosts": args }),
    })
}

fn prepare_add_group(args: &[&str]) -> Result<RpcCall, CommandError> {
    let file = first_token(args, CommandError::MissingFilePath)?;
    Ok(RpcCall {
        method: "add_group",
        params: json!({ "file": file }),
    })
}

fn prepare_delete_group(args: &[&str]) -> Result<RpcCall, CommandError> {
    let group = first_token(args, CommandError::MissingGroupName)?;
    Ok(RpcCall {
        method: "delete_group",
        params: json!({ "group": group }),
    })
}

fn prepare_info(args: &[&str]) -> Result<RpcCall, CommandError> {
    let job_id = parse_integer(args, "job_id")?;
    Ok(RpcCall {
        method: "info",
        params: json!({ "job_id": job_id }),
    })
}

fn prepare_stat(_args: &[&str]) -> Result<RpcCall, CommandError> {
    Ok(RpcCall {
        method: "stat",
        params: json!([]),
    })
}

/// Canned smoke request for poking a freshly started master
fn prepare_test(_args: &[&str]) -> Result<RpcCall, CommandError> {
    Ok(RpcCall {
        method: "run",
        params: json!({ "file": "test/test.job" }),
    })
}
