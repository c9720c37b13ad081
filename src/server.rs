//! Line-delimited JSON transport over stdin/stdout.
//!
//! One request per line, tagged with an `"op"` field; one response envelope
//! per line, shaped `{"status": N, "body": ...}`. The status codes mirror
//! the classifications in [`ApiError`]: 201 for creation, 200 for queries,
//! 204 (no body) for deletion.
//!
//! ```text
//! {"op": "create", "value": "racecar"}
//! {"op": "list", "is_palindrome": "true", "min_length": "3"}
//! {"op": "search", "query": "palindromic strings longer than 5"}
//! {"op": "get", "value": "racecar"}
//! {"op": "delete", "value": "racecar"}
//! ```
//!
//! Requests are handled strictly one at a time; the store is exclusively
//! owned by this loop for its whole run, so a record is never observable
//! half-built. A malformed line yields a 400 envelope and the loop keeps
//! going.

use crate::service::{self, ApiError, RawFilterParams};
use crate::store::StringStore;
use anyhow::Result;
use serde::{Deserialize, Serialize};
use serde_json::{Value, json};
use std::io::{BufRead, Write};

#[derive(Debug, Deserialize)]
#[serde(tag = "op", rename_all = "snake_case")]
enum Request {
    Create {
        #[serde(flatten)]
        body: Value,
    },
    List {
        #[serde(flatten)]
        params: RawFilterParams,
    },
    Search {
        query: Option<String>,
    },
    Get {
        value: String,
    },
    Delete {
        value: String,
    },
}

/// Run the request loop until stdin closes.
pub fn run(store: &mut StringStore) -> Result<()> {
    let stdin = std::io::stdin();
    let stdout = std::io::stdout();
    let mut out = stdout.lock();

    for line in stdin.lock().lines() {
        let line = line?;
        if line.trim().is_empty() {
            continue;
        }

        let response = match serde_json::from_str::<Request>(&line) {
            Ok(request) => dispatch(store, request),
            Err(err) => json!({
                "status": 400,
                "body": { "error": format!("Malformed request: {err}") },
            }),
        };

        serde_json::to_writer(&mut out, &response)?;
        out.write_all(b"\n")?;
        out.flush()?;
    }

    Ok(())
}

fn dispatch(store: &mut StringStore, request: Request) -> Value {
    match request {
        Request::Create { body } => envelope(201, service::create(store, &body)),
        Request::List { params } => envelope(200, service::list(store, &params)),
        Request::Search { query } => envelope(200, service::search(store, query.as_deref())),
        Request::Get { value } => envelope(200, service::get(store, &value)),
        Request::Delete { value } => match service::delete(store, &value) {
            Ok(()) => json!({ "status": 204 }),
            Err(err) => error_envelope(err),
        },
    }
}

fn envelope<T: Serialize>(success_status: u16, result: Result<T, ApiError>) -> Value {
    match result {
        Ok(body) => json!({ "status": success_status, "body": body }),
        Err(err) => error_envelope(err),
    }
}

fn error_envelope(err: ApiError) -> Value {
    json!({
        "status": err.status_code(),
        "body": { "error": err.to_string() },
    })
}
