//! `doc-patch` — apply one dotted-path edit to a JSON document.
//!
//! Usage:
//!   doc-patch '<path>' '<value-json>'
//!
//! The document is read from stdin; an empty stdin patches from nothing.
//! The patched document is printed to stdout.

use docpatch::{parse_path, patch, Document};
use std::io::{self, Read, Write};
use std::sync::Arc;

fn main() {
    let args: Vec<String> = std::env::args().collect();
    let (path_arg, value_arg) = match (args.get(1), args.get(2)) {
        (Some(p), Some(v)) => (p.clone(), v.clone()),
        _ => {
            eprintln!("Usage: doc-patch '<path>' '<value-json>'");
            std::process::exit(1);
        }
    };

    let path = match parse_path(&path_arg) {
        Ok(p) => p,
        Err(e) => {
            eprintln!("{e}");
            std::process::exit(1);
        }
    };

    let value: Document = match serde_json::from_str(&value_arg) {
        Ok(v) => v,
        Err(e) => {
            eprintln!("{e}");
            std::process::exit(1);
        }
    };

    let mut buf = String::new();
    if let Err(e) = io::stdin().read_to_string(&mut buf) {
        eprintln!("{e}");
        std::process::exit(1);
    }

    let root: Option<Arc<Document>> = if buf.trim().is_empty() {
        None
    } else {
        match serde_json::from_str::<Document>(buf.trim()) {
            Ok(doc) => Some(Arc::new(doc)),
            Err(e) => {
                eprintln!("{e}");
                std::process::exit(1);
            }
        }
    };

    let result = patch(root.as_ref(), &path, Arc::new(value));
    match serde_json::to_string(result.as_ref()) {
        Ok(out) => {
            io::stdout().write_all(out.as_bytes()).unwrap();
            io::stdout().write_all(b"\n").unwrap();
        }
        Err(e) => {
            eprintln!("{e}");
            std::process::exit(1);
        }
    }
}
