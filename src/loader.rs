/*
    Loader for the line-oriented .lg graph format.

    One record per line, whitespace-separated tokens; blank lines and
    lines starting with '#' are skipped:

        v <node_id> [label]     vertex; a missing label is ""
        e <u> <v> [elabel]      edge; a missing label is absent
                                (distinct from the empty string)

    The vertex count is max(id)+1 and gap ids get the label "".
    Direction is a loader parameter, not encoded in the file.
*/

use crate::errors::Error;
use crate::graph::{DataGraph, Edge};
use log::debug;
use std::fs;
use std::path::Path;

pub fn load_lg<P: AsRef<Path>>(
    directed: bool,
    path: P,
) -> Result<DataGraph, Error> {
    let text = fs::read_to_string(path)?;
    parse_lg(directed, &text)
}

pub fn parse_lg(directed: bool, text: &str) -> Result<DataGraph, Error> {
    let mut vlabels: Vec<(usize, String)> = Vec::new();
    let mut edges: Vec<Edge> = Vec::new();
    for (idx, raw) in text.lines().enumerate() {
        let line = idx + 1;
        let trimmed = raw.trim();
        if trimmed.is_empty() || trimmed.starts_with('#') {
            continue;
        }
        let parts: Vec<&str> = trimmed.split_whitespace().collect();
        match parts[0].to_lowercase().as_str() {
            "v" => {
                if parts.len() < 2 {
                    return Err(parse_err(line, "vertex record needs an id"));
                }
                let id = parse_id(line, parts[1])?;
                let lab = parts.get(2).copied().unwrap_or("").to_string();
                vlabels.push((id, lab));
            }
            "e" => {
                if parts.len() < 3 {
                    return Err(parse_err(
                        line,
                        "edge record needs two endpoints",
                    ));
                }
                let u = parse_id(line, parts[1])?;
                let v = parse_id(line, parts[2])?;
                let label = parts.get(3).map(|l| l.to_string());
                edges.push(Edge { u, v, label });
            }
            tag => {
                return Err(parse_err(
                    line,
                    &format!("unknown record tag '{}'", tag),
                ));
            }
        }
    }

    let n = vlabels.iter().map(|(id, _)| id + 1).max().unwrap_or(0);
    let mut labels = vec![String::new(); n];
    for (id, lab) in vlabels {
        labels[id] = lab;
    }
    debug!(
        "parsed graph: {} vertices, {} edges, directed={}",
        n,
        edges.len(),
        directed
    );
    DataGraph::new(directed, labels, edges)
}

fn parse_id(line: usize, token: &str) -> Result<usize, Error> {
    token.parse::<usize>().map_err(|_| {
        parse_err(line, &format!("'{}' is not a node id", token))
    })
}

fn parse_err(line: usize, msg: &str) -> Error {
    Error::LoadParse { line, msg: msg.to_string() }
}

/*
    Unit tests
*/
