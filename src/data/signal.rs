//! Two-column CSV import for the signal preview.
//!
//! The first line is a header and is skipped. Every following non-empty line
//! contributes one `[x, y]` sample taken from its first two comma-separated
//! fields; extra columns are ignored. Fields may be wrapped in double quotes.
//! A header with no data rows loads as an empty signal; a file without even
//! a header is [`EditorError::SignalEmpty`].

use std::io::BufRead;
use std::path::Path;

use crate::error::{EditorError, Result};

/// A loaded signal ready to be plotted.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Signal {
    /// Column header of the first two columns, if present.
    pub x_label: Option<String>,
    pub y_label: Option<String>,
    pub samples: Vec<[f64; 2]>,
}

impl Signal {
    pub fn len(&self) -> usize {
        self.samples.len()
    }

    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    /// `(min, max)` of the x and y columns, or `None` for an empty signal.
    pub fn bounds(&self) -> Option<((f64, f64), (f64, f64))> {
        let first = self.samples.first()?;
        let mut x = (first[0], first[0]);
        let mut y = (first[1], first[1]);
        for s in &self.samples[1..] {
            x = (x.0.min(s[0]), x.1.max(s[0]));
            y = (y.0.min(s[1]), y.1.max(s[1]));
        }
        Some((x, y))
    }
}

pub fn parse_signal_csv<R: BufRead>(reader: R) -> Result<Signal> {
    let mut lines = reader.lines().enumerate();
    let mut signal = Signal::default();

    // Header
    loop {
        match lines.next() {
            None => return Err(EditorError::SignalEmpty),
            Some((_, line)) => {
                let line = line?;
                if line.trim().is_empty() {
                    continue;
                }
                let mut cols = line.split(',').map(|c| unquote(c).to_string());
                signal.x_label = cols.next().filter(|c| !c.is_empty());
                signal.y_label = cols.next().filter(|c| !c.is_empty());
                break;
            }
        }
    }

    for (idx, line) in lines {
        let line = line?;
        let line = line.trim();
        if line.is_empty() {
            continue;
        }
        let lineno = idx + 1;
        let mut cols = line.split(',');
        let x = parse_field(cols.next(), lineno, "first")?;
        let y = parse_field(cols.next(), lineno, "second")?;
        signal.samples.push([x, y]);
    }

    Ok(signal)
}

pub fn load_signal_csv<P: AsRef<Path>>(path: P) -> Result<Signal> {
    let f = std::fs::File::open(path.as_ref())?;
    parse_signal_csv(std::io::BufReader::new(f))
}

fn parse_field(field: Option<&str>, line: usize, which: &str) -> Result<f64> {
    let Some(field) = field else {
        return Err(EditorError::SignalParse {
            line,
            reason: format!("missing {which} column"),
        });
    };
    let field = unquote(field);
    field.parse::<f64>().map_err(|e| EditorError::SignalParse {
        line,
        reason: format!("'{field}' in {which} column: {e}"),
    })
}

fn unquote(field: &str) -> &str {
    let field = field.trim();
    field
        .strip_prefix('"')
        .and_then(|f| f.strip_suffix('"'))
        .map(str::trim)
        .unwrap_or(field)
}
