// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Result writer: a fixed header line followed by result lines in
//! production order.
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::Path;

/// Header line of shortest-path reports.
pub const PATH_REPORT_HEADER: &str = "(actor)--[movie#@year]-->(actor)--...";

/// Header line of earliest-connection reports.
pub const CONNECTION_REPORT_HEADER: &str = "Actor1\tActor2\tYear";

/// Header line of co-star count reports.
pub const COSTAR_REPORT_HEADER: &str = "Number of Neighbors";

/// Writes the header and one line per result, preserving order.
///
/// # Errors
///
/// Propagates any write failure.
pub fn write_report<W: Write>(mut out: W, header: &str, lines: &[String]) -> io::Result<()> {
    writeln!(out, "{header}")?;
    for line in lines {
        writeln!(out, "{line}")?;
    }
    Ok(())
}

/// Creates (or truncates) `path` and writes the report into it, buffered.
///
/// # Errors
///
/// Propagates file creation and write failures.
pub fn write_report_file(path: &Path, header: &str, lines: &[String]) -> io::Result<()> {
    let mut out = BufWriter::new(File::create(path)?);
    write_report(&mut out, header, lines)?;
    out.flush()
}

#[cfg(test)]
mod tests {
    #![allow(clippy::expect_used)]
    use super::*;

    #[test]
    fn header_comes_first_and_order_is_preserved() {
        let mut out = Vec::new();
        write_report(
            &mut out,
            CONNECTION_REPORT_HEADER,
            &["A\tB\t2000".to_owned(), "C\tD\t9999".to_owned()],
        )
        .expect("in-memory write cannot fail");
        let text = String::from_utf8(out).expect("report is utf-8");
        assert_eq!(text, "Actor1\tActor2\tYear\nA\tB\t2000\nC\tD\t9999\n");
    }

    #[test]
    fn empty_results_still_produce_the_header() {
        let mut out = Vec::new();
        write_report(&mut out, PATH_REPORT_HEADER, &[]).expect("in-memory write cannot fail");
        let text = String::from_utf8(out).expect("report is utf-8");
        assert_eq!(text, "(actor)--[movie#@year]-->(actor)--...\n");
    }
}
