use crate::provider::{probe::probe_candidates, SearchProvider};
use crate::series::{assemble, FileRecord, RankedResult};
use console::style;
use std::io::{self, BufRead, Write};
use tracing::warn;

/// Input that ends the interactive session, matched case-insensitively.
pub const EXIT_SENTINEL: &str = "q";

/// Interactive read loop over injected input/output.
///
/// Nothing a query does is fatal here: provider trouble and empty input are
/// reported on `output` and the loop re-prompts. The loop ends on the exit
/// sentinel or end of input.
pub fn run<P, R, W>(provider: &P, mut input: R, mut output: W) -> io::Result<()>
where
    P: SearchProvider,
    R: BufRead,
    W: Write,
{
    writeln!(
        output,
        "{}",
        style("freshest — keyword search, one file per series").bold()
    )?;
    writeln!(
        output,
        "Iteration suffixes such as \"- 副本\", \"(1)\", \"_v2\", \"-3\" and \"Ver5\" fold into one series."
    )?;

    loop {
        write!(output, "\nKeyword ({EXIT_SENTINEL} to quit): ")?;
        output.flush()?;

        let mut line = String::new();
        if input.read_line(&mut line)? == 0 {
            break;
        }
        let keyword = line.trim();
        if keyword.eq_ignore_ascii_case(EXIT_SENTINEL) {
            break;
        }
        if keyword.is_empty() {
            writeln!(output, "{}", style("Keyword must not be empty.").yellow())?;
            continue;
        }
        run_query(provider, keyword, &mut output)?;
    }

    writeln!(output, "Bye.")?;
    Ok(())
}

fn run_query<P, W>(provider: &P, keyword: &str, output: &mut W) -> io::Result<()>
where
    P: SearchProvider,
    W: Write,
{
    let candidates = match provider.search(keyword) {
        Ok(candidates) => candidates,
        Err(err) => {
            warn!(keyword, %err, "search provider failed");
            writeln!(output, "{} {err}", style("Search failed:").red())?;
            return Ok(());
        }
    };

    let records = probe_candidates(&candidates);
    if records.is_empty() {
        writeln!(output, "No matching files.")?;
        return Ok(());
    }

    let matched = records.len();
    let results = assemble(records);
    writeln!(
        output,
        "{matched} matching files, {} after series dedup:",
        results.len()
    )?;
    render(&results, output)
}

/// Print ranked results, one file per series, newest first.
pub fn render<W: Write>(results: &[FileRecord], output: &mut W) -> io::Result<()> {
    for (idx, record) in results.iter().enumerate() {
        let row = RankedResult::from_record(idx + 1, record);
        writeln!(
            output,
            "{}. [{}] [series: {}] {}",
            row.rank,
            style(&row.modified).green(),
            style(&row.series).cyan(),
            row.name
        )?;
        writeln!(output, "    {}", style(&row.path).dim())?;
    }
    Ok(())
}
