use std::io::{self, BufWriter, Read, Write};

use anyhow::Context;
use genecat::io::{decompressing_reader, InputKind};
use genecat::length_stats::{self, GeneLengths};

use crate::csv_stat::CsvStatOutput;
use crate::PROGRESS_BAR;

pub fn gene_lengths<R: Read + Send>(
    reader: R,
    length: Option<u64>,
    csv: bool,
) -> anyhow::Result<()> {
    let (kind, reader) = decompressing_reader(reader).context("Could not read the FASTA file")?;
    // Progress is reported in decompressed bytes, so the file size is only
    // meaningful for plain input.
    let total_bytes = match kind {
        InputKind::Plain => length.unwrap_or(0),
        InputKind::Gzip => 0,
    };
    PROGRESS_BAR.set_total_bytes(total_bytes);

    let lengths = length_stats::gene_lengths(reader, &*PROGRESS_BAR)
        .context("Could not parse a sequence from the FASTA file")?;
    PROGRESS_BAR.finish();

    if csv {
        let mut output = CsvStatOutput::stdout();
        output.add_record(&lengths.statistics())?;
        output.flush()?;
    } else {
        let stdout = io::stdout();
        let mut writer = BufWriter::new(stdout.lock());
        write_report(&mut writer, &lengths)?;
        writer.flush()?;
    }

    Ok(())
}

fn write_report<W: Write>(mut writer: W, lengths: &GeneLengths) -> io::Result<()> {
    writeln!(writer, "Gene lengths:")?;
    for (identifier, length) in lengths.iter() {
        writeln!(writer, "{}: {}", identifier, length)?;
    }

    let stats = lengths.statistics();
    writeln!(writer)?;
    writeln!(writer, "Statistics:")?;
    if stats.count == 0 {
        writeln!(writer, "Mean gene length: 0")?;
    } else {
        writeln!(writer, "Mean gene length: {:?}", stats.mean)?;
    }
    writeln!(writer, "Minimum gene length: {}", stats.min)?;
    writeln!(writer, "Maximum gene length: {}", stats.max)?;

    writeln!(writer)?;
    writeln!(writer, "Percentage relative to mean length:")?;
    writeln!(
        writer,
        "Percentage of minimum length: {:.2}%",
        stats.min_percent_below_mean
    )?;
    writeln!(
        writer,
        "Percentage of maximum length: {:.2}%",
        stats.max_percent_above_mean
    )?;

    Ok(())
}
