use std::io::{self, BufWriter, Read, Write};

use anyhow::Context;
use genecat::io::decompressing_reader;
use genecat::zero_counts::{self, ZeroCountSummary};

use crate::csv_stat::CsvStatOutput;
use crate::PROGRESS_BAR;

pub fn zero_counts<R: Read + Send>(reader: R, csv: bool) -> anyhow::Result<()> {
    let (_, reader) =
        decompressing_reader(reader).context("Could not read the catalog statistics file")?;
    PROGRESS_BAR.set_rows();

    let summary = zero_counts::zero_counts(reader, &*PROGRESS_BAR)
        .context("Could not load the catalog statistics table")?;
    PROGRESS_BAR.finish();

    if csv {
        let mut output = CsvStatOutput::stdout();
        output.add_record(&summary)?;
        output.flush()?;
    } else {
        let stdout = io::stdout();
        let mut writer = BufWriter::new(stdout.lock());
        write_report(&mut writer, &summary)?;
        writer.flush()?;
    }

    Ok(())
}

fn write_report<W: Write>(mut writer: W, summary: &ZeroCountSummary) -> io::Result<()> {
    writeln!(writer, "Column 4 has {} zeros.", summary.col4_zeros)?;
    writeln!(writer, "Column 5 has {} zeros.", summary.col5_zeros)?;
    writeln!(writer, "Column 6 has {} zeros.", summary.col6_zeros)?;
    writeln!(
        writer,
        "Rows with 0 in all three columns: {}",
        summary.all_three_zeros
    )?;
    writeln!(
        writer,
        "Rows with 0 in columns 4 and 5 together: {}",
        summary.col4_and_col5_zeros
    )?;
    writeln!(
        writer,
        "Rows with 0 in column 4 and not in column 5: {}",
        summary.col4_only_zeros
    )?;
    writeln!(
        writer,
        "Rows with 0 in column 5 and not in column 4: {}",
        summary.col5_only_zeros
    )?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use genecat::catalog::CatalogRow;
    use genecat::zero_counts::ZeroCountSummary;

    use crate::cmd::zero_counts::write_report;
    use crate::csv_stat::CsvStatOutput;

    fn example_summary() -> ZeroCountSummary {
        ZeroCountSummary::from_rows(&[
            CatalogRow::new(2, [0.0, 0.0, 0.0]),
            CatalogRow::new(3, [0.0, 1.0, 0.0]),
            CatalogRow::new(4, [1.0, 1.0, 1.0]),
        ])
    }

    #[test]
    fn test_report() {
        let mut data = Vec::new();
        write_report(&mut data, &example_summary()).unwrap();

        assert_eq!(
            String::from_utf8(data).unwrap(),
            "Column 4 has 2 zeros.
Column 5 has 1 zeros.
Column 6 has 2 zeros.
Rows with 0 in all three columns: 1
Rows with 0 in columns 4 and 5 together: 1
Rows with 0 in column 4 and not in column 5: 1
Rows with 0 in column 5 and not in column 4: 0
"
        );
    }

    #[test]
    fn test_csv_output() {
        let mut data = Vec::new();
        {
            let mut output = CsvStatOutput::from_writer(&mut data);
            output.add_record(&example_summary()).unwrap();
            output.flush().unwrap();
        }

        assert_eq!(
            String::from_utf8(data).unwrap(),
            "rows,col4_zeros,col5_zeros,col6_zeros,all_three_zeros,col4_and_col5_zeros,\
col4_only_zeros,col5_only_zeros
3,2,1,2,1,1,1,0
"
        );
    }
}
