use anyhow::{Context, Result};

use crate::models::{ScoreBuckets, BUCKET_COUNT};

/// Render the buckets as the classic tab-delimited table.
///
/// Bucket labels run 9 down to 0. Each cell is the 1-based offset
/// left-justified to five columns, a dash, and the 19-base window; an empty
/// cell is padded with four tabs so occupied columns further right stay
/// aligned. An empty bucket set renders as the header line alone.
pub fn render_table(buckets: &ScoreBuckets) -> String {
    let mut out = String::from("\t\t");
    for idx in (0..BUCKET_COUNT).rev() {
        out.push_str(&idx.to_string());
        if idx > 0 {
            out.push_str("\t\t\t\t");
        }
    }
    out.push('\n');

    for row in 0..buckets.max_rows() {
        for idx in (0..BUCKET_COUNT).rev() {
            match buckets.bucket(idx).get(row) {
                Some(candidate) => {
                    out.push_str(&format!("{:<5}-{}\t", candidate.offset, candidate.window));
                }
                None => out.push_str("\t\t\t\t"),
            }
        }
        out.push('\n');
    }

    out
}

/// Render the buckets as CSV, built directly from the bucket structure.
///
/// Column order matches the table: per bucket, an (offset, window) field
/// pair, with the bucket label sitting over the offset field in the header
/// row. Absent entries become two empty fields, which keeps every row the
/// same width.
pub fn render_csv(buckets: &ScoreBuckets) -> Result<String> {
    let mut buf = Vec::new();
    {
        let mut writer = csv::Writer::from_writer(&mut buf);

        let mut header = Vec::with_capacity(2 * BUCKET_COUNT);
        for idx in (0..BUCKET_COUNT).rev() {
            header.push(idx.to_string());
            header.push(String::new());
        }
        writer.write_record(&header)?;

        for row in 0..buckets.max_rows() {
            let mut record = Vec::with_capacity(2 * BUCKET_COUNT);
            for idx in (0..BUCKET_COUNT).rev() {
                match buckets.bucket(idx).get(row) {
                    Some(candidate) => {
                        record.push(candidate.offset.to_string());
                        record.push(candidate.window.clone());
                    }
                    None => {
                        record.push(String::new());
                        record.push(String::new());
                    }
                }
            }
            writer.write_record(&record)?;
        }

        writer.flush().context("flushing CSV output")?;
    }

    String::from_utf8(buf).context("CSV output is not valid UTF-8")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Candidate;

    fn buckets_with(entries: &[(i32, usize, &str)]) -> ScoreBuckets {
        let mut buckets = ScoreBuckets::new();
        for &(score, offset, window) in entries {
            buckets.insert(
                score,
                Candidate {
                    window: window.to_string(),
                    offset,
                },
            );
        }
        buckets
    }

    const WINDOW: &str = "ATCGATCGATCGATCGATC";

    #[test]
    fn empty_buckets_render_header_only_table() {
        let table = render_table(&ScoreBuckets::new());
        assert_eq!(table, "\t\t9\t\t\t\t8\t\t\t\t7\t\t\t\t6\t\t\t\t5\t\t\t\t4\t\t\t\t3\t\t\t\t2\t\t\t\t1\t\t\t\t0\n");
    }

    #[test]
    fn table_cell_pads_offset_to_five_columns() {
        let table = render_table(&buckets_with(&[(9, 7, WINDOW)]));
        let data_row = table.lines().nth(1).unwrap();
        assert!(data_row.starts_with(&format!("7    -{WINDOW}\t")));
    }

    #[test]
    fn table_pads_empty_columns_with_four_tabs() {
        let table = render_table(&buckets_with(&[(0, 3, WINDOW)]));
        let data_row = table.lines().nth(1).unwrap();
        // Nine empty bucket columns before the single occupied bucket 0
        assert!(data_row.starts_with(&"\t".repeat(36)));
        assert!(data_row.ends_with(&format!("3    -{WINDOW}\t")));
    }

    #[test]
    fn table_rows_follow_bucket_insertion_order() {
        let table = render_table(&buckets_with(&[(5, 1, WINDOW), (5, 4, WINDOW)]));
        let rows: Vec<&str> = table.lines().skip(1).collect();
        assert_eq!(rows.len(), 2);
        assert!(rows[0].contains(&format!("1    -{WINDOW}")));
        assert!(rows[1].contains(&format!("4    -{WINDOW}")));
    }

    #[test]
    fn empty_buckets_render_header_only_csv() {
        let csv = render_csv(&ScoreBuckets::new()).unwrap();
        assert_eq!(csv, "9,,8,,7,,6,,5,,4,,3,,2,,1,,0,\n");
    }

    #[test]
    fn csv_rows_carry_offset_and_window_fields() {
        let csv = render_csv(&buckets_with(&[(9, 2, WINDOW), (0, 5, WINDOW)])).unwrap();
        let lines: Vec<&str> = csv.lines().collect();
        assert_eq!(lines.len(), 2);

        let fields: Vec<&str> = lines[1].split(',').collect();
        assert_eq!(fields.len(), 2 * BUCKET_COUNT);
        // Bucket 9 occupies the first field pair, bucket 0 the last
        assert_eq!(fields[0], "2");
        assert_eq!(fields[1], WINDOW);
        assert_eq!(fields[18], "5");
        assert_eq!(fields[19], WINDOW);
        // Everything in between is empty
        assert!(fields[2..18].iter().all(|f| f.is_empty()));
    }
}
