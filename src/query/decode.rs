use super::Row;

/// Decode the table printed by `wmic`.
///
/// The first line is the `CLASS: <name>` banner and is dropped. The next
/// non-blank line holds the column names; every following non-blank line is
/// one row. Fields are split on `delimiter` and paired with the header by
/// position: missing trailing fields are left out of the row, extra fields are
/// ignored.
#[must_use]
pub fn decode_rows(output: &str, delimiter: &str) -> Vec<Row> {
    let mut lines = output
        .lines()
        .skip(1)
        .map(|line| line.trim_end_matches('\r'))
        .filter(|line| !line.trim().is_empty());

    let Some(header_line) = lines.next() else {
        return Vec::new();
    };
    let header: Vec<&str> = split_fields(header_line, delimiter);

    lines
        .map(|line| {
            header
                .iter()
                .copied()
                .zip(split_fields(line, delimiter))
                .collect::<Row>()
        })
        .collect()
}

fn split_fields<'a>(line: &'a str, delimiter: &str) -> Vec<&'a str> {
    if delimiter.is_empty() {
        return vec![line];
    }
    line.split(delimiter).collect()
}

#[cfg(test)]
#[path = "decode_tests.rs"]
mod tests;
