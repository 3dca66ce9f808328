use std::fmt::Write as _;
use std::io::Write;

use chrono::SecondsFormat;
use mail_pagination::MailboxItem;

use crate::error::AppError;

/// Write one item as a line of TSV or JSON.
///
/// `buf` is reused between calls to avoid a fresh allocation per line.
pub fn write_item<W: Write>(
    item: &MailboxItem,
    json_mode: bool,
    buf: &mut String,
    writer: &mut W,
) -> Result<(), AppError> {
    buf.clear();

    if json_mode {
        buf.push_str(&serde_json::to_string(item)?);
    } else {
        // TSV: id \t time \t order \t read \t labels \t subject
        buf.push_str(&item.id);
        buf.push('\t');
        match item.datetime() {
            Some(dt) => buf.push_str(&dt.to_rfc3339_opts(SecondsFormat::Secs, true)),
            None => {
                let _ = write!(buf, "{}", item.time);
            }
        }
        let _ = write!(buf, "\t{}\t", item.order);
        buf.push_str(if item.read { "read" } else { "unread" });
        buf.push('\t');
        buf.push_str(&item.label_ids.join(","));
        buf.push('\t');
        push_field(buf, &item.subject);
    }

    buf.push('\n');
    writer.write_all(buf.as_bytes())?;
    Ok(())
}

/// Pretty JSON of any serializable value, newline-terminated.
pub fn write_json<W: Write, T: serde::Serialize>(value: &T, writer: &mut W) -> Result<(), AppError> {
    serde_json::to_writer_pretty(&mut *writer, value)?;
    writer.write_all(b"\n")?;
    Ok(())
}

/// Append `field` with tabs and line breaks flattened to spaces.
fn push_field(buf: &mut String, field: &str) {
    buf.extend(field.chars().map(|c| match c {
        '\t' | '\n' | '\r' => ' ',
        c => c,
    }));
}
