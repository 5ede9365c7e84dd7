use std::io::Write;

use crate::error::Result;

/// One `word - count` line per entry.
pub fn write_text<W: Write>(out: &mut W, entries: &[(String, usize)]) -> Result<()> {
    for (word, count) in entries {
        writeln!(out, "{} - {}", word, count)?;
    }
    out.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_text_lines() {
        let entries = vec![("fox".to_string(), 2), ("brown".to_string(), 1)];
        let mut out = Vec::new();
        write_text(&mut out, &entries).unwrap();
        assert_eq!(String::from_utf8(out).unwrap(), "fox - 2\nbrown - 1\n");
    }

    #[test]
    fn test_text_empty() {
        let mut out = Vec::new();
        write_text(&mut out, &[]).unwrap();
        assert!(out.is_empty());
    }
}
