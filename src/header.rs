use crate::error::HuffError;
use crate::freq::{FrequencyTable, SYMBOL_RANGE};

/// Reserved line marking the end of the frequency listing. The escaping
/// below guarantees no symbol line can ever collide with it.
pub const SENTINEL: &[u8] = b"@!#$END_MARKER$#@!";

/// Append the textual header for `table` to `out`: one
/// `<escaped-symbol> <count>` line per present symbol in ascending symbol
/// order, then the sentinel line.
pub fn serialize(table: &FrequencyTable, out: &mut Vec<u8>) {
    for (symbol, count) in table.present() {
        match symbol {
            b'\n' => out.extend_from_slice(b"\\n"),
            b'\t' => out.extend_from_slice(b"\\t"),
            b'\r' => out.extend_from_slice(b"\\r"),
            b' ' => out.extend_from_slice(b"\\s"),
            b'\\' => out.extend_from_slice(b"\\\\"),
            other => out.push(other),
        }
        out.push(b' ');
        out.extend_from_slice(count.to_string().as_bytes());
        out.push(b'\n');
    }
    out.extend_from_slice(SENTINEL);
    out.push(b'\n');
}

/// Parse a header produced by [`serialize`] from the start of `data`.
/// Returns the recovered table and the number of bytes consumed, i.e. the
/// offset just past the sentinel's newline.
pub fn parse(data: &[u8]) -> Result<(FrequencyTable, usize), HuffError> {
    let mut table = FrequencyTable::new();
    let mut pos = 0;

    loop {
        let Some((line, next)) = read_line(data, pos) else {
            return Err(HuffError::MalformedHeader(
                "end marker not found".to_string(),
            ));
        };
        pos = next;
        if line == SENTINEL {
            return Ok((table, pos));
        }

        let split = line
            .iter()
            .position(|&b| b == b' ')
            .ok_or_else(|| HuffError::MalformedHeader("missing count field".to_string()))?;
        let (token, rest) = line.split_at(split);
        let symbol = unescape(token)?;
        let count = std::str::from_utf8(&rest[1..])
            .ok()
            .and_then(|s| s.parse::<u64>().ok())
            .ok_or_else(|| HuffError::MalformedHeader("unparsable count".to_string()))?;
        table.set(symbol, table.get(symbol) + count);
    }
}

/// Read one newline-terminated line starting at `pos`. Returns the line
/// without its terminator plus the offset of the following line, or `None`
/// if no newline remains.
pub fn read_line(data: &[u8], pos: usize) -> Option<(&[u8], usize)> {
    if pos >= data.len() {
        return None;
    }
    let end = data[pos..].iter().position(|&b| b == b'\n')?;
    Some((&data[pos..pos + end], pos + end + 1))
}

fn unescape(token: &[u8]) -> Result<u8, HuffError> {
    let symbol = match token {
        b"\\n" => b'\n',
        b"\\t" => b'\t',
        b"\\r" => b'\r',
        b"\\s" => b' ',
        b"\\\\" => b'\\',
        [single] => *single,
        [] => {
            return Err(HuffError::MalformedHeader("empty symbol token".to_string()));
        }
        other => {
            return Err(HuffError::MalformedHeader(format!(
                "unrecognized symbol token {:?}",
                String::from_utf8_lossy(other)
            )));
        }
    };
    if symbol as usize >= SYMBOL_RANGE {
        return Err(HuffError::MalformedHeader(format!(
            "symbol value {} out of range",
            symbol
        )));
    }
    Ok(symbol)
}
