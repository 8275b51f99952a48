use std::path::Path;

use tracing::info;

use crate::bits::{BitPacker, BitUnpacker};
use crate::error::HuffError;
use crate::freq::FrequencyTable;
use crate::tree::{self, Node};
use crate::{header, utils};

/// Compress `data` into a self-contained artifact: frequency header,
/// sentinel line, decimal padding line, then the bit-packed payload.
pub fn encode(data: &[u8]) -> Result<Vec<u8>, HuffError> {
    let table = FrequencyTable::tally(data)?;

    let mut out = Vec::new();
    header::serialize(&table, &mut out);

    let mut packer = BitPacker::new();
    if let Some(root) = tree::build(&table) {
        let codes = tree::assign_codes(&root);
        for &byte in data {
            let code = codes
                .get(&byte)
                .ok_or(HuffError::SymbolOutOfRange(byte))?;
            packer.push_code(code)?;
        }
    }
    let (padding, payload) = packer.finish()?;
    out.extend_from_slice(padding.to_string().as_bytes());
    out.push(b'\n');
    out.extend_from_slice(&payload);
    Ok(out)
}

/// Reverse of [`encode`]: rebuild the tree from the header frequencies and
/// walk it bit by bit through the payload.
pub fn decode(data: &[u8]) -> Result<Vec<u8>, HuffError> {
    let (table, pos) = header::parse(data)?;

    let (line, pos) = header::read_line(data, pos)
        .ok_or_else(|| HuffError::MalformedHeader("missing padding line".to_string()))?;
    let padding = std::str::from_utf8(line)
        .ok()
        .and_then(|s| s.parse::<u8>().ok())
        .ok_or_else(|| HuffError::MalformedHeader("unparsable padding count".to_string()))?;
    let payload = &data[pos..];

    // Empty table means the original file was empty.
    let Some(root) = tree::build(&table) else {
        return Ok(Vec::new());
    };

    let mut unpacker = BitUnpacker::new(payload, padding)?;

    // A lone leaf has no bit patterns to distinguish; the header count says
    // how many copies of the one symbol to emit.
    if let Node::Leaf { symbol, weight } = &root {
        return Ok(vec![*symbol; *weight as usize]);
    }

    let expected = table.total();
    let mut out = Vec::with_capacity(expected as usize);
    while unpacker.remaining() > 0 {
        let mut node = &root;
        loop {
            match node {
                Node::Leaf { symbol, .. } => {
                    out.push(*symbol);
                    break;
                }
                Node::Internal { left, right, .. } => {
                    let bit = unpacker.next_bit()?.ok_or_else(|| {
                        HuffError::CorruptPayload(
                            "payload ends in the middle of a code".to_string(),
                        )
                    })?;
                    node = if bit { right.as_ref() } else { left.as_ref() };
                }
            }
        }
    }
    if out.len() as u64 != expected {
        return Err(HuffError::CorruptPayload(format!(
            "decoded {} bytes but the header declares {}",
            out.len(),
            expected
        )));
    }
    Ok(out)
}

pub fn compress_file(input: &Path, output: &Path) -> Result<(), HuffError> {
    info!(input = %input.display(), output = %output.display(), "compressing");
    let data = utils::read_file(input)?;
    let packed = encode(&data)?;
    utils::write_file(output, &packed)?;
    info!(
        "compressed {} down to {} ({})",
        utils::format_bytes(data.len()),
        utils::format_bytes(packed.len()),
        utils::format_ratio(packed.len(), data.len()),
    );
    Ok(())
}

pub fn decompress_file(input: &Path, output: &Path) -> Result<(), HuffError> {
    info!(input = %input.display(), output = %output.display(), "decompressing");
    let packed = utils::read_file(input)?;
    let data = decode(&packed)?;
    utils::write_file(output, &data)?;
    info!(
        "restored {} from {}",
        utils::format_bytes(data.len()),
        utils::format_bytes(packed.len()),
    );
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use quickcheck::quickcheck;

    #[test]
    fn aaab_produces_the_expected_artifact() {
        let packed = encode(b"aaab").unwrap();
        let mut expected = b"a 3\nb 1\n@!#$END_MARKER$#@!\n4\n".to_vec();
        expected.push(0b0001_0000);
        assert_eq!(packed, expected);
        assert_eq!(decode(&packed).unwrap(), b"aaab");
    }

    #[test]
    fn lone_symbol_roundtrips_via_its_count() {
        let packed = encode(b"zzzz").unwrap();
        let mut expected = b"z 4\n@!#$END_MARKER$#@!\n4\n".to_vec();
        expected.push(0b0000_0000);
        assert_eq!(packed, expected);
        assert_eq!(decode(&packed).unwrap(), b"zzzz");
    }

    #[test]
    fn empty_input_roundtrips_to_empty() {
        let packed = encode(b"").unwrap();
        assert_eq!(packed, b"@!#$END_MARKER$#@!\n0\n");
        assert_eq!(decode(&packed).unwrap(), b"");
    }

    #[test]
    fn long_single_symbol_run_roundtrips() {
        let data = vec![b'a'; 1000];
        assert_eq!(decode(&encode(&data).unwrap()).unwrap(), data);
    }

    #[test]
    fn escaped_characters_roundtrip() {
        let data = b"line one\nline\ttwo\r back\\slash and spaces";
        assert_eq!(decode(&encode(data).unwrap()).unwrap(), data);
    }

    #[test]
    fn encoding_is_deterministic() {
        let data = b"deterministic output, every single time";
        assert_eq!(encode(data).unwrap(), encode(data).unwrap());
    }

    #[test]
    fn high_bytes_are_rejected() {
        let err = encode(&[0xC3, 0xA9]).unwrap_err();
        assert!(matches!(err, HuffError::SymbolOutOfRange(_)));
    }

    #[test]
    fn missing_padding_line_is_an_error() {
        let err = decode(b"a 3\nb 1\n@!#$END_MARKER$#@!\n").unwrap_err();
        assert!(matches!(err, HuffError::MalformedHeader(_)));
    }

    #[test]
    fn truncated_payload_is_an_error() {
        let mut packed = encode(b"abcabcdd").unwrap();
        packed.truncate(packed.len() - 1);
        assert!(decode(&packed).is_err());
    }

    quickcheck! {
        fn roundtrip_over_ascii_inputs(data: Vec<u8>) -> bool {
            let data: Vec<u8> = data.into_iter().map(|b| b & 0x7f).collect();
            decode(&encode(&data).unwrap()).unwrap() == data
        }
    }
}
