use crate::types::SequenceFormat;

/// Classify a sequence file from its first line.
/// `>` means FASTA, `@` means FASTQ; anything else (an empty line included)
/// is unrecognized.
pub fn sniff(first_line: &[u8]) -> SequenceFormat {
    match first_line.first() {
        Some(b'>') => SequenceFormat::Fasta,
        Some(b'@') => SequenceFormat::Fastq,
        _ => SequenceFormat::Unrecognized,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sniff() {
        assert_eq!(sniff(b">chr1 description\n"), SequenceFormat::Fasta);
        assert_eq!(sniff(b"@read1/1\n"), SequenceFormat::Fastq);
        assert_eq!(sniff(b"ACGT\n"), SequenceFormat::Unrecognized);
        assert_eq!(sniff(b"\n"), SequenceFormat::Unrecognized);
        assert_eq!(sniff(b""), SequenceFormat::Unrecognized);
        // leading whitespace is not skipped
        assert_eq!(sniff(b" >chr1\n"), SequenceFormat::Unrecognized);
    }
}
