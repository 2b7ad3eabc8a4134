use eyre::Result;

use tralign_alignment_rs::pairwise::{align, AlignError, Aligner, Config, Mode, Parameters};

use super::{ensure, Workload};

fn unit() -> Parameters {
    Parameters::new(1, -1, -2, -1)
}

#[test]
fn test_reference_deletion() -> Result<()> {
    let alignment = align("ACGT", "ACT", &unit(), Mode::Global)?;
    assert_eq!(*alignment.score(), 0);
    assert_eq!(alignment.cigar().to_string(), "2M1D1M");
    assert_eq!(alignment.rle(), "2=1D1=");
    assert_eq!(*alignment.reference(), 0..4);
    assert_eq!(*alignment.query(), 0..3);
    Ok(())
}

#[test]
fn test_identity() -> Result<()> {
    let params = Parameters::default();
    for seq in ["A", "ACGT", "NNNNACGTNNNN", "TTGACCGATGCAACGTTGCAAGCTTTGA"] {
        let alignment = align(seq, seq, &params, Mode::Global)?;
        assert_eq!(alignment.cigar().to_string(), format!("{}M", seq.len()));
        assert_eq!(*alignment.score(), seq.len() as i64 * 10);
    }
    Ok(())
}

#[test]
fn test_case_is_ignored() -> Result<()> {
    let alignment = align("acgtAC", "ACGTac", &Parameters::default(), Mode::Global)?;
    assert_eq!(alignment.rle(), "6=");
    Ok(())
}

#[test]
fn test_empty() -> Result<()> {
    let params = Parameters::default();

    let alignment = align("ACGT", "", &params, Mode::Global)?;
    assert_eq!(alignment.cigar().to_string(), "4D");
    assert_eq!(*alignment.score(), -15 - 4 * 4);
    assert_eq!((alignment.reference().clone(), alignment.query().clone()), (0..4, 0..0));

    let alignment = align("", "ACG", &params, Mode::Global)?;
    assert_eq!(alignment.cigar().to_string(), "3I");
    assert_eq!(*alignment.score(), -15 - 3 * 4);

    assert!(matches!(
        align("", "", &params, Mode::Global),
        Err(AlignError::NoAlignment { .. })
    ));
    Ok(())
}

#[test]
fn test_affine_gaps() -> Result<()> {
    let aligner = Aligner::new(&Parameters::new(1, -2, -4, -1), Config::new(Mode::Global))?;
    let workload = vec![
        Workload {
            reference: (b"ACGTACGT", 0),
            query: (b"ACGTCGT", 0),
            score: 2,
            rle: "4=1D3=",
        },
        Workload {
            reference: (b"AAAACCCCGGGG", 0),
            query: (b"AAAAGGGG", 0),
            score: 0,
            rle: "4=4D4=",
        },
        Workload {
            reference: (b"ACGTTGCA", 0),
            query: (b"ACGTTGCATT", 0),
            score: 2,
            rle: "8=2I",
        },
        Workload {
            reference: (b"AC", 0),
            query: (b"ACGTACGT", 0),
            score: -8,
            rle: "2=6I",
        },
        Workload {
            reference: (b"GATTACA", 0),
            query: (b"GCATGCT", 0),
            score: -5,
            rle: "1=2X1=1X1=1X",
        },
        Workload {
            reference: (b"ACGT", 0),
            query: (b"TGCA", 0),
            score: -8,
            rle: "4X",
        },
    ];

    for w in workload {
        ensure(&aligner, w)?;
    }
    Ok(())
}

#[test]
fn test_long_gaps() -> Result<()> {
    let exon1 = "ACGTTGCAAGCT";
    let exon2 = "TTGACCGATGCA";
    let intron = format!("GT{}AG", "CATCATCATGACTGAC".repeat(3));
    let reference = format!("{exon1}{intron}{exon2}");
    let query = format!("{exon1}{exon2}");

    let affine = Parameters::default();
    let alignment = align(&reference, &query, &affine, Mode::Global)?;
    assert_eq!(alignment.cigar().to_string(), "12M52D12M");
    assert_eq!(*alignment.score(), 240 - 15 - 52 * 4);

    let discounted = affine.with_long_gaps(10, -1);
    let alignment = align(&reference, &query, &discounted, Mode::Global)?;
    assert_eq!(alignment.cigar().to_string(), "12M52N12M");
    assert_eq!(*alignment.score(), 240 - 15 - 10 * 4 - 42);

    let free = affine.with_long_gaps(10, 0);
    let alignment = align(&reference, &query, &free, Mode::Global)?;
    assert_eq!(alignment.cigar().to_string(), "12M52N12M");
    assert_eq!(*alignment.score(), 240 - 15 - 10 * 4);

    // Runs shorter than the threshold are plain deletions
    let alignment = align(&reference, &query, &affine.with_long_gaps(60, 0), Mode::Global)?;
    assert_eq!(alignment.cigar().to_string(), "12M52D12M");
    assert_eq!(*alignment.score(), 240 - 15 - 52 * 4);
    Ok(())
}

#[test]
fn test_band_is_widened_to_reach_the_corner() -> Result<()> {
    let params = Parameters::new(1, -2, -4, -1);
    for band in [0, 1, 3] {
        let config = Config::new(Mode::Global).with_band(Some(band));
        let alignment = Aligner::new(&params, config)?.align("AAAACCCCGGGG", "AAAAGGGG")?;
        assert_eq!(alignment.rle(), "4=4D4=");
        assert_eq!(*alignment.score(), 0);
    }
    Ok(())
}
