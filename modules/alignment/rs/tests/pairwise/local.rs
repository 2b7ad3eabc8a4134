use eyre::Result;

use tralign_alignment_rs::pairwise::{AlignError, Aligner, Config, Mode, Parameters};
use tralign_alignment_rs::Alphabet;

use super::{ensure, Workload};

fn aligner(gap_open: i32) -> Aligner {
    let config = Config::new(Mode::Local).with_alphabet(Alphabet::Any);
    Aligner::new(&Parameters::new(1, -2, gap_open, -1), config).unwrap()
}

#[test]
fn test_empty() {
    let aligner = aligner(-4);
    let workload: Vec<(&[u8], &[u8])> = vec![
        (b"ACGT", b""),
        (b"", b"ACGT"),
        (b"", b""),
        (b"ACGT", b"----"),
        (b"_", b"A"),
    ];

    for (reference, query) in workload {
        assert!(matches!(
            aligner.align(reference, query),
            Err(AlignError::NoAlignment { .. })
        ));
    }
}

#[test]
fn test_no_gaps() -> Result<()> {
    let aligner = aligner(-4);
    let workload = vec![
        Workload {
            reference: (b"AAGAA", 1),
            query: (b"AGA", 0),
            score: 3,
            rle: "3=",
        },
        Workload {
            reference: (b"AGTCCCGTGTCCCAGGGG", 0),
            query: (b"AGTC", 0),
            score: 4,
            rle: "4=",
        },
        Workload {
            reference: (b"CGCGCGCGTTT", 6),
            query: (b"CGTTT", 0),
            score: 5,
            rle: "5=",
        },
        Workload {
            reference: (b"AAAGGGAGGGTTTA", 3),
            query: (b"GGGGGGG", 0),
            score: 4,
            rle: "3=1X3=",
        },
        Workload {
            reference: (b"AAAA", 0),
            query: (b"AAAA", 0),
            score: 4,
            rle: "4=",
        },
        Workload {
            reference: (b"NNNN==*===*===*==", 7),
            query: (b"++++=============+++", 4),
            score: 4,
            rle: "3=1X3=",
        },
        Workload {
            reference: (b"NNNN===*===*===*===*===", 4),
            query: (b"===================", 0),
            score: 7,
            rle: "3=1X3=1X3=1X3=1X3=",
        },
        Workload {
            reference: (b"AGAAAAAAAGGAAAAAAAGGGGG", 1),
            query: (b"G", 0),
            score: 1,
            rle: "1=",
        },
    ];

    for w in workload {
        ensure(&aligner, w)?;
    }
    Ok(())
}

#[test]
fn test_affine_gaps() -> Result<()> {
    let aligner = aligner(-4);
    let workload = vec![
        Workload {
            reference: (b"AAAAAAAAAAAAAAAA*********AAAAAAAAAAAAAAAA", 0),
            query: (b"AAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAA", 0),
            score: 19,
            rle: "16=9D16=",
        },
        Workload {
            reference: (b"ACGTACGTACGT****_________", 0),
            query: (b"****ACGTACGTACGT_________ACGT*****", 4),
            score: 13,
            rle: "12=4D9=",
        },
    ];

    for w in workload {
        ensure(&aligner, w)?;
    }
    Ok(())
}

#[test]
fn test_free_gap_open() -> Result<()> {
    let aligner = aligner(0);
    let workload = vec![
        Workload {
            reference: (b"A***AAAAAAAA***AAAAAAAA***A", 4),
            query: (b"AAAAAAAAAAAAAAAA", 0),
            score: 13,
            rle: "8=3D8=",
        },
        Workload {
            reference: (b"AAAAAAA**AAAAA*****", 0),
            query: (b"___AAAAAAAAAAA", 3),
            score: 9,
            rle: "7=2D4=",
        },
    ];

    for w in workload {
        ensure(&aligner, w)?;
    }
    Ok(())
}

#[test]
fn test_restart_drops_zero_scoring_prefix() -> Result<()> {
    let config = Config::new(Mode::Local);
    let aligner = Aligner::new(&Parameters::new(1, -1, -2, -1), config)?;

    let alignment = aligner.align("AGCGT", "ATCGT")?;
    assert_eq!(*alignment.score(), 3);
    assert_eq!(alignment.cigar().to_string(), "3M");
    assert_eq!(*alignment.reference(), 2..5);
    assert_eq!(*alignment.query(), 2..5);
    Ok(())
}
