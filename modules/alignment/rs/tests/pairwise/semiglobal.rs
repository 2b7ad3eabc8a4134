use eyre::Result;

use tralign_alignment_rs::pairwise::{align, AlignError, Aligner, Config, Mode, Parameters};

use super::{check, Workload};

#[test]
fn test_reference_flanks_are_free() -> Result<()> {
    let aligner = Aligner::new(&Parameters::default(), Config::new(Mode::SemiGlobal))?;
    let workload = [
        Workload {
            reference: (b"CCCCACGTACGTCCCC", 4),
            query: (b"ACGTACGT", 0),
            score: 80,
            rle: "8=",
        },
        Workload {
            reference: (b"ACGTAC", 0),
            query: (b"ACGAAC", 0),
            score: 41,
            rle: "3=1X2=",
        },
        Workload {
            reference: (b"", 0),
            query: (b"ACGT", 0),
            score: -31,
            rle: "4I",
        },
    ];
    for w in workload {
        check(&aligner, &w)?;
    }

    // The same pair pays for both flanks in global mode
    let global = align("CCCCACGTACGTCCCC", "ACGTACGT", &Parameters::default(), Mode::Global)?;
    assert_eq!(global.rle(), "4D8=4D");
    assert_eq!(*global.score(), 80 - 2 * 31);
    Ok(())
}

#[test]
fn test_ties_pick_the_first_occurrence() -> Result<()> {
    let alignment = align("ACGTTACGT", "ACGT", &Parameters::new(1, -1, -2, -1), Mode::SemiGlobal)?;
    assert_eq!(*alignment.score(), 4);
    assert_eq!(*alignment.reference(), 0..4);
    Ok(())
}

#[test]
fn test_spliced_transcript() -> Result<()> {
    let exon1 = "ACGTTGCAAGCT";
    let exon2 = "TTGACCGATGCA";
    let intron = format!("GT{}AG", "CATCATCATGACTGAC".repeat(3));
    let genome = format!("TTTTTTTTTT{exon1}{intron}{exon2}GGGGGGGGG");
    let transcript = format!("{exon1}{exon2}");

    // Without the discount a long deletion is never worth it: the second exon is mangled instead
    let alignment = align(&genome, &transcript, &Parameters::default(), Mode::SemiGlobal)?;
    assert_eq!(alignment.rle(), "12=1X1=1X1=1X1=1I2=1I2=");
    assert_eq!(*alignment.score(), 125);
    assert_eq!(*alignment.reference(), 10..32);

    let params = Parameters::default().with_long_gaps(10, 0);
    let alignment = align(&genome, &transcript, &params, Mode::SemiGlobal)?;
    assert_eq!(alignment.cigar().to_string(), "12M52N12M");
    assert_eq!(*alignment.score(), 185);
    assert_eq!(*alignment.reference(), 10..86);
    assert_eq!(*alignment.query(), 0..24);
    Ok(())
}

#[test]
fn test_empty_query() {
    assert!(matches!(
        align("ACGT", "", &Parameters::default(), Mode::SemiGlobal),
        Err(AlignError::NoAlignment { .. })
    ));
}

#[test]
fn test_band() -> Result<()> {
    let params = Parameters::default();

    // The query sits on diagonal 4, a narrower band forces a worse placement
    let wide = Aligner::new(&params, Config::new(Mode::SemiGlobal).with_band(Some(4)))?;
    let alignment = wide.align("CCCCACGTACGTCCCC", "ACGTACGT")?;
    assert_eq!(alignment.rle(), "8=");
    assert_eq!(*alignment.score(), 80);

    let narrow = Aligner::new(&params, Config::new(Mode::SemiGlobal).with_band(Some(2)))?;
    let alignment = narrow.align("CCCCACGTACGTCCCC", "ACGTACGT")?;
    assert_eq!(alignment.rle(), "1X1=2X4=");
    assert_eq!(*alignment.score(), 23);
    Ok(())
}
