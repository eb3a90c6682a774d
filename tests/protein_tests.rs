//! Protein-level validation tests

use hgvs_validate::hgvs::edit::{EventCaptures, ProteinAllele, ProteinInserted, ProteinSubstitution};
use hgvs_validate::hgvs::location::AminoAcid;
use hgvs_validate::{validate, ErrorCode, EventKind, MolecularLevel};
use rstest::rstest;

#[rstest]
// Substitutions
#[case("p.Trp24Cys", EventKind::Substitution)]
#[case("p.Trp24*", EventKind::Substitution)]
#[case("p.Trp24Ter", EventKind::Substitution)]
#[case("p.Trp24=/Cys", EventKind::Substitution)]
#[case("p.Trp24Cys^Ser", EventKind::Substitution)]
#[case("p.Cys188=", EventKind::Substitution)]
#[case("p.Trp24?", EventKind::Substitution)]
#[case("p.0", EventKind::Substitution)]
#[case("p.?", EventKind::Substitution)]
#[case("p.=", EventKind::Substitution)]
#[case("p.(=)", EventKind::Substitution)]
#[case("p.(Trp24Cys)", EventKind::Substitution)]
// Deletions
#[case("p.Lys23_Val25del", EventKind::Deletion)]
#[case("p.Val7del", EventKind::Deletion)]
#[case("p.Val7=/del", EventKind::Deletion)]
// Insertions
#[case("p.His4_Gln5insAla", EventKind::Insertion)]
#[case("p.Lys2_Gly3insGlnSerLys", EventKind::Insertion)]
#[case("p.His4_Gln5ins5", EventKind::Insertion)]
#[case("p.His4_Gln5insXXX", EventKind::Insertion)]
// Deletion-insertions
#[case("p.Cys28delinsTrpVal", EventKind::Delins)]
#[case("p.Lys23_Val25delins(3)", EventKind::Delins)]
// Frame shifts
#[case("p.Arg97ProfsTer23", EventKind::FrameShift)]
#[case("p.Arg97Profs*23", EventKind::FrameShift)]
#[case("p.Arg97fs", EventKind::FrameShift)]
#[case("p.Arg97Profs*?", EventKind::FrameShift)]
fn test_accepts(#[case] input: &str, #[case] kind: EventKind) {
    let event = validate(input, MolecularLevel::Protein)
        .unwrap_or_else(|e| panic!("{input} should be valid: {e}"));
    assert_eq!(event.kind, kind, "{input}");
    assert_eq!(event.level, MolecularLevel::Protein);
}

#[rstest]
// Grammar failures
#[case("p.W24C", ErrorCode::UnsupportedSyntax)]
#[case("p.Trp24Xyz", ErrorCode::UnsupportedSyntax)]
#[case("p.trp24cys", ErrorCode::UnsupportedSyntax)]
#[case("p.Arg97ProfsTer", ErrorCode::UnsupportedSyntax)]
#[case("p.Trp0Cys", ErrorCode::UnsupportedSyntax)]
#[case("c.Trp24Cys", ErrorCode::UnsupportedSyntax)]
#[case("p.(Trp24Cys", ErrorCode::UnsupportedSyntax)]
// Semantic failures
#[case("p.Trp24Trp", ErrorCode::RefEqualsNew)]
#[case("p.(Trp24Trp)", ErrorCode::RefEqualsNew)]
#[case("p.Val25_Lys23del", ErrorCode::UnorderedInterval)]
#[case("p.Val25_Lys23delinsTrp", ErrorCode::UnorderedInterval)]
#[case("p.His4_Gln6insAla", ErrorCode::NonFlankingInsertion)]
#[case("p.His4_Gln7insAla", ErrorCode::NonFlankingInsertion)]
#[case("p.Arg97Terfs", ErrorCode::StopBeforeFrameShift)]
#[case("p.Arg97TerfsTer23", ErrorCode::StopBeforeFrameShift)]
#[case("p.Arg97*fs", ErrorCode::StopBeforeFrameShift)]
#[case("p.Ter24fs", ErrorCode::StopBeforeFrameShift)]
#[case("p.?del", ErrorCode::MissingDeletedResidue)]
fn test_rejects(#[case] input: &str, #[case] code: ErrorCode) {
    let err = validate(input, MolecularLevel::Protein).expect_err(input);
    assert_eq!(err.code(), code, "{input}: {err}");
}

#[test]
fn test_predicted_flag() {
    assert!(validate("p.(Trp24Cys)", MolecularLevel::Protein).unwrap().predicted);
    assert!(!validate("p.Trp24Cys", MolecularLevel::Protein).unwrap().predicted);
}

#[test]
fn test_stop_is_star_or_ter() {
    for input in ["p.Trp24*", "p.Trp24Ter"] {
        let event = validate(input, MolecularLevel::Protein).unwrap();
        assert_eq!(
            event.captures,
            EventCaptures::ProteinSubstitution(ProteinSubstitution::Change {
                reference: AminoAcid::Trp,
                position: 24,
                new: ProteinAllele::Residue(AminoAcid::Ter),
                mosaic: false,
            }),
            "{input}"
        );
    }
}

#[test]
fn test_inserted_residues_captured() {
    let event = validate("p.Lys2_Gly3insGlnSerLys", MolecularLevel::Protein).unwrap();
    match event.captures {
        EventCaptures::ProteinInsertion(insertion) => assert_eq!(
            insertion.inserted,
            ProteinInserted::Residues(vec![AminoAcid::Gln, AminoAcid::Ser, AminoAcid::Lys])
        ),
        other => panic!("unexpected captures {other:?}"),
    }
}

#[test]
fn test_ref_equals_new_suggestion() {
    let err = validate("p.Val5Val", MolecularLevel::Protein).unwrap_err();
    assert_eq!(err.diagnostic().suggestion.as_deref(), Some("Val5="));
}
