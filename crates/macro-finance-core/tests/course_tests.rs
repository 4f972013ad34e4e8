#![cfg(feature = "course")]

use macro_finance_core::course::materials::{self, MaterialStatus};
use macro_finance_core::course::quiz::{self, QuizOutcome};
use macro_finance_core::course::session;
use macro_finance_core::course::Calculator;
use macro_finance_core::MacroFinanceError;
use pretty_assertions::assert_eq;
use std::fs;

#[test]
fn test_catalogue_order_and_slugs() {
    let slugs: Vec<String> = session::catalogue().into_iter().map(|p| p.slug).collect();
    assert_eq!(slugs, vec!["home".to_string(), "session-1".to_string()]);
}

#[test]
fn test_missing_material_does_not_abort_page() {
    let dir = tempfile::tempdir().unwrap();
    let page = session::find_page("session-1").unwrap();

    let status = materials::locate_material(dir.path(), &page).unwrap();
    assert!(matches!(status, MaterialStatus::Missing { .. }));

    // The page itself still renders in full.
    let md = page.render_markdown();
    assert!(md.contains("## 5. Pricing Risky Cash Flows"));
}

#[test]
fn test_export_material_copies_under_download_name() {
    let root = tempfile::tempdir().unwrap();
    let dest = tempfile::tempdir().unwrap();
    fs::write(root.path().join("session1_summary.pdf"), b"%PDF-1.7 notes").unwrap();

    let page = session::session_one();
    let target = materials::export_material(root.path(), &page, dest.path()).unwrap();
    assert_eq!(
        target.file_name().unwrap().to_str().unwrap(),
        "session1_asset_pricing_foundations.pdf"
    );
    assert_eq!(fs::read(&target).unwrap(), b"%PDF-1.7 notes".to_vec());
}

#[test]
fn test_export_missing_material_errors() {
    let root = tempfile::tempdir().unwrap();
    let dest = tempfile::tempdir().unwrap();
    let err = materials::export_material(root.path(), &session::session_one(), dest.path())
        .unwrap_err();
    assert!(matches!(err, MacroFinanceError::MaterialNotFound { .. }));
}

#[test]
fn test_quiz_answer_key() {
    let correct: Vec<(u8, usize)> = vec![(1, 2), (2, 1), (3, 1)];
    for (id, choice) in correct {
        assert!(matches!(
            quiz::grade(id, choice).unwrap(),
            QuizOutcome::Correct { .. }
        ));
    }
    assert!(matches!(
        quiz::grade(3, 0).unwrap(),
        QuizOutcome::Incorrect { .. }
    ));
}

#[test]
fn test_every_calculator_has_controls() {
    for calc in session::session_one().calculators() {
        assert!(!calc.controls().is_empty(), "{calc:?}");
    }
    assert_eq!(Calculator::RiskyAssetPricing.controls().len(), 4);
}
