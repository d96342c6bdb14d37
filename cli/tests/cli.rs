//! End-to-end test of the deckgen binary: file side effect, console
//! contract, and exit status.

use std::process::Command;

#[test]
fn writes_deck_and_prints_two_lines() {
    let dir = tempfile::tempdir().unwrap();

    let output = Command::new(env!("CARGO_BIN_EXE_deckgen"))
        .current_dir(dir.path())
        .output()
        .expect("run deckgen");

    assert!(output.status.success());

    let stdout = String::from_utf8(output.stdout).unwrap();
    assert_eq!(
        stdout,
        "Presentation created successfully!\nFile saved as: sample_presentation.pptx\n"
    );
    assert!(output.stderr.is_empty());

    let artifact = dir.path().join("sample_presentation.pptx");
    let data = std::fs::read(artifact).expect("output file written");
    assert!(!data.is_empty());
    assert_eq!(&data[..2], b"PK");
}
