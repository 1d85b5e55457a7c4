use super::*;

#[test]
fn display_prefixes_are_stable() {
    assert!(
        VitrineError::validation("x")
            .to_string()
            .contains("validation error:")
    );
    assert!(
        VitrineError::catalog("x")
            .to_string()
            .contains("catalog error:")
    );
    assert!(
        VitrineError::scheduling("x")
            .to_string()
            .contains("scheduling error:")
    );
    assert!(
        VitrineError::lifecycle("x")
            .to_string()
            .contains("lifecycle error:")
    );
    assert!(
        VitrineError::serde("x")
            .to_string()
            .contains("serialization error:")
    );
}

#[test]
fn other_preserves_source() {
    let base = std::io::Error::other("boom");
    let err = VitrineError::Other(anyhow::Error::new(base));
    assert!(err.to_string().contains("boom"));
}
