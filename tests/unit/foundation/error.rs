use super::*;

#[test]
fn display_prefixes_are_stable() {
    assert!(
        OgError::validation("x")
            .to_string()
            .contains("validation error:")
    );
    assert!(OgError::metadata("x").to_string().contains("metadata error:"));
    assert!(OgError::not_ready("x").to_string().contains("engine not ready:"));
    assert!(OgError::asset("x").to_string().contains("asset error:"));
    assert!(OgError::encode("x").to_string().contains("encode error:"));
    assert!(OgError::upload("x").to_string().contains("upload error:"));
    assert!(OgError::busy("x").to_string().contains("busy:"));
}

#[test]
fn other_preserves_source() {
    let base = std::io::Error::other("boom");
    let err = OgError::Other(anyhow::Error::new(base));
    assert!(err.to_string().contains("boom"));
}

#[test]
fn user_messages_carry_actionable_hints() {
    let msg = OgError::asset("image could not be read").user_message();
    assert!(msg.contains("cross-origin"));

    let msg = OgError::upload("quota exceeded").user_message();
    assert!(msg.contains("quota exceeded"));

    let msg = OgError::metadata("404").user_message();
    assert!(msg.contains("enter details manually"));
}
