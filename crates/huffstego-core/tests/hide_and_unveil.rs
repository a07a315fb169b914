use std::fs;
use std::path::{Path, PathBuf};

use huffstego_core::commands::{compare, hide, unveil};
use huffstego_core::*;
use image::{Rgb, RgbImage};
use tempfile::TempDir;

fn write_carrier(dir: &Path, width: u32, height: u32) -> PathBuf {
    let target = dir.join("carrier.png");
    RgbImage::from_fn(width, height, |x, y| {
        Rgb([(x * 3) as u8, (y * 5) as u8, ((x ^ y) * 7) as u8])
    })
    .save(&target)
    .expect("Cannot write carrier image");
    target
}

#[test]
fn should_hide_and_unveil_a_message() -> Result<()> {
    let out_dir = TempDir::new()?;
    let carrier = write_carrier(out_dir.path(), 40, 30);
    let secret = out_dir.path().join("secret.png");
    let key = out_dir.path().join("secret.key");
    let message = "Meet me at the old oak tree at midnight.";

    let report = hide(
        &carrier,
        &secret,
        &key,
        Some(message.to_string()),
        None,
        Some(100.0),
    )?;
    assert_eq!(report.symbol_count, message.len() as u64);
    assert!(report.bit_count < message.len() * 8);
    assert!(report.metrics.norm_l1 < 1.0);

    let unveiled = unveil(&secret, &key, None)?;
    assert_eq!(unveiled, message);

    let metrics = compare(&carrier, &secret)?;
    assert_eq!(metrics, report.metrics);

    Ok(())
}

#[test]
fn should_hide_the_content_of_a_text_file() -> Result<()> {
    let out_dir = TempDir::new()?;
    let carrier = write_carrier(out_dir.path(), 64, 64);
    let data_file = out_dir.path().join("message.txt");
    let unveiled_file = out_dir.path().join("unveiled.txt");
    let secret = out_dir.path().join("secret.png");
    let key = out_dir.path().join("secret.key");
    let content = "first line\nsecond line\n\tindented third line\n";
    fs::write(&data_file, content)?;

    hide(&carrier, &secret, &key, None, Some(data_file), None)?;
    unveil(&secret, &key, Some(unveiled_file.clone()))?;

    assert_eq!(fs::read_to_string(unveiled_file)?, content);

    Ok(())
}

#[test]
fn should_fail_unveiling_with_a_key_of_another_message() -> Result<()> {
    let out_dir = TempDir::new()?;
    let carrier = write_carrier(out_dir.path(), 32, 32);
    let secret = out_dir.path().join("secret.png");
    let key = out_dir.path().join("secret.key");
    let other_secret = out_dir.path().join("other.png");
    let other_key = out_dir.path().join("other.key");

    // "aaaaaaaab" is hidden as 111111110, the key of "zzzz" only knows the code 0
    hide(&carrier, &secret, &key, Some("aaaaaaaab".into()), None, None)?;
    hide(&carrier, &other_secret, &other_key, Some("zzzz".into()), None, None)?;

    match unveil(&secret, &other_key, None) {
        Err(HuffstegoError::MalformedStream { position: 0 }) => (),
        other => panic!("expected MalformedStream at position 0, got {other:?}"),
    }

    Ok(())
}

#[test]
fn should_reject_a_message_larger_than_the_carrier() -> Result<()> {
    let out_dir = TempDir::new()?;
    let carrier = write_carrier(out_dir.path(), 3, 3);
    let secret = out_dir.path().join("secret.png");
    let key = out_dir.path().join("secret.key");

    let result = hide(
        &carrier,
        &secret,
        &key,
        Some("This message needs more than twenty seven bits".into()),
        None,
        None,
    );

    match result {
        Err(HuffstegoError::CapacityExceeded { capacity: 27, .. }) => (),
        other => panic!("expected CapacityExceeded, got {other:?}"),
    }
    assert!(!secret.exists(), "no image should be written");
    assert!(!key.exists(), "no key should be written");

    Ok(())
}

#[test]
fn should_refuse_unsupported_carriers() -> Result<()> {
    let out_dir = TempDir::new()?;
    let result = hide(
        Path::new("Cargo.toml"),
        &out_dir.path().join("secret.png"),
        &out_dir.path().join("secret.key"),
        Some("hi".into()),
        None,
        None,
    );
    assert!(matches!(result, Err(HuffstegoError::UnsupportedMedia)));

    Ok(())
}
