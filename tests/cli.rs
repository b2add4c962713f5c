use std::process::{Command, Output, Stdio};

use anyhow::Result;

fn canada_day(args: &[&str]) -> Result<Output> {
    let output = Command::new(env!("CARGO_BIN_EXE_canada-day"))
        .args(args)
        .stdin(Stdio::null())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .output()?;
    Ok(output)
}

fn stdout(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).into_owned()
}

#[test]
fn test_one_shot_valid_year() -> Result<()> {
    let output = canada_day(&["2024"])?;

    assert_eq!(output.status.code(), Some(0));
    let text = stdout(&output);
    assert!(text.contains("Canada Day 2024: Monday"), "{text}");
    assert!(text.contains("July 1, 2024"), "{text}");
    Ok(())
}

#[test]
fn test_one_shot_rejected_year_prints_usage() -> Result<()> {
    for (arg, message) in [
        ("abc", "Please enter a valid number for the year."),
        ("1599", "Year must be between 1600 and 3000 (inclusive)."),
        ("-5", "Year must be between 1600 and 3000 (inclusive)."),
    ] {
        let output = canada_day(&[arg])?;

        assert_eq!(output.status.code(), Some(1), "{arg}");
        let text = stdout(&output);
        assert!(text.contains(message), "{arg}: {text}");
        assert!(text.contains("Usage: canada-day [year]"), "{arg}: {text}");
    }
    Ok(())
}

#[test]
fn test_one_shot_ignores_extra_arguments() -> Result<()> {
    let output = canada_day(&["2024", "extra", "args"])?;

    assert_eq!(output.status.code(), Some(0));
    assert!(stdout(&output).contains("Canada Day 2024: Monday"));
    Ok(())
}

#[test]
fn test_verbose_flag_keeps_stdout_clean() -> Result<()> {
    let output = canada_day(&["-v", "1867"])?;

    assert_eq!(output.status.code(), Some(0));
    let text = stdout(&output);
    assert!(text.contains("Canada Day 1867: Monday"), "{text}");
    assert!(!text.contains("INFO"), "{text}");
    Ok(())
}

#[test]
fn test_prompt_without_terminal() -> Result<()> {
    let output = canada_day(&[])?;

    assert_eq!(output.status.code(), Some(1));
    let text = stdout(&output);
    assert!(text.contains("requires an interactive terminal"), "{text}");
    Ok(())
}
