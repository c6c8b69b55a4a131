//! Test harness for stripdoc integration tests

#![allow(dead_code)]

use std::path::Path;

use assert_cmd::Command;

pub use stripdoc::test_utils::TestProject;

/// Wrap blocks in a minimal pandoc document.
pub fn document(blocks: &str) -> String {
    format!(
        r#"{{"pandoc-api-version":[1,23,1],"meta":{{}},"blocks":[{}]}}"#,
        blocks
    )
}

/// A `RawBlock` holding `text` as HTML.
pub fn raw_block(text: &str) -> String {
    serde_json::json!({ "t": "RawBlock", "c": ["html", text] }).to_string()
}

/// A header made of a single `Str`.
pub fn header(level: u32, word: &str) -> String {
    serde_json::json!({
        "t": "Header",
        "c": [level, ["", [], []], [{ "t": "Str", "c": word }]]
    })
    .to_string()
}

/// The stripdoc binary, run from `dir`.
pub fn stripdoc_cmd(dir: &Path) -> Command {
    let mut cmd = Command::cargo_bin("stripdoc").expect("Failed to find stripdoc binary");
    cmd.current_dir(dir);
    cmd
}

/// Run stripdoc with `stdin`, returning (stdout, stderr, success).
pub fn run_stripdoc(dir: &Path, args: &[&str], stdin: &str) -> (String, String, bool) {
    let output = stripdoc_cmd(dir)
        .args(args)
        .write_stdin(stdin)
        .output()
        .expect("Failed to run stripdoc");

    let stdout = String::from_utf8_lossy(&output.stdout).to_string();
    let stderr = String::from_utf8_lossy(&output.stderr).to_string();
    let success = output.status.success();

    (stdout, stderr, success)
}

/// Decode the document stripdoc wrote and return its blocks.
pub fn output_blocks(stdout: &str) -> Vec<serde_json::Value> {
    let doc: serde_json::Value = serde_json::from_str(stdout).expect("stdout is not JSON");
    doc["blocks"].as_array().cloned().unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_harness_creates_temp_dir() {
        let project = TestProject::new();
        assert!(project.path().exists());
    }

    #[test]
    fn test_harness_add_file() {
        let project = TestProject::new();
        let file_path = project.add_file("src/Api.cs", "public class Api { }");
        assert!(file_path.exists());
    }

    #[test]
    fn test_document_is_valid_json() {
        let json = document(&raw_block("<!-- x -->"));
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["blocks"][0]["c"][1], "<!-- x -->");
    }
}
