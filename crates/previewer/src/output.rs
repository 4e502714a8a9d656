use anyhow::Context;
use std::io::Write;
use std::path::Path;

/// Appends `key=value` to the step output file of an Actions run.
pub fn append_step_output(path: &Path, key: &str, value: &str) -> anyhow::Result<()> {
    let mut file = std::fs::OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .with_context(|| format!("failed to open step output file {}", path.display()))?;

    writeln!(file, "{key}={value}")?;
    Ok(())
}

/// Writes `content` to `path`, or to stdout when no path is given.
pub fn write_result(path: Option<&Path>, content: &str) -> anyhow::Result<()> {
    match path {
        Some(path) => std::fs::write(path, content)
            .with_context(|| format!("failed to write {}", path.display())),
        None => {
            let mut stdout = std::io::stdout().lock();
            stdout.write_all(content.as_bytes())?;
            if !content.ends_with('\n') {
                stdout.write_all(b"\n")?;
            }
            Ok(())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_append_step_output() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("output");
        std::fs::write(&path, "existing=1\n").unwrap();

        append_step_output(&path, "app_name", "foo-bar-3-merge-adb46530").unwrap();

        let content = std::fs::read_to_string(&path).unwrap();
        assert_eq!(content, "existing=1\napp_name=foo-bar-3-merge-adb46530\n");
    }

    #[test]
    fn test_write_result_to_file() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("app.yaml");

        write_result(Some(&path), "name: x\n").unwrap();

        assert_eq!(std::fs::read_to_string(&path).unwrap(), "name: x\n");
    }

    #[test]
    fn test_write_result_to_missing_directory() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("missing").join("app.yaml");

        let err = write_result(Some(&path), "name: x\n").unwrap_err();
        assert!(err.to_string().starts_with("failed to write"));
    }
}
