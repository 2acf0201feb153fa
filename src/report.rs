//! JUnit report rendering and writing
//!
//! Two fixed templates, one per verdict, each carrying exactly one
//! `<testcase>` element. The rendered document is built fully in memory and
//! written to the report path in a single operation.

use crate::config::InvocationSpec;
use crate::error::{RunnerError, RunnerResult};
use crate::runner::DeathVerdict;

/// Render the report document for the observed verdict
pub fn render(spec: &InvocationSpec, verdict: DeathVerdict) -> String {
    match verdict {
        DeathVerdict::Died => render_passed(&spec.test_name),
        DeathVerdict::Survived => render_failed(spec),
    }
}

/// Write the rendered report, creating or overwriting the file in full
pub async fn write(spec: &InvocationSpec, verdict: DeathVerdict) -> RunnerResult<()> {
    let xml = render(spec, verdict);

    tokio::fs::write(&spec.report_path, xml)
        .await
        .map_err(|source| RunnerError::ReportWriteFailed {
            path: spec.report_path.display().to_string(),
            source,
        })
}

fn render_passed(name: &str) -> String {
    format!(
        r#"<?xml version="1.0" encoding="UTF-8"?>
<testsuites tests="1" failures="0" disabled="0" errors="0" time="0" name="{name}">
  <testsuite name="{name}" tests="1" failures="0" disabled="0" errors="0" time="0">
    <testcase name="{name}" status="run" time="0" classname="{name}" />
  </testsuite>
</testsuites>
"#
    )
}

fn render_failed(spec: &InvocationSpec) -> String {
    format!(
        r#"<?xml version="1.0" encoding="UTF-8"?>
<testsuites tests="1" failures="1" disabled="0" errors="0" time="0" name="{name}">
  <testsuite name="{name}" tests="1" failures="1" disabled="0" errors="0" time="0">
    <testcase name="{name}" status="run" time="0" classname="{name}">
      <failure message="Failed" type="">Program {prog} {args:?} did not die.</failure>
    </testcase>
  </testsuite>
</testsuites>
"#,
        name = spec.test_name,
        prog = spec.executable.display(),
        args = spec.forwarded_args,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    fn spec_with_args(forwarded: &[&str]) -> InvocationSpec {
        InvocationSpec {
            executable: PathBuf::from("/bin/true"),
            test_name: "death_check".to_string(),
            report_path: PathBuf::from("unused.xml"),
            forwarded_args: forwarded.iter().map(|a| a.to_string()).collect(),
        }
    }

    #[test]
    fn passing_report_has_zero_failures() {
        let xml = render(&spec_with_args(&[]), DeathVerdict::Died);

        assert!(xml.contains(r#"tests="1""#));
        assert!(xml.contains(r#"failures="0""#));
        assert!(!xml.contains("<failure"));
    }

    #[test]
    fn failing_report_embeds_program_and_args() {
        let xml = render(&spec_with_args(&["extra", "arg"]), DeathVerdict::Survived);

        assert!(xml.contains(r#"failures="1""#));
        assert!(xml.contains("Program /bin/true"));
        assert!(xml.contains(r#"["extra", "arg"]"#));
        assert!(xml.contains("did not die"));
    }

    #[test]
    fn both_branches_emit_exactly_one_testcase() {
        for verdict in [DeathVerdict::Died, DeathVerdict::Survived] {
            let xml = render(&spec_with_args(&[]), verdict);
            assert_eq!(xml.matches("<testcase").count(), 1);
            assert_eq!(xml.matches("<testsuite ").count(), 1);
        }
    }

    #[test]
    fn report_names_the_test_everywhere() {
        let xml = render(&spec_with_args(&[]), DeathVerdict::Died);

        // testsuites name, testsuite name, testcase name and classname
        assert_eq!(xml.matches("death_check").count(), 4);
    }

    #[tokio::test]
    async fn write_creates_the_report_file() {
        let dir = tempfile::tempdir().unwrap();
        let mut spec = spec_with_args(&[]);
        spec.report_path = dir.path().join("out.xml");

        write(&spec, DeathVerdict::Died).await.unwrap();

        let contents = std::fs::read_to_string(&spec.report_path).unwrap();
        assert!(contents.starts_with(r#"<?xml version="1.0" encoding="UTF-8"?>"#));
        assert!(contents.contains(r#"failures="0""#));
    }
}
