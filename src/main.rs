// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-LeanIt-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of LeanIt and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! LeanIt CLI entrypoint.
//!
//! By default this runs the interactive triage TUI against the built-in demo
//! analysis. Pass a completed result file to triage real pipeline output, or
//! `--schema` to print the JSON Schema that file must satisfy.

use std::error::Error;
use std::fs;
use std::io;

use tokio::runtime::Handle;

use leanit::model::AnalysisResult;
use leanit::tui::AnalysisSource;

fn print_usage(program: &str) {
    eprintln!(
        "Usage:\n  {program} [<result.json>]\n  {program} --demo\n  {program} --demo-fail\n  {program} --schema\n\nWith a result file, the TUI triages that completed analysis; pressing 'a'\nreplays it through the full request lifecycle. --demo (the default) uses a\nbuilt-in analysis. --demo-fail makes the demo request settle with an\nupstream failure. --schema prints the JSON Schema of the expected result\nfile and exits."
    );
}

#[derive(Debug, Default, Clone, PartialEq, Eq)]
struct CliOptions {
    demo: bool,
    demo_fail: bool,
    schema: bool,
    result_path: Option<String>,
}

fn parse_options(mut args: impl Iterator<Item = String>) -> Result<CliOptions, ()> {
    let mut options = CliOptions::default();

    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--demo" => {
                if options.demo {
                    return Err(());
                }
                options.demo = true;
            }
            "--demo-fail" => {
                if options.demo_fail {
                    return Err(());
                }
                options.demo_fail = true;
            }
            "--schema" => {
                if options.schema {
                    return Err(());
                }
                options.schema = true;
            }
            _ if arg.starts_with('-') => return Err(()),
            _ => {
                if options.result_path.is_some() {
                    return Err(());
                }
                options.result_path = Some(arg);
            }
        }
    }

    if options.result_path.is_some() && (options.demo || options.demo_fail) {
        return Err(());
    }

    if options.schema && (options.demo || options.demo_fail || options.result_path.is_some()) {
        return Err(());
    }

    Ok(options)
}

fn main() {
    let result = (|| -> Result<(), Box<dyn Error>> {
        let mut args = std::env::args();
        let program = args.next().unwrap_or_else(|| "leanit".to_owned());

        let options = match parse_options(args) {
            Ok(options) => options,
            Err(()) => {
                print_usage(&program);
                std::process::exit(2);
            }
        };

        if options.schema {
            let schema = schemars::schema_for!(AnalysisResult);
            println!("{}", serde_json::to_string_pretty(&schema)?);
            return Ok(());
        }

        let source = if options.demo_fail {
            AnalysisSource::DemoFail
        } else if let Some(path) = &options.result_path {
            let raw = fs::read_to_string(path)
                .map_err(|err| format!("failed reading {path}: {err}"))?;
            let result: AnalysisResult = serde_json::from_str(&raw)
                .map_err(|err| format!("failed parsing {path}: {err}"))?;
            AnalysisSource::File {
                result: Box::new(result),
            }
        } else {
            AnalysisSource::Demo
        };

        let runtime = tokio::runtime::Builder::new_current_thread().enable_all().build()?;

        runtime.block_on(async move {
            let handle = Handle::current();
            let tui_join = tokio::task::spawn_blocking(move || {
                leanit::tui::run(handle, source).map_err(|err| err.to_string())
            })
            .await;

            let tui_result = tui_join.map_err(|err| -> Box<dyn Error> { Box::new(err) })?;
            tui_result.map_err(|err| {
                Box::new(io::Error::new(io::ErrorKind::Other, err)) as Box<dyn Error>
            })?;
            Ok::<(), Box<dyn Error>>(())
        })?;

        Ok(())
    })();

    if let Err(err) = result {
        eprintln!("leanit: {err}");
        std::process::exit(1);
    }
}

#[cfg(test)]
mod tests {
    use super::{parse_options, CliOptions};

    #[test]
    fn parses_empty_args() {
        let options = parse_options(std::iter::empty()).expect("parse options");
        assert_eq!(options, CliOptions::default());
    }

    #[test]
    fn parses_demo_flag() {
        let options = parse_options(["--demo".to_owned()].into_iter()).expect("parse options");
        assert!(options.demo);
        assert!(!options.demo_fail);
        assert!(options.result_path.is_none());
    }

    #[test]
    fn parses_demo_fail_flag() {
        let options =
            parse_options(["--demo-fail".to_owned()].into_iter()).expect("parse options");
        assert!(options.demo_fail);
        assert!(!options.demo);
    }

    #[test]
    fn parses_schema_flag() {
        let options = parse_options(["--schema".to_owned()].into_iter()).expect("parse options");
        assert!(options.schema);
    }

    #[test]
    fn parses_positional_result_path() {
        let options =
            parse_options(["out/result.json".to_owned()].into_iter()).expect("parse options");
        assert_eq!(options.result_path.as_deref(), Some("out/result.json"));
        assert!(!options.demo);
    }

    #[test]
    fn rejects_unknown_args() {
        parse_options(["--nope".to_owned()].into_iter()).unwrap_err();
    }

    #[test]
    fn rejects_duplicate_flags() {
        parse_options(["--demo".to_owned(), "--demo".to_owned()].into_iter()).unwrap_err();
        parse_options(["--schema".to_owned(), "--schema".to_owned()].into_iter()).unwrap_err();
    }

    #[test]
    fn rejects_result_path_with_demo_modes() {
        parse_options(["--demo".to_owned(), "r.json".to_owned()].into_iter()).unwrap_err();
        parse_options(["r.json".to_owned(), "--demo-fail".to_owned()].into_iter()).unwrap_err();
    }

    #[test]
    fn rejects_schema_combined_with_anything() {
        parse_options(["--schema".to_owned(), "--demo".to_owned()].into_iter()).unwrap_err();
        parse_options(["--schema".to_owned(), "r.json".to_owned()].into_iter()).unwrap_err();
    }

    #[test]
    fn rejects_multiple_positional_paths() {
        parse_options(["one.json".to_owned(), "two.json".to_owned()].into_iter()).unwrap_err();
    }
}
