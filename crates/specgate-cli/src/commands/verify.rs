use crate::support::{fail, verdict_exit_code};
use specgate_checks::{Verdict, render_json, render_text, verify, write_output};
use specgate_kernel::{Corpus, Extractor, SpecgateError, load_input_root, load_specification};
use std::path::Path;

pub fn run(input: String, specification: String, output: Option<String>, json: bool) {
    match execute(&input, &specification, output.as_deref(), json) {
        Ok(verdict) => std::process::exit(verdict_exit_code(verdict)),
        Err(err) => fail(err),
    }
}

fn execute(
    input: &str,
    specification: &str,
    output: Option<&str>,
    json: bool,
) -> Result<Verdict, SpecgateError> {
    let extractor = Extractor::new()?;
    let input_docs = load_input_root(Path::new(input))?;
    let spec_doc = load_specification(Path::new(specification))?;

    let mut corpus = Corpus::new();
    for doc in &input_docs {
        let statements = extractor.extract(doc);
        if statements.is_empty() {
            eprintln!(
                "[verify] warning: no statements extracted from {}",
                doc.path.display()
            );
        }
        corpus.extend(statements);
    }
    let spec_statements = extractor.extract(&spec_doc);
    if spec_statements.is_empty() {
        eprintln!(
            "[verify] warning: no statements extracted from {}",
            spec_doc.path.display()
        );
    }
    corpus.extend(spec_statements);

    let report = verify(&corpus);
    eprintln!(
        "[verify] {} requirement(s), {} principle(s), {} specification item(s), {} violation(s)",
        report.counts.requirements,
        report.counts.principles,
        report.counts.spec_items,
        report.violations.len(),
    );

    let rendered = if json {
        render_json(&report).map_err(|err| SpecgateError::Render(err.to_string()))?
    } else {
        render_text(&report)
    };
    write_output(output.map(Path::new), &rendered)?;

    if let Some(path) = output {
        eprintln!("[verify] report written to {path}");
    }
    Ok(report.verdict)
}
