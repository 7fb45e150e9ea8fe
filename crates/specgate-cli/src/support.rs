use specgate_checks::Verdict;

/// Print a fatal one-line message and abort the run. No partial report
/// is emitted on this path.
pub fn fail(message: impl std::fmt::Display) -> ! {
    eprintln!("error: {message}");
    std::process::exit(1);
}

/// Map the verification verdict to the process exit code: 0 for PASS,
/// 1 for FAIL.
pub fn verdict_exit_code(verdict: Verdict) -> i32 {
    match verdict {
        Verdict::Pass => 0,
        Verdict::Fail => 1,
    }
}
