use crate::*;
use std::time::Duration;

fn fails_with(source: &str) -> RunError {
    run(source).unwrap_err()
}

mod pipeline {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn value_and_type() {
        let outcome = run_typed("let rec f (n: int): int = if n < 2 then 1 else n * f (n - 1) in f 5")
            .unwrap();
        assert_eq!(outcome.to_string(), "120 : int");
        assert_eq!(outcome.render(false), "120");
        assert_eq!(run("1 < 2").unwrap().as_bool(), Some(true));
    }

    #[test]
    fn functions_print_opaquely() {
        let outcome = run_typed("fun (x: int) -> x < 0").unwrap();
        assert_eq!(outcome.to_string(), "<fun> : int -> bool");
    }

    #[test]
    fn stages_fail_in_order() {
        assert!(matches!(fails_with("1 + $"), RunError::LexError(_)));
        assert!(matches!(fails_with("(1 + "), RunError::ParseError(_)));
        // unbound beats ill-typed
        assert!(matches!(fails_with("x + true"), RunError::ResolveError(_)));
        assert!(matches!(fails_with("1 + true"), RunError::TyckError(_)));
        assert!(matches!(fails_with("1 / 0"), RunError::EvalError(_)));
    }

    #[test]
    fn lex_errors_beat_parse_errors() {
        assert!(matches!(fails_with("(1 + $"), RunError::LexError(_)));
    }

    #[test]
    fn check_stops_before_evaluation() {
        let (_, ty) = check("1 / 0").unwrap();
        assert_eq!(ty.to_string(), "int");
    }

    #[test]
    fn error_locations() {
        let info = tylam_utils::span::FileInfo::new("let x = 1 in\nx + $", None);
        let err = run("let x = 1 in\nx + $").unwrap_err();
        assert!(err.locate(&info).starts_with("2:5: Lexer error"));
        let err = fails_with("1 + true");
        assert_eq!(err.span(), None);
        assert!(err.locate(&info).starts_with("Tyck error"));
    }
}

mod worker {
    use super::*;
    use pretty_assertions::assert_eq;

    fn worker(timeout_ms: Option<u64>) -> Worker {
        Worker::new(&Conf { timeout_ms, ..Conf::default() })
    }

    #[test]
    fn runs_on_a_worker_thread() {
        let outcome = worker(Some(10_000)).run("let x = 20 in x + 22".to_owned()).unwrap();
        assert_eq!(outcome.to_string(), "42 : int");
    }

    #[test]
    fn stage_errors_come_back_intact() {
        let err = worker(None).run("x".to_owned()).unwrap_err();
        assert!(matches!(err, RunError::ResolveError(_)));
    }

    #[test]
    fn deep_recursion_fits_the_default_stack() {
        let source = "let rec sum (n: int): int = if n < 1 then 0 else n + sum (n - 1) in sum 2000";
        let outcome = worker(None).run(source.to_owned()).unwrap();
        assert_eq!(outcome.value.as_int(), Some(2001000));
    }

    #[test]
    fn worker_takes_its_stack_from_the_conf() {
        let worker = Worker::new(&Conf::default());
        assert_eq!(worker.stack_size, 256 * 1024 * 1024);
        assert_eq!(worker.timeout, None);
    }

    #[test]
    fn slow_jobs_time_out() {
        let err = worker(Some(10))
            .spawn(|| std::thread::sleep(Duration::from_millis(2_000)))
            .unwrap_err();
        assert!(matches!(err, RunError::Timeout(d) if d == Duration::from_millis(10)));
    }

    #[test]
    fn panicking_job_reports_dead_worker() {
        let err = worker(None).spawn(|| -> i64 { panic!("worker gave up") }).unwrap_err();
        assert!(matches!(err, RunError::WorkerDied));
    }
}

mod conf {
    use super::*;
    use pretty_assertions::assert_eq;
    use std::{fs, path::PathBuf};

    fn scratch(name: &str) -> PathBuf {
        let dir = std::env::temp_dir().join(format!("tylam-conf-{}-{}", std::process::id(), name));
        let _ = fs::remove_dir_all(&dir);
        dir.join("tylam.toml")
    }

    #[test]
    fn defaults() {
        let conf = Conf::default();
        assert!(conf.show_type);
        assert_eq!(conf.timeout(), None);
        assert_eq!(conf.stack_size(), 256 * 1024 * 1024);
    }

    #[test]
    fn missing_fields_fall_back_to_defaults() {
        let conf: Conf = toml::from_str("timeout_ms = 250").unwrap();
        assert!(conf.show_type);
        assert_eq!(conf.timeout(), Some(Duration::from_millis(250)));
        assert_eq!(conf.stack_size_mb, 256);
    }

    #[test]
    fn huge_stack_size_saturates() {
        let conf = Conf { stack_size_mb: usize::MAX, ..Conf::default() };
        assert_eq!(conf.stack_size(), usize::MAX);
    }

    #[test]
    fn missing_file_is_created_with_defaults() {
        let path = scratch("missing");
        let conf = Conf::load_from(&path);
        assert_eq!(conf.stack_size_mb, 256);
        let written: Conf = toml::from_str(&fs::read_to_string(&path).unwrap()).unwrap();
        assert!(written.show_type);
        assert_eq!(written.stack_size_mb, 256);
        fs::remove_dir_all(path.parent().unwrap()).unwrap();
    }

    #[test]
    fn malformed_file_is_left_untouched() {
        let path = scratch("malformed");
        let text = "timeout_ms = 250\nshow_type = fals\n";
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(&path, text).unwrap();
        let conf = Conf::load_from(&path);
        assert_eq!(conf.timeout(), None);
        assert!(conf.show_type);
        assert_eq!(fs::read_to_string(&path).unwrap(), text);
        fs::remove_dir_all(path.parent().unwrap()).unwrap();
    }

    #[test]
    fn wellformed_file_is_read() {
        let path = scratch("wellformed");
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(&path, "show_type = false\ntimeout_ms = 250\n").unwrap();
        let conf = Conf::load_from(&path);
        assert!(!conf.show_type);
        assert_eq!(conf.timeout(), Some(Duration::from_millis(250)));
        fs::remove_dir_all(path.parent().unwrap()).unwrap();
    }
}
