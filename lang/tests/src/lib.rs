pub mod utils {
    use std::path::PathBuf;
    use tylam_driver::{Conf, RunError, SourceFile, Worker};

    pub fn programs_dir() -> PathBuf {
        PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("programs")
    }

    fn load(name: &str) -> SourceFile {
        let path = programs_dir().join(format!("{}.tl", name));
        SourceFile::load(&path).unwrap_or_else(|err| panic!("{}: {}", path.display(), err))
    }

    /// Run `programs/NAME.tl` and compare the printed `value : type` with
    /// `programs/NAME.expect`.
    pub fn run_program(name: &str) {
        let src = load(name);
        let expect = std::fs::read_to_string(programs_dir().join(format!("{}.expect", name)))
            .unwrap_or_else(|err| panic!("{}.expect: {}", name, err));
        match Worker::new(&Conf::default()).run(src.text.clone()) {
            | Ok(outcome) => {
                pretty_assertions::assert_eq!(outcome.to_string(), expect.trim());
            }
            | Err(err) => {
                eprintln!("{}", err.locate(&src.info()));
                panic!("Error running program");
            }
        }
    }

    /// Run `programs/NAME.tl`, which is supposed to be rejected.
    pub fn program_error(name: &str) -> RunError {
        let src = load(name);
        match Worker::new(&Conf::default()).run(src.text) {
            | Ok(outcome) => panic!("expected {} to fail, got {}", name, outcome),
            | Err(err) => err,
        }
    }
}

#[macro_export]
macro_rules! run_program {
    ($name:ident, $file:expr) => {
        #[test]
        fn $name() {
            ::tylam_tests::utils::run_program($file);
        }
    };
}

#[macro_export]
macro_rules! reject_program {
    ($name:ident, $file:expr, $err:pat) => {
        #[test]
        fn $name() {
            let err = ::tylam_tests::utils::program_error($file);
            assert!(matches!(err, $err), "unexpected error: {}", err);
        }
    };
}
