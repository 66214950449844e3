use pretty_assertions::assert_eq;
use tylam_driver::{RunError, check, parse, run};
use tylam_dynamics::EvalError;
use tylam_surface::scoped::check_bound;

#[test]
fn parsing_is_deterministic() {
    for source in [
        "let x = 1 in let x = 2 in x",
        "f x y + 1 < g (h 2) * 3",
        "let rec f (n: int): int -> bool = fun (m: int) -> n < m in f 1 2",
    ] {
        assert_eq!(parse(source).unwrap(), parse(source).unwrap());
    }
}

#[test]
fn printed_programs_parse_back() {
    let source = "let rec f (n: int): int = if n < 2 then 1 else n * f (n - 1) in (fun (g: int -> int) -> g 3) f";
    let expr = parse(source).unwrap();
    assert_eq!(parse(&expr.to_string()).unwrap(), expr);
}

#[test]
fn binder_accepts_exactly_the_closed_programs() {
    let closed = ["fun (x: int) -> x", "let rec f (n: int): int = f n in f", "let y = 1 in y"];
    let open = ["x + 1", "let y = y in 1", "let rec f (n: int): int = 1 in n"];
    for source in closed {
        assert!(check_bound(&parse(source).unwrap()), "{}", source);
    }
    for source in open {
        assert!(!check_bound(&parse(source).unwrap()), "{}", source);
    }
}

#[test]
fn unbound_program_never_evaluates() {
    // evaluating would divide by zero first
    assert!(matches!(run("(1 / 0) + x"), Err(RunError::ResolveError(_))));
}

#[test]
fn arithmetic_agrees_with_i64() {
    let pairs = [(7, 2), (-7, 2), (7, -2), (-7, -2), (0, 5), (123456789, 1000)];
    for (a, b) in pairs {
        let lit = |n: i64| if n < 0 { format!("(0 - {})", -n) } else { n.to_string() };
        let (x, y) = (lit(a), lit(b));
        let int = |op: &str| run(&format!("{} {} {}", x, op, y)).unwrap().as_int().unwrap();
        let boolean = |op: &str| run(&format!("{} {} {}", x, op, y)).unwrap().as_bool().unwrap();
        assert_eq!(int("+"), a + b);
        assert_eq!(int("-"), a - b);
        assert_eq!(int("*"), a * b);
        assert_eq!(int("/"), a / b);
        assert_eq!(int("mod"), a % b);
        assert_eq!(boolean("<"), a < b);
        assert_eq!(boolean("<="), a <= b);
        assert_eq!(boolean(">"), a > b);
        assert_eq!(boolean(">="), a >= b);
    }
}

#[test]
fn well_typed_programs_do_not_get_stuck() {
    let programs = [
        "if 1 < 2 then fun (x: int) -> x else fun (y: int) -> y + 1",
        "let rec even (n: int): bool = if n < 1 then true else if n < 2 then false else even (n - 2) in even 10",
        "(fun (f: int -> bool) -> f 3) (fun (x: int) -> x >= 3)",
        "let b = true in if b <= false then 1 else 2",
    ];
    for source in programs {
        check(source).unwrap();
        match run(source) {
            | Ok(_) => {}
            | Err(RunError::EvalError(
                EvalError::NonBoolGuard { .. }
                | EvalError::IllegalOperands { .. }
                | EvalError::NotAFunction { .. }
                | EvalError::UnboundVar(_),
            )) => panic!("{} got stuck", source),
            | Err(err) => panic!("{}: {}", source, err),
        }
    }
}

#[test]
fn any_escapes_the_checker_but_not_the_evaluator() {
    assert!(matches!(check("fun (x: int) -> x x"), Err(RunError::TyckError(_))));
    let (_, ty) = check("(fun (x: any) -> x x) 1").unwrap();
    assert_eq!(ty.to_string(), "any");
    assert!(matches!(
        run("(fun (x: any) -> x x) 1"),
        Err(RunError::EvalError(EvalError::NotAFunction { .. }))
    ));
}

#[test]
fn division_by_zero_is_an_eval_error() {
    assert!(matches!(run("1 mod 0"), Err(RunError::EvalError(EvalError::DivisionByZero))));
}
