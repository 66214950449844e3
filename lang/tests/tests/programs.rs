use tylam_driver::RunError;
use tylam_tests::{reject_program, run_program};

run_program!(factorial, "fact");
run_program!(fixed_point_factorial, "fact_fix");
run_program!(shadowing, "shadowing");
run_program!(closure, "closure");
run_program!(fibonacci, "fib");
run_program!(gcd, "gcd");
run_program!(compose, "compose");
run_program!(collatz, "collatz");
run_program!(xor, "xor");
run_program!(partial_adder, "adder");

reject_program!(unbound, "unbound", RunError::ResolveError(_));
reject_program!(unclosed_paren, "unclosed", RunError::ParseError(_));
reject_program!(illegal_char, "illegal_char", RunError::LexError(_));
reject_program!(self_application_needs_any, "self_app", RunError::TyckError(_));
reject_program!(
    division_by_zero,
    "div_zero",
    RunError::EvalError(tylam_dynamics::EvalError::DivisionByZero)
);
