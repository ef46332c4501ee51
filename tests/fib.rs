//! End-to-end exercise: Fibonacci over `Outcome`, recursive (propagating
//! through `try_outcome!`) and iterative.

use core::fmt;

use outcome_rail::{try_outcome, Outcome};

#[derive(Debug, PartialEq, Eq)]
struct NegativeInput(i32);

impl fmt::Display for NegativeInput {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "fibonacci is undefined for negative input {}", self.0)
    }
}

fn fib_recursive(n: i32) -> Outcome<i32, NegativeInput> {
    if n < 0 {
        return Outcome::Err(NegativeInput(n));
    }
    if n == 0 || n == 1 {
        return Outcome::Ok(1);
    }

    let n_1 = try_outcome!(fib_recursive(n - 1));
    let n_2 = try_outcome!(fib_recursive(n - 2));
    Outcome::Ok(n_1 + n_2)
}

fn fib_iterative(n: i32) -> Outcome<i32, NegativeInput> {
    if n < 0 {
        return Outcome::Err(NegativeInput(n));
    }

    let mut n_1 = 1;
    let mut n_2 = 0;
    for _ in 0..n {
        let next = n_1 + n_2;
        n_2 = n_1;
        n_1 = next;
    }
    Outcome::Ok(n_1)
}

#[test]
fn recursive_fib_of_ten_is_eighty_nine() {
    assert_eq!(fib_recursive(10).unwrap(), 89);
}

#[test]
#[should_panic(expected = "fibonacci is undefined for negative input -10")]
fn recursive_fib_of_negative_input_panics_on_unwrap() {
    fib_recursive(-10).unwrap();
}

#[test]
fn iterative_fib_of_ten_is_eighty_nine() {
    assert_eq!(fib_iterative(10).unwrap(), 89);
}

#[test]
#[should_panic(expected = "fibonacci is undefined for negative input -10")]
fn iterative_fib_of_negative_input_panics_on_unwrap() {
    fib_iterative(-10).unwrap();
}

#[test]
fn both_renditions_agree() {
    for n in 0..15 {
        assert_eq!(
            fib_recursive(n).unwrap(),
            fib_iterative(n).unwrap(),
            "disagreement at n = {n}"
        );
    }
}

fn by_two(v: i32) -> i32 {
    v * 2
}

fn by_two_checked(v: i32) -> Outcome<i32, NegativeInput> {
    Outcome::Ok(v * 2)
}

#[test]
fn doubling_fib_of_zero_six_times_via_map_res() {
    let doubled = fib_recursive(0)
        .map_res(by_two)
        .map_res(by_two)
        .map_res(by_two)
        .map_res(by_two)
        .map_res(by_two)
        .map_res(by_two);
    assert_eq!(doubled.unwrap(), 64);
}

#[test]
fn doubling_fib_of_zero_six_times_via_and_then() {
    let doubled = fib_recursive(0)
        .and_then(by_two_checked)
        .and_then(by_two_checked)
        .and_then(by_two_checked)
        .and_then(by_two_checked)
        .and_then(by_two_checked)
        .and_then(by_two_checked);
    assert_eq!(doubled.unwrap(), 64);
}

#[test]
fn map_res_can_narrow_the_value_type() {
    let c = fib_recursive(10).map_res(|v| v as u8).unwrap();
    assert_eq!(c, 89u8);
}

#[test]
#[should_panic(expected = "fib domain error")]
fn failed_fib_mapped_through_layers_surfaces_the_outer_error() {
    fib_recursive(-1)
        .and_then(by_two_checked)
        .map_err(|_| "fib domain error")
        .unwrap();
}
