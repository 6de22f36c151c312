use tracing::debug;

use crate::{
    console::{
        handler::{DispatcherBuilder, SimpleProgram},
        input::Session,
        output::Report,
    },
    errors::ExerciseError,
    utils::cpu::{
        armstrong::is_armstrong,
        factorial::{factorial, factorial_big, FactorialError},
        is_prime::is_prime_with,
        palindrome::is_palindrome,
    },
};

pub const ARRAY_LEN: usize = 10;

/// Past this, n! runs to thousands of digits and is not printed.
pub const BIG_FACTORIAL_LIMIT: i64 = 1000;

fn read_ten(session: &mut Session<'_>) -> Result<[i64; ARRAY_LEN], ExerciseError> {
    session.prompt("Enter 10 integers:\n")?;
    session.read_values::<ARRAY_LEN>("10 integers")
}

fn array_check_prime(session: &mut Session<'_>) -> Result<Report, ExerciseError> {
    let method = session.config().prime_method;
    let values = read_ten(session)?;

    let mut report = Report::new();
    for v in values {
        if is_prime_with(v, method) {
            report.push(format!("{} is Prime", v));
        } else {
            report.push(format!("{} is not Prime", v));
        }
    }
    Ok(report)
}

fn array_check_palindrome(session: &mut Session<'_>) -> Result<Report, ExerciseError> {
    let values = read_ten(session)?;

    let mut report = Report::new();
    for v in values {
        let verdict = if is_palindrome(v) { "is Palindrome" } else { "is not Palindrome" };
        report.push(format!("{} {}", v, verdict));
    }
    Ok(report)
}

fn array_check_armstrong(session: &mut Session<'_>) -> Result<Report, ExerciseError> {
    let values = read_ten(session)?;

    let mut report = Report::new();
    for v in values {
        let verdict = if is_armstrong(v) { "is Armstrong" } else { "is not Armstrong" };
        report.push(format!("{} {}", v, verdict));
    }
    Ok(report)
}

fn check_pal_arm_prime(session: &mut Session<'_>) -> Result<Report, ExerciseError> {
    let method = session.config().prime_method;
    let values = read_ten(session)?;

    let mut report = Report::new();
    for v in values {
        let pal = if is_palindrome(v) { "Palindrome" } else { "Not Palindrome" };
        let arm = if is_armstrong(v) { "Armstrong" } else { "Not Armstrong" };
        let prime = if is_prime_with(v, method) { "Prime" } else { "Not Prime" };
        report.push(format!("{}: {}, {}, {}", v, pal, arm, prime));
    }
    Ok(report)
}

fn factorials_of_10(session: &mut Session<'_>) -> Result<Report, ExerciseError> {
    let values = read_ten(session)?;

    let mut report = Report::new();
    for n in values {
        match factorial(n) {
            Ok(f) => report.push(format!("{}! = {}", n, f)),
            Err(FactorialError::Negative(_)) => {
                report.push(format!("{}: Factorial undefined for negative numbers.", n))
            }
            Err(FactorialError::Overflow(_)) if n <= BIG_FACTORIAL_LIMIT => {
                debug!(n, "factorial exceeds u64, computing exactly");
                report.push(format!("{}! = {}", n, factorial_big(n as u64)));
            }
            Err(FactorialError::Overflow(_)) => {
                report.push(format!("{}! is too large to display.", n))
            }
        }
    }
    Ok(report)
}

fn count_two_digit(session: &mut Session<'_>) -> Result<Report, ExerciseError> {
    let values = read_ten(session)?;
    let count = values
        .iter()
        .filter(|v| (10..=99).contains(&v.unsigned_abs()))
        .count();
    Ok(Report::new().line(format!("Two-digit numbers count = {}", count)))
}

fn min_of_10(session: &mut Session<'_>) -> Result<Report, ExerciseError> {
    let values = read_ten(session)?;
    let min = values.iter().copied().min().unwrap_or(i64::MAX);
    Ok(Report::new().line(format!("Minimum = {}", min)))
}

fn tables_of_10(session: &mut Session<'_>) -> Result<Report, ExerciseError> {
    let values = read_ten(session)?;

    let mut report = Report::new();
    for n in values {
        report.push(format!("Table of {}:", n));
        for j in 1..=10i64 {
            match n.checked_mul(j) {
                Some(p) => report.push(format!("{} x {} = {}", n, j, p)),
                None => report.push(format!("{} x {} = overflow", n, j)),
            }
        }
        report.push("");
    }
    Ok(report)
}

pub fn register(builder: DispatcherBuilder) -> DispatcherBuilder {
    builder
        .program(
            "array_check_prime",
            SimpleProgram::new("primality of 10 integers", array_check_prime),
        )
        .program(
            "array_check_palindrome",
            SimpleProgram::new("palindrome check of 10 integers", array_check_palindrome),
        )
        .program(
            "array_check_armstrong",
            SimpleProgram::new("Armstrong check of 10 integers", array_check_armstrong),
        )
        .program(
            "check_pal_arm_prime",
            SimpleProgram::new(
                "palindrome, Armstrong and prime checks of 10 integers",
                check_pal_arm_prime,
            ),
        )
        .program(
            "factorials_of_10",
            SimpleProgram::new("factorial of 10 integers", factorials_of_10),
        )
        .program(
            "count_two_digit",
            SimpleProgram::new("count two-digit values among 10 integers", count_two_digit),
        )
        .program("min_of_10", SimpleProgram::new("minimum of 10 integers", min_of_10))
        .program(
            "tables_of_10",
            SimpleProgram::new("multiplication tables of 10 integers", tables_of_10),
        )
        .alias("first_even_of_10", "tables_of_10")
}

#[cfg(test)]
mod tests {
    use crate::console::programs::programs::testing::{run_program, run_program_with};
    use crate::errors::ExerciseError;
    use crate::runner::RunnerConfig;
    use crate::utils::cpu::is_prime::PrimeMethod;

    #[test]
    fn test_array_check_prime() {
        let lines = run_program("array_check_prime", "2 3 4 17 1 0 -7 97 100 7919").unwrap();
        assert_eq!(
            lines,
            [
                "2 is Prime",
                "3 is Prime",
                "4 is not Prime",
                "17 is Prime",
                "1 is not Prime",
                "0 is not Prime",
                "-7 is not Prime",
                "97 is Prime",
                "100 is not Prime",
                "7919 is Prime",
            ]
        );
    }

    #[test]
    fn test_prime_method_from_config_gives_same_answers() {
        let input = "561 1105 13 15 21 23 1729 31 2465 47";
        let trial = run_program("array_check_prime", input).unwrap();
        let cfg = RunnerConfig {
            prime_method: PrimeMethod::MillerRabin,
            show_prompts: false,
            ..RunnerConfig::default()
        };
        let mr = run_program_with("array_check_prime", input, cfg).unwrap();
        assert_eq!(trial, mr);
    }

    #[test]
    fn test_array_check_palindrome() {
        let input = "0 121 123 -121 7 1001 10 44 45 12321";
        let lines = run_program("array_check_palindrome", input).unwrap();
        assert_eq!(lines[0], "0 is Palindrome");
        assert_eq!(lines[1], "121 is Palindrome");
        assert_eq!(lines[2], "123 is not Palindrome");
        assert_eq!(lines[3], "-121 is not Palindrome");
        assert_eq!(lines[9], "12321 is Palindrome");
    }

    #[test]
    fn test_array_check_armstrong() {
        let input = "153 9474 10 0 370 371 407 -153 1634 100";
        let lines = run_program("array_check_armstrong", input).unwrap();
        assert_eq!(lines[0], "153 is Armstrong");
        assert_eq!(lines[1], "9474 is Armstrong");
        assert_eq!(lines[2], "10 is not Armstrong");
        assert_eq!(lines[3], "0 is Armstrong");
        assert_eq!(lines[7], "-153 is not Armstrong");
        assert_eq!(lines[9], "100 is not Armstrong");
    }

    #[test]
    fn test_check_pal_arm_prime() {
        let lines = run_program("check_pal_arm_prime", "7 153 11 -5 12 0 1 2 9474 101").unwrap();
        assert_eq!(lines[0], "7: Palindrome, Armstrong, Prime");
        assert_eq!(lines[1], "153: Not Palindrome, Armstrong, Not Prime");
        assert_eq!(lines[2], "11: Palindrome, Not Armstrong, Prime");
        assert_eq!(lines[3], "-5: Not Palindrome, Not Armstrong, Not Prime");
        assert_eq!(lines[4], "12: Not Palindrome, Not Armstrong, Not Prime");
        assert_eq!(lines[9], "101: Palindrome, Not Armstrong, Prime");
    }

    #[test]
    fn test_factorials_of_10() {
        let lines = run_program("factorials_of_10", "0 5 -3 20 21 1 2 10 25 5000").unwrap();
        assert_eq!(lines[0], "0! = 1");
        assert_eq!(lines[1], "5! = 120");
        assert_eq!(lines[2], "-3: Factorial undefined for negative numbers.");
        assert_eq!(lines[3], "20! = 2432902008176640000");
        assert_eq!(lines[4], "21! = 51090942171709440000");
        assert_eq!(lines[8], "25! = 15511210043330985984000000");
        assert_eq!(lines[9], "5000! is too large to display.");
    }

    #[test]
    fn test_count_two_digit() {
        let lines = run_program("count_two_digit", "5 10 99 100 -42 -9 -100 55 0 123").unwrap();
        assert_eq!(lines, ["Two-digit numbers count = 4"]);
    }

    #[test]
    fn test_min_of_10() {
        let lines = run_program("min_of_10", "5 -3 8 0 12 -3 7 9 1 2").unwrap();
        assert_eq!(lines, ["Minimum = -3"]);
    }

    #[test]
    fn test_tables_of_10() {
        let lines = run_program("tables_of_10", "3 0 0 0 0 0 0 0 0 9223372036854775807").unwrap();
        assert_eq!(lines[0], "Table of 3:");
        assert_eq!(lines[1], "3 x 1 = 3");
        assert_eq!(lines[10], "3 x 10 = 30");
        assert_eq!(lines[11], "");
        // 10 values, 12 lines each
        assert_eq!(lines.len(), 120);
        assert_eq!(lines[109], "9223372036854775807 x 1 = 9223372036854775807");
        assert_eq!(lines[110], "9223372036854775807 x 2 = overflow");
    }

    #[test]
    fn test_first_even_alias_runs_tables() {
        let input = "1 2 3 4 5 6 7 8 9 10";
        assert_eq!(
            run_program("first_even_of_10", input).unwrap(),
            run_program("tables_of_10", input).unwrap()
        );
    }

    #[test]
    fn test_malformed_input_fails_fast() {
        let err = run_program("min_of_10", "1 2 three 4").unwrap_err();
        assert!(matches!(err, ExerciseError::BadInput(_)));

        let err = run_program("min_of_10", "1 2 3").unwrap_err();
        assert_eq!(err.to_string(), "UnexpectedEof: expected 10 integers (got 3 of 10)");
    }
}
