use crate::{
    console::{
        handler::{DispatcherBuilder, SimpleProgram},
        input::Session,
        output::{format_row, Report},
    },
    errors::ExerciseError,
    utils::cpu::{
        armstrong::is_armstrong,
        matrix::{interchange, Grid3},
        palindrome::is_palindrome,
    },
};

fn read_named_grid(session: &mut Session<'_>, name: &str) -> Result<Grid3, ExerciseError> {
    session.prompt(&format!("Enter 9 integers for matrix {}:\n", name))?;
    session.read_grid::<3>(&format!("matrix {}", name))
}

fn matrix_3x3_ops(session: &mut Session<'_>) -> Result<Report, ExerciseError> {
    let method = session.config().prime_method;
    session.prompt("Enter 9 integers (3x3 matrix row-wise):\n")?;
    let m: Grid3 = session.read_grid("3x3 matrix")?;

    let stats = m.stats_with(method);
    let mut report = Report::new().blank().line("Matrix:");
    for (row, sum) in m.rows().iter().zip(stats.row_sums) {
        report.push(format!("{}    | row sum = {}", format_row(row), sum));
    }
    report.push("");
    report.push(format!("Total sum of elements = {}", stats.total));
    report.push(format!(
        "Positive count = {}, Negative count = {}",
        stats.positive, stats.negative
    ));
    report.push(format!("Prime count in matrix = {}", stats.primes));
    report.push("");

    for val in m.cells() {
        let pal = if is_palindrome(val) { "Palindrome" } else { "Not Palindrome" };
        let arm = if is_armstrong(val) { "Armstrong" } else { "Not Armstrong" };
        report.push(format!("{}: {}, {}", val, pal, arm));
    }

    let d = m.diagonals();
    report.push("");
    report.push(format!(
        "Main diagonal sum = {}, Secondary diag sum = {}, Combined (no double count) = {}",
        d.main, d.secondary, d.combined
    ));

    let report = report
        .blank()
        .line("Transpose:")
        .grid(&m.transpose())
        .blank()
        .line("Sorted ascending (3x3):")
        .grid(&m.sorted());
    Ok(report)
}

fn matrix_interchange(session: &mut Session<'_>) -> Result<Report, ExerciseError> {
    let mut a = read_named_grid(session, "A")?;
    let mut b = read_named_grid(session, "B")?;

    interchange(&mut a, &mut b);

    Ok(Report::new()
        .blank()
        .line("After interchange, matrix A:")
        .grid(&a)
        .blank()
        .line("After interchange, matrix B:")
        .grid(&b))
}

fn matrix_multiply(session: &mut Session<'_>) -> Result<Report, ExerciseError> {
    let a = read_named_grid(session, "A")?;
    let b = read_named_grid(session, "B")?;

    let c = a
        .multiply(&b)
        .ok_or_else(|| {
            ExerciseError::Overflow("product A x B does not fit in 64-bit cells".into())
        })?;

    Ok(Report::new()
        .blank()
        .line("Product matrix C = A x B:")
        .grid(&c)
        .line(format!("Result sha256 = {}", c.fingerprint())))
}

pub fn register(builder: DispatcherBuilder) -> DispatcherBuilder {
    builder
        .program(
            "matrix_3x3_ops",
            SimpleProgram::new(
                "sums, counts, diagonals, transpose and sort of a 3x3 matrix",
                matrix_3x3_ops,
            ),
        )
        .program(
            "matrix_interchange",
            SimpleProgram::new("swap two 3x3 matrices", matrix_interchange),
        )
        .program(
            "matrix_multiply",
            SimpleProgram::new("product of two 3x3 matrices", matrix_multiply),
        )
}
