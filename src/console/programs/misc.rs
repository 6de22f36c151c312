use tracing::debug;

use crate::{
    console::{
        handler::{DispatcherBuilder, SimpleProgram},
        input::Session,
        output::Report,
    },
    errors::ExerciseError,
    utils::{hash::hash_text, plot::plot_parabola, text::c_style_copy},
};

// max_no: y = ax^2 + bx + c drawn with '*'
fn parabola(session: &mut Session<'_>) -> Result<Report, ExerciseError> {
    let size = session.config().plot;
    session.prompt("Enter coefficients a, b, c for parabola y = ax^2 + bx + c: ")?;
    let [a, b, c] = session.read_values::<3>("coefficients a, b, c")?;

    debug!(a, b, c, width = size.width, height = size.height, "plotting parabola");
    let mut report = Report::new();
    for row in plot_parabola(a, b, c, size) {
        report.push(row);
    }
    Ok(report)
}

fn string_copy(session: &mut Session<'_>) -> Result<Report, ExerciseError> {
    session.prompt("Enter a string:\n")?;
    let src = session.read_line("a line of text")?;

    let dest = src.clone();
    let buf = c_style_copy(&src);

    Ok(Report::new()
        .line(format!("Source: {}", src))
        .line(format!("Copied into dest: {}", dest))
        .line(format!("C-style copied string: {}", buf))
        .line(format!("sha256(dest) = {}", hash_text(&dest))))
}

pub fn register(builder: DispatcherBuilder) -> DispatcherBuilder {
    builder
        .program("max_no", SimpleProgram::new("ASCII plot of y = ax^2 + bx + c", parabola))
        .program(
            "string_copy",
            SimpleProgram::new("copy a line of text, whole and C-style", string_copy),
        )
}
