use crate::{
    console::{
        handler::{DispatcherBuilder, SimpleProgram},
        input::Session,
        output::Report,
    },
    errors::ExerciseError,
    utils::math::{digit_count, three_digits},
};

fn largest_of_three(num: i64) -> i64 {
    let [a, b, c] = three_digits(num);
    a.max(b).max(c)
}

fn maxof3(session: &mut Session<'_>) -> Result<Report, ExerciseError> {
    session.prompt("Enter a 3-digit number: ")?;
    let num = session.read_i64("a 3-digit number")?;
    Ok(Report::new().line(format!("Largest digit is: {}", largest_of_three(num))))
}

fn maxof3_switch(session: &mut Session<'_>) -> Result<Report, ExerciseError> {
    session.prompt("Enter a 3-digit number: ")?;
    let num = session.read_i64("a 3-digit number")?;

    let line = match largest_of_three(num) {
        largest @ 0..=9 => format!("Largest digit is: {}", largest),
        _ => "Invalid input!".to_string(),
    };
    Ok(Report::new().line(line))
}

fn two_digit_switch(session: &mut Session<'_>) -> Result<Report, ExerciseError> {
    session.prompt("Enter a number: ")?;
    let num = session.read_i64("a number")?;

    let line = match digit_count(num) {
        2 => format!("{} is a 2-digit number.", num),
        _ => format!("{} is NOT a 2-digit number.", num),
    };
    Ok(Report::new().line(line))
}

pub fn register(builder: DispatcherBuilder) -> DispatcherBuilder {
    builder
        .program("maxof3", SimpleProgram::new("largest digit of a 3-digit number", maxof3))
        .program(
            "maxof3_switch",
            SimpleProgram::new(
                "largest digit of a 3-digit number, rejecting other sizes",
                maxof3_switch,
            ),
        )
        .program(
            "2digit_switch",
            SimpleProgram::new("is a number two digits long", two_digit_switch),
        )
}
