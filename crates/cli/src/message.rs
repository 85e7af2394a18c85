use ces_consumer::{Error, Parameters, Report};
use serde_json::{Value, json};

/// Echoes the parameters back to the user.
#[must_use]
pub fn summary(parameters: &Parameters) -> String {
    let Parameters { a, p, px, py, m } = parameters;
    format!("You entered the parameters a={a}, p={p}, px={px}, py={py}, and m={m}.")
}

/// Returns the user-facing message for a solve result.
///
/// Quantities are rounded to two decimals here and nowhere else.
#[must_use]
pub fn message(result: &Result<Report, Error>) -> String {
    match result {
        Ok(report) => format!(
            "The consumer buys {:.2} units of Good X and {:.2} units of Good Y.",
            report.bundle.x, report.bundle.y
        ),
        Err(Error::InvalidParameter(err)) => err.to_string(),
        Err(Error::SolverInapplicable(_)) => {
            "This tool is currently unable to solve the consumer problem for these parameters."
                .to_owned()
        }
        Err(Error::Degenerate { .. }) => "All points on the budget line are optimal.".to_owned(),
    }
}

/// Builds the `--json` document for a solve result.
#[must_use]
pub fn json_output(parameters: &Parameters, result: &Result<Report, Error>) -> Value {
    let status = match result {
        Ok(_) => "solved",
        Err(Error::InvalidParameter(_)) => "invalid_parameter",
        Err(Error::SolverInapplicable(_)) => "solver_inapplicable",
        Err(Error::Degenerate { .. }) => "degenerate",
    };

    let mut output = json!({
        "status": status,
        "parameters": parameters,
        "message": message(result),
    });
    if let Ok(report) = result {
        output["report"] = json!(report);
    }
    output
}
