use std::io::Write as _;

use ces_cli::{Args, InputError, ParameterFile, json_output, message, resolve_parameters, summary};
use ces_consumer::{CurveConfig, Parameter, Parameters, solve};
use clap::Parser as _;

fn parse(args: &[&str]) -> Args {
    Args::try_parse_from(std::iter::once("ces-solve").chain(args.iter().copied()))
        .expect("arguments should parse")
}

fn outcome(a: f64, p: f64, px: f64, py: f64, m: f64) -> String {
    message(&solve(&Parameters { a, p, px, py, m }, &CurveConfig::default()))
}

#[test]
fn flags_provide_all_parameters() {
    let args = parse(&["--a", "0.5", "--p", "-1", "--px", "1", "--py", "2", "--m", "10"]);
    let parameters = resolve_parameters(&args).unwrap();

    assert_eq!(
        parameters,
        Parameters {
            a: 0.5,
            p: -1.0,
            px: 1.0,
            py: 2.0,
            m: 10.0
        }
    );
    assert_eq!(args.samples, 1_000);
}

#[test]
fn flags_override_parameter_file() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, "a = 0.3\np = 0\npx = 1\npy = 1\nm = 10").unwrap();
    let path = file.path().to_str().unwrap();

    let args = parse(&["--params", path, "--m", "20"]);
    let parameters = resolve_parameters(&args).unwrap();

    assert_eq!(parameters.a, 0.3);
    assert_eq!(parameters.p, 0.0);
    assert_eq!(parameters.m, 20.0);
}

#[test]
fn missing_parameter_is_named() {
    let args = parse(&["--a", "0.5", "--p", "0", "--px", "1", "--m", "10"]);
    let err = resolve_parameters(&args).unwrap_err();

    assert!(matches!(err, InputError::Missing(Parameter::Py)));
    assert_eq!(
        err.to_string(),
        "missing value for 'py' (pass --py or set it in the parameter file)"
    );
}

#[test]
fn unknown_keys_in_parameter_file_are_rejected() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, "alpha = 0.3").unwrap();

    let err = ParameterFile::load(file.path()).unwrap_err();
    assert!(matches!(err, InputError::Parse { .. }));
}

#[test]
fn unreadable_parameter_file_is_reported() {
    let dir = tempfile::tempdir().unwrap();
    let err = ParameterFile::load(&dir.path().join("missing.toml")).unwrap_err();

    assert!(matches!(err, InputError::Read { .. }));
}

#[test]
fn messages_for_each_outcome() {
    assert_eq!(
        outcome(0.5, 0.0, 1.0, 1.0, 10.0),
        "The consumer buys 5.00 units of Good X and 5.00 units of Good Y."
    );
    assert_eq!(
        outcome(0.3, 1.0, 1.0, 1.0, 10.0),
        "The consumer buys 0.00 units of Good X and 10.00 units of Good Y."
    );
    assert_eq!(
        outcome(0.5, 1.0, 1.0, 1.0, 10.0),
        "All points on the budget line are optimal."
    );
    assert_eq!(
        outcome(0.5, 0.5, 1e-300, 1.0, 1e300),
        "This tool is currently unable to solve the consumer problem for these parameters."
    );
    assert_eq!(
        outcome(1.0, 0.0, 1.0, 1.0, 10.0),
        "'a' must be strictly between 0 and 1"
    );
}

#[test]
fn summary_echoes_parameters() {
    let parameters = Parameters {
        a: 0.5,
        p: 0.0,
        px: 1.0,
        py: 2.5,
        m: 10.0,
    };

    assert_eq!(
        summary(&parameters),
        "You entered the parameters a=0.5, p=0, px=1, py=2.5, and m=10."
    );
}

#[test]
fn json_output_carries_status() {
    let parameters = Parameters {
        a: 0.5,
        p: 1.0,
        px: 1.0,
        py: 1.0,
        m: 10.0,
    };
    let json = json_output(&parameters, &solve(&parameters, &CurveConfig::default()));

    assert_eq!(json["status"], "degenerate");
    assert_eq!(json["parameters"]["m"], 10.0);
    assert!(json.get("report").is_none());

    let parameters = Parameters { p: 0.0, ..parameters };
    let json = json_output(&parameters, &solve(&parameters, &CurveConfig::default()));

    assert_eq!(json["status"], "solved");
    assert_eq!(json["report"]["corner"], false);
    assert_eq!(json["report"]["curves"]["x"].as_array().unwrap().len(), 1_000);
}
