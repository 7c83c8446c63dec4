use gdl_script::{classify, evaluate, normalize, parse_for_header, split_args, Environment, Statement};

#[test]
fn normalized_script_classifies_line_by_line() {
    let script = "\
! simple shelf
N = 3
FOR i = 1 TO N
  ADDZ 0.4,
       ! continuation survives comments
  BLOCK 1, 0.3, 0.02
NEXT i
";
    let lines = normalize(script);
    let kinds: Vec<Statement> = lines.iter().map(|l| classify(&l.text)).collect();

    assert_eq!(lines.len(), 4);
    assert!(matches!(kinds[0], Statement::Assignment { name: "N", .. }));
    assert_eq!(kinds[1], Statement::For);
    assert_eq!(lines[2].line, 4);
    assert_eq!(lines[2].text, "ADDZ 0.4, BLOCK 1, 0.3, 0.02");
    assert_eq!(kinds[3], Statement::Next);
}

#[test]
fn for_header_bounds_evaluate_against_environment() {
    let mut env = Environment::new();
    env.set("N", 4.0);
    let header = parse_for_header("FOR K = N / 2 TO N * 2 STEP N - 3").unwrap();
    assert_eq!(evaluate(header.start, &env).unwrap(), 2.0);
    assert_eq!(evaluate(header.end, &env).unwrap(), 8.0);
    assert_eq!(evaluate(header.step.unwrap(), &env).unwrap(), 1.0);
}

#[test]
fn arguments_evaluate_independently() {
    let env = Environment::new();
    let values: Vec<_> = split_args("1, MAX(2, 3) * 2, , 4")
        .into_iter()
        .map(|arg| evaluate(arg, &env))
        .collect();
    assert_eq!(values[0], Ok(1.0));
    assert_eq!(values[1], Ok(6.0));
    assert!(values[2].is_err());
    assert_eq!(values[3], Ok(4.0));
}
