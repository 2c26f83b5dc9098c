use super::cli::get_app;

#[test]
fn can_build_app_with_subcommands() {
    let app = get_app();

    let names = app.get_subcommands().map(|command| command.get_name()).collect::<Vec<_>>();

    assert_eq!(names, vec!["solve", "generate"]);
}

#[test]
fn can_parse_solve_subcommand() {
    let matches = get_app().try_get_matches_from(vec!["ufl", "solve", "matrix", "problem.txt"]).unwrap();

    assert_eq!(matches.subcommand_name(), Some("solve"));
}

#[test]
fn can_reject_unknown_subcommand() {
    assert!(get_app().try_get_matches_from(vec!["ufl", "import", "matrix"]).is_err());
}
