#[test]
fn pass_cases_compile() {
    let t = trybuild::TestCases::new();
    t.pass("tests/pass/*.rs");
}

#[test]
fn fail_cases_report_errors() {
    let t = trybuild::TestCases::new();
    t.compile_fail("tests/fail/*.rs");
}
