// Integration testing can be done either by calling library functions directly or by invoking your CLI as a subprocess.
const EXPECTED_OUTPUT: &str = "\
Project structure for BioDash:

biodash/
  - package.json
  - vite.config.mjs
  - tailwind.config.mjs
  - postcss.config.js
  - .gitignore
  - README.md
  - public/
  - src/

biodash/public/
  - vite.svg

biodash/src/
  - main.jsx
  - App.jsx
  - index.css
  - components/
  - pages/
  - lib/

biodash/src/components/
  - Layout.jsx
  - ThemeProvider.jsx
  - ui/

biodash/src/components/ui/
  - button.jsx
  - card.jsx
  - input.jsx
  - table.jsx
  - textarea.jsx

biodash/src/pages/
  - Dashboard.jsx
  - Supplements.jsx
  - Interactions.jsx
  - Transparency.jsx
  - HealthLog.jsx
  - Auth.jsx

biodash/src/lib/
  - data.js
  - utils.js
";

#[test]
fn prints_biodash_structure() {
    let mut cmd = assert_cmd::Command::cargo_bin("uitleg").unwrap();

    cmd.assert().success().stdout(EXPECTED_OUTPUT);
}

#[test]
fn output_starts_with_header() {
    let mut cmd = assert_cmd::Command::cargo_bin("uitleg").unwrap();

    cmd.assert()
        .success()
        .stdout(predicates::str::starts_with("Project structure for BioDash:"));
}

#[test]
fn repeated_runs_are_identical() {
    let first = assert_cmd::Command::cargo_bin("uitleg")
        .unwrap()
        .output()
        .unwrap();
    let second = assert_cmd::Command::cargo_bin("uitleg")
        .unwrap()
        .output()
        .unwrap();

    assert!(first.status.success());
    assert!(second.status.success());
    assert_eq!(first.stdout, second.stdout);
}
