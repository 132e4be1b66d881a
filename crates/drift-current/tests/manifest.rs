// The solver only needs drift-trig's math. Its `cli` feature pulls in the
// report binary's crates, and Cargo unifies features, so leaving it on here
// would drag them into the WASM build too.

const MANIFEST: &str = include_str!("../Cargo.toml");

#[test]
fn drift_trig_dependency_leaves_cli_off() {
    let line = MANIFEST
        .lines()
        .find(|l| l.trim_start().starts_with("drift-trig"))
        .expect("drift-trig dependency line");
    assert!(line.contains("default-features = false"), "drift-trig pulls default features: {line}");
    assert!(!line.contains("\"cli\""), "drift-trig enables cli: {line}");
}
