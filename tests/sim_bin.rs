use std::process::Command;

#[test]
fn sim_binary_smoke() {
    let output = Command::new(env!("CARGO_BIN_EXE_sim"))
        .args(["1", "5"])
        .output()
        .expect("failed to run sim binary");
    assert!(output.status.success());
    let stdout = String::from_utf8(output.stdout).expect("non utf8 output");
    let v: serde_json::Value = serde_json::from_str(stdout.trim()).expect("invalid json");
    assert_eq!(v["games"], 5);
    assert_eq!(v["shots"].as_array().map(|a| a.len()), Some(5));
    let max = v["max"].as_u64().expect("max is a number");
    assert!(max <= 100);
    assert!(v["min"].as_u64().unwrap() >= 30);
    // The winning shot always sinks the last ship.
    assert!(v["final_shots"][0]["result"]["HitAndSunk"].is_u64());
}

#[test]
fn sim_binary_rejects_bad_args() {
    let output = Command::new(env!("CARGO_BIN_EXE_sim"))
        .output()
        .expect("failed to run sim binary");
    assert!(!output.status.success());
}
